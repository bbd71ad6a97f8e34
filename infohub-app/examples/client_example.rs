//! Client example demonstrating the API against a locally started server.
//!
//! Run with: cargo run -p infohub-app --example client_example
//!
//! No OpenWeather key is configured here, so the weather call demonstrates
//! the misconfiguration error. Conversion and quotes hit the real upstreams
//! when the network allows; the quote endpoint always answers thanks to its
//! built-in fallback.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use infohub_client::InfoHubClient;
use infohub_hex::{InfoHubService, inbound::HttpServer};
use infohub_types::QuoteSource;
use infohub_upstream::{FrankfurterClient, OpenWeatherClient, QuotableClient, ZenQuotesClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    let timeout = Duration::from_secs(5);
    let rates = FrankfurterClient::new(timeout)?;
    let quote_sources: Vec<Box<dyn QuoteSource>> = vec![
        Box::new(QuotableClient::new(timeout)?),
        Box::new(ZenQuotesClient::new(timeout)?),
    ];

    // Start server in background
    let service: InfoHubService<OpenWeatherClient, _> =
        InfoHubService::new(None, rates, quote_sources);
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = InfoHubClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: every endpoint
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Weather without a configured key answers with a 500
    let response = client.weather("Kolkata").await;
    assert!(response.is_err());
    println!("✅ Weather without key: {}", response.unwrap_err());

    // Currency conversion via the live rate provider
    match client.convert("INR", "USD", 100.0).await {
        Ok(result) => println!(
            "✅ Converted {} {} -> {:.4} {} (rate {})",
            result.amount, result.from, result.converted, result.to, result.rate
        ),
        Err(err) => println!("⚠️ Conversion unavailable: {err}"),
    }

    // Quotes always answer, falling back to the built-in one if needed
    let quote = client.quote().await?;
    println!("✅ Quote: \"{}\" - {}", quote.content, quote.author);

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
