//! # InfoHub Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the upstream provider clients
//! - Create the InfoHub service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infohub_hex::{InfoHubService, inbound::HttpServer};
use infohub_types::QuoteSource;
use infohub_upstream::{FrankfurterClient, OpenWeatherClient, QuotableClient, ZenQuotesClient};

fn init_tracer() -> (sdktrace::Tracer, sdktrace::SdkTracerProvider) {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP span exporter");

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    (provider.tracer("infohub-server"), provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer();
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,infohub_app=debug,infohub_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting InfoHub server on port {}", config.port);

    // The credential is read once at startup. Without it the weather
    // endpoint stays up but answers with a server misconfiguration error.
    let weather = match &config.openweather_api_key {
        Some(key) => {
            let mut client = OpenWeatherClient::new(key, config.upstream_timeout)?;
            if let Some(base) = &config.openweather_base_url {
                client = client.with_base_url(base);
            }
            Some(client)
        }
        None => {
            tracing::warn!("OPENWEATHER_API_KEY not set; /api/weather will return 500");
            None
        }
    };

    let mut rates = FrankfurterClient::new(config.upstream_timeout)?;
    if let Some(base) = &config.frankfurter_base_url {
        rates = rates.with_base_url(base);
    }

    let mut quotable = QuotableClient::new(config.quote_timeout)?;
    if let Some(base) = &config.quotable_base_url {
        quotable = quotable.with_base_url(base);
    }
    let mut zenquotes = ZenQuotesClient::new(config.quote_timeout)?;
    if let Some(base) = &config.zenquotes_base_url {
        zenquotes = zenquotes.with_base_url(base);
    }
    let quote_sources: Vec<Box<dyn QuoteSource>> =
        vec![Box::new(quotable), Box::new(zenquotes)];

    // Create the InfoHub service
    let service = InfoHubService::new(weather, rates, quote_sources);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
