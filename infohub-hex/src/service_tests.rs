//! InfoHubService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use infohub_types::{
        AppError, ConvertParams, CurrencyCode, Quote, QuoteSource, RateProvider, UpstreamError,
        WeatherParams, WeatherProvider, WeatherReport,
    };

    use crate::InfoHubService;

    /// Stub weather provider counting invocations.
    pub struct MockWeather {
        calls: Arc<AtomicUsize>,
        fail_with: Option<(u16, Option<String>)>,
    }

    impl MockWeather {
        pub fn ok(calls: Arc<AtomicUsize>) -> Self {
            Self {
                calls,
                fail_with: None,
            }
        }

        pub fn failing(calls: Arc<AtomicUsize>, status: u16, message: Option<&str>) -> Self {
            Self {
                calls,
                fail_with: Some((status, message.map(String::from))),
            }
        }
    }

    fn sample_report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            country: Some("IN".to_string()),
            temperature: 31.2,
            feels_like: Some(34.0),
            condition: Some("Clouds".to_string()),
            description: Some("scattered clouds".to_string()),
            icon: Some("03d".to_string()),
            humidity: Some(70),
            wind_speed: Some(3.5),
            wind_deg: Some(180),
            sunrise: Some(1_700_000_000),
            sunset: Some(1_700_040_000),
            pressure: Some(1008),
            visibility: Some(6000),
        }
    }

    #[async_trait]
    impl WeatherProvider for MockWeather {
        async fn current_weather(&self, city: &str) -> Result<WeatherReport, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some((status, message)) => Err(UpstreamError::Status {
                    status: *status,
                    message: message.clone(),
                }),
                None => Ok(sample_report(city)),
            }
        }
    }

    /// Stub rate provider backed by a fixed rates table.
    pub struct MockRates {
        calls: Arc<AtomicUsize>,
        rates: HashMap<String, f64>,
    }

    impl MockRates {
        pub fn with_rates(calls: Arc<AtomicUsize>, rates: &[(&str, f64)]) -> Self {
            Self {
                calls,
                rates: rates
                    .iter()
                    .map(|(code, rate)| (code.to_string(), *rate))
                    .collect(),
            }
        }

        pub fn empty(calls: Arc<AtomicUsize>) -> Self {
            Self::with_rates(calls, &[])
        }
    }

    #[async_trait]
    impl RateProvider for MockRates {
        async fn latest_rate(
            &self,
            _from: &CurrencyCode,
            to: &CurrencyCode,
        ) -> Result<Option<f64>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rates.get(to.as_str()).copied())
        }
    }

    /// Stub quote source: either a fixed quote or a uniform failure.
    pub struct MockQuoteSource {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        quote: Option<Quote>,
    }

    impl MockQuoteSource {
        pub fn ok(name: &'static str, calls: Arc<AtomicUsize>, content: &str, author: &str) -> Self {
            Self {
                name,
                calls,
                quote: Some(Quote {
                    content: content.to_string(),
                    author: author.to_string(),
                }),
            }
        }

        pub fn failing(name: &'static str, calls: Arc<AtomicUsize>) -> Self {
            Self {
                name,
                calls,
                quote: None,
            }
        }
    }

    #[async_trait]
    impl QuoteSource for MockQuoteSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn random_quote(&self) -> Result<Quote, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.quote
                .clone()
                .ok_or_else(|| UpstreamError::Transport("connection reset".to_string()))
        }
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn service_with_rates(
        rate_calls: Arc<AtomicUsize>,
        rates: &[(&str, f64)],
    ) -> InfoHubService<MockWeather, MockRates> {
        InfoHubService::new(None, MockRates::with_rates(rate_calls, rates), Vec::new())
    }

    fn city(value: Option<&str>) -> WeatherParams {
        WeatherParams {
            city: value.map(String::from),
        }
    }

    fn convert_params(from: Option<&str>, to: Option<&str>, amount: Option<&str>) -> ConvertParams {
        ConvertParams {
            from: from.map(String::from),
            to: to.map(String::from),
            amount: amount.map(String::from),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Weather lookup
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_weather_missing_city_makes_no_outbound_call() {
        let calls = counter();
        let service = InfoHubService::new(
            Some(MockWeather::ok(calls.clone())),
            MockRates::empty(counter()),
            Vec::new(),
        );

        for params in [city(None), city(Some("")), city(Some("   "))] {
            let result = service.weather(&params).await;
            assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weather_without_credential_is_misconfigured() {
        let service: InfoHubService<MockWeather, MockRates> =
            InfoHubService::new(None, MockRates::empty(counter()), Vec::new());

        let result = service.weather(&city(Some("Kolkata"))).await;

        match result {
            Err(AppError::ServerMisconfigured(msg)) => {
                assert_eq!(msg, "Server missing OpenWeather API key");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_weather_success_trims_city() {
        let calls = counter();
        let service = InfoHubService::new(
            Some(MockWeather::ok(calls.clone())),
            MockRates::empty(counter()),
            Vec::new(),
        );

        let report = service.weather(&city(Some("  Kolkata  "))).await.unwrap();

        assert_eq!(report.city, "Kolkata");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_weather_propagates_upstream_status_and_message() {
        let service = InfoHubService::new(
            Some(MockWeather::failing(counter(), 404, Some("city not found"))),
            MockRates::empty(counter()),
            Vec::new(),
        );

        let err = service.weather(&city(Some("Atlantis"))).await.unwrap_err();

        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, Some(404));
                assert_eq!(message, "city not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_weather_upstream_without_message_uses_generic() {
        let service = InfoHubService::new(
            Some(MockWeather::failing(counter(), 502, None)),
            MockRates::empty(counter()),
            Vec::new(),
        );

        let err = service.weather(&city(Some("Kolkata"))).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_missing_params_make_no_outbound_call() {
        let calls = counter();
        let service = service_with_rates(calls.clone(), &[("USD", 0.012)]);

        let cases = [
            convert_params(None, Some("USD"), Some("100")),
            convert_params(Some("INR"), None, Some("100")),
            convert_params(Some("INR"), Some("USD"), None),
            convert_params(Some(""), Some("USD"), Some("100")),
            convert_params(Some("INR"), Some("  "), Some("100")),
        ];
        for params in cases {
            let result = service.convert(&params).await;
            match result {
                Err(AppError::InvalidRequest(msg)) => {
                    assert_eq!(msg, "Missing required query params: from, to, amount");
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_convert_rejects_bad_amounts_without_outbound_call() {
        let calls = counter();
        let service = service_with_rates(calls.clone(), &[("USD", 0.012)]);

        for amount in ["abc", "-5", "Infinity", "-inf", "NaN", ""] {
            let result = service
                .convert(&convert_params(Some("INR"), Some("USD"), Some(amount)))
                .await;
            assert!(
                matches!(result, Err(AppError::InvalidAmount)),
                "amount {amount:?} should be rejected"
            );
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_convert_rejects_malformed_currency_codes() {
        let calls = counter();
        let service = service_with_rates(calls.clone(), &[("USD", 0.012)]);

        let result = service
            .convert(&convert_params(Some("EURO"), Some("USD"), Some("100")))
            .await;

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_convert_multiplies_amount_by_stub_rate() {
        let service = service_with_rates(counter(), &[("USD", 0.012)]);

        let result = service
            .convert(&convert_params(Some("INR"), Some("USD"), Some("100")))
            .await
            .unwrap();

        assert_eq!(result.from.as_str(), "INR");
        assert_eq!(result.to.as_str(), "USD");
        assert_eq!(result.rate, 0.012);
        assert_eq!(result.amount, 100.0);
        assert_eq!(result.converted, 1.2);
    }

    #[tokio::test]
    async fn test_convert_normalizes_lowercase_codes() {
        let service = service_with_rates(counter(), &[("USD", 0.012)]);

        let result = service
            .convert(&convert_params(Some("inr"), Some("usd"), Some("100")))
            .await
            .unwrap();

        assert_eq!(result.from.as_str(), "INR");
        assert_eq!(result.to.as_str(), "USD");
    }

    #[tokio::test]
    async fn test_convert_unknown_target_is_unsupported_pair() {
        let service = service_with_rates(counter(), &[("GBP", 0.85)]);

        let result = service
            .convert(&convert_params(Some("EUR"), Some("USD"), Some("100")))
            .await;

        assert!(matches!(result, Err(AppError::UnsupportedPair)));
    }

    #[tokio::test]
    async fn test_convert_non_positive_rate_is_unsupported_pair() {
        let service = service_with_rates(counter(), &[("USD", 0.0)]);

        let result = service
            .convert(&convert_params(Some("INR"), Some("USD"), Some("100")))
            .await;

        assert!(matches!(result, Err(AppError::UnsupportedPair)));
    }

    #[tokio::test]
    async fn test_convert_is_idempotent_for_fixed_rate() {
        let service = service_with_rates(counter(), &[("USD", 0.012)]);
        let params = convert_params(Some("INR"), Some("USD"), Some("100"));

        let first = serde_json::to_string(&service.convert(&params).await.unwrap()).unwrap();
        let second = serde_json::to_string(&service.convert(&params).await.unwrap()).unwrap();

        assert_eq!(first, second);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quote fallback chain
    // ─────────────────────────────────────────────────────────────────────────────

    fn quote_service(
        sources: Vec<Box<dyn QuoteSource>>,
    ) -> InfoHubService<MockWeather, MockRates> {
        InfoHubService::new(None, MockRates::empty(counter()), sources)
    }

    #[tokio::test]
    async fn test_quote_first_success_stops_the_chain() {
        let primary_calls = counter();
        let secondary_calls = counter();
        let service = quote_service(vec![
            Box::new(MockQuoteSource::ok(
                "primary",
                primary_calls.clone(),
                "A",
                "B",
            )),
            Box::new(MockQuoteSource::ok(
                "secondary",
                secondary_calls.clone(),
                "C",
                "D",
            )),
        ]);

        let quote = service.quote().await;

        assert_eq!(quote.content, "A");
        assert_eq!(quote.author, "B");
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_quote_falls_through_to_secondary() {
        let service = quote_service(vec![
            Box::new(MockQuoteSource::failing("primary", counter())),
            Box::new(MockQuoteSource::ok("secondary", counter(), "X", "Y")),
        ]);

        let quote = service.quote().await;

        assert_eq!(quote.content, "X");
        assert_eq!(quote.author, "Y");
    }

    #[tokio::test]
    async fn test_quote_all_sources_failing_yields_fixed_fallback() {
        let service = quote_service(vec![
            Box::new(MockQuoteSource::failing("primary", counter())),
            Box::new(MockQuoteSource::failing("secondary", counter())),
        ]);

        let quote = service.quote().await;

        assert_eq!(quote, Quote::fallback());
        assert_eq!(
            quote.content,
            "The only way to do great work is to love what you do."
        );
        assert_eq!(quote.author, "Steve Jobs");
    }

    #[tokio::test]
    async fn test_quote_with_no_sources_is_still_total() {
        let service = quote_service(Vec::new());

        assert_eq!(service.quote().await, Quote::fallback());
    }
}
