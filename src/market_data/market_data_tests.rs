#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, RwLock};

    use crate::market_data::providers::brapi_provider::BrapiListResponse;
    use crate::market_data::{
        AssetSearchProvider, MarketDataError, MarketDataService, MarketDataServiceTrait,
        ProviderKind, TickerSummary,
    };

    struct MockProvider {
        results: Vec<TickerSummary>,
        last_query: RwLock<Option<String>>,
    }

    impl MockProvider {
        fn with_results(results: Vec<TickerSummary>) -> Arc<Self> {
            Arc::new(MockProvider {
                results,
                last_query: RwLock::new(None),
            })
        }
    }

    #[async_trait]
    impl AssetSearchProvider for MockProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Yahoo
        }

        async fn search_ticker(
            &self,
            query: &str,
        ) -> Result<Vec<TickerSummary>, MarketDataError> {
            *self.last_query.write().unwrap() = Some(query.to_string());
            Ok(self.results.clone())
        }
    }

    fn summary(symbol: &str, name: &str) -> TickerSummary {
        TickerSummary {
            symbol: symbol.to_string(),
            name: name.to_string(),
            exchange: "NMS".to_string(),
            asset_kind: "EQUITY".to_string(),
            data_source: ProviderKind::Yahoo,
        }
    }

    #[tokio::test]
    async fn test_search_delegates_to_active_provider() {
        let provider = MockProvider::with_results(vec![
            summary("AAPL", "Apple Inc."),
            summary("APLE", "Apple Hospitality REIT"),
        ]);
        let service = MarketDataService::with_provider(provider.clone());

        let results = service.search_symbol("apple").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].symbol, "AAPL");
        assert_eq!(
            provider.last_query.read().unwrap().as_deref(),
            Some("apple")
        );
    }

    #[test]
    fn test_set_provider_swaps_strategy() {
        let service = MarketDataService::new(ProviderKind::Brapi, None).unwrap();
        assert_eq!(service.provider_kind(), ProviderKind::Brapi);

        service.set_provider(ProviderKind::Yahoo).unwrap();
        assert_eq!(service.provider_kind(), ProviderKind::Yahoo);

        service.set_provider(ProviderKind::Brapi).unwrap();
        assert_eq!(service.provider_kind(), ProviderKind::Brapi);
    }

    #[test]
    fn test_brapi_response_maps_to_summaries() {
        let body = r#"{
            "stocks": [
                {"stock": "PETR4", "name": "Petrobras PN", "close": 38.64, "type": "stock"},
                {"stock": "VALE3", "name": "", "sector": "Mining"}
            ],
            "indexes": []
        }"#;

        let response: BrapiListResponse = serde_json::from_str(body).unwrap();
        let summaries: Vec<TickerSummary> = response
            .stocks
            .into_iter()
            .map(TickerSummary::from)
            .collect();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].symbol, "PETR4");
        assert_eq!(summaries[0].name, "Petrobras PN");
        assert_eq!(summaries[0].exchange, "B3");
        assert_eq!(summaries[0].data_source, ProviderKind::Brapi);
        // Missing fields fall back to the symbol and the stock kind.
        assert_eq!(summaries[1].name, "VALE3");
        assert_eq!(summaries[1].asset_kind, "stock");
    }

    #[test]
    fn test_yahoo_errors_map_to_domain_errors() {
        let not_found = MarketDataError::from(yahoo_finance_api::YahooError::NoQuotes);
        assert!(matches!(not_found, MarketDataError::NotFound(_)));

        let provider_error = MarketDataError::from(yahoo_finance_api::YahooError::FetchFailed(
            "boom".to_string(),
        ));
        assert!(matches!(
            provider_error,
            MarketDataError::ProviderError(message) if message == "boom"
        ));
    }

    #[test]
    fn test_provider_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::Brapi).unwrap(),
            "\"brapi\""
        );
        assert_eq!(
            serde_json::from_str::<ProviderKind>("\"yahoo\"").unwrap(),
            ProviderKind::Yahoo
        );
    }
}
