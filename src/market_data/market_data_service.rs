use async_trait::async_trait;
use log::debug;
use std::sync::{Arc, RwLock};

use super::market_data_model::{ProviderKind, TickerSummary};
use super::market_data_traits::MarketDataServiceTrait;
use super::providers::{AssetSearchProvider, BrapiProvider, YahooSearchProvider};
use crate::errors::Result;

/// Ticker search behind a swappable provider strategy. The active provider
/// lives on the service instance, never in process-wide state.
pub struct MarketDataService {
    provider: RwLock<Arc<dyn AssetSearchProvider>>,
    brapi_token: Option<String>,
}

impl MarketDataService {
    /// Builds the service with the given provider strategy.
    pub fn new(kind: ProviderKind, brapi_token: Option<String>) -> Result<Self> {
        let service = MarketDataService {
            provider: RwLock::new(build_provider(kind, brapi_token.as_deref())?),
            brapi_token,
        };
        Ok(service)
    }

    /// Builds the service around an already constructed provider.
    pub fn with_provider(provider: Arc<dyn AssetSearchProvider>) -> Self {
        MarketDataService {
            provider: RwLock::new(provider),
            brapi_token: None,
        }
    }

    fn active_provider(&self) -> Arc<dyn AssetSearchProvider> {
        Arc::clone(&self.provider.read().unwrap())
    }
}

fn build_provider(
    kind: ProviderKind,
    brapi_token: Option<&str>,
) -> Result<Arc<dyn AssetSearchProvider>> {
    match kind {
        ProviderKind::Yahoo => Ok(Arc::new(YahooSearchProvider::new()?)),
        ProviderKind::Brapi => Ok(Arc::new(BrapiProvider::new(
            brapi_token.map(str::to_string),
        ))),
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn search_symbol(&self, query: &str) -> Result<Vec<TickerSummary>> {
        let provider = self.active_provider();
        debug!(
            "Searching {} for symbol: {}",
            provider.kind().as_str(),
            query
        );
        Ok(provider.search_ticker(query).await?)
    }

    fn provider_kind(&self) -> ProviderKind {
        self.active_provider().kind()
    }

    fn set_provider(&self, kind: ProviderKind) -> Result<()> {
        let provider = build_provider(kind, self.brapi_token.as_deref())?;
        *self.provider.write().unwrap() = provider;
        Ok(())
    }
}
