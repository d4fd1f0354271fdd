use async_trait::async_trait;

use super::market_data_model::{ProviderKind, TickerSummary};
use crate::errors::Result;

/// Trait defining the market data service interface. The active provider is
/// an injected strategy value, swappable only through set_provider.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Searches the active provider for tickers matching the query
    async fn search_symbol(&self, query: &str) -> Result<Vec<TickerSummary>>;
    /// The provider currently backing searches
    fn provider_kind(&self) -> ProviderKind;
    /// Rebuilds the active provider from the given kind
    fn set_provider(&self, kind: ProviderKind) -> Result<()>;
}
