use async_trait::async_trait;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{ProviderKind, TickerSummary};

/// One concrete search backend. Implementations wrap a single external API
/// and normalize its results into TickerSummary rows.
#[async_trait]
pub trait AssetSearchProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;
    async fn search_ticker(&self, query: &str) -> Result<Vec<TickerSummary>, MarketDataError>;
}
