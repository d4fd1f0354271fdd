use async_trait::async_trait;
use yahoo::YQuoteItem;
use yahoo_finance_api as yahoo;

use super::asset_search_provider::AssetSearchProvider;
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{ProviderKind, TickerSummary};

impl From<&YQuoteItem> for TickerSummary {
    fn from(item: &YQuoteItem) -> Self {
        let name = if item.long_name.is_empty() {
            item.short_name.clone()
        } else {
            item.long_name.clone()
        };
        TickerSummary {
            symbol: item.symbol.clone(),
            name,
            exchange: item.exchange.clone(),
            asset_kind: item.quote_type.clone(),
            data_source: ProviderKind::Yahoo,
        }
    }
}

pub struct YahooSearchProvider {
    provider: yahoo::YahooConnector,
}

impl YahooSearchProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let provider = yahoo::YahooConnector::new()?;
        Ok(YahooSearchProvider { provider })
    }
}

#[async_trait]
impl AssetSearchProvider for YahooSearchProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Yahoo
    }

    async fn search_ticker(&self, query: &str) -> Result<Vec<TickerSummary>, MarketDataError> {
        let result = self.provider.search_ticker(query).await?;
        Ok(result.quotes.iter().map(TickerSummary::from).collect())
    }
}
