pub(crate) mod market_data_errors;
pub(crate) mod market_data_model;
pub(crate) mod market_data_service;
pub(crate) mod market_data_traits;
pub(crate) mod providers;

#[cfg(test)]
mod market_data_tests;

pub use market_data_errors::MarketDataError;
pub use market_data_model::{ProviderKind, TickerSummary};
pub use market_data_service::MarketDataService;
pub use market_data_traits::MarketDataServiceTrait;

pub use providers::{AssetSearchProvider, BrapiProvider, YahooSearchProvider};
