pub mod asset_search_provider;
pub mod brapi_provider;
pub mod yahoo_provider;

pub use asset_search_provider::AssetSearchProvider;
pub use brapi_provider::BrapiProvider;
pub use yahoo_provider::YahooSearchProvider;
