use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::asset_search_provider::AssetSearchProvider;
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{ProviderKind, TickerSummary};

const BASE_URL: &str = "https://brapi.dev/api/quote/list";
const B3_EXCHANGE: &str = "B3";

/// Ticker search against brapi.dev, the B3 ticker directory. The token is
/// optional for list searches but lifts the rate limit when present.
pub struct BrapiProvider {
    client: Client,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrapiListResponse {
    #[serde(default)]
    pub(crate) stocks: Vec<BrapiStock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrapiStock {
    pub(crate) stock: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) asset_type: Option<String>,
}

impl From<BrapiStock> for TickerSummary {
    fn from(stock: BrapiStock) -> Self {
        let name = if stock.name.is_empty() {
            stock.stock.clone()
        } else {
            stock.name
        };
        TickerSummary {
            symbol: stock.stock,
            name,
            exchange: B3_EXCHANGE.to_string(),
            asset_kind: stock.asset_type.unwrap_or_else(|| "stock".to_string()),
            data_source: ProviderKind::Brapi,
        }
    }
}

impl BrapiProvider {
    pub fn new(token: Option<String>) -> Self {
        BrapiProvider {
            client: Client::new(),
            token,
        }
    }

    async fn fetch_list(&self, query: &str) -> Result<BrapiListResponse, MarketDataError> {
        let mut params = vec![("search", query)];
        if let Some(token) = &self.token {
            params.push(("token", token));
        }

        let url = reqwest::Url::parse_with_params(BASE_URL, &params)
            .map_err(|e| MarketDataError::ProviderError(format!("Failed to build URL: {}", e)))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MarketDataError::ProviderError(format!(
                "Brapi API error: {}",
                error_body
            )));
        }

        response
            .json::<BrapiListResponse>()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))
    }
}

#[async_trait]
impl AssetSearchProvider for BrapiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Brapi
    }

    async fn search_ticker(&self, query: &str) -> Result<Vec<TickerSummary>, MarketDataError> {
        let response = self.fetch_list(query).await?;
        Ok(response
            .stocks
            .into_iter()
            .map(TickerSummary::from)
            .collect())
    }
}
