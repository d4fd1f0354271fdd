use serde::{Deserialize, Serialize};

/// External data source backing ticker searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Yahoo,
    Brapi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Yahoo => "yahoo",
            ProviderKind::Brapi => "brapi",
        }
    }
}

/// One ticker returned by a provider search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSummary {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    /// Asset kind as reported by the provider, e.g. EQUITY or stock
    pub asset_kind: String,
    pub data_source: ProviderKind,
}
