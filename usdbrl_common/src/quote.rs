//! Quote data model and JSON encoding helpers.
//!
//! The upstream provider answers with an object keyed by currency pair, e.g.
//! `{"USDBRL": {"code": "USD", "bid": "5.01", ...}}`. Every field is kept as the opaque
//! string the provider sent; nothing here parses numbers or dates.
use serde::{Deserialize, Serialize};

/// Upstream document holding the USD/BRL snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// The `USDBRL` entry of the upstream document.
    #[serde(rename = "USDBRL")]
    pub usdbrl: QuoteItem,
}

/// One currency-pair snapshot as received from the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteItem {
    /// Quoted currency code (e.g. `USD`).
    pub code: String,
    /// Counter currency code (e.g. `BRL`).
    pub codein: String,
    /// Display name of the pair.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute variation of the bid.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Epoch seconds, string-encoded.
    pub timestamp: String,
    /// Provider-side creation date, string-encoded.
    pub create_date: String,
}

/// Bid-only projection returned by the server and consumed by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BidResponse {
    /// Bid price, relayed verbatim.
    pub bid: String,
}

impl From<&QuoteItem> for BidResponse {
    fn from(item: &QuoteItem) -> Self {
        BidResponse {
            bid: item.bid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPSTREAM_JSON: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.0561",
            "low": "4.9989",
            "varBid": "-0.0102",
            "pctChange": "-0.2",
            "bid": "5.01",
            "ask": "5.0112",
            "timestamp": "1697227199",
            "create_date": "2023-10-13 16:59:59"
        }
    }"#;

    #[test]
    fn decodes_upstream_document() {
        let quote = serde_json::from_str::<Quote>(UPSTREAM_JSON).unwrap();
        let item = quote.usdbrl;

        assert_eq!(item.code, "USD");
        assert_eq!(item.codein, "BRL");
        assert_eq!(item.name, "Dólar Americano/Real Brasileiro");
        assert_eq!(item.var_bid, "-0.0102");
        assert_eq!(item.pct_change, "-0.2");
        assert_eq!(item.bid, "5.01");
        assert_eq!(item.timestamp, "1697227199");
        assert_eq!(item.create_date, "2023-10-13 16:59:59");
    }

    #[test]
    fn rejects_document_without_pair() {
        assert!(serde_json::from_str::<Quote>(r#"{"EURBRL": {}}"#).is_err());
    }

    #[test]
    fn rejects_item_with_missing_field() {
        let body = r#"{"USDBRL": {"code": "USD", "bid": "5.01"}}"#;
        assert!(serde_json::from_str::<Quote>(body).is_err());
    }

    #[test]
    fn bid_response_carries_only_bid() {
        let quote = serde_json::from_str::<Quote>(UPSTREAM_JSON).unwrap();
        let response = BidResponse::from(&quote.usdbrl);

        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"bid":"5.01"}"#);
    }
}
