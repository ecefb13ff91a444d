//! Auction domain: active lots and sale history of an item.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::ApiObject;

/// An active auction lot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionLot {
    pub item_id: String,
    pub amount: i64,
    pub start_price: i64,
    /// Highest bid so far; absent while nobody has bid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<i64>,
    pub buyout_price: i64,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    /// Item-specific extra data (quality, upgrade level, ...). Passed through untouched.
    pub additional: Map<String, Value>,
}

impl AuctionLot {
    /// Price a bidder has to beat: current bid, or the start price.
    pub fn effective_price(&self) -> i64 {
        self.current_price.unwrap_or(self.start_price)
    }
}

impl ApiObject for AuctionLot {
    const NAME: &'static str = "AuctionLot";
}

/// A lot that was bought out or won.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionRedeemedLot {
    pub amount: i64,
    pub price: i64,
    pub time: DateTime<FixedOffset>,
    pub additional: Map<String, Value>,
}

impl ApiObject for AuctionRedeemedLot {
    const NAME: &'static str = "AuctionRedeemedLot";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lot_json() -> Value {
        json!({
            "itemId": "1kv2",
            "amount": 1,
            "startPrice": 100,
            "buyoutPrice": 10000,
            "startTime": "2025-02-11T00:49:55.603680Z",
            "endTime": "2025-02-11T12:49:55.603683Z",
            "additional": {}
        })
    }

    #[test]
    fn test_current_price_defaults_to_none() {
        let lot = AuctionLot::from_raw(lot_json()).unwrap();
        assert_eq!(lot.current_price, None);
        assert_eq!(lot.effective_price(), 100);
        assert!(!lot.raw().unwrap().contains_key("currentPrice"));
    }

    #[test]
    fn test_current_price_kept_when_present() {
        let mut wire = lot_json();
        wire["currentPrice"] = json!(250);
        let lot = AuctionLot::from_raw(wire.clone()).unwrap();
        assert_eq!(lot.current_price, Some(250));
        assert_eq!(lot.effective_price(), 250);
        assert_eq!(Value::Object(lot.raw().unwrap()), wire);
    }

    #[test]
    fn test_additional_passes_through() {
        let mut wire = lot_json();
        wire["additional"] = json!({"qlt": 3, "ptn": 15, "stats_random": "abc"});
        let lot = AuctionLot::from_raw(wire).unwrap();
        assert_eq!(lot.additional["qlt"], json!(3));
        assert_eq!(lot.raw().unwrap()["additional"]["stats_random"], json!("abc"));
    }

    #[test]
    fn test_redeemed_lot_requires_price() {
        let err = AuctionRedeemedLot::from_raw(json!({
            "amount": 1,
            "time": "2025-02-11T02:48:47.001594Z",
            "additional": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("price"));
    }
}
