//! Emission domain: timing of the in-game emission event.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::shared::ApiObject;

/// Start/end moments of the current and previous emissions in a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Emission {
    pub current_start: DateTime<FixedOffset>,
    pub previous_start: DateTime<FixedOffset>,
    pub previous_end: DateTime<FixedOffset>,
}

impl ApiObject for Emission {
    const NAME: &'static str = "Emission";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_emission_timestamps_parsed() {
        let emission = Emission::from_raw(json!({
            "currentStart": "2019-08-24T14:15:22Z",
            "previousStart": "2019-08-24T12:00:00Z",
            "previousEnd": "2019-08-24T12:05:30Z"
        }))
        .unwrap();
        assert_eq!(
            emission.current_start,
            Utc.with_ymd_and_hms(2019, 8, 24, 14, 15, 22).unwrap()
        );
        assert!(emission.previous_end > emission.previous_start);
    }

    #[test]
    fn test_emission_rejects_bad_timestamp() {
        let err = Emission::from_raw(json!({
            "currentStart": "yesterday",
            "previousStart": "2019-08-24T12:00:00Z",
            "previousEnd": "2019-08-24T12:05:30Z"
        }))
        .unwrap_err();
        assert!(matches!(err, crate::error::SdkError::Validation(_)));
    }
}
