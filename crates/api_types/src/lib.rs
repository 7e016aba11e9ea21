//! Wire types shared by the HTTP server and its clients.
//!
//! Field names are camelCase on the wire. Monetary amounts travel as decimal
//! strings ("100.00"); the server parses them into integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform response envelope: every endpoint answers with
/// `{"success": bool, "message": string, "data": T|null}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Campaign on/off flag, stored and returned verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    On,
    Off,
}

pub mod campaign {
    use super::*;

    /// Request body for creating or updating a campaign.
    ///
    /// `town_id` and `keyword_ids` are optional on update and mean "leave
    /// unchanged"; creation requires at least one keyword id.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CampaignUpsert {
        pub campaign_name: String,
        /// Decimal string, e.g. "10.00".
        pub bid_amount: String,
        /// Decimal string, e.g. "100.00".
        pub campaign_fund: String,
        pub status: CampaignStatus,
        pub town_id: Option<i64>,
        pub radius: i32,
        pub keyword_ids: Option<Vec<i64>>,
    }

    /// Full campaign projection including the denormalized town name and
    /// keyword texts.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CampaignView {
        pub id: i64,
        pub campaign_name: String,
        pub bid_amount: String,
        pub campaign_fund: String,
        pub status: CampaignStatus,
        pub town_id: Option<i64>,
        pub town_name: Option<String>,
        pub radius: i32,
        pub keyword_ids: Vec<i64>,
        pub keyword_texts: Vec<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod town {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TownView {
        pub id: i64,
        pub town_name: String,
        pub postal_code: Option<String>,
    }
}

pub mod keyword {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct KeywordView {
        pub id: i64,
        pub keyword_text: String,
    }
}

pub mod account {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AccountBalanceView {
        pub account_name: String,
        /// Decimal string, e.g. "10000.00".
        pub balance: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_null_data_on_error() {
        let res: ApiResponse<()> = ApiResponse::error("boom");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "boom");
        assert!(json["data"].is_null());
    }

    #[test]
    fn status_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::On).unwrap(),
            "\"ON\""
        );
        let parsed: CampaignStatus = serde_json::from_str("\"OFF\"").unwrap();
        assert_eq!(parsed, CampaignStatus::Off);
    }

    #[test]
    fn upsert_uses_camel_case_field_names() {
        let body = r#"{
            "campaignName": "Summer sale",
            "bidAmount": "10.00",
            "campaignFund": "100.00",
            "status": "ON",
            "townId": 1,
            "radius": 10,
            "keywordIds": [1, 2]
        }"#;
        let parsed: campaign::CampaignUpsert = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.campaign_name, "Summer sale");
        assert_eq!(parsed.keyword_ids.as_deref(), Some(&[1, 2][..]));
    }
}
