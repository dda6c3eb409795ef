//! Wire records for the accounts and creatives resources.
//!
//! Every field is optional and omitted from the JSON when unset, so a
//! partially populated record round-trips without inventing values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Bidder locations with distinct URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidder_location: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_matching_nid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_matching_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_active_creatives: Option<i64>,
    /// Upper bound for the sum of every `bidderLocation.maximumQps`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_total_qps: Option<i64>,
    /// Creatives inserted or bid with in the last 30 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_active_creatives: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Account>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A creative. `html_snippet` and `video_url` are mutually exclusive, and
/// the server fills in `status`, `version`, `corrections`,
/// `disapproval_reasons`, `filtering_reasons`, the detected categories and
/// `api_upload_timestamp`. The remote API rejects violations; nothing here
/// enforces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_creative_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    #[serde(rename = "HTMLSnippet", skip_serializing_if = "Option::is_none")]
    pub html_snippet: Option<String>,
    #[serde(rename = "videoURL", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_id: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_through_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression_tracking_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive_categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_type: Option<Vec<i64>>,
    /// RFC 3339 timestamp of the last API upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_upload_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrections: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disapproval_reasons: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtering_reasons: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativesList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Creative>>,
    /// Continuation token; pass it back as `pageToken` for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
