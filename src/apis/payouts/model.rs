use crate::pagination::PageOptions;
use bigdecimal::BigDecimal;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A transfer of funds from Shopify Payments to the merchant's bank account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Payout {
    pub id: i64,
    /// One of `scheduled`, `in_transit`, `paid`, `failed` or `cancelled`.
    pub status: String,
    /// Date the payout was issued, as `YYYY-MM-DD`.
    pub date: String,
    /// ISO 4217 currency code.
    pub currency: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub amount: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

/// Breakdown of the balance transactions rolled into a payout.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Summary {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub adjustments_fee_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub adjustments_gross_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub charges_fee_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub charges_gross_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub refunds_fee_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub refunds_gross_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub reserved_funds_fee_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub reserved_funds_gross_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub retried_payouts_fee_amount: Option<BigDecimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::apis::payouts::amount"
    )]
    pub retried_payouts_gross_amount: Option<BigDecimal>,
}

/// Filters for [`PayoutsApi::list`](crate::apis::payouts::PayoutsApi::list).
///
/// Unset fields are not sent at all. `ListPayoutsRequest::default()` lists every payout.
///
/// When `page_info` is set, Shopify only accepts `limit` and `fields` alongside it:
/// use `ListPayoutsRequest::from(page_options)` to follow a pagination cursor.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ListPayoutsRequest {
    /// Only payouts with an id greater than this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<i64>,
    /// Only payouts with an id lower than this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<i64>,
    /// Only payouts issued on or after this date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<String>,
    /// Only payouts issued on or before this date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<String>,
    /// Only payouts issued on this date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Maximum number of payouts per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor of the page to fetch, as returned in [`Pagination`](crate::pagination::Pagination).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Comma-separated list of the fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl From<PageOptions> for ListPayoutsRequest {
    fn from(page: PageOptions) -> Self {
        Self {
            page_info: Some(page.page_info),
            limit: page.limit,
            fields: page.fields,
            ..Default::default()
        }
    }
}

/// Options for [`PayoutsApi::get_by_id`](crate::apis::payouts::PayoutsApi::get_by_id).
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct GetPayoutRequest {
    /// Comma-separated list of the fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}
