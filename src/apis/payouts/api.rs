use crate::{
    apis::{
        payouts::{GetPayoutRequest, ListPayoutsRequest, Payout},
        ShopifyClientInner,
    },
    pagination::{self, Pagination},
    Error,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shopify Payments payouts APIs client.
#[derive(Clone, Debug)]
pub struct PayoutsApi {
    inner: Arc<ShopifyClientInner>,
}

impl PayoutsApi {
    pub(crate) fn new(inner: Arc<ShopifyClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the payouts matching the given filters, in the order returned by Shopify
    /// (most recent first).
    ///
    /// Only the first page is returned: use
    /// [`list_with_pagination`](crate::apis::payouts::PayoutsApi::list_with_pagination)
    /// to walk through all of them.
    #[tracing::instrument(name = "List Payouts", skip(self))]
    pub async fn list(&self, request: &ListPayoutsRequest) -> Result<Vec<Payout>, Error> {
        let (payouts, _) = self.list_with_pagination(request).await?;

        Ok(payouts)
    }

    /// Lists the payouts matching the given filters, together with the cursors
    /// to the previous and next pages.
    #[tracing::instrument(name = "List Payouts with Pagination", skip(self))]
    pub async fn list_with_pagination(
        &self,
        request: &ListPayoutsRequest,
    ) -> Result<(Vec<Payout>, Pagination), Error> {
        let (res, headers): (ListResponse, _) = self
            .inner
            .get("shopify_payments/payouts.json", request)
            .await?;

        let pagination = pagination::from_headers(&headers)?;

        Ok((res.payouts, pagination))
    }

    /// Gets the details of an existing payout.
    ///
    /// If there's no payout with the given id, an [`Error::ApiError`](crate::Error) with
    /// status `404` is returned (see [`Error::is_not_found`](crate::Error::is_not_found)).
    #[tracing::instrument(name = "Get Payout by ID", skip(self))]
    pub async fn get_by_id(&self, id: i64, request: &GetPayoutRequest) -> Result<Payout, Error> {
        let (res, _): (GetResponse, _) = self
            .inner
            .get(&format!("shopify_payments/payouts/{}.json", id), request)
            .await?;

        Ok(res.payout)
    }
}

#[derive(Deserialize)]
struct ListResponse {
    payouts: Vec<Payout>,
}

#[derive(Deserialize)]
struct GetResponse {
    payout: Payout,
}
