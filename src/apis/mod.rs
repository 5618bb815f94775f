//! Clients for the Shopify APIs covered by this crate.

use crate::Error;
use reqwest::{header::HeaderMap, Url};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

pub mod payouts;

pub(crate) struct ShopifyClientInner {
    pub(crate) client: ClientWithMiddleware,
    /// Admin API root, always ending with `/`, e.g. `https://shop.myshopify.com/admin/api/2024-01/`.
    pub(crate) base_url: Url,
}

impl ShopifyClientInner {
    /// Issues a `GET` against `path` (relative to the admin API root), sending `query` as
    /// URL query parameters, and decodes the JSON body into `T`.
    ///
    /// The response headers are handed back alongside the decoded body.
    pub(crate) async fn get<Q, T>(&self, path: &str, query: &Q) -> Result<(T, HeaderMap), Error>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let res = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let headers = res.headers().clone();
        let bytes = res.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;

        Ok((body, headers))
    }
}

impl Debug for ShopifyClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClientInner")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
