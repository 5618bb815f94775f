//! Module containing the main Shopify API client.

use crate::{
    apis::{payouts::PayoutsApi, ShopifyClientInner},
    common::{DEFAULT_API_VERSION, SHOP_DOMAIN_SUFFIX},
    middlewares::{
        access_token::AccessTokenMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

/// Client for the Shopify Admin REST APIs of a single shop.
///
/// Cloning is cheap: all the clones share the same underlying HTTP client.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    /// Shopify Payments payouts APIs client.
    pub payouts: PayoutsApi,
}

impl ShopifyClient {
    /// Builds a new [`ShopifyClient`](crate::client::ShopifyClient) with the default configuration.
    pub fn new(
        shop_name: &str,
        access_token: impl Into<AccessToken>,
    ) -> Result<ShopifyClient, Error> {
        ShopifyClientBuilder::new(shop_name, access_token).build()
    }

    /// Returns a new builder to configure a new [`ShopifyClient`](crate::client::ShopifyClient).
    pub fn builder(shop_name: &str, access_token: impl Into<AccessToken>) -> ShopifyClientBuilder {
        ShopifyClientBuilder::new(shop_name, access_token)
    }
}

/// Builder for a [`ShopifyClient`](crate::client::ShopifyClient).
#[derive(Debug)]
pub struct ShopifyClientBuilder {
    client: reqwest::Client,
    shop_name: String,
    access_token: AccessToken,
    api_version: String,
    base_url: Option<Url>,
}

impl ShopifyClientBuilder {
    /// Creates a new builder to configure a [`ShopifyClient`](crate::client::ShopifyClient).
    ///
    /// `shop_name` can be the bare shop name (`my-shop`), its full domain
    /// (`my-shop.myshopify.com`) or its URL (`https://my-shop.myshopify.com/`).
    pub fn new(shop_name: &str, access_token: impl Into<AccessToken>) -> Self {
        Self {
            client: reqwest::Client::new(),
            shop_name: shop_name.to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
        }
    }

    /// Consumes the builder and builds a new [`ShopifyClient`](crate::client::ShopifyClient).
    ///
    /// Fails if the shop name or the configured base URL cannot form a valid URL.
    pub fn build(self) -> Result<ShopifyClient, Error> {
        let base_url = match self.base_url {
            Some(base_url) => with_trailing_slash(base_url),
            None => admin_api_url(&self.shop_name, &self.api_version)?,
        };

        let inner = Arc::new(ShopifyClientInner {
            client: build_client_with_middleware(self.client, self.access_token),
            base_url,
        });

        Ok(ShopifyClient {
            payouts: PayoutsApi::new(inner),
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts, proxies and TLS settings are configured there.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the Admin API version to target.
    ///
    /// Defaults to: `2024-01`
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// Sets the Admin API root all the requests are made against, ignoring the shop name
    /// and the API version.
    ///
    /// Defaults to: `https://{shop_name}.myshopify.com/admin/api/{api_version}/`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}

/// Access token of a custom or public app installed on the shop.
///
/// The token is redacted when printed with `Debug`.
#[derive(Clone, Debug)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    /// Wraps a secret string in a new `AccessToken`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for AccessToken
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        AccessToken::new(s)
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    access_token: AccessToken,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(InjectUserAgentMiddleware::new())
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware)
        .with(AccessTokenMiddleware { access_token })
        .build()
}

/// Builds `https://{shop}.myshopify.com/admin/api/{version}/` out of a loosely formatted shop name.
fn admin_api_url(shop_name: &str, api_version: &str) -> Result<Url, Error> {
    let shop = shop_name
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let domain = if shop.ends_with(SHOP_DOMAIN_SUFFIX) {
        shop.to_string()
    } else {
        format!("{}{}", shop, SHOP_DOMAIN_SUFFIX)
    };

    Ok(Url::parse(&format!(
        "https://{}/admin/api/{}/",
        domain, api_version
    ))?)
}

/// Relative joins drop the last path segment unless it ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
