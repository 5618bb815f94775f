//! Rust client for the [Shopify Payments](https://shopify.dev/docs/api/admin-rest/latest/resources/payouts)
//! payouts API.
//!
//! Payouts are the transfers of funds from Shopify Payments to the merchant's bank account.
//! This crate only reads them: payouts are created and settled by Shopify.
//!
//! # Usage
//!
//! ## Initialize a new `ShopifyClient`
//!
//! Create a new [`ShopifyClient`](crate::client::ShopifyClient) for your shop, providing the
//! Admin API access token of an app installed on it with the `read_shopify_payments_payouts` scope.
//!
//! ```rust,no_run
//! # use shopify_payouts::{ShopifyClient, Error};
//! # fn main() -> Result<(), Error> {
//! let shopify = ShopifyClient::builder("my-shop", "shpat_some-access-token")
//!     .with_api_version("2024-01")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## List payouts
//!
//! ```rust,no_run
//! # use shopify_payouts::{ShopifyClient, Error, apis::payouts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let shopify: ShopifyClient = unreachable!();
//! #
//! let request = ListPayoutsRequestBuilder::default()
//!     .status("paid")
//!     .date_min("2024-01-01")
//!     .build()
//!     .unwrap();
//!
//! for payout in shopify.payouts.list(&request).await? {
//!     println!("Payout {}: {:?} {}", payout.id, payout.amount, payout.currency);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Walk through all the pages
//!
//! ```rust,no_run
//! # use shopify_payouts::{ShopifyClient, Error, apis::payouts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let shopify: ShopifyClient = unreachable!();
//! #
//! let mut request = ListPayoutsRequest {
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! loop {
//!     let (payouts, pagination) = shopify.payouts.list_with_pagination(&request).await?;
//!     println!("Got {} payouts", payouts.len());
//!
//!     match pagination.next_page {
//!         Some(next_page) => request = next_page.into(),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Get a single payout
//!
//! ```rust,no_run
//! # use shopify_payouts::{ShopifyClient, Error, apis::payouts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let shopify: ShopifyClient = unreachable!();
//! #
//! match shopify.payouts.get_by_id(623721858, &GetPayoutRequest::default()).await {
//!     Ok(payout) => println!("Payout status: {}", payout.status),
//!     Err(e) if e.is_not_found() => println!("No such payout"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod pagination;

pub use client::ShopifyClient;
pub use error::Error;
