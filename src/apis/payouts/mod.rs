//! APIs and models related to payouts.

mod amount;
mod api;
mod model;

pub use api::PayoutsApi;
pub use model::*;
