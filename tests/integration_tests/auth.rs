use crate::common::test_context::TestContext;
use shopify_payouts::{apis::payouts::ListPayoutsRequest, Error};

#[tokio::test]
async fn invalid_access_token_is_rejected() {
    let ctx = TestContext::start().await;
    let client = ctx.client_with_access_token("shpat_invalid-access-token");

    let err = client
        .payouts
        .list(&ListPayoutsRequest::default())
        .await
        .unwrap_err();

    match err {
        Error::ApiError(api_error) => assert_eq!(api_error.status, 401),
        e => panic!("Unexpected error: {}", e),
    }
}
