mod routes;

use reqwest::Url;
use bigdecimal::BigDecimal;
use serde_json::json;
use shopify_payouts::apis::payouts::{Payout, Summary};
use wiremock::{
    matchers::{header, method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

static API_VERSION: &str = "2024-01";
static ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Simple mock server for the Shopify payouts APIs used in local integration tests.
pub struct ShopifyMockServer {
    _server: MockServer,
    base_url: Url,
    payouts: Vec<Payout>,
}

impl ShopifyMockServer {
    pub async fn start(access_token: &str) -> Self {
        let server = MockServer::start().await;
        let base_url = Url::parse(&format!("{}/admin/api/{}/", server.uri(), API_VERSION)).unwrap();
        let payouts = seed_payouts();
        let base_path = base_url.path().to_string();

        // Mock routes, only reachable with the right access token
        Mock::given(method("GET"))
            .and(path(format!("{}shopify_payments/payouts.json", base_path)))
            .and(header(ACCESS_TOKEN_HEADER, access_token))
            .respond_with(routes::ListPayouts {
                base_url: base_url.clone(),
                payouts: payouts.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(format!(
                r"^{}shopify_payments/payouts/\d+\.json$",
                base_path
            )))
            .and(header(ACCESS_TOKEN_HEADER, access_token))
            .respond_with(routes::GetPayoutById {
                payouts: payouts.clone(),
            })
            .mount(&server)
            .await;

        // Anything else is rejected like Shopify does with a wrong token
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errors": "[API] Invalid API key or access token (unrecognized login or wrong password)"
            })))
            .mount(&server)
            .await;

        Self {
            _server: server,
            base_url,
            payouts,
        }
    }

    /// Admin API root of the mock shop.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All the payouts of the mock shop, most recent first.
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
}

fn seed_payouts() -> Vec<Payout> {
    let statuses = ["scheduled", "in_transit", "paid", "paid", "failed", "paid", "paid"];

    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let id = 1000 - i as i64;
            Payout {
                id,
                status: status.to_string(),
                date: format!("2024-01-{:02}", 28 - i),
                currency: "USD".to_string(),
                amount: Some(BigDecimal::new((4190 + id).into(), 2)),
                summary: (i % 2 == 0).then(|| Summary {
                    charges_fee_amount: Some(BigDecimal::new(132.into(), 2)),
                    charges_gross_amount: Some(BigDecimal::new((4552 + id).into(), 2)),
                    refunds_gross_amount: Some(BigDecimal::new((-354).into(), 2)),
                    ..Default::default()
                }),
            }
        })
        .collect()
}
