use anyhow::Context;
use shopify_payouts::ShopifyClient;

#[derive(serde::Deserialize, Debug)]
struct Config {
    shop_name: String,
    access_token: String,
    api_version: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ACCEPTANCE_TESTS"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the acceptance tests configuration")
    }
}

pub struct TestContext {
    pub client: ShopifyClient,
    config: Config,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let config = Config::read().unwrap();

        // Configure a new ShopifyClient to point to the development shop
        let client = Self::build_client(&config, &config.access_token);

        Self { client, config }
    }

    /// Builds a client for the same shop, authenticated with the given token.
    pub fn client_with_access_token(&self, access_token: &str) -> ShopifyClient {
        Self::build_client(&self.config, access_token)
    }

    fn build_client(config: &Config, access_token: &str) -> ShopifyClient {
        let mut builder = ShopifyClient::builder(&config.shop_name, access_token);
        if let Some(ref api_version) = config.api_version {
            builder = builder.with_api_version(api_version);
        }

        builder.build().unwrap()
    }
}
