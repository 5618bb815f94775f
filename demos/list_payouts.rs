use anyhow::Context;
use shopify_payouts::{
    apis::payouts::{GetPayoutRequest, ListPayoutsRequest},
    ShopifyClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    shop_name: String,
    access_token: String,
    api_version: Option<String>,
    status: Option<String>,
    date_min: Option<String>,
    page_size: Option<u32>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SHOPIFY"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Shopify client
    let mut builder = ShopifyClient::builder(&config.shop_name, config.access_token);
    if let Some(ref api_version) = config.api_version {
        builder = builder.with_api_version(api_version);
    }
    let shopify = builder.build()?;

    // Walk through every page of payouts
    let mut request = ListPayoutsRequest {
        status: config.status,
        date_min: config.date_min,
        limit: config.page_size,
        ..Default::default()
    };
    let mut first_payout_id = None;
    loop {
        let (payouts, pagination) = shopify.payouts.list_with_pagination(&request).await?;

        for payout in &payouts {
            tracing::info!(
                "Payout {} ({}): {} {} [{}]",
                payout.id,
                payout.date,
                payout
                    .amount
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |a| a.to_string()),
                payout.currency,
                payout.status
            );
            first_payout_id.get_or_insert(payout.id);
        }

        match pagination.next_page {
            Some(next_page) => request = next_page.into(),
            None => break,
        }
    }

    // Show the breakdown of the most recent payout
    if let Some(id) = first_payout_id {
        let payout = shopify
            .payouts
            .get_by_id(id, &GetPayoutRequest::default())
            .await?;

        tracing::info!("{:#?}", payout.summary);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
