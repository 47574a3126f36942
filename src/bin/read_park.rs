use dynamo_migrator::{Config, DynamodbClient, ParkQuery, ENV_ADMIN};
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();
    let client = DynamodbClient::builder()
        .await
        .endpoint_url(config.endpoint_url())
        .build();

    let admin = env::var(ENV_ADMIN).is_ok_and(|v| v == "true");
    let mut query = ParkQuery::new().admin(admin);
    if let Some(park) = env::args().nth(1) {
        query = query.park(park);
    }

    match client.query(&config.table_name(), &query).await {
        Ok(items) => info!("{:#?}", items),
        Err(err) => error!("{:#?}", err),
    }
}
