use dynamo_migrator::{CliClient, Client, Config, Dump, DynamodbClient, Migrator, Mode};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new();

    let dump = match Dump::load(config.dump_path()) {
        Ok(dump) => dump,
        Err(err) => {
            error!("{:#?}", err);
            return ExitCode::FAILURE;
        }
    };

    let client: Arc<dyn Client> = match config.mode() {
        Mode::Sdk => Arc::new(
            DynamodbClient::builder()
                .await
                .endpoint_url(config.endpoint_url())
                .build(),
        ),
        Mode::Cli => Arc::new(CliClient::default()),
    };

    let migrator = Migrator::new(client, config.table_name());
    let report = migrator.run(&dump).await;

    info!("Migration finished: {report}.");
    ExitCode::SUCCESS
}
