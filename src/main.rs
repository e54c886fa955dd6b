use std::path::Path;

use clap::Parser;
use tracing::{error, info};

use counter_client::args::{
    get_cluster_url, get_counter_keypair_path, get_steps, get_wallet_path, Args,
};
use counter_client::client::CounterClient;
use counter_client::error::ClientError;
use counter_client::{keystore, provisioner, sequencer};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(err) = run(args).await {
        error!(error = %err, "Counter client failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let cluster_url = get_cluster_url(args.cluster);
    let wallet_path = get_wallet_path(args.wallet);
    let record_path = get_counter_keypair_path(args.counter_keypair);
    let steps = sequencer::parse_steps(&get_steps(args.steps))?;

    // The wallet must load before anything touches the network.
    let wallet = keystore::load_wallet(Path::new(&wallet_path))?;
    let client = CounterClient::new(&cluster_url, wallet);
    info!(wallet_pubkey = %client.payer_pubkey(), cluster = %cluster_url, "Identity initialized");

    let counter = provisioner::provision(&client, Path::new(&record_path)).await?;
    sequencer::run_sequence(&client, &counter, &steps).await?;
    Ok(())
}
