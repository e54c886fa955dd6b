use clap::Parser;

use crate::sequencer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, help = "Solana cluster RPC URL")]
    pub cluster: Option<String>,
    #[arg(long, help = "Path to the wallet keypair file")]
    pub wallet: Option<String>,
    #[arg(long, help = "Path to the persisted counter account keypair")]
    pub counter_keypair: Option<String>,
    #[arg(long, help = "Comma-separated steps, e.g. increment,update:42")]
    pub steps: Option<String>,
}

pub fn get_cluster_url(cli_cluster: Option<String>) -> String {
    std::env::var("COUNTER_CLUSTER")
        .ok()
        .or(cli_cluster)
        .unwrap_or_else(|| "https://api.devnet.solana.com".to_string())
}

pub fn get_wallet_path(cli_wallet: Option<String>) -> String {
    std::env::var("COUNTER_WALLET")
        .ok()
        .or(cli_wallet)
        .unwrap_or_else(default_wallet_path)
}

pub fn get_counter_keypair_path(cli_path: Option<String>) -> String {
    std::env::var("COUNTER_ACCOUNT_KEYPAIR")
        .ok()
        .or(cli_path)
        .unwrap_or_else(|| "counter-account.json".to_string())
}

pub fn get_steps(cli_steps: Option<String>) -> String {
    std::env::var("COUNTER_STEPS")
        .ok()
        .or(cli_steps)
        .unwrap_or_else(|| sequencer::DEFAULT_STEPS.to_string())
}

fn default_wallet_path() -> String {
    match std::env::var("HOME") {
        Ok(home) => format!("{home}/.config/solana/id.json"),
        Err(_) => "id.json".to_string(),
    }
}
