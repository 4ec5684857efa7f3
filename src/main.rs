//! Advertises a Bluetooth LE peripheral through BlueZ until interrupted.

use bluez_adv::{run, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> bluez_adv::Result<()> {
    let config = Config::parse();
    run(config).await
}
