pub mod advertising;
pub mod bluetooth;
pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

pub use advertising::{Advertiser, PathAllocator, Teardown, TeardownReport};
pub use config::Config;
pub use error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub type Result<T> = std::result::Result<T, AppError>;

pub async fn run(config: Config) -> Result<()> {
    // Initialize logger
    tracing_subscriber::fmt::init();

    info!(target: "bluez_adv", "Starting advertiser with config: {:?}", &config);

    let bluez = Arc::new(bluetooth::BluerDaemon::new().await?);
    let advertiser = Advertiser::new(bluez, Arc::new(PathAllocator::new()));

    let teardown = advertiser
        .expose(&config.adapter, config.advertisement_properties(), config.discoverable_timeout)
        .await?;

    let signal = utils::wait_for_shutdown().await?;
    info!(target: "bluez_adv", "Stopping advertisement {} after {}", teardown.path(), signal);

    let report = teardown.teardown().await;
    if !report.is_clean() {
        warn!(target: "bluez_adv", "Teardown finished with {} suppressed error(s)", report.suppressed.len());
    }
    drop(teardown);
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    Ok(())
}
