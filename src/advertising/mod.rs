pub mod path;
pub mod teardown;

#[cfg(test)]
mod fake;

use crate::bluetooth::advertisement::{AdvertisementProperties, AdvertisementRecord};
use crate::bluetooth::{Bluez, RegisterOptions};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub use path::PathAllocator;
pub use teardown::{Teardown, TeardownReport};

/// Publishes advertisements through BlueZ.
pub struct Advertiser {
    bluez: Arc<dyn Bluez>,
    paths: Arc<PathAllocator>,
}

impl Advertiser {
    pub fn new(bluez: Arc<dyn Bluez>, paths: Arc<PathAllocator>) -> Self {
        Self { bluez, paths }
    }

    pub fn paths(&self) -> &Arc<PathAllocator> {
        &self.paths
    }

    /// Exposes `props` on `adapter_id` and registers it with the adapter's
    /// advertising manager.
    ///
    /// Every call goes out once and the first error is returned as is.
    /// Adapter properties already written before a failure stay written.
    pub async fn expose(
        &self,
        adapter_id: &str,
        props: AdvertisementProperties,
        discoverable_timeout: u32,
    ) -> Result<Teardown> {
        let adapter = self.bluez.adapter(adapter_id).await?;

        let record = AdvertisementRecord::new(self.paths.next_path(), props);
        let bus = self.bluez.connect().await?;
        bus.publish(&record).await?;

        debug!(target: "advertising", "Setup adapter {}", adapter.name());
        // Discoverable before the timeout and before power, so the adapter
        // never comes up powered but hidden.
        adapter.set_discoverable(true).await?;
        adapter.set_discoverable_timeout(discoverable_timeout).await?;
        adapter.set_powered(true).await?;

        debug!(target: "advertising", "Registering {} instance at {}", record.interface(), record.path());
        let manager = bus.advertising_manager(adapter_id).await?;
        manager
            .register_advertisement(record.path(), &RegisterOptions::new())
            .await?;

        info!(target: "advertising", "Advertising {} on {}", record.path(), adapter.name());
        Ok(Teardown::new(
            record.path().to_string(),
            self.paths.clone(),
            adapter,
            manager,
            bus,
        ))
    }
}
