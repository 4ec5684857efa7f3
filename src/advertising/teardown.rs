use super::path::PathAllocator;
use crate::bluetooth::{AdapterControl, AdapterSetting, AdvertisingBus, AdvertisingManager};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Errors swallowed while tearing an advertisement down.
#[derive(Debug, Default)]
pub struct TeardownReport {
    pub suppressed: Vec<AppError>,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.suppressed.is_empty()
    }
}

/// Undoes a successful [`Advertiser::expose`](super::Advertiser::expose).
///
/// Holds the bus connection the advertisement is exported on; dropping the
/// handle drops the exported object with it. Calling [`Teardown::teardown`]
/// twice is tolerated but not guarded: the path counter is decremented again
/// and BlueZ sees a second unregister.
pub struct Teardown {
    path: String,
    paths: Arc<PathAllocator>,
    adapter: Box<dyn AdapterControl>,
    manager: Box<dyn AdvertisingManager>,
    _bus: Box<dyn AdvertisingBus>,
}

impl Teardown {
    pub(crate) fn new(
        path: String,
        paths: Arc<PathAllocator>,
        adapter: Box<dyn AdapterControl>,
        manager: Box<dyn AdvertisingManager>,
        bus: Box<dyn AdvertisingBus>,
    ) -> Self {
        Self {
            path,
            paths,
            adapter,
            manager,
            _bus: bus,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn adapter_name(&self) -> &str {
        self.adapter.name()
    }

    pub async fn teardown(&self) -> TeardownReport {
        info!(target: "advertising", "Removing advertisement {} from {}", &self.path, self.adapter.name());
        self.paths.release_one();

        let mut report = TeardownReport::default();
        if let Err(e) = self.manager.unregister_advertisement(&self.path).await {
            warn!(target: "advertising", "Unable to unregister {}. Reason: {}", &self.path, e);
            report.suppressed.push(e);
        }
        let hidden = AdapterSetting::Discoverable(false);
        let property = hidden.name();
        if let Err(e) = self.adapter.set_property(hidden).await {
            warn!(target: "advertising", "Unable to reset {} on {}. Reason: {}", property, self.adapter.name(), e);
            report.suppressed.push(e);
        }
        report
    }
}
