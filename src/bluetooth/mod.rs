pub mod adapter;
pub mod advertisement;
pub mod dbus;

use crate::Result;
use advertisement::AdvertisementRecord;
use async_trait::async_trait;
use std::collections::HashMap;

pub use adapter::BluerDaemon;
pub use dbus::DbusBus;

/// Options passed along with `RegisterAdvertisement`.
pub type RegisterOptions = HashMap<String, String>;

/// Adapter properties that can be written through [`AdapterControl::set_property`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterSetting {
    Discoverable(bool),
    DiscoverableTimeout(u32),
    Powered(bool),
}

impl AdapterSetting {
    /// The `org.bluez.Adapter1` property this setting writes.
    pub fn name(&self) -> &'static str {
        match self {
            AdapterSetting::Discoverable(_) => "Discoverable",
            AdapterSetting::DiscoverableTimeout(_) => "DiscoverableTimeout",
            AdapterSetting::Powered(_) => "Powered",
        }
    }
}

#[async_trait]
pub trait AdapterControl: Send + Sync {
    fn name(&self) -> &str;

    async fn set_discoverable(&self, discoverable: bool) -> Result<()>;

    async fn set_discoverable_timeout(&self, seconds: u32) -> Result<()>;

    async fn set_powered(&self, powered: bool) -> Result<()>;

    async fn set_property(&self, setting: AdapterSetting) -> Result<()>;
}

/// The per-adapter `org.bluez.LEAdvertisingManager1` object.
#[async_trait]
pub trait AdvertisingManager: Send + Sync {
    async fn register_advertisement(&self, path: &str, options: &RegisterOptions) -> Result<()>;

    async fn unregister_advertisement(&self, path: &str) -> Result<()>;
}

/// A bus connection advertisements are published on.
///
/// BlueZ reads the advertisement back from whoever called
/// `RegisterAdvertisement`, so the manager must be resolved on the same
/// connection the record was published on.
#[async_trait]
pub trait AdvertisingBus: Send + Sync {
    async fn publish(&self, record: &AdvertisementRecord) -> Result<()>;

    async fn advertising_manager(&self, adapter_id: &str) -> Result<Box<dyn AdvertisingManager>>;
}

/// Entry point into the Bluetooth daemon.
#[async_trait]
pub trait Bluez: Send + Sync {
    async fn adapter(&self, adapter_id: &str) -> Result<Box<dyn AdapterControl>>;

    /// Opens a fresh bus connection for publishing one advertisement.
    async fn connect(&self) -> Result<Box<dyn AdvertisingBus>>;
}

pub fn adapter_path(adapter_id: &str) -> String {
    format!("{}/{}", crate::constants::BLUEZ_ADAPTER_PATH_PREFIX, adapter_id)
}
