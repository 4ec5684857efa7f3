use super::{AdapterControl, AdapterSetting, AdvertisingBus, Bluez, DbusBus};
use crate::{error::AppError, Result};
use async_trait::async_trait;
use bluer::{Adapter, Session};
use tracing::{debug, info};

/// BlueZ reached through a `bluer` session.
pub struct BluerDaemon {
    session: Session,
}

impl BluerDaemon {
    pub async fn new() -> Result<Self> {
        let session = Session::new()
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;
        Ok(Self { session })
    }
}

#[async_trait]
impl Bluez for BluerDaemon {
    async fn adapter(&self, adapter_id: &str) -> Result<Box<dyn AdapterControl>> {
        debug!(target: "adapter", "Retrieving adapter instance {}", adapter_id);
        let names = self
            .session
            .adapter_names()
            .await
            .map_err(|e| AppError::AdapterNotFoundError(format!("{}: {}", adapter_id, e)))?;
        if !names.iter().any(|name| name == adapter_id) {
            return Err(AppError::AdapterNotFoundError(adapter_id.to_string()));
        }

        let adapter = self
            .session
            .adapter(adapter_id)
            .map_err(|e| AppError::AdapterNotFoundError(format!("{}: {}", adapter_id, e)))?;
        info!(target: "adapter", "Using Bluetooth adapter {}", adapter.name());
        Ok(Box::new(BluerAdapter { adapter }))
    }

    async fn connect(&self) -> Result<Box<dyn AdvertisingBus>> {
        Ok(Box::new(DbusBus::system().await?))
    }
}

pub struct BluerAdapter {
    adapter: Adapter,
}

#[async_trait]
impl AdapterControl for BluerAdapter {
    fn name(&self) -> &str {
        self.adapter.name()
    }

    async fn set_discoverable(&self, discoverable: bool) -> Result<()> {
        Ok(self.adapter.set_discoverable(discoverable).await?)
    }

    async fn set_discoverable_timeout(&self, seconds: u32) -> Result<()> {
        Ok(self.adapter.set_discoverable_timeout(seconds).await?)
    }

    async fn set_powered(&self, powered: bool) -> Result<()> {
        Ok(self.adapter.set_powered(powered).await?)
    }

    async fn set_property(&self, setting: AdapterSetting) -> Result<()> {
        debug!(target: "adapter", "Setting {} to {:?} on {}", setting.name(), &setting, self.adapter.name());
        match setting {
            AdapterSetting::Discoverable(value) => self.set_discoverable(value).await,
            AdapterSetting::DiscoverableTimeout(value) => self.set_discoverable_timeout(value).await,
            AdapterSetting::Powered(value) => self.set_powered(value).await,
        }
    }
}
