//! In-memory BlueZ used by the advertising tests.

use crate::bluetooth::advertisement::AdvertisementRecord;
use crate::bluetooth::{
    AdapterControl, AdapterSetting, AdvertisingBus, AdvertisingManager, Bluez, RegisterOptions,
};
use crate::{error::AppError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Connect,
    Publish(String),
    SetDiscoverable(bool),
    SetDiscoverableTimeout(u32),
    SetPowered(bool),
    SetProperty(AdapterSetting),
    Register { path: String, options: RegisterOptions },
    Unregister(String),
}

#[derive(Clone, Debug, Default)]
pub struct Failures {
    pub connect: bool,
    pub publish: bool,
    pub discoverable: bool,
    pub discoverable_timeout: bool,
    pub powered: bool,
    pub manager: bool,
    pub register: bool,
    pub unregister: bool,
    pub set_property: bool,
}

struct Inner {
    adapters: Vec<String>,
    failures: Failures,
    calls: Mutex<Vec<Call>>,
}

impl Inner {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[derive(Clone)]
pub struct FakeBluez {
    inner: Arc<Inner>,
}

impl FakeBluez {
    pub fn new(adapters: &[&str]) -> Self {
        Self::failing(adapters, Failures::default())
    }

    pub fn failing(adapters: &[&str], failures: Failures) -> Self {
        Self {
            inner: Arc::new(Inner {
                adapters: adapters.iter().map(|name| name.to_string()).collect(),
                failures,
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Calls that changed adapter state.
    pub fn adapter_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    Call::SetDiscoverable(_)
                        | Call::SetDiscoverableTimeout(_)
                        | Call::SetPowered(_)
                        | Call::SetProperty(_)
                )
            })
            .collect()
    }
}

#[async_trait]
impl Bluez for FakeBluez {
    async fn adapter(&self, adapter_id: &str) -> Result<Box<dyn AdapterControl>> {
        if !self.inner.adapters.iter().any(|name| name == adapter_id) {
            return Err(AppError::AdapterNotFoundError(adapter_id.to_string()));
        }
        Ok(Box::new(FakeAdapter {
            name: adapter_id.to_string(),
            inner: self.inner.clone(),
        }))
    }

    async fn connect(&self) -> Result<Box<dyn AdvertisingBus>> {
        if self.inner.failures.connect {
            return Err(AppError::ConnectionError("system bus unavailable".to_string()));
        }
        self.inner.record(Call::Connect);
        Ok(Box::new(FakeBus {
            inner: self.inner.clone(),
        }))
    }
}

struct FakeAdapter {
    name: String,
    inner: Arc<Inner>,
}

#[async_trait]
impl AdapterControl for FakeAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn set_discoverable(&self, discoverable: bool) -> Result<()> {
        if self.inner.failures.discoverable {
            return Err(AppError::PropertyError("Discoverable".to_string()));
        }
        self.inner.record(Call::SetDiscoverable(discoverable));
        Ok(())
    }

    async fn set_discoverable_timeout(&self, seconds: u32) -> Result<()> {
        if self.inner.failures.discoverable_timeout {
            return Err(AppError::PropertyError("DiscoverableTimeout".to_string()));
        }
        self.inner.record(Call::SetDiscoverableTimeout(seconds));
        Ok(())
    }

    async fn set_powered(&self, powered: bool) -> Result<()> {
        if self.inner.failures.powered {
            return Err(AppError::PropertyError("Powered".to_string()));
        }
        self.inner.record(Call::SetPowered(powered));
        Ok(())
    }

    async fn set_property(&self, setting: AdapterSetting) -> Result<()> {
        self.inner.record(Call::SetProperty(setting.clone()));
        if self.inner.failures.set_property {
            return Err(AppError::PropertyError(setting.name().to_string()));
        }
        Ok(())
    }
}

struct FakeBus {
    inner: Arc<Inner>,
}

#[async_trait]
impl AdvertisingBus for FakeBus {
    async fn publish(&self, record: &AdvertisementRecord) -> Result<()> {
        if self.inner.failures.publish {
            return Err(AppError::PublishError(record.path().to_string()));
        }
        self.inner.record(Call::Publish(record.path().to_string()));
        Ok(())
    }

    async fn advertising_manager(&self, adapter_id: &str) -> Result<Box<dyn AdvertisingManager>> {
        if self.inner.failures.manager {
            return Err(AppError::RegistrationError(format!("no advertising manager on {}", adapter_id)));
        }
        Ok(Box::new(FakeManager {
            inner: self.inner.clone(),
        }))
    }
}

struct FakeManager {
    inner: Arc<Inner>,
}

#[async_trait]
impl AdvertisingManager for FakeManager {
    async fn register_advertisement(&self, path: &str, options: &RegisterOptions) -> Result<()> {
        if self.inner.failures.register {
            return Err(AppError::RegistrationError("Maximum advertisements reached".to_string()));
        }
        self.inner.record(Call::Register {
            path: path.to_string(),
            options: options.clone(),
        });
        Ok(())
    }

    async fn unregister_advertisement(&self, path: &str) -> Result<()> {
        self.inner.record(Call::Unregister(path.to_string()));
        if self.inner.failures.unregister {
            return Err(AppError::RegistrationError("Does Not Exist".to_string()));
        }
        Ok(())
    }
}
