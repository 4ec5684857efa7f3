//! Exports advertisements on the system bus and talks to
//! `org.bluez.LEAdvertisingManager1`.

use super::advertisement::{AdvertisementProperties, AdvertisementRecord};
use super::{adapter_path, AdvertisingBus, AdvertisingManager, RegisterOptions};
use crate::constants::{ADVERTISEMENT_APP_ROOT, APPEARANCE_UNSET};
use crate::{error::AppError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info};
use zbus::{
    fdo, interface, proxy,
    zvariant::{ObjectPath, OwnedValue, Value},
    Connection,
};

#[proxy(interface = "org.bluez.LEAdvertisingManager1", default_service = "org.bluez")]
trait LEAdvertisingManager1 {
    fn register_advertisement(
        &self,
        advertisement: &ObjectPath<'_>,
        options: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<()>;

    fn unregister_advertisement(&self, service: &ObjectPath<'_>) -> zbus::Result<()>;
}

/// The `org.bluez.LEAdvertisement1` object BlueZ reads the advertisement from.
pub struct LeAdvertisement {
    props: AdvertisementProperties,
}

impl LeAdvertisement {
    pub fn new(props: AdvertisementProperties) -> Self {
        Self { props }
    }
}

fn to_variant(bytes: &[u8]) -> fdo::Result<OwnedValue> {
    OwnedValue::try_from(Value::from(bytes.to_vec())).map_err(|e| fdo::Error::Failed(e.to_string()))
}

#[interface(name = "org.bluez.LEAdvertisement1")]
impl LeAdvertisement {
    fn release(&self) {
        info!(target: "advertisement", "Advertisement released by BlueZ");
    }

    #[zbus(property, name = "Type")]
    fn advertisement_type(&self) -> String {
        self.props.advertisement_type.to_string()
    }

    #[zbus(property, name = "ServiceUUIDs")]
    fn service_uuids(&self) -> Vec<String> {
        self.props.service_uuids.iter().map(|uuid| uuid.to_string()).collect()
    }

    #[zbus(property, name = "SolicitUUIDs")]
    fn solicit_uuids(&self) -> Vec<String> {
        self.props.solicit_uuids.iter().map(|uuid| uuid.to_string()).collect()
    }

    #[zbus(property, name = "ManufacturerData")]
    fn manufacturer_data(&self) -> fdo::Result<HashMap<u16, OwnedValue>> {
        self.props
            .manufacturer_data
            .iter()
            .map(|(id, data)| to_variant(data).map(|value| (*id, value)))
            .collect()
    }

    #[zbus(property, name = "ServiceData")]
    fn service_data(&self) -> fdo::Result<HashMap<String, OwnedValue>> {
        self.props
            .service_data
            .iter()
            .map(|(uuid, data)| to_variant(data).map(|value| (uuid.to_string(), value)))
            .collect()
    }

    #[zbus(property, name = "Includes")]
    fn includes(&self) -> Vec<String> {
        self.props.includes.clone()
    }

    #[zbus(property, name = "LocalName")]
    fn local_name(&self) -> String {
        self.props.local_name.clone().unwrap_or_default()
    }

    #[zbus(property, name = "Appearance")]
    fn appearance(&self) -> u16 {
        self.props.appearance.unwrap_or(APPEARANCE_UNSET)
    }

    #[zbus(property, name = "Discoverable")]
    fn discoverable(&self) -> bool {
        self.props.discoverable
    }

    #[zbus(property, name = "Timeout")]
    fn timeout(&self) -> u16 {
        self.props.timeout
    }
}

/// A dedicated system bus connection serving advertisement objects.
pub struct DbusBus {
    conn: Connection,
}

impl DbusBus {
    pub async fn system() -> Result<Self> {
        let conn = Connection::system()
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;
        conn.object_server()
            .at(ADVERTISEMENT_APP_ROOT, fdo::ObjectManager)
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;
        debug!(target: "dbus", "Connected to the system bus as {:?}", conn.unique_name());
        Ok(Self { conn })
    }
}

#[async_trait]
impl AdvertisingBus for DbusBus {
    async fn publish(&self, record: &AdvertisementRecord) -> Result<()> {
        debug!(target: "dbus", "Exposing {} at {}", record.interface(), record.path());
        let added = self
            .conn
            .object_server()
            .at(record.path(), LeAdvertisement::new(record.properties().clone()))
            .await
            .map_err(|e| AppError::PublishError(e.to_string()))?;
        if !added {
            return Err(AppError::PublishError(format!(
                "{} already exported at {}",
                record.interface(),
                record.path()
            )));
        }
        Ok(())
    }

    async fn advertising_manager(&self, adapter_id: &str) -> Result<Box<dyn AdvertisingManager>> {
        let proxy = LEAdvertisingManager1Proxy::builder(&self.conn)
            .path(adapter_path(adapter_id))
            .map_err(|e| AppError::RegistrationError(e.to_string()))?
            .build()
            .await
            .map_err(rejected)?;
        Ok(Box::new(DbusAdvertisingManager { proxy }))
    }
}

pub struct DbusAdvertisingManager {
    proxy: LEAdvertisingManager1Proxy<'static>,
}

/// BlueZ refusals on the manager are all reported as registration errors.
fn rejected(e: zbus::Error) -> AppError {
    AppError::RegistrationError(e.to_string())
}

fn object_path(path: &str) -> Result<ObjectPath<'_>> {
    ObjectPath::try_from(path).map_err(|e| AppError::RegistrationError(format!("{}: {}", path, e)))
}

#[async_trait]
impl AdvertisingManager for DbusAdvertisingManager {
    async fn register_advertisement(&self, path: &str, options: &RegisterOptions) -> Result<()> {
        let path = object_path(path)?;
        let options: HashMap<&str, Value<'_>> = options
            .iter()
            .map(|(key, value)| (key.as_str(), Value::from(value.as_str())))
            .collect();
        self.proxy
            .register_advertisement(&path, options)
            .await
            .map_err(rejected)
    }

    async fn unregister_advertisement(&self, path: &str) -> Result<()> {
        let path = object_path(path)?;
        self.proxy
            .unregister_advertisement(&path)
            .await
            .map_err(rejected)
    }
}
