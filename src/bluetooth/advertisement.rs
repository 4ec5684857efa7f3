//! Advertisement records handed to BlueZ.

use crate::constants::LE_ADVERTISEMENT_INTERFACE;
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AdvertisementType {
    Broadcast,
    #[default]
    Peripheral,
}

impl fmt::Display for AdvertisementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvertisementType::Broadcast => write!(f, "broadcast"),
            AdvertisementType::Peripheral => write!(f, "peripheral"),
        }
    }
}

/// Properties of an `org.bluez.LEAdvertisement1` object.
///
/// The values are forwarded to BlueZ as they are; nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvertisementProperties {
    pub advertisement_type: AdvertisementType,
    pub service_uuids: Vec<Uuid>,
    pub solicit_uuids: Vec<Uuid>,
    /// Company identifier to payload.
    pub manufacturer_data: BTreeMap<u16, Vec<u8>>,
    pub service_data: BTreeMap<Uuid, Vec<u8>>,
    /// Extra fields BlueZ should add itself, e.g. `tx-power`.
    pub includes: Vec<String>,
    /// Exported as an empty `LocalName` when unset. BlueZ may then add a
    /// zero-length name field to the advertising data, so set a name when
    /// the payload matters.
    pub local_name: Option<String>,
    pub appearance: Option<u16>,
    pub discoverable: bool,
    /// Seconds before BlueZ drops the advertisement, 0 for never.
    pub timeout: u16,
}

/// An advertisement bound to the object path it is published at.
#[derive(Clone, Debug)]
pub struct AdvertisementRecord {
    path: String,
    props: AdvertisementProperties,
}

impl AdvertisementRecord {
    pub fn new(path: String, props: AdvertisementProperties) -> Self {
        Self { path, props }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn properties(&self) -> &AdvertisementProperties {
        &self.props
    }

    pub fn interface(&self) -> &'static str {
        LE_ADVERTISEMENT_INTERFACE
    }
}
