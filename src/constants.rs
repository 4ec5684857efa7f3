use bluer::UuidExt;
use once_cell::sync::Lazy;

pub const BLUEZ_ADAPTER_PATH_PREFIX: &str = "/org/bluez";

pub const ADVERTISEMENT_APP_ROOT: &str = "/org/bluez/apps";
pub const ADVERTISEMENT_PATH_PREFIX: &str = "/org/bluez/apps/advertisement";

pub const LE_ADVERTISEMENT_INTERFACE: &str = "org.bluez.LEAdvertisement1";

/// BlueZ treats this appearance value as "not set".
pub const APPEARANCE_UNSET: u16 = 0xFFFF;

pub static DEFAULT_SERVICE_UUID: Lazy<uuid::Uuid> = Lazy::new(|| uuid::Uuid::from_u16(0x180A));
