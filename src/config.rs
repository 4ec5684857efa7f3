use crate::bluetooth::advertisement::{AdvertisementProperties, AdvertisementType};
use crate::constants::DEFAULT_SERVICE_UUID;
use clap::Parser;
use uuid::Uuid;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(short, long, default_value = "hci0", help = "Bluetooth adapter name")]
    pub adapter: String,
    #[arg(short, long, default_value = "BlueZ-Adv", help = "Advertised local name")]
    pub name: String,
    #[arg(short = 'u', long = "service-uuid", help = "Advertised service UUID, may be repeated")]
    pub service_uuids: Vec<Uuid>,
    #[arg(short = 't', long, default_value = "120", help = "Adapter discoverable timeout in seconds")]
    pub discoverable_timeout: u32,
    #[arg(long, value_enum, default_value = "peripheral", help = "Advertisement type")]
    pub advertisement_type: AdvertisementType,
}

impl Config {
    pub fn advertisement_properties(&self) -> AdvertisementProperties {
        let service_uuids = if self.service_uuids.is_empty() {
            vec![*DEFAULT_SERVICE_UUID]
        } else {
            self.service_uuids.clone()
        };

        AdvertisementProperties {
            advertisement_type: self.advertisement_type,
            service_uuids,
            local_name: Some(self.name.clone()),
            discoverable: true,
            ..Default::default()
        }
    }
}
