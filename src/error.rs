use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bluetooth adapter not found: {0}")]
    AdapterNotFoundError(String),
    #[error("D-Bus connection error: {0}")]
    ConnectionError(String),
    #[error("Unable to publish advertisement: {0}")]
    PublishError(String),
    #[error("Advertisement registration error: {0}")]
    RegistrationError(String),
    #[error("Adapter property error: {0}")]
    PropertyError(String),
    #[error("Bluetooth error: {0}")]
    BluetoothError(#[from] bluer::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
