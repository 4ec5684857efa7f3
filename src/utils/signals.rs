use crate::Result;
use std::fmt;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shutdown {
    Terminate,
    Interrupt,
}

impl fmt::Display for Shutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shutdown::Terminate => write!(f, "SIGTERM"),
            Shutdown::Interrupt => write!(f, "SIGINT"),
        }
    }
}

/// Waits until the process is asked to stop advertising.
pub async fn wait_for_shutdown() -> Result<Shutdown> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let received = tokio::select! {
        _ = sigterm.recv() => Shutdown::Terminate,
        _ = sigint.recv() => Shutdown::Interrupt,
    };
    info!(target: "signals", "Received {}", received);

    Ok(received)
}
