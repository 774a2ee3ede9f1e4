//! Data-source connection handle.
//!
//! The roster keeps everything in memory, so a connection carries no
//! resources. The handle exists so callers have an explicit open/close
//! lifecycle to log against; the binary opens one at startup and closes it
//! before exit.

/// An explicitly owned connection handle.
#[derive(Debug)]
pub struct Connection {
    connected: bool,
}

impl Connection {
    /// Opens a connection.
    #[must_use]
    pub fn open() -> Self {
        tracing::info!("connection opened");
        Self { connected: true }
    }

    /// Returns whether the connection is open.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Closes the connection. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.connected {
            self.connected = false;
            tracing::info!("connection closed");
        }
    }
}
