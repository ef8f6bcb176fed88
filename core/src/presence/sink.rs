//! Seam to the external rich-presence broadcaster client.

use async_trait::async_trait;
use thiserror::Error;

/// Only the present payload fields, keyed by wire name. Broadcaster clients
/// must never be handed absent fields.
pub type PresenceFields = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("broadcaster handshake failed: {0}")]
    Handshake(String),
    #[error("broadcast update failed: {0}")]
    Update(String),
}

/// A rich-presence broadcaster connection.
///
/// The application identity used for the handshake is an implementation
/// constant of the concrete client, not part of this seam.
#[async_trait]
pub trait PresenceSink: Send {
    /// One-time handshake, performed by the publish gate at construction.
    async fn connect(&mut self) -> Result<(), SinkError>;

    /// Transmit one update containing only present fields.
    async fn update(&mut self, fields: PresenceFields) -> Result<(), SinkError>;
}
