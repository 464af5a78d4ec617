//! Command frame encoder.
//!
//! Stateless: a single `FrameEncoder` can be copied into any number of
//! threads, each encoding into its own buffer.
//!
//! # Example
//!
//! ```
//! use model_worker_wire::codec::FrameEncoder;
//! use model_worker_wire::{Command, PredictCommand};
//!
//! let encoder = FrameEncoder::new();
//! let command = Command::Predict(PredictCommand::new("resnet"));
//!
//! let frame = encoder.encode_to_bytes(&command).unwrap();
//! assert_eq!(frame.len(), encoder.encoded_len(&command).unwrap());
//! assert!(frame.ends_with(b"\r\n"));
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use crate::command::Command;
use crate::error::{Result, WireError};
use crate::protocol::frame::{measure, write_frame};
use crate::protocol::{ABSOLUTE_MAX_FIELD_SIZE, DEFAULT_MAX_FIELD_SIZE};

/// Configuration for the frame encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Largest text or payload field accepted, in bytes.
    ///
    /// Values above `ABSOLUTE_MAX_FIELD_SIZE` are clamped.
    pub max_field_size: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_field_size: DEFAULT_MAX_FIELD_SIZE,
        }
    }
}

/// Encodes commands into wire frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameEncoder {
    config: EncoderConfig,
}

impl FrameEncoder {
    /// Create an encoder with default settings (max field size: 1GB).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a custom max field size.
    pub fn with_max_field_size(max_field_size: u32) -> Self {
        Self::with_config(EncoderConfig { max_field_size })
    }

    /// Create an encoder from a full configuration.
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            config: EncoderConfig {
                max_field_size: config.max_field_size.min(ABSOLUTE_MAX_FIELD_SIZE),
            },
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Exact size of the frame `command` encodes to.
    ///
    /// # Errors
    ///
    /// Same as [`FrameEncoder::encode`].
    pub fn encoded_len(&self, command: &Command) -> Result<usize> {
        measure(command, self.config.max_field_size)
    }

    /// Append one complete frame for `command` to `out`.
    ///
    /// The command is validated and measured against the space left in
    /// `out` before anything is written: on error, `out` is left exactly
    /// as it was.
    ///
    /// # Errors
    ///
    /// - `MissingField` if a required text field is empty
    /// - `FieldTooLarge` if a field exceeds the configured limit
    /// - `InvalidGpuSelector` if a load command's GPU selector is malformed
    /// - `BufferTooSmall` if `out` cannot grow to hold the whole frame
    pub fn encode<B: BufMut>(&self, command: &Command, out: &mut B) -> Result<()> {
        let len = self
            .encoded_len(command)
            .and_then(|len| fits(len, out.remaining_mut()).map(|()| len))
            .map_err(|e| {
                tracing::debug!(
                    "Rejected {} command for model {:?}: {}",
                    command.code().name(),
                    command.model_name(),
                    e
                );
                e
            })?;

        write_frame(command, out)?;

        let payload = match command {
            Command::Predict(predict) => predict.payload_len(),
            Command::Load(_) => 0,
        };
        tracing::trace!(
            "Encoded {} frame for model {} ({} bytes, {} payload)",
            command.code().name(),
            command.model_name(),
            len,
            payload
        );
        Ok(())
    }

    /// Encode `command` into a new buffer sized to fit the frame exactly.
    pub fn encode_to_bytes(&self, command: &Command) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.encoded_len(command)?);
        self.encode(command, &mut buf)?;
        Ok(buf.freeze())
    }
}

fn fits(needed: usize, remaining: usize) -> Result<()> {
    if needed > remaining {
        return Err(WireError::BufferTooSmall { needed, remaining });
    }
    Ok(())
}
