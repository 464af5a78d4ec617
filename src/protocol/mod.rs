//! Protocol module - wire format, field primitives and frame layout.
//!
//! This module implements the binary frame sent to model workers:
//! - 12-byte preamble (version marker + command code)
//! - Length-prefixed text and byte fields
//! - Sentinel-delimited lists of batches and inputs
//! - `\r\n` terminator

mod fields;
pub(crate) mod frame;
mod wire_format;

pub use wire_format::{
    put_preamble, put_terminator, CommandCode, ABSOLUTE_MAX_FIELD_SIZE, DEFAULT_BATCH_SIZE,
    DEFAULT_MAX_FIELD_SIZE, INT_SIZE, LIST_END, LIST_START, NO_GPU, PREAMBLE_SIZE, TERMINATOR,
    VERSION_MARKER, VERSION_MARKER_SIZE,
};

use bytes::BufMut;

use crate::codec::FrameEncoder;
use crate::command::Command;
use crate::error::Result;

/// Append the frame for `command` to `out` using default limits.
///
/// Shorthand for `FrameEncoder::new().encode(command, out)`.
///
/// # Example
///
/// ```
/// use model_worker_wire::protocol::encode;
/// use model_worker_wire::{Command, LoadCommand};
///
/// let command = Command::Load(LoadCommand::new("resnet", "/m/resnet.pt", "h"));
/// let mut out: Vec<u8> = Vec::new();
/// encode(&command, &mut out).unwrap();
///
/// assert_eq!(&out[out.len() - 2..], b"\r\n");
/// ```
pub fn encode<B: BufMut>(command: &Command, out: &mut B) -> Result<()> {
    FrameEncoder::new().encode(command, out)
}
