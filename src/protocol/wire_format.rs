//! Wire format constants and the frame preamble.
//!
//! Every frame starts with a 12-byte preamble:
//! ```text
//! ┌────────────────┬──────────────┐
//! │ Version marker │ Command code │
//! │ 8 bytes        │ 4 bytes      │
//! │ f64 BE = 1.0   │ int32 BE     │
//! └────────────────┴──────────────┘
//! ```
//!
//! All multi-byte integers and the version double are Big Endian.
//! Text fields are UTF-8.

use bytes::BufMut;

use crate::error::WireError;

/// Protocol version marker written at the start of every frame.
pub const VERSION_MARKER: f64 = 1.0;

/// Size of the version marker in bytes.
pub const VERSION_MARKER_SIZE: usize = 8;

/// Size of every fixed-width integer field in bytes.
pub const INT_SIZE: usize = 4;

/// Preamble size in bytes (version marker + command code).
pub const PREAMBLE_SIZE: usize = VERSION_MARKER_SIZE + INT_SIZE;

/// Sentinel opening a list of records.
pub const LIST_START: i32 = -1;

/// Sentinel closing a list of records.
pub const LIST_END: i32 = -2;

/// End-of-message bytes closing every frame.
pub const TERMINATOR: &[u8; 2] = b"\r\n";

/// Batch size written when the command leaves it unset (negative).
pub const DEFAULT_BATCH_SIZE: i32 = 1;

/// GPU index written when the command has no GPU selector.
pub const NO_GPU: i32 = -1;

/// Default maximum size of a single text or payload field (1 GB).
pub const DEFAULT_MAX_FIELD_SIZE: u32 = 1_073_741_824;

/// Absolute maximum field size (max i32, the largest signed length prefix).
pub const ABSOLUTE_MAX_FIELD_SIZE: u32 = i32::MAX as u32;

/// Command code carried in the frame preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CommandCode {
    /// Load a model into the worker.
    Load = 1,
    /// Run inference on a loaded model.
    Predict = 2,
}

impl CommandCode {
    /// Wire value of this code.
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Lowercase command name, as used in JSON command documents.
    pub fn name(self) -> &'static str {
        match self {
            CommandCode::Load => "load",
            CommandCode::Predict => "predict",
        }
    }
}

impl TryFrom<i32> for CommandCode {
    type Error = WireError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CommandCode::Load),
            2 => Ok(CommandCode::Predict),
            other => Err(WireError::UnsupportedCommand(format!("code {}", other))),
        }
    }
}

/// Write the frame preamble (version marker + command code).
#[inline]
pub fn put_preamble<B: BufMut>(out: &mut B, code: CommandCode) {
    out.put_f64(VERSION_MARKER);
    out.put_i32(code.as_i32());
}

/// Write the end-of-message terminator.
#[inline]
pub fn put_terminator<B: BufMut>(out: &mut B) {
    out.put_slice(TERMINATOR);
}
