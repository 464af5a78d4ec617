//! # model-worker-wire
//!
//! Binary frame encoder for commands sent from a model server frontend to
//! its backend worker processes.
//!
//! ## Frame format
//!
//! ```text
//! │ 1.0 (f64) │ cmd (i32) │ model name │ body │ \r\n │
//! ```
//!
//! - **Load** (`cmd = 1`): model path, batch size, handler, GPU index
//! - **Predict** (`cmd = 2`): sentinel-delimited list of request batches,
//!   each holding a sentinel-delimited list of inputs
//!
//! Integers are 4-byte Big Endian, text is length-prefixed UTF-8.
//! Decoding, transport and worker selection live elsewhere.
//!
//! ## Example
//!
//! ```
//! use model_worker_wire::codec::FrameEncoder;
//! use model_worker_wire::{Command, ModelInput, PredictCommand, RequestBatch};
//!
//! let command = Command::Predict(PredictCommand::new("resnet").with_batch(
//!     RequestBatch::new("req-1").with_input(ModelInput::new("data", vec![0x01u8, 0x02])),
//! ));
//!
//! let mut out = bytes::BytesMut::new();
//! FrameEncoder::new().encode(&command, &mut out).unwrap();
//! assert!(out.ends_with(b"\r\n"));
//! ```

pub mod codec;
pub mod command;
pub mod error;
pub mod protocol;

pub use codec::{EncoderConfig, FrameEncoder};
pub use command::{Command, LoadCommand, ModelInput, PredictCommand, RequestBatch};
pub use error::{Result, WireError};
