//! Codec module - turns commands into wire frames.
//!
//! - [`FrameEncoder`] - validates a command and appends its frame to any `BufMut`
//! - [`EncoderConfig`] - field size limits
//!
//! # Design
//!
//! The encoder holds only its configuration and never buffers data between
//! calls. Each call validates the whole command first and then writes, so a
//! rejected command never leaves a partial frame behind.

mod encoder;

pub use encoder::{EncoderConfig, FrameEncoder};
