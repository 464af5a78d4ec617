//! Frame layout for each command.
//!
//! ```text
//! Frame       := VersionMarker CommandCode ModelName (LoadBody | PredictBody) "\r\n"
//! LoadBody    := ModelPath BatchSize Handler GpuIndex
//! PredictBody := LIST_START Batch* LIST_END
//! Batch       := RequestId ContentType LIST_START Input* LIST_END
//! Input       := Name ContentType PayloadLen PayloadBytes
//! ```
//!
//! Encoding runs in two passes. [`measure`] checks every field and returns
//! the exact frame size; [`write_frame`] then appends the bytes. A command
//! that fails `measure` never reaches the buffer.

use bytes::BufMut;

use super::fields::{blob_size, list_overhead, put_blob, put_list, put_opt_text, put_text};
use super::wire_format::{
    put_preamble, put_terminator, ABSOLUTE_MAX_FIELD_SIZE, INT_SIZE, PREAMBLE_SIZE, TERMINATOR,
};
use crate::command::{Command, LoadCommand, ModelInput, PredictCommand, RequestBatch};
use crate::error::{Result, WireError};

/// Validate `command` and return its encoded size in bytes.
///
/// # Errors
///
/// - `MissingField` for an empty required text field
/// - `FieldTooLarge` for a text or payload over `max_field_size`
/// - `InvalidGpuSelector` for a malformed GPU selector
pub fn measure(command: &Command, max_field_size: u32) -> Result<usize> {
    let limit = FieldLimit::new(max_field_size);
    let header = PREAMBLE_SIZE + limit.required("model_name", command.model_name())?;

    let body = match command {
        Command::Load(load) => measure_load(load, limit)?,
        Command::Predict(predict) => measure_predict(predict, limit)?,
    };

    Ok(header + body + TERMINATOR.len())
}

/// Append the frame for an already measured command.
///
/// # Errors
///
/// Only `InvalidGpuSelector`, which `measure` reports first.
pub fn write_frame<B: BufMut>(command: &Command, out: &mut B) -> Result<()> {
    match command {
        Command::Load(load) => {
            let gpu = load.gpu_index()?;
            put_preamble(out, command.code());
            put_text(out, &load.model_name);
            put_load_body(out, load, gpu);
        }
        Command::Predict(predict) => {
            put_preamble(out, command.code());
            put_text(out, &predict.model_name);
            put_list(out, &predict.request_batch, put_batch);
        }
    }
    put_terminator(out);
    Ok(())
}

fn put_load_body<B: BufMut>(out: &mut B, load: &LoadCommand, gpu: i32) {
    put_text(out, &load.model_path);
    out.put_i32(load.effective_batch_size());
    put_text(out, &load.handler);
    out.put_i32(gpu);
}

fn put_batch<B: BufMut>(out: &mut B, batch: &RequestBatch) {
    put_text(out, &batch.request_id);
    put_opt_text(out, batch.content_type.as_deref());
    put_list(out, &batch.model_inputs, put_input);
}

fn put_input<B: BufMut>(out: &mut B, input: &ModelInput) {
    put_text(out, &input.name);
    put_opt_text(out, input.content_type.as_deref());
    put_blob(out, &input.value);
}

/// Per-field size check against the configured limit.
#[derive(Clone, Copy)]
struct FieldLimit(u32);

impl FieldLimit {
    /// Limits above `ABSOLUTE_MAX_FIELD_SIZE` cannot be expressed by an
    /// `i32` length prefix and are clamped.
    fn new(max_field_size: u32) -> Self {
        Self(max_field_size.min(ABSOLUTE_MAX_FIELD_SIZE))
    }

    fn check(self, field: &'static str, len: usize) -> Result<usize> {
        if len > self.0 as usize {
            return Err(WireError::FieldTooLarge {
                field,
                size: len,
                max: self.0,
            });
        }
        Ok(blob_size(len))
    }

    fn required(self, field: &'static str, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Err(WireError::MissingField(field));
        }
        self.check(field, text.len())
    }

    fn optional(self, field: &'static str, text: Option<&str>) -> Result<usize> {
        self.check(field, text.map_or(0, str::len))
    }
}

fn measure_load(load: &LoadCommand, limit: FieldLimit) -> Result<usize> {
    let path = limit.required("model_path", &load.model_path)?;
    let handler = limit.required("handler", &load.handler)?;
    load.gpu_index()?;
    // batch size + gpu index
    Ok(path + handler + 2 * INT_SIZE)
}

fn measure_predict(predict: &PredictCommand, limit: FieldLimit) -> Result<usize> {
    let mut size = list_overhead();
    for batch in &predict.request_batch {
        size += limit.required("request_id", &batch.request_id)?;
        size += limit.optional("content_type", batch.content_type.as_deref())?;
        size += list_overhead();
        for input in &batch.model_inputs {
            size += limit.required("name", &input.name)?;
            size += limit.optional("content_type", input.content_type.as_deref())?;
            size += limit.check("value", input.value.len())?;
        }
    }
    Ok(size)
}
