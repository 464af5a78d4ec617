//! Inference command and its nested records.
//!
//! Batches and inputs keep their insertion order; the frame preserves it.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Request to run inference on a loaded model.
///
/// # Example
///
/// ```
/// use model_worker_wire::{ModelInput, PredictCommand, RequestBatch};
///
/// let predict = PredictCommand::new("resnet").with_batch(
///     RequestBatch::new("req-1")
///         .with_content_type("image/jpeg")
///         .with_input(ModelInput::new("data", vec![0xFFu8, 0xD8])),
/// );
///
/// assert_eq!(predict.request_batch.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictCommand {
    /// Model name.
    pub model_name: String,
    /// Batches in arrival order.
    #[serde(default)]
    pub request_batch: Vec<RequestBatch>,
}

impl PredictCommand {
    /// Create a predict command with no batches.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            request_batch: Vec::new(),
        }
    }

    /// Append a batch.
    pub fn with_batch(mut self, batch: RequestBatch) -> Self {
        self.request_batch.push(batch);
        self
    }

    /// Total payload bytes across all inputs of all batches.
    pub fn payload_len(&self) -> usize {
        self.request_batch
            .iter()
            .flat_map(|batch| batch.model_inputs.iter())
            .map(|input| input.value.len())
            .sum()
    }
}

/// One client request inside a predict command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBatch {
    /// Request identifier.
    pub request_id: String,
    /// Content type shared by the inputs, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Inputs in order.
    #[serde(default)]
    pub model_inputs: Vec<ModelInput>,
}

impl RequestBatch {
    /// Create a batch with no content type and no inputs.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            content_type: None,
            model_inputs: Vec::new(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Append an input.
    pub fn with_input(mut self, input: ModelInput) -> Self {
        self.model_inputs.push(input);
        self
    }
}

/// A named input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    /// Input name.
    pub name: String,
    /// Content type of this input, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Raw payload, written verbatim.
    #[serde(default)]
    pub value: Bytes,
}

impl ModelInput {
    /// Create an input with no content type.
    pub fn new(name: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            value: value.into(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
