//! Model load command.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};
use crate::protocol::{DEFAULT_BATCH_SIZE, NO_GPU};

fn unset_batch_size() -> i32 {
    -1
}

/// Request to load a model into a worker.
///
/// # Example
///
/// ```
/// use model_worker_wire::LoadCommand;
///
/// let load = LoadCommand::new("resnet", "/m/resnet.pt", "image_classifier")
///     .with_batch_size(8)
///     .with_gpu("0");
///
/// assert_eq!(load.effective_batch_size(), 8);
/// assert_eq!(load.gpu_index().unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadCommand {
    /// Model name.
    pub model_name: String,
    /// Filesystem path to the model artifacts.
    pub model_path: String,
    /// Requested batch size (negative = unset).
    #[serde(default = "unset_batch_size")]
    pub batch_size: i32,
    /// Handler identifier the worker uses to serve the model.
    pub handler: String,
    /// GPU selector as decimal text (`None` = no GPU).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
}

impl LoadCommand {
    /// Create a load command with an unset batch size and no GPU.
    pub fn new(
        model_name: impl Into<String>,
        model_path: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            model_path: model_path.into(),
            batch_size: unset_batch_size(),
            handler: handler.into(),
            gpu: None,
        }
    }

    /// Set the requested batch size.
    pub fn with_batch_size(mut self, batch_size: i32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the GPU selector.
    pub fn with_gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    /// Batch size as written on the wire.
    #[inline]
    pub fn effective_batch_size(&self) -> i32 {
        if self.batch_size < 0 {
            DEFAULT_BATCH_SIZE
        } else {
            self.batch_size
        }
    }

    /// GPU index as written on the wire (`NO_GPU` when absent).
    ///
    /// # Errors
    ///
    /// Returns `InvalidGpuSelector` unless the selector is a non-negative
    /// decimal integer that fits in an `i32`.
    pub fn gpu_index(&self) -> Result<i32> {
        match &self.gpu {
            None => Ok(NO_GPU),
            Some(selector) => selector
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|index| *index >= 0)
                .ok_or_else(|| WireError::InvalidGpuSelector(selector.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let load = LoadCommand::new("m", "/p", "h");
        assert_eq!(load.batch_size, -1);
        assert!(load.gpu.is_none());
    }

    #[test]
    fn test_negative_batch_size_defaults_to_one() {
        for batch_size in [-1, -5, i32::MIN] {
            let load = LoadCommand::new("m", "/p", "h").with_batch_size(batch_size);
            assert_eq!(load.effective_batch_size(), 1);
        }
    }

    #[test]
    fn test_non_negative_batch_size_kept() {
        let zero = LoadCommand::new("m", "/p", "h").with_batch_size(0);
        assert_eq!(zero.effective_batch_size(), 0);

        let large = LoadCommand::new("m", "/p", "h").with_batch_size(64);
        assert_eq!(large.effective_batch_size(), 64);
    }

    #[test]
    fn test_gpu_absent_is_no_gpu() {
        let load = LoadCommand::new("m", "/p", "h");
        assert_eq!(load.gpu_index().unwrap(), NO_GPU);
    }

    #[test]
    fn test_gpu_selector_parsed() {
        let load = LoadCommand::new("m", "/p", "h").with_gpu("3");
        assert_eq!(load.gpu_index().unwrap(), 3);

        let padded = LoadCommand::new("m", "/p", "h").with_gpu(" 1 ");
        assert_eq!(padded.gpu_index().unwrap(), 1);
    }

    #[test]
    fn test_gpu_selector_rejected() {
        for selector in ["", "cuda:0", "-1", "99999999999"] {
            let load = LoadCommand::new("m", "/p", "h").with_gpu(selector);
            let err = load.gpu_index().unwrap_err();
            assert!(
                matches!(err, WireError::InvalidGpuSelector(ref s) if s == selector),
                "selector {:?} should be rejected",
                selector
            );
        }
    }
}
