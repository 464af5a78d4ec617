//! Command module - the objects a frame is built from.
//!
//! Provides:
//! - [`Command`] - closed set of commands a worker understands
//! - [`LoadCommand`] - load a model
//! - [`PredictCommand`], [`RequestBatch`], [`ModelInput`] - run inference
//!
//! Commands also round-trip through the management API's JSON form:
//!
//! ```
//! use model_worker_wire::Command;
//!
//! let json = r#"{"command":"load","modelName":"resnet","modelPath":"/m/resnet.pt","handler":"h"}"#;
//! let command = Command::from_json(json).unwrap();
//!
//! assert_eq!(command.model_name(), "resnet");
//! ```

mod load;
mod predict;

pub use load::LoadCommand;
pub use predict::{ModelInput, PredictCommand, RequestBatch};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, WireError};
use crate::protocol::CommandCode;

/// Command sent to a backend worker.
///
/// Parsed with [`Command::from_json`]; only serialization is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Load a model.
    Load(LoadCommand),
    /// Run inference.
    Predict(PredictCommand),
}

impl Command {
    /// Name of the model this command targets.
    pub fn model_name(&self) -> &str {
        match self {
            Command::Load(load) => &load.model_name,
            Command::Predict(predict) => &predict.model_name,
        }
    }

    /// Wire code for this command.
    pub fn code(&self) -> CommandCode {
        match self {
            Command::Load(_) => CommandCode::Load,
            Command::Predict(_) => CommandCode::Predict,
        }
    }

    /// Parse a JSON command document.
    ///
    /// The `command` field selects the variant (`"load"` or `"predict"`).
    ///
    /// # Errors
    ///
    /// - `MissingField("command")` if the tag is absent
    /// - `UnsupportedCommand` for any other tag value, string or not
    /// - `Json` if the document does not match the selected variant
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let kind = match value.get("command") {
            None => return Err(WireError::MissingField("command")),
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => return Err(WireError::UnsupportedCommand(other.to_string())),
        };

        match kind {
            "load" => Ok(Command::Load(serde_json::from_value(value)?)),
            "predict" => Ok(Command::Predict(serde_json::from_value(value)?)),
            other => Err(WireError::UnsupportedCommand(other.to_string())),
        }
    }

    /// Serialize to a JSON command document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<LoadCommand> for Command {
    fn from(load: LoadCommand) -> Self {
        Command::Load(load)
    }
}

impl From<PredictCommand> for Command {
    fn from(predict: PredictCommand) -> Self {
        Command::Predict(predict)
    }
}
