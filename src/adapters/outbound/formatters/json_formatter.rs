use crate::application::read_models::HideoutReadModel;
use crate::ports::outbound::HideoutFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HideoutFormatter for JsonFormatter {
    fn format(&self, model: &HideoutReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}
