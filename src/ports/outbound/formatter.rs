use crate::application::read_models::HideoutReadModel;
use crate::shared::Result;

/// HideoutFormatter port for rendering the hideout read model
///
/// Implementations decide the output format (coloured text, JSON,
/// Markdown); they render only the sections present in the model.
pub trait HideoutFormatter {
    /// Renders the model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &HideoutReadModel) -> Result<String>;
}
