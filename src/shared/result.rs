/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and the application layer propagate through this alias;
/// the pure core reports [`crate::shared::error::HideoutError`] directly.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
