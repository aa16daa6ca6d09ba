/// Data Transfer Objects for the application layer
mod output_format;

pub use output_format::OutputFormat;
