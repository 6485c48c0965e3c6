//! Infrastructure layer - Reading input and configuration

pub mod config;
pub mod input;

pub use config::{Config, OutputFormat};
pub use input::{parse_event, read_event, read_text};
