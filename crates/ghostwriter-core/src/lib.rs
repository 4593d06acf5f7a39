//! Ghostwriter Core — shared post model, error type, data paths.

pub mod config;
pub mod error;
pub mod post;

pub use config::DataPaths;
pub use error::{Error, Result};
pub use post::{Language, LengthBucket, PostRecord};
