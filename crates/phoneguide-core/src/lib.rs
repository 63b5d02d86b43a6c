pub mod config;
pub mod error;
pub mod types;

pub use config::GuideConfig;
pub use error::{GuideError, Result};
pub use types::*;
