pub mod config;
pub mod error;
pub mod motion;
pub mod portfolio;
pub mod scroll;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use portfolio::{PageLayout, Project};
pub use scroll::{ScrollOutcome, Viewport};
