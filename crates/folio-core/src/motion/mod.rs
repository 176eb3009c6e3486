//! Scroll-reactive presentation values
//!
//! - `transform` - Map the scroll offset onto a style value (scale, opacity)
//! - `in_view` - Latch when a section first becomes sufficiently visible

pub mod in_view;
pub mod transform;

pub use in_view::InView;
pub use transform::{HeroMotion, ScrollTransform};
