//! Smooth anchor scrolling
//!
//! Moves the viewport's vertical offset to an anchor over a fixed duration
//! following an easing curve. Nothing here touches a terminal or a clock:
//! frames are delivered by the host through [`Viewport::run_frame`] with a
//! timestamp, and re-registration goes through an injected
//! [`FrameScheduler`].
//!
//! # Layers
//!
//! ## Atoms
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation helpers
//! - `scheduler` - Frame request queue
//!
//! ## Molecules
//! - `animation` - One anchor animation as an explicit state machine
//! - `viewport` - Owner of the scroll offset; starts and drives animations
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use folio_core::{PageLayout, ScrollConfig, Viewport};
//!
//! let page = PageLayout::new(40);
//! let mut viewport = Viewport::new(&ScrollConfig::default());
//! viewport.set_extent(page.content_height(), 40.0);
//!
//! let outcome = viewport.scroll_to_anchor(&page, "projects");
//! assert!(outcome.is_started());
//!
//! // The host calls this once per frame with its frame timestamp.
//! let mut now = Duration::ZERO;
//! while viewport.is_animating() {
//!     viewport.run_frame(now);
//!     now += Duration::from_millis(16);
//! }
//! ```

// Atoms
pub mod easing;
pub mod scheduler;
pub mod timing;

// Molecules
pub mod animation;
pub mod viewport;

pub use animation::{AnimationState, FrameSample, ScrollAnimation};
pub use easing::ease_in_out_quad;
pub use scheduler::{AnimationId, FrameQueue, FrameScheduler, FrameTime};
pub use viewport::{AnchorResolver, FrameReport, ScrollOutcome, Viewport};
