//! Viewport controller
//!
//! The viewport is the single owner of the vertical scroll offset. Anchor
//! animations write through it, manual scrolling writes through it, and the
//! host reads the offset back from it when painting.
//!
//! Animations are fire-and-forget: starting a new one leaves older ones
//! running, and each frame applies their writes in request order, so the
//! last write of a frame wins.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{EasingType, ScrollConfig};

use super::animation::ScrollAnimation;
use super::scheduler::{AnimationId, FrameQueue, FrameScheduler, FrameTime};

/// Layout query used to resolve anchors
pub trait AnchorResolver {
    /// Top edge of the anchor relative to the viewport's top edge, given the
    /// current scroll offset. `None` when no anchor has this id.
    fn client_top(&self, anchor_id: &str, scroll_offset: f64) -> Option<f64>;
}

/// Result of asking the viewport to scroll somewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// An animation was created and its first frame requested
    Started(AnimationId),
    /// Smooth scrolling is off; the offset moved in a single write
    Jumped,
    /// The anchor did not resolve; nothing was written or scheduled
    TargetNotFound,
}

impl ScrollOutcome {
    /// True when the target resolved and the viewport began moving to it
    pub fn is_started(&self) -> bool {
        !matches!(self, ScrollOutcome::TargetNotFound)
    }

    pub fn animation_id(&self) -> Option<AnimationId> {
        match self {
            ScrollOutcome::Started(id) => Some(*id),
            _ => None,
        }
    }
}

/// Summary of one [`Viewport::run_frame`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Animations that received this frame
    pub ran: usize,
    /// Animations that completed on this frame
    pub completed: Vec<AnimationId>,
}

/// Owner of the scroll offset and the animations writing to it
#[derive(Debug)]
pub struct Viewport<S = FrameQueue> {
    offset: f64,
    max_offset: f64,
    smooth: bool,
    duration: std::time::Duration,
    easing: EasingType,
    animations: BTreeMap<AnimationId, ScrollAnimation>,
    next_id: u64,
    writes: u64,
    scheduler: S,
}

impl Viewport<FrameQueue> {
    /// Create a viewport at offset 0 driven by a [`FrameQueue`]
    pub fn new(config: &ScrollConfig) -> Self {
        Self::with_scheduler(config, FrameQueue::new())
    }
}

impl<S: FrameScheduler> Viewport<S> {
    /// Create a viewport at offset 0 with a custom scheduler
    pub fn with_scheduler(config: &ScrollConfig, scheduler: S) -> Self {
        Self {
            offset: 0.0,
            max_offset: f64::INFINITY,
            smooth: config.is_smooth(),
            duration: config.animation_duration(),
            easing: config.easing,
            animations: BTreeMap::new(),
            next_id: 0,
            writes: 0,
            scheduler,
        }
    }

    /// Apply new scroll settings to animations started from now on
    pub fn set_config(&mut self, config: &ScrollConfig) {
        self.smooth = config.is_smooth();
        self.duration = config.animation_duration();
        self.easing = config.easing;
    }

    /// Current scroll offset
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest reachable offset
    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Number of offset writes performed so far
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Set content and viewport heights; writes are clamped to
    /// `[0, content_height - viewport_height]` from now on
    pub fn set_extent(&mut self, content_height: f64, viewport_height: f64) {
        self.max_offset = (content_height - viewport_height).max(0.0);
        if self.offset > self.max_offset {
            self.offset = self.max_offset;
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Number of animations that have not completed yet
    pub fn active_animations(&self) -> usize {
        self.animations.len()
    }

    pub fn animation(&self, id: AnimationId) -> Option<&ScrollAnimation> {
        self.animations.get(&id)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Move the offset immediately
    ///
    /// Running animations keep their start offset and distance and will
    /// overwrite this on their next frame.
    pub fn set_offset(&mut self, offset: f64) {
        self.write(offset);
    }

    /// Move the offset immediately by `delta`
    pub fn scroll_by(&mut self, delta: f64) {
        self.write(self.offset + delta);
    }

    /// Scroll to the top of the anchor named `anchor_id`
    ///
    /// An unknown anchor is a silent no-op: no write, no frame request. The
    /// returned outcome lets callers tell the cases apart if they care.
    pub fn scroll_to_anchor<R>(&mut self, anchors: &R, anchor_id: &str) -> ScrollOutcome
    where
        R: AnchorResolver + ?Sized,
    {
        let Some(client_top) = anchors.client_top(anchor_id, self.offset) else {
            debug!("Anchor '{}' not found, ignoring scroll request", anchor_id);
            return ScrollOutcome::TargetNotFound;
        };

        let target = client_top + self.offset;
        let outcome = self.scroll_to(target);
        if let ScrollOutcome::Started(id) = outcome {
            debug!(
                "Scrolling to '{}' ({:.1} -> {:.1}) as animation {}",
                anchor_id, self.offset, target, id
            );
        }
        outcome
    }

    /// Scroll to an absolute document offset
    pub fn scroll_to(&mut self, target: f64) -> ScrollOutcome {
        if !self.smooth {
            self.write(target);
            return ScrollOutcome::Jumped;
        }

        let id = AnimationId(self.next_id);
        self.next_id += 1;

        let animation = ScrollAnimation::new(self.offset, target, self.duration, self.easing);
        self.animations.insert(id, animation);
        self.scheduler.request_frame(id);

        ScrollOutcome::Started(id)
    }

    /// Deliver a frame stamped `now` to every animation that asked for one
    ///
    /// Each animation writes its sampled offset, then either requests the
    /// following frame or completes and is dropped.
    pub fn run_frame(&mut self, now: FrameTime) -> FrameReport {
        let mut report = FrameReport::default();

        for id in self.scheduler.take_requests() {
            let Some(animation) = self.animations.get_mut(&id) else {
                continue;
            };
            let Some(sample) = animation.step(now) else {
                self.animations.remove(&id);
                continue;
            };

            report.ran += 1;
            self.write(sample.offset);

            if sample.reschedule {
                self.scheduler.request_frame(id);
            } else {
                self.animations.remove(&id);
                debug!("Animation {} finished at {:.1}", id, self.offset);
                report.completed.push(id);
            }
        }

        report
    }

    fn write(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset);
        self.writes += 1;
    }
}
