//! Frame request queue
//!
//! A running animation asks for exactly one more frame at a time. The host
//! drains the requests when it is ready to paint and hands each one a
//! timestamp; anything requested while a frame runs waits for the next one.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Frame timestamp, measured from an epoch chosen by the host
pub type FrameTime = Duration;

/// Identity of one animation instance within a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub(crate) u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// "Run this before the next repaint" registration primitive
pub trait FrameScheduler {
    /// Register `id` to receive the next frame
    fn request_frame(&mut self, id: AnimationId);

    /// Take every request registered so far, in arrival order
    fn take_requests(&mut self) -> Vec<AnimationId>;

    /// Number of requests waiting for a frame
    fn pending(&self) -> usize;
}

/// FIFO scheduler used by the terminal host
#[derive(Debug, Default)]
pub struct FrameQueue {
    requests: VecDeque<AnimationId>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, id: AnimationId) {
        self.requests.push_back(id);
    }

    fn take_requests(&mut self) -> Vec<AnimationId> {
        self.requests.drain(..).collect()
    }

    fn pending(&self) -> usize {
        self.requests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_drain_in_arrival_order() {
        let mut queue = FrameQueue::new();
        queue.request_frame(AnimationId(2));
        queue.request_frame(AnimationId(1));
        assert_eq!(queue.pending(), 2);

        assert_eq!(queue.take_requests(), vec![AnimationId(2), AnimationId(1)]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_requests_after_take_wait_for_next_drain() {
        let mut queue = FrameQueue::new();
        queue.request_frame(AnimationId(7));
        let current = queue.take_requests();
        for id in current {
            queue.request_frame(id);
        }
        assert_eq!(queue.pending(), 1);
    }
}
