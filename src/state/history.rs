use std::collections::VecDeque;

use crate::model::{HISTORY_CAPACITY, Millis, Point, TouchSample};

/// Sliding window of the most recent `HISTORY_CAPACITY` samples of one touch.
#[derive(Clone, Debug)]
pub struct TouchHistory {
    samples: VecDeque<TouchSample>,
    origin: Point,
}

impl TouchHistory {
    /// Seeds the window with the touch-down sample.
    pub fn new(position: Point, time: Millis) -> Self {
        let mut samples = VecDeque::with_capacity(HISTORY_CAPACITY);
        samples.push_back(TouchSample { position, time });
        Self {
            samples,
            origin: position,
        }
    }

    /// Appends a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, position: Point, time: Millis) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(TouchSample { position, time });
    }

    /// Where the touch went down. Unlike `first()`, never evicted.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn first(&self) -> Option<&TouchSample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&TouchSample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchSample> {
        self.samples.iter()
    }
}
