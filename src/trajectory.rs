//! Fixed-capacity position history used to draw body trails.
//!
//! Samples are stored in a circular buffer: once full, each insert overwrites
//! the oldest slot and advances the head, so inserting is O(1). Iteration
//! always yields samples oldest-first.

use bevy::math::DVec2;

/// Fill level of a trajectory buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrajectoryState {
    /// Fewer than `N` samples stored.
    Filling,
    /// Exactly `N` samples stored; every insert evicts the oldest.
    Full,
}

/// Ring buffer holding the `N` most recent positions of a body.
#[derive(Clone, Debug)]
pub struct Trajectory<const N: usize> {
    samples: [DVec2; N],
    /// Index of the oldest sample once full, 0 while filling.
    head: usize,
    len: usize,
}

impl<const N: usize> Default for Trajectory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Trajectory<N> {
    pub fn new() -> Self {
        Self {
            samples: [DVec2::ZERO; N],
            head: 0,
            len: 0,
        }
    }

    /// Append a sample, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, position: DVec2) {
        if N == 0 {
            return;
        }

        if self.len < N {
            self.samples[self.len] = position;
            self.len += 1;
        } else {
            self.samples[self.head] = position;
            self.head = (self.head + 1) % N;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn state(&self) -> TrajectoryState {
        if self.len < N {
            TrajectoryState::Filling
        } else {
            TrajectoryState::Full
        }
    }

    /// Most recently inserted sample.
    pub fn latest(&self) -> Option<DVec2> {
        if self.len == 0 {
            return None;
        }
        let index = (self.head + self.len - 1) % N;
        Some(self.samples[index])
    }

    /// Iterate stored samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        (0..self.len).map(move |i| self.samples[(self.head + i) % N])
    }

    /// Drop all samples, returning to the `Filling` state.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
