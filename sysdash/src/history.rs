//! Fixed-length history buffers backing the live charts.

use std::collections::VecDeque;

/// Samples kept per chart.
pub const SERIES_LEN: usize = 60;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() == cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

/// A FIFO window of exactly `cap` samples. Starts zero-filled so the chart
/// always spans the full width; each push drops the oldest sample.
#[derive(Debug, Clone)]
pub struct RollingSeries {
    samples: VecDeque<f64>,
    cap: usize,
}

impl RollingSeries {
    pub fn new(cap: usize) -> Self {
        let mut samples = VecDeque::with_capacity(cap);
        samples.resize(cap, 0.0);
        Self { samples, cap }
    }

    pub fn push(&mut self, v: f64) {
        push_capped(&mut self.samples, v, self.cap);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// (index, value) pairs for chart datasets.
    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }
}

impl Default for RollingSeries {
    fn default() -> Self {
        Self::new(SERIES_LEN)
    }
}
