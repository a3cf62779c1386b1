use serde::Serialize;

use crate::outcome::FlipOutcome;

/// Cumulative flip counters. `total_count` always equals heads plus tails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    heads_count: u64,
    tails_count: u64,
    total_count: u64,
}

impl Statistics {
    /// Counters whose total would overflow come back as zero.
    pub fn new(heads_count: u64, tails_count: u64) -> Self {
        Self::try_new(heads_count, tails_count).unwrap_or_default()
    }

    /// `None` when heads plus tails does not fit in a `u64`.
    pub fn try_new(heads_count: u64, tails_count: u64) -> Option<Self> {
        Some(Self {
            heads_count,
            tails_count,
            total_count: heads_count.checked_add(tails_count)?,
        })
    }

    pub fn heads_count(&self) -> u64 {
        self.heads_count
    }

    pub fn tails_count(&self) -> u64 {
        self.tails_count
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Counters stop at `u64::MAX` total.
    pub fn record(&mut self, outcome: FlipOutcome) {
        // heads and tails never exceed the total, so they cannot overflow first
        let Some(total) = self.total_count.checked_add(1) else {
            return;
        };
        self.total_count = total;
        match outcome {
            FlipOutcome::Heads => self.heads_count += 1,
            FlipOutcome::Tails => self.tails_count += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
