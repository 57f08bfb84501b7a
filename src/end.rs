use crate::scorer::PlacedArrow;
use serde::{Deserialize, Serialize};

/// Host-side record of the end being shot.
///
/// `previous_len` is the arrow count before the latest change, so a scorer
/// can tell a cleared end (n > 0 to 0) apart from a fresh one. `revision`
/// bumps on every change so repeated syncs of the same state are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndState {
    arrows: Vec<PlacedArrow>,
    previous_len: usize,
    revision: u64,
}

/// Arrow count before and after the latest change to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTransition {
    pub previous_len: usize,
    pub current_len: usize,
}

impl EndTransition {
    /// A drop from a non-empty end to an empty one.
    pub fn is_new_end(&self) -> bool {
        self.previous_len > 0 && self.current_len == 0
    }
}

impl EndState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arrows(&self) -> &[PlacedArrow] {
        &self.arrows
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn transition(&self) -> EndTransition {
        EndTransition {
            previous_len: self.previous_len,
            current_len: self.arrows.len(),
        }
    }

    pub fn record(&mut self, arrow: PlacedArrow) {
        self.previous_len = self.arrows.len();
        self.arrows.push(arrow);
        self.revision += 1;
    }

    /// Removes the most recent arrow, e.g. to correct a mis-tap.
    pub fn undo(&mut self) -> Option<PlacedArrow> {
        let removed = self.arrows.pop();
        if removed.is_some() {
            self.previous_len = self.arrows.len() + 1;
            self.revision += 1;
        }
        removed
    }

    /// Closes the current end and returns its arrows.
    pub fn begin_new_end(&mut self) -> Vec<PlacedArrow> {
        self.previous_len = self.arrows.len();
        self.revision += 1;
        std::mem::take(&mut self.arrows)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSummary {
    pub arrows: usize,
    pub total: u32,
    pub hits: usize,
    pub misses: usize,
    /// Tens including Xs.
    pub tens: usize,
    pub x_count: usize,
}

impl EndSummary {
    pub fn from_arrows(arrows: &[PlacedArrow]) -> Self {
        let mut s = Self::default();
        for a in arrows {
            s.arrows += 1;
            s.total += a.score.value();
            if a.score.is_miss() {
                s.misses += 1;
            } else {
                s.hits += 1;
            }
            if a.score.is_ten() {
                s.tens += 1;
            }
            if a.score == crate::scorer::ArrowInput::X {
                s.x_count += 1;
            }
        }
        s
    }

    pub fn merge(&mut self, other: &EndSummary) {
        self.arrows += other.arrows;
        self.total += other.total;
        self.hits += other.hits;
        self.misses += other.misses;
        self.tens += other.tens;
        self.x_count += other.x_count;
    }
}
