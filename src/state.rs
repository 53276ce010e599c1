//! Search states: glass fill levels plus the move history that produced them.
//!
//! States are immutable once constructed. Applying a move never mutates the
//! parent; it derives a fresh child with one or two fill levels replaced and
//! one step line appended to the history.

use smallvec::SmallVec;

/// Fill levels indexed by glass. Inline storage covers typical puzzles
/// without heap allocation per state.
pub type Fills = SmallVec<[u32; 8]>;

/// A snapshot of all glass fill levels and the steps taken to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Current volume in each glass; `fills[i] <= capacities[i]` always holds
    pub fills: Fills,
    /// One line per move from the initial state, formatted
    /// `"<key> - <description>"` with the key of the state after the move
    pub path: Vec<String>,
}

impl State {
    /// The unique starting state: every glass empty, no moves taken.
    pub fn initial(glass_count: usize) -> Self {
        Self {
            fills: SmallVec::from_elem(0, glass_count),
            path: Vec::new(),
        }
    }

    /// Canonical key for the fill levels, e.g. `[0,4,9]`.
    ///
    /// Two states reached by different move sequences but holding the same
    /// volumes produce identical keys; the visited set relies on this.
    pub fn key(&self) -> String {
        let mut out = String::with_capacity(2 + self.fills.len() * 3);
        out.push('[');
        for (i, fill) in self.fills.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&fill.to_string());
        }
        out.push(']');
        out
    }

    /// Number of moves taken to reach this state.
    pub fn moves_taken(&self) -> usize {
        self.path.len()
    }

    /// Derive the successor state for one move: replace the fill level of
    /// `glass` (and of a second glass for pours), then append the step line.
    pub fn child(&self, glass: usize, fill: u32, other: Option<(usize, u32)>, desc: &str) -> State {
        let mut fills = self.fills.clone();
        fills[glass] = fill;
        if let Some((other_glass, other_fill)) = other {
            fills[other_glass] = other_fill;
        }

        let mut child = State {
            fills,
            path: Vec::with_capacity(self.path.len() + 1),
        };
        child.path.extend(self.path.iter().cloned());
        let line = format!("{} - {}", child.key(), desc);
        child.path.push(line);
        child
    }
}
