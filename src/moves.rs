//! Move generation.
//!
//! Three move kinds exist: fill a glass from the tap, dump a glass out,
//! and pour one glass into another until the source empties or the
//! destination fills. Moves that change nothing (filling a full glass,
//! dumping an empty one, zero-volume pours) are pruned at generation time;
//! everything else is enumerated in a fixed order so repeated runs explore
//! the state space identically.

use crate::puzzle::PuzzleConfig;
use crate::state::{Fills, State};

/// One atomic move. Glass indices are 0-based; descriptions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Fill { glass: usize },
    Empty { glass: usize },
    Pour { from: usize, into: usize },
}

impl Move {
    /// Volume this move transfers, given the current fill levels.
    pub fn amount(&self, fills: &Fills, puzzle: &PuzzleConfig) -> u32 {
        match *self {
            Move::Fill { glass } => puzzle.capacities[glass] - fills[glass],
            Move::Empty { glass } => fills[glass],
            Move::Pour { from, into } => {
                fills[from].min(puzzle.capacities[into] - fills[into])
            }
        }
    }

    /// Human-readable description of the move and the volume it transfers.
    pub fn describe(&self, amount: u32) -> String {
        match *self {
            Move::Fill { glass } => format!("Fill glass {} (+ {})", glass + 1, amount),
            Move::Empty { glass } => format!("Dump glass {} (- {})", glass + 1, amount),
            Move::Pour { from, into } => format!(
                "Pour glass {} into glass {} (+/- {})",
                from + 1,
                into + 1,
                amount
            ),
        }
    }
}

/// Enumerate every legal move from the given fill levels.
///
/// Generation order is fixed: for each glass in ascending index order,
/// fill, then dump, then pours into every other glass in ascending index
/// order. Dequeue order plus this ordering makes search output
/// reproducible bit for bit.
pub fn legal_moves(fills: &Fills, puzzle: &PuzzleConfig) -> Vec<Move> {
    let glass_count = puzzle.glass_count();
    let mut moves = Vec::new();

    for g in 0..glass_count {
        if fills[g] < puzzle.capacities[g] {
            moves.push(Move::Fill { glass: g });
        }

        if fills[g] > 0 {
            moves.push(Move::Empty { glass: g });
        }

        for o in 0..glass_count {
            if o == g {
                continue;
            }
            let pour = fills[g].min(puzzle.capacities[o] - fills[o]);
            if pour == 0 {
                continue; // source empty, or destination full
            }
            moves.push(Move::Pour { from: g, into: o });
        }
    }

    moves
}

/// Generate all successor states of `state`, in move-generation order.
pub fn successors(state: &State, puzzle: &PuzzleConfig) -> Vec<State> {
    legal_moves(&state.fills, puzzle)
        .into_iter()
        .map(|mv| apply(state, mv, puzzle))
        .collect()
}

fn apply(state: &State, mv: Move, puzzle: &PuzzleConfig) -> State {
    let amount = mv.amount(&state.fills, puzzle);
    let desc = mv.describe(amount);
    match mv {
        Move::Fill { glass } => state.child(glass, puzzle.capacities[glass], None, &desc),
        Move::Empty { glass } => state.child(glass, 0, None, &desc),
        Move::Pour { from, into } => state.child(
            from,
            state.fills[from] - amount,
            Some((into, state.fills[into] + amount)),
            &desc,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_glasses() -> PuzzleConfig {
        PuzzleConfig::new(6, vec![4, 9])
    }

    fn fills(levels: &[u32]) -> Fills {
        Fills::from_slice(levels)
    }

    #[test]
    fn test_initial_state_only_fills() {
        let puzzle = two_glasses();
        let moves = legal_moves(&fills(&[0, 0]), &puzzle);
        assert_eq!(
            moves,
            vec![Move::Fill { glass: 0 }, Move::Fill { glass: 1 }]
        );
    }

    #[test]
    fn test_generation_order_is_fill_empty_pour_per_glass() {
        let puzzle = two_glasses();
        // Glass 1 full, glass 2 partially filled
        let moves = legal_moves(&fills(&[4, 5]), &puzzle);
        assert_eq!(
            moves,
            vec![
                Move::Empty { glass: 0 },
                Move::Pour { from: 0, into: 1 },
                Move::Fill { glass: 1 },
                Move::Empty { glass: 1 },
            ]
        );
    }

    #[test]
    fn test_zero_volume_pours_pruned() {
        let puzzle = two_glasses();
        // Glass 2 is full, so pouring into it moves nothing
        let moves = legal_moves(&fills(&[2, 9]), &puzzle);
        assert!(!moves.contains(&Move::Pour { from: 0, into: 1 }));
        assert!(moves.contains(&Move::Pour { from: 1, into: 0 }));

        // Glass 1 is empty, so pouring out of it moves nothing
        let moves = legal_moves(&fills(&[0, 3]), &puzzle);
        assert!(!moves.contains(&Move::Pour { from: 0, into: 1 }));
        assert!(moves.contains(&Move::Pour { from: 1, into: 0 }));
    }

    #[test]
    fn test_pour_amount_limited_by_destination() {
        let puzzle = two_glasses();
        let mv = Move::Pour { from: 1, into: 0 };
        assert_eq!(mv.amount(&fills(&[0, 9]), &puzzle), 4);
        assert_eq!(mv.amount(&fills(&[3, 9]), &puzzle), 1);
        assert_eq!(mv.amount(&fills(&[0, 2]), &puzzle), 2);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Move::Fill { glass: 0 }.describe(4),
            "Fill glass 1 (+ 4)"
        );
        assert_eq!(
            Move::Empty { glass: 1 }.describe(9),
            "Dump glass 2 (- 9)"
        );
        assert_eq!(
            Move::Pour { from: 1, into: 0 }.describe(4),
            "Pour glass 2 into glass 1 (+/- 4)"
        );
    }

    #[test]
    fn test_successor_fills_and_step_lines() {
        let puzzle = two_glasses();
        let start = State::initial(2);
        let first_moves = successors(&start, &puzzle);
        let filled = &first_moves[1]; // fill glass 2
        assert_eq!(filled.fills.as_slice(), &[0, 9]);
        assert_eq!(filled.path, vec!["[0,9] - Fill glass 2 (+ 9)".to_string()]);

        let children = successors(filled, &puzzle);
        // Fill glass 1, dump glass 2, pour glass 2 into glass 1
        assert_eq!(children.len(), 3);
        let poured = &children[2];
        assert_eq!(poured.fills.as_slice(), &[4, 5]);
        assert_eq!(
            poured.path.last().unwrap(),
            "[4,5] - Pour glass 2 into glass 1 (+/- 4)"
        );
    }

    #[test]
    fn test_successors_stay_within_capacity() {
        let puzzle = PuzzleConfig::new(7, vec![3, 8, 17]);
        let mut frontier = vec![State::initial(3)];
        for _ in 0..3 {
            let mut next = Vec::new();
            for state in &frontier {
                for successor in successors(state, &puzzle) {
                    for (i, &fill) in successor.fills.iter().enumerate() {
                        assert!(fill <= puzzle.capacities[i]);
                    }
                    next.push(successor);
                }
            }
            frontier = next;
        }
    }
}
