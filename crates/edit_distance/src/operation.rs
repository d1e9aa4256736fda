use std::fmt;

use serde::Serialize;

/// The step that produced a cell of the distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Characters are equal, no cost.
    Match,
    /// Comes from the diagonal neighbour `(i - 1, j - 1)`.
    Substitution,
    /// Comes from the left neighbour `(i, j - 1)`.
    Insertion,
    /// Comes from the upper neighbour `(i - 1, j)`.
    Deletion,
}

impl Operation {
    pub fn cost(self) -> usize {
        match self {
            Operation::Match => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::Match => "match",
            Operation::Substitution => "substitution",
            Operation::Insertion => "insertion",
            Operation::Deletion => "deletion",
        };
        write!(f, "{}", name)
    }
}

/// Picks the cheapest of the three candidate costs.
///
/// On equal costs substitution wins over insertion, and insertion wins over
/// deletion. Path reconstruction relies on this order, so the fill and
/// `operation()` lookups both go through here.
pub(crate) fn cheapest(
    substitution: usize,
    insertion: usize,
    deletion: usize,
) -> (usize, Operation) {
    if substitution <= insertion && substitution <= deletion {
        (substitution, Operation::Substitution)
    } else if insertion <= deletion {
        (insertion, Operation::Insertion)
    } else {
        (deletion, Operation::Deletion)
    }
}
