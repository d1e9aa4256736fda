use std::fmt;

use serde::Serialize;

use crate::{engine::EditDistance, operation::Operation};

/// One step of an edit script.
///
/// Scripts walk both sequences front to back: `Insert` consumes a character
/// of `from` only, `Delete` consumes a character of `to` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Edit {
    Keep { ch: char },
    Substitute { from: char, to: char },
    Insert { ch: char },
    Delete { ch: char },
}

impl Edit {
    pub fn operation(&self) -> Operation {
        match self {
            Edit::Keep { .. } => Operation::Match,
            Edit::Substitute { .. } => Operation::Substitution,
            Edit::Insert { .. } => Operation::Insertion,
            Edit::Delete { .. } => Operation::Deletion,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Edit::Keep { ch } => write!(f, "keep {}", ch),
            Edit::Substitute { from, to } => write!(f, "substitute {} {}", from, to),
            Edit::Insert { ch } => write!(f, "insert {}", ch),
            Edit::Delete { ch } => write!(f, "delete {}", ch),
        }
    }
}

impl EditDistance {
    /// Backtracks from the last cell to `(0, 0)`.
    ///
    /// Returns `None` while the matrix is not calculated.
    pub fn edit_script(&self) -> Option<Vec<Edit>> {
        if !self.is_calculated() {
            return None;
        }
        let (from, to) = (self.from(), self.to());
        let (mut i, mut j) = (to.len(), from.len());
        let mut edits = Vec::with_capacity(i.max(j));
        while let Some(operation) = self.operation(i, j) {
            let edit = match operation {
                Operation::Match => Edit::Keep { ch: to[i - 1] },
                Operation::Substitution => Edit::Substitute {
                    from: from[j - 1],
                    to: to[i - 1],
                },
                Operation::Insertion => Edit::Insert { ch: from[j - 1] },
                Operation::Deletion => Edit::Delete { ch: to[i - 1] },
            };
            match operation {
                Operation::Match | Operation::Substitution => {
                    i -= 1;
                    j -= 1;
                }
                Operation::Insertion => j -= 1,
                Operation::Deletion => i -= 1,
            }
            edits.push(edit);
        }
        edits.reverse();
        Some(edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(from: &str, to: &str) -> Vec<Edit> {
        let mut engine = EditDistance::new(from, to);
        engine.calculate();
        engine.edit_script().unwrap()
    }

    fn cost(edits: &[Edit]) -> usize {
        edits.iter().map(|edit| edit.operation().cost()).sum()
    }

    #[test]
    fn none_before_calculate() {
        let mut engine = EditDistance::new("a", "b");
        assert_eq!(engine.edit_script(), None);
        engine.calculate();
        assert!(engine.edit_script().is_some());
        engine.set_to("c");
        assert_eq!(engine.edit_script(), None);
    }

    #[test]
    fn identical_sequences_keep_everything() {
        let edits = script("abc", "abc");
        assert_eq!(
            edits,
            vec![
                Edit::Keep { ch: 'a' },
                Edit::Keep { ch: 'b' },
                Edit::Keep { ch: 'c' },
            ]
        );
    }

    #[test]
    fn empty_sides() {
        assert_eq!(script("", ""), vec![]);
        assert_eq!(
            script("ab", ""),
            vec![Edit::Insert { ch: 'a' }, Edit::Insert { ch: 'b' }]
        );
        assert_eq!(
            script("", "ab"),
            vec![Edit::Delete { ch: 'a' }, Edit::Delete { ch: 'b' }]
        );
    }

    #[test]
    fn tie_is_traced_as_substitution() {
        assert_eq!(
            script("ab", "ba"),
            vec![
                Edit::Substitute { from: 'a', to: 'b' },
                Edit::Substitute { from: 'b', to: 'a' },
            ]
        );
    }

    #[test]
    fn kitten_sitting() {
        let edits = script("kitten", "sitting");
        assert_eq!(
            edits,
            vec![
                Edit::Substitute { from: 'k', to: 's' },
                Edit::Keep { ch: 'i' },
                Edit::Keep { ch: 't' },
                Edit::Keep { ch: 't' },
                Edit::Substitute { from: 'e', to: 'i' },
                Edit::Keep { ch: 'n' },
                Edit::Delete { ch: 'g' },
            ]
        );
        assert_eq!(cost(&edits), 3);
    }

    #[test]
    fn script_walks_both_sequences() {
        for (from, to) in [("flaw", "lawn"), ("intention", "execution"), ("aba", "bab")]
        {
            let mut engine = EditDistance::new(from, to);
            engine.calculate();
            let edits = engine.edit_script().unwrap();
            assert_eq!(cost(&edits), engine.distance());

            let consumed_from: String = edits
                .iter()
                .filter_map(|edit| match edit {
                    Edit::Keep { ch } | Edit::Insert { ch } => Some(*ch),
                    Edit::Substitute { from, .. } => Some(*from),
                    Edit::Delete { .. } => None,
                })
                .collect();
            let consumed_to: String = edits
                .iter()
                .filter_map(|edit| match edit {
                    Edit::Keep { ch } | Edit::Delete { ch } => Some(*ch),
                    Edit::Substitute { to, .. } => Some(*to),
                    Edit::Insert { .. } => None,
                })
                .collect();
            assert_eq!(consumed_from, from);
            assert_eq!(consumed_to, to);
        }
    }

    #[test]
    fn serializes_with_operation_tag() {
        let json = serde_json::to_string(&Edit::Substitute { from: 'a', to: 'b' })
            .unwrap();
        assert_eq!(json, r#"{"operation":"substitute","from":"a","to":"b"}"#);
    }
}
