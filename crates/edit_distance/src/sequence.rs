use std::{fmt, ops::Index};

use serde::{Serialize, Serializer};

/// Immutable list of characters compared by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<char>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl Index<usize> for Sequence {
    type Output = char;
    fn index(&self, index: usize) -> &char {
        &self.0[index]
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Self(value.chars().collect())
    }
}

impl From<String> for Sequence {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for Sequence {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<char>> for Sequence {
    fn from(value: Vec<char>) -> Self {
        Self(value)
    }
}

impl FromIterator<char> for Sequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
