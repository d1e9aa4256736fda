use utility::matrix::Matrix;

use crate::{
    operation::{cheapest, Operation},
    sequence::Sequence,
};

/// Wagner–Fischer edit distance between two sequences.
///
/// Rows of the matrix follow `to`, columns follow `from`, so cell `(i, j)`
/// holds the distance between the first `i` characters of `to` and the first
/// `j` characters of `from`. Assigning a new sequence rebuilds the matrix and
/// drops any previous fill; `calculate` has to be called again afterwards.
#[derive(Debug, Clone)]
pub struct EditDistance {
    from: Sequence,
    to: Sequence,
    table: Matrix<usize>,
    calculated: bool,
}

impl EditDistance {
    pub fn new<F, T>(from: F, to: T) -> Self
    where
        F: Into<Sequence>,
        T: Into<Sequence>,
    {
        let from = from.into();
        let to = to.into();
        let table = base_table(&from, &to);
        Self {
            from,
            to,
            table,
            calculated: false,
        }
    }

    pub fn from(&self) -> &Sequence {
        &self.from
    }

    pub fn to(&self) -> &Sequence {
        &self.to
    }

    pub fn set_from<S: Into<Sequence>>(&mut self, from: S) {
        self.from = from.into();
        self.reset();
    }

    pub fn set_to<S: Into<Sequence>>(&mut self, to: S) {
        self.to = to.into();
        self.reset();
    }

    /// Fills every interior cell of the matrix.
    pub fn calculate(&mut self) {
        for i in 1..=self.to.len() {
            for j in 1..=self.from.len() {
                self.table[(i, j)] = self.candidate(i, j).0;
            }
        }
        self.calculated = true;
        log::debug!(
            "calculated {}x{} table for {:?} -> {:?}: distance {}",
            self.table.rows(),
            self.table.cols(),
            self.from.to_string(),
            self.to.to_string(),
            self.distance()
        );
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    /// Value of the last cell.
    ///
    /// Before `calculate` this is the base case when one sequence is empty
    /// and `0` otherwise.
    pub fn distance(&self) -> usize {
        self.table[(self.to.len(), self.from.len())]
    }

    pub fn matrix(&self) -> &Matrix<usize> {
        &self.table
    }

    /// The operation that produced cell `(i, j)`.
    ///
    /// Returns `None` for `(0, 0)`, for cells outside the matrix and for
    /// interior cells that have not been calculated yet.
    pub fn operation(&self, i: usize, j: usize) -> Option<Operation> {
        if i > self.to.len() || j > self.from.len() {
            return None;
        }
        match (i, j) {
            (0, 0) => None,
            (0, _) => Some(Operation::Insertion),
            (_, 0) => Some(Operation::Deletion),
            _ if self.calculated => Some(self.candidate(i, j).1),
            _ => None,
        }
    }

    /// Cost of cell `(i, j)` from its already filled neighbours.
    fn candidate(&self, i: usize, j: usize) -> (usize, Operation) {
        let diagonal = self.table[(i - 1, j - 1)];
        if self.to[i - 1] == self.from[j - 1] {
            log::trace!("({}, {}) match {}", i, j, self.to[i - 1]);
            return (diagonal, Operation::Match);
        }
        let substitution = diagonal + 1;
        let insertion = self.table[(i, j - 1)] + 1;
        let deletion = self.table[(i - 1, j)] + 1;
        let (cost, operation) = cheapest(substitution, insertion, deletion);
        log::trace!(
            "({}, {}) sub={} ins={} del={} -> {}",
            i,
            j,
            substitution,
            insertion,
            deletion,
            operation
        );
        (cost, operation)
    }

    fn reset(&mut self) {
        self.table = base_table(&self.from, &self.to);
        self.calculated = false;
    }
}

/// Zero filled matrix with the first row and column set to the base case.
fn base_table(from: &Sequence, to: &Sequence) -> Matrix<usize> {
    let mut table = Matrix::new(to.len() + 1, from.len() + 1, 0);
    for i in 0..table.rows() {
        table[(i, 0)] = i;
    }
    for j in 0..table.cols() {
        table[(0, j)] = j;
    }
    table
}

/// Edit distance between `from` and `to` in one call.
pub fn edit_distance(from: &str, to: &str) -> usize {
    let mut engine = EditDistance::new(from, to);
    engine.calculate();
    engine.distance()
}
