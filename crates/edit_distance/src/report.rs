use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use utility::matrix::Matrix;

use crate::{engine::EditDistance, sequence::Sequence, trace::Edit};

/// Tab separated rendering of the distance matrix.
///
/// The header lists `from`, every row is labelled with its `to` character.
/// Each field is terminated by a tab.
pub struct TableView<'a> {
    engine: &'a EditDistance,
}

impl<'a> TableView<'a> {
    pub fn new(engine: &'a EditDistance) -> Self {
        Self { engine }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let from = self.engine.from().chars();
        let to = self.engine.to().chars();
        writeln!(f, "\t\t{}", from.iter().map(|c| format!("{}\t", c)).join(""))?;
        for (i, row) in self.engine.matrix().iter_rows().enumerate() {
            let label = match i {
                0 => String::new(),
                _ => to[i - 1].to_string(),
            };
            let cells = row.iter().map(|value| format!("{}\t", value)).join("");
            writeln!(f, "{}\t{}", label, cells)?;
        }
        Ok(())
    }
}

/// Serializable state of an engine.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub from: &'a Sequence,
    pub to: &'a Sequence,
    pub distance: usize,
    pub calculated: bool,
    pub matrix: &'a Matrix<usize>,
    pub edits: Option<Vec<Edit>>,
}

impl<'a> Snapshot<'a> {
    pub fn new(engine: &'a EditDistance, with_edits: bool) -> Self {
        Self {
            from: engine.from(),
            to: engine.to(),
            distance: engine.distance(),
            calculated: engine.is_calculated(),
            matrix: engine.matrix(),
            edits: with_edits.then(|| engine.edit_script()).flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tab_separated_grid() {
        let mut engine = EditDistance::new("ab", "ba");
        engine.calculate();
        let text = TableView::new(&engine).to_string();
        assert_eq!(
            text,
            "\t\ta\tb\t\n\
             \t0\t1\t2\t\n\
             b\t1\t1\t1\t\n\
             a\t2\t1\t2\t\n"
        );
    }

    #[test]
    fn renders_base_case_before_calculate() {
        let engine = EditDistance::new("", "ab");
        let text = TableView::new(&engine).to_string();
        assert_eq!(text, "\t\t\n\t0\t\na\t1\t\nb\t2\t\n");
    }

    #[test]
    fn snapshot_json() {
        let mut engine = EditDistance::new("a", "b");
        engine.calculate();
        let json = serde_json::to_value(Snapshot::new(&engine, true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "a",
                "to": "b",
                "distance": 1,
                "calculated": true,
                "matrix": [[0, 1], [1, 1]],
                "edits": [{ "operation": "substitute", "from": "a", "to": "b" }],
            })
        );
    }

    #[test]
    fn snapshot_skips_missing_edits() {
        let engine = EditDistance::new("a", "b");
        let json = serde_json::to_value(Snapshot::new(&engine, true)).unwrap();
        assert!(json.get("edits").is_none());
        assert_eq!(json["calculated"], false);
        assert_eq!(json["distance"], 0);
    }
}
