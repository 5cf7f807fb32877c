#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Serialization of the constraint matrix as a Graphviz DOT document.
//!
//! Every emitted node is pinned (`pos="x,y!"`) so a layout engine that
//! honors fixed positions (e.g. `neato -n`) reproduces the matrix shape:
//! columns run left to right across the four constraint families, and the
//! vertical axis is flipped so the first candidate appears at the top.
//!
//! Two layouts are supported. The strip layout (`inactive_cells = true`)
//! emits a full `n²`-wide strip per candidate and family, padding every
//! non-covered column with a muted node, which shows the active column by
//! contrast. The compact layout emits exactly one node per candidate and
//! family, stacked within its column in first-occurrence order.

use crate::matrix::{Candidate, ConstraintType, GridParameters};
use itertools::iproduct;
use std::fmt::{self, Display, Formatter, Write};

/// Fill color of the padding nodes in the strip layout.
pub const INACTIVE_COLOR: &str = "#333333";

/// Fill color of a single node record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeColor {
    /// An HSV gradient color identifying a candidate; the hue is the
    /// candidate's linear index divided by the candidate count.
    Gradient(f64),
    /// The fixed muted color of padding nodes.
    Inactive,
}

impl NodeColor {
    /// Gradient color for the candidate at `index` out of `total`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gradient(index: usize, total: usize) -> Self {
        Self::Gradient(index as f64 / total as f64)
    }
}

impl Display for NodeColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient(hue) => write!(f, "{hue:.3} .7 .9"),
            Self::Inactive => f.write_str(INACTIVE_COLOR),
        }
    }
}

/// Produces the DOT document for the constraint matrix of one puzzle size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixGraphBuilder {
    params: GridParameters,
    inactive_cells: bool,
}

impl MatrixGraphBuilder {
    /// Creates a builder for the given grid, selecting the strip layout
    /// when `inactive_cells` is true and the compact layout otherwise.
    #[must_use]
    pub const fn new(params: GridParameters, inactive_cells: bool) -> Self {
        Self {
            params,
            inactive_cells,
        }
    }

    /// The grid parameters this builder renders.
    #[must_use]
    pub const fn params(self) -> GridParameters {
        self.params
    }

    /// Number of node records [`Self::build`] will emit: `n³·4` in the
    /// compact layout, `n³·4·n²` in the strip layout.
    #[must_use]
    pub const fn node_count(self) -> usize {
        let per_pair = if self.inactive_cells {
            self.params.family_width()
        } else {
            1
        };
        self.params.candidate_count() * ConstraintType::COUNT * per_pair
    }

    /// Builds the complete DOT document: header, node records, closing brace.
    #[must_use]
    pub fn build(self) -> String {
        let mut doc = String::from("graph G {\n");
        doc.push_str("bgcolor=black\n");
        doc.push_str("node [shape=circle,label=\"\",style=filled,width=.9]\n");
        doc.push_str(&self.body());
        doc.push_str("}\n");
        doc
    }

    /// Renders the node records alone, one per line, in generation order:
    /// candidates row-major with the digit innermost, then the four
    /// constraint families per candidate.
    #[must_use]
    pub fn body(self) -> String {
        let params = self.params;
        let n = params.grid_dim();
        let total = params.candidate_count();
        let mut out = String::new();

        // One occurrence counter per global column, scoped to this call.
        let mut column_rows = vec![0_usize; params.column_count()];

        for (r, c, z) in iproduct!(0..n, 0..n, 0..n) {
            let candidate = Candidate::new(r, c, z);
            let index = candidate.linear_index(params);
            let color = NodeColor::gradient(index, total);

            for family in ConstraintType::ALL {
                let base = family.offset(params);
                let col = family.column(params, candidate);

                if self.inactive_cells {
                    for i in 0..params.family_width() {
                        let fill = if i == col { color } else { NodeColor::Inactive };
                        push_node(&mut out, params, base + i, index, fill);
                    }
                } else {
                    let row = column_rows[base + col];
                    column_rows[base + col] += 1;
                    push_node(&mut out, params, base + col, row, color);
                }
            }
        }
        out
    }
}

/// Appends one node record. The printed y coordinate is `n³ − row` so row 0
/// renders at the top; the trailing `!` pins the position.
fn push_node(out: &mut String, params: GridParameters, col: usize, row: usize, color: NodeColor) {
    let y = params.candidate_count() - row;
    let _ = writeln!(out, "cell_{col}_{row} [pos=\"{col},{y}!\",color=\"{color}\"]");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_record(line: &str) -> (usize, usize, String) {
        let (name, attrs) = line.split_once(' ').unwrap();
        let mut coords = name.strip_prefix("cell_").unwrap().split('_');
        let col = coords.next().unwrap().parse().unwrap();
        let row = coords.next().unwrap().parse().unwrap();
        let color = attrs
            .split_once("color=\"")
            .unwrap()
            .1
            .strip_suffix("\"]")
            .unwrap()
            .to_string();
        (col, row, color)
    }

    #[test]
    fn test_gradient_color_formatting() {
        assert_eq!(NodeColor::gradient(0, 64).to_string(), "0.000 .7 .9");
        assert_eq!(NodeColor::gradient(27, 64).to_string(), "0.422 .7 .9");
        assert_eq!(NodeColor::Inactive.to_string(), "#333333");
    }

    #[test]
    fn test_document_header_and_footer() {
        let doc = MatrixGraphBuilder::new(GridParameters::new(1), false).build();
        assert!(doc.starts_with(
            "graph G {\nbgcolor=black\nnode [shape=circle,label=\"\",style=filled,width=.9]\n"
        ));
        assert!(doc.ends_with("}\n"));
    }

    #[test]
    fn test_compact_record_count() {
        for d in 1..=3 {
            let builder = MatrixGraphBuilder::new(GridParameters::new(d), false);
            let body = builder.body();
            assert_eq!(body.lines().count(), builder.node_count());
            assert_eq!(
                builder.node_count(),
                builder.params().candidate_count() * 4
            );
        }
    }

    #[test]
    fn test_strip_record_count() {
        let builder = MatrixGraphBuilder::new(GridParameters::new(2), true);
        assert_eq!(builder.node_count(), 4096);
        assert_eq!(builder.body().lines().count(), 4096);
    }

    #[test]
    fn test_compact_columns_fill_in_occurrence_order() {
        let params = GridParameters::new(2);
        let body = MatrixGraphBuilder::new(params, false).body();

        let mut rows_seen: Vec<Vec<usize>> = vec![Vec::new(); params.column_count()];
        for line in body.lines() {
            let (col, row, _) = parse_record(line);
            rows_seen[col].push(row);
        }
        for rows in &rows_seen {
            assert_eq!(*rows, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_compact_records_all_gradient_colored() {
        let body = MatrixGraphBuilder::new(GridParameters::new(2), false).body();
        for line in body.lines() {
            let (_, _, color) = parse_record(line);
            assert_ne!(color, INACTIVE_COLOR);
            assert!(color.ends_with(" .7 .9"));
        }
    }

    #[test]
    fn test_strip_rows_match_candidate_index() {
        let params = GridParameters::new(2);
        let body = MatrixGraphBuilder::new(params, true).body();
        let width = params.family_width();

        for (i, line) in body.lines().enumerate() {
            let (_, row, _) = parse_record(line);
            assert_eq!(row, i / (width * ConstraintType::COUNT));
        }
    }

    #[test]
    fn test_strip_has_one_active_node_per_family() {
        let params = GridParameters::new(2);
        let body = MatrixGraphBuilder::new(params, true).body();
        let lines: Vec<&str> = body.lines().collect();

        for strip in lines.chunks(params.family_width()) {
            let active = strip
                .iter()
                .filter(|line| !line.contains(INACTIVE_COLOR))
                .count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_strip_active_node_record_shape() {
        let params = GridParameters::new(2);
        let body = MatrixGraphBuilder::new(params, true).body();

        // Candidate (1,2,3) has linear index 27 and covers cell column 6;
        // its strips start at line 27·4·16.
        let line = body.lines().nth(27 * 64 + 6).unwrap();
        assert_eq!(line, "cell_6_27 [pos=\"6,37!\",color=\"0.422 .7 .9\"]");
    }

    #[test]
    fn test_output_is_deterministic() {
        for inactive_cells in [false, true] {
            let builder = MatrixGraphBuilder::new(GridParameters::new(2), inactive_cells);
            assert_eq!(builder.build(), builder.build());
        }
    }
}
