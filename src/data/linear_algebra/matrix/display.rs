use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::matrix::{Order, Sparse, Storage};
use crate::data::linear_algebra::traits::Element;

/// Uncompressed: the dense grid, zeros included, one row per line.
///
/// Compressed: the three arrays on labeled lines, values first, then the offsets, then the minor
/// indices.
impl<F: Element, O: Order> Display for Sparse<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Uncompressed(_) => {
                let grid = (0..self.nr_rows)
                    .map(|row| (0..self.nr_columns)
                        .map(|column| self.get(row, column).to_string())
                        .collect::<Vec<_>>())
                    .collect::<Vec<_>>();
                let width = grid.iter().flatten().map(String::len).max().unwrap_or(0);

                for row in grid {
                    let line = row.iter()
                        .map(|value| format!("{0:>width$}", value, width = width))
                        .collect::<Vec<_>>();
                    writeln!(f, "{}", line.join(" "))?;
                }

                Ok(())
            },
            Storage::Compressed { values, indices, offsets } => {
                write_sequence(f, "Values:", values)?;
                write_sequence(f, "Offsets:", offsets)?;
                write_sequence(f, "Indices:", indices)
            },
        }
    }
}

fn write_sequence<T: Display>(f: &mut fmt::Formatter<'_>, label: &str, items: &[T]) -> fmt::Result {
    write!(f, "{}", label)?;
    for item in items {
        write!(f, " {}", item)?;
    }
    writeln!(f)
}
