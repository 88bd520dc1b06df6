use std::io::Write;

use anyhow::Result;

use super::Cell;

/// The dynamic programming table for a global alignment.
#[derive(Clone)]
pub struct Cache {
    x_length: usize,
    y_length: usize,
    /// The table cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    ///
    /// ```text
    ///     [
    ///
    ///         c_(0, 0), c_(0, 1), ..., c_(0, M),
    ///         c_(1, 0), c_(1, 1), ..., c_(1, M),
    ///         ...
    ///         c_(N, 0), c_(N, 1), ..., c_(N, M)
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     N:        <x_length>
    ///     M:        <y_length>
    ///     c_(i, j): the cell for the first i residues of x
    ///               against the first j residues of y
    /// ```
    ///
    cells: Vec<Cell>,
}

impl Default for Cache {
    fn default() -> Self {
        Cache::new(0, 0)
    }
}

impl Cache {
    pub fn new(x_length: usize, y_length: usize) -> Self {
        Cache {
            x_length,
            y_length,
            cells: vec![Cell::default(); (x_length + 1) * (y_length + 1)],
        }
    }

    /// The number of rows: one per prefix of x, including the empty prefix.
    pub fn rows(&self) -> usize {
        self.x_length + 1
    }

    /// The number of columns: one per prefix of y, including the empty prefix.
    pub fn cols(&self) -> usize {
        self.y_length + 1
    }

    #[inline]
    pub fn get(&self, x_idx: usize, y_idx: usize) -> &Cell {
        debug_assert!(x_idx <= self.x_length);
        debug_assert!(y_idx <= self.y_length);
        &self.cells[x_idx * (self.y_length + 1) + y_idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, x_idx: usize, y_idx: usize, cell: Cell) {
        debug_assert!(x_idx <= self.x_length);
        debug_assert!(y_idx <= self.y_length);
        self.cells[x_idx * (self.y_length + 1) + y_idx] = cell;
    }

    #[inline]
    pub(crate) fn mark(&mut self, x_idx: usize, y_idx: usize) {
        debug_assert!(x_idx <= self.x_length);
        debug_assert!(y_idx <= self.y_length);
        self.cells[x_idx * (self.y_length + 1) + y_idx].mark();
    }

    /// The coordinates of every marked cell, in row-major order.
    pub fn path(&self) -> Vec<(usize, usize)> {
        (0..self.rows())
            .flat_map(|x_idx| (0..self.cols()).map(move |y_idx| (x_idx, y_idx)))
            .filter(|&(x_idx, y_idx)| self.get(x_idx, y_idx).is_marked())
            .collect()
    }

    /// Write every cell as `<score><parent>`, followed by a `*` for cells on the path.
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let x_idx_width = self.x_length.to_string().len();
        let column_width = 8;

        // write the y indices
        write!(out, "{}", " ".repeat(x_idx_width + 1))?;
        for y_idx in 0..self.cols() {
            write!(out, "{:>w$} ", y_idx, w = column_width)?;
        }
        writeln!(out)?;

        write!(out, "{}", " ".repeat(x_idx_width + 1))?;
        for _ in 0..self.cols() {
            write!(out, "{} ", "-".repeat(column_width))?;
        }
        writeln!(out)?;

        for x_idx in 0..self.rows() {
            write!(out, "{:w$} ", x_idx, w = x_idx_width)?;
            for y_idx in 0..self.cols() {
                let cell = self.get(x_idx, y_idx);
                let flag = if cell.is_marked() { "*" } else { " " };
                write!(
                    out,
                    "{:>w$}{}{} ",
                    cell.score(),
                    cell.parent(),
                    flag,
                    w = column_width - 2
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::structs::Direction;

    #[test]
    fn test_cache_get_set() {
        let mut cache = Cache::new(3, 4);
        assert_eq!(cache.rows(), 4);
        assert_eq!(cache.cols(), 5);

        (0..=3).for_each(|row| {
            (0..=4).for_each(|col| {
                cache.set(row, col, Cell::new((row * 10 + col) as i32, Direction::Up));
            });
        });

        (0..=3).for_each(|row| {
            (0..=4).for_each(|col| {
                assert_eq!(cache.get(row, col).score(), (row * 10 + col) as i32);
                assert_eq!(cache.get(row, col).parent(), Direction::Up);
                assert!(!cache.get(row, col).is_marked());
            });
        });
    }

    #[test]
    fn test_cache_empty_sequences() {
        let cache = Cache::new(0, 0);
        assert_eq!(cache.rows(), 1);
        assert_eq!(cache.cols(), 1);
        assert_eq!(*cache.get(0, 0), Cell::default());
    }

    #[test]
    fn test_cache_default_is_empty_table() {
        let cache = Cache::default();
        assert_eq!(cache.rows(), 1);
        assert_eq!(cache.cols(), 1);
        assert_eq!(*cache.get(0, 0), Cell::default());
        assert!(cache.path().is_empty());

        let mut out: Vec<u8> = vec![];
        assert!(cache.dump(&mut out).is_ok());
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 3);
    }

    #[test]
    fn test_cache_mark_and_path() {
        let mut cache = Cache::new(2, 2);
        cache.mark(2, 2);
        cache.mark(1, 1);
        cache.mark(0, 0);
        assert_eq!(cache.path(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_cache_dump() -> anyhow::Result<()> {
        let mut cache = Cache::new(1, 1);
        cache.set(0, 1, Cell::new(-1, Direction::Left));
        cache.set(1, 0, Cell::new(-1, Direction::Up));
        cache.set(1, 1, Cell::new(2, Direction::Diagonal));
        cache.mark(1, 1);
        cache.mark(0, 0);

        let mut out: Vec<u8> = vec![];
        cache.dump(&mut out)?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "0      0-*     -1L  ");
        assert_eq!(lines[3], "1     -1U       2D* ");
        Ok(())
    }
}
