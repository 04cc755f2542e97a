use super::Coord;

/// Fixed-size, row-major storage indexed by [`Coord`].
///
/// Used for the maze cells themselves and for the per-search bookkeeping
/// (visited flags, parents, scores) so solvers never touch the maze's own cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

/// Number of cells in a `rows` x `cols` grid.
///
/// # Panics
/// If the count overflows `usize`.
fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => panic!("{}x{} grid overflows usize", rows, cols),
    }
}

impl<T: Clone> Grid<T> {
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        let data = vec![value; cell_count(rows, cols)].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` once per coordinate, in row-major order.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut data = Vec::with_capacity(cell_count(rows, cols));
        data.extend(
            (0..rows)
                .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
                .map(&mut f),
        );
        let data = data.into_boxed_slice();
        Grid { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            Some(&self.data[self.ravel_index(coord)])
        } else {
            None
        }
    }

    /// Iterates over all values in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {} out of bounds for {}x{} grid",
            index,
            self.rows,
            self.cols
        );
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {} out of bounds for {}x{} grid",
            index,
            self.rows,
            self.cols
        );
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
