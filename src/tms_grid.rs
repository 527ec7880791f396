// Square grid container shared by the mine layout and the reveal marks

/// A size x size grid stored row-major in a single vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn filled(size: usize, fill: T) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major cell vector.
    /// Returns the vector back if its length is not size * size.
    pub fn from_vec(size: usize, cells: Vec<T>) -> Result<Self, Vec<T>> {
        if cells.len() != size * size {
            return Err(cells);
        }
        Ok(Grid { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells.get(self.index(row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        self.cells.get_mut(idx)
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate all cells with their (row, col) coordinates
    pub fn positions(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / size, i % size), c))
    }

    /// Coordinates of the up-to-8 cells around (row, col), clipped to the grid.
    /// The cell itself is not included.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let (rows, cols) = if self.contains(row, col) {
            let last = self.size - 1;
            (
                row.saturating_sub(1)..=(row + 1).min(last),
                col.saturating_sub(1)..=(col + 1).min(last),
            )
        } else {
            (1..=0, 1..=0)
        };
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .filter(move |&p| p != (row, col))
    }
}
