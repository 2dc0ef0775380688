use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

use generic_array::{ArrayLength, GenericArray};

/// Index struct to access cells in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square two-dimensional fixed-length array with side length `L`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<T, L: ArrayLength> {
    contents: GenericArray<GenericArray<T, L>, L>,
}

impl<T: Default, L: ArrayLength> Default for Grid<T, L> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, L: ArrayLength> Deref for Grid<T, L> {
    type Target = [GenericArray<T, L>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T, L: ArrayLength> Index<GridIndex> for Grid<T, L> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, L: ArrayLength> IndexMut<GridIndex> for Grid<T, L> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T, L: ArrayLength> Grid<T, L> {
    /// Returns a mutable reference to the cell at `index`, `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: GridIndex) -> Option<&mut T> {
        self.contents
            .as_mut_slice()
            .get_mut(index.row())
            .and_then(|row| row.as_mut_slice().get_mut(index.col()))
    }
}
