use itertools::Itertools;
use num::Zero;

/// Fixed size, zero filled, row major storage.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix<T = f64> {
    rows: usize,
    columns: usize,
    content: Vec<T>,
}

impl<T: Zero + Clone> Matrix<T> {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            content: vec![T::zero(); rows * columns],
        }
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.content.get(row * self.columns + column)
    }

    fn row(&self, row: usize) -> &[T] {
        &self.content[row * self.columns..(row + 1) * self.columns]
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = (0..self.rows)
            .map(|row| self.row(row).iter().join(" "))
            .join("\n");
        write!(f, "{s}")
    }
}
