use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::matrix::field::Field;

/// A dense, non-empty, row-major matrix over a [`Field`].
///
/// Every row has the same number of columns and both dimensions are at least
/// one. The operations in this module and in [`reduce`](crate::matrix::reduce)
/// assume their operands have compatible shapes; the evaluator validates
/// shapes before calling them.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F: Field = f32> {
    rows:    usize,
    columns: usize,
    data:    Vec<F>,
}

impl<F: Field> Matrix<F> {
    /// Builds a matrix from a list of rows.
    ///
    /// Returns `None` if there are no rows, the first row is empty, or the
    /// rows differ in length.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0_f32, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::<f32>::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_none());
    /// assert!(Matrix::<f32>::from_rows(Vec::new()).is_none());
    /// ```
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<F>>) -> Option<Self> {
        let columns = rows.first()?.len();
        if columns == 0 || rows.iter().any(|row| row.len() != columns) {
            return None;
        }

        Some(Self { rows: rows.len(),
                    columns,
                    data: rows.into_iter().flatten().collect() })
    }

    /// Creates a `rows × columns` matrix filled with zeros.
    ///
    /// Both dimensions must be non-zero.
    #[must_use]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0, "matrix dimensions must be non-zero");

        Self { rows,
               columns,
               data: vec![F::zero(); rows * columns] }
    }

    /// Creates the `size × size` identity matrix.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut identity = Self::zeros(size, size);
        for i in 0..size {
            identity[(i, i)] = F::one();
        }
        identity
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Borrows row `index` as a slice.
    #[must_use]
    pub fn row(&self, index: usize) -> &[F] {
        &self.data[index * self.columns..(index + 1) * self.columns]
    }

    /// Copies the entries out into a vector of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<F>> {
        self.data.chunks(self.columns).map(<[F]>::to_vec).collect()
    }

    /// Iterates over all entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.data.iter()
    }

    /// Applies `f` to every entry, producing a matrix of the same shape.
    #[must_use]
    pub fn map(&self, f: impl Fn(F) -> F) -> Self {
        Self { rows:    self.rows,
               columns: self.columns,
               data:    self.data.iter().map(|&x| f(x)).collect(), }
    }

    /// Multiplies every entry by `factor`.
    #[must_use]
    pub fn scale(&self, factor: F) -> Self {
        self.map(|x| x * factor)
    }

    /// Returns the transpose.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0_f32, 2.0, 3.0]]).unwrap();
    /// let t = m.transposed();
    ///
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(t.to_rows(), vec![vec![1.0], vec![2.0], vec![3.0]]);
    /// ```
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut transposed = Self::zeros(self.columns, self.rows);
        for i in 0..self.rows {
            for j in 0..self.columns {
                transposed[(j, i)] = self[(i, j)];
            }
        }
        transposed
    }

    /// Sum of the main diagonal. The matrix must be square.
    #[must_use]
    pub fn trace(&self) -> F {
        (0..self.rows).fold(F::zero(), |sum, i| sum + self[(i, i)])
    }

    /// Swaps rows `first` and `second` in place.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        for j in 0..self.columns {
            self.data.swap(first * self.columns + j, second * self.columns + j);
        }
    }

    /// Returns `true` if every entry of row `index` is zero.
    #[must_use]
    pub fn is_zero_row(&self, index: usize) -> bool {
        self.row(index).iter().all(Field::is_zero)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(F, F) -> F) -> Self {
        debug_assert_eq!(self.shape(), rhs.shape(), "elementwise operands must share a shape");

        Self { rows:    self.rows,
               columns: self.columns,
               data:    self.data
                            .iter()
                            .zip(&rhs.data)
                            .map(|(&a, &b)| f(a, b))
                            .collect(), }
    }
}

impl<F: Field> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &F {
        &self.data[row * self.columns + column]
    }
}

impl<F: Field> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut F {
        &mut self.data[row * self.columns + column]
    }
}

impl<F: Field> Add for &Matrix<F> {
    type Output = Matrix<F>;

    fn add(self, rhs: Self) -> Matrix<F> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<F: Field> Sub for &Matrix<F> {
    type Output = Matrix<F>;

    fn sub(self, rhs: Self) -> Matrix<F> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<F: Field> Mul for &Matrix<F> {
    type Output = Matrix<F>;

    /// Matrix product. The left operand's column count must equal the right
    /// operand's row count; the result is `left.rows() × right.columns()`.
    fn mul(self, rhs: Self) -> Matrix<F> {
        debug_assert_eq!(self.columns, rhs.rows, "inner dimensions must agree");

        let mut product = Matrix::zeros(self.rows, rhs.columns);
        for i in 0..self.rows {
            for k in 0..rhs.columns {
                let mut sum = F::zero();
                for j in 0..self.columns {
                    sum = sum + self[(i, j)] * rhs[(j, k)];
                }
                product[(i, k)] = sum;
            }
        }
        product
    }
}

impl<F: Field> std::fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.data.chunks(self.columns).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (column, value) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
