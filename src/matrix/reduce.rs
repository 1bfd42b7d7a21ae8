use crate::matrix::{core::Matrix, field::Field};

impl<F: Field> Matrix<F> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// `1 × 1` and `2 × 2` matrices are handled directly; larger ones recurse
    /// into their minors, skipping first-row entries that are zero. The cost
    /// is factorial in the size, which is fine for the small matrices a
    /// calculator deals with. The matrix must be square.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![2.0_f32, 0.0, 1.0],
    ///                                vec![1.0, 3.0, 2.0],
    ///                                vec![1.0, 1.0, 1.0]]).unwrap();
    /// assert_eq!(m.determinant(), 0.0);
    /// ```
    #[must_use]
    pub fn determinant(&self) -> F {
        let n = self.rows();
        match n {
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            _ => {
                let mut determinant = F::zero();
                for column in 0..n {
                    let entry = self[(0, column)];
                    if entry.is_zero() {
                        continue;
                    }
                    let cofactor = entry * self.first_row_minor(column).determinant();
                    determinant = if column % 2 == 0 {
                        determinant + cofactor
                    } else {
                        determinant - cofactor
                    };
                }
                determinant
            },
        }
    }

    /// The matrix left after deleting row `0` and column `skip`.
    fn first_row_minor(&self, skip: usize) -> Self {
        let n = self.rows();
        let mut minor = Self::zeros(n - 1, n - 1);
        for i in 1..n {
            let mut target = 0;
            for j in (0..n).filter(|&j| j != skip) {
                minor[(i - 1, target)] = self[(i, j)];
                target += 1;
            }
        }
        minor
    }

    /// Returns a row-echelon form of the matrix.
    ///
    /// Rows are processed top to bottom without swapping: the first non-zero
    /// entry of each row is its pivot, and every entry strictly below the
    /// pivot is eliminated. The non-zero rows of the result are linearly
    /// independent, which is all [`rank`](Self::rank) needs.
    #[must_use]
    pub fn row_echelon_form(&self) -> Self {
        let mut echelon = self.clone();
        for row in 0..echelon.rows() {
            let Some(pivot_column) = (0..echelon.columns()).find(|&j| !echelon[(row, j)].is_zero())
            else {
                continue;
            };
            echelon.eliminate_below(row, pivot_column);
        }
        echelon
    }

    /// Number of linearly independent rows.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0_f32, 2.0], vec![2.0, 4.0]]).unwrap();
    /// assert_eq!(m.rank(), 1);
    /// ```
    #[must_use]
    pub fn rank(&self) -> usize {
        let echelon = self.row_echelon_form();
        (0..echelon.rows()).filter(|&row| !echelon.is_zero_row(row))
                           .count()
    }

    /// Returns the reduced row-echelon form of the matrix.
    ///
    /// For each pivot column `i < min(rows, columns)` a row at or below `i`
    /// with a non-zero entry in that column is swapped into row `i`, the
    /// column is cleared in every other row and the pivot row is divided by
    /// its pivot. Columns without a usable pivot are skipped, so for a
    /// rank-deficient matrix the diagonal may contain zeros.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// // x + y = 3, x - y = 1
    /// let system = Matrix::from_rows(vec![vec![1.0_f32, 1.0, 3.0],
    ///                                     vec![1.0, -1.0, 1.0]]).unwrap();
    /// let reduced = system.reduced_row_echelon_form();
    ///
    /// assert_eq!(reduced.to_rows(), vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);
    /// ```
    #[must_use]
    pub fn reduced_row_echelon_form(&self) -> Self {
        let mut reduced = self.clone();
        for i in 0..reduced.rows().min(reduced.columns()) {
            let Some(pivot_row) = (i..reduced.rows()).find(|&j| !reduced[(j, i)].is_zero()) else {
                continue;
            };
            reduced.swap_rows(i, pivot_row);
            reduced.eliminate_others(i, i);
            reduced.normalize_row(i, i);
        }
        reduced
    }

    /// Inverts the matrix in place.
    ///
    /// The augmented matrix `[A | I]` is brought to reduced row-echelon form
    /// and its right half is copied back. The matrix must be square and
    /// non-singular; the evaluator checks the determinant beforehand.
    pub fn invert(&mut self) -> &mut Self {
        let n = self.rows();
        let columns = self.columns();
        let mut augmented = Self::zeros(n, 2 * columns);
        for i in 0..n {
            for j in 0..columns {
                augmented[(i, j)] = self[(i, j)];
            }
            augmented[(i, columns + i)] = F::one();
        }

        let reduced = augmented.reduced_row_echelon_form();
        for i in 0..n {
            for j in 0..columns {
                self[(i, j)] = reduced[(i, columns + j)];
            }
        }
        self
    }

    /// Returns the inverse, leaving `self` untouched.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![2.0_f32, 0.0], vec![0.0, 4.0]]).unwrap();
    /// assert_eq!(m.inverse().to_rows(), vec![vec![0.5, 0.0], vec![0.0, 0.25]]);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = self.clone();
        inverse.invert();
        inverse
    }

    /// Raises a square matrix to a non-negative integer power.
    ///
    /// Uses exponentiation by squaring: `M¹ = M`, `M²ᵏ = (Mᵏ)²` and
    /// `M²ᵏ⁺¹ = M²ᵏ · M`. `M⁰` is the identity.
    ///
    /// # Example
    /// ```
    /// use matrica::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0_f32, 1.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(m.pow(5).to_rows(), vec![vec![8.0, 5.0], vec![5.0, 3.0]]);
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        match exponent {
            0 => Self::identity(self.rows()),
            1 => self.clone(),
            _ if exponent % 2 == 0 => {
                let half = self.pow(exponent / 2);
                &half * &half
            },
            _ => &self.pow(exponent - 1) * self,
        }
    }

    /// Clears column `column` in every row below `row` using `row` as pivot.
    fn eliminate_below(&mut self, row: usize, column: usize) {
        for target in row + 1..self.rows() {
            self.subtract_multiple(target, row, column);
        }
    }

    /// Clears column `column` in every row except `row`.
    fn eliminate_others(&mut self, row: usize, column: usize) {
        for target in (0..self.rows()).filter(|&target| target != row) {
            self.subtract_multiple(target, row, column);
        }
    }

    /// `target -= pivot_row * (target[column] / pivot_row[column])`.
    ///
    /// The cleared entry is stored as an exact zero so rounding residue can
    /// not resurface as a pivot later on.
    fn subtract_multiple(&mut self, target: usize, pivot_row: usize, column: usize) {
        let entry = self[(target, column)];
        if entry.is_zero() {
            return;
        }
        let coefficient = entry / self[(pivot_row, column)];
        for j in 0..self.columns() {
            let scaled = self[(pivot_row, j)] * coefficient;
            self[(target, j)] = self[(target, j)] - scaled;
        }
        self[(target, column)] = F::zero();
    }

    /// Divides row `row` by its entry in `column`, which becomes exactly one.
    fn normalize_row(&mut self, row: usize, column: usize) {
        let pivot = self[(row, column)];
        for j in 0..self.columns() {
            self[(row, j)] = self[(row, j)] / pivot;
        }
        self[(row, column)] = F::one();
    }
}
