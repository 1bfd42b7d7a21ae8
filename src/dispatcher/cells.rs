use crate::{
    error::{Error, SemanticError, SyntaxError},
    matrix::Matrix,
};

/// Parses one matrix cell.
///
/// A cell is a real number, or two real numbers separated by `/` which are
/// divided. Surrounding whitespace is ignored.
///
/// # Errors
/// - `SyntaxError::InvalidCell` if either part is not a finite number.
/// - `SemanticError::CellDivisionByZero` if the denominator is zero.
///
/// # Example
/// ```
/// use matrica::dispatcher::cells::parse_cell;
///
/// assert_eq!(parse_cell("-2.5"), Ok(-2.5));
/// assert_eq!(parse_cell("3/4"), Ok(0.75));
/// assert!(parse_cell("1/0").unwrap_err().is_semantic());
/// assert!(parse_cell("x").unwrap_err().is_syntax());
/// ```
pub fn parse_cell(cell: &str) -> Result<f32, Error> {
    let invalid = || SyntaxError::InvalidCell { cell: cell.to_string() };
    let number = |text: &str| {
        text.trim()
            .parse::<f32>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(invalid)
    };

    match cell.split_once('/') {
        None => Ok(number(cell)?),
        Some((numerator, denominator)) => {
            let numerator = number(numerator)?;
            let denominator = number(denominator)?;
            if denominator == 0.0 {
                return Err(SemanticError::CellDivisionByZero { cell: cell.to_string() }.into());
            }
            Ok(numerator / denominator)
        },
    }
}

/// Parses a rectangular grid of cells into a matrix.
///
/// # Errors
/// - `SyntaxError::EmptyGrid` if there are no rows or the first row is
///   empty.
/// - `SyntaxError::RaggedGrid` if a row differs in length from the first.
/// - Any error of [`parse_cell`].
///
/// # Example
/// ```
/// use matrica::dispatcher::cells::parse_grid;
///
/// let grid = vec![vec!["1".to_string(), "1/2".to_string()],
///                 vec!["3".to_string(), "4".to_string()]];
/// let m = parse_grid(&grid).unwrap();
/// assert_eq!(m.to_rows(), vec![vec![1.0, 0.5], vec![3.0, 4.0]]);
/// ```
pub fn parse_grid(cells: &[Vec<String>]) -> Result<Matrix<f32>, Error> {
    let expected = cells.first().map_or(0, Vec::len);
    if expected == 0 {
        return Err(SyntaxError::EmptyGrid.into());
    }

    let mut rows = Vec::with_capacity(cells.len());
    for (index, row) in cells.iter().enumerate() {
        if row.len() != expected {
            return Err(SyntaxError::RaggedGrid { row: index,
                                                 expected,
                                                 found: row.len() }.into());
        }
        rows.push(row.iter()
                     .map(|cell| parse_cell(cell))
                     .collect::<Result<Vec<_>, _>>()?);
    }

    Matrix::from_rows(rows).ok_or_else(|| SyntaxError::EmptyGrid.into())
}
