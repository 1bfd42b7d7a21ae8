use crate::{
    ast::{Slot, Tree},
    config::Settings,
    dispatcher::{
        cells::parse_grid,
        query::{FieldKind, InitSource, Request, Response},
    },
    error::SemanticError,
    interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value},
    matrix::Matrix,
};

/// The calculator: variable store, `ans` register and request routing.
///
/// Each instance is independent. State changes only when a request
/// succeeds; a failed request leaves variables and `ans` as they were.
///
/// # Example
/// ```
/// use matrica::{
///     ast::Slot,
///     dispatcher::{
///         core::Calculator,
///         query::{InitSource, Request},
///     },
///     interpreter::value::core::Value,
/// };
///
/// let mut calculator = Calculator::new();
/// let a = Slot::from_letter('A').unwrap();
/// let cells = vec![vec!["1".to_string(), "2".to_string()],
///                  vec!["3".to_string(), "4".to_string()]];
///
/// calculator.process(Request::InitVariable { slot:   a,
///                                            source: InitSource::Cells(cells), })
///           .unwrap();
///
/// assert_eq!(calculator.process(Request::evaluate("det A")), Ok(Value::Scalar(-2.0)));
/// assert_eq!(calculator.process(Request::evaluate("ans*3")), Ok(Value::Scalar(-6.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    variables: Vec<Option<Matrix<f32>>>,
    answer:    Option<Value>,
    settings:  Settings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with empty variables and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a calculator with empty variables and the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { variables: vec![None; Slot::COUNT],
               answer: None,
               settings }
    }

    /// The settings in use.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The matrix stored in `slot`, if any.
    #[must_use]
    pub fn variable(&self, slot: Slot) -> Option<&Matrix<f32>> {
        self.variables.get(slot.index()).and_then(Option::as_ref)
    }

    /// The current value of `ans`, if any.
    #[must_use]
    pub const fn answer(&self) -> Option<&Value> {
        self.answer.as_ref()
    }

    /// Routes a request to the matching operation.
    pub fn process(&mut self, request: Request) -> Response {
        match request {
            Request::Evaluate { text,
                                field: FieldKind::Real, } => self.evaluate(&text),
            Request::InitVariable { slot, source } => self.init_variable(slot, source),
            Request::SolveSystem { cells } => self.solve_system(&cells),
        }
    }

    /// Parses and evaluates an expression.
    ///
    /// On success matrix entries close to an integer are snapped to it, and
    /// the result becomes the new `ans`.
    pub fn evaluate(&mut self, text: &str) -> Response {
        let tree = parse(text)?;
        self.evaluate_tree(&tree)
    }

    /// Evaluates an already built expression tree, as
    /// [`evaluate`](Self::evaluate) does.
    pub fn evaluate_tree(&mut self, tree: &Tree) -> Response {
        let context = Context { variables: &self.variables,
                                answer:    self.answer.as_ref(),
                                settings:  self.settings, };

        let value = match context.eval(tree)? {
            Value::Matrix(m) => Value::Matrix(m.map(|x| self.settings.snap(x))),
            scalar @ Value::Scalar(_) => scalar,
        };

        self.answer = Some(value.clone());
        Ok(value)
    }

    /// Stores a matrix in `slot` and returns it.
    ///
    /// # Errors
    /// - Any cell error, see [`parse_grid`].
    /// - `SemanticError::UnsetVariable` if `ans` is empty.
    /// - `SemanticError::AnswerIsNumber` if `ans` holds a number.
    pub fn init_variable(&mut self, slot: Slot, source: InitSource) -> Response {
        let matrix = match source {
            InitSource::Cells(cells) => parse_grid(&cells)?,
            InitSource::LastAnswer => match &self.answer {
                Some(Value::Matrix(m)) => m.clone(),
                Some(Value::Scalar(_)) => return Err(SemanticError::AnswerIsNumber.into()),
                None => {
                    return Err(SemanticError::UnsetVariable { name: "ans".to_string() }.into());
                },
            },
        };

        self.variables[slot.index()] = Some(matrix.clone());
        Ok(Value::Matrix(matrix))
    }

    /// Solves a linear system given as augmented matrix cells.
    ///
    /// Returns the reduced row-echelon form of the system with any `-0`
    /// entries replaced by `0`. Neither the variables nor `ans` change.
    ///
    /// # Example
    /// ```
    /// use matrica::dispatcher::core::Calculator;
    ///
    /// // x + y = 3, x - y = 1
    /// let cells = vec![vec!["1".to_string(), "1".to_string(), "3".to_string()],
    ///                  vec!["1".to_string(), "-1".to_string(), "1".to_string()]];
    ///
    /// let solution = Calculator::new().solve_system(&cells).unwrap();
    /// assert_eq!(solution.as_matrix().unwrap().to_rows(),
    ///            vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);
    /// ```
    #[allow(clippy::unused_self)]
    pub fn solve_system(&self, cells: &[Vec<String>]) -> Response {
        let system = parse_grid(cells)?;
        let reduced = system.reduced_row_echelon_form()
                            .map(|x| if x == 0.0 { 0.0 } else { x });
        Ok(Value::Matrix(reduced))
    }
}
