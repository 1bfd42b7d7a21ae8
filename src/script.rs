use std::fmt;

use crate::{
    ast::Slot,
    dispatcher::{
        core::Calculator,
        query::{InitSource, Request},
    },
    error::{Error, SyntaxError},
    interpreter::{parser::core::parse, value::core::Value},
};

/// An error raised by a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number.
    pub line:  usize,
    /// What went wrong.
    pub error: Error,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Parses one script line into a request.
///
/// Returns `Ok(None)` for blank lines and `//` comments.
///
/// Syntax:
/// ```text
///     X := 1 2; 3 4       initialize X from cells
///     X := ans            initialize X from the last answer
///     solve 1 1 3; 1 -1 1 solve an augmented system
///     <expression>        evaluate
/// ```
/// Cells are separated by whitespace or commas, rows by `;`.
///
/// # Errors
/// `SyntaxError::InvalidSlot` if the target of `:=` is not a letter `A`..`Z`.
///
/// # Example
/// ```
/// use matrica::{
///     dispatcher::query::{InitSource, Request},
///     script::parse_line,
/// };
///
/// assert_eq!(parse_line("  // note").unwrap(), None);
/// assert_eq!(parse_line("tr A").unwrap(), Some(Request::evaluate("tr A")));
///
/// let Some(Request::InitVariable { source, .. }) = parse_line("B := 1, 2; 3, 4").unwrap() else {
///     panic!("expected an initialization");
/// };
/// assert_eq!(source,
///            InitSource::Cells(vec![vec!["1".to_string(), "2".to_string()],
///                                   vec!["3".to_string(), "4".to_string()]]));
///
/// assert!(parse_line("b := ans").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Option<Request>, SyntaxError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    if let Some((target, rest)) = line.split_once(":=") {
        let slot = parse_slot(target.trim())?;
        let rest = rest.trim();
        let source = if rest == "ans" {
            InitSource::LastAnswer
        } else {
            InitSource::Cells(parse_cells(rest))
        };
        return Ok(Some(Request::InitVariable { slot, source }));
    }

    if let Some(rest) = line.strip_prefix("solve")
       && rest.starts_with(char::is_whitespace)
    {
        return Ok(Some(Request::SolveSystem { cells: parse_cells(rest) }));
    }

    Ok(Some(Request::evaluate(line)))
}

/// Splits `1 2; 3 4` into rows of cell strings.
#[must_use]
pub fn parse_cells(text: &str) -> Vec<Vec<String>> {
    text.split(';')
        .map(|row| {
            row.split(|c: char| c.is_whitespace() || c == ',')
               .filter(|cell| !cell.is_empty())
               .map(str::to_string)
               .collect()
        })
        .collect()
}

fn parse_slot(name: &str) -> Result<Slot, SyntaxError> {
    let mut chars = name.chars();
    let slot = match (chars.next(), chars.next()) {
        (Some(letter), None) => Slot::from_letter(letter),
        _ => None,
    };
    slot.ok_or_else(|| SyntaxError::InvalidSlot { name: name.to_string() })
}

/// Runs every line of a script against `calculator`.
///
/// Stops at the first failing line. When `show_tree` is set, the tree of
/// each evaluated expression is written to stderr before it is evaluated.
///
/// # Returns
/// The value of the last request, or `None` if the script has none.
///
/// # Example
/// ```
/// use matrica::{
///     dispatcher::core::Calculator, interpreter::value::core::Value, script::run_script,
/// };
///
/// let script = "A := 1 2; 3 4\nB := 5 6; 7 8\nA+B\ntr ans";
/// let mut calculator = Calculator::new();
///
/// assert_eq!(run_script(&mut calculator, script, false),
///            Ok(Some(Value::Scalar(18.0))));
///
/// let error = run_script(&mut calculator, "1+1\n1/0", false).unwrap_err();
/// assert_eq!(error.line, 2);
/// ```
pub fn run_script(calculator: &mut Calculator,
                  script: &str,
                  show_tree: bool)
                  -> Result<Option<Value>, ScriptError> {
    let mut last = None;

    for (index, line) in script.lines().enumerate() {
        let fail = |error: Error| ScriptError { line: index + 1,
                                                error };

        let Some(request) = parse_line(line).map_err(|e| fail(e.into()))? else {
            continue;
        };

        let response = match request {
            Request::Evaluate { text, .. } if show_tree => {
                let tree = parse(&text).map_err(|e| fail(e.into()))?;
                eprint!("{tree}");
                calculator.evaluate_tree(&tree)
            },
            request => calculator.process(request),
        };

        last = Some(response.map_err(fail)?);
    }

    Ok(last)
}
