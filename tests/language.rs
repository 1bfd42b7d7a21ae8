use std::fs;

use matrica::{
    dispatcher::core::Calculator,
    error::{Error, SemanticError, SyntaxError},
    get_result,
    interpreter::value::core::Value,
    matrix::Matrix,
    script::{parse_cells, parse_line, run_script},
};
use walkdir::WalkDir;

const TOLERANCE: f32 = 1e-4;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mtx"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut calculator = Calculator::new();
        for (i, line) in content.lines().enumerate() {
            let (source, expected) = match line.split_once("=>") {
                Some((source, expected)) => (source, Some(expected.trim())),
                None => (line, None),
            };
            let Some(request) = parse_line(source).unwrap_or_else(|e| {
                                                      panic!("{path:?}:{}: {e}", i + 1)
                                                  })
            else {
                continue;
            };

            count += 1;
            let response = calculator.process(request);
            match expected {
                Some(expected) => check_expectation(&response, expected)
                    .unwrap_or_else(|message| panic!("{path:?}:{}: {message}", i + 1)),
                None => {
                    if let Err(e) = response {
                        panic!("{path:?}:{}: {source} failed: {e}", i + 1);
                    }
                },
            }
        }
    }

    assert!(count > 0, "No script lines found in tests/scripts");
}

/// Compares a response with an expectation written after `=>`.
///
/// The expectation is `syntax error`, `semantic error`, a number, or matrix
/// rows in cell syntax.
fn check_expectation(response: &Result<Value, Error>, expected: &str) -> Result<(), String> {
    match (expected, response) {
        ("syntax error", Err(e)) if e.is_syntax() => Ok(()),
        ("semantic error", Err(e)) if e.is_semantic() => Ok(()),
        (_, Err(e)) => Err(format!("expected {expected}, got '{e}'")),
        (_, Ok(value)) => {
            let expected_value = parse_value(expected);
            if approx_eq(value, &expected_value) {
                Ok(())
            } else {
                Err(format!("expected {expected}, got {value}"))
            }
        },
    }
}

fn parse_value(text: &str) -> Value {
    let rows = parse_cells(text).into_iter()
                                .map(|row| {
                                    row.iter()
                                       .map(|cell| {
                                           cell.parse::<f32>().unwrap_or_else(|_| {
                                                                  panic!("bad expectation '{text}'")
                                                              })
                                       })
                                       .collect::<Vec<_>>()
                                })
                                .collect::<Vec<_>>();
    if rows.len() == 1 && rows[0].len() == 1 && !text.contains(';') && !text.contains(',') {
        Value::Scalar(rows[0][0])
    } else {
        Value::Matrix(Matrix::from_rows(rows).unwrap_or_else(|| panic!("bad expectation '{text}'")))
    }
}

fn approx_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Scalar(a), Value::Scalar(b)) => (a - b).abs() <= TOLERANCE,
        (Value::Matrix(a), Value::Matrix(b)) => {
            a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= TOLERANCE)
        },
        _ => false,
    }
}

fn evaluate(src: &str) -> Value {
    match get_result(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str, expected: &str) {
    let value = evaluate(src);
    assert!(approx_eq(&value, &parse_value(expected)),
            "'{src}' gave {value}, expected {expected}");
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e.error,
    }
}

fn matrix(text: &str) -> Matrix<f32> {
    match parse_value(text) {
        Value::Matrix(m) => m,
        Value::Scalar(s) => Matrix::from_rows(vec![vec![s]]).unwrap(),
    }
}

#[test]
fn precedence_and_brackets() {
    assert_success("2+3*4", "14");
    assert_success("(2+3)*4", "20");
    assert_success("2*3^2", "18");
    assert_success("((2))", "2");
    assert_success("(1+2)*(3+4)", "21");
    assert_success("2^3^2", "64");
    assert_success(" 2 + 3 * 4 ", "14");
}

#[test]
fn same_rank_operators_group_to_the_left() {
    assert_success("10-4-3", "3");
    assert_success("8/4/2", "1");
    assert_success("10-(4-3)", "9");
    assert_success("2*3/4", "1.5");
}

#[test]
fn scalar_arithmetic() {
    assert_success("1.5+2.25", "3.75");
    assert_success(".5*4", "2");
    assert_success("7/2", "3.5");
    assert_success("2^0.5", "1.4142135");
    assert_success("4^(0-1)", "0.25");
}

#[test]
fn matrix_arithmetic() {
    let init = "A := 1 2; 3 4\nB := 5 6; 7 8\n";
    assert_success(&format!("{init}A+B"), "6 8; 10 12");
    assert_success(&format!("{init}B-A"), "4 4; 4 4");
    assert_success(&format!("{init}A*B"), "19 22; 43 50");
    assert_success(&format!("{init}2*A"), "2 4; 6 8");
    assert_success(&format!("{init}A*0.5"), "0.5 1; 1.5 2");
    assert_success(&format!("{init}A^2"), "7 10; 15 22");
    assert_success(&format!("{init}A^0"), "1 0; 0 1");
    assert_success(&format!("{init}A^(0-1)"), "-2 1; 1.5 -0.5");
    assert_success(&format!("{init}A^(0-2)*A^2"), "1 0; 0 1");
}

#[test]
fn rectangular_products() {
    let init = "A := 1 2 3; 4 5 6\nB := 1; 0; -1\n";
    assert_success(&format!("{init}A*B"), "-2; -2");
    assert_success(&format!("{init}trans A"), "1 4; 2 5; 3 6");
    assert_success(&format!("{init}A*trans A"), "14 32; 32 77");
}

#[test]
fn prefix_operators() {
    let init = "A := 2 0 1; 1 3 2; 1 1 2\nB := 4 7; 2 6\n";
    assert_success(&format!("{init}tr A"), "7");
    assert_success(&format!("{init}det A"), "6");
    assert_success(&format!("{init}rk A"), "3");
    assert_success(&format!("{init}det B"), "10");
    assert_success(&format!("{init}inv B"), "0.6 -0.7; -0.2 0.4");
    assert_success(&format!("{init}trans B"), "4 2; 7 6");
}

#[test]
fn prefix_operators_bind_tightest() {
    let init = "A := 1 2; 3 4\n";
    assert_success(&format!("{init}tr A*2"), "10");
    assert_success(&format!("{init}det A^2"), "4");
    assert_success(&format!("{init}tr(A*2)"), "10");
    assert_success(&format!("{init}1+tr A"), "6");
}

#[test]
fn prefix_operators_nest() {
    let init = "A := 1 2; 3 4\n";
    assert_success(&format!("{init}tr trans A"), "5");
    assert_success(&format!("{init}det inv A"), "-0.5");
    assert_success(&format!("{init}inv inv A"), "1 2; 3 4");
    assert_success(&format!("{init}trans(A)"), "1 3; 2 4");
    assert_success(&format!("{init}trA"), "5");
}

#[test]
fn answer_register() {
    assert_success("A := 1 2; 3 4\ntr A\nans", "5");
    assert_success("2+3\nans*ans", "25");
    assert_success("A := 1 2; 3 4\nA*2\nans-A", "1 2; 3 4");
    assert_success("A := 1 2; 3 4\nA^2\nB := ans\ntr B", "29");
}

#[test]
fn failed_requests_leave_the_answer_untouched() {
    let mut calculator = Calculator::new();
    calculator.evaluate("7").unwrap();
    assert!(calculator.evaluate("1/0").is_err());
    assert!(calculator.evaluate("(1").is_err());
    assert_eq!(calculator.answer(), Some(&Value::Scalar(7.0)));
}

#[test]
fn scripts_stop_at_the_first_error() {
    let error = get_result("1+1\nA\n2+2").unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.to_string(), "line 2: Semantic error: variable A is not initialized");
}

#[test]
fn snapping_near_integers() {
    assert_success("A := 1/3 0; 0 1/3\nA*3", "1 0; 0 1");
    let value = evaluate("A := 1/3 0; 0 1/3\nA*3");
    assert_eq!(value.as_matrix().map(Matrix::to_rows),
               Some(vec![vec![1.0, 0.0], vec![0.0, 1.0]]));
}

#[test]
fn solving_systems() {
    // x + y = 3, x - y = 1
    assert_success("solve 1 1 3; 1 -1 1", "1 0 2; 0 1 1");
    // Dependent system.
    assert_success("solve 1 2 3; 2 4 6", "1 2 3; 0 0 0");
    assert_success("solve 2 1 -1 8; -3 -1 2 -11; -2 1 2 -3", "1 0 0 2; 0 1 0 3; 0 0 1 -1");

    let solution = evaluate("solve 1 1 3; 1 -1 1");
    let rows = solution.as_matrix().map(Matrix::to_rows).unwrap();
    assert!(rows.iter().flatten().all(|x| *x != 0.0 || x.is_sign_positive()));
}

#[test]
fn solving_does_not_touch_the_answer() {
    assert_success("5\nsolve 1 2; 3 4\nans", "5");
}

#[test]
fn variables_from_the_answer() {
    assert_success("A := 1 2; 3 4\nA*A\nC := ans\nC", "7 10; 15 22");
    assert_eq!(assert_failure("2+2\nC := ans"),
               Error::Semantic(SemanticError::AnswerIsNumber));
    assert_eq!(assert_failure("C := ans"),
               Error::Semantic(SemanticError::UnsetVariable { name: "ans".to_string() }));
}

#[test]
fn cell_literals() {
    assert_success("A := 1/2 -3; 0.25 4/8\nA", "0.5 -3; 0.25 0.5");
    assert_success("A := 1,2,3\nA", "1, 2, 3");
    assert!(assert_failure("A := 1 x; 2 3").is_syntax());
    assert_eq!(assert_failure("A := 1/0 1"),
               Error::Semantic(SemanticError::CellDivisionByZero { cell: "1/0".to_string() }));
    assert_eq!(assert_failure("A := 1 2; 3"),
               Error::Syntax(SyntaxError::RaggedGrid { row:      1,
                                                       expected: 2,
                                                       found:    1, }));
    assert_eq!(assert_failure("A := "), Error::Syntax(SyntaxError::EmptyGrid));
}

#[test]
fn syntax_errors() {
    assert_eq!(assert_failure("(2+3"), Error::Syntax(SyntaxError::UnbalancedBrackets));
    assert_eq!(assert_failure("2+3)"), Error::Syntax(SyntaxError::UnbalancedBrackets));
    assert_eq!(assert_failure(")2+3("), Error::Syntax(SyntaxError::UnbalancedBrackets));
    assert_eq!(assert_failure("2+"), Error::Syntax(SyntaxError::MissingOperand));
    assert_eq!(assert_failure("()"), Error::Syntax(SyntaxError::MissingOperand));
    assert_eq!(assert_failure("-2"), Error::Syntax(SyntaxError::MissingOperand));
    assert_eq!(assert_failure("1.2.3"),
               Error::Syntax(SyntaxError::InvalidNumber { literal: "1.2.3".to_string() }));
    assert_eq!(assert_failure("2 3"),
               Error::Syntax(SyntaxError::InvalidSyntax { fragment: "2 3".to_string() }));
    assert_eq!(assert_failure("x+1"),
               Error::Syntax(SyntaxError::UnexpectedToken { token: "x".to_string() }));
    assert_eq!(assert_failure("A := 1\n2 det A"),
               Error::Syntax(SyntaxError::OperatorArity { operator: "det" }));
    assert!(assert_failure("a := 1 2").is_syntax());
}

#[test]
fn long_expressions_are_capped() {
    let within = format!("{}1", "1+".repeat(511));
    assert_success(&within, "512");

    let beyond = format!("{}1", "1+".repeat(600));
    assert_eq!(assert_failure(&beyond),
               Error::Syntax(SyntaxError::TooLong { tokens: 1201,
                                                    limit:  1024, }));
}

#[test]
fn type_and_shape_errors() {
    let init = "A := 1 2 3; 4 5 6\nB := 1 2; 3 4\n";
    assert_eq!(assert_failure(&format!("{init}A+1")).to_string(),
               "Semantic error: can not add number and matrix");
    assert_eq!(assert_failure(&format!("{init}A-B")).to_string(),
               "Semantic error: can not subtract matrices of dimensions 2x3 and 2x2");
    assert_eq!(assert_failure(&format!("{init}A*B")).to_string(),
               "Semantic error: can not multiply matrices of dimensions 2x3 and 2x2");
    assert_eq!(assert_failure(&format!("{init}det A")).to_string(),
               "Semantic error: can not find determinant of a non square matrix");
    assert_eq!(assert_failure(&format!("{init}tr A")).to_string(),
               "Semantic error: can not take trace of a non square matrix");
    assert_eq!(assert_failure(&format!("{init}inv A")).to_string(),
               "Semantic error: can not take an inverse of a non square matrix");
    assert_eq!(assert_failure(&format!("{init}A^2")).to_string(),
               "Semantic error: can not take a power of a non square matrix");
    assert_eq!(assert_failure("rk 3").to_string(),
               "Semantic error: can not find rank of a number");
    assert_eq!(assert_failure("trans 3").to_string(),
               "Semantic error: can not transpose a number");
}

#[test]
fn division_and_power_errors() {
    let init = "A := 1 2; 2 4\nB := 1 2; 3 4\n";
    assert_eq!(assert_failure("1/0").to_string(), "Semantic error: can not divide by 0");
    assert_eq!(assert_failure(&format!("{init}B/2")),
               Error::Semantic(SemanticError::MatrixDivision));
    assert_eq!(assert_failure(&format!("{init}2/B")),
               Error::Semantic(SemanticError::MatrixDivision));
    assert_eq!(assert_failure(&format!("{init}2^B")),
               Error::Semantic(SemanticError::MatrixExponent));
    assert_eq!(assert_failure(&format!("{init}B^0.5")),
               Error::Semantic(SemanticError::FractionalExponent));
    assert_eq!(assert_failure(&format!("{init}inv A")),
               Error::Semantic(SemanticError::SingularMatrix));
    assert_eq!(assert_failure(&format!("{init}A^(0-1)")),
               Error::Semantic(SemanticError::SingularMatrix));
}

#[test]
fn unset_variables() {
    assert_eq!(assert_failure("Q*2").to_string(),
               "Semantic error: variable Q is not initialized");
    assert_eq!(assert_failure("ans").to_string(),
               "Semantic error: variable ans is not initialized");
}

#[test]
fn tolerance_settings() {
    use matrica::config::Settings;

    let loose = Settings { zero_tolerance: 1e-3,
                           ..Settings::default() };
    let mut calculator = Calculator::with_settings(loose);
    assert!(calculator.evaluate("1/0.0001").is_err());
    assert!(Calculator::new().evaluate("1/0.0001").is_ok());

    let near_one = "A := 1.000001\nA*1";
    assert_eq!(evaluate(near_one), Value::Matrix(matrix("1")));

    let strict = Settings { snap_tolerance: 0.0,
                            ..Settings::default() };
    let mut calculator = Calculator::with_settings(strict);
    let value = run_script(&mut calculator, near_one, false).unwrap();
    assert_ne!(value, Some(Value::Matrix(matrix("1"))));
}
