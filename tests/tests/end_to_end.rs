//! End-to-end scenarios driving the whole pipeline (lexer/parser -> driver ->
//! stack) against in-memory buffers, exactly as the invocation shell wires
//! them together in `main.rs`.
//!
//! Scenario numbering (`S1`..`S8`) matches the specification's end-to-end
//! scenario table.

use std::io::Cursor;

use poly_calc::{Driver, ResumeMode};
use poly_cli::LineReader;

fn run(input: &str) -> (String, String) {
    let mut source = LineReader::new(Cursor::new(input.as_bytes()));
    let mut driver = Driver::new(ResumeMode::ResumeNext);
    let mut result = Vec::new();
    let mut diag = Vec::new();
    driver.run(&mut source, &mut result, &mut diag).unwrap();
    (
        String::from_utf8(result).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn s1_print_sum_of_two_monomials() {
    let (result, diag) = run("(1,1)+(2,2)\nPRINT\n");
    assert_eq!(result, "(1,1)+(2,2)\n");
    assert!(diag.is_empty());
}

#[test]
fn s2_add_two_constants() {
    let (result, diag) = run("5\n6\nADD\nPRINT\n");
    assert_eq!(result, "11\n");
    assert!(diag.is_empty());
}

#[test]
fn s3_clone_then_multiply() {
    let (result, diag) = run("(1,1)\nCLONE\nMUL\nPRINT\n");
    assert_eq!(result, "(1,2)\n");
    assert!(diag.is_empty());
}

#[test]
fn s4_evaluate_at_a_point() {
    let (result, diag) = run("(1,1)\nAT 2\nPRINT\n");
    assert_eq!(result, "2\n");
    assert!(diag.is_empty());
}

#[test]
fn s5_compose_substitutes_outer_variable() {
    let (result, diag) = run("(1,2)\n(2,0)+(1,1)\nCOMPOSE 1\nPRINT\n");
    assert_eq!(result, "(2,0)+(1,2)\n");
    assert!(diag.is_empty());
}

#[test]
fn s6_compose_missing_argument_is_wrong_count() {
    let (result, diag) = run("COMPOSE\n");
    assert!(result.is_empty());
    assert_eq!(diag, "ERROR 1 WRONG COUNT\n");
}

#[test]
fn s7_add_on_empty_stack_underflows() {
    let (result, diag) = run("ADD\n");
    assert!(result.is_empty());
    assert_eq!(diag, "ERROR 1 STACK UNDERFLOW\n");
}

#[test]
fn s8_compose_with_zero_substitutions_yields_exact_constant_term() {
    let (result, diag) = run("(42,0)+(1,1)\nCOMPOSE 0\nPRINT\n");
    assert_eq!(result, "42\n");
    assert!(diag.is_empty());
}

#[test]
fn malformed_literal_reports_column_and_resumes() {
    let (result, diag) = run("(1)\n5\nPRINT\n");
    assert_eq!(result, "5\n");
    assert_eq!(diag, "ERROR 1 3\n");
}

#[test]
fn unknown_command_is_reported_and_does_not_touch_the_stack() {
    let (result, diag) = run("5\nFROBNICATE\nPRINT\n");
    assert_eq!(result, "5\n");
    assert_eq!(diag, "ERROR 2 WRONG COMMAND\n");
}

#[test]
fn deg_by_missing_argument_is_wrong_variable() {
    let (result, diag) = run("5\nDEG_BY\n");
    assert!(result.is_empty());
    assert_eq!(diag, "ERROR 2 WRONG VARIABLE\n");
}

#[test]
fn at_malformed_argument_is_wrong_value() {
    let (result, diag) = run("5\nAT abc\n");
    assert!(result.is_empty());
    assert_eq!(diag, "ERROR 2 WRONG VALUE\n");
}

#[test]
fn errors_resume_by_default_processing_continues_past_diagnostics() {
    let (result, diag) = run("ADD\n5\n6\nADD\nPRINT\n");
    assert_eq!(result, "11\n");
    assert_eq!(diag, "ERROR 1 STACK UNDERFLOW\n");
}

#[test]
fn fatal_mode_stops_the_driver_at_the_first_diagnostic() {
    let mut source = LineReader::new(Cursor::new(b"ADD\n5\nPRINT\n".as_slice()));
    let mut driver = Driver::new(ResumeMode::Fatal);
    let mut result = Vec::new();
    let mut diag = Vec::new();
    driver.run(&mut source, &mut result, &mut diag).unwrap();
    assert!(result.is_empty());
    assert_eq!(diag, b"ERROR 1 STACK UNDERFLOW\n");
}

#[test]
fn is_eq_leaves_both_operands_on_the_stack() {
    let (result, diag) = run("3\n3\nIS_EQ\nADD\nPRINT\n");
    assert_eq!(result, "1\n6\n");
    assert!(diag.is_empty());
}

#[test]
fn deg_and_deg_by_report_minus_one_for_zero() {
    let (result, diag) = run("ZERO\nDEG\nZERO\nDEG_BY 0\n");
    assert_eq!(result, "-1\n-1\n");
    assert!(diag.is_empty());
}

#[test]
fn nested_polynomial_prints_recursively() {
    let (result, diag) = run("((1,0)+(2,1),3)\nPRINT\n");
    assert_eq!(result, "((1,0)+(2,1),3)\n");
    assert!(diag.is_empty());
}
