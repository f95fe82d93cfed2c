use std::fs;

use ascent::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::value::core::Value,
    runtime::{EvaluateOptions, Evaluation, HostInputs, Runtime},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "asc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = evaluate(&content) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn run(src: &str) -> Evaluation {
    Runtime::new().evaluate(src, &HostInputs::default(), EvaluateOptions::default())
                  .unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_success(src: &str, expected: impl Into<Value>) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected.into(), "{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("1 + 2", 3.0);
    assert_success("7 * 9", 63.0);
    assert_success("8 - 5", 3.0);
    assert_success("10 / 4", 2.5);
    assert_success("7 % 4", 3.0);
    assert_success("2 ^ 10", 1024.0);
    assert_success("let x = 1 + 2; x;", 3.0);
}

#[test]
fn reassignment_updates_environment() {
    let evaluation = run("let x=1; x=x+1;");
    assert_eq!(evaluation.environment.get("x"), Some(&Value::Number(2.0)));
    assert_eq!(evaluation.value, Value::Number(2.0));
}

#[test]
fn precedence_and_grouping() {
    assert_success("1 + 2 * 3", 7.0);
    assert_success("(1 + 2) * 3", 9.0);
    assert_success("[1 + 2] * 3", 9.0);
    assert_success("2 * 3 ^ 2", 18.0);
    assert_success("10 - 4 - 3", 3.0);
    assert_success("(1 + 2) > 2", true);
    // Relational operators bind tighter than additive ones.
    assert_success("1 + 2 > 2", "1false");
}

#[test]
fn subtraction_and_negative_literals() {
    assert_success("-3", -3.0);
    assert_success("5-3", 2.0);
    assert_success("5 - (-3)", 8.0);
    assert_success("5 - -3", 8.0);
    assert_success("1 - -0.5", 1.5);
    assert_success("let x = 4; x-1;", 3.0);
    assert_success("(2)-1", 1.0);
    assert_success("2 * -1.5", -3.0);
}

#[test]
fn string_concatenation() {
    assert_success("\"a\" + \"b\"", "ab");
    assert_success("\"x = \" + 4", "x = 4");
    assert_success("\"half \" + 0.5", "half 0.5");
    assert_success("1 + \"st\"", "1st");
    assert_success("let s = \"keep  spaces\"; s;", "keep  spaces");
}

#[test]
fn booleans_and_comparisons() {
    assert_success("true", true);
    assert_success("false", false);
    assert_success("1 < 2", true);
    assert_success("2 < 1", false);
    assert_success("\"done: \" + (3 > 2)", "done: true");
}

#[test]
fn ternary_conditional() {
    assert_success("1>0?5:10", 5.0);
    assert_success("0>1?5:10", 10.0);
    assert_success("2>1.5?5:10", 5.0);
    assert_success("1 ? 5 : 10", 5.0);
    assert_success("0 ? 5 : 10", 10.0);
    assert_success("let a = 3; a > 2 ? \"big\" : \"small\"", "big");
}

#[test]
fn ternary_with_non_boolean_condition_is_error() {
    let error = assert_failure("let c = 2; c ? 5 : 10;");
    assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let error = assert_failure("\"yes\" ? 5 : 10");
    assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn missing_ternary_colon_is_format_error() {
    let error = assert_failure("1 > 0 ? 5");
    assert!(matches!(error, Error::Parse(ParseError::MissingTernaryColon)));
}

#[test]
fn type_mismatch_in_arithmetic() {
    let error = assert_failure("\"a\" * 2");
    assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert_failure("true - 1");
    assert_failure("\"a\" < \"b\"");
}

#[test]
fn malformed_number_is_format_error() {
    let error = assert_failure("1.2.3 + 1");
    assert_eq!(error.to_string(),
               ParseError::MalformedNumber { literal: "1.2.3".to_string() }.to_string());
}

#[test]
fn missing_closing_delimiters() {
    assert!(matches!(assert_failure("(1 + 2"),
                     Error::Parse(ParseError::MissingDelimiter { expected: ')', .. })));
    assert!(matches!(assert_failure("[1 + 2"),
                     Error::Parse(ParseError::MissingDelimiter { expected: ']', .. })));
    assert!(matches!(assert_failure("let x = 0; while(x < 3){ x = x + 1;"),
                     Error::Parse(ParseError::MissingDelimiter { expected: '}', .. })));
}

#[test]
fn user_defined_function_and_calls() {
    assert_success("function add(a, b){ return a + b; } add(2, 3);", 5.0);
    assert_success("function sq(x){ return x * x; } sq(3) + sq(4);", 25.0);
    assert_success("function f(){} f();", 0.0);
    assert_success("function last(){ 1; 2; } last();", 2.0);
}

#[test]
fn recursive_function() {
    assert_success("function fact(n){ return n < 2 ? 1 : n * fact(n - 1); } fact(5);",
                   120.0);
}

#[test]
fn function_parameters_are_removed_after_call() {
    let evaluation = run("function id(p){ return p; } id(4);");
    assert_eq!(evaluation.value, Value::Number(4.0));
    assert_eq!(evaluation.environment.get("p"), None);
}

#[test]
fn function_body_shares_the_caller_environment() {
    let evaluation = run("let total = 1; function bump(){ total = total + 10; } bump(); total;");
    assert_eq!(evaluation.value, Value::Number(11.0));

    let evaluation = run("function make(){ let created = 5; } make();");
    assert_eq!(evaluation.environment.get("created"), Some(&Value::Number(5.0)));
}

#[test]
fn function_must_be_defined_before_it_is_called() {
    let error = assert_failure("while(false){ function g(){ return 1; } } g();");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedReference { kind: "function body",
                                                                       .. })));
}

#[test]
fn duplicate_function_is_format_error() {
    let error = assert_failure("function f(){ return 1; } function f(){ return 2; }");
    assert!(matches!(error, Error::Parse(ParseError::DuplicateFunction { .. })));
}

#[test]
fn builtin_functions() {
    assert_success("sqrt(16)", 4.0);
    assert_success("abs(-2)", 2.0);
    assert_success("pow(2, 3)", 8.0);
    assert_success("clamp(5, 0, 1)", 1.0);
    assert_success("clamp(-5, 0, 1)", 0.0);
    assert_success("lerp(0, 10, 0.5)", 5.0);
    assert_success("int(2.7)", 2.0);
    assert_success("int(-2.7)", -2.0);
    assert_success("frac(2.25)", 0.25);
    assert_success("sign(-3) + sign(0) + sign(8)", 0.0);
    assert_success("exp(0)", 1.0);
    assert_success("sin(0) + cos(0)", 1.0);
    assert_success("bez_curve_x(0, 1, 1, 0, 0.5)", 0.75);
    assert_success("bez_curve_y(0, 0, 1, 1, 1)", 1.0);
    assert_success("debug(1, \"two\")", 0.0);
}

#[test]
fn wrong_builtin_arity_is_error() {
    let error = assert_failure("sqrt(1, 2)");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                                          found: 2,
                                                                          .. })));
}

#[test]
fn for_loop_body_isolation() {
    let evaluation = run("let x=0; for(let i=0;i<3;i=i+1){ x=x+1; let y=5; }");
    assert_eq!(evaluation.environment.get("x"), Some(&Value::Number(3.0)));
    assert_eq!(evaluation.environment.get("y"), None);
    assert_eq!(evaluation.environment.get("i"), Some(&Value::Number(3.0)));
}

#[test]
fn loops_yield_no_value() {
    assert_success("let x = 7; for(let i=0;i<2;i=i+1){ x = x + 1; }", 7.0);
}

#[test]
fn while_loop() {
    assert_success("let n = 0; while(n < 5){ n = n + 1; } n;", 5.0);
    assert_success("let n = 3; let c = 0; while(n){ n = n - 1; c = c + 1; } c;", 3.0);
}

#[test]
fn for_condition_must_be_boolean() {
    let error = assert_failure("for(let i=0; 1; i=i+1){ i; }");
    assert!(matches!(error, Error::Runtime(RuntimeError::Cast { expected: "boolean", .. })));
}

#[test]
fn nested_loops() {
    assert_success("let sum = 0;
                    for(let i=0;i<3;i=i+1){
                        for(let j=0;j<2;j=j+1){
                            sum = sum + 1;
                        }
                    }
                    sum;",
                   6.0);
}

#[test]
fn function_defined_in_loop_stays_defined() {
    assert_success("for(let i=0;i<1;i=i+1){ function h(){ return 7; } } h();", 7.0);
}

#[test]
fn loop_inside_function_sees_parameters() {
    assert_success("function tri(n){
                        let acc = 0;
                        for(let k=0;k<n;k=k+1){ acc = acc + k; }
                        return acc;
                    }
                    tri(4);",
                   6.0);
}

#[test]
fn compound_updates() {
    assert_success("let x = 1; x++; x;", 2.0);
    assert_success("let x = 1; x--; x;", 0.0);
    assert_success("let x = 1; x += 4; x;", 5.0);
    assert_success("let x = 1; x -= 4; x;", -3.0);
    assert_success("let x = 1; x++", 2.0);
    assert_success("let c = 0; for(let i=0;i<4;i++){ c += 2; } c;", 8.0);
}

#[test]
fn compound_update_requires_numbers() {
    let error = assert_failure("let s = \"a\"; s += 1;");
    assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn bare_blocks_run_in_place() {
    assert_success("let x = 1; { x = 2; let y = 3; } x + y;", 5.0);
}

#[test]
fn unbound_operand_is_missing_value() {
    let error = assert_failure("for(let i=0;i<1;i=i+1){ let t = 1; t + 1; }");
    assert!(matches!(error, Error::Runtime(RuntimeError::MissingValue { .. })));
}

#[test]
fn result_is_last_present_value() {
    assert_success("1; 2; function f(){ return 9; }", 2.0);
    assert_success("using Engine;", 0.0);
    assert_success("", 0.0);
}

#[test]
fn stray_characters_are_skipped() {
    assert_success("1 + 2 @", 3.0);
    assert_success("let a = 2; a $;", 2.0);
}

#[test]
fn namespace_and_using_predicates() {
    let evaluation = run("namespace Game; using Engine.Math; using Engine.Math; 1;");
    assert_eq!(evaluation.environment.predicates(),
               ["Game".to_string(), "Engine.Math".to_string()]);
}
