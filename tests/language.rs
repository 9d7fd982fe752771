use std::fs;

use rill::{
    interpret,
    interpreter::{evaluator::core::Context, value::core::Value},
};
use walkdir::WalkDir;

fn eval(src: &str) -> Value {
    interpret(src, &mut Context::new()).unwrap_or_else(|e| panic!("Script failed: {src}\n{e}"))
}

fn assert_double(src: &str, expected: f64) {
    assert_eq!(eval(src), Value::Double(expected), "source: {src}");
}

fn assert_string(src: &str, expected: &str) {
    assert_eq!(eval(src), Value::from(expected), "source: {src}");
}

fn assert_failure(src: &str) {
    if interpret(src, &mut Context::new()).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn demo_scripts_evaluate() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "rill"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = interpret(&content, &mut Context::new()) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn operator_precedence() {
    assert_double("1+2*3^4", 163.0);
    assert_double("5%3", 2.0);
    assert_double("50.5%7", 1.5);
    assert_double("3*-(1-4)", 9.0);
    assert_double("2^3^2", 64.0); // left-associative: (2^3)^2
    assert_double("[1+2]*3", 9.0); // brackets group when nothing precedes them
    assert_double("{1+2}*3", 9.0);
    assert_double("6=2*3", 1.0);
    assert_double("1+2=4", 0.0); // comparison binds looser than '+'
}

#[test]
fn unary_operators() {
    assert_double("-5+8", 3.0);
    assert_double("--5", 5.0);
    assert_double("+\"5\"", 5.0);
    assert_double("-\"123\"", -123.0);
    assert_double("!0", 1.0);
    assert_double("!3", 0.0);
    assert_double("!\"\"", 1.0);
    assert_double("!\"a\"", 0.0);
}

#[test]
fn comments_are_skipped() {
    assert_double("1 + 2 // trailing comment", 3.0);
    assert_double("1 /* inline */ + 2", 3.0);
    assert_double("1 + /* multi\nline */ 2", 3.0);
    // Comments run to the first `*/`, stars in the body included.
    assert_double("1 /* note **/ + 2", 3.0);
    assert_double("1 /* a * b ** c */ + 2", 3.0);
}

#[test]
fn uncommon_whitespace_is_skipped() {
    assert_double("1\x0B+2", 3.0);
    assert_double("1\u{A0}+\u{85}2", 3.0);
}

#[test]
fn string_literals_and_escapes() {
    assert_string(r#""hello""#, "hello");
    assert_string(r#""a\tb""#, "a\tb");
    assert_string(r#"" \r \" \\ ""#, " \r \" \\ ");
    // An escaped character with no special meaning stands for itself.
    assert_string(r#""\q""#, "q");
}

#[test]
fn string_coercions() {
    assert_double("123+\"456\"", 579.0);
    assert_double("\"456\"-\"123\"", 333.0);
    assert_string("\"abc\"+123", "abc123");
    assert_double("\"abc\">\"def\"", 0.0);
    assert_double("\"abc\"<\"def\"", 1.0);
    assert_double("\"abc\"=\"abc\"", 1.0);
    assert_failure("1+\"abc\""); // right side cannot be read as a number
}

#[test]
fn assignment_persists_in_context() {
    let mut context = Context::new();

    let value = interpret("abc: 123", &mut context).unwrap();
    assert_eq!(value, Value::Double(123.0));
    assert_eq!(context.get("abc"), Value::Double(123.0));

    // The assigned value is the value of the assignment expression.
    let value = interpret("x: abc + 1", &mut context).unwrap();
    assert_eq!(value, Value::Double(124.0));
}

#[test]
fn sequencing_yields_the_last_value() {
    let mut context = Context::new();

    let value = interpret("a:1; b:2; c:3; d:a+b*c", &mut context).unwrap();
    assert_eq!(value, Value::Double(7.0));
    assert_eq!(context.get("a"), Value::Double(1.0));
    assert_eq!(context.get("b"), Value::Double(2.0));
    assert_eq!(context.get("c"), Value::Double(3.0));
    assert_eq!(context.get("d"), Value::Double(7.0));
}

#[test]
fn unbound_variables_read_as_null() {
    let mut context = Context::new();
    let value = interpret("nothing", &mut context).unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn arrays_overwrite_and_append() {
    assert_double("arr:[]; arr[0]:1; arr[1]:2; arr[2]:3; arr[1]", 2.0);
    assert_double("arr:[]; arr[0]:1; arr[0]:9; arr[0]", 9.0);
    // Fractional indices truncate toward zero.
    assert_double("arr:[]; arr[0]:5; arr[0.9]", 5.0);
    // Appending is only allowed exactly at the length.
    assert_failure("arr:[]; arr[3]:1");
    assert_failure("arr:[]; arr[0]:1; arr[5]");
    assert_failure("arr:[]; arr[-1]:1");
}

#[test]
fn dictionaries_by_key_and_member() {
    assert_double("d:{}; d[\"pi\"]:3; d[\"pi\"]", 3.0);
    assert_double("d:{}; d.e:2; d[\"e\"]", 2.0);
    assert_double("d:{}; d[\"e\"]:2; d.e", 2.0);
    // Writes insert or overwrite unconditionally.
    assert_double("d:{}; d.x:1; d.x:7; d.x", 7.0);
    assert_failure("d:{}; d.missing");
    assert_failure("d:{}; d[\"missing\"]");
}

#[test]
fn mismatched_container_and_index_kinds_fail() {
    assert_failure("arr:[]; arr[\"key\"]:1");
    assert_failure("d:{}; d[0]:1");
    assert_failure("arr:[]; arr[0]:1; arr[\"key\"]");
    assert_failure("d:{}; d.x:1; d[0]");
    assert_failure("x:5; x[0]");
}

#[test]
fn containers_alias_on_assignment() {
    assert_double("a:[]; a[0]:1; b:a; b[1]:2; a[1]", 2.0);
    assert_double("d:{}; e:d; e.k:9; d.k", 9.0);
}

#[test]
fn member_access_requires_a_dictionary() {
    assert_failure("x:5; x.y");
    assert_failure("arr:[]; arr.y");
    assert_failure("x:5; x.y:1");
}

#[test]
fn invalid_assignment_targets_fail() {
    assert_failure("5:3");
    assert_failure("\"a\":3");
    assert_failure("(1+2):3");
    assert_failure("f(1):2"); // a parameter must be a bare identifier
}

#[test]
fn function_definition_and_invocation() {
    assert_double("f(x): x*x; f(5)", 25.0);
    assert_double("add3(i): i+3; add3(4)", 7.0);
    // A definition evaluates to the function value itself.
    assert!(matches!(eval("f(x): x+1"), Value::Function(_)));
}

#[test]
fn calls_on_non_functions_fail() {
    assert_failure("x:5; x(1)");
    assert_failure("g(1)"); // unbound names read as Null
    assert_failure("s:\"abc\"; s(1)");
}

#[test]
fn dynamic_scoping() {
    let mut context = Context::new();

    // The argument is bound in a fresh frame; the caller's binding survives.
    let value = interpret("n:2; add3(i): i+3; add3(n)", &mut context).unwrap();
    assert_eq!(value, Value::Double(5.0));
    assert_eq!(context.get("n"), Value::Double(2.0));

    // A parameter shadows an outer binding for the duration of the call.
    assert_double("x:10; f(x): x*2; f(3) + x", 16.0);

    // Free variables resolve against the frames live at call time.
    assert_double("a:5; f(x): x+a; f(1)", 6.0);
}

#[test]
fn writes_inside_calls_stay_local() {
    let mut context = Context::new();

    let value = interpret("y:1; f(x): {y:99; x}; f(0); y", &mut context).unwrap();
    assert_eq!(value, Value::Double(1.0));
}

#[test]
fn while_loops() {
    let mut context = Context::new();

    // The loop's value is the condition value that ended it.
    let value = interpret("a:0; a<10 ? a:a+3", &mut context).unwrap();
    assert_eq!(value, Value::Double(0.0));
    assert_eq!(context.get("a"), Value::Double(12.0));

    // A falsy condition on entry skips the body entirely.
    assert_double("0 ? 1", 0.0);
    assert_string("\"\" ? 1", "");
    assert_double("i:5; i<3 ? i:i+1; i", 5.0);
}

#[test]
fn break_exits_the_nearest_loop() {
    assert_double("i:0; i<10 ? {i:i+1; i>5 ?? ~}; i", 6.0);
    // A break at the top level just yields its carried value.
    assert_eq!(eval("~"), Value::Null);
    // A break crosses call boundaries toward the loop.
    assert_double("stop(x): ~; i:0; i<10 ? {i:i+1; i>2 ?? stop(0)}; i", 3.0);
}

#[test]
fn return_exits_the_nearest_call() {
    assert_double("f(i): {i>5 ?? ~~ 3.14; 2.718}; f(7)", 3.14);
    assert_double("f(i): {i>5 ?? ~~ 3.14; 2.718}; f(2)", 2.718);
    // The return value travels out of nested sequencing.
    assert_double("f(x): {~~ 1; 2}; f(0)", 1.0);
    // A return at the top level yields its carried value.
    assert_double("~~ 5", 5.0);
}

#[test]
fn conditionals_and_else() {
    assert_double("1 ?? 2", 2.0);
    assert_double("0 ?? 2", 0.0); // branch not taken: the condition's value
    assert_double("0 !? 7", 7.0);
    assert_double("1 !? 7", 1.0);
    assert_double("1 ?? 2 :: 3", 2.0);
    assert_double("0 ?? 2 :: 3", 3.0);
    assert_double("0 !? 2 :: 3", 2.0);
    assert_double("1 !? 2 :: 3", 3.0);
    // '::' must immediately follow a '??' or '!?' node.
    assert_failure("2 :: 3");
    assert_failure("(1 ?? 2) ; 0 :: 3");
}

#[test]
fn recursion() {
    assert_double("fact(n): {n>1 ?? ~~ n * fact(n-1); 1}; fact(5)", 120.0);
    assert_double("fib(n): {n<2 ?? ~~ n; fib(n-1) + fib(n-2)}; fib(10)", 55.0);
}

#[test]
fn truth_values_are_doubles_and_strings_only() {
    assert_failure("arr:[]; arr ? 1");
    assert_failure("d:{}; d ?? 1");
    assert_failure("f(x):x; f !? 1");
    // Null is falsy.
    assert_double("missing ?? 1 :: 2", 2.0);
}

#[test]
fn parse_errors() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("arr[1");
    assert_failure("1 ) 2");
    assert_failure("a[0][1]"); // dereferences do not chain
    assert_failure("1 @ 2"); // no such token
    assert_failure("_x: 1"); // identifiers start with a letter
}

#[test]
fn display_labels() {
    assert_eq!(eval("1/2").to_string(), "0.5");
    assert_eq!(eval("\"hi\"").to_string(), "hi");
    assert_eq!(eval("[]").to_string(), "[Array]");
    assert_eq!(eval("{}").to_string(), "[Dictionary]");
    assert_eq!(eval("f(x):x").to_string(), "[Function]");
    assert_eq!(eval("missing").to_string(), "");
}

#[test]
fn error_messages_carry_line_numbers() {
    let err = interpret("ok: 1;\nok;\n5 : 3", &mut Context::new()).unwrap_err();
    assert!(err.to_string().contains("line 3"), "got: {err}");

    let err = interpret("1 +\n+", &mut Context::new()).unwrap_err();
    assert!(err.to_string().starts_with("Error on line"), "got: {err}");
}
