use precisa::{
    error::{Error, RuntimeError},
    evaluate,
};

fn assert_result(src: &str, expected: &str) {
    match evaluate(src, false) {
        Ok(result) => assert_eq!(result, expected, "for input: {src}"),
        Err(e) => panic!("Evaluation of '{src}' failed: {e}"),
    }
}

fn assert_result_hp(src: &str, expected: &str) {
    match evaluate(src, true) {
        Ok(result) => assert_eq!(result, expected, "for input: {src}"),
        Err(e) => panic!("High-precision evaluation of '{src}' failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src, false) {
        Ok(result) => panic!("Evaluation of '{src}' succeeded with '{result}' but was expected to fail"),
        Err(Error::Runtime { source, .. }) => source,
        Err(e) => panic!("Evaluation of '{src}' failed with a non-runtime error: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_result("2+3*4", "14");
    assert_result("(2+3)*4", "20");
    assert_result("10 - 2 - 3", "5");
    assert_result("7 % 4", "3");
    assert_result("1 + 2 * 3 - 4 / 2", "5");
}

#[test]
fn exponent_binds_loosest() {
    assert_result("2^3", "8");
    assert_result("2^1+1", "4");
    assert_result("2*3^2", "36");
    assert_result("2^(1+1)", "4");
    assert_result("(2^1)+1", "3");
}

#[test]
fn sign_folding() {
    assert_result("-3", "-3");
    assert_result("-3 + 5", "2");
    assert_result("2 - -3", "5");
    assert_result("-2.5 * 2", "-5");
}

#[test]
fn assignment_binds_across_statements() {
    assert_result("x := 3; x * x", "9");
    assert_result("x = 2; y := x + 1; x * y", "6");
    assert_result("x := 1; x := x + 1; x", "2");
}

#[test]
fn return_short_circuits() {
    assert_result("return 7; 1+1", "7");
    assert_result("x := 1; return x; 5/0", "1");
}

#[test]
fn trailing_semicolons_are_dropped() {
    assert_result("1+1;", "2");
    assert_result(";2;", "2");
}

#[test]
fn determinism() {
    let first = evaluate("3^2 + sin(1) * 10", false).unwrap();
    let second = evaluate("3^2 + sin(1) * 10", false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("5/0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("x := 0; 1 / x"), RuntimeError::DivisionByZero);
}

#[test]
fn undefined_variable_is_error() {
    assert_eq!(runtime_error("x + 1"),
               RuntimeError::UndefinedVariable { name: "x".to_string() });
}

#[test]
fn unknown_function_is_error() {
    assert_eq!(runtime_error("foo(1)"),
               RuntimeError::UnknownFunction { name: "foo".to_string() });
}

#[test]
fn wrong_arity_names_function_and_counts() {
    assert_eq!(runtime_error("sqrt(1, 2)"),
               RuntimeError::ArityMismatch { name:     "sqrt".to_string(),
                                             expected: 1,
                                             got:      2, });
    assert_eq!(runtime_error("pow(2)"),
               RuntimeError::ArityMismatch { name:     "pow".to_string(),
                                             expected: 2,
                                             got:      1, });
    assert_eq!(runtime_error("rand(1)"),
               RuntimeError::ArityMismatch { name:     "rand".to_string(),
                                             expected: 0,
                                             got:      1, });
    assert_eq!(runtime_error("complex(1)"),
               RuntimeError::ArityMismatch { name:     "complex".to_string(),
                                             expected: 2,
                                             got:      1, });
}

#[test]
fn empty_input_is_error() {
    assert_eq!(evaluate("", false), Err(Error::EmptyExpression));
    assert_eq!(evaluate(" ; ; ", false), Err(Error::EmptyExpression));
}

#[test]
fn parse_errors_name_the_statement() {
    match evaluate("2 +", false) {
        Err(Error::Parse { statement, .. }) => assert_eq!(statement, "2 +"),
        other => panic!("Expected a parse error, got {other:?}"),
    }
    assert!(matches!(evaluate("(2 + 3", false), Err(Error::Parse { .. })));
    assert!(matches!(evaluate("1 ? 2", false), Err(Error::Parse { .. })));
    assert!(matches!(evaluate("1 2", false), Err(Error::Parse { .. })));
}

#[test]
fn string_literals_concatenate() {
    assert_result(r#""a" + "b""#, "ab");
    assert_result(r#""a" + "b" + "c""#, "abc");
    // A numeric operand contributes no characters.
    assert_result(r#""a" + 1"#, "a");
}

#[test]
fn non_concatenation_operators_reject_strings() {
    assert_eq!(runtime_error(r#""a" * "b""#),
               RuntimeError::UnsupportedStringOp { op: "*".to_string() });
    assert_eq!(runtime_error(r#""a" - "b""#),
               RuntimeError::UnsupportedStringOp { op: "-".to_string() });
    assert_eq!(runtime_error(r#""a" ^ 2"#),
               RuntimeError::UnsupportedStringOp { op: "^".to_string() });
}

#[test]
fn string_escapes_decode_at_lex_time() {
    assert_result(r#""a\tb""#, "a\tb");
    assert_result(r#""a\nb""#, "a\nb");
    assert_result(r#""say \"hi\"""#, "say \"hi\"");
}

#[test]
fn semicolons_inside_strings_do_not_split() {
    assert_result(r#""a;b""#, "a;b");
    assert_result(r#"x := "a;b"; x + "!""#, "a;b!");
}

#[test]
fn string_hash_is_numeric() {
    assert_result("string(hello)", "99162322");
    assert_result(r#"string("hello")"#, "99162322");
    assert_result("string(`hello`)", "99162322");
}

#[test]
fn string_call_arguments_respect_nesting_and_escapes() {
    let nested = evaluate("string((a))", false).unwrap();
    let quoted = evaluate(r#"string("(a)")"#, false).unwrap();
    assert_eq!(nested, quoted);
    assert_eq!(nested, "41488");

    let escaped = evaluate(r"string(a\(b\))", false).unwrap();
    let reference = evaluate(r#"string("a(b)")"#, false).unwrap();
    assert_eq!(escaped, reference);
}

#[test]
fn unquoted_string_arguments_are_textified() {
    // The preprocessor quotes any bare argument, so the hash sees text.
    let bare = evaluate("string(1 + 2)", false).unwrap();
    let quoted = evaluate(r#"string("1 + 2")"#, false).unwrap();
    assert_eq!(bare, quoted);
}

#[test]
fn complex_components_project() {
    assert_result("re(complex(3, 4))", "3");
    assert_result("im(complex(3, 4))", "4");
    assert!(matches!(runtime_error("im(5)"), RuntimeError::TypeMismatch { .. }));
    // Arithmetic drops imaginary components, so the sum is no longer
    // complex-built.
    assert!(matches!(runtime_error("im(complex(1, 2) + complex(3, 4))"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn complex_arithmetic_uses_real_components() {
    // Binary operators read real components; imaginary parts do not survive.
    assert_result("complex(1, 2) + 1", "2");
    assert_result("re(complex(2, 9) * complex(3, 9))", "6");
}

#[test]
fn builtins_compute_in_double_precision() {
    assert_result("sin(0)", "0");
    assert_result("cos(0)", "1");
    assert_result("exp(0)", "1");
    assert_result("log(exp(1))", "1");
    assert_result("pow(2, 10)", "1024");
    assert_result("sqrt(9)", "3");
}

#[test]
fn rand_draws_in_unit_interval() {
    for _ in 0..32 {
        let result = evaluate("rand()", false).unwrap();
        let value: f64 = result.parse().unwrap();
        assert!((0.0..1.0).contains(&value), "rand() produced {value}");
    }
}

#[test]
fn sqrt_of_negative_is_error() {
    assert!(matches!(runtime_error("sqrt(-4)"),
                     RuntimeError::InvalidArgument { .. }));
    assert!(matches!(evaluate("sqrt(-4)", true),
                     Err(Error::Runtime { source: RuntimeError::InvalidArgument { .. }, .. })));
}

#[test]
fn high_precision_renders_fifty_fractional_digits() {
    assert_result_hp("2+3*4", "14.00000000000000000000000000000000000000000000000000");
    assert_result_hp("1 - 1", "0.00000000000000000000000000000000000000000000000000");
}

#[test]
fn sqrt_digit_count_depends_on_mode() {
    assert_result("sqrt(2)", "1.4142135623730951");

    let precise = evaluate("sqrt(2)", true).unwrap();
    assert_eq!(precise.len(), 52);
    assert!(precise.starts_with("1.4142135623730950488016887242096980785696718753769"),
            "unexpected digits: {precise}");
}

#[test]
fn exponent_stays_double_under_high_precision() {
    // `^` computes in 64-bit floats in every mode, so its high-precision
    // rendering shows double-precision digits, unlike sqrt's.
    let via_pow = evaluate("2^0.5", true).unwrap();
    assert!(via_pow.starts_with("1.41421356237309514547"),
            "unexpected digits: {via_pow}");

    let via_sqrt = evaluate("sqrt(2)", true).unwrap();
    assert_ne!(via_pow, via_sqrt);
}

#[test]
fn modulo_definition_depends_on_mode() {
    assert_result("-7 % 3", "-1");
    assert_result_hp("-7 % 3", "2.00000000000000000000000000000000000000000000000000");
    assert_result("7.5 % 2", "1.5");
    assert_result_hp("7.5 % 2",
                     "1.50000000000000000000000000000000000000000000000000");
}

#[test]
fn high_precision_literals_keep_their_digits() {
    // Thirty significant digits survive literal parsing and rendering in
    // high-precision mode; standard mode collapses them to a double first.
    assert_result_hp("0.123456789012345678901234567890 * 1",
                     "0.12345678901234567736988623209981597028672695159912");
    assert_result_hp("return 0.123456789012345678901234567890",
                     "0.12345678901234567890123456789000000000000000000000");
}

#[test]
fn overflowing_double_literal_is_error() {
    assert!(matches!(runtime_error("1e999"),
                     RuntimeError::LiteralOutOfRange { .. }));
}

#[test]
fn overflowing_power_is_error() {
    assert!(matches!(runtime_error("10^400"), RuntimeError::NonFiniteResult));
    assert!(matches!(runtime_error("log(0)"), RuntimeError::NonFiniteResult));
}
