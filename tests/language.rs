use std::fs;

use walkdir::WalkDir;
use wordcalc::{
    Calculator,
    error::{ErrorKind, EvalError, ParseError, TokenizeError},
    evaluate,
    interpreter::{evaluator::core::Context, number_table::NumberTable},
};

#[test]
fn doc_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|x| x == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_examples(&content) {
            count += 1;
            let outcome = evaluate(&input);
            match expected.strip_prefix("error(").and_then(|s| s.strip_suffix(')')) {
                Some(kind) => match outcome {
                    Err(e) => assert_eq!(format!("{:?}", e.kind()),
                                         kind,
                                         "{input:?} in {path:?} failed with {e}"),
                    Ok(v) => panic!("{input:?} in {path:?} gave {v}, expected {expected}"),
                },
                None => {
                    let expected: f64 =
                        expected.parse()
                                .unwrap_or_else(|_| panic!("Bad value {expected:?} in {path:?}"));
                    match outcome {
                        Ok(v) => assert_eq!(v, expected, "{input:?} in {path:?}"),
                        Err(e) => panic!("{input:?} in {path:?} failed: {e}"),
                    }
                },
            }
        }
    }

    assert!(count > 0, "No examples found in docs");
}

/// Collects `input => expected` lines from ```wordcalc blocks.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```wordcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((input, expected)) = line.rsplit_once(" => ") {
            examples.push((input.to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "{src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(v) => panic!("{src:?} succeeded with {v} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn digit_strings_round_trip() {
    for n in [0_i32, 1, 7, 42, 100, 65_536, 1_234_567, 9_999_999] {
        assert_value(&n.to_string(), f64::from(n));
    }
    assert_value("0007", 7.0);
}

#[test]
fn compound_number_words() {
    assert_value("one hundred and seven", 107.0);
    assert_value("twenty one", 21.0);
    assert_value("nine hundred ninety nine thousand nine hundred ninety nine", 999_999.0);
    assert_value("twelve hundred thousand", 1_200_000.0);
    assert_value("one thousand two thousand", 3000.0);
    assert_value("one million one million", 2_000_000.0);
    assert_value("nine million nine hundred ninety nine thousand nine hundred and ninety nine",
                 9_999_999.0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("2 + 3 * 4", 14.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("two plus three times four", 14.0);
}

#[test]
fn unary_minus() {
    assert_value("- - 5", 5.0);
    assert_value("-5 + 3", -2.0);
    assert_value("3 - -5", 8.0);
    assert_value("minus twenty", -20.0);
}

#[test]
fn operator_spellings_are_interchangeable() {
    assert_value("10 divided by 2", 5.0);
    assert_value("10 / 2", 5.0);
    assert_value("three times 4 minus one plus 2", 13.0);
    assert_value("3*4-1+2", 13.0);
}

#[test]
fn bounds() {
    assert_value("9999999", 9_999_999.0);
    assert_kind("10000000", ErrorKind::Range);
    assert_kind("-10000000", ErrorKind::Range);
    assert_kind("99999999999999999999999999", ErrorKind::Range);
    assert_kind("ten million", ErrorKind::Range);
    assert_kind("9999999 + 1", ErrorKind::Overflow);
    assert_kind("-9999999 - 1", ErrorKind::Underflow);
    assert_kind("-9999999 + -1", ErrorKind::Underflow);
    assert_kind("4000000 * 3", ErrorKind::Overflow);
}

#[test]
fn division_by_zero() {
    assert_kind("5 / 0", ErrorKind::DivideByZero);
    assert_kind("five divided by zero", ErrorKind::DivideByZero);
    assert_kind("1 / (0)", ErrorKind::Tokenize);
    assert_value("0 / 5", 0.0);
}

#[test]
fn malformed_lines() {
    assert_kind("twenty zero", ErrorKind::Parse);
    assert_kind("3 + 4 5", ErrorKind::Parse);
    assert_kind("3 +", ErrorKind::Parse);
    assert_kind("* 3", ErrorKind::Parse);
    assert_kind("hundred", ErrorKind::Parse);
    assert_kind("", ErrorKind::Parse);
    assert_kind("five banana", ErrorKind::Tokenize);
    assert_kind("2.5 + 1", ErrorKind::Tokenize);
}

#[test]
fn errors_carry_context() {
    let unknown = TokenizeError::UnknownToken { word: "banana".to_string() };
    assert_eq!(evaluate("five banana"), Err(EvalError::Tokenize(unknown)));
    assert_eq!(evaluate("3 + 4 5"),
               Err(EvalError::Parse(ParseError::ExpectedEndOfInput { token: "5".to_string() })));
    assert_eq!(evaluate("3 + 4 5").unwrap_err().to_string(),
               "expected end of input but got '5'");
}

#[test]
fn failed_line_does_not_affect_the_next() {
    let calculator = Calculator::default();

    assert!(calculator.evaluate("5 / 0").is_err());
    assert_eq!(calculator.evaluate("5 / 1"), Ok(5.0));
    assert!(calculator.evaluate("twenty zero").is_err());
    assert_eq!(calculator.evaluate("twenty two"), Ok(22.0));
}

#[test]
fn injected_table_and_context() {
    let table = NumberTable::new();
    let context = Context { min_value: -1000.0,
                            max_value: 1000.0,
                            ..Context::new() };
    let calculator = Calculator::new(&table).with_context(context);

    assert_eq!(calculator.evaluate("nine hundred and ninety nine"), Ok(999.0));
    assert_eq!(calculator.evaluate("one thousand and one").map_err(|e| e.kind()),
               Err(ErrorKind::Range));
    assert_eq!(calculator.evaluate("600 + 600").map_err(|e| e.kind()),
               Err(ErrorKind::Overflow));
}

#[test]
fn shared_table_across_threads() {
    let handles: Vec<_> = (1..=4).map(|n| {
                                     std::thread::spawn(move || {
                                         evaluate(&format!("{n} times one hundred and one"))
                                     })
                                 })
                                 .collect();

    for (n, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(f64::from(n) * 101.0));
    }
}
