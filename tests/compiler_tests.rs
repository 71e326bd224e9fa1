use chrono::DateTime;
use ofilter::{Compiler, Predicate, Value};
use rust_decimal::Decimal;
use std::collections::HashMap;

fn compile(predicate: &Predicate) -> Result<String, ofilter::CompileError> {
    let mut compiler = Compiler::new();
    compiler.compile(predicate)
}

fn object(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = HashMap::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

fn utc(rfc3339: &str) -> Value {
    Value::from(DateTime::parse_from_rfc3339(rfc3339).unwrap())
}

// ============================================================================
// Operator tokens and parenthesization
// ============================================================================

#[test]
fn test_field_comparison() {
    let predicate = Predicate::gt(Predicate::field("Amount"), Predicate::capture(1000));
    assert_eq!(compile(&predicate).unwrap(), "(Amount gt 1000)");
}

#[test]
fn test_all_comparison_tokens() {
    let cases = [
        (
            Predicate::eq(Predicate::field("A"), Predicate::capture(1)),
            "(A eq 1)",
        ),
        (
            Predicate::gt(Predicate::field("A"), Predicate::capture(1)),
            "(A gt 1)",
        ),
        (
            Predicate::ge(Predicate::field("A"), Predicate::capture(1)),
            "(A ge 1)",
        ),
        (
            Predicate::lt(Predicate::field("A"), Predicate::capture(1)),
            "(A lt 1)",
        ),
        (
            Predicate::le(Predicate::field("A"), Predicate::capture(1)),
            "(A le 1)",
        ),
    ];

    for (predicate, expected) in cases {
        assert_eq!(compile(&predicate).unwrap(), expected);
    }
}

#[test]
fn test_logical_connectives() {
    let left = Predicate::eq(Predicate::field("A"), Predicate::capture(1));
    let right = Predicate::eq(Predicate::field("B"), Predicate::capture(2));

    let conjunction = Predicate::and(left.clone(), right.clone());
    assert_eq!(compile(&conjunction).unwrap(), "((A eq 1) and (B eq 2))");

    let disjunction = Predicate::or(left, right);
    assert_eq!(compile(&disjunction).unwrap(), "((A eq 1) or (B eq 2))");
}

#[test]
fn test_every_binary_node_is_wrapped() {
    // Three levels deep; each binary node carries exactly one pair of
    // parentheses no matter what its children are.
    let predicate = Predicate::or(
        Predicate::and(
            Predicate::eq(Predicate::field("A"), Predicate::capture(1)),
            Predicate::eq(Predicate::field("B"), Predicate::capture(2)),
        ),
        Predicate::eq(Predicate::field("C"), Predicate::capture(3)),
    );

    assert_eq!(
        compile(&predicate).unwrap(),
        "(((A eq 1) and (B eq 2)) or (C eq 3))"
    );
}

#[test]
fn test_negation_wrapping() {
    let predicate = Predicate::not(Predicate::eq(
        Predicate::field("X"),
        Predicate::capture(1),
    ));
    assert_eq!(compile(&predicate).unwrap(), "not ((X eq 1))");
}

#[test]
fn test_no_whitespace_artifacts() {
    let predicate = Predicate::and(
        Predicate::eq(Predicate::field("A"), Predicate::capture(1)),
        Predicate::not(Predicate::eq(Predicate::field("B"), Predicate::capture(2))),
    );
    let filter = compile(&predicate).unwrap();

    assert_eq!(filter, filter.trim());
    assert!(!filter.contains("  "));
}

// ============================================================================
// Literal encoding
// ============================================================================

#[test]
fn test_string_capture_quoting() {
    let predicate = Predicate::capture("Tom");
    assert_eq!(compile(&predicate).unwrap(), "'Tom'");
}

#[test]
fn test_boolean_lowercase() {
    assert_eq!(compile(&Predicate::capture(false)).unwrap(), "false");
    assert_eq!(compile(&Predicate::capture(true)).unwrap(), "true");
}

#[test]
fn test_datetime_formatting() {
    let predicate = Predicate::capture(utc("2024-01-02T03:04:05.678Z"));
    assert_eq!(
        compile(&predicate).unwrap(),
        "datetime'2024-01-02T03:04:05.678Z'"
    );
}

#[test]
fn test_datetime_normalized_to_utc() {
    // Offset input lands in the literal as the equivalent UTC instant.
    let predicate = Predicate::capture(utc("2024-01-02T05:04:05.678+02:00"));
    assert_eq!(
        compile(&predicate).unwrap(),
        "datetime'2024-01-02T03:04:05.678Z'"
    );
}

#[test]
fn test_whole_second_datetime_keeps_millisecond_field() {
    let predicate = Predicate::capture(utc("2008-07-10T00:00:00Z"));
    assert_eq!(
        compile(&predicate).unwrap(),
        "datetime'2008-07-10T00:00:00.000Z'"
    );
}

#[test]
fn test_numeric_captures() {
    assert_eq!(compile(&Predicate::capture(1000)).unwrap(), "1000");
    assert_eq!(compile(&Predicate::capture(2.5)).unwrap(), "2.5");
    assert_eq!(
        compile(&Predicate::capture(Decimal::new(10005, 1))).unwrap(),
        "1000.5"
    );
}

#[test]
fn test_null_capture() {
    assert_eq!(compile(&Predicate::capture(Value::Null)).unwrap(), "null");
}

// ============================================================================
// Captured-value chain resolution
// ============================================================================

#[test]
fn test_single_level_capture_resolution() {
    let order = object(vec![
        ("Customer", Value::from("Tom")),
        ("Amount", Value::from(1000)),
    ]);

    let predicate = Predicate::eq(
        Predicate::field("Customer"),
        Predicate::capture(order).access("Customer"),
    );

    assert_eq!(compile(&predicate).unwrap(), "(Customer eq 'Tom')");
}

#[test]
fn test_nested_capture_resolution() {
    // Root object -> field A -> field B -> 5: both hops come off the
    // path stack, nothing left over.
    let root = object(vec![("A", object(vec![("B", Value::from(5))]))]);

    let predicate = Predicate::capture(root).access("A").access("B");
    assert_eq!(compile(&predicate).unwrap(), "5");
}

#[test]
fn test_three_level_capture_resolution() {
    let root = object(vec![(
        "settings",
        object(vec![(
            "limits",
            object(vec![("max", Value::from(250))]),
        )]),
    )]);

    let predicate = Predicate::lt(
        Predicate::field("Amount"),
        Predicate::capture(root)
            .access("settings")
            .access("limits")
            .access("max"),
    );

    assert_eq!(compile(&predicate).unwrap(), "(Amount lt 250)");
}

#[test]
fn test_sibling_chains_do_not_interfere() {
    // Two chains into the same captured object inside one predicate;
    // each resolves against its own path.
    let order = object(vec![
        ("Customer", Value::from("Tom")),
        ("Amount", Value::from(1000)),
    ]);

    let predicate = Predicate::and(
        Predicate::eq(
            Predicate::field("Customer"),
            Predicate::capture(order.clone()).access("Customer"),
        ),
        Predicate::gt(
            Predicate::field("Amount"),
            Predicate::capture(order).access("Amount"),
        ),
    );

    assert_eq!(
        compile(&predicate).unwrap(),
        "((Customer eq 'Tom') and (Amount gt 1000))"
    );
}

// ============================================================================
// Instance reuse
// ============================================================================

#[test]
fn test_sequential_reuse_matches_fresh_instances() {
    let first = Predicate::eq(Predicate::field("A"), Predicate::capture(1));
    let second = Predicate::not(Predicate::eq(Predicate::field("B"), Predicate::capture("x")));

    let mut shared = Compiler::new();
    let shared_first = shared.compile(&first).unwrap();
    let shared_second = shared.compile(&second).unwrap();

    assert_eq!(shared_first, compile(&first).unwrap());
    assert_eq!(shared_second, compile(&second).unwrap());
}

#[test]
fn test_reuse_after_error() {
    let order = object(vec![("Amount", Value::from(1000))]);
    let bad = Predicate::capture(order.clone()).access("Missing");
    let good = Predicate::gt(
        Predicate::field("Amount"),
        Predicate::capture(order).access("Amount"),
    );

    let mut compiler = Compiler::new();
    assert!(compiler.compile(&bad).is_err());
    assert_eq!(compiler.compile(&good).unwrap(), "(Amount gt 1000)");
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_full_predicate() {
    // (x.Customer == order.Customer && x.Amount > order.Amount)
    //   || (x.TheDate == today && !x.Discount)
    let order = object(vec![
        ("Customer", Value::from("Tom")),
        ("Amount", Value::from(1000)),
    ]);
    let today = utc("2008-07-10T00:00:00Z");

    let predicate = Predicate::or(
        Predicate::and(
            Predicate::eq(
                Predicate::field("Customer"),
                Predicate::capture(order.clone()).access("Customer"),
            ),
            Predicate::gt(
                Predicate::field("Amount"),
                Predicate::capture(order).access("Amount"),
            ),
        ),
        Predicate::and(
            Predicate::eq(Predicate::field("TheDate"), Predicate::capture(today)),
            Predicate::not(Predicate::field("Discount")),
        ),
    );

    assert_eq!(
        compile(&predicate).unwrap(),
        "(((Customer eq 'Tom') and (Amount gt 1000)) or \
         ((TheDate eq datetime'2008-07-10T00:00:00.000Z') and not (Discount)))"
    );
}
