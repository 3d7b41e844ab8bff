use super::*;
use crate::coerce::{Args, Native, coerce_args};
use crate::parser::parse;
use crate::runtime::Action;
use pretty_assertions::assert_eq;
use serde_json::json;

fn registry() -> VerbRegistry {
    VerbRegistry::builder()
        .verb("square", |_, _| Ok(Action::new("square").into()))
        .verb("double", |_, _| Ok(Action::new("double").into()))
        .verb("is_even", |_, _| Ok(Action::new("is_even").into()))
        .verbs(FunctionalVerbs)
        .build()
}

/// Parse a single call and run its verb directly.
fn call(source: &str) -> Result<Outcome, VerbError> {
    let registry = registry();
    let chain = parse(source).expect("source should parse");
    let call = &chain.calls[0];
    let args = coerce_args(&call.args, &registry);
    registry
        .get(&call.name)
        .expect("verb should be registered")
        .invoke(args, None)
}

fn single(source: &str) -> Action {
    match call(source).expect("verb should succeed") {
        Outcome::Action(action) => action,
        other => panic!("expected a single action, got {other:?}"),
    }
}

#[test]
fn test_map() {
    let action = single("map(@square, 'numbers')");
    assert_eq!(
        action,
        Action::new("map")
            .with("function", "square")
            .with("data", "numbers")
    );
}

#[test]
fn test_filter() {
    let action = single("filter(@is_even, items)");
    assert_eq!(
        action,
        Action::new("filter")
            .with("predicate", "is_even")
            .with("data", "items")
    );
}

#[test]
fn test_reduce_with_and_without_initial() {
    let action = single("reduce(@double, 'xs')");
    assert_eq!(action.get("initial"), Some(&json!(null)));

    let action = single("reduce(@double, 'xs', 10)");
    assert_eq!(action.get("function"), Some(&json!("double")));
    assert_eq!(action.get("initial"), Some(&json!(10)));
}

#[test]
fn test_compose_keeps_declared_order() {
    let action = single("compose(@square, @double, @is_even)");
    assert_eq!(
        action.get("functions"),
        Some(&json!(["square", "double", "is_even"]))
    );
}

#[test]
fn test_pipe() {
    let action = single("pipe(3, @double, @square)");
    assert_eq!(action.get("data"), Some(&json!(3)));
    assert_eq!(action.get("functions"), Some(&json!(["double", "square"])));
}

#[test]
fn test_pipe_without_functions() {
    let action = single("pipe(3)");
    assert_eq!(action.get("functions"), Some(&json!([])));
}

#[test]
fn test_unresolved_function_is_a_usage_error() {
    let err = call("map(@cube, 'numbers')").unwrap_err();
    assert!(matches!(err, VerbError::Usage(_)));
    assert_eq!(err.to_string(), "map: 'cube' is not a registered verb");
}

#[test]
fn test_literal_in_function_position() {
    let err = call("compose(@square, 2)").unwrap_err();
    assert_eq!(err.to_string(), "compose: expected a @function, got int");
}

#[test]
fn test_missing_arguments() {
    for source in ["map(@square)", "filter()", "reduce(@square)", "compose()", "pipe()"] {
        let err = call(source).unwrap_err();
        assert!(matches!(err, VerbError::Usage(_)), "{source}: {err:?}");
    }
}

#[test]
fn test_resolved_function_can_be_invoked() {
    let registry = registry();
    let chain = parse("map(@square, 1)").unwrap();
    let args = coerce_args(&chain.calls[0].args, &registry);

    let square = args.positional()[0].as_verb().expect("resolved");
    let outcome = square.invoke(Args::from_positional([Native::Int(2)]), None).unwrap();
    assert_eq!(outcome, Outcome::Action(Action::new("square")));
}
