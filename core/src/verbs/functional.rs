//! `map`, `filter`, `reduce`, `compose` and `pipe` over `@function` references.
//!
//! These verbs only describe the operation; each one emits a single action
//! naming the functions involved and carrying the data it was given. A
//! runtime decides what mapping or filtering means for its domain.

use serde_json::Value as JsonValue;

use super::{Context, Outcome, RegistryBuilder, VerbError, VerbSet};
use crate::coerce::{Args, Native};
use crate::runtime::Action;

/// Functional verbs for DSLs whose verbs take other verbs as arguments.
///
/// ```ignore
/// let registry = VerbRegistry::builder()
///     .verb("square", square)
///     .verbs(FunctionalVerbs)
///     .build();
/// // map(@square, data)
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionalVerbs;

impl VerbSet for FunctionalVerbs {
    fn register(self, builder: &mut RegistryBuilder) {
        builder.add("map", map);
        builder.add("filter", filter);
        builder.add("reduce", reduce);
        builder.add("compose", compose);
        builder.add("pipe", pipe);
    }
}

/// `map(@function, data)`
fn map(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let [function, data, ..] = args.positional() else {
        return Err(VerbError::usage("map expects (@function, data)"));
    };
    Ok(Action::new("map")
        .with("function", function_name("map", function)?)
        .with("data", JsonValue::from(data))
        .into())
}

/// `filter(@predicate, data)`
fn filter(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let [predicate, data, ..] = args.positional() else {
        return Err(VerbError::usage("filter expects (@predicate, data)"));
    };
    Ok(Action::new("filter")
        .with("predicate", function_name("filter", predicate)?)
        .with("data", JsonValue::from(data))
        .into())
}

/// `reduce(@function, data, initial?)`
fn reduce(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let (function, data, initial) = match args.positional() {
        [function, data] => (function, data, JsonValue::Null),
        [function, data, initial, ..] => (function, data, JsonValue::from(initial)),
        _ => return Err(VerbError::usage("reduce expects (@function, data, initial?)")),
    };
    Ok(Action::new("reduce")
        .with("function", function_name("reduce", function)?)
        .with("data", JsonValue::from(data))
        .with("initial", initial)
        .into())
}

/// `compose(@f, @g, ...)`
fn compose(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let functions = args.positional();
    if functions.is_empty() {
        return Err(VerbError::usage("compose expects at least one @function"));
    }
    Ok(Action::new("compose")
        .with("functions", function_names("compose", functions)?)
        .into())
}

/// `pipe(data, @f, @g, ...)`
fn pipe(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let Some((data, functions)) = args.positional().split_first() else {
        return Err(VerbError::usage("pipe expects (data, @function, ...)"));
    };
    Ok(Action::new("pipe")
        .with("data", JsonValue::from(data))
        .with("functions", function_names("pipe", functions)?)
        .into())
}

fn function_name(verb: &str, value: &Native) -> Result<String, VerbError> {
    match value {
        Native::Verb(bound) => Ok(bound.name().to_string()),
        Native::Str(name) => Err(VerbError::usage(format!(
            "{verb}: '{name}' is not a registered verb"
        ))),
        other => Err(VerbError::usage(format!(
            "{verb}: expected a @function, got {}",
            other.type_name()
        ))),
    }
}

fn function_names(verb: &str, values: &[Native]) -> Result<Vec<String>, VerbError> {
    values.iter().map(|value| function_name(verb, value)).collect()
}
