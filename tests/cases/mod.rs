#![allow(dead_code)]

use once_cell::sync::Lazy;
use verba::{
    Action, Args, Context, Engine, FunctionalVerbs, Outcome, VerbError, VerbRegistry,
};

/// Engine over [`registry`], shared by every test of a binary.
pub static ENGINE: Lazy<Engine> = Lazy::new(|| Engine::new(registry()));

/// A music arrangement DSL plus the functional verbs.
///
/// - `track(name, color?)` creates a track
/// - `add_clip(start, length?)` and `mute()` act on the track in context
/// - `square(x)` and `double(x)` are plain arithmetic
/// - `chord(root)` emits three notes, `rest()` emits nothing
pub fn registry() -> VerbRegistry {
    VerbRegistry::builder()
        .verb("track", |args, _| {
            let mut action = Action::new("create_track").with("name", args.required_str("name")?);
            if let Some(color) = args.str("color") {
                action = action.with("color", color);
            }
            Ok(action.into())
        })
        .verb("add_clip", |args, context| {
            let track = track_in(context)?;
            Ok(Action::new("add_clip")
                .with("track", track)
                .with("start", args.required_float("start")?)
                .with("length", args.float("length").unwrap_or(4.0))
                .into())
        })
        .verb("mute", |_, context| {
            let track = track_in(context)?;
            Ok(Action::new("mute").with("track", track).into())
        })
        .verb("square", |args, _| {
            let x = first_int(&args)?;
            Ok(Action::new("square").with("result", x * x).into())
        })
        .verb("double", |args, _| {
            let x = first_int(&args)?;
            Ok(Action::new("double").with("result", 2 * x).into())
        })
        .verb("chord", |args, _| {
            let root = first_int(&args)?;
            Ok(Outcome::Actions(
                [0, 4, 7]
                    .into_iter()
                    .map(|step| Action::new("note").with("pitch", root + step))
                    .collect(),
            ))
        })
        .verb("rest", |_, _| Ok(Outcome::none()))
        .verbs(FunctionalVerbs)
        .build()
}

/// Name of the track the context refers to: the one created by `track`, or
/// the one a clip was added to.
fn track_in(context: Option<&Context>) -> Result<String, VerbError> {
    let action = context
        .and_then(Context::as_action)
        .ok_or_else(|| VerbError::usage("no track in context"))?;
    let name = match action.kind.as_str() {
        "create_track" => action.get("name"),
        "add_clip" | "mute" => action.get("track"),
        _ => None,
    };
    name.and_then(|name| name.as_str())
        .map(str::to_string)
        .ok_or_else(|| VerbError::usage("no track in context"))
}

fn first_int(args: &Args) -> Result<i64, VerbError> {
    args.positional()
        .first()
        .and_then(|x| x.as_int())
        .ok_or_else(|| VerbError::usage("expected an integer"))
}

/// Compile `input` with [`ENGINE`] and compare the action kinds, or the
/// error message.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, kinds: [$($kind:expr),* $(,)?] $(,)?) => {
        #[test]
        fn $name() {
            let actions = $crate::cases::ENGINE
                .compile($input)
                .unwrap_or_else(|e| panic!("{}", verba::render_error_to_string_no_color(&e)));
            let kinds: Vec<&str> = actions.iter().map(|a| a.kind.as_str()).collect();
            let expected: Vec<&str> = vec![$($kind),*];
            pretty_assertions::assert_eq!(kinds, expected);
        }
    };
    ($name:ident, input: $input:expr, error: $message:expr $(,)?) => {
        #[test]
        fn $name() {
            match $crate::cases::ENGINE.compile($input) {
                Ok(actions) => panic!("expected an error, got {actions:?}"),
                Err(e) => pretty_assertions::assert_eq!(e.to_string(), $message),
            }
        }
    };
}
