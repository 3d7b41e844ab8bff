//! Verbs for a small music arrangement DSL, used by the CLI.

use verba::{Action, Args, Context, Outcome, RegistryBuilder, VerbError, VerbSet};

/// `track(name, color?)`, `add_clip(start, length)` and `mute()`.
///
/// `add_clip` and `mute` act on the track created earlier in the chain.
pub struct MusicVerbs;

impl VerbSet for MusicVerbs {
    fn register(self, builder: &mut RegistryBuilder) {
        builder.add("track", track);
        builder.add("add_clip", add_clip);
        builder.add("mute", mute);
    }
}

fn track(args: Args, _context: Option<&Context>) -> Result<Outcome, VerbError> {
    let mut action = Action::new("create_track").with("name", args.required_str("name")?);
    if let Some(color) = args.str("color") {
        action = action.with("color", color);
    }
    Ok(action.into())
}

fn add_clip(args: Args, context: Option<&Context>) -> Result<Outcome, VerbError> {
    let track = current_track("add_clip", context)?;
    let action = Action::new("add_clip")
        .with("track", track_name(track))
        .with("start", args.required_float("start")?)
        .with("length", args.float("length").unwrap_or(4.0));
    // Later calls still act on the same track.
    Ok(Outcome::WithContext(action, Context::Action(track.clone())))
}

fn mute(_args: Args, context: Option<&Context>) -> Result<Outcome, VerbError> {
    let track = current_track("mute", context)?;
    let action = Action::new("mute").with("track", track_name(track));
    Ok(Outcome::WithContext(action, Context::Action(track.clone())))
}

fn current_track<'c>(verb: &str, context: Option<&'c Context>) -> Result<&'c Action, VerbError> {
    context
        .and_then(Context::as_action)
        .filter(|action| action.kind == "create_track")
        .ok_or_else(|| VerbError::usage(format!("{verb} must follow track(...)")))
}

fn track_name(track: &Action) -> &str {
    track.get("name").and_then(|name| name.as_str()).unwrap_or_default()
}
