use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn plan() -> Vec<Action> {
    vec![
        Action::new("create_track").with("name", "Drums"),
        Action::new("add_clip").with("start", 0).with("length", 8),
        Action::new("mute_track"),
    ]
}

#[test]
fn test_action_builder() {
    let action = Action::new("create_track")
        .with("name", "Drums")
        .with("color", json!(null));

    assert_eq!(action.kind, "create_track");
    assert_eq!(action.get("name"), Some(&json!("Drums")));
    assert_eq!(action.get("color"), Some(&json!(null)));
    assert_eq!(action.get("missing"), None);
}

#[test]
fn test_action_serde() {
    let action = Action::new("add_clip").with("start", 0);
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json, json!({"kind": "add_clip", "payload": {"start": 0}}));

    let parsed: Action = serde_json::from_str(r#"{"kind": "mute_track"}"#).unwrap();
    assert_eq!(parsed, Action::new("mute_track"));
}

#[test]
fn test_action_display() {
    let action = Action::new("greet").with("name", "World");
    assert_eq!(action.to_string(), r#"greet {"name":"World"}"#);
}

#[test]
fn test_recording_runtime_preserves_order() {
    let mut runtime = RecordingRuntime::new();
    let executed = execute_all(plan(), &mut runtime).unwrap();

    assert_eq!(executed, 3);
    assert_eq!(runtime.kinds(), ["create_track", "add_clip", "mute_track"]);
}

#[test]
fn test_print_runtime_format() {
    let mut runtime = PrintRuntime::new(Vec::new());
    execute_all(&plan()[..2], &mut runtime).unwrap();

    let output = String::from_utf8(runtime.into_inner()).unwrap();
    assert_eq!(
        output,
        "Action: create_track with payload: {\"name\":\"Drums\"}\n\
         Action: add_clip with payload: {\"length\":8,\"start\":0}\n"
    );
}

#[test]
fn test_failure_stops_delivery_without_rollback() {
    let mut seen = Vec::new();
    let mut runtime = |action: &Action| -> Result<(), RuntimeError> {
        if action.kind == "add_clip" {
            return Err("clip rejected".into());
        }
        seen.push(action.kind.clone());
        Ok(())
    };

    let err = execute_all(plan(), &mut runtime).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.kind, "add_clip");
    assert_eq!(err.source.to_string(), "clip rejected");
    assert_eq!(seen, ["create_track"]);
}
