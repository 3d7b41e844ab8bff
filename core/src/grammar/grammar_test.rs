use std::path::PathBuf;

use super::*;
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;

fn small() -> GrammarDefinition {
    GrammarBuilder::new()
        .start("program")
        .rule("call", r#"IDENT "(" ")""#)
        .terminal("DOT", ".")
        .terminal("IDENT", "/[a-z]+/")
        .directive("%ignore WS")
        .build()
}

#[test]
fn test_render() {
    assert_eq!(
        small().render(),
        indoc! {r#"
            start: program

            call: IDENT "(" ")"

            DOT: "."
            IDENT: /[a-z]+/

            %ignore WS
        "#}
    );
}

#[test]
fn test_render_descriptions_as_comments() {
    let grammar = GrammarBuilder::new()
        .rule_with_description("start", "call_chain", "Entry point")
        .terminal_with_description("BOOL", r#""true" | "false""#, "Booleans")
        .build();

    assert_eq!(
        grammar.render(),
        indoc! {r#"
            // Entry point
            start: call_chain

            // Booleans
            BOOL: "true" | "false"
        "#}
    );
}

#[test]
fn test_clean_for_cfg() {
    assert_eq!(
        clean_for_cfg(&small().render()),
        "start: program\ncall: IDENT \"(\" \")\"\nDOT: \".\"\nIDENT: /[a-z]+/"
    );
    assert_eq!(clean_for_cfg("  %import common.WS\n\n"), "");
}

#[test]
fn test_builder_replaces_redefined_names() {
    let grammar = GrammarBuilder::new()
        .rule("value", "NUMBER")
        .rule("arg", "value")
        .rule("value", "NUMBER | STRING")
        .build();

    assert_eq!(grammar.rules.len(), 2);
    assert_eq!(grammar.rules[0].definition, "NUMBER | STRING");
    assert_eq!(grammar.start, "start");
}

#[test]
fn test_default_grammar() {
    let grammar = GrammarDefinition::default_grammar();
    grammar.validate().unwrap();

    assert_eq!(grammar.start, "start");
    assert!(grammar.rule("function_ref").is_some());
    assert!(grammar.terminal("BOOL").is_some());

    let rendered = grammar.render();
    assert!(rendered.starts_with("// One or more call chains\nstart: "));
    assert!(rendered.contains("%ignore WS"));

    let cleaned = clean_for_cfg(&rendered);
    assert!(!cleaned.contains('%'));
    assert!(!cleaned.contains("\n\n"));
    assert!(cleaned.contains(r#"function_ref: "@" IDENTIFIER"#));
}

const TOML_GRAMMAR: &str = indoc! {r#"
    start = "start"
    directives = ["%import common.WS", "%ignore WS"]

    [[rules]]
    name = "start"
    definition = "call_chain"
    description = "Entry point"

    [[rules]]
    name = "call_chain"
    definition = "call (DOT call)*"

    [[terminals]]
    name = "DOT"
    pattern = "."
"#};

const YAML_GRAMMAR: &str = indoc! {r#"
    start: start
    rules:
      - name: start
        definition: call_chain
        description: Entry point
      - name: call_chain
        definition: call (DOT call)*
    terminals:
      - name: DOT
        pattern: "."
    directives:
      - "%import common.WS"
      - "%ignore WS"
"#};

#[test]
fn test_toml_and_yaml_agree() {
    let from_toml = GrammarDefinition::from_toml_str(TOML_GRAMMAR).unwrap();
    let from_yaml = GrammarDefinition::from_yaml_str(YAML_GRAMMAR).unwrap();

    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_toml.rules[0].description.as_deref(), Some("Entry point"));
    assert_eq!(from_toml.rules[1].description, None);
    assert_eq!(from_toml.directives.len(), 2);
}

#[test]
fn test_missing_sections_default() {
    let grammar = GrammarDefinition::from_yaml_str("rules: []").unwrap();
    assert_eq!(grammar, GrammarDefinition::default());
}

#[test]
fn test_duplicate_rule_is_rejected() {
    let yaml = indoc! {"
        rules:
          - name: value
            definition: NUMBER
          - name: value
            definition: STRING
    "};
    let err = GrammarDefinition::from_yaml_str(yaml).unwrap_err();
    assert_eq!(err.to_string(), "rule 'value' is defined more than once");
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        GrammarDefinition::from_toml_str("rules = 3"),
        Err(GrammarError::Toml(_))
    ));
    assert!(matches!(
        GrammarDefinition::from_yaml_str("rules: [{ name: x }]"),
        Err(GrammarError::Yaml(_))
    ));
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("verba-grammar-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_from_path_by_extension() {
    let toml_path = temp_file("grammar.toml", TOML_GRAMMAR);
    let yml_path = temp_file("grammar.yml", YAML_GRAMMAR);

    assert_eq!(
        GrammarDefinition::from_path(&toml_path).unwrap(),
        GrammarDefinition::from_path(&yml_path).unwrap()
    );
}

#[test]
fn test_from_path_errors() {
    let json_path = temp_file("grammar.json", "{}");
    assert!(matches!(
        GrammarDefinition::from_path(&json_path),
        Err(GrammarError::UnsupportedFormat { .. })
    ));

    let missing = std::env::temp_dir().join("verba-does-not-exist.yaml");
    assert!(matches!(
        GrammarDefinition::from_path(&missing),
        Err(GrammarError::Io { .. })
    ));
}

#[test]
fn test_cfg_tool() {
    let tool = CfgTool::from_definition("music_dsl", "Edits the arrangement", &small());

    assert_eq!(
        tool.build_tool(),
        json!({
            "type": "custom",
            "name": "music_dsl",
            "description": "Edits the arrangement",
            "format": {
                "type": "grammar",
                "syntax": "lark",
                "definition": "start: program\ncall: IDENT \"(\" \")\"\nDOT: \".\"\nIDENT: /[a-z]+/",
            },
        })
    );
}

#[test]
fn test_cfg_tool_regex_and_request_config() {
    let tool = CfgTool::new("digits", "Only digits", r"\d+").with_syntax(Syntax::Regex);
    let config = tool.request_config();

    assert_eq!(config["tools"][0]["format"]["syntax"], json!("regex"));
    assert_eq!(config["tools"][0]["format"]["definition"], json!(r"\d+"));
    assert_eq!(config["text"], CfgTool::text_format());
    assert_eq!(CfgTool::text_format(), json!({ "format": { "type": "text" } }));
}
