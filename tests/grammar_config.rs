use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;
use verba::grammar::{GrammarDefinition, Syntax, clean_for_cfg};
use verba::{CfgTool, GrammarBuilder, PestParser, Parser};

const TASKS: &str = indoc! {r#"
    start: start

    rules:
      - name: start
        definition: call_chain
        description: Entry point
      - name: call_chain
        definition: call (DOT call)*
      - name: call
        definition: 'IDENTIFIER "(" args? ")"'
      - name: args
        definition: arg (COMMA arg)*
      - name: arg
        definition: 'IDENTIFIER "=" value | value'
      - name: value
        definition: NUMBER | STRING | IDENTIFIER

    terminals:
      - name: DOT
        pattern: "."
      - name: COMMA
        pattern: ","
      - name: NUMBER
        pattern: /-?\d+(\.\d+)?/
      - name: STRING
        pattern: /"([^"\\]|\\.)*"/
      - name: IDENTIFIER
        pattern: /[a-zA-Z_][a-zA-Z0-9_]*/

    directives:
      - "%import common.WS"
      - "%ignore WS"
"#};

#[test]
fn test_yaml_grammar_matches_builder() {
    let loaded = GrammarDefinition::from_yaml_str(TASKS).unwrap();
    let built = GrammarBuilder::new()
        .rule_with_description("start", "call_chain", "Entry point")
        .rule("call_chain", "call (DOT call)*")
        .rule("call", r#"IDENTIFIER "(" args? ")""#)
        .rule("args", "arg (COMMA arg)*")
        .rule("arg", r#"IDENTIFIER "=" value | value"#)
        .rule("value", "NUMBER | STRING | IDENTIFIER")
        .terminal("DOT", ".")
        .terminal("COMMA", ",")
        .terminal("NUMBER", r"/-?\d+(\.\d+)?/")
        .terminal("STRING", r#"/"([^"\\]|\\.)*"/"#)
        .terminal("IDENTIFIER", "/[a-zA-Z_][a-zA-Z0-9_]*/")
        .directive("%import common.WS")
        .directive("%ignore WS")
        .build();

    assert_eq!(loaded, built);
}

#[test]
fn test_cleaned_grammar() {
    let grammar = GrammarDefinition::from_yaml_str(TASKS).unwrap();
    assert_eq!(
        clean_for_cfg(&grammar.render()),
        indoc! {r#"
            // Entry point
            start: call_chain
            call_chain: call (DOT call)*
            call: IDENTIFIER "(" args? ")"
            args: arg (COMMA arg)*
            arg: IDENTIFIER "=" value | value
            value: NUMBER | STRING | IDENTIFIER
            DOT: "."
            COMMA: ","
            NUMBER: /-?\d+(\.\d+)?/
            STRING: /"([^"\\]|\\.)*"/
            IDENTIFIER: /[a-zA-Z_][a-zA-Z0-9_]*/"#}
    );
}

#[test]
fn test_cfg_tool_over_default_grammar() {
    let grammar = GrammarDefinition::default_grammar();
    let tool = CfgTool::from_definition("music_dsl", "Arranges tracks", &grammar);
    let payload = tool.build_tool();

    assert_eq!(payload["type"], json!("custom"));
    assert_eq!(payload["name"], json!("music_dsl"));
    assert_eq!(payload["format"]["syntax"], json!("lark"));
    assert_eq!(
        payload["format"]["definition"],
        json!(clean_for_cfg(&grammar.render()))
    );
    assert_eq!(tool.syntax, Syntax::Lark);
}

#[test]
fn test_default_grammar_describes_the_built_in_syntax() {
    // Sources in the shape the default grammar describes parse with the
    // built-in backend.
    let grammar = GrammarDefinition::default_grammar();
    for terminal in ["NUMBER", "STRING", "BOOL", "IDENTIFIER"] {
        assert!(grammar.terminal(terminal).is_some(), "{terminal}");
    }

    let samples = [
        r#"track(name="Drums").add_clip(start=0, length=8)"#,
        "map(@square, data)",
        "settings(loop=true, tempo=-120.5, label='it\\'s'); mute()",
    ];
    for sample in samples {
        let chain = PestParser.parse(sample).unwrap();
        assert!(!chain.is_empty(), "{sample}");
    }
}
