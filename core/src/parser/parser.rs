use pest::Parser as _;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::Parser;
use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::ast::{Arg, Call, CallChain, Number, Value};

#[derive(Parser)]
#[grammar = "parser/call_chain.pest"]
pub struct CallChainParser;

/// The built-in [`Parser`] backend, driven by the pest grammar in
/// `call_chain.pest`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PestParser;

impl Parser for PestParser {
    fn parse(&self, source: &str) -> Result<CallChain, ParseError> {
        parse(source)
    }
}

/// Parse `source` into a single call chain.
///
/// Multiple statements (separated by newlines or `;`) are concatenated in
/// source order.
pub fn parse(source: &str) -> Result<CallChain, ParseError> {
    let mut pairs =
        CallChainParser::parse(Rule::program, source).map_err(|e| convert_pest_error(e, source))?;

    let Some(program) = pairs.next() else {
        return Err(ParseError::new(
            ParseErrorKind::Other {
                message: "empty parse tree".to_string(),
            },
            source.to_string(),
            (0..source.len()).into(),
        ));
    };

    let mut chain = CallChain::default();
    for statement in program.into_inner() {
        match statement.as_rule() {
            Rule::call_chain => {
                let calls = statement
                    .into_inner()
                    .map(|call| parse_call(call, source))
                    .collect::<Result<Vec<_>, _>>()?;
                chain.extend(calls);
            }
            Rule::EOI => {}
            rule => unreachable!("Unexpected rule in program: {:?}", rule),
        }
    }

    Ok(chain)
}

fn parse_call(pair: Pair<Rule>, source: &str) -> Result<Call, ParseError> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .map(|ident| ident.as_str().to_string())
        .unwrap_or_default();

    let mut args = Vec::new();
    let mut positional_index = 0;
    for arg in inner {
        match arg.as_rule() {
            Rule::named_arg => {
                let mut parts = arg.into_inner();
                let (Some(arg_name), Some(value)) = (parts.next(), parts.next()) else {
                    unreachable!("named_arg always has a name and a value");
                };
                args.push(Arg::named(arg_name.as_str(), parse_value(value, source)?));
            }
            _ => {
                args.push(Arg::positional(positional_index, parse_value(arg, source)?));
                positional_index += 1;
            }
        }
    }

    Ok(Call::from_args(name, args))
}

fn parse_value(pair: Pair<Rule>, source: &str) -> Result<Value, ParseError> {
    match pair.as_rule() {
        Rule::number => parse_number(pair.as_str())
            .map(Value::Number)
            .ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: pair.as_str().to_string(),
                    },
                    source.to_string(),
                    pair.as_span().into(),
                )
            }),
        Rule::string => {
            let content = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Value::String(unescape(content)))
        }
        Rule::boolean => Ok(Value::Bool(pair.as_str() == "true")),
        Rule::function_ref => {
            let name = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Value::function(name))
        }
        Rule::ident => Ok(Value::ident(pair.as_str())),
        rule => unreachable!("Unexpected value rule: {:?}", rule),
    }
}

/// Integers stay integral as long as they fit in `i64`; anything with a
/// fraction or outside that range becomes a float.
fn parse_number(text: &str) -> Option<Number> {
    if !text.contains('.') {
        if let Ok(value) = text.parse::<i64>() {
            return Some(Number::Int(value));
        }
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Number::Float)
}

fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            // `\\`, `\"`, `\'` and unknown escapes keep the escaped char.
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
