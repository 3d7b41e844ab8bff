//! Syntax tree produced by a parser backend and consumed by the interpreter.
//!
//! The tree is deliberately flat: a program is a [`CallChain`] of [`Call`]s,
//! each holding a mapping from argument name to literal [`Value`]. Positional
//! arguments are stored under synthesized names (see [`positional_key`]) so
//! their left-to-right order can be rebuilt from the index alone.

mod call;
mod value;


pub use call::{
    Arg, Call, CallChain, POSITIONAL_PREFIX, is_positional_key, parse_positional_index,
    positional_key,
};
pub use value::{Number, Value, ValueKind};
