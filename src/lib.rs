//! Verba - chains of verb calls compiled into actions
//!
//! # Overview
//!
//! Verba takes short call chains such as
//! `track(name="Drums").add_clip(start=0, length=8)`, typically produced by a
//! language model constrained to a grammar, and turns them into a sequence of
//! [`Action`]s. Verbs are plain Rust functions registered by name; they never
//! perform side effects themselves. A [`Runtime`] executes the actions.
//!
//! # Quick Start
//!
//! ```ignore
//! use verba::{Action, Engine, RecordingRuntime, VerbRegistry};
//!
//! let registry = VerbRegistry::builder()
//!     .verb("track", |args, _| {
//!         Ok(Action::new("create_track").with("name", args.required_str("name")?).into())
//!     })
//!     .verb("add_clip", |args, _| {
//!         Ok(Action::new("add_clip").with("start", args.int("start").unwrap_or(0)).into())
//!     })
//!     .build();
//!
//! let engine = Engine::new(registry);
//! let mut runtime = RecordingRuntime::new();
//! engine.execute(r#"track(name="Drums").add_clip(start=0)"#, &mut runtime)?;
//! assert_eq!(runtime.kinds(), ["create_track", "add_clip"]);
//! ```
//!
//! # Context
//!
//! Each verb receives the context left by the previous verb of the chain:
//! by default the last action it produced. Returning
//! [`Outcome::WithContext`] hands something else forward.
//!
//! # Errors
//!
//! Every failure is an [`Error`]. Use [`render_error`] or
//! [`render_error_to_string`] to show it with the offending source.

mod error_renderer;

// Re-export public API from verba_core
pub use verba_core::api::{
    Diagnostic, Engine, EngineBuilder, EngineOptions, Error, Plan, Severity,
};

// Re-export the building blocks
pub use verba_core::ast::{self, Arg, Call, CallChain, Value};
pub use verba_core::coerce::{Args, FunctionResolver, Native};
pub use verba_core::grammar::{self, CfgTool, GrammarBuilder, GrammarDefinition};
pub use verba_core::interpreter::{ActionStream, InterpretError, Interpreter};
pub use verba_core::parser::{self, ParseError, Parser, PestParser};
pub use verba_core::runtime::{
    self, Action, ExecutionError, PrintRuntime, RecordingRuntime, Runtime, RuntimeError,
};
pub use verba_core::verbs::{
    self, BoundVerb, Context, FunctionalVerbs, Outcome, RegistryBuilder, Verb, VerbError,
    VerbRegistry, VerbSet,
};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
