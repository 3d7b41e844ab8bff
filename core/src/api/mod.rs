//! Public API: the engine and its errors.
//!
//! # Example
//!
//! ```ignore
//! use verba_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::builder()
//!     .verbs(registry)
//!     .options(EngineOptions { max_calls: Some(32) })
//!     .build();
//!
//! for action in engine.stream("track(name='Drums').add_clip(start=0)")? {
//!     runtime.execute(&action?)?;
//! }
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{Engine, EngineBuilder, Plan};
pub use error::{Diagnostic, Error, Severity};
pub use options::EngineOptions;
