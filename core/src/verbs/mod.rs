//! Verb handlers, the registry that names them, and what they return.

mod error;
mod functional;
mod outcome;
mod registry;

pub use error::VerbError;
pub use functional::FunctionalVerbs;
pub use outcome::{Context, Outcome};
pub use registry::{BoundVerb, RegistryBuilder, Verb, VerbRegistry, VerbSet};

#[cfg(test)]
mod functional_test;
