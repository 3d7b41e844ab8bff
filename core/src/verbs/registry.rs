use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use super::{Context, Outcome, VerbError};
use crate::coerce::{Args, FunctionResolver};

/// A named operation of the DSL.
///
/// Implemented automatically for closures and functions with the matching
/// signature; implement it by hand for handlers that carry state.
pub trait Verb: Send + Sync {
    fn call(&self, args: Args, context: Option<&Context>) -> Result<Outcome, VerbError>;
}

impl<F> Verb for F
where
    F: Fn(Args, Option<&Context>) -> Result<Outcome, VerbError> + Send + Sync,
{
    fn call(&self, args: Args, context: Option<&Context>) -> Result<Outcome, VerbError> {
        self(args, context)
    }
}

/// A handler together with the name it was registered under.
///
/// This is what a `@name` function reference turns into once resolved.
#[derive(Clone)]
pub struct BoundVerb {
    name: String,
    handler: Arc<dyn Verb>,
}

impl BoundVerb {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, args: Args, context: Option<&Context>) -> Result<Outcome, VerbError> {
        self.handler.call(args, context)
    }

    /// Whether both refer to the very same registered handler.
    pub fn same_handler(&self, other: &BoundVerb) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.handler), Arc::as_ptr(&other.handler))
    }
}

impl fmt::Debug for BoundVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

impl PartialEq for BoundVerb {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.same_handler(other)
    }
}

/// A reusable group of verbs that can be added to any registry.
pub trait VerbSet {
    fn register(self, builder: &mut RegistryBuilder);
}

/// Name to handler map, fixed once built.
///
/// Lookups are by exact name; a name that was never registered is reported
/// as absent rather than as a failing handler.
#[derive(Default, Clone)]
pub struct VerbRegistry {
    verbs: HashMap<String, Arc<dyn Verb>>,
}

impl VerbRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<BoundVerb> {
        self.verbs
            .get_key_value(name)
            .map(|(name, handler)| BoundVerb {
                name: name.clone(),
                handler: Arc::clone(handler),
            })
    }

    pub(crate) fn handler(&self, name: &str) -> Option<&Arc<dyn Verb>> {
        self.verbs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.verbs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FunctionResolver for VerbRegistry {
    fn resolve(&self, name: &str) -> Option<BoundVerb> {
        self.get(name)
    }
}

impl fmt::Debug for VerbRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerbRegistry")
            .field("verbs", &self.names())
            .finish()
    }
}

/// Collects handlers before freezing them into a [`VerbRegistry`].
///
/// Registering a name twice keeps the later handler.
#[derive(Default)]
pub struct RegistryBuilder {
    verbs: HashMap<String, Arc<dyn Verb>>,
}

impl RegistryBuilder {
    /// Register a closure or function as a verb.
    pub fn verb<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Args, Option<&Context>) -> Result<Outcome, VerbError> + Send + Sync + 'static,
    {
        self.add(name, handler);
        self
    }

    /// Register every verb of `set`.
    pub fn verbs(mut self, set: impl VerbSet) -> Self {
        set.register(&mut self);
        self
    }

    pub fn add<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Args, Option<&Context>) -> Result<Outcome, VerbError> + Send + Sync + 'static,
    {
        self.add_handler(name, handler);
    }

    /// Register any [`Verb`] implementation.
    pub fn add_handler(&mut self, name: impl Into<String>, handler: impl Verb + 'static) {
        let name = name.into();
        if self.verbs.insert(name.clone(), Arc::new(handler)).is_some() {
            tracing::debug!(verb = %name, "verb re-registered, keeping the later handler");
        }
    }

    pub fn build(self) -> VerbRegistry {
        VerbRegistry { verbs: self.verbs }
    }
}
