//! Configuration options for the engine.

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use verba_core::api::EngineOptions;
///
/// let options = EngineOptions {
///     max_calls: Some(64),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum number of calls in one chain (if Some).
    ///
    /// Checked after parsing, before any verb runs. Set it when the source
    /// comes from an untrusted generator.
    ///
    /// Default: None
    pub max_calls: Option<usize>,
}
