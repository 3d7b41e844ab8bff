use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid TOML grammar: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML grammar: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot read grammar file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only `.toml`, `.yaml` and `.yml` files can be loaded.
    #[error("unsupported grammar file format '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("{what} '{name}' is defined more than once")]
    Duplicate { what: &'static str, name: String },

    #[error("{what} with an empty name")]
    EmptyName { what: &'static str },
}
