use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read recipient configuration {path:?}: {source}")]
    ConfigurationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid recipient configuration {path:?}: {reason}")]
    ConfigurationParse { path: PathBuf, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
