use thiserror::Error;

/// Startup failures while attaching the component tree to the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Mount anchor #{0} not found in document")]
    MissingRoot(String),
}
