use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("dump I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown {what} tag '{tag}'")]
    UnknownTag { what: &'static str, tag: char },
}
