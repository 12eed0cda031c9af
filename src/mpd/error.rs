use thiserror::Error;

/// Errors surfaced by the daemon connection and catalog lookups.
#[derive(Debug, Error)]
pub enum MpdError {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The server's first line was not an `OK MPD <version>` greeting.
    #[error("unexpected greeting {0:?}")]
    Greeting(String),

    /// A response line that is not `Key: value` and not a terminator.
    #[error("malformed response line {0:?}")]
    Protocol(String),

    /// The daemon rejected a command (`ACK …`).
    #[error("server: {0}")]
    Server(String),

    /// A lookup that must match at least one record matched none.
    #[error("no catalog entry matches {0}")]
    NotFound(String),
}
