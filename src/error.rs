use thiserror::Error;

/// Errors surfaced by the generator and the web listener.
#[derive(Error, Debug)]
pub enum LissajousError {
    #[error("gif encoding failed: {0}")]
    Encode(#[from] gif::EncodingError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame of {width}x{height} does not fit a gif canvas")]
    FrameTooLarge { width: usize, height: usize },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
    #[error("generation task failed: {0}")]
    Task(String),
}
