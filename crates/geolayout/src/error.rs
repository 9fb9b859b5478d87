#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] geolayout_graph::Error),

    #[error("geo layout is not ready: {reason}")]
    NotReady { reason: &'static str },

    #[error("unknown projection: {name}")]
    UnknownProjection { name: String },

    #[error("invalid geo layout config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
