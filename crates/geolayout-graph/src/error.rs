#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid time interval: low {low} is greater than high {high}")]
    InvalidInterval { low: f64, high: f64 },

    #[error("graph has no node with id: {node}")]
    MissingNode { node: String },

    #[error("node table has no column with id: {column}")]
    MissingColumn { column: String },

    #[error("node table already has a column with id: {column}")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, Error>;
