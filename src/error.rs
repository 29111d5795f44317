use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    #[error("negative count `{count}`")]
    InvalidArgument { count: isize },
    #[error("empty collection")]
    EmptyCollection,
    #[error("index `{index}` out of bounds for length `{len}`")]
    OutOfBounds { index: usize, len: usize },
}
