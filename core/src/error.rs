use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Grid needs at least one item")]
    EmptyGrid,
    #[error("Item ids must be unique")]
    DuplicateId,
    #[error("Catalog could not be parsed")]
    InvalidCatalog,
}

pub type Result<T> = core::result::Result<T, GameError>;
