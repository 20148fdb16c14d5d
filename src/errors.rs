use crate::pattern::PatternError;
use crate::registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type RouterResult<T> = Result<T, RouterError>;
