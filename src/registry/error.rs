use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(
        "route config component for path '{path}' cannot be a string id; use resolvable content instead"
    )]
    ComponentAsIdentifier { path: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
