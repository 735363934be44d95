use thiserror::Error;

pub type FlatdirResult<T> = std::result::Result<T, FlatdirError>;
pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FlatdirError {
    #[error("{0}")]
    CatalogError(String),
    #[error("{0:?}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FlatdirError = io.into();
        assert!(matches!(err, FlatdirError::IoError(_)));
    }
}
