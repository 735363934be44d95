use snafu::Snafu;

/// Catalog result type.
pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;

/// Catalog error.
#[derive(Debug, Snafu)]
pub enum CatalogError {
    #[snafu(display("Table {name} not found in catalog {catalog}"))]
    TableNotFound { catalog: String, name: String },

    #[snafu(display("Unknown flavor {value}"))]
    UnknownFlavor { value: String },
}

impl From<CatalogError> for common_error::FlatdirError {
    fn from(err: CatalogError) -> Self {
        common_error::FlatdirError::CatalogError(err.to_string())
    }
}
