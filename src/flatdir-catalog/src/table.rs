use std::{fmt::Debug, str::FromStr, sync::Arc};

use crate::{error::CatalogError, source::Source};

/// Table implementation reference.
pub type TableRef = Arc<dyn Table>;

/// Execution strategy for the delimited-text tables of one catalog.
///
/// The flavor is fixed when the catalog is built and applies uniformly to
/// every `.csv`-derived table in it; `.json`-derived tables ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Tables translate themselves into the host's plan language.
    Translatable,
    /// Tables expose a plain full scan.
    Scannable,
    /// Tables accept filters pushed into the scan.
    Filterable,
}

impl FromStr for Flavor {
    type Err = CatalogError;

    /// Parses a configured flavor, failing fast on anything unrecognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRANSLATABLE" => Ok(Self::Translatable),
            "SCANNABLE" => Ok(Self::Scannable),
            "FILTERABLE" => Ok(Self::Filterable),
            _ => Err(CatalogError::UnknownFlavor {
                value: s.to_string(),
            }),
        }
    }
}

/// Identifies the concrete handle behind a [`TableRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    CsvTranslatable,
    CsvScannable,
    CsvFilterable,
    JsonScannable,
}

/// One queryable table bound to a single source file.
///
/// Handles are immutable and lazy: nothing is read from the file until the
/// host query layer scans the table.
pub trait Table: Send + Sync + Debug {
    /// The file backing this table.
    fn source(&self) -> &Source;

    /// Which concrete handle this is.
    fn kind(&self) -> TableKind;
}

/// Delimited-text table that translates itself into the host plan language.
#[derive(Debug, Clone)]
pub struct CsvTranslatableTable {
    source: Source,
    fields: Option<Vec<String>>,
}

impl CsvTranslatableTable {
    pub fn new(source: Source, fields: Option<Vec<String>>) -> Self {
        Self { source, fields }
    }

    /// Projected field names, when the host narrowed the scan.
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

impl Table for CsvTranslatableTable {
    fn source(&self) -> &Source {
        &self.source
    }

    fn kind(&self) -> TableKind {
        TableKind::CsvTranslatable
    }
}

/// Delimited-text table the host reads with a full scan.
#[derive(Debug, Clone)]
pub struct CsvScannableTable {
    source: Source,
    fields: Option<Vec<String>>,
}

impl CsvScannableTable {
    pub fn new(source: Source, fields: Option<Vec<String>>) -> Self {
        Self { source, fields }
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

impl Table for CsvScannableTable {
    fn source(&self) -> &Source {
        &self.source
    }

    fn kind(&self) -> TableKind {
        TableKind::CsvScannable
    }
}

/// Delimited-text table that accepts filters pushed into the scan.
#[derive(Debug, Clone)]
pub struct CsvFilterableTable {
    source: Source,
    fields: Option<Vec<String>>,
}

impl CsvFilterableTable {
    pub fn new(source: Source, fields: Option<Vec<String>>) -> Self {
        Self { source, fields }
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

impl Table for CsvFilterableTable {
    fn source(&self) -> &Source {
        &self.source
    }

    fn kind(&self) -> TableKind {
        TableKind::CsvFilterable
    }
}

/// Semi-structured table; always read with a full scan, whatever the
/// catalog's flavor.
#[derive(Debug, Clone)]
pub struct JsonScannableTable {
    source: Source,
    fields: Option<Vec<String>>,
}

impl JsonScannableTable {
    pub fn new(source: Source, fields: Option<Vec<String>>) -> Self {
        Self { source, fields }
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

impl Table for JsonScannableTable {
    fn source(&self) -> &Source {
        &self.source
    }

    fn kind(&self) -> TableKind {
        TableKind::JsonScannable
    }
}

/// Builds the handle variant selected by `flavor` for a delimited-text file.
pub fn csv_table(source: Source, flavor: Flavor) -> TableRef {
    match flavor {
        Flavor::Translatable => Arc::new(CsvTranslatableTable::new(source, None)),
        Flavor::Scannable => Arc::new(CsvScannableTable::new(source, None)),
        Flavor::Filterable => Arc::new(CsvFilterableTable::new(source, None)),
    }
}

/// Builds the fixed handle used for every semi-structured file.
pub fn json_table(source: Source) -> TableRef {
    Arc::new(JsonScannableTable::new(source, None))
}
