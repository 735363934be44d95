//! Maps a directory of flat data files onto a catalog of queryable tables.
//!
//! Each `.csv`, `.csv.gz`, `.json`, or `.json.gz` file in the directory
//! becomes one table, keyed by its file name with the compression and format
//! suffixes stripped. File contents are never read here; handles stay lazy
//! until the host query layer scans them.

mod catalog;
pub mod error;
mod source;
mod table;

pub use catalog::{Catalog, DirectoryCatalog};
pub use error::{CatalogError, CatalogResult};
pub use source::Source;
pub use table::{
    csv_table, json_table, CsvFilterableTable, CsvScannableTable, CsvTranslatableTable, Flavor,
    JsonScannableTable, Table, TableKind, TableRef,
};
