use std::{
    collections::HashSet,
    fmt::Debug,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::{
    error::{CatalogError, CatalogResult},
    source::Source,
    table::{csv_table, json_table, Flavor, TableRef},
};

/// Trailing suffix of compressed files; always outermost when present.
const COMPRESSION_SUFFIX: &str = ".gz";
/// Trailing suffix of delimited-text files.
const CSV_SUFFIX: &str = ".csv";
/// Trailing suffix of semi-structured files.
const JSON_SUFFIX: &str = ".json";

/// A named collection of tables the host query layer resolves against.
pub trait Catalog: Send + Sync + Debug {
    /// The catalog's name, used by the host when binding it.
    fn name(&self) -> String;

    /// Looks up one table. Exact lookups hit the map directly; otherwise the
    /// first key matching under ASCII case folding wins, in listing order.
    fn table(&self, name: &str, case_sensitive: bool) -> Option<TableRef>;

    /// Evaluates an opaque name predicate (typically compiled from a SQL
    /// pattern by the host) against every table name.
    fn table_names_matching(&self, matches: &dyn Fn(&str) -> bool) -> HashSet<String>;

    /// Like [`Catalog::table`], but a miss is an error naming the catalog.
    fn get_table(&self, name: &str, case_sensitive: bool) -> CatalogResult<TableRef> {
        self.table(name, case_sensitive)
            .ok_or_else(|| CatalogError::TableNotFound {
                catalog: self.name(),
                name: name.to_string(),
            })
    }
}

/// Catalog mapped onto a directory of flat data files. Each eligible file in
/// the directory becomes one table, keyed by the file's name with the
/// compression and format suffixes stripped.
///
/// The directory is listed exactly once, while building; file contents are
/// never read here. After construction the catalog is immutable, so lookups
/// are safe to run concurrently without locking.
#[derive(Debug)]
pub struct DirectoryCatalog {
    root: PathBuf,
    flavor: Flavor,
    tables: IndexMap<String, TableRef>,
}

impl DirectoryCatalog {
    /// Builds the catalog over the direct children of `root`.
    ///
    /// A missing or unreadable directory degrades to an empty catalog with a
    /// warning rather than an error, so the host schema can always come up;
    /// an empty catalog is a legitimate queryable state.
    pub fn build(root: impl Into<PathBuf>, flavor: Flavor) -> Self {
        let root = root.into();
        let tables = scan_directory(&root, flavor);
        Self {
            root,
            flavor,
            tables,
        }
    }

    /// Directory this catalog was built over.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Execution flavor applied to the delimited-text tables.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names, in listing order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl Catalog for DirectoryCatalog {
    fn name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.to_string_lossy().into_owned())
    }

    fn table(&self, name: &str, case_sensitive: bool) -> Option<TableRef> {
        if case_sensitive {
            self.tables.get(name).cloned()
        } else {
            self.tables
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, table)| table.clone())
        }
    }

    fn table_names_matching(&self, matches: &dyn Fn(&str) -> bool) -> HashSet<String> {
        self.tables
            .keys()
            .filter(|name| matches(name.as_str()))
            .cloned()
            .collect()
    }
}

/// True for names ending in `.csv`, `.json`, or either with a trailing
/// compression suffix.
fn is_table_file(name: &str) -> bool {
    let sans_gz = name.strip_suffix(COMPRESSION_SUFFIX).unwrap_or(name);
    sans_gz.ends_with(CSV_SUFFIX) || sans_gz.ends_with(JSON_SUFFIX)
}

fn insert(tables: &mut IndexMap<String, TableRef>, name: String, table: TableRef) {
    if name.is_empty() {
        tracing::warn!("file {} maps to an empty table name", table.source());
    }
    // Later entries overwrite earlier ones that normalize to the same name.
    tables.insert(name, table);
}

fn scan_directory(root: &Path, flavor: Flavor) -> IndexMap<String, TableRef> {
    let base = Source::new(root);
    let mut files: Vec<PathBuf> = match std::fs::read_dir(root) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .is_some_and(|name| is_table_file(&name.to_string_lossy()))
            })
            .collect(),
        Err(error) => {
            tracing::warn!("directory {} not found: {error}", root.display());
            Vec::new()
        }
    };
    // Pin listing order so duplicate stems resolve identically on every
    // filesystem.
    files.sort();

    let mut tables = IndexMap::new();
    for file in files {
        let source = Source::new(file);
        let sans_gz = source.trim(COMPRESSION_SUFFIX);
        if let Some(stem) = sans_gz.trim_or_none(JSON_SUFFIX) {
            insert(&mut tables, stem.relative_to(&base), json_table(source.clone()));
        }
        if let Some(stem) = sans_gz.trim_or_none(CSV_SUFFIX) {
            insert(&mut tables, stem.relative_to(&base), csv_table(source, flavor));
        }
    }
    tables
}
