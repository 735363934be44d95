use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// A locatable data file beneath a catalog root.
///
/// A `Source` describes where a table's bytes live; it holds no open handle
/// and performs no I/O. Table implementations open the file lazily at scan
/// time, so a `Source` may name a file that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: PathBuf,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying filesystem path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes `suffix` from the end of the path, or `None` when the path
    /// does not end with it. Exact, case-sensitive match; callers branch on
    /// `None` to tell "absent" apart from "unchanged".
    pub fn trim_or_none(&self, suffix: &str) -> Option<Source> {
        self.path
            .to_string_lossy()
            .strip_suffix(suffix)
            .map(|stem| Source::new(stem.to_string()))
    }

    /// Removes `suffix` from the end of the path when present, otherwise
    /// returns the source unchanged.
    pub fn trim(&self, suffix: &str) -> Source {
        self.trim_or_none(suffix).unwrap_or_else(|| self.clone())
    }

    /// This source's path relative to `base`, rendered with `/` separators,
    /// falling back to the full path when the source is not beneath `base`.
    pub fn relative_to(&self, base: &Source) -> String {
        match self.path.strip_prefix(&base.path) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => self.path.to_string_lossy().into_owned(),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_or_none_strips_exact_suffix() {
        let source = Source::new("/data/emps.csv.gz");
        let trimmed = source.trim_or_none(".gz").unwrap();
        assert_eq!(trimmed.path(), Path::new("/data/emps.csv"));
    }

    #[test]
    fn trim_or_none_signals_absent_suffix() {
        let source = Source::new("/data/emps.csv");
        assert_eq!(source.trim_or_none(".gz"), None);
        // Matching is exact, not case-folded.
        assert_eq!(source.trim_or_none(".CSV"), None);
    }

    #[test]
    fn trim_is_best_effort() {
        let source = Source::new("/data/emps.csv");
        assert_eq!(source.trim(".gz"), source);
        assert_eq!(
            source.trim(".csv"),
            Source::new("/data/emps")
        );
    }

    #[test]
    fn relative_to_preserves_separators() {
        let base = Source::new("/data");
        let nested = Source::new("/data/region/emps");
        assert_eq!(nested.relative_to(&base), "region/emps");
    }

    #[test]
    fn relative_to_falls_back_to_full_path() {
        let base = Source::new("/data");
        let outside = Source::new("/elsewhere/emps");
        assert_eq!(outside.relative_to(&base), "/elsewhere/emps");
    }

    #[test]
    fn bare_format_suffix_leaves_empty_name() {
        let base = Source::new("/data");
        let stem = Source::new("/data/.csv").trim(".csv");
        assert_eq!(stem.relative_to(&base), "");
    }
}
