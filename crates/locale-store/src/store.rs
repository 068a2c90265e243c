use crate::{IndentWidth, StoreError};
use fs_err as fs;
use indexmap::IndexMap;
use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// A single per-locale JSON file, fully loaded into memory.
///
/// Mutations go through [`LocaleFile::entries`]; [`LocaleFile::save`] writes
/// the whole table back in the formatting the file was loaded with.
#[derive(Clone, Debug)]
pub struct LocaleFile {
    /// Where the file was loaded from and will be written back to.
    pub path: PathBuf,
    /// The locale name, taken from the file stem (e.g. `fr-fr`).
    pub name: String,
    /// The string table, in file order.
    pub entries: IndexMap<String, String>,
    /// Indent width detected at load time.
    pub indent: IndentWidth,
}

impl LocaleFile {
    /// Load a locale file, recording its indent width for the rewrite.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path)?;
        let entries: IndexMap<String, String> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            entries,
            indent: IndentWidth::detect(&content),
        })
    }

    /// Serialize the table with the recorded indent.
    ///
    /// Non-ASCII characters are written raw and the output ends with a
    /// trailing newline, matching how the files are kept in version control.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_str().as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries
            .serialize(&mut ser)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// The serialized table as a string, for diff rendering.
    pub fn render(&self) -> Result<String, StoreError> {
        Ok(String::from_utf8_lossy(&self.to_bytes()?).into_owned())
    }

    /// Rewrite the file in place, atomically.
    ///
    /// The content is written to a temp file in the same directory and
    /// renamed over the original, so a failure mid-write never leaves a
    /// truncated locale file behind.
    pub fn save(&self) -> Result<(), StoreError> {
        let bytes = self.to_bytes()?;
        let dir = self.path.parent().unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

/// A directory of locale files with one designated source locale.
#[derive(Clone, Debug)]
pub struct LocaleStore {
    dir: PathBuf,
    source_name: String,
}

impl LocaleStore {
    /// Open a store, failing fast if the source locale file is missing.
    pub fn open(
        dir: impl Into<PathBuf>,
        source_name: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let store = Self {
            dir: dir.into(),
            source_name: source_name.into(),
        };
        let source = store.source_path();
        if !source.is_file() {
            return Err(StoreError::SourceLocaleMissing { path: source });
        }
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.source_name)
    }

    pub fn load_source(&self) -> Result<LocaleFile, StoreError> {
        LocaleFile::load(&self.source_path())
    }

    /// All locale files in the store, sorted by filename.
    pub fn locale_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Locale files other than the source locale, sorted by filename.
    pub fn other_locale_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        Ok(self
            .locale_paths()?
            .into_iter()
            .filter(|path| {
                path.file_name().and_then(|name| name.to_str())
                    != Some(self.source_name.as_str())
            })
            .collect())
    }
}
