use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    path::PathBuf,
};
use tracing::debug;

/// Persistent string-to-string storage backed by a single JSON file.
///
/// Every save rewrites the whole map; the last writer wins. A missing or
/// unreadable file opens as an empty store so a bad file never blocks the
/// user from creating new entries.
pub struct Store {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "store unparsable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "store unreadable, starting empty");
                BTreeMap::new()
            }
        };

        Self { path, values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Write the map to a new file, then rename it over the old one.
    pub fn save(&self) -> Result<()> {
        let tmp = self.path.with_extension("json.new");

        serde_json::to_writer_pretty(
            File::create(&tmp).context("Failed to create new storage file")?,
            &self.values,
        )
        .context("Failed to save storage file")?;

        fs::rename(&tmp, &self.path).context("Failed to replace old storage file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("logbook.json"));

        assert_eq!(store.get("logbookUsername"), None);
    }

    #[test]
    fn garbage_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logbook.json");
        fs::write(&path, "not json {{{").unwrap();

        let store = Store::open(&path);

        assert_eq!(store.get("logbookEntries"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logbook.json");

        let mut store = Store::open(&path);
        store.set("logbookUsername", "alice");
        store.save().unwrap();

        let reopened = Store::open(&path);
        assert_eq!(reopened.get("logbookUsername"), Some("alice"));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logbook.json");

        let mut store = Store::open(&path);
        store.set("logbookUsername", "alice");
        store.save().unwrap();
        store.set("logbookUsername", "bob");
        store.save().unwrap();

        let reopened = Store::open(&path);
        assert_eq!(reopened.get("logbookUsername"), Some("bob"));
    }
}
