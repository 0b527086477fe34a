use crate::store::Store;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_edited: Option<OffsetDateTime>,
}

impl Entry {
    pub fn new(title: impl Into<String>, content: impl Into<String>, date: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            date,
            last_edited: None,
        }
    }
}

/// One user's entry collection, loaded from and saved to a single store key.
pub struct Logbook {
    key: String,
    entries: Vec<Entry>,
}

impl Logbook {
    /// Read the collection at `key`. Absent or unparsable data loads as an
    /// empty collection with nothing surfaced to the user.
    pub fn load(store: &Store, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match store.get(&key) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!(%key, error = %e, "stored entries unparsable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { key, entries }
    }

    /// Serialize the whole collection back under its key and persist the store.
    pub fn save(&self, store: &mut Store) -> Result<()> {
        let raw = serde_json::to_string(&self.entries).context("Failed to serialize entries")?;
        store.set(self.key.clone(), raw);
        store.save()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replace an entry's title and content, stamping `last_edited` and
    /// leaving `id` and `date` alone. Returns false when the id is unknown.
    pub fn update(&mut self, id: Uuid, title: &str, content: &str, now: OffsetDateTime) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.title = title.to_owned();
                entry.content = content.to_owned();
                entry.last_edited = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Case-insensitive substring filter over title and content. A blank
    /// query matches everything. Never touches the collection itself.
    pub fn filter(&self, query: &str) -> Vec<&Entry> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&query)
                    || entry.content.to_lowercase().contains(&query)
            })
            .collect()
    }
}
