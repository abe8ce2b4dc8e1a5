//! The day-state store: marked days and per-day navigation links.
//!
//! Both mappings are loaded once at construction and fully rewritten to their
//! storage file on every mutation, so the on-disk state always reflects the
//! most recent completed mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use super::engine;
use super::persistence::{load_mapping, save_mapping};

/// Storage key for the marked-days mapping (`<key>.json` in the storage dir).
pub const MARKED_DAYS_KEY: &str = "markedDays";
/// Storage key for the day-links mapping.
pub const DAY_LINKS_KEY: &str = "dayLinks";

/// What a click on a day resolved to. A link always wins over toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayClickOutcome {
    /// The day carries a link; open it and leave the mark untouched.
    OpenLink(String),
    /// The marked flag was flipped; the new value is carried for logging.
    Toggled(bool),
}

/// Owns the persisted per-day state while the app is running.
pub struct DayStateService {
    marked_days: BTreeMap<String, bool>,
    day_links: BTreeMap<String, String>,
    storage_dir: PathBuf,
}

impl DayStateService {
    /// Load both mappings from the storage directory.
    ///
    /// A missing file or malformed content yields an empty mapping; the store
    /// must stay usable from a cold start.
    pub fn load(storage_dir: impl Into<PathBuf>) -> Self {
        let storage_dir = storage_dir.into();
        let marked_days = load_or_empty(&mapping_path(&storage_dir, MARKED_DAYS_KEY), MARKED_DAYS_KEY);
        let day_links = load_or_empty(&mapping_path(&storage_dir, DAY_LINKS_KEY), DAY_LINKS_KEY);

        Self {
            marked_days,
            day_links,
            storage_dir,
        }
    }

    pub fn marked_days(&self) -> &BTreeMap<String, bool> {
        &self.marked_days
    }

    pub fn day_links(&self) -> &BTreeMap<String, String> {
        &self.day_links
    }

    pub fn is_marked(&self, date_key: &str) -> bool {
        self.marked_days.get(date_key).copied().unwrap_or(false)
    }

    pub fn link_for(&self, date_key: &str) -> Option<&str> {
        self.day_links.get(date_key).map(String::as_str)
    }

    /// Flip the marked flag for any date key and persist the full mapping.
    ///
    /// Validity is not checked here; the engine's windowing keeps stray keys
    /// out of the counts. A flag flipped off is removed (absent means
    /// unmarked). Returns the new flag value.
    pub fn toggle_mark(&mut self, date_key: &str) -> Result<bool> {
        let now_marked = !self.is_marked(date_key);
        if now_marked {
            self.marked_days.insert(date_key.to_string(), true);
        } else {
            self.marked_days.remove(date_key);
        }
        self.persist_marked_days()?;
        Ok(now_marked)
    }

    /// Associate a link with a day, or remove it when `url` is `None`/empty.
    pub fn set_link(&mut self, date_key: &str, url: Option<&str>) -> Result<()> {
        match url {
            Some(url) if !url.trim().is_empty() => {
                self.day_links.insert(date_key.to_string(), url.to_string());
            }
            _ => {
                self.day_links.remove(date_key);
            }
        }
        self.persist_day_links()
    }

    /// Resolve a click: a linked day navigates and mutates nothing, any other
    /// day toggles its mark.
    pub fn click_day(&mut self, date_key: &str) -> Result<DayClickOutcome> {
        if let Some(url) = self.day_links.get(date_key) {
            return Ok(DayClickOutcome::OpenLink(url.clone()));
        }
        let marked = self.toggle_mark(date_key)?;
        Ok(DayClickOutcome::Toggled(marked))
    }

    /// Auto-mark transition, one candidate per tick: the day strictly before
    /// `today`, so a freshly begun day is never marked while still running.
    ///
    /// Marks and persists only when the candidate lies inside `[start, target)`
    /// and is not already marked. Idempotent; returns whether anything changed.
    pub fn auto_mark_elapsed(
        &mut self,
        today: NaiveDate,
        start: NaiveDate,
        target: NaiveDate,
    ) -> Result<bool> {
        let Some(candidate) = today.pred_opt() else {
            return Ok(false);
        };
        if candidate < start || candidate >= target {
            return Ok(false);
        }

        let key = engine::date_key(candidate);
        if self.is_marked(&key) {
            return Ok(false);
        }

        self.marked_days.insert(key, true);
        self.persist_marked_days()?;
        Ok(true)
    }

    fn persist_marked_days(&self) -> Result<()> {
        save_mapping(
            &mapping_path(&self.storage_dir, MARKED_DAYS_KEY),
            &self.marked_days,
        )
    }

    fn persist_day_links(&self) -> Result<()> {
        save_mapping(
            &mapping_path(&self.storage_dir, DAY_LINKS_KEY),
            &self.day_links,
        )
    }
}

fn mapping_path(storage_dir: &Path, key: &str) -> PathBuf {
    storage_dir.join(format!("{}.json", key))
}

fn load_or_empty<V>(path: &Path, key: &str) -> BTreeMap<String, V>
where
    V: DeserializeOwned,
{
    match load_mapping(path) {
        Ok(mapping) => mapping,
        Err(err) => {
            log::warn!("Failed to load {} mapping, starting empty: {:?}", key, err);
            BTreeMap::new()
        }
    }
}
