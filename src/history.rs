//! Spin history ledger
//!
//! Persisted to LocalStorage, keeps the 50 most recent winners.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_HISTORY;

/// A single recorded spin outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Winning item name at the time of the spin (a copy, not a reference:
    /// later roster edits must not rewrite history)
    pub item: String,
    /// Displayable locale timestamp, as supplied by the shell
    pub date: String,
}

/// Append-only, capped ledger of past winners, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SpinHistory {
    pub entries: Vec<HistoryEntry>,
}

impl SpinHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "spinnnHistory";

    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Prepend a completed spin and drop anything beyond the cap
    pub fn record(&mut self, item: &str, date: String) {
        self.entries.insert(
            0,
            HistoryEntry {
                item: item.to_string(),
                date,
            },
        );
        self.entries.truncate(MAX_HISTORY);
    }

    /// Load history from LocalStorage (WASM only). Absent or malformed
    /// storage yields an empty ledger, never an error.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<SpinHistory>(&json) {
                    Ok(history) => {
                        log::info!("Loaded {} history entries", history.entries.len());
                        return history;
                    }
                    Err(e) => log::warn!("Discarding malformed history: {e}"),
                }
            }
        }

        log::info!("No spin history found, starting fresh");
        Self::new()
    }

    /// Save history to LocalStorage (WASM only). Failures are logged and
    /// otherwise ignored.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to persist spin history");
                } else {
                    log::info!("History saved ({} entries)", self.entries.len());
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Current locale date/time string for a new history entry
#[cfg(target_arch = "wasm32")]
pub fn now_date_string() -> String {
    let date = js_sys::Date::new_0();
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_date_string() -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut history = SpinHistory::new();
        history.record("A", "t1".into());
        history.record("B", "t2".into());
        assert_eq!(history.entries[0].item, "B");
        assert_eq!(history.entries[1].item, "A");
    }

    #[test]
    fn test_record_caps_at_fifty_oldest_dropped() {
        let mut history = SpinHistory::new();
        for i in 0..(MAX_HISTORY + 10) {
            history.record(&format!("win {i}"), format!("t{i}"));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        // Newest first; the ten oldest entries were dropped
        assert_eq!(history.entries[0].item, format!("win {}", MAX_HISTORY + 9));
        assert_eq!(history.entries.last().unwrap().item, "win 10");
    }

    #[test]
    fn test_persisted_shape_is_plain_array() {
        let mut history = SpinHistory::new();
        history.record("Pizza", "1/2/2026, 3:04:05 PM".into());
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(
            json,
            r#"[{"item":"Pizza","date":"1/2/2026, 3:04:05 PM"}]"#
        );
        let back: SpinHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries, history.entries);
    }

    #[test]
    fn test_malformed_json_is_rejected_not_panicking() {
        assert!(serde_json::from_str::<SpinHistory>("{not json").is_err());
        assert!(serde_json::from_str::<SpinHistory>("[]").unwrap().is_empty());
    }
}
