use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Definition of a single named setting, as registered with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSpec {
    /// Host-visible name (e.g., "art_enabled").
    pub name: String,
    pub default: f32,
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
    #[serde(default)]
    pub description: String,
}

impl SettingSpec {
    pub fn new(name: &str, default: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.to_string(),
            default,
            min,
            max,
            description: String::new(),
        }
    }

    /// Set the description shown by the host's settings UI.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Clamp a value into this setting's range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// A value change, queued for the owning plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingChange {
    pub name: String,
    pub old: f32,
    pub new: f32,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    Unknown(String),
    #[error("setting `{name}` rejected non-finite value {value}")]
    NotFinite { name: String, value: f32 },
    #[error("malformed settings json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Every registered setting, in registration order. Exchanged with the host as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsManifest {
    pub settings: Vec<SettingSpec>,
}

impl SettingsManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    spec: SettingSpec,
    value: f32,
}

/// Named numeric settings with defaults, ranges and change notification.
///
/// Booleans are stored as floats and read as `value != 0`, matching the
/// host's cvar convention. Writes are clamped into range; a write that
/// changes the stored value queues a [`SettingChange`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    entries: Vec<Entry>,
    pending: Vec<SettingChange>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a setting at its default value. Re-registering an existing
    /// name replaces its definition and re-clamps the current value.
    pub fn register(&mut self, spec: SettingSpec) {
        match self.entries.iter_mut().find(|e| e.spec.name == spec.name) {
            Some(entry) => {
                entry.value = spec.clamp(entry.value);
                entry.spec = spec;
            }
            None => {
                let value = spec.clamp(spec.default);
                self.entries.push(Entry { spec, value });
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.entry(name).map(|e| e.value)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).map(|v| v != 0.0)
    }

    pub fn spec(&self, name: &str) -> Option<&SettingSpec> {
        self.entry(name).map(|e| &e.spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = &SettingSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write a value, clamped into the setting's range.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, name: &str, value: f32) -> Result<bool, SettingsError> {
        if !value.is_finite() {
            return Err(SettingsError::NotFinite {
                name: name.to_string(),
                value,
            });
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.spec.name == name)
            .ok_or_else(|| SettingsError::Unknown(name.to_string()))?;

        let new = entry.spec.clamp(value);
        if new == entry.value {
            return Ok(false);
        }
        let old = std::mem::replace(&mut entry.value, new);
        log::debug!("setting {name}: {old} -> {new}");
        self.pending.push(SettingChange {
            name: name.to_string(),
            old,
            new,
        });
        Ok(true)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<bool, SettingsError> {
        self.set(name, if value { 1.0 } else { 0.0 })
    }

    /// Restore a setting to its default value.
    pub fn reset(&mut self, name: &str) -> Result<bool, SettingsError> {
        let default = self
            .spec(name)
            .map(|s| s.default)
            .ok_or_else(|| SettingsError::Unknown(name.to_string()))?;
        self.set(name, default)
    }

    /// Take all queued change notifications, oldest first.
    pub fn drain_changes(&mut self) -> Vec<SettingChange> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn manifest(&self) -> SettingsManifest {
        SettingsManifest {
            settings: self.specs().cloned().collect(),
        }
    }

    /// Current values keyed by name, for the host's settings persistence.
    pub fn values_json(&self) -> Result<String, SettingsError> {
        let values: BTreeMap<&str, f32> = self
            .entries
            .iter()
            .map(|e| (e.spec.name.as_str(), e.value))
            .collect();
        Ok(serde_json::to_string(&values)?)
    }

    /// Apply persisted values from a `{ "name": value }` object.
    ///
    /// Nothing is applied if any name is unknown or any value is non-finite.
    /// Returns the number of settings whose value changed.
    pub fn load_values_json(&mut self, json: &str) -> Result<usize, SettingsError> {
        let values: BTreeMap<String, f32> = serde_json::from_str(json)?;
        for (name, &value) in &values {
            if !self.contains(name) {
                return Err(SettingsError::Unknown(name.clone()));
            }
            if !value.is_finite() {
                return Err(SettingsError::NotFinite {
                    name: name.clone(),
                    value,
                });
            }
        }
        let mut changed = 0;
        for (name, value) in values {
            if self.set(&name, value)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.spec.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingsStore {
        let mut store = SettingsStore::new();
        store.register(SettingSpec::new("speed", 60.0, 5.0, 100.0).with_description("Speed"));
        store.register(SettingSpec::new("flag", 1.0, 0.0, 1.0));
        store
    }

    #[test]
    fn registers_at_default() {
        let store = store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("speed"), Some(60.0));
        assert_eq!(store.get_bool("flag"), Some(true));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn set_clamps_and_queues_change() {
        let mut store = store();
        assert!(store.set("speed", 150.0).unwrap());
        assert_eq!(store.get("speed"), Some(100.0));

        let changes = store.drain_changes();
        assert_eq!(
            changes,
            vec![SettingChange {
                name: "speed".into(),
                old: 60.0,
                new: 100.0,
            }]
        );
        assert!(!store.has_pending_changes());
    }

    #[test]
    fn unchanged_write_is_silent() {
        let mut store = store();
        assert!(!store.set("speed", 60.0).unwrap());
        assert!(store.drain_changes().is_empty());
    }

    #[test]
    fn rejects_unknown_and_non_finite() {
        let mut store = store();
        assert!(matches!(store.set("nope", 1.0), Err(SettingsError::Unknown(_))));
        assert!(matches!(
            store.set("speed", f32::NAN),
            Err(SettingsError::NotFinite { .. })
        ));
        assert_eq!(store.get("speed"), Some(60.0));
    }

    #[test]
    fn reset_restores_default() {
        let mut store = store();
        store.set("speed", 20.0).unwrap();
        assert!(store.reset("speed").unwrap());
        assert_eq!(store.get("speed"), Some(60.0));
    }

    #[test]
    fn reregister_keeps_value_within_new_range() {
        let mut store = store();
        store.set("speed", 90.0).unwrap();
        store.register(SettingSpec::new("speed", 50.0, 0.0, 80.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("speed"), Some(80.0));
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let json = store().manifest().to_json().unwrap();
        let manifest = SettingsManifest::from_json(&json).unwrap();
        assert_eq!(manifest.settings.len(), 2);
        assert_eq!(manifest.settings[0].name, "speed");
        assert_eq!(manifest.settings[0].description, "Speed");
        assert_eq!(manifest.settings[1].description, "");
    }

    #[test]
    fn load_values_clamps_and_counts_changes() {
        let mut store = store();
        let changed = store.load_values_json(r#"{ "speed": 2.0, "flag": 1.0 }"#).unwrap();
        assert_eq!(changed, 1);
        assert_eq!(store.get("speed"), Some(5.0));
    }

    #[test]
    fn load_values_is_all_or_nothing() {
        let mut store = store();
        let err = store
            .load_values_json(r#"{ "speed": 30.0, "other": 1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Unknown(ref n) if n == "other"));
        assert_eq!(store.get("speed"), Some(60.0));

        assert!(matches!(
            store.load_values_json("not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn values_json_lists_current_values() {
        let mut store = store();
        store.set("flag", 0.0).unwrap();
        let json = store.values_json().unwrap();
        let parsed: BTreeMap<String, f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["speed"], 60.0);
        assert_eq!(parsed["flag"], 0.0);
    }
}
