use std::collections::BTreeMap;

/// Boolean toggles a host reads when deciding which commands to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSettings {
    values: BTreeMap<String, bool>,
}

impl HostSettings {
    pub const FORMAT_ON_SAVE: &'static str = "format_on_save";
    pub const REMOVE_COMPLETED_ON_SAVE: &'static str = "remove_completed_on_save";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    pub fn format_on_save(&self) -> bool {
        self.get(Self::FORMAT_ON_SAVE, true)
    }

    pub fn remove_completed_on_save(&self) -> bool {
        self.get(Self::REMOVE_COMPLETED_ON_SAVE, false)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for HostSettings {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
