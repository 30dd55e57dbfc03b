use serde::{Deserialize, Serialize};

/// One physical breaker instance, or the catalog entry it was cut from.
///
/// `height` is charged against a column's capacity; `width` only affects
/// horizontal placement when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDescriptor {
    pub name: String,
    pub height: u32,
    pub width: u32,
}

impl UnitDescriptor {
    pub fn new(name: impl Into<String>, height: u32, width: u32) -> Self {
        Self {
            name: name.into(),
            height,
            width,
        }
    }
}

/// Ordered, read-only list of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitCatalog {
    entries: Vec<UnitDescriptor>,
}

impl UnitCatalog {
    pub fn new(entries: Vec<UnitDescriptor>) -> Self {
        Self { entries }
    }

    /// The switchboard breaker table the estimator ships with.
    pub fn breakers() -> Self {
        Self::new(vec![
            UnitDescriptor::new("bus-coupler", 1800, 80),
            UnitDescriptor::new("incoming-feeder", 1800, 80),
            UnitDescriptor::new("outgoing-feeder", 1800, 80),
            UnitDescriptor::new("mmcb-100", 200, 60),
            UnitDescriptor::new("mmcb-250", 200, 60),
            UnitDescriptor::new("mmcb-400", 400, 60),
            UnitDescriptor::new("mmcb-630", 630, 60),
            UnitDescriptor::new("mmcb-900", 900, 60),
            UnitDescriptor::new("mmcb-1200", 1800, 80),
            UnitDescriptor::new("mmcb-1600", 1800, 80),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UnitDescriptor> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitDescriptor> {
        self.entries.iter()
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::breakers()
    }
}

impl<'a> IntoIterator for &'a UnitCatalog {
    type Item = &'a UnitDescriptor;
    type IntoIter = std::slice::Iter<'a, UnitDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
