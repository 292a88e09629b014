use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::activity::ActivityRecord;

/// Activity name -> record, kept in insertion order.
///
/// Names are exact, case-sensitive keys. Serializes as a JSON object whose
/// keys appear in the order activities were added, so listings follow the
/// seed order. Lookups are linear; a school roster is a handful of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, ActivityRecord)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced entry keeps its original position.
    pub fn insert(&mut self, name: String, record: ActivityRecord) -> Option<ActivityRecord> {
        match self.get_mut(&name) {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.entries.push((name, record));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityRecord> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<ActivityRecord> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.entries.iter().map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityRecord)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }
}

impl Index<&str> for Roster {
    type Output = ActivityRecord;

    fn index(&self, name: &str) -> &ActivityRecord {
        match self.get(name) {
            Some(rec) => rec,
            None => panic!("no activity named {name:?}"),
        }
    }
}

impl IntoIterator for Roster {
    type Item = (String, ActivityRecord);
    type IntoIter = std::vec::IntoIter<(String, ActivityRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, rec) in &self.entries {
            map.serialize_entry(name, rec)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(desc: &str) -> ActivityRecord {
        ActivityRecord::new(desc, "s", 5, ["a@x"]).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut roster = Roster::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            assert!(roster.insert(name.into(), rec(name)).is_none());
        }
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);

        let json = serde_json::to_string(&roster).unwrap();
        let z = json.find("\"Zeta\"").unwrap();
        let a = json.find("\"Alpha\"").unwrap();
        let m = json.find("\"Mid\"").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn replace_keeps_position_and_remove_keeps_rest() {
        let mut roster = Roster::new();
        roster.insert("A".into(), rec("first"));
        roster.insert("B".into(), rec("b"));
        let old = roster.insert("A".into(), rec("second"));
        assert_eq!(old.map(|r| r.description), Some("first".to_string()));
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(roster["A"].description, "second");

        assert!(roster.remove("A").is_some());
        assert!(roster.remove("A").is_none());
        assert_eq!(roster.len(), 1);
        assert!(roster.contains_key("B"));
    }

    #[test]
    fn lookups_are_exact() {
        let mut roster = Roster::new();
        roster.insert("Chess Club".into(), rec("c"));
        assert!(roster.get("chess club").is_none());
        assert!(roster.get("Chess Club ").is_none());
        assert!(roster.get("Chess Club").is_some());
    }
}
