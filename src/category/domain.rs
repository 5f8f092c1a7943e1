//! Core category domain types.

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A named grouping of questions (e.g., 'Science', 'History').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Hash)]
pub struct Category {
    /// The category's ID in the application database.
    pub id: CategoryId,
    /// The display name of the category, sent to clients as `type`.
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Categories serialized as a JSON object that maps each ID to its type.
///
/// Entries are written in the order of the wrapped list, which lets clients
/// display categories sorted by type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap(pub Vec<Category>);

impl Serialize for CategoryMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for category in &self.0 {
            map.serialize_entry(&category.id, &category.category_type)?;
        }

        map.end()
    }
}
