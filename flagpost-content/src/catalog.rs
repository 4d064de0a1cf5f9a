//! Content Catalog
//!
//! Read-only entries and flag mappings, indexed by id and flag key.

use crate::entry::ContentEntry;
use crate::error::{ContentError, Result};
use crate::mapping::FlagMapping;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    entries: Vec<ContentEntry>,
    entry_index: HashMap<String, usize>,
    mappings: Vec<FlagMapping>,
    mapping_index: HashMap<String, usize>,
}

impl ContentCatalog {
    /// Build a catalog, rejecting duplicate entry ids and duplicate mappings.
    ///
    /// Mappings that point at missing entries are accepted; see
    /// [`ContentCatalog::dangling_references`].
    pub fn new(entries: Vec<ContentEntry>, mappings: Vec<FlagMapping>) -> Result<Self> {
        let mut entry_index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(ContentError::EmptyEntryId);
            }
            if entry_index.insert(entry.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateEntry(entry.id.clone()));
            }
        }

        let mut mapping_index = HashMap::with_capacity(mappings.len());
        for (position, mapping) in mappings.iter().enumerate() {
            if mapping_index
                .insert(mapping.flag_key.clone(), position)
                .is_some()
            {
                return Err(ContentError::DuplicateMapping(mapping.flag_key.clone()));
            }
        }

        Ok(Self {
            entries,
            entry_index,
            mappings,
            mapping_index,
        })
    }

    pub fn entry(&self, id: &str) -> Option<&ContentEntry> {
        self.entry_index.get(id).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn mapping(&self, flag_key: &str) -> Option<&FlagMapping> {
        self.mapping_index
            .get(flag_key)
            .map(|&position| &self.mappings[position])
    }

    pub fn mappings(&self) -> &[FlagMapping] {
        &self.mappings
    }

    /// `(flag key, entry id)` pairs whose entry id is not in the catalog.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let known = &self.entry_index;
        let mut dangling: Vec<_> = self
            .mappings
            .iter()
            .flat_map(move |mapping| {
                mapping
                    .entry_ids()
                    .filter(move |id| !known.contains_key(*id))
                    .map(move |id| (mapping.flag_key.as_str(), id))
            })
            .collect();
        dangling.sort_unstable();
        dangling.dedup();
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = ContentCatalog::new(
            vec![ContentEntry::new("a").with_title("A"), ContentEntry::new("b")],
            vec![FlagMapping::new("flag").with_index(0, "a")],
        )
        .unwrap();

        assert_eq!(catalog.entry("a").unwrap().title(), Some("A"));
        assert!(catalog.entry("c").is_none());
        assert_eq!(catalog.mapping("flag").unwrap().entry_id_for(0, None), Some("a"));
        assert!(catalog.dangling_references().is_empty());
    }

    #[test]
    fn test_duplicates_rejected() {
        assert!(matches!(
            ContentCatalog::new(vec![ContentEntry::new("a"), ContentEntry::new("a")], vec![]),
            Err(ContentError::DuplicateEntry(id)) if id == "a"
        ));
        assert!(matches!(
            ContentCatalog::new(vec![], vec![FlagMapping::new("f"), FlagMapping::new("f")]),
            Err(ContentError::DuplicateMapping(key)) if key == "f"
        ));
        assert!(matches!(
            ContentCatalog::new(vec![ContentEntry::new("")], vec![]),
            Err(ContentError::EmptyEntryId)
        ));
    }

    #[test]
    fn test_dangling_references() {
        let catalog = ContentCatalog::new(
            vec![ContentEntry::new("present")],
            vec![
                FlagMapping::new("flag")
                    .with_variation(0, "control", "present")
                    .with_variation(1, "treatment", "missing"),
            ],
        )
        .unwrap();

        assert_eq!(catalog.dangling_references(), vec![("flag", "missing")]);
    }
}
