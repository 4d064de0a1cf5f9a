//! Flag Catalog
//!
//! Validated, read-only collection of flags in declaration order.

use crate::error::{FlagError, Result};
use crate::flag::Flag;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FlagCatalog {
    flags: Vec<Flag>,
    index: HashMap<String, usize>,
}

impl FlagCatalog {
    /// Build a catalog, validating every flag and rejecting duplicate keys.
    pub fn new(flags: Vec<Flag>) -> Result<Self> {
        let mut index = HashMap::with_capacity(flags.len());

        for (position, flag) in flags.iter().enumerate() {
            if flag.key.is_empty() {
                return Err(FlagError::EmptyKey);
            }
            flag.validate()?;

            if index.insert(flag.key.clone(), position).is_some() {
                return Err(FlagError::DuplicateKey(flag.key.clone()));
            }
        }

        Ok(Self { flags, index })
    }

    pub fn get(&self, key: &str) -> Option<&Flag> {
        self.index.get(key).map(|&position| &self.flags[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::Variation;

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = FlagCatalog::new(vec![
            Flag::boolean("b-flag", "B"),
            Flag::boolean("a-flag", "A"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.flags()[0].key, "b-flag");
        assert_eq!(catalog.get("a-flag").unwrap().name, "A");
        assert!(catalog.get("c-flag").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = FlagCatalog::new(vec![
            Flag::boolean("hero", "Hero"),
            Flag::new("hero", "Hero again", vec![Variation::string("only", "x")]),
        ]);

        assert!(matches!(result, Err(FlagError::DuplicateKey(key)) if key == "hero"));
    }

    #[test]
    fn test_invalid_flag_rejected() {
        assert!(matches!(
            FlagCatalog::new(vec![Flag::new("empty", "Empty", Vec::new())]),
            Err(FlagError::NoVariations(_))
        ));
        assert!(matches!(
            FlagCatalog::new(vec![Flag::boolean("", "Nameless")]),
            Err(FlagError::EmptyKey)
        ));
    }
}
