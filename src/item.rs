//! Selectable items and the immutable pools they are drawn from.

use alloc::vec::Vec;
use core::fmt;

use crate::common::ConfigError;
use crate::config::COUNT_GLYPH;

/// Identity of an item. Two items are the same answer iff their keys match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(untagged))]
pub enum ItemKey {
    /// Named item such as a color or a shape.
    Name(&'static str),
    /// Counted quantity.
    Count(u8),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Name(name) => write!(f, "{}", name),
            ItemKey::Count(n) => write!(f, "{}", n),
        }
    }
}

/// One selectable thing: a key plus display payload the engine never looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    key: ItemKey,
    glyph: &'static str,
    swatch: Option<&'static str>,
}

impl Item {
    /// Create a named item drawn with `glyph`.
    pub const fn named(name: &'static str, glyph: &'static str) -> Self {
        Self {
            key: ItemKey::Name(name),
            glyph,
            swatch: None,
        }
    }

    /// Create a counted item for the quantity `n`.
    pub const fn number(n: u8) -> Self {
        Self {
            key: ItemKey::Count(n),
            glyph: COUNT_GLYPH,
            swatch: None,
        }
    }

    /// Attach a background swatch (e.g. `"#ef4444"`).
    pub const fn with_swatch(self, swatch: &'static str) -> Self {
        Self {
            swatch: Some(swatch),
            ..self
        }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    pub fn swatch(&self) -> Option<&'static str> {
        self.swatch
    }

    /// Whether `other` represents the same answer.
    pub fn same_key(&self, other: &Item) -> bool {
        self.key == other.key
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            ItemKey::Name(name) => write!(f, "{} {}", self.glyph, name),
            ItemKey::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Ordered, non-empty set of items with unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    /// Build a pool, rejecting empty input and repeated keys.
    pub fn new(items: Vec<Item>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|seen| seen.same_key(item)) {
                return Err(ConfigError::DuplicateKey(item.key()));
            }
        }
        Ok(Self { items })
    }

    /// Build a pool from a constant table such as [`crate::COLORS`].
    pub fn from_slice(items: &[Item]) -> Result<Self, ConfigError> {
        Self::new(items.to_vec())
    }

    /// Pool of the quantities `min..=max` in ascending order.
    pub fn counting(min: u8, max: u8) -> Result<Self, ConfigError> {
        Self::new((min..=max).map(Item::number).collect())
    }

    /// Items in canonical order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction refuses empty pools.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Look an item up by its key.
    pub fn find(&self, key: ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.find(key).is_some()
    }
}
