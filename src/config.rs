use crate::common::ConfigError;
use crate::game::RoundEngine;
use crate::item::{Item, ItemPool};

/// Options presented by the sampled variants.
pub const CHOICE_ARITY: usize = 4;
pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 5;
/// Glyph repeated to show a quantity.
pub const COUNT_GLYPH: &str = "🍎";

pub const COLORS: [Item; 6] = [
    Item::named("Red", "🔴").with_swatch("#ef4444"),
    Item::named("Blue", "🔵").with_swatch("#3b82f6"),
    Item::named("Yellow", "🟡").with_swatch("#f59e0b"),
    Item::named("Green", "🟢").with_swatch("#22c55e"),
    Item::named("Purple", "🟣").with_swatch("#8b5cf6"),
    Item::named("Orange", "🟠").with_swatch("#f97316"),
];

pub const SHAPES: [Item; 6] = [
    Item::named("Circle", "⚪"),
    Item::named("Square", "🟦"),
    Item::named("Triangle", "🔺"),
    Item::named("Heart", "❤️"),
    Item::named("Star", "⭐"),
    Item::named("Diamond", "🔶"),
];

/// The three mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Variant {
    Colors,
    Counting,
    Shapes,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Colors, Variant::Counting, Variant::Shapes];

    /// Lowercase identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Colors => "colors",
            Variant::Counting => "counting",
            Variant::Shapes => "shapes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Colors => "Tap the Color",
            Variant::Counting => "Count the Apples",
            Variant::Shapes => "Match the Shape",
        }
    }

    /// Number of options shown per round. Counting always shows every quantity.
    pub fn arity(self) -> usize {
        match self {
            Variant::Colors | Variant::Shapes => CHOICE_ARITY,
            Variant::Counting => usize::from(COUNT_MAX - COUNT_MIN) + 1,
        }
    }

    pub fn pool(self) -> Result<ItemPool, ConfigError> {
        match self {
            Variant::Colors => ItemPool::from_slice(&COLORS),
            Variant::Counting => ItemPool::counting(COUNT_MIN, COUNT_MAX),
            Variant::Shapes => ItemPool::from_slice(&SHAPES),
        }
    }

    /// Engine configured for this variant.
    pub fn engine(self) -> Result<RoundEngine, ConfigError> {
        RoundEngine::new(self.pool()?, self.arity())
    }
}
