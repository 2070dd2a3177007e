use serde::{Deserialize, Serialize};

const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
const AGED_BRIE_NAME: &str = "Aged Brie";
const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
const CONJURED_PREFIX: &str = "Conjured";

/// Closed set of item categories, derived once from the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality with age.
    AgedBrie,
    /// Gains quality as the concert nears, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as a normal item.
    Conjured,
    Normal,
}

impl ItemCategory {
    /// Classify an item by name. Case-sensitive; unknown names are `Normal`.
    pub fn from_name(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            ItemCategory::Legendary
        } else if name == AGED_BRIE_NAME {
            ItemCategory::AgedBrie
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            ItemCategory::BackstagePass
        } else if name.starts_with(CONJURED_PREFIX) {
            ItemCategory::Conjured
        } else {
            ItemCategory::Normal
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemCategory::Legendary
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Legendary => "legendary",
            ItemCategory::AgedBrie => "aged_brie",
            ItemCategory::BackstagePass => "backstage_pass",
            ItemCategory::Conjured => "conjured",
            ItemCategory::Normal => "normal",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
