use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;
use crate::quality::Quality;
use crate::rules;

/// Wire shape of an item: the `(name, sell_in, quality)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// A shop item. The category is fixed at construction from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: Quality,
    category: ItemCategory,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            sell_in,
            quality: Quality::new(quality),
            category,
        }
    }

    /// Like `new`, but rejects starting values no daily update could produce.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);

        if item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if item.category.is_legendary() {
            if quality != Quality::LEGENDARY {
                return Err(DomainError::validation(format!(
                    "legendary item {:?} must have quality {}, got {quality}",
                    item.name,
                    Quality::LEGENDARY
                )));
            }
        } else if !item.quality.is_within_bounds() {
            return Err(DomainError::validation(format!(
                "quality of {:?} must be within {}..={}, got {quality}",
                item.name,
                Quality::MIN,
                Quality::MAX
            )));
        }

        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Age the item by one day in place.
    pub fn advance_one_day(&mut self) {
        let (sell_in, quality) = rules::next_state(self.category, self.sell_in, self.quality);
        self.sell_in = sell_in;
        self.quality = quality;
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality.value(),
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_derived_from_name() {
        assert_eq!(Item::new("Aged Brie", 2, 0).category(), ItemCategory::AgedBrie);
        assert_eq!(
            Item::new("Elixir of the Mongoose", 5, 7).category(),
            ItemCategory::Normal
        );
    }

    #[test]
    fn advance_one_day_mutates_in_place() {
        let mut item = Item::new("+5 Dexterity Vest", 10, 20);
        item.advance_one_day();
        assert_eq!((item.sell_in(), item.quality()), (9, 19));
        assert_eq!(item.name(), "+5 Dexterity Vest");
    }

    #[test]
    fn try_new_rejects_blank_name() {
        let err = Item::try_new("   ", 1, 1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn try_new_rejects_out_of_range_quality() {
        assert!(Item::try_new("Aged Brie", 3, 51).is_err());
        assert!(Item::try_new("Elixir of the Mongoose", 3, -1).is_err());
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 50).is_err());
    }

    #[test]
    fn try_new_accepts_well_formed_items() {
        let item = Item::try_new("Sulfuras, Hand of Ragnaros", 0, 80).unwrap();
        assert!(item.category().is_legendary());

        let item = Item::try_new("Conjured Mana Cake", 3, 6).unwrap();
        assert_eq!(item.quality(), 6);
    }

    #[test]
    fn display_lists_name_sell_in_quality() {
        let item = Item::new("Aged Brie", -1, 12);
        assert_eq!(item.to_string(), "Aged Brie, -1, 12");
    }

    #[test]
    fn serializes_as_record_and_recomputes_category() {
        let item = Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Backstage passes to a TAFKAL80ETC concert",
                "sell_in": 15,
                "quality": 20
            })
        );

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), ItemCategory::BackstagePass);
        assert_eq!(back, item);
    }
}
