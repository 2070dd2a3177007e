use tracing::{debug, trace};

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::quality::Quality;

/// The shop's stock, aged one day at a time.
///
/// Owns its items exclusively and keeps them in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    days_elapsed: u32,
}

impl Inventory {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
            days_elapsed: 0,
        }
    }

    /// Build from raw `(name, sell_in, quality)` triples.
    pub fn from_records<N: Into<String>>(
        records: impl IntoIterator<Item = (N, i32, i32)>,
    ) -> Self {
        Self::new(
            records
                .into_iter()
                .map(|(name, sell_in, quality)| Item::new(name, sell_in, quality)),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Age every item by one day.
    pub fn advance_one_day(&mut self) {
        for item in &mut self.items {
            let before = (item.sell_in(), item.quality());
            item.advance_one_day();
            trace!(
                name = item.name(),
                category = item.category().as_str(),
                sell_in.before = before.0,
                quality.before = before.1,
                sell_in.after = item.sell_in(),
                quality.after = item.quality(),
                "item aged"
            );
        }

        self.days_elapsed = self.days_elapsed.saturating_add(1);
        debug!(day = self.days_elapsed, items = self.items.len(), "advanced inventory one day");
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    /// Verify the quality bounds hold for every item.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.category().is_legendary() {
                if item.quality() != Quality::LEGENDARY {
                    return Err(DomainError::invariant(format!(
                        "legendary item #{index} {:?} has quality {}, expected {}",
                        item.name(),
                        item.quality(),
                        Quality::LEGENDARY
                    )));
                }
            } else if !(Quality::MIN..=Quality::MAX).contains(&item.quality()) {
                return Err(DomainError::invariant(format!(
                    "item #{index} {:?} has quality {} outside {}..={}",
                    item.name(),
                    item.quality(),
                    Quality::MIN,
                    Quality::MAX
                )));
            }
        }
        Ok(())
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
