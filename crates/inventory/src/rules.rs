//! Per-category daily transition.
//!
//! `sell_in` is decremented first; "expired" means the decremented value is
//! below zero. So the accelerated rate kicks in on the day `sell_in` turns
//! negative, not the day it reaches zero.

use crate::category::ItemCategory;
use crate::quality::Quality;

/// Compute the `(sell_in, quality)` pair an item will have after one day.
pub fn next_state(category: ItemCategory, sell_in: i32, quality: Quality) -> (i32, Quality) {
    if category.is_legendary() {
        return (sell_in, quality);
    }

    let sell_in = sell_in.saturating_sub(1);
    let expired = sell_in < 0;

    let quality = match category {
        ItemCategory::Legendary => quality,
        ItemCategory::Normal => quality.adjusted(normal_delta(expired)),
        ItemCategory::Conjured => quality.adjusted(2 * normal_delta(expired)),
        ItemCategory::AgedBrie => quality.adjusted(if expired { 2 } else { 1 }),
        ItemCategory::BackstagePass => {
            if expired {
                Quality::zero()
            } else {
                quality.adjusted(backstage_pass_delta(sell_in))
            }
        }
    };

    (sell_in, quality)
}

fn normal_delta(expired: bool) -> i32 {
    if expired { -2 } else { -1 }
}

fn backstage_pass_delta(sell_in: i32) -> i32 {
    match sell_in {
        10.. => 1,
        5..=9 => 2,
        _ => 3,
    }
}
