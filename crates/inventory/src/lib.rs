//! Inventory domain module.
//!
//! This crate contains the daily aging rules for the shop's stock, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;
pub mod quality;
pub mod rules;

pub use category::ItemCategory;
pub use inventory::Inventory;
pub use item::{Item, ItemRecord};
pub use quality::Quality;
