pub mod armor;
pub mod document;
pub mod item;
pub mod item_set;
pub mod page;
pub mod weapon;

pub use armor::{Armor, ArmorFilter, ArmorRow};
pub use document::{
    Document, DocumentFilter, License, LicenseFilter, Publisher, PublisherFilter, Ruleset,
    RulesetFilter,
};
pub use item::{Item, ItemFilter};
pub use item_set::{ItemSet, ItemSetFilter, ItemSetRow};
pub use page::Page;
pub use weapon::{Weapon, WeaponFilter};
