pub mod armor;
pub mod document;
pub mod item;
pub mod item_set;
pub mod license;
pub mod publisher;
pub mod ruleset;
pub mod weapon;

pub use armor::ArmorRepository;
pub use document::DocumentRepository;
pub use item::ItemRepository;
pub use item_set::ItemSetRepository;
pub use license::LicenseRepository;
pub use publisher::PublisherRepository;
pub use ruleset::RulesetRepository;
pub use weapon::WeaponRepository;
