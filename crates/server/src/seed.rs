//! Development seed data: a small sample of SRD equipment with English
//! and French display text, enough to exercise every endpoint and
//! filter.

use grimoire_domain::{ContentKey, DiceNotation, DomainError, LanguageCode, ObjectProfile, Rarity, Size};
use sqlx::SqlitePool;
use thiserror::Error;

/// Error while seeding reference data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed data failed validation: {0}")]
    Domain(#[from] DomainError),

    #[error("seed insert failed: {0}")]
    Database(#[from] sqlx::Error),
}

struct ItemSeed {
    key: &'static str,
    document: &'static str,
    category: &'static str,
    cost: f64,
    rarity: Option<Rarity>,
    requires_attunement: bool,
    size: Size,
    weight: f64,
    armor_class: i32,
    hit_points: i32,
    /// (lang, name, desc) rows for `item_text`.
    text: &'static [(&'static str, &'static str, &'static str)],
}

struct WeaponSeed {
    key: &'static str,
    document: &'static str,
    damage_type: &'static str,
    damage_dice: &'static str,
    versatile_dice: Option<&'static str>,
    range_reach: i32,
    range_normal: i32,
    range_long: i32,
    properties: &'static [&'static str],
    text: &'static [(&'static str, &'static str)],
}

struct ArmorSeed {
    key: &'static str,
    document: &'static str,
    grants_stealth_disadvantage: bool,
    strength_score_required: Option<i32>,
    ac_base: i32,
    ac_add_dexmod: bool,
    ac_cap_dexmod: Option<i32>,
    text: &'static [(&'static str, &'static str)],
}

/// Seed the database with sample reference data. Idempotent: a database
/// that already has documents is left alone.
pub async fn seed(pool: &SqlitePool) -> Result<(), SeedError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM document")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    tracing::info!("Seeding database with sample reference data");

    seed_provenance(pool).await?;
    seed_items(pool).await?;
    seed_weapons(pool).await?;
    seed_armor(pool).await?;
    seed_item_sets(pool).await?;

    Ok(())
}

async fn seed_provenance(pool: &SqlitePool) -> Result<(), SeedError> {
    for (key, name, url) in [
        (
            "wizards-of-the-coast",
            "Wizards of the Coast",
            Some("https://company.wizards.com"),
        ),
        ("kobold-press", "Kobold Press", Some("https://koboldpress.com")),
    ] {
        ContentKey::new(key).map_err(DomainError::from)?;
        sqlx::query("INSERT INTO publisher (key, name, url) VALUES ($1, $2, $3)")
            .bind(key)
            .bind(name)
            .bind(url)
            .execute(pool)
            .await?;
    }

    for (key, name, url) in [
        (
            "cc-by-4-0",
            "Creative Commons Attribution 4.0",
            Some("https://creativecommons.org/licenses/by/4.0/"),
        ),
        ("ogl-1-0a", "Open Game License 1.0a", None),
    ] {
        ContentKey::new(key).map_err(DomainError::from)?;
        sqlx::query("INSERT INTO license (key, name, url) VALUES ($1, $2, $3)")
            .bind(key)
            .bind(name)
            .bind(url)
            .execute(pool)
            .await?;
    }

    ContentKey::new("o5e-2014").map_err(DomainError::from)?;
    sqlx::query(
        "INSERT INTO ruleset (key, name, description, content_prefix) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind("o5e-2014")
    .bind("Open 5th Edition (2014)")
    .bind("The 2014 fifth-edition open rules.")
    .bind(None::<String>)
    .execute(pool)
    .await?;

    for (key, name, author, publisher, permalink) in [
        (
            "srd-2014",
            "Systems Reference Document 5.1",
            "Wizards of the Coast",
            "wizards-of-the-coast",
            Some("https://dnd.wizards.com/resources/systems-reference-document"),
        ),
        (
            "vault-of-magic",
            "Vault of Magic",
            "Kobold Press",
            "kobold-press",
            None,
        ),
    ] {
        ContentKey::new(key).map_err(DomainError::from)?;
        sqlx::query(
            "INSERT INTO document \
             (key, name, description, author, published_at, permalink, \
              publisher_key, ruleset_key, license_key) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(key)
        .bind(name)
        .bind(format!("{} reference content.", name))
        .bind(author)
        .bind(None::<String>)
        .bind(permalink)
        .bind(publisher)
        .bind("o5e-2014")
        .bind("cc-by-4-0")
        .execute(pool)
        .await?;
    }

    Ok(())
}

const ITEMS: &[ItemSeed] = &[
    ItemSeed {
        key: "longsword",
        document: "srd-2014",
        category: "weapon",
        cost: 15.0,
        rarity: None,
        requires_attunement: false,
        size: Size::Small,
        weight: 3.0,
        armor_class: 19,
        hit_points: 10,
        text: &[
            ("en", "Longsword", "A versatile martial blade."),
            ("fr", "Épée longue", "Une lame de guerre polyvalente."),
        ],
    },
    ItemSeed {
        key: "chain-mail",
        document: "srd-2014",
        category: "armor",
        cost: 75.0,
        rarity: None,
        requires_attunement: false,
        size: Size::Medium,
        weight: 55.0,
        armor_class: 19,
        hit_points: 30,
        text: &[("en", "Chain Mail", "Interlocking metal rings over padding.")],
    },
    ItemSeed {
        key: "potion-of-healing",
        document: "srd-2014",
        category: "potion",
        cost: 50.0,
        rarity: Some(Rarity::Common),
        requires_attunement: false,
        size: Size::Tiny,
        weight: 0.5,
        armor_class: 5,
        hit_points: 1,
        text: &[
            (
                "en",
                "Potion of Healing",
                "A red fluid that restores 2d4+2 hit points when drunk.",
            ),
            (
                "fr",
                "Potion de soins",
                "Un liquide rouge qui rend 2d4+2 points de vie.",
            ),
        ],
    },
    ItemSeed {
        key: "bag-of-holding",
        document: "srd-2014",
        category: "wondrous-item",
        cost: 4000.0,
        rarity: Some(Rarity::Uncommon),
        requires_attunement: false,
        size: Size::Small,
        weight: 15.0,
        armor_class: 8,
        hit_points: 5,
        text: &[(
            "en",
            "Bag of Holding",
            "Opens into an extradimensional space holding 500 pounds.",
        )],
    },
    ItemSeed {
        key: "flame-tongue",
        document: "vault-of-magic",
        category: "weapon",
        cost: 20000.0,
        rarity: Some(Rarity::Rare),
        requires_attunement: true,
        size: Size::Small,
        weight: 3.0,
        armor_class: 19,
        hit_points: 10,
        text: &[(
            "en",
            "Flame Tongue",
            "A sword wreathed in fire while its command word lasts.",
        )],
    },
];

async fn seed_items(pool: &SqlitePool) -> Result<(), SeedError> {
    for item in ITEMS {
        let key = ContentKey::new(item.key).map_err(DomainError::from)?;
        let profile =
            ObjectProfile::new(item.size, item.weight, item.armor_class, item.hit_points)
                .map_err(DomainError::from)?;

        sqlx::query(
            "INSERT INTO item \
             (key, document_key, category, cost, rarity, requires_attunement, \
              size, weight, armor_class, hit_points) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(key.as_str())
        .bind(item.document)
        .bind(item.category)
        .bind(item.cost)
        .bind(item.rarity.map(|r| r.as_str()))
        .bind(item.requires_attunement)
        .bind(profile.size.rank())
        .bind(profile.weight)
        .bind(profile.armor_class)
        .bind(profile.hit_points)
        .execute(pool)
        .await?;

        for &(lang, name, desc) in item.text {
            let lang = LanguageCode::new(lang).map_err(DomainError::from)?;
            sqlx::query(
                "INSERT INTO item_text (key, item_key, lang, name, description) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(format!("{}--{}", key, lang))
            .bind(key.as_str())
            .bind(lang.as_str())
            .bind(name)
            .bind(desc)
            .execute(pool)
            .await?;
        }
    }

    Ok(())
}

const WEAPONS: &[WeaponSeed] = &[
    WeaponSeed {
        key: "longsword",
        document: "srd-2014",
        damage_type: "slashing",
        damage_dice: "1d8",
        versatile_dice: Some("1d10"),
        range_reach: 5,
        range_normal: 0,
        range_long: 0,
        properties: &[],
        text: &[("en", "Longsword"), ("fr", "Épée longue")],
    },
    WeaponSeed {
        key: "dagger",
        document: "srd-2014",
        damage_type: "piercing",
        damage_dice: "1d4",
        versatile_dice: None,
        range_reach: 5,
        range_normal: 20,
        range_long: 60,
        properties: &["is_finesse", "is_thrown", "is_light", "is_simple"],
        text: &[("en", "Dagger")],
    },
    WeaponSeed {
        key: "longbow",
        document: "srd-2014",
        damage_type: "piercing",
        damage_dice: "1d8",
        versatile_dice: None,
        range_reach: 0,
        range_normal: 150,
        range_long: 600,
        properties: &["is_two_handed", "requires_ammunition", "is_heavy"],
        text: &[("en", "Longbow")],
    },
    WeaponSeed {
        key: "net",
        document: "srd-2014",
        damage_type: "bludgeoning",
        damage_dice: "1d2",
        versatile_dice: None,
        range_reach: 0,
        range_normal: 5,
        range_long: 15,
        properties: &["is_thrown", "is_net"],
        text: &[("en", "Net")],
    },
];

async fn seed_weapons(pool: &SqlitePool) -> Result<(), SeedError> {
    for weapon in WEAPONS {
        let key = ContentKey::new(weapon.key).map_err(DomainError::from)?;
        DiceNotation::parse(weapon.damage_dice).map_err(DomainError::from)?;
        if let Some(dice) = weapon.versatile_dice {
            DiceNotation::parse(dice).map_err(DomainError::from)?;
        }

        let flag = |name: &str| weapon.properties.contains(&name);

        sqlx::query(
            "INSERT INTO weapon \
             (key, document_key, damage_type, damage_dice, versatile_dice, \
              range_reach, range_normal, range_long, \
              is_finesse, is_thrown, is_two_handed, requires_ammunition, \
              requires_loading, is_heavy, is_light, is_lance, is_net, \
              is_simple, is_improvised) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                     $13, $14, $15, $16, $17, $18, $19)",
        )
        .bind(key.as_str())
        .bind(weapon.document)
        .bind(weapon.damage_type)
        .bind(weapon.damage_dice)
        .bind(weapon.versatile_dice)
        .bind(weapon.range_reach)
        .bind(weapon.range_normal)
        .bind(weapon.range_long)
        .bind(flag("is_finesse"))
        .bind(flag("is_thrown"))
        .bind(flag("is_two_handed"))
        .bind(flag("requires_ammunition"))
        .bind(flag("requires_loading"))
        .bind(flag("is_heavy"))
        .bind(flag("is_light"))
        .bind(flag("is_lance"))
        .bind(flag("is_net"))
        .bind(flag("is_simple"))
        .bind(flag("is_improvised"))
        .execute(pool)
        .await?;

        for &(lang, name) in weapon.text {
            let lang = LanguageCode::new(lang).map_err(DomainError::from)?;
            sqlx::query(
                "INSERT INTO weapon_text (key, weapon_key, lang, name) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(format!("{}--{}", key, lang))
            .bind(key.as_str())
            .bind(lang.as_str())
            .bind(name)
            .execute(pool)
            .await?;
        }
    }

    Ok(())
}

const ARMOR: &[ArmorSeed] = &[
    ArmorSeed {
        key: "padded",
        document: "srd-2014",
        grants_stealth_disadvantage: true,
        strength_score_required: None,
        ac_base: 11,
        ac_add_dexmod: true,
        ac_cap_dexmod: None,
        text: &[("en", "Padded")],
    },
    ArmorSeed {
        key: "leather",
        document: "srd-2014",
        grants_stealth_disadvantage: false,
        strength_score_required: None,
        ac_base: 11,
        ac_add_dexmod: true,
        ac_cap_dexmod: None,
        text: &[("en", "Leather"), ("fr", "Armure de cuir")],
    },
    ArmorSeed {
        key: "half-plate",
        document: "srd-2014",
        grants_stealth_disadvantage: true,
        strength_score_required: None,
        ac_base: 15,
        ac_add_dexmod: true,
        ac_cap_dexmod: Some(2),
        text: &[("en", "Half Plate")],
    },
    ArmorSeed {
        key: "chain-mail",
        document: "srd-2014",
        grants_stealth_disadvantage: true,
        strength_score_required: Some(13),
        ac_base: 16,
        ac_add_dexmod: false,
        ac_cap_dexmod: None,
        text: &[("en", "Chain Mail")],
    },
];

async fn seed_armor(pool: &SqlitePool) -> Result<(), SeedError> {
    for armor in ARMOR {
        let key = ContentKey::new(armor.key).map_err(DomainError::from)?;

        sqlx::query(
            "INSERT INTO armor \
             (key, document_key, grants_stealth_disadvantage, \
              strength_score_required, ac_base, ac_add_dexmod, ac_cap_dexmod) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(key.as_str())
        .bind(armor.document)
        .bind(armor.grants_stealth_disadvantage)
        .bind(armor.strength_score_required)
        .bind(armor.ac_base)
        .bind(armor.ac_add_dexmod)
        .bind(armor.ac_cap_dexmod)
        .execute(pool)
        .await?;

        for &(lang, name) in armor.text {
            let lang = LanguageCode::new(lang).map_err(DomainError::from)?;
            sqlx::query(
                "INSERT INTO armor_text (key, armor_key, lang, name) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(format!("{}--{}", key, lang))
            .bind(key.as_str())
            .bind(lang.as_str())
            .bind(name)
            .execute(pool)
            .await?;
        }
    }

    Ok(())
}

async fn seed_item_sets(pool: &SqlitePool) -> Result<(), SeedError> {
    let key = ContentKey::new("adventurers-kit").map_err(DomainError::from)?;
    sqlx::query(
        "INSERT INTO item_set (key, document_key, name, description) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(key.as_str())
    .bind("srd-2014")
    .bind("Adventurer's Kit")
    .bind("Starter equipment for a first expedition.")
    .execute(pool)
    .await?;

    for item_key in ["longsword", "chain-mail", "potion-of-healing"] {
        sqlx::query("INSERT INTO item_set_member (item_set_key, item_key) VALUES ($1, $2)")
            .bind(key.as_str())
            .bind(item_key)
            .execute(pool)
            .await?;
    }

    Ok(())
}
