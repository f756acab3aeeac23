use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::Config;

/// Connect and make sure the reference schema exists.
pub async fn create_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Create the schema. Content rows are keyed by slug; display text for
/// items, weapons and armor lives in sibling `*_text` tables keyed by
/// parent and language.
async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS publisher (
            key TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS license (
            key TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ruleset (
            key TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            content_prefix TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS document (
            key TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            author TEXT,
            published_at TEXT,
            permalink TEXT,
            publisher_key TEXT NOT NULL REFERENCES publisher(key),
            ruleset_key TEXT NOT NULL REFERENCES ruleset(key),
            license_key TEXT NOT NULL REFERENCES license(key)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item (
            key TEXT PRIMARY KEY,
            document_key TEXT NOT NULL REFERENCES document(key),
            category TEXT NOT NULL,
            cost REAL NOT NULL DEFAULT 0,
            rarity TEXT,
            requires_attunement INTEGER NOT NULL DEFAULT 0,
            size INTEGER NOT NULL DEFAULT 1,
            weight REAL NOT NULL DEFAULT 0,
            armor_class INTEGER NOT NULL DEFAULT 0,
            hit_points INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item_text (
            key TEXT PRIMARY KEY,
            item_key TEXT NOT NULL REFERENCES item(key),
            lang TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            UNIQUE(item_key, lang)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item_set (
            key TEXT PRIMARY KEY,
            document_key TEXT NOT NULL REFERENCES document(key),
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item_set_member (
            item_set_key TEXT NOT NULL REFERENCES item_set(key),
            item_key TEXT NOT NULL REFERENCES item(key),
            PRIMARY KEY (item_set_key, item_key)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weapon (
            key TEXT PRIMARY KEY,
            document_key TEXT NOT NULL REFERENCES document(key),
            damage_type TEXT NOT NULL,
            damage_dice TEXT NOT NULL,
            versatile_dice TEXT,
            range_reach INTEGER NOT NULL DEFAULT 5,
            range_normal INTEGER NOT NULL DEFAULT 0,
            range_long INTEGER NOT NULL DEFAULT 0,
            is_finesse INTEGER NOT NULL DEFAULT 0,
            is_thrown INTEGER NOT NULL DEFAULT 0,
            is_two_handed INTEGER NOT NULL DEFAULT 0,
            requires_ammunition INTEGER NOT NULL DEFAULT 0,
            requires_loading INTEGER NOT NULL DEFAULT 0,
            is_heavy INTEGER NOT NULL DEFAULT 0,
            is_light INTEGER NOT NULL DEFAULT 0,
            is_lance INTEGER NOT NULL DEFAULT 0,
            is_net INTEGER NOT NULL DEFAULT 0,
            is_simple INTEGER NOT NULL DEFAULT 0,
            is_improvised INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weapon_text (
            key TEXT PRIMARY KEY,
            weapon_key TEXT NOT NULL REFERENCES weapon(key),
            lang TEXT NOT NULL,
            name TEXT NOT NULL,
            UNIQUE(weapon_key, lang)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS armor (
            key TEXT PRIMARY KEY,
            document_key TEXT NOT NULL REFERENCES document(key),
            grants_stealth_disadvantage INTEGER NOT NULL DEFAULT 0,
            strength_score_required INTEGER,
            ac_base INTEGER NOT NULL DEFAULT 10,
            ac_add_dexmod INTEGER NOT NULL DEFAULT 0,
            ac_cap_dexmod INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS armor_text (
            key TEXT PRIMARY KEY,
            armor_key TEXT NOT NULL REFERENCES armor(key),
            lang TEXT NOT NULL,
            name TEXT NOT NULL,
            UNIQUE(armor_key, lang)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
