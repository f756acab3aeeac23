use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    Armor, Document, Item, ItemSet, License, Page, Publisher, Ruleset, Weapon,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grimoire API",
        description = "Read-only reference data for tabletop RPGs",
        version = "2.0.0"
    ),
    paths(
        handlers::items::list_items,
        handlers::items::get_item,
        handlers::item_sets::list_item_sets,
        handlers::item_sets::get_item_set,
        handlers::weapons::list_weapons,
        handlers::weapons::get_weapon,
        handlers::armor::list_armor,
        handlers::armor::get_armor,
        handlers::documents::list_documents,
        handlers::documents::get_document,
        handlers::publishers::list_publishers,
        handlers::publishers::get_publisher,
        handlers::licenses::list_licenses,
        handlers::licenses::get_license,
        handlers::rulesets::list_rulesets,
        handlers::rulesets::get_ruleset,
    ),
    tags(
        (name = "items", description = "Equipment and magic items"),
        (name = "itemsets", description = "Named groupings of items"),
        (name = "weapons", description = "Weapon statistics"),
        (name = "armor", description = "Armor statistics"),
        (name = "documents", description = "Source publications"),
        (name = "publishers", description = "Document publishers"),
        (name = "licenses", description = "Content licenses"),
        (name = "rulesets", description = "Game systems")
    ),
    components(schemas(
        Item,
        ItemSet,
        Weapon,
        Armor,
        Document,
        Publisher,
        License,
        Ruleset,
        Page<Item>,
        Page<ItemSet>,
        Page<Weapon>,
        Page<Armor>,
        Page<Document>,
        Page<Publisher>,
        Page<License>,
        Page<Ruleset>
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for path in [
            "/v2/items",
            "/v2/items/{key}",
            "/v2/itemsets",
            "/v2/weapons",
            "/v2/armor",
            "/v2/documents",
            "/v2/publishers",
            "/v2/licenses",
            "/v2/rulesets",
        ] {
            assert!(paths.iter().any(|p| p == path), "missing {}", path);
        }
    }
}
