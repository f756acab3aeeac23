use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_key;
use crate::error::{AppError, AppResult};
use crate::filters::{PageParams, TextLookup};
use crate::models::{Document, DocumentFilter, Page};
use crate::repositories::DocumentRepository;
use crate::state::AppState;

/// Exact-match filter parameters for the document list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DocumentListQuery {
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub permalink: Option<String>,
    pub publisher__key: Option<String>,
    pub ruleset__key: Option<String>,
    pub license__key: Option<String>,
}

impl DocumentListQuery {
    fn into_filter(self) -> DocumentFilter {
        DocumentFilter {
            key: TextLookup::exact(self.key),
            name: TextLookup::exact(self.name),
            author: TextLookup::exact(self.author),
            permalink: TextLookup::exact(self.permalink),
            publisher_key: TextLookup::exact(self.publisher__key),
            ruleset_key: TextLookup::exact(self.ruleset__key),
            license_key: TextLookup::exact(self.license__key),
        }
    }
}

/// List documents.
#[utoipa::path(
    get,
    path = "/v2/documents",
    tag = "documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Filtered page of documents", body = Page<Document>)
    )
)]
pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentListQuery>,
) -> AppResult<Json<Page<Document>>> {
    let page = PageParams::new(query.limit, query.offset);
    let filter = query.into_filter();

    let documents = DocumentRepository::list(&state.db, &filter, &page).await?;
    Ok(Json(documents))
}

/// Get a particular document.
#[utoipa::path(
    get,
    path = "/v2/documents/{key}",
    tag = "documents",
    params(("key" = String, Path, description = "Document key")),
    responses(
        (status = 200, description = "The document", body = Document),
        (status = 404, description = "No document with that key")
    )
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Document>> {
    let key = parse_key(&key, "Document")?;

    let document = DocumentRepository::get_by_key(&state.db, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Document not found"))?;
    Ok(Json(document))
}
