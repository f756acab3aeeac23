use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// List envelope: total number of matching rows plus one page of them.
///
/// `count` reflects the whole filtered set, not the page, so clients can
/// derive next/previous offsets themselves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub count: i64,
    pub results: Vec<T>,
}
