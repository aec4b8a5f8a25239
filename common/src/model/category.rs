use serde::{Deserialize, Serialize};

/// A project category as served by `GET /api/categories`.
/// Read-only reference data; the wizard only stores the selected `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}
