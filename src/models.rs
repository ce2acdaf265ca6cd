use serde::{Deserialize, Serialize};

use crate::search::normalize::normalize;

/// One land-record entry.
///
/// Raw fields come straight from the corpus CSV. The canonical keys are
/// derived once at load time and cached for the record's lifetime; scoring
/// runs against every record per query, so keys are never recomputed.
#[derive(Debug, Clone)]
pub struct Record {
    pub khata_number: String,
    pub khasra_number: String,
    pub area: String,
    pub district: String,
    pub owner_name: String,
    pub father_name: String,
    /// Filename of the scanned document, resolvable by the HTTP shell
    pub document: String,

    /// Canonical form of `owner_name`
    pub owner_key: String,
    /// Canonical form of `father_name`
    pub father_key: String,
    /// Canonical form of `document`
    pub document_key: String,
    /// `owner_key` + `father_key`, space-joined; compared in combined mode
    pub combined_key: String,
    /// `combined_key` + `document_key`; substring haystack for free-text mode
    pub full_key: String,
}

impl Record {
    /// Build a record from its raw fields, precomputing all canonical keys.
    pub fn new(
        khata_number: String,
        khasra_number: String,
        area: String,
        district: String,
        owner_name: String,
        father_name: String,
        document: String,
    ) -> Self {
        let owner_key = normalize(&owner_name);
        let father_key = normalize(&father_name);
        let document_key = normalize(&document);
        let combined_key = format!("{owner_key} {father_key}");
        let full_key = format!("{combined_key} {document_key}");

        Self {
            khata_number,
            khasra_number,
            area,
            district,
            owner_name,
            father_name,
            document,
            owner_key,
            father_key,
            document_key,
            combined_key,
            full_key,
        }
    }
}

/// A scored reference to a record, before result shaping.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub record: &'a Record,
    /// Similarity in [0, 1]; 1.0 means identical canonical strings
    pub score: f64,
}

/// Query parameters for GET /api/search.
///
/// Which fragments are present selects the query mode: owner only, father
/// only, owner + father combined, or free-text `q` across all fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub owner: Option<String>,
    pub father: Option<String>,
    pub q: Option<String>,
}

/// Query parameters for GET /api/search-document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentSearchParams {
    pub q: Option<String>,
}

/// One entry of the JSON response array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub khata_number: String,
    pub khasra_number: String,
    pub area: String,
    /// Resolved fetchable path; the matcher itself only knows the filename
    pub document_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
