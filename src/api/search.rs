use axum::extract::{Query, State};
use axum::Json;

use crate::models::{DocumentSearchParams, Record, RecordSummary, SearchParams};
use crate::search::matcher::{self, SearchQuery};
use crate::state::AppState;

/// GET /api/search - Fuzzy search over the record corpus.
///
/// The supplied fragments select the query mode (owner, father, combined, or
/// free-text `q`). An unusable query yields an empty array, never an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<RecordSummary>> {
    let query = match SearchQuery::from_fragments(
        params.owner.as_deref(),
        params.father.as_deref(),
        params.q.as_deref(),
    ) {
        Some(query) => query,
        None => return Json(Vec::new()),
    };

    tracing::debug!("Search query: {query:?}");

    let results = matcher::search(state.corpus.records(), &query);
    tracing::debug!("Found {} matches", results.len());

    Json(
        results
            .into_iter()
            .map(|m| summarize(m.record, Some(m.score)))
            .collect(),
    )
}

/// GET /api/search-document - Keyword containment search over the raw
/// document identifier. Unscored and unbounded.
pub async fn search_document(
    State(state): State<AppState>,
    Query(params): Query<DocumentSearchParams>,
) -> Json<Vec<RecordSummary>> {
    let keyword = params.q.unwrap_or_default();
    let hits = matcher::search_documents(state.corpus.records(), &keyword);

    Json(hits.into_iter().map(|r| summarize(r, None)).collect())
}

/// Shape a record for the JSON response, resolving the opaque document
/// filename into a fetchable path. The matcher never builds URLs itself.
fn summarize(record: &Record, score: Option<f64>) -> RecordSummary {
    RecordSummary {
        khata_number: record.khata_number.clone(),
        khasra_number: record.khasra_number.clone(),
        area: record.area.clone(),
        document_url: format!("/static/documents/{}", record.document),
        score,
    }
}
