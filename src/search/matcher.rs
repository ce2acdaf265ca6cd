//! Fuzzy matching and ranking over the precomputed record keys.
//!
//! A query is normalized once, then scored against every record with an
//! edit-distance similarity ratio. Records surviving the mode's threshold are
//! sorted by score descending and truncated. The whole search is a pure
//! function of the immutable record slice; concurrent queries need no
//! coordination.

use crate::models::{MatchResult, Record};
use crate::search::normalize::normalize;

/// Minimum similarity for the name-based modes (owner, father, combined).
pub const NAME_SCORE_THRESHOLD: f64 = 0.5;
/// Minimum similarity for free-text candidates that fail the substring test.
pub const FREE_TEXT_SCORE_THRESHOLD: f64 = 0.7;
/// Result cap for all scored modes. Keyword search is unbounded.
pub const MAX_RESULTS: usize = 20;

/// A normalized query, one of the mutually exclusive modes.
///
/// Which fragments were supplied selects the mode; fragments that normalize
/// to the empty string count as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Owner fragment only, compared against `owner_key`
    Owner(String),
    /// Father fragment only, compared against `father_key`
    Father(String),
    /// Owner + father, space-joined, compared against `combined_key`
    Combined(String),
    /// One unstructured fragment matched across owner, father, and document
    FreeText(String),
}

impl SearchQuery {
    /// Select the query mode from the supplied fragments.
    ///
    /// Structured fragments (owner/father) take precedence over the free-text
    /// fragment. Returns `None` when nothing usable was supplied, which the
    /// caller answers with an empty result set rather than an error.
    pub fn from_fragments(
        owner: Option<&str>,
        father: Option<&str>,
        free_text: Option<&str>,
    ) -> Option<Self> {
        let owner = owner.map(normalize).filter(|s| !s.is_empty());
        let father = father.map(normalize).filter(|s| !s.is_empty());

        match (owner, father) {
            (Some(o), Some(f)) => Some(Self::Combined(format!("{o} {f}"))),
            (Some(o), None) => Some(Self::Owner(o)),
            (None, Some(f)) => Some(Self::Father(f)),
            (None, None) => {
                let q = free_text.map(normalize).filter(|s| !s.is_empty())?;
                Some(Self::FreeText(q))
            }
        }
    }
}

/// Score the query against every record, filter by the mode's threshold,
/// rank by score descending, and truncate to [`MAX_RESULTS`].
///
/// The sort is stable, so records with equal scores keep corpus load order.
pub fn search<'a>(records: &'a [Record], query: &SearchQuery) -> Vec<MatchResult<'a>> {
    let mut matches: Vec<MatchResult<'a>> = records
        .iter()
        .filter_map(|record| score_record(record, query).map(|score| MatchResult { record, score }))
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_RESULTS);
    matches
}

/// Score one record, returning `None` when it fails the mode's candidacy test.
fn score_record(record: &Record, query: &SearchQuery) -> Option<f64> {
    match query {
        SearchQuery::Owner(q) => {
            let score = similarity_ratio(q, &record.owner_key);
            (score >= NAME_SCORE_THRESHOLD).then_some(score)
        }
        SearchQuery::Father(q) => {
            let score = similarity_ratio(q, &record.father_key);
            (score >= NAME_SCORE_THRESHOLD).then_some(score)
        }
        SearchQuery::Combined(q) => {
            let score = similarity_ratio(q, &record.combined_key);
            (score >= NAME_SCORE_THRESHOLD).then_some(score)
        }
        SearchQuery::FreeText(q) => {
            // Candidacy is an OR of a cheap substring test and the best of
            // three per-field similarities. Substring qualifiers are still
            // scored so ranking stays meaningful.
            let score = similarity_ratio(q, &record.owner_key)
                .max(similarity_ratio(q, &record.father_key))
                .max(similarity_ratio(q, &record.document_key));
            (record.full_key.contains(q.as_str()) || score >= FREE_TEXT_SCORE_THRESHOLD)
                .then_some(score)
        }
    }
}

/// Keyword search over the raw document identifier.
///
/// Case-folded substring containment only: no normalization pipeline, no
/// similarity scoring, no threshold, no result cap. An empty keyword matches
/// nothing.
pub fn search_documents<'a>(records: &'a [Record], keyword: &str) -> Vec<&'a Record> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| r.document.to_lowercase().contains(&keyword))
        .collect()
}

/// Normalized edit-distance similarity in [0, 1].
///
/// The conventional similarity ratio `(len(a)+len(b) - indel(a,b)) /
/// (len(a)+len(b))`, equivalently `2·LCS/(len(a)+len(b))`, computed over
/// chars. Two empty strings compare as identical (1.0) by convention.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let lensum = a.len() + b.len();
    if lensum == 0 {
        return 1.0;
    }
    let distance = indel_distance(&a, &b);
    (lensum - distance) as f64 / lensum as f64
}

/// Edit distance counting insertions and deletions only (no substitution),
/// two-row dynamic programming.
fn indel_distance(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                (prev[j] + 1).min(curr[j - 1] + 1)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(owner: &str, father: &str, document: &str) -> Record {
        Record::new(
            "101".into(),
            "23/4".into(),
            "2.5".into(),
            "Jaipur".into(),
            owner.into(),
            father.into(),
            document.into(),
        )
    }

    fn sample_corpus() -> Vec<Record> {
        vec![
            make_record("राम कुमार", "श्याम लाल", "VID001.pdf"),
            make_record("सीता देवी", "मोहन दास", "VID002.pdf"),
            make_record("Ramesh Chand", "Suresh Chand", "VID003.pdf"),
        ]
    }

    // ── similarity_ratio ─────────────────────────────────────────

    #[test]
    fn test_ratio_identical() {
        assert_eq!(similarity_ratio("ram kumar", "ram kumar"), 1.0);
    }

    #[test]
    fn test_ratio_both_empty_is_identical_by_convention() {
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert_eq!(similarity_ratio("abc", ""), 0.0);
        assert_eq!(similarity_ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_known_value() {
        // "ram kumar" vs "rama kumara": two inserted chars, lensum 20
        let score = similarity_ratio("ram kumar", "rama kumara");
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_symmetric() {
        let ab = similarity_ratio("shyam lal", "shyama lala");
        let ba = similarity_ratio("shyama lala", "shyam lal");
        assert_eq!(ab, ba);
    }

    // ── query mode selection ─────────────────────────────────────

    #[test]
    fn test_mode_selection() {
        assert_eq!(
            SearchQuery::from_fragments(Some("Ram"), None, None),
            Some(SearchQuery::Owner("ram".into()))
        );
        assert_eq!(
            SearchQuery::from_fragments(None, Some("Shyam"), None),
            Some(SearchQuery::Father("shyam".into()))
        );
        assert_eq!(
            SearchQuery::from_fragments(Some("Ram"), Some("Shyam"), None),
            Some(SearchQuery::Combined("ram shyam".into()))
        );
        assert_eq!(
            SearchQuery::from_fragments(None, None, Some("VID001")),
            Some(SearchQuery::FreeText("vid001".into()))
        );
    }

    #[test]
    fn test_structured_fragments_take_precedence_over_free_text() {
        assert_eq!(
            SearchQuery::from_fragments(Some("Ram"), None, Some("VID001")),
            Some(SearchQuery::Owner("ram".into()))
        );
    }

    #[test]
    fn test_empty_fragments_yield_no_query() {
        assert_eq!(SearchQuery::from_fragments(None, None, None), None);
        assert_eq!(SearchQuery::from_fragments(Some(""), Some("  "), Some("")), None);
    }

    // ── search ───────────────────────────────────────────────────

    #[test]
    fn test_owner_search_across_scripts() {
        let corpus = sample_corpus();
        let query = SearchQuery::from_fragments(Some("ram kumar"), None, None).unwrap();
        let results = search(&corpus, &query);
        assert!(!results.is_empty());
        assert_eq!(results[0].record.document, "VID001.pdf");
        assert!(results[0].score >= NAME_SCORE_THRESHOLD);
    }

    #[test]
    fn test_devanagari_pair_scores_high() {
        // A Devanagari spelling and its accepted Romanization normalize to
        // near-equal canonical strings
        let score = similarity_ratio(
            &crate::search::normalize::normalize("ram kumar"),
            &crate::search::normalize::normalize("राम कुमार"),
        );
        assert!(score >= 0.9, "score was {score}");
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let corpus = sample_corpus();
        let query = SearchQuery::from_fragments(Some("xyz123"), None, None).unwrap();
        assert!(search(&corpus, &query).is_empty());
    }

    #[test]
    fn test_combined_mode() {
        let corpus = sample_corpus();
        let query =
            SearchQuery::from_fragments(Some("ram kumar"), Some("shyam lal"), None).unwrap();
        let results = search(&corpus, &query);
        assert!(!results.is_empty());
        assert_eq!(results[0].record.document, "VID001.pdf");
    }

    #[test]
    fn test_free_text_substring_qualifies_regardless_of_threshold() {
        let corpus = sample_corpus();
        // "kumar" is a substring of the owner key but scores below 0.7
        let query = SearchQuery::from_fragments(None, None, Some("kumar")).unwrap();
        let results = search(&corpus, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.document, "VID001.pdf");
        assert!(results[0].score < FREE_TEXT_SCORE_THRESHOLD);
    }

    #[test]
    fn test_free_text_matches_document_field() {
        let corpus = sample_corpus();
        let query = SearchQuery::from_fragments(None, None, Some("VID002")).unwrap();
        let results = search(&corpus, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.document, "VID002.pdf");
    }

    #[test]
    fn test_ranking_order_is_monotone_decreasing() {
        let mut corpus = sample_corpus();
        corpus.push(make_record("Ram Kuma", "Someone", "VID004.pdf"));
        corpus.push(make_record("Ram Kumar", "Someone", "VID005.pdf"));
        let query = SearchQuery::from_fragments(Some("ram kumar"), None, None).unwrap();
        let results = search(&corpus, &query);
        assert!(results.len() >= 2);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(results[0].record.document, "VID005.pdf");
    }

    #[test]
    fn test_ties_keep_corpus_load_order() {
        let corpus = vec![
            make_record("Ram Kumar", "A", "first.pdf"),
            make_record("Ram Kumar", "B", "second.pdf"),
        ];
        let query = SearchQuery::from_fragments(Some("ram kumar"), None, None).unwrap();
        let results = search(&corpus, &query);
        assert_eq!(results[0].record.document, "first.pdf");
        assert_eq!(results[1].record.document, "second.pdf");
    }

    #[test]
    fn test_scored_modes_capped_at_max_results() {
        let corpus: Vec<Record> = (0..MAX_RESULTS + 15)
            .map(|i| make_record("Ram Kumar", "Shyam Lal", &format!("VID{i:03}.pdf")))
            .collect();
        let query = SearchQuery::from_fragments(Some("ram kumar"), None, None).unwrap();
        assert_eq!(search(&corpus, &query).len(), MAX_RESULTS);
    }

    #[test]
    fn test_threshold_membership_is_monotone() {
        // Scores are threshold-independent; any record passing 0.7 also
        // passes 0.5 for the same query and field
        let corpus = sample_corpus();
        let query = SearchQuery::from_fragments(Some("ram kumar"), None, None).unwrap();
        for result in search(&corpus, &query) {
            assert!(result.score >= NAME_SCORE_THRESHOLD);
        }
    }

    // ── keyword/document search ──────────────────────────────────

    #[test]
    fn test_document_keyword_containment() {
        let corpus = sample_corpus();
        let hits = search_documents(&corpus, "vid00");
        assert_eq!(hits.len(), 3);
        let hits = search_documents(&corpus, "VID002");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].document, "VID002.pdf");
    }

    #[test]
    fn test_document_keyword_unbounded() {
        let corpus: Vec<Record> = (0..MAX_RESULTS + 10)
            .map(|i| make_record("Owner", "Father", &format!("VID{i:03}.pdf")))
            .collect();
        assert_eq!(search_documents(&corpus, "vid").len(), MAX_RESULTS + 10);
    }

    #[test]
    fn test_document_keyword_empty_matches_nothing() {
        let corpus = sample_corpus();
        assert!(search_documents(&corpus, "").is_empty());
        assert!(search_documents(&corpus, "   ").is_empty());
    }
}
