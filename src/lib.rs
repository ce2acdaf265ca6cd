//! # record-search
//!
//! A Rust web application for answering free-text queries against a small
//! fixed corpus of land-record entries, where the query may be typed in a
//! different script or transliteration convention than the stored data
//! (Romanized Hindi vs. Devanagari vs. ASCII-folded spellings).
//!
//! ## Architecture
//!
//! Every query runs the same two-stage pipeline against an immutable,
//! precomputed corpus:
//!
//! ```text
//!        ┌──────────────────┐          ┌───────────────────────┐
//!        │ Query fragments  │          │ CSV corpus (startup)  │
//!        │ owner/father/q   │          │ one row per record    │
//!        └────────┬─────────┘          └───────────┬───────────┘
//!                 │                                │
//!                 ▼                                ▼
//!        ┌──────────────────┐          ┌───────────────────────┐
//!        │    Normalizer    │          │      Normalizer       │
//!        │ Devanagari→Roman │          │ (once per record,     │
//!        │ fold → lowercase │          │  cached as keys)      │
//!        └────────┬─────────┘          └───────────┬───────────┘
//!                 │                                │
//!                 └──────────────┬─────────────────┘
//!                                ▼
//!                  ┌───────────────────────────┐
//!                  │      Matcher/Ranker       │
//!                  │ edit-distance ratio per   │
//!                  │ record, threshold filter, │
//!                  │ sort desc, cap at 20      │
//!                  └─────────────┬─────────────┘
//!                                ▼
//!                  ┌───────────────────────────┐
//!                  │ Ranked record summaries   │
//!                  └───────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the corpus file, the
//!   documents directory, and the bind address
//! - [`models`] - Shared data types: `Record` with its precomputed canonical
//!   keys, `MatchResult`, request/response types
//! - [`corpus`] - CSV corpus loading; builds the immutable record set once at
//!   startup
//! - [`search::normalize`] - Canonical-key pipeline: Devanagari
//!   transliteration, diacritic folding, lowercasing, trimming
//! - [`search::matcher`] - Edit-distance similarity ratio, query modes,
//!   threshold filtering and ranking
//! - [`api`] - Axum HTTP handlers for search, document-keyword search, and
//!   document serving
//! - [`state`] - Shared application state holding the config and the corpus

pub mod api;
pub mod config;
pub mod corpus;
pub mod models;
pub mod search;
pub mod state;
