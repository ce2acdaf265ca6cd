//! Search core: text normalization and fuzzy matching/ranking.
//!
//! [`normalize`] turns arbitrary input into a canonical ASCII key;
//! [`matcher`] scores a normalized query against the precomputed corpus
//! keys. Both are pure, side-effect-free functions.

pub mod matcher;
pub mod normalize;
