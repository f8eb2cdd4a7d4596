//! Relevance scoring for tool selection.
//!
//! This module provides:
//! - **Tokenization**: free text to a normalized token set
//! - **Synonym expansion**: a static, single-pass domain synonym table
//! - **Lexical scoring**: weighted exact and partial overlap per tool field
//! - **Hybrid scoring**: convex blend of AI confidence and lexical relevance
//!
//! Everything here is pure: no I/O, no shared state.

mod hybrid;
mod lexical;
mod synonyms;
mod tokenize;

pub use hybrid::{LEXICAL_SCORE_CEILING, clamp_unit, hybrid_score, normalize_lexical, normalized_lexical_score};
pub use lexical::{
    DESCRIPTION_PARTIAL_MULTIPLIER, DESCRIPTION_WEIGHT, GATEWAY_WEIGHT, LexicalBreakdown, MIN_PARTIAL_TOKEN_LEN,
    NAME_PARTIAL_MULTIPLIER, NAME_WEIGHT, PARTIAL_MATCH_BONUS, lexical_breakdown, lexical_score,
};
pub use synonyms::{SYNONYM_TABLE, synonyms_for};
pub use tokenize::{expand_with_synonyms, normalize};
