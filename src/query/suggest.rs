//! Autocomplete suggestion generation.
//!
//! Suggestions are built fresh on every keystroke from the **raw**
//! collection, not the filtered one - they must reflect everything
//! reachable by search regardless of active status/date filters. The
//! returned strings are the matched field values themselves, so adopting
//! one as the search term is guaranteed to match at least the record it
//! came from.

use crate::model::Listable;

/// Tuning knobs for suggestion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Minimum trimmed term length before suggestions appear.
    pub min_chars: usize,
    /// Maximum number of suggestions returned.
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_chars: 2,
            limit: 6,
        }
    }
}

/// Generate autocomplete candidates for a partial search term.
///
/// Case-insensitive substring scan over each record's searchable fields,
/// in the record's field-priority order. Collects the matched field value
/// itself, first-seen order preserved, duplicates removed, truncated to
/// `config.limit`. Returns empty for terms shorter than
/// `config.min_chars`.
pub fn suggest<R: Listable>(records: &[R], term: &str, config: &SuggestConfig) -> Vec<String> {
    let needle = term.trim().to_lowercase();
    if needle.len() < config.min_chars.max(1) {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    let mut fields = Vec::new();
    for record in records {
        fields.clear();
        record.collect_search_fields(&mut fields);
        for field in &fields {
            if suggestions.len() >= config.limit {
                return suggestions;
            }
            if field.to_lowercase().contains(&needle)
                && !suggestions.iter().any(|s| s == field)
            {
                suggestions.push((*field).to_string());
            }
        }
    }
    suggestions
}

// ===== Tests =====

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
