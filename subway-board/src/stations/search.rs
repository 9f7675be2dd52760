//! Ranked station search.
//!
//! Matching is case-insensitive substring containment on name or id. Ranking
//! puts prefix matches on the name first, so "86" finds "86 St" ahead of
//! "186 St".

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::StationReference;

/// Maximum number of search results returned.
pub const MAX_SEARCH_RESULTS: usize = 15;

/// A number followed by an English ordinal suffix.
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)(?:st|nd|rd|th)").expect("ordinal pattern is a valid regex")
});

/// Strip ordinal suffixes from numbers, so "14th St" becomes "14 St".
///
/// # Examples
///
/// ```
/// use subway_board::stations::normalize_ordinals;
///
/// assert_eq!(normalize_ordinals("14th St"), "14 St");
/// assert_eq!(normalize_ordinals("3RD Ave"), "3 Ave");
/// assert_eq!(normalize_ordinals("W 4 St"), "W 4 St");
/// ```
pub fn normalize_ordinals(query: &str) -> Cow<'_, str> {
    ORDINAL.replace_all(query, "$1")
}

/// Search stations by name or id.
///
/// An empty (or all-whitespace) query returns nothing. Results are ranked by
/// whether the name starts with the query, then whether it starts with the
/// ordinal-normalized query, then by name, and capped at
/// [`MAX_SEARCH_RESULTS`].
pub fn search_stations<'a>(stations: &'a [StationReference], query: &str) -> Vec<&'a StationReference> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let raw = query.to_lowercase();
    let normalized = normalize_ordinals(query).to_lowercase();
    let has_normalized = normalized != raw;

    let mut matches: Vec<(&StationReference, String)> = stations
        .iter()
        .filter_map(|station| {
            let name = station.name.to_lowercase();
            let id = station.id.as_str().to_lowercase();

            let matched = name.contains(&raw)
                || id.contains(&raw)
                || (has_normalized && (name.contains(&normalized) || id.contains(&normalized)));

            matched.then_some((station, name))
        })
        .collect();

    matches.sort_by(|(a, a_name), (b, b_name)| {
        rank_prefix(a_name, b_name, &raw)
            .then_with(|| rank_prefix(a_name, b_name, &normalized))
            .then_with(|| a.name.cmp(&b.name))
    });

    matches
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .map(|(station, _)| station)
        .collect()
}

/// Names starting with `prefix` sort first.
fn rank_prefix(a: &str, b: &str, prefix: &str) -> Ordering {
    b.starts_with(prefix).cmp(&a.starts_with(prefix))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use proptest::prelude::*;

    fn station_strategy() -> impl Strategy<Value = StationReference> {
        ("[A-Z][0-9]{2}", "[A-Za-z0-9 ]{1,20}").prop_map(|(id, name)| {
            StationReference::new(StationId::parse(&id).unwrap(), name)
        })
    }

    proptest! {
        /// Text without digits followed by a suffix is unchanged
        #[test]
        fn normalize_without_ordinals_is_identity(s in "[A-Za-z &-]{0,30}") {
            prop_assert_eq!(normalize_ordinals(&s), s.as_str());
        }

        /// Suffixes are removed and the number kept
        #[test]
        fn normalize_strips_suffix(n in 0u32..1000, suffix in "(st|nd|rd|th|ST|Th)") {
            let input = format!("{n}{suffix} St");
            prop_assert_eq!(normalize_ordinals(&input), format!("{n} St"));
        }

        /// Results never exceed the cap and every result matches
        #[test]
        fn results_bounded_and_matching(
            stations in prop::collection::vec(station_strategy(), 0..60),
            query in "[a-z0-9]{1,3}",
        ) {
            let results = search_stations(&stations, &query);
            prop_assert!(results.len() <= MAX_SEARCH_RESULTS);

            let raw = query.to_lowercase();
            let normalized = normalize_ordinals(&query).to_lowercase();
            for s in &results {
                let name = s.name.to_lowercase();
                let id = s.id.as_str().to_lowercase();
                prop_assert!(
                    name.contains(&raw) || id.contains(&raw)
                        || name.contains(&normalized) || id.contains(&normalized)
                );
            }
        }

        /// Prefix matches always come before contains-only matches
        #[test]
        fn prefix_matches_first(
            stations in prop::collection::vec(station_strategy(), 0..60),
            query in "[a-z]{1,2}",
        ) {
            let results = search_stations(&stations, &query);
            let flags: Vec<bool> = results
                .iter()
                .map(|s| s.name.to_lowercase().starts_with(&query))
                .collect();
            for pair in flags.windows(2) {
                prop_assert!(pair[0] || !pair[1]);
            }
        }
    }
}
