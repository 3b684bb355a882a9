// src/application/compat_match.rs
use std::collections::HashSet;

use crate::application::CatalogGateway;
use crate::domain::{DomainError, Drug, Tolerance};

/// Client-side projection applied to fetched match results. Both knobs are
/// pure filters over an already-fetched array; changing them never causes
/// another network call.
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    /// Case-insensitive substring filter on the drug name.
    pub name: Option<String>,
    /// Keep only records sharing the base drug's dosage form. Requires the
    /// base record to be known.
    pub same_form: bool,
}

pub struct CompatMatch<C: CatalogGateway> {
    catalog: C,
}

impl<C: CatalogGateway> CompatMatch<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Ask the backend for drugs dimensionally compatible with the base
    /// record within `tolerance`.
    pub fn find_compatible(
        &self,
        base_id: i64,
        tolerance: Tolerance,
    ) -> Result<Vec<Drug>, DomainError> {
        self.catalog.match_by_base(base_id, tolerance)
    }
}

/// Filter and order match results for display.
///
/// Records already on the saved list come first; backend ordering is kept
/// within each partition (a stable partition, not a sort). `same_form` is
/// ignored when no base record is available; the CLI rules that
/// combination out up front.
pub fn arrange_results(
    results: &[Drug],
    base: Option<&Drug>,
    filter: &ResultFilter,
    saved: &[Drug],
) -> Vec<Drug> {
    let kept: Vec<&Drug> = results
        .iter()
        .filter(|d| match &filter.name {
            Some(needle) => d.name_contains(needle),
            None => true,
        })
        .filter(|d| match (filter.same_form, base) {
            (true, Some(base)) => d.same_form_as(base),
            _ => true,
        })
        .collect();

    let saved_ids: HashSet<i64> = saved.iter().map(|d| d.id).collect();
    kept.iter()
        .filter(|d| saved_ids.contains(&d.id))
        .chain(kept.iter().filter(|d| !saved_ids.contains(&d.id)))
        .map(|d| (*d).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{drug, drug_with_form};

    #[test]
    fn given_saved_subset_when_arranging_then_saved_records_come_first() {
        // Arrange: saved {A, C}, backend order [A, B, C, D].
        let a = drug(1, "A정");
        let b = drug(2, "B정");
        let c = drug(3, "C정");
        let d = drug(4, "D정");
        let results = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let saved = vec![a.clone(), c.clone()];

        // Act
        let ordered = arrange_results(&results, None, &ResultFilter::default(), &saved);

        // Assert: stable partition, [A, C, B, D].
        let ids: Vec<i64> = ordered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn given_no_saved_drugs_when_arranging_then_backend_order_is_kept() {
        // Arrange
        let results = vec![drug(5, "가정"), drug(2, "나정"), drug(9, "다정")];

        // Act
        let ordered = arrange_results(&results, None, &ResultFilter::default(), &[]);

        // Assert
        let ids: Vec<i64> = ordered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn given_name_filter_when_arranging_then_keeps_substring_matches_only() {
        // Arrange
        let results = vec![
            drug(1, "아스피린정100밀리그램"),
            drug(2, "타이레놀정"),
            drug(3, "아스피린장용정"),
        ];
        let filter = ResultFilter {
            name: Some("아스피린".to_string()),
            ..ResultFilter::default()
        };

        // Act
        let ordered = arrange_results(&results, None, &filter, &[]);

        // Assert
        let ids: Vec<i64> = ordered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn given_same_form_filter_when_arranging_then_drops_other_forms() {
        // Arrange
        let base = drug_with_form(10, "기준약", "나정");
        let results = vec![
            drug_with_form(1, "같은제형", "나정"),
            drug_with_form(2, "캡슐제형", "경질캡슐제"),
            drug_with_form(3, "같은제형2", "나정"),
        ];
        let filter = ResultFilter {
            same_form: true,
            ..ResultFilter::default()
        };

        // Act
        let ordered = arrange_results(&results, Some(&base), &filter, &[]);

        // Assert
        let ids: Vec<i64> = ordered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn given_both_filters_when_arranging_then_saved_first_among_survivors() {
        // Arrange
        let base = drug_with_form(10, "기준약", "나정");
        let keep_a = drug_with_form(1, "아스피린정", "나정");
        let drop_form = drug_with_form(2, "아스피린캡슐", "경질캡슐제");
        let keep_b = drug_with_form(3, "아스피린장용정", "나정");
        let drop_name = drug_with_form(4, "타이레놀정", "나정");
        let results = vec![keep_a.clone(), drop_form, keep_b.clone(), drop_name];
        let filter = ResultFilter {
            name: Some("아스피린".to_string()),
            same_form: true,
        };
        let saved = vec![keep_b.clone()];

        // Act
        let ordered = arrange_results(&results, Some(&base), &filter, &saved);

        // Assert
        let ids: Vec<i64> = ordered.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn given_empty_results_when_arranging_then_returns_empty() {
        // Act
        let ordered = arrange_results(&[], None, &ResultFilter::default(), &[]);

        // Assert
        assert!(ordered.is_empty());
    }
}
