//! Pure, synchronous queries over an in-memory snapshot of the record set.
//!
//! These functions never touch storage: the caller fetches a full snapshot
//! from the record store and may filter, sort, and summarize it freely.

use crate::budget::Budget;

/// Count and grand total of a (usually filtered) set of quotes, as shown in
/// the list header.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySummary {
    pub count: usize,
    pub total_value: f64,
}

/// Keeps the records whose client name, plate, or decimal id contains `term`,
/// case-insensitively. An empty term matches everything.
pub fn filter(records: &[Budget], term: &str) -> Vec<Budget> {
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|budget| matches_term(budget, &term))
        .cloned()
        .collect()
}

fn matches_term(budget: &Budget, term: &str) -> bool {
    budget.client_data.name.to_lowercase().contains(term)
        || budget.client_data.plate.to_lowercase().contains(term)
        || budget
            .id
            .map(|id| id.to_string().contains(term))
            .unwrap_or(false)
}

/// Descending by id; ids are monotonic, so this is newest-first.
pub fn sort_newest_first(records: &mut [Budget]) {
    records.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Sums the cached `totalValue` of each record; totals are not recomputed
/// from services here.
pub fn summarize(records: &[Budget]) -> QuerySummary {
    QuerySummary {
        count: records.len(),
        total_value: records.iter().map(|b| b.total_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(id: u64, name: &str, plate: &str, total: f64) -> Budget {
        let mut budget = Budget::new();
        budget.id = Some(id);
        budget.client_data.name = name.to_string();
        budget.client_data.plate = plate.to_string();
        budget.total_value = total;
        budget
    }

    fn fixture() -> Vec<Budget> {
        vec![
            budget(7, "Ana Souza", "ABC-1234", 150.0),
            budget(2, "Bruno Lima", "XYZ-7788", 80.0),
            budget(3, "Carla Dias", "DEF-5566", 120.5),
            budget(4, "Oficina 7 Estrelas", "GHI-0001", 60.0),
        ]
    }

    #[test]
    fn empty_term_matches_everything() {
        let records = fixture();
        assert_eq!(filter(&records, "").len(), records.len());
    }

    #[test]
    fn term_matches_name_plate_or_id() {
        let records = fixture();
        let hits = filter(&records, "7");
        let ids: Vec<_> = hits.iter().map(|b| b.id.unwrap()).collect();
        assert!(ids.contains(&7), "id match expected");
        assert!(ids.contains(&2), "plate match expected");
        assert!(ids.contains(&4), "name match expected");
        assert!(!ids.contains(&3), "no-field match must be excluded");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = fixture();
        let hits = filter(&records, "ana");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_data.name, "Ana Souza");

        let hits = filter(&records, "abc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_data.plate, "ABC-1234");
    }

    #[test]
    fn sort_puts_newest_first() {
        let mut records = fixture();
        sort_newest_first(&mut records);
        let ids: Vec<_> = records.iter().map(|b| b.id.unwrap()).collect();
        assert_eq!(ids, vec![7, 4, 3, 2]);
    }

    #[test]
    fn summary_uses_cached_totals() {
        let records = fixture();
        let summary = summarize(&records);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total_value, 410.5);
    }
}
