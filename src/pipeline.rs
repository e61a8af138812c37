//! List Transformation Pipeline
//!
//! Shared search → sort → page-append → chart-projection logic behind both
//! list pages. Pure functions over plain records, so everything here is
//! unit-testable without a DOM.

/// Record that can be listed, searched, and voted on.
///
/// Implemented by both page record types so the pipeline is written once and
/// parameterized over the label field (`text` on quotes, `title` on entries).
pub trait Votable: Clone {
    fn id(&self) -> u32;
    fn label(&self) -> &str;
    fn votes(&self) -> u32;
    /// Copy of the record with a different vote count
    fn with_votes(&self, votes: u32) -> Self;
    /// Copy of the record with a different id
    fn with_id(&self, id: u32) -> Self;
}

/// Sort direction for the label field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Caption for the sort toggle button
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Index-aligned projection handed to the bar chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

/// Case-insensitive substring filter on the label field.
///
/// Preserves relative order; an empty query keeps every record.
pub fn filter<R: Votable>(records: &[R], query: &str) -> Vec<R> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sort by label, lowercased before comparison. Not stable for equal keys.
pub fn sort<R: Votable>(records: &[R], order: SortOrder) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_unstable_by(|a, b| {
        let (ka, kb) = (a.label().to_lowercase(), b.label().to_lowercase());
        match order {
            SortOrder::Ascending => ka.cmp(&kb),
            SortOrder::Descending => kb.cmp(&ka),
        }
    });
    sorted
}

/// One more vote for the record with `id`; unchanged if no record matches.
pub fn vote<R: Votable>(records: &[R], id: u32) -> Vec<R> {
    records
        .iter()
        .map(|r| {
            if r.id() == id {
                r.with_votes(r.votes() + 1)
            } else {
                r.clone()
            }
        })
        .collect()
}

/// Id handed to the next user-added record.
///
/// `len + 1` can collide with ids minted by [`append_page`]; kept as-is
/// because the pages treat ids as display keys, not a uniqueness contract.
pub fn next_id<R: Votable>(records: &[R]) -> u32 {
    records.len() as u32 + 1
}

/// Append one synthetic page: the seed batch re-keyed by page index.
///
/// Appended ids are `seed.id + page_index * batch_len`. Known limitation:
/// this does not guarantee uniqueness against ids already in `records`
/// (notably ids from [`next_id`] after user adds).
pub fn append_page<R: Votable>(records: &[R], seed_batch: &[R], page_index: u32) -> Vec<R> {
    let offset = page_index * seed_batch.len() as u32;
    let mut out = records.to_vec();
    out.extend(seed_batch.iter().map(|r| r.with_id(r.id() + offset)));
    out
}

/// Project records into the chart's label/value arrays, index-aligned and in
/// the same order as the input.
pub fn project_for_chart<R: Votable>(records: &[R]) -> ChartData {
    ChartData {
        labels: records.iter().map(|r| r.label().to_string()).collect(),
        values: records.iter().map(|r| r.votes()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;

    fn make_quote(id: u32, text: &str, votes: u32) -> Quote {
        Quote::new(id, text, votes)
    }

    fn seed() -> Vec<Quote> {
        vec![make_quote(1, "b", 1), make_quote(2, "a", 2)]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let quotes = vec![
            make_quote(1, "Never give up", 5),
            make_quote(2, "Do your best", 10),
            make_quote(3, "never stop learning", 3),
        ];

        let hits = filter(&quotes, "NEVER");

        // Order-preserving subsequence: 1 before 3
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 3);
    }

    #[test]
    fn test_filter_empty_query_keeps_everything() {
        assert_eq!(filter(&seed(), ""), seed());
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        assert!(filter(&seed(), "zzz").is_empty());
    }

    #[test]
    fn test_sort_orders_are_reverses() {
        let quotes = vec![
            make_quote(1, "banana", 0),
            make_quote(2, "Apple", 0),
            make_quote(3, "cherry", 0),
        ];

        let asc = sort(&quotes, SortOrder::Ascending);
        let mut desc = sort(&quotes, SortOrder::Descending);
        desc.reverse();

        assert_eq!(asc, desc);
        // Lowercased comparison puts "Apple" first
        assert_eq!(asc[0].id, 2);
        assert_eq!(asc[2].id, 3);
    }

    #[test]
    fn test_seed_scenario_ascending() {
        // [{1,"b",1},{2,"a",2}], empty query, ascending -> [2, 1]
        let view = sort(&filter(&seed(), ""), SortOrder::Ascending);
        assert_eq!(view[0].id, 2);
        assert_eq!(view[1].id, 1);
    }

    #[test]
    fn test_vote_increments_exactly_one() {
        let voted = vote(&seed(), 2);

        assert_eq!(voted[1].votes, 3);
        assert_eq!(voted[0].votes, 1);

        let before: u32 = seed().iter().map(|q| q.votes).sum();
        let after: u32 = voted.iter().map(|q| q.votes).sum();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_vote_missing_id_is_noop() {
        assert_eq!(vote(&seed(), 99), seed());
    }

    #[test]
    fn test_append_page_id_arithmetic() {
        let grown = append_page(&seed(), &seed(), 1);

        assert_eq!(grown.len(), 4);
        // seed.id + page * batch_len
        assert_eq!(grown[2].id, 3);
        assert_eq!(grown[3].id, 4);
        assert_eq!(grown[2].text, "b");

        let again = append_page(&grown, &seed(), 2);
        assert_eq!(again[4].id, 5);
        assert_eq!(again[5].id, 6);
    }

    #[test]
    fn test_append_page_can_collide_with_added_ids() {
        // Add a record keyed by next_id, then append a page: the appended
        // batch reuses id 3. Known limitation.
        let mut quotes = seed();
        quotes.push(make_quote(next_id(&quotes), "c", 0));

        let grown = append_page(&quotes, &seed(), 1);
        let threes = grown.iter().filter(|q| q.id == 3).count();
        assert_eq!(threes, 2);
    }

    #[test]
    fn test_chart_projection_alignment() {
        let quotes = seed();
        let chart = project_for_chart(&quotes);

        assert_eq!(chart.labels.len(), quotes.len());
        assert_eq!(chart.values.len(), quotes.len());
        for (i, q) in quotes.iter().enumerate() {
            assert_eq!(chart.labels[i], q.text);
            assert_eq!(chart.values[i], q.votes);
        }
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}
