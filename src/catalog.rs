// src/catalog.rs

use crate::content_item::{ContentItem, Variant};
use log::debug;

/// In-memory collection of movies and episodes, kept in insertion order.
///
/// Every query returns an owned snapshot, so later mutations never show up in
/// results obtained earlier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Appends items in the order they are yielded. Duplicate titles are allowed.
    pub fn add<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ContentItem>,
    {
        let before = self.items.len();
        self.items.extend(items);
        debug!(
            "Added {} item(s) to catalog (now {}).",
            self.items.len() - before,
            self.items.len()
        );
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Movies only, sorted by title (case-sensitive). Equal titles keep insertion order.
    pub fn get_movies(&self) -> Vec<ContentItem> {
        self.sorted_by_title(Variant::Movie)
    }

    /// Episodes only, sorted by title (case-sensitive). Equal titles keep insertion order.
    pub fn get_series(&self) -> Vec<ContentItem> {
        self.sorted_by_title(Variant::Episode)
    }

    fn sorted_by_title(&self, variant: Variant) -> Vec<ContentItem> {
        let mut matching: Vec<ContentItem> = self
            .items
            .iter()
            .filter(|item| item.variant() == variant)
            .cloned()
            .collect();
        // `sort_by` is stable, which gives the insertion-order tie-break.
        matching.sort_by(|a, b| a.title.cmp(&b.title));
        matching
    }

    /// First item whose title equals `title`, ignoring case. No substring matching.
    pub fn search(&self, title: &str) -> Option<&ContentItem> {
        let query = title.to_lowercase();
        let found = self
            .items
            .iter()
            .find(|item| item.title.to_lowercase() == query);
        if found.is_none() {
            debug!("No catalog entry titled '{}'.", title);
        }
        found
    }

    /// All items, most played first. Equal play counts keep insertion order.
    pub fn sort_by_views(&self) -> Vec<ContentItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| b.plays().cmp(&a.plays()));
        sorted
    }

    /// The `count` most played items whose variant is listed in `variants`.
    ///
    /// A non-positive `count` or an empty `variants` slice yields nothing.
    /// Asking for more than exist returns every qualifying item.
    pub fn top_titles(&self, count: i64, variants: &[Variant]) -> Vec<ContentItem> {
        let Ok(count) = usize::try_from(count) else {
            return Vec::new();
        };
        self.sort_by_views()
            .into_iter()
            .filter(|item| variants.contains(&item.variant()))
            .take(count)
            .collect()
    }

    /// Records `times` plays on the item at `index` and returns its new play count.
    /// Returns `None` when `index` is out of range.
    pub fn record_plays_at(&mut self, index: usize, times: u64) -> Option<u64> {
        let item = self.items.get_mut(index)?;
        for _ in 0..times {
            item.record_play();
        }
        Some(item.plays())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn titles(items: &[ContentItem]) -> Vec<String> {
        items.iter().map(ContentItem::display_label).collect()
    }

    fn mixed_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(vec![
            ContentItem::movie("Tenet", 2020, "fiction"),
            ContentItem::episode("Mr. Robot", 2016, "drama", 10, 2),
            ContentItem::movie("Avengers", 2012, "fiction"),
            ContentItem::episode("Breaking Bad", 2008, "drama", 7, 1),
            ContentItem::movie("beautiful Mind", 2001, "biographical"),
        ]);
        catalog
    }

    #[test]
    fn test_titanic_and_simpsons_scenario() {
        let mut catalog = Catalog::new();
        catalog.add(vec![
            ContentItem::movie("Titanic", 1997, "romance"),
            ContentItem::episode("The Simpsons", 2019, "comedy", 3, 31),
        ]);

        assert_eq!(titles(&catalog.get_movies()), vec!["Titanic (1997)"]);
        assert_eq!(titles(&catalog.get_series()), vec!["The Simpsons (2019)S03E31"]);
        assert_eq!(catalog.search("titanic").map(|i| i.year), Some(1997));
        assert!(catalog.search("Frozen").is_none());

        let top = catalog.top_titles(1, &Variant::ALL);
        assert_eq!(titles(&top), vec!["Titanic (1997)"]);
    }

    #[test]
    fn test_add_preserves_order() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.items()[0].title, "Tenet");
        assert_eq!(catalog.items()[4].title, "beautiful Mind");
    }

    #[test]
    fn test_get_movies_sorts_case_sensitive() {
        let catalog = mixed_catalog();
        // Uppercase letters sort before lowercase ones.
        assert_eq!(
            titles(&catalog.get_movies()),
            vec!["Avengers (2012)", "Tenet (2020)", "beautiful Mind (2001)"]
        );
        assert_eq!(
            titles(&catalog.get_series()),
            vec!["Breaking Bad (2008)S07E01", "Mr. Robot (2016)S10E02"]
        );
    }

    #[test]
    fn test_equal_titles_keep_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add(vec![
            ContentItem::movie("Dune", 2021, "fiction"),
            ContentItem::movie("Dune", 1984, "fiction"),
            ContentItem::movie("Alien", 1979, "horror"),
        ]);
        let years: Vec<i32> = catalog.get_movies().iter().map(|m| m.year).collect();
        assert_eq!(years, vec![1979, 2021, 1984]);
    }

    #[test]
    fn test_filters_are_disjoint_and_cover_catalog() {
        let catalog = mixed_catalog();
        let movies = catalog.get_movies();
        let series = catalog.get_series();

        assert!(movies.iter().all(|i| i.variant() == Variant::Movie));
        assert!(series.iter().all(|i| i.variant() == Variant::Episode));

        let movie_labels: HashSet<String> = movies.iter().map(|i| i.display_label()).collect();
        let series_labels: HashSet<String> = series.iter().map(|i| i.display_label()).collect();
        assert!(movie_labels.is_disjoint(&series_labels));
        assert_eq!(movies.len() + series.len(), catalog.len());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let catalog = mixed_catalog();
        assert_eq!(titles(&catalog.get_movies()), titles(&catalog.get_movies()));
    }

    #[test]
    fn test_search_ignores_case_and_returns_first_match() {
        let mut catalog = Catalog::new();
        catalog.add(vec![
            ContentItem::movie("Avengers", 2012, "fiction"),
            ContentItem::movie("AVENGERS", 2019, "fiction"),
        ]);
        assert_eq!(catalog.search("AVENGERS").map(|i| i.year), Some(2012));
        assert_eq!(catalog.search("avengers").map(|i| i.year), Some(2012));
        assert!(catalog.search("Aven").is_none());
    }

    #[test]
    fn test_search_edge_cases() {
        let empty = Catalog::new();
        assert!(empty.search("anything").is_none());
        assert!(empty.search("").is_none());

        let mut catalog = mixed_catalog();
        assert!(catalog.search("").is_none());
        catalog.add([ContentItem::movie("", 2000, "unknown")]);
        assert_eq!(catalog.search("").map(|i| i.year), Some(2000));
    }

    #[test]
    fn test_sort_by_views_is_stable_and_non_mutating() {
        let mut catalog = Catalog::new();
        catalog.add(vec![
            ContentItem::movie("A", 2000, "x").with_plays(5),
            ContentItem::movie("B", 2000, "x").with_plays(9),
            ContentItem::movie("C", 2000, "x").with_plays(5),
            ContentItem::movie("D", 2000, "x"),
        ]);
        let order: Vec<String> = catalog
            .sort_by_views()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(order, vec!["B", "A", "C", "D"]);
        assert_eq!(catalog.items()[0].title, "A");
    }

    #[test]
    fn test_snapshots_do_not_alias_catalog() {
        let mut catalog = mixed_catalog();
        let snapshot = catalog.sort_by_views();
        catalog.record_plays_at(0, 50);
        assert!(snapshot.iter().all(|i| i.plays() == 0));
        assert_eq!(catalog.sort_by_views()[0].title, "Tenet");
    }

    #[test]
    fn test_top_titles_filters_by_variant() {
        let mut catalog = mixed_catalog();
        catalog.record_plays_at(1, 30); // Mr. Robot
        catalog.record_plays_at(2, 20); // Avengers
        catalog.record_plays_at(3, 10); // Breaking Bad

        assert_eq!(
            titles(&catalog.top_titles(2, &Variant::ALL)),
            vec!["Mr. Robot (2016)S10E02", "Avengers (2012)"]
        );
        assert_eq!(
            titles(&catalog.top_titles(1, &[Variant::Movie])),
            vec!["Avengers (2012)"]
        );
        assert_eq!(
            titles(&catalog.top_titles(5, &[Variant::Episode])),
            vec!["Mr. Robot (2016)S10E02", "Breaking Bad (2008)S07E01"]
        );
        assert!(catalog.top_titles(3, &[]).is_empty());
    }

    #[test]
    fn test_top_titles_bounds() {
        let catalog = mixed_catalog();
        for n in [-5_i64, -1, 0, 1, 3, 5, 8, 100] {
            let top = catalog.top_titles(n, &Variant::ALL);
            assert!(top.len() <= n.max(0) as usize);
            assert!(top.len() <= catalog.len());
        }
        assert!(catalog.top_titles(0, &Variant::ALL).is_empty());
        assert!(catalog.top_titles(-3, &Variant::ALL).is_empty());
        assert_eq!(catalog.top_titles(100, &Variant::ALL).len(), 5);
    }

    #[test]
    fn test_record_plays_at_out_of_range() {
        let mut catalog = mixed_catalog();
        assert_eq!(catalog.record_plays_at(4, 3), Some(3));
        assert_eq!(catalog.record_plays_at(5, 3), None);
        assert_eq!(Catalog::new().record_plays_at(0, 1), None);
    }
}
