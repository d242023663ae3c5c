use crate::catalog::criteria::{FilterCriteria, SortKey};
use crate::domain::CatalogItem;
use std::cmp::Ordering;
use tracing::debug;

/// Produces the filtered, ordered view of `items` for one set of criteria.
///
/// Pure and stateless: never mutates its inputs, returns a fresh list, and
/// is cheap enough to re-run on every keystroke for catalogs of a few
/// hundred items. An empty result is a valid outcome, not an error.
pub fn view(items: &[CatalogItem], criteria: &FilterCriteria) -> Vec<CatalogItem> {
    let mut retained: Vec<CatalogItem> = items
        .iter()
        .filter(|item| retains(item, criteria))
        .cloned()
        .collect();

    // Stable sort: ties keep the original relative order.
    retained.sort_by(comparator(criteria.sort));

    debug!(
        total = items.len(),
        retained = retained.len(),
        "computed catalog view"
    );
    retained
}

/// `view` followed by limit/offset pagination. Offset past the end yields
/// an empty page.
pub fn view_page(
    items: &[CatalogItem],
    criteria: &FilterCriteria,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Vec<CatalogItem> {
    let ordered = view(items, criteria);
    let offset = offset.unwrap_or(0);
    ordered
        .into_iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

fn retains(item: &CatalogItem, criteria: &FilterCriteria) -> bool {
    (criteria.search.is_empty() || item.matches_text(&criteria.search))
        && criteria.category.matches(&item.category)
        && criteria.price.contains(item.price)
}

fn comparator(sort: SortKey) -> impl FnMut(&CatalogItem, &CatalogItem) -> Ordering {
    move |a, b| match sort {
        SortKey::PopularityDesc => b.popularity.cmp(&a.popularity),
        SortKey::RatingDesc => cmp_f64(b.rating, a.rating),
        SortKey::PriceAsc => cmp_f64(a.price, b.price),
        SortKey::PriceDesc => cmp_f64(b.price, a.price),
    }
}

// Fixture prices and ratings are never NaN; a NaN comparison falls back
// to Equal.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::criteria::{CategorySelector, PriceBracket};

    fn item(name: &str, category: &str, price: f64, rating: f64, popularity: u32) -> CatalogItem {
        CatalogItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: category.to_string(),
            location: "Meghalaya".to_string(),
            price,
            rating,
            popularity,
            description: format!("A lovely {}", category),
            image_url: None,
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item("Falls A", "waterfall", 500.0, 4.8, 300),
            item("Falls B", "waterfall", 1500.0, 4.2, 100),
            item("Ridge Trek", "trek", 2500.0, 4.6, 250),
            item("Cane Basket", "handicraft", 350.0, 4.1, 80),
        ]
    }

    #[test]
    fn wildcard_criteria_keep_every_item() {
        let items = sample();
        let criteria = FilterCriteria::default();
        let result = view(&items, &criteria);
        assert_eq!(result.len(), items.len());
        // Default order is popularity descending
        assert_eq!(result[0].name, "Falls A");
        assert_eq!(result[1].name, "Ridge Trek");
        assert_eq!(result[3].name, "Cane Basket");
    }

    #[test]
    fn category_filter_with_price_ascending() {
        let items = sample();
        let criteria = FilterCriteria::default()
            .with_category("waterfall")
            .with_sort(SortKey::PriceAsc);
        let result = view(&items, &criteria);
        let names: Vec<&str> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Falls A", "Falls B"]);
    }

    #[test]
    fn non_matching_category_yields_empty() {
        let items = sample();
        let criteria = FilterCriteria::default().with_category("houseboat");
        assert!(view(&items, &criteria).is_empty());
    }

    #[test]
    fn inverted_price_bracket_yields_empty_not_error() {
        let items = sample();
        let criteria =
            FilterCriteria::default().with_price(PriceBracket::Between(2000.0, 100.0));
        assert!(view(&items, &criteria).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let items = sample();
        let by_name = FilterCriteria::default().with_search("fAlLs a");
        assert_eq!(view(&items, &by_name).len(), 1);

        let by_location = FilterCriteria::default().with_search("meghalaya");
        assert_eq!(view(&items, &by_location).len(), items.len());

        let no_match = FilterCriteria::default().with_search("zanzibar");
        assert!(view(&items, &no_match).is_empty());
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let items = vec![
            item("First", "trek", 900.0, 4.0, 50),
            item("Second", "trek", 900.0, 4.0, 50),
            item("Third", "trek", 900.0, 4.0, 50),
        ];
        let criteria = FilterCriteria::default().with_sort(SortKey::PriceAsc);
        let names: Vec<String> = view(&items, &criteria)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn view_is_idempotent_over_its_own_output() {
        let items = sample();
        let criteria = FilterCriteria::default().with_sort(SortKey::RatingDesc);
        let once = view(&items, &criteria);
        let twice = view(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_is_fine() {
        let criteria = FilterCriteria::default();
        assert!(view(&[], &criteria).is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let items = sample();
        let snapshot = items.clone();
        let criteria = FilterCriteria::default().with_sort(SortKey::PriceDesc);
        let _ = view(&items, &criteria);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn pagination_applies_after_sorting() {
        let items = sample();
        let criteria = FilterCriteria::default().with_sort(SortKey::PriceAsc);

        let first_page = view_page(&items, &criteria, Some(2), None);
        let names: Vec<&str> = first_page.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cane Basket", "Falls A"]);

        let second_page = view_page(&items, &criteria, Some(2), Some(2));
        let names: Vec<&str> = second_page.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Falls B", "Ridge Trek"]);

        let past_end = view_page(&items, &criteria, Some(2), Some(10));
        assert!(past_end.is_empty());
    }
}
