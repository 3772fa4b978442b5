use crate::domain::model::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Raw `prepTime` token, compared byte-wise. `"PT10M"` sorts before `"PT9M"`.
    PrepTime,
    /// Leave recipes in the order their fetches completed.
    Completion,
}

pub fn aggregate(items: Vec<Recipe>, order: SortOrder) -> Vec<Recipe> {
    match order {
        SortOrder::PrepTime => sort_stable_by_key(items, |recipe| recipe.prep_time.as_str()),
        SortOrder::Completion => items,
    }
}

/// Stable sort driven by an extracted key; equal keys keep their incoming order.
pub fn sort_stable_by_key<K, F>(mut items: Vec<Recipe>, key: F) -> Vec<Recipe>
where
    K: Ord + ?Sized,
    F: Fn(&Recipe) -> &K,
{
    items.sort_by(|a, b| key(a).cmp(key(b)));
    items
}

pub fn truncate_to(mut items: Vec<Recipe>, cap: usize) -> Vec<Recipe> {
    items.truncate(cap);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, prep_time: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            prep_time: prep_time.to_string(),
            ..Default::default()
        }
    }

    fn ids(items: &[Recipe]) -> Vec<&str> {
        items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_prep_time_sort_is_lexical_and_stable() {
        let items = vec![
            recipe("A", "PT1H"),
            recipe("B", "PT30M"),
            recipe("C", "PT1H"),
            recipe("D", "PT2H"),
        ];

        let sorted = aggregate(items, SortOrder::PrepTime);

        assert_eq!(ids(&sorted), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_prep_time_sort_does_not_parse_durations() {
        let items = vec![
            recipe("nine", "PT9M"),
            recipe("ten", "PT10M"),
            recipe("fortyfive", "PT45M"),
            recipe("hour", "PT1H"),
        ];

        let sorted = aggregate(items, SortOrder::PrepTime);

        assert_eq!(ids(&sorted), vec!["ten", "hour", "fortyfive", "nine"]);
    }

    #[test]
    fn test_completion_order_is_left_untouched() {
        let items = vec![recipe("3", "PT50M"), recipe("1", "PT10M"), recipe("2", "PT30M")];

        let result = aggregate(items, SortOrder::Completion);

        assert_eq!(ids(&result), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(aggregate(Vec::new(), SortOrder::PrepTime).is_empty());

        let single = aggregate(vec![recipe("1", "PT5M")], SortOrder::PrepTime);
        assert_eq!(ids(&single), vec!["1"]);
    }

    #[test]
    fn test_sort_by_injected_key() {
        let mut a = recipe("a", "PT1H");
        a.name = "Zucchini".to_string();
        let mut b = recipe("b", "PT2H");
        b.name = "Apple".to_string();

        let sorted = sort_stable_by_key(vec![a, b], |r| r.name.as_str());

        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_truncate_to_cap() {
        let items = vec![recipe("1", ""), recipe("2", ""), recipe("3", "")];

        assert_eq!(ids(&truncate_to(items.clone(), 2)), vec!["1", "2"]);
        assert_eq!(truncate_to(items, 10).len(), 3);
    }
}
