use crate::domain::model::{FilterCriteria, SelectionKey, Selections};

/// Day range for a duration token.
pub fn duration_range(token: &str) -> Option<(u32, u32)> {
    match token.to_lowercase().as_str() {
        "short" => Some((3, 5)),
        "week" => Some((6, 8)),
        "two_weeks" => Some((12, 16)),
        _ => None,
    }
}

/// Price range per person for a budget token.
pub fn budget_range(token: &str) -> Option<(f64, f64)> {
    match token.to_lowercase().as_str() {
        "budget" => Some((500.0, 1500.0)),
        "mid" => Some((1500.0, 3000.0)),
        "premium" => Some((3000.0, 5000.0)),
        "luxury" => Some((5000.0, 20000.0)),
        _ => None,
    }
}

/// Catalog region name for a destination token.
pub fn region_for(token: &str) -> Option<&'static str> {
    match token.to_lowercase().as_str() {
        "north" => Some("North Island"),
        "south" => Some("South Island"),
        "both" => Some("Both"),
        _ => None,
    }
}

/// Catalog category name for a trip-type token.
pub fn category_for(token: &str) -> Option<&'static str> {
    match token.to_lowercase().as_str() {
        "adventure" => Some("Adventure"),
        "culture" => Some("Culture"),
        "nature" => Some("Nature"),
        "food" => Some("Food"),
        "mixed" => Some("Mixed"),
        _ => None,
    }
}

/// Target traveller count for a group-size token.
pub fn group_size_for(token: &str) -> Option<u32> {
    match token.to_lowercase().as_str() {
        "solo" => Some(1),
        "couple" => Some(2),
        "small" => Some(4),
        "large" => Some(8),
        _ => None,
    }
}

/// Translates coarse dialog selections into concrete filter predicates.
///
/// Pure and deterministic; tokens are matched case-insensitively. A missing
/// or unmapped selection leaves the corresponding criteria field unset, so
/// it imposes no constraint downstream.
pub fn map_selections(selections: &Selections) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    if let Some(token) = selections.get(SelectionKey::Destination) {
        criteria.region = region_for(token).map(str::to_string);
    }

    if let Some(token) = selections.get(SelectionKey::TripType) {
        criteria.category = category_for(token).map(str::to_string);
    }

    if let Some(token) = selections.get(SelectionKey::Duration) {
        // "flexible" and unknown tokens mean no duration constraint.
        if let Some((min, max)) = duration_range(token) {
            criteria.duration_min = Some(min);
            criteria.duration_max = Some(max);
        }
    }

    if let Some(token) = selections.get(SelectionKey::Budget) {
        if let Some((min, max)) = budget_range(token) {
            criteria.budget_min = Some(min);
            criteria.budget_max = Some(max);
        }
    }

    if let Some(token) = selections.get(SelectionKey::GroupSize) {
        criteria.group_size = group_size_for(token);
    }

    criteria
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selections_map_to_unconstrained_criteria() {
        let criteria = map_selections(&Selections::new());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_full_mapping() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Destination, "south");
        selections.insert(SelectionKey::TripType, "nature");
        selections.insert(SelectionKey::Duration, "week");
        selections.insert(SelectionKey::Budget, "mid");
        selections.insert(SelectionKey::GroupSize, "couple");

        let criteria = map_selections(&selections);
        assert_eq!(criteria.region.as_deref(), Some("South Island"));
        assert_eq!(criteria.category.as_deref(), Some("Nature"));
        assert_eq!(criteria.duration_min, Some(6));
        assert_eq!(criteria.duration_max, Some(8));
        assert_eq!(criteria.budget_min, Some(1500.0));
        assert_eq!(criteria.budget_max, Some(3000.0));
        assert_eq!(criteria.group_size, Some(2));
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Destination, "North");
        selections.insert(SelectionKey::Budget, "LUXURY");

        let criteria = map_selections(&selections);
        assert_eq!(criteria.region.as_deref(), Some("North Island"));
        assert_eq!(criteria.budget_min, Some(5000.0));
        assert_eq!(criteria.budget_max, Some(20000.0));
    }

    #[test]
    fn test_flexible_duration_means_no_constraint() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Duration, "flexible");

        let criteria = map_selections(&selections);
        assert_eq!(criteria.duration_min, None);
        assert_eq!(criteria.duration_max, None);
    }

    #[test]
    fn test_unmapped_destination_leaves_region_unset() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Destination, "recommend");

        let criteria = map_selections(&selections);
        assert_eq!(criteria.region, None);
    }
}
