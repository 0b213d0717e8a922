use crate::core::mapper::{self, map_selections};
use crate::domain::model::{FilterCriteria, Package, SelectionKey, Selections};
use std::cmp::Ordering;

/// Applies every set criteria field conjunctively; an unset field imposes no
/// constraint. The "Both"/"Mixed" wildcard is honoured on the package side
/// only — a criteria value of "Both" is an ordinary equality check and is
/// deliberately not expanded to match everything.
pub fn filter_packages(packages: &[Package], criteria: &FilterCriteria) -> Vec<Package> {
    packages
        .iter()
        .filter(|package| matches_criteria(package, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(package: &Package, criteria: &FilterCriteria) -> bool {
    if let Some(region) = &criteria.region {
        if !(package.region.eq_ignore_ascii_case(region)
            || package.region.eq_ignore_ascii_case("both"))
        {
            return false;
        }
    }

    if let Some(category) = &criteria.category {
        if !(package.category.eq_ignore_ascii_case(category)
            || package.category.eq_ignore_ascii_case("mixed"))
        {
            return false;
        }
    }

    if let Some(min) = criteria.duration_min {
        if package.duration < min {
            return false;
        }
    }
    if let Some(max) = criteria.duration_max {
        if package.duration > max {
            return false;
        }
    }

    if let Some(min) = criteria.budget_min {
        if package.price < min {
            return false;
        }
    }
    if let Some(max) = criteria.budget_max {
        if package.price > max {
            return false;
        }
    }

    if let Some(size) = criteria.group_size {
        if size < package.group_size_min || size > package.group_size_max {
            return false;
        }
    }

    true
}

/// Maps the selections to criteria, filters, and orders ascending by price.
/// Price is the only sort key; ties keep catalog order (stable sort).
pub fn recommend(packages: &[Package], selections: &Selections) -> Vec<Package> {
    let criteria = map_selections(selections);
    let mut matched = filter_packages(packages, &criteria);
    matched.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    matched
}

/// Weighted partial-credit score in [0, 1] for ranking a package against the
/// selections when binary filtering is too strict.
///
/// Weights: region 2, category 2, duration 1.5, budget 1.5; group size is
/// not scored. Full weight on an exact or package-side-wildcard match; a
/// query-side "both"/"mixed" selection that misses credits three-quarters,
/// a duration within 2 days of the range midpoint credits half, a price
/// under the range minimum credits two-thirds. With no selections at all
/// the score is 1.0: nothing constrains, everything matches.
pub fn match_score(package: &Package, selections: &Selections) -> f64 {
    let mut score: f64 = 0.0;
    let mut total_weight: f64 = 0.0;

    if let Some(token) = selections.get(SelectionKey::Destination) {
        total_weight += 2.0;
        let exact = mapper::region_for(token)
            .is_some_and(|region| package.region.eq_ignore_ascii_case(region))
            || package.region.eq_ignore_ascii_case("both");
        if exact {
            score += 2.0;
        } else if token.eq_ignore_ascii_case("both") {
            score += 1.5;
        }
    }

    if let Some(token) = selections.get(SelectionKey::TripType) {
        total_weight += 2.0;
        let exact = mapper::category_for(token)
            .is_some_and(|category| package.category.eq_ignore_ascii_case(category))
            || package.category.eq_ignore_ascii_case("mixed");
        if exact {
            score += 2.0;
        } else if token.eq_ignore_ascii_case("mixed") {
            score += 1.5;
        }
    }

    if let Some(token) = selections.get(SelectionKey::Duration) {
        total_weight += 1.5;
        if let Some((min, max)) = mapper::duration_range(token) {
            if package.duration >= min && package.duration <= max {
                score += 1.5;
            } else {
                let midpoint = (min + max) as f64 / 2.0;
                if (package.duration as f64 - midpoint).abs() <= 2.0 {
                    score += 0.75;
                }
            }
        }
    }

    if let Some(token) = selections.get(SelectionKey::Budget) {
        total_weight += 1.5;
        if let Some((min, max)) = mapper::budget_range(token) {
            if package.price >= min && package.price <= max {
                score += 1.5;
            } else if package.price < min {
                score += 1.0;
            }
        }
    }

    if total_weight == 0.0 {
        return 1.0;
    }

    score / total_weight
}
