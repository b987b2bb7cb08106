// Sort directive, header toggle and the sorted projection

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::Route;
use super::compare::{compare_address_and_mask, compare_addresses, compare_labels};

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[serde(alias = "destinationAddress")]
    Address,
    Gateway,
    #[serde(alias = "interfaceName")]
    Interface,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Address, SortField::Gateway, SortField::Interface];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Address => "address",
            SortField::Gateway => "gateway",
            SortField::Interface => "interface",
        }
    }

    /// Ascending comparison of two routes on this column
    pub fn compare(&self, a: &Route, b: &Route) -> Ordering {
        match self {
            SortField::Address => compare_address_and_mask(a, b),
            SortField::Gateway => compare_addresses(&a.gateway, &b.gateway),
            SortField::Interface => compare_labels(&a.interface, &b.interface),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortField(pub String);

impl fmt::Display for UnknownSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort field: {}", self.0)
    }
}

impl std::error::Error for UnknownSortField {}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" | "destinationAddress" => Ok(SortField::Address),
            "gateway" => Ok(SortField::Gateway),
            "interface" | "interfaceName" => Ok(SortField::Interface),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Glyph shown next to the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Active column and direction. `field: None` keeps insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortDirective {
    #[cfg(test)]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortDirective {
            field: Some(field),
            direction,
        }
    }

    /// Header activation. A new column starts ascending, the active column
    /// flips direction; there is no way back to the unsorted state.
    pub fn toggle(&mut self, field: SortField) {
        let direction = match (self.field, self.direction) {
            (Some(active), SortDirection::Asc) if active == field => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.field = Some(field);
        self.direction = direction;
    }

    /// Direction of `field` if it is the active column
    pub fn direction_of(&self, field: SortField) -> Option<SortDirection> {
        (self.field == Some(field)).then_some(self.direction)
    }
}

/// Ordered rows for `directive`, computed from scratch.
pub fn sorted_projection(routes: &[Route], directive: &SortDirective) -> Vec<Route> {
    let rows = routes.to_vec();
    let Some(field) = directive.field else {
        return rows;
    };
    let direction = directive.direction;

    stable_sort_by(rows, &mut |a: &Route, b: &Route| direction.apply(field.compare(a, b)))
}

/// Stable merge sort that tolerates comparators which are not a total order.
///
/// `slice::sort_by` may panic on such comparators, and the lexical fallback
/// for malformed addresses makes ours intransitive.
pub fn stable_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = stable_sort_by(left, compare);
    let right = stable_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Equal elements are taken from the left run first
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::sample_routes;

    fn destinations(rows: &[Route]) -> Vec<String> {
        rows.iter().map(Route::destination).collect()
    }

    fn ids(rows: &[Route]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_state_machine() {
        let mut directive = SortDirective::default();
        assert_eq!(directive.field, None);

        directive.toggle(SortField::Gateway);
        assert_eq!(directive, SortDirective::new(SortField::Gateway, SortDirection::Asc));

        directive.toggle(SortField::Gateway);
        assert_eq!(directive, SortDirective::new(SortField::Gateway, SortDirection::Desc));

        directive.toggle(SortField::Interface);
        assert_eq!(directive, SortDirective::new(SortField::Interface, SortDirection::Asc));
    }

    #[test]
    fn test_toggle_never_returns_to_unsorted() {
        let mut directive = SortDirective::default();
        let mut seen = Vec::new();
        for _ in 0..6 {
            directive.toggle(SortField::Address);
            assert!(directive.field.is_some());
            seen.push(directive.direction);
        }
        assert_eq!(
            seen,
            vec![
                SortDirection::Asc,
                SortDirection::Desc,
                SortDirection::Asc,
                SortDirection::Desc,
                SortDirection::Asc,
                SortDirection::Desc,
            ]
        );
    }

    #[test]
    fn test_descending_click_on_other_column_resets_to_ascending() {
        let mut directive = SortDirective::new(SortField::Address, SortDirection::Desc);
        directive.toggle(SortField::Gateway);
        assert_eq!(directive, SortDirective::new(SortField::Gateway, SortDirection::Asc));
    }

    #[test]
    fn test_unsorted_keeps_insertion_order() {
        let routes = sample_routes();
        let rows = sorted_projection(&routes, &SortDirective::default());
        assert_eq!(rows, routes);
    }

    #[test]
    fn test_sample_sorted_by_destination() {
        let routes = sample_routes();
        let mut directive = SortDirective::default();

        directive.toggle(SortField::Address);
        let ascending = destinations(&sorted_projection(&routes, &directive));
        assert_eq!(
            ascending,
            vec![
                "0.0.0.0/0",
                "10.0.0.0/8",
                "10.1.30.0/24",
                "172.16.0.0/16",
                "192.168.1.0/24",
                "193.0.174.0/24",
                "193.0.175.0/25",
                "193.0.175.2/32",
            ]
        );

        directive.toggle(SortField::Address);
        let descending = destinations(&sorted_projection(&routes, &directive));
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_gateway_sort_is_numeric_and_stable() {
        let routes = sample_routes();
        let directive = SortDirective::new(SortField::Gateway, SortDirection::Asc);
        let rows = sorted_projection(&routes, &directive);
        // Directly connected routes first, in insertion order; 193.0.174.10 after 193.0.174.1
        assert_eq!(ids(&rows), vec!["2", "3", "4", "7", "8", "1", "6", "5"]);
    }

    #[test]
    fn test_descending_keeps_ties_in_insertion_order() {
        let routes = sample_routes();
        let directive = SortDirective::new(SortField::Gateway, SortDirection::Desc);
        let rows = sorted_projection(&routes, &directive);
        assert_eq!(ids(&rows), vec!["5", "1", "6", "8", "2", "3", "4", "7"]);
    }

    #[test]
    fn test_interface_sort_is_stable() {
        let routes = vec![
            Route::new("a", "10.0.0.0", 8, "0.0.0.0", "wan"),
            Route::new("b", "10.0.0.0", 8, "0.0.0.0", "lan"),
            Route::new("c", "10.0.0.0", 8, "0.0.0.0", "wan"),
            Route::new("d", "10.0.0.0", 8, "0.0.0.0", "lan"),
        ];
        let directive = SortDirective::new(SortField::Interface, SortDirection::Asc);
        let rows = sorted_projection(&routes, &directive);
        assert_eq!(ids(&rows), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_mask_orders_equal_destinations() {
        let routes = vec![
            Route::new("narrow", "10.0.0.0", 24, "0.0.0.0", "eth0"),
            Route::new("wide", "10.0.0.0", 8, "0.0.0.0", "eth0"),
        ];
        let directive = SortDirective::new(SortField::Address, SortDirection::Asc);
        assert_eq!(ids(&sorted_projection(&routes, &directive)), vec!["wide", "narrow"]);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let routes = sample_routes();
        let directive = SortDirective::new(SortField::Interface, SortDirection::Desc);
        assert_eq!(
            sorted_projection(&routes, &directive),
            sorted_projection(&routes, &directive)
        );
    }

    #[test]
    fn test_malformed_addresses_do_not_panic() {
        // Mixed numeric and lexical comparisons form a cycle here
        let routes = vec![
            Route::new("1", "10.0.0.0", 8, "9", "eth0"),
            Route::new("2", "9.0.0.0", 8, "10.0.0.0", "eth0"),
            Route::new("3", "9", 8, "9.0.0.0", "eth0"),
            Route::new("4", "not.an.ip", 8, "garbage", "eth0"),
            Route::new("5", "", 0, "", "eth0"),
        ];
        for field in SortField::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let rows = sorted_projection(&routes, &SortDirective::new(field, direction));
                assert_eq!(rows.len(), routes.len());
            }
        }
    }

    #[test]
    fn test_stable_sort_by_with_inconsistent_comparator() {
        let items: Vec<u32> = (0..50).collect();
        let mut calls = 0u32;
        let sorted = stable_sort_by(items, &mut |_: &u32, _: &u32| {
            calls += 1;
            if calls % 3 == 0 { Ordering::Less } else { Ordering::Greater }
        });
        let mut check = sorted.clone();
        check.sort();
        assert_eq!(check, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("address".parse::<SortField>(), Ok(SortField::Address));
        assert_eq!("destinationAddress".parse::<SortField>(), Ok(SortField::Address));
        assert_eq!("interfaceName".parse::<SortField>(), Ok(SortField::Interface));
        assert!("metric".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
