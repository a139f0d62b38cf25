//! HomeKit accessory categories.

use serde::Serialize;

/// A known accessory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

/// Category table, sorted by ID. 25 is unassigned.
const CATEGORIES: &[(u32, &str)] = &[
    (1, "Other"),
    (2, "Bridge"),
    (3, "Fan"),
    (4, "Garage Door Opener"),
    (5, "Light"),
    (6, "Lock"),
    (7, "Outlet"),
    (8, "Switch"),
    (9, "Thermostat"),
    (10, "Sensor"),
    (11, "Security system"),
    (12, "Door"),
    (13, "Window"),
    (14, "Window covering"),
    (15, "Programmable switch"),
    (16, "Range extender"),
    (17, "IP camera"),
    (18, "Video doorbell"),
    (19, "Air purifier"),
    (20, "Heater"),
    (21, "Air conditioner"),
    (22, "Humidifier"),
    (23, "Dehumidifier"),
    (24, "Apple TV"),
    (26, "Speaker"),
    (27, "Airport"),
    (28, "Sprinkler"),
    (29, "Faucet"),
    (30, "Shower head"),
    (31, "Television"),
    (32, "Target remote"),
];

/// Display name for a category ID, or `None` if the ID is not assigned.
pub fn category_name(id: u32) -> Option<&'static str> {
    CATEGORIES
        .binary_search_by_key(&id, |&(k, _)| k)
        .ok()
        .map(|idx| CATEGORIES[idx].1)
}

pub fn is_known_category(id: u32) -> bool {
    category_name(id).is_some()
}

/// All categories in ascending ID order.
pub fn categories() -> impl Iterator<Item = Category> {
    CATEGORIES.iter().map(|&(id, name)| Category { id, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(CATEGORIES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn lookup_known_and_missing_ids() {
        assert_eq!(category_name(5), Some("Light"));
        assert_eq!(category_name(32), Some("Target remote"));
        assert_eq!(category_name(25), None);
        assert_eq!(category_name(0), None);
        assert_eq!(category_name(33), None);
    }

    #[test]
    fn categories_cover_one_to_thirty_two_except_twenty_five() {
        let ids: Vec<u32> = categories().map(|c| c.id).collect();
        assert_eq!(ids.len(), 31);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&32));
        assert!(!ids.contains(&25));
    }
}
