//! Weight classes and division keys

use serde::{Deserialize, Serialize};

use crate::core::types::Gender;

/// A sanctioned weight class (upper limit in kg)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightClass {
    pub weight: u32,
    pub name: &'static str,
}

pub const MEN_WEIGHT_CLASSES: [WeightClass; 9] = [
    WeightClass { weight: 52, name: "Strawweight" },
    WeightClass { weight: 57, name: "Flyweight" },
    WeightClass { weight: 61, name: "Bantamweight" },
    WeightClass { weight: 66, name: "Featherweight" },
    WeightClass { weight: 70, name: "Lightweight" },
    WeightClass { weight: 77, name: "Welterweight" },
    WeightClass { weight: 84, name: "Middleweight" },
    WeightClass { weight: 93, name: "Light Heavyweight" },
    WeightClass { weight: 120, name: "Heavyweight" },
];

pub const WOMEN_WEIGHT_CLASSES: [WeightClass; 4] = [
    WeightClass { weight: 52, name: "Strawweight" },
    WeightClass { weight: 57, name: "Flyweight" },
    WeightClass { weight: 61, name: "Bantamweight" },
    WeightClass { weight: 66, name: "Featherweight" },
];

/// All weight classes contested by a gender
pub fn weight_classes(gender: Gender) -> &'static [WeightClass] {
    match gender {
        Gender::Men => &MEN_WEIGHT_CLASSES,
        Gender::Women => &WOMEN_WEIGHT_CLASSES,
    }
}

/// Display name of a weight class, if it is sanctioned for that gender
pub fn weight_class_name(gender: Gender, weight: u32) -> Option<&'static str> {
    weight_classes(gender)
        .iter()
        .find(|wc| wc.weight == weight)
        .map(|wc| wc.name)
}

/// The (gender, weight class) partition fighters are ranked and matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DivisionKey {
    pub gender: Gender,
    pub weight_class: u32,
}

impl DivisionKey {
    /// Build a key for a sanctioned division.
    ///
    /// # Panics
    /// Panics on a weight class that does not exist for the gender. Roster
    /// data never contains one; reaching this is a caller defect.
    pub fn new(gender: Gender, weight_class: u32) -> Self {
        assert!(
            weight_class_name(gender, weight_class).is_some(),
            "unknown division: {} {}kg",
            gender.label(),
            weight_class
        );
        Self { gender, weight_class }
    }

    /// Non-panicking constructor for untrusted input
    pub fn checked(gender: Gender, weight_class: u32) -> Option<Self> {
        weight_class_name(gender, weight_class).map(|_| Self { gender, weight_class })
    }

    pub fn name(&self) -> &'static str {
        weight_class_name(self.gender, self.weight_class).unwrap_or("Catchweight")
    }

    /// Every sanctioned division, men first, lightest first
    pub fn all() -> impl Iterator<Item = DivisionKey> {
        [Gender::Men, Gender::Women].into_iter().flat_map(|gender| {
            weight_classes(gender)
                .iter()
                .map(move |wc| DivisionKey { gender, weight_class: wc.weight })
        })
    }
}

impl std::fmt::Display for DivisionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.gender {
            Gender::Men => write!(f, "{}", self.name()),
            Gender::Women => write!(f, "Women's {}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_class_lookup() {
        assert_eq!(weight_class_name(Gender::Men, 70), Some("Lightweight"));
        assert_eq!(weight_class_name(Gender::Women, 61), Some("Bantamweight"));
        assert_eq!(weight_class_name(Gender::Women, 120), None);
    }

    #[test]
    fn test_all_divisions_count() {
        assert_eq!(DivisionKey::all().count(), 13);
    }

    #[test]
    fn test_checked_rejects_unknown() {
        assert!(DivisionKey::checked(Gender::Men, 71).is_none());
        assert!(DivisionKey::checked(Gender::Men, 77).is_some());
    }

    #[test]
    #[should_panic(expected = "unknown division")]
    fn test_unknown_division_panics() {
        let _ = DivisionKey::new(Gender::Women, 93);
    }

    #[test]
    fn test_display_marks_womens_divisions() {
        assert_eq!(DivisionKey::new(Gender::Men, 84).to_string(), "Middleweight");
        assert_eq!(DivisionKey::new(Gender::Women, 52).to_string(), "Women's Strawweight");
    }
}
