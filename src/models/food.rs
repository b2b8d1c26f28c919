use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed partition label assigned to every food record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "Group 1")]
    Group1,

    #[serde(rename = "Group 2")]
    Group2,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Group1, Group::Group2];

    /// Display label, e.g. "Group 1".
    pub fn label(&self) -> &'static str {
        match self {
            Group::Group1 => "Group 1",
            Group::Group2 => "Group 2",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A food item with its base weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(rename = "Food")]
    pub food: String,

    #[serde(rename = "Weight")]
    pub weight: f64,

    #[serde(rename = "Group")]
    pub group: Group,
}

impl FoodRecord {
    pub fn new(food: impl Into<String>, weight: f64, group: Group) -> Self {
        Self {
            food: food.into(),
            weight,
            group,
        }
    }

    /// Non-negative, finite weight.
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0 && !self.food.is_empty()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{} ({}): {}", self.food, self.group, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_display() {
        assert_eq!(Group::Group1.to_string(), "Group 1");
        assert_eq!(Group::Group2.to_string(), "Group 2");
    }

    #[test]
    fn test_is_valid() {
        assert!(FoodRecord::new("Poha", 100.0, Group::Group1).is_valid());
        assert!(FoodRecord::new("Water", 0.0, Group::Group1).is_valid());
        assert!(!FoodRecord::new("Bad", -1.0, Group::Group2).is_valid());
        assert!(!FoodRecord::new("Nan", f64::NAN, Group::Group2).is_valid());
        assert!(!FoodRecord::new("", 10.0, Group::Group2).is_valid());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = r#"{"Food": "Rice", "Weight": 100, "Group": "Group 1"}"#;
        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, FoodRecord::new("Rice", 100.0, Group::Group1));

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"Group\":\"Group 1\""));
    }
}
