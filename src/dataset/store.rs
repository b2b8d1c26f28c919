use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{Result, ScaleError};
use crate::models::{FoodRecord, Group};

use super::sample::sample_records;

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Immutable food table, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Records in insertion order.
    records: Vec<FoodRecord>,

    /// Food name -> index into `records`.
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate names and invalid weights.
    pub fn new(records: Vec<FoodRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if !record.is_valid() {
                return Err(ScaleError::InvalidDataset(format!(
                    "invalid record {}",
                    record.debug_string()
                )));
            }
            if index.insert(record.food.clone(), i).is_some() {
                return Err(ScaleError::InvalidDataset(format!(
                    "duplicate food '{}'",
                    record.food
                )));
            }
        }

        Ok(Self { records, index })
    }

    /// The built-in two-group sample table.
    pub fn sample() -> Self {
        let records = sample_records();
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.food.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Get a record by exact food name.
    pub fn get(&self, food: &str) -> Option<&FoodRecord> {
        self.index.get(food).map(|&i| &self.records[i])
    }

    pub fn contains(&self, food: &str) -> bool {
        self.index.contains_key(food)
    }

    fn require(&self, food: &str) -> Result<&FoodRecord> {
        self.get(food)
            .ok_or_else(|| ScaleError::FoodNotFound(food.to_string()))
    }

    /// Group the food belongs to.
    pub fn lookup_group(&self, food: &str) -> Result<Group> {
        self.require(food).map(|r| r.group)
    }

    /// Stored (unscaled) weight of the food.
    pub fn base_weight(&self, food: &str) -> Result<f64> {
        self.require(food).map(|r| r.weight)
    }

    /// All records of a group, in insertion order.
    pub fn records_in_group(&self, group: Group) -> Vec<&FoodRecord> {
        self.records.iter().filter(|r| r.group == group).collect()
    }

    /// Food names in insertion order (the dropdown options).
    pub fn food_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.food.as_str()).collect()
    }

    /// Groups present in the dataset, in order of first appearance.
    pub fn groups(&self) -> Vec<Group> {
        let mut groups = Vec::new();
        for record in &self.records {
            if !groups.contains(&record.group) {
                groups.push(record.group);
            }
        }
        groups
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Closest food name to `input`, for error hints.
    ///
    /// Case-insensitive exact matches win; otherwise the best Jaro-Winkler
    /// score above the threshold.
    pub fn closest_match(&self, input: &str) -> Option<&str> {
        let needle = input.to_lowercase();

        if let Some(r) = self.records.iter().find(|r| r.food.to_lowercase() == needle) {
            return Some(r.food.as_str());
        }

        self.records
            .iter()
            .map(|r| (r.food.as_str(), jaro_winkler(&r.food.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }

    /// Check that `food` is in the dataset.
    ///
    /// The error names the closest match when there is one.
    pub fn ensure_known(&self, food: &str) -> Result<()> {
        if self.contains(food) {
            return Ok(());
        }
        Err(match self.closest_match(food) {
            Some(hint) => ScaleError::FoodNotFound(format!("{} (did you mean '{}'?)", food, hint)),
            None => ScaleError::FoodNotFound(food.to_string()),
        })
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}
