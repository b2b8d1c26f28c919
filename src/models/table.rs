use serde::{Deserialize, Serialize};

use crate::models::Group;

/// Transient input state: the dropdown value and the slider value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected food name, `None` when the dropdown is cleared.
    pub food: Option<String>,

    /// Target amount for the selected food.
    pub amount: f64,
}

impl Selection {
    pub fn new(food: Option<String>, amount: f64) -> Self {
        Self { food, amount }
    }

    /// Selection with a food picked.
    pub fn food(name: impl Into<String>, amount: f64) -> Self {
        Self {
            food: Some(name.into()),
            amount,
        }
    }

    /// Selection with the dropdown cleared.
    pub fn empty(amount: f64) -> Self {
        Self { food: None, amount }
    }
}

/// A single rescaled row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRow {
    pub food: String,
    pub weight: f64,
}

/// A group's rows rescaled relative to the selected food.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledTable {
    /// Group of the selected food.
    pub group: Group,

    /// The selected food (still present in `rows`).
    pub selected: String,

    /// Factor applied to every base weight.
    pub scale: f64,

    /// Rows in dataset order.
    pub rows: Vec<ScaledRow>,
}

impl ScaledTable {
    /// Caption shown above the table.
    ///
    /// The wording says "excluding" but the selected food is kept in `rows`.
    pub fn caption(&self) -> String {
        format!("Food Weights ({}) excluding {}", self.group, self.selected)
    }

    /// Rescaled weight of a given food, if it is in the table.
    pub fn weight_of(&self, food: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.food == food).map(|r| r.weight)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Output of one rescale.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// No food selected.
    Placeholder,
    Table(ScaledTable),
}

impl TableView {
    pub fn as_table(&self) -> Option<&ScaledTable> {
        match self {
            TableView::Table(t) => Some(t),
            TableView::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableView::Placeholder)
    }
}
