use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::{ScaledRow, ScaledTable, Selection, TableView};
use crate::scaler::constants::ZERO_WEIGHT_SCALE;

/// Scale factor that maps `base_weight` onto `amount`.
///
/// A zero base weight passes weights through unchanged.
#[inline]
pub fn scale_factor(base_weight: f64, amount: f64) -> f64 {
    if base_weight == 0.0 {
        ZERO_WEIGHT_SCALE
    } else {
        amount / base_weight
    }
}

/// Rescale the selected food's group so the selected food weighs `amount`.
///
/// Returns the placeholder when nothing is selected. Every row of the
/// group is kept, including the selected food, in dataset order. Fails with
/// `FoodNotFound` when the selection is not in the dataset.
pub fn rescale(dataset: &Dataset, selection: &Selection) -> Result<TableView> {
    let Some(food) = selection.food.as_deref() else {
        return Ok(TableView::Placeholder);
    };

    let group = dataset.lookup_group(food)?;
    let base = dataset.base_weight(food)?;
    let scale = scale_factor(base, selection.amount);

    let rows = dataset
        .records_in_group(group)
        .into_iter()
        .map(|r| ScaledRow {
            food: r.food.clone(),
            weight: r.weight * scale,
        })
        .collect::<Vec<_>>();

    debug!(food, %group, base, amount = selection.amount, scale, rows = rows.len(), "rescaled group");

    Ok(TableView::Table(ScaledTable {
        group,
        selected: food.to_string(),
        scale,
        rows,
    }))
}
