use crate::error::{Result, ScaleError};

/// Slider lower bound.
pub const AMOUNT_MIN: f64 = 0.0;

/// Slider upper bound.
pub const AMOUNT_MAX: f64 = 200.0;

/// Slider step.
pub const AMOUNT_STEP: f64 = 10.0;

/// Slider starting value.
pub const AMOUNT_DEFAULT: f64 = 100.0;

/// Spacing of labelled slider ticks.
pub const AMOUNT_TICK: f64 = 20.0;

/// Scale applied when the selected food has zero base weight.
pub const ZERO_WEIGHT_SCALE: f64 = 1.0;

/// Shown instead of a table when nothing is selected.
pub const PLACEHOLDER_MESSAGE: &str = "Please select a food item.";

/// Page heading.
pub const PAGE_TITLE: &str = "Food Weight Visualization";

/// Dropdown placeholder.
pub const DROPDOWN_PLACEHOLDER: &str = "Select a food item";

/// Table column headers.
pub const TABLE_HEADERS: [&str; 2] = ["Food", "Weight"];

/// Labelled tick positions: 0, 20, ..., 200.
pub fn slider_ticks() -> Vec<f64> {
    let count = ((AMOUNT_MAX - AMOUNT_MIN) / AMOUNT_TICK).round() as usize;
    (0..=count)
        .map(|i| AMOUNT_MIN + i as f64 * AMOUNT_TICK)
        .collect()
}

/// Check an amount against the slider domain (range and step).
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || !(AMOUNT_MIN..=AMOUNT_MAX).contains(&amount) {
        return Err(ScaleError::InvalidAmount(format!(
            "{} is outside {}..={}",
            amount, AMOUNT_MIN, AMOUNT_MAX
        )));
    }

    let steps = (amount - AMOUNT_MIN) / AMOUNT_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(ScaleError::InvalidAmount(format!(
            "{} is not a multiple of {}",
            amount, AMOUNT_STEP
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_ticks() {
        let ticks = slider_ticks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[1], 20.0);
        assert_eq!(ticks[10], 200.0);
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(100.0).is_ok());
        assert!(validate_amount(200.0).is_ok());

        assert!(validate_amount(-10.0).is_err());
        assert!(validate_amount(210.0).is_err());
        assert!(validate_amount(15.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }
}
