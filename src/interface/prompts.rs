use dialoguer::{Confirm, Input, Select};

use crate::dataset::Dataset;
use crate::error::{Result, ScaleError};
use crate::scaler::constants::{validate_amount, AMOUNT_MAX, AMOUNT_MIN, AMOUNT_STEP};

use super::render::format_weight;

const NO_SELECTION: &str = "(none)";

/// Prompt for a food from the dataset. The first entry clears the selection.
pub fn prompt_food(dataset: &Dataset) -> Result<Option<String>> {
    let names = dataset.food_names();

    let mut options = Vec::with_capacity(names.len() + 1);
    options.push(NO_SELECTION);
    options.extend(names.iter().copied());

    let selection = Select::new()
        .with_prompt("Select a food item")
        .items(&options)
        .default(0)
        .interact()?;

    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(names[selection - 1].to_string()))
    }
}

/// Prompt for the target amount, constrained like the page slider.
///
/// Re-prompts until the input is a valid slider value.
pub fn prompt_amount(current: f64) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!(
                "Target amount ({}-{}, step {})",
                format_weight(AMOUNT_MIN),
                format_weight(AMOUNT_MAX),
                format_weight(AMOUNT_STEP)
            ))
            .default(format_weight(current))
            .interact_text()?;

        match parse_amount(&input) {
            Ok(amount) => return Ok(amount),
            Err(e) => println!("{}", e),
        }
    }
}

/// Parse and validate a typed amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ScaleError::InvalidAmount(format!("'{}' is not a number", input.trim())))?;
    validate_amount(amount)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
