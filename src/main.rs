use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};

use portion_scaler_rs::cli::{Cli, Command, OutputFormat};
use portion_scaler_rs::dataset::Dataset;
use portion_scaler_rs::error::Result;
use portion_scaler_rs::interface::{
    display_food_list, display_table, prompt_amount, prompt_food, prompt_yes_no, view_to_json,
    write_csv,
};
use portion_scaler_rs::logging;
use portion_scaler_rs::models::Selection;
use portion_scaler_rs::scaler::constants::{validate_amount, AMOUNT_DEFAULT};
use portion_scaler_rs::scaler::rescale;
use portion_scaler_rs::server::{self, ServerConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let dataset = load_dataset(cli.data.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Serve { bind } => cmd_serve(ServerConfig { bind }, dataset),
        Command::Show {
            food,
            amount,
            format,
        } => cmd_show(&dataset, food, amount, format),
        Command::Interactive => cmd_interactive(&dataset),
        Command::Foods => {
            display_food_list(&dataset);
            Ok(())
        }
    }
}

/// Built-in sample, or the records in `path`.
fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let dataset = match path {
        Some(path) => {
            let dataset = Dataset::from_json_file(path)?;
            info!(path = %path.display(), foods = dataset.len(), "loaded dataset");
            dataset
        }
        None => Dataset::sample(),
    };
    Ok(dataset)
}

/// Serve the page until interrupted.
fn cmd_serve(config: ServerConfig, dataset: Dataset) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(config, Arc::new(dataset)))
}

/// Print a single rescaled view.
fn cmd_show(
    dataset: &Dataset,
    food: Option<String>,
    amount: f64,
    format: OutputFormat,
) -> Result<()> {
    // Without a food the amount is ignored, as on the page.
    if let Some(name) = food.as_deref() {
        dataset.ensure_known(name)?;
        validate_amount(amount)?;
    }

    let view = rescale(dataset, &Selection::new(food, amount))?;

    match format {
        OutputFormat::Table => display_table(&view),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view_to_json(&view))?);
        }
        OutputFormat::Csv => write_csv(&view, io::stdout().lock())?,
    }

    Ok(())
}

/// Prompt for food and amount repeatedly, printing each table.
fn cmd_interactive(dataset: &Dataset) -> Result<()> {
    println!("Loaded {} foods", dataset.len());

    let mut amount = AMOUNT_DEFAULT;
    loop {
        let food = prompt_food(dataset)?;
        amount = prompt_amount(amount)?;
        debug!(?food, amount, "interactive selection");

        let view = rescale(dataset, &Selection::new(food, amount))?;
        println!();
        display_table(&view);
        println!();

        if !prompt_yes_no("Rescale again?", true)? {
            break;
        }
    }

    Ok(())
}
