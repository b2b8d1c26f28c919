use std::io::Write;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::TableView;
use crate::scaler::constants::{PLACEHOLDER_MESSAGE, TABLE_HEADERS};

/// Format a weight with at most two decimals and no trailing zeros.
pub fn format_weight(weight: f64) -> String {
    let s = format!("{:.2}", weight);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Display a view as an aligned terminal table.
pub fn display_table(view: &TableView) {
    print!("{}", table_text(view));
}

/// Terminal text for a view.
pub fn table_text(view: &TableView) -> String {
    let table = match view {
        TableView::Placeholder => return format!("{}\n", PLACEHOLDER_MESSAGE),
        TableView::Table(t) => t,
    };

    let weights: Vec<String> = table.rows.iter().map(|r| format_weight(r.weight)).collect();

    // Find max widths for alignment
    let name_width = table
        .rows
        .iter()
        .map(|r| r.food.len())
        .chain(std::iter::once(TABLE_HEADERS[0].len()))
        .max()
        .unwrap_or(4);
    let weight_width = weights
        .iter()
        .map(|w| w.len())
        .chain(std::iter::once(TABLE_HEADERS[1].len()))
        .max()
        .unwrap_or(6);

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", table.caption()));
    out.push_str(&format!(
        "{:<nw$}  {:>ww$}\n",
        TABLE_HEADERS[0],
        TABLE_HEADERS[1],
        nw = name_width,
        ww = weight_width
    ));
    out.push_str(&format!("{}  {}\n", "-".repeat(name_width), "-".repeat(weight_width)));

    for (row, weight) in table.rows.iter().zip(&weights) {
        out.push_str(&format!(
            "{:<nw$}  {:>ww$}\n",
            row.food,
            weight,
            nw = name_width,
            ww = weight_width
        ));
    }

    out
}

/// JSON representation of a view (also served by `/api/table`).
pub fn view_to_json(view: &TableView) -> serde_json::Value {
    match view {
        TableView::Placeholder => serde_json::json!({
            "kind": "placeholder",
            "message": PLACEHOLDER_MESSAGE,
        }),
        TableView::Table(table) => serde_json::json!({
            "kind": "table",
            "group": table.group,
            "selected": table.selected,
            "scale": table.scale,
            "caption": table.caption(),
            "rows": table.rows,
        }),
    }
}

/// Write a view as CSV. The placeholder writes the message as a single record.
pub fn write_csv<W: Write>(view: &TableView, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match view {
        TableView::Placeholder => {
            wtr.write_record([PLACEHOLDER_MESSAGE])?;
        }
        TableView::Table(table) => {
            wtr.write_record(TABLE_HEADERS)?;
            for row in &table.rows {
                wtr.write_record([row.food.as_str(), format_weight(row.weight).as_str()])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Display every food grouped, with base weights.
pub fn display_food_list(dataset: &Dataset) {
    if dataset.is_empty() {
        println!("No foods loaded.");
        return;
    }

    for group in dataset.groups() {
        let records = dataset.records_in_group(group);
        println!();
        println!("=== {} ({} items) ===", group, records.len());
        for record in records {
            println!("  {} - {}", record.food, format_weight(record.weight));
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Selection;
    use crate::scaler::rescale;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(200.0), "200");
        assert_eq!(format_weight(12.5), "12.5");
        assert_eq!(format_weight(1.0 / 3.0), "0.33");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn test_table_text() {
        let dataset = Dataset::sample();
        let view = rescale(&dataset, &Selection::food("E", 50.0)).unwrap();
        let text = table_text(&view);

        assert!(text.starts_with("=== Food Weights (Group 2) excluding E ===\n"));
        assert!(text.contains("Food  Weight\n"));
        assert!(text.contains("Z         20\n"));
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(table_text(&TableView::Placeholder), "Please select a food item.\n");
    }

    #[test]
    fn test_view_to_json() {
        let dataset = Dataset::sample();
        let view = rescale(&dataset, &Selection::food("Poha", 200.0)).unwrap();
        let json = view_to_json(&view);

        assert_eq!(json["kind"], "table");
        assert_eq!(json["group"], "Group 1");
        assert_eq!(json["caption"], "Food Weights (Group 1) excluding Poha");
        assert_eq!(json["rows"][1]["food"], "Paneer");
        assert_eq!(json["rows"][1]["weight"], 100.0);

        let placeholder = view_to_json(&TableView::Placeholder);
        assert_eq!(placeholder["kind"], "placeholder");
    }

    #[test]
    fn test_write_csv() {
        let dataset = Dataset::sample();
        let view = rescale(&dataset, &Selection::food("E", 50.0)).unwrap();

        let mut buf = Vec::new();
        write_csv(&view, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Food,Weight"));
        assert_eq!(lines.next(), Some("E,50"));
        assert_eq!(lines.next(), Some("F,25"));
    }

    #[test]
    fn test_display_rounds_but_json_keeps_full_value() {
        let dataset = Dataset::sample();
        let view = rescale(&dataset, &Selection::food("D", 10.0)).unwrap();

        assert!(table_text(&view).contains("Poha     14.29\n"));

        let json = view_to_json(&view);
        let poha = json["rows"][0]["weight"].as_f64().unwrap();
        assert!((poha - 100.0 / 7.0).abs() < 1e-12);
    }
}
