use crate::models::TableView;
use crate::scaler::constants::{
    slider_ticks, AMOUNT_DEFAULT, AMOUNT_MAX, AMOUNT_MIN, AMOUNT_STEP, DROPDOWN_PLACEHOLDER,
    PAGE_TITLE, PLACEHOLDER_MESSAGE, TABLE_HEADERS,
};

use super::render::format_weight;

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML for the table region.
pub fn render_fragment(view: &TableView) -> String {
    let table = match view {
        TableView::Placeholder => {
            return format!("<div class=\"notice\">{}</div>", escape(PLACEHOLDER_MESSAGE));
        }
        TableView::Table(t) => t,
    };

    let mut html = String::new();
    html.push_str("<table class=\"weights\">\n");
    html.push_str(&format!("<caption>{}</caption>\n", escape(&table.caption())));
    html.push_str(&format!(
        "<thead><tr><th>{}</th><th>{}</th></tr></thead>\n<tbody>\n",
        TABLE_HEADERS[0], TABLE_HEADERS[1]
    ));
    for row in &table.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&row.food),
            format_weight(row.weight)
        ));
    }
    html.push_str("</tbody>\n</table>");
    html
}

const SCRIPT: &str = r#"
const dropdown = document.getElementById('food-dropdown');
const slider = document.getElementById('amount-slider');
const output = document.getElementById('amount-value');
const container = document.getElementById('table-container');

let latestRequest = 0;

async function refresh() {
  const request = ++latestRequest;
  output.textContent = slider.value;
  const params = new URLSearchParams({ food: dropdown.value, amount: slider.value });
  try {
    const response = await fetch('/table?' + params.toString());
    if (request !== latestRequest) return;
    if (!response.ok) {
      const body = await response.json().catch(() => ({}));
      if (request !== latestRequest) return;
      container.textContent = body.error || ('Request failed: ' + response.status);
      return;
    }
    const html = await response.text();
    if (request !== latestRequest) return;
    container.innerHTML = html;
  } catch (err) {
    if (request === latestRequest) container.textContent = 'Request failed: ' + err;
  }
}

dropdown.addEventListener('change', refresh);
slider.addEventListener('input', refresh);
"#;

const STYLE: &str = r#"
body { font-family: sans-serif; }
.controls { width: 80%; margin: auto; text-align: center; padding: 20px; }
#food-dropdown { width: 50%; }
#amount-slider { width: 100%; }
table.weights { margin: auto; border-collapse: collapse; }
table.weights th { background: lightblue; text-align: left; padding: 4px 12px; }
table.weights td { background: white; text-align: left; padding: 4px 12px; }
.notice { text-align: center; }
"#;

/// The full page: dropdown, slider and the pre-rendered table region.
pub fn render_page(food_names: &[&str], initial: &TableView) -> String {
    let mut options = format!("<option value=\"\">{}</option>\n", escape(DROPDOWN_PLACEHOLDER));
    for name in food_names {
        let name = escape(name);
        options.push_str(&format!("<option value=\"{name}\">{name}</option>\n"));
    }

    let ticks: String = slider_ticks()
        .into_iter()
        .map(|t| {
            let t = format_weight(t);
            format!("<option value=\"{t}\" label=\"{t}\"></option>")
        })
        .collect();

    format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
<div class=\"controls\">
<select id=\"food-dropdown\">
{options}</select>
<input type=\"range\" id=\"amount-slider\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" list=\"amount-ticks\">
<datalist id=\"amount-ticks\">{ticks}</datalist>
<output id=\"amount-value\">{value}</output>
</div>
<div id=\"table-container\">{initial}</div>
<script>{SCRIPT}</script>
</body>
</html>
",
        title = escape(PAGE_TITLE),
        min = format_weight(AMOUNT_MIN),
        max = format_weight(AMOUNT_MAX),
        step = format_weight(AMOUNT_STEP),
        value = format_weight(AMOUNT_DEFAULT),
        initial = render_fragment(initial),
    )
}
