use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::interface::{parse_amount, render_fragment, render_page, view_to_json};
use crate::models::{Selection, TableView};
use crate::scaler::constants::AMOUNT_DEFAULT;
use crate::scaler::rescale;

/// Query string of the table endpoints: the current control values.
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    /// Dropdown value; empty means nothing selected.
    pub food: Option<String>,

    /// Slider value as sent; missing or empty means the slider's starting value.
    pub amount: Option<String>,
}

impl TableQuery {
    /// Turn the controls into a selection.
    ///
    /// With no food selected the amount is not looked at. Otherwise it must
    /// be a slider value. Food names must come from the dataset (the
    /// dropdown is built from it).
    pub fn into_selection(self) -> Result<Selection> {
        let Some(food) = self.food.filter(|f| !f.is_empty()) else {
            return Ok(Selection::empty(AMOUNT_DEFAULT));
        };

        let amount = match self.amount.as_deref().map(str::trim) {
            None | Some("") => AMOUNT_DEFAULT,
            Some(raw) => parse_amount(raw)?,
        };
        Ok(Selection::new(Some(food), amount))
    }
}

fn view_for(dataset: &Dataset, query: TableQuery) -> Result<TableView> {
    let selection = query.into_selection()?;
    rescale(dataset, &selection)
}

/// GET / - the page.
async fn page_handler(State(dataset): State<Arc<Dataset>>) -> Html<String> {
    Html(render_page(&dataset.food_names(), &TableView::Placeholder))
}

/// GET /table - the table region as an HTML fragment.
async fn table_handler(
    State(dataset): State<Arc<Dataset>>,
    Query(query): Query<TableQuery>,
) -> Result<Html<String>> {
    let view = view_for(&dataset, query)?;
    Ok(Html(render_fragment(&view)))
}

/// GET /api/table - the same view as JSON.
async fn api_table_handler(
    State(dataset): State<Arc<Dataset>>,
    Query(query): Query<TableQuery>,
) -> Result<Json<serde_json::Value>> {
    let view = view_for(&dataset, query)?;
    Ok(Json(view_to_json(&view)))
}

/// GET /api/foods - dropdown options.
async fn foods_handler(State(dataset): State<Arc<Dataset>>) -> Json<Vec<String>> {
    Json(dataset.food_names().into_iter().map(str::to_owned).collect())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Build the application router over a shared read-only dataset.
pub fn router(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/table", get(table_handler))
        .route("/api/table", get(api_table_handler))
        .route("/api/foods", get(foods_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaleError;

    #[test]
    fn test_query_defaults() {
        let selection = TableQuery::default().into_selection().unwrap();
        assert_eq!(selection, Selection::empty(AMOUNT_DEFAULT));
    }

    #[test]
    fn test_query_empty_food_is_none() {
        let query = TableQuery {
            food: Some(String::new()),
            amount: Some("40".to_string()),
        };
        assert!(query.into_selection().unwrap().food.is_none());
    }

    #[test]
    fn test_query_without_food_skips_amount_check() {
        for amount in ["15", "250", "abc"] {
            let query = TableQuery {
                food: None,
                amount: Some(amount.to_string()),
            };
            let selection = query.into_selection().unwrap();
            assert!(selection.food.is_none());
        }
    }

    #[test]
    fn test_query_rejects_off_slider_amount() {
        let query = TableQuery {
            food: Some("Poha".to_string()),
            amount: Some("250".to_string()),
        };
        assert!(matches!(
            query.into_selection(),
            Err(ScaleError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_query_rejects_non_numeric_amount() {
        let query = TableQuery {
            food: Some("Poha".to_string()),
            amount: Some("abc".to_string()),
        };
        assert!(matches!(
            query.into_selection(),
            Err(ScaleError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_query_empty_amount_uses_default() {
        let query = TableQuery {
            food: Some("Rice".to_string()),
            amount: Some(String::new()),
        };
        assert_eq!(
            query.into_selection().unwrap(),
            Selection::food("Rice", AMOUNT_DEFAULT)
        );
    }
}
