pub mod cli;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod scaler;
pub mod server;

pub use dataset::Dataset;
pub use error::{Result, ScaleError};
pub use models::{FoodRecord, Group, ScaledRow, ScaledTable, Selection, TableView};
pub use scaler::rescale;
