mod food;
mod table;

pub use food::{FoodRecord, Group};
pub use table::{ScaledRow, ScaledTable, Selection, TableView};
