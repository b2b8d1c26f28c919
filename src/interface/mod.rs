pub mod html;
pub mod prompts;
pub mod render;

pub use html::{render_fragment, render_page};
pub use prompts::{parse_amount, prompt_amount, prompt_food, prompt_yes_no};
pub use render::{display_food_list, display_table, format_weight, view_to_json, write_csv};
