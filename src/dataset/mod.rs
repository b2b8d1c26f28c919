mod persistence;
mod sample;
mod store;

pub use persistence::load_records;
pub use sample::{sample_records, GROUP1_SAMPLE, GROUP2_SAMPLE};
pub use store::Dataset;
