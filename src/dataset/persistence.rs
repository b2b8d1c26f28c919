use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodRecord;

use super::Dataset;

/// Load food records from a JSON file.
///
/// The file is an array of `{"Food", "Weight", "Group"}` objects. Order is
/// kept since it is the display order of each group.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<FoodRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Dataset::new(load_records(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaleError;
    use crate::models::Group;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_keeps_order() {
        let json = r#"[
            {"Food": "Oats", "Weight": 80, "Group": "Group 1"},
            {"Food": "Milk", "Weight": 200, "Group": "Group 1"},
            {"Food": "Tea", "Weight": 0, "Group": "Group 2"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].food, "Oats");
        assert_eq!(records[2].group, Group::Group2);

        let dataset = Dataset::from_json_file(file.path()).unwrap();
        assert_eq!(dataset.base_weight("Milk").unwrap(), 200.0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = r#"[
            {"Food": "Oats", "Weight": 80, "Group": "Group 1"},
            {"Food": "Oats", "Weight": 90, "Group": "Group 2"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            Dataset::from_json_file(file.path()),
            Err(ScaleError::InvalidDataset(_))
        ));
    }

    #[test]
    fn test_unknown_group_is_json_error() {
        let json = r#"[{"Food": "Oats", "Weight": 80, "Group": "Group 3"}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_records(file.path()), Err(ScaleError::Json(_))));
    }
}
