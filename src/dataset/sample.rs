use crate::models::{FoodRecord, Group};

/// Group 1 sample rows, in display order.
pub const GROUP1_SAMPLE: [(&str, f64); 7] = [
    ("Poha", 100.0),
    ("Paneer", 50.0),
    ("Rice", 100.0),
    ("A", 40.0),
    ("B", 50.0),
    ("C", 60.0),
    ("D", 70.0),
];

/// Group 2 sample rows, in display order.
pub const GROUP2_SAMPLE: [(&str, f64); 7] = [
    ("E", 100.0),
    ("F", 50.0),
    ("G", 100.0),
    ("Z", 40.0),
    ("H", 50.0),
    ("I", 60.0),
    ("J", 70.0),
];

fn group_records(rows: &[(&str, f64)], group: Group) -> Vec<FoodRecord> {
    rows.iter()
        .map(|&(name, weight)| FoodRecord::new(name, weight, group))
        .collect()
}

/// Both sample groups concatenated (Group 1 first).
pub fn sample_records() -> Vec<FoodRecord> {
    let mut records = group_records(&GROUP1_SAMPLE, Group::Group1);
    records.extend(group_records(&GROUP2_SAMPLE, Group::Group2));
    records
}
