//! Common test utilities for gearscope-core tests

use gearscope_core::Table;

/// CSV text with `rows` rows of `sensor1`, `sensor2` and a text `phase` column
pub fn sensor_csv(rows: usize) -> String {
    let mut csv = String::from("sensor1,sensor2,phase\n");
    for i in 0..rows {
        let t = i as f64 / 10.0;
        csv.push_str(&format!("{:.4},{:.4},p{}\n", t.sin(), t.cos(), i % 4));
    }
    csv
}

/// Helper function to build a table with `rows` sensor rows
pub fn sensor_table(rows: usize) -> Table {
    Table::from_csv_bytes(sensor_csv(rows).as_bytes()).unwrap()
}
