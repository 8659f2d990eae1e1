use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::record_list;

/// Format output as a table using the tabled crate.
///
/// Scalar fields print as a field/value table; a record list (prioritized
/// debts, recommended programs) prints as its own table underneath.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let list = record_list(value);

            let scalars: Vec<(&str, &Value)> = map
                .iter()
                .filter(|(k, _)| list.map(|(lk, _)| lk != k.as_str()).unwrap_or(true))
                .map(|(k, v)| (k.as_str(), v))
                .collect();

            if !scalars.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &scalars {
                    builder.push_record([*key, &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }

            if let Some((key, records)) = list {
                println!("\n{}:", key);
                print_array_table(records);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers come from the first record
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
