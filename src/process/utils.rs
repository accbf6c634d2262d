use anyhow::{anyhow, Result};
use arrow::{
    array::{Int64Array, StringArray},
    record_batch::RecordBatch,
};

/// Borrow `name` from `batch` as a string column.
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .ok_or_else(|| anyhow!("missing column `{}`", name))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| anyhow!("column `{}` is not a string column", name))
}

/// Map every cell to 1 when it equals `truthy`, 0 otherwise (nulls included).
pub fn flag_column(arr: &StringArray, truthy: &str) -> Int64Array {
    Int64Array::from_iter_values(arr.iter().map(|v| i64::from(v == Some(truthy))))
}

/// Drop dots, then turn dashes into underscores: "blue-collar" → "blue_collar", "admin." → "admin".
pub fn clean_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// Dots become underscores; "unknown" becomes missing.
pub fn clean_education(raw: &str) -> Option<String> {
    let cleaned = raw.replace('.', "_");
    if cleaned == "unknown" {
        None
    } else {
        Some(cleaned)
    }
}
