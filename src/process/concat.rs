use anyhow::{Context, Result};
use arrow::{
    array::{new_null_array, ArrayRef},
    compute::concat_batches,
    datatypes::{DataType, Field, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::sync::Arc;

/// Stack `batches` row-wise. Columns are matched by name; the result carries the union
/// of all names in first-seen order, and a batch lacking a column contributes nulls.
///
/// All inputs are expected to be string columns, as produced by the loader.
pub fn concat_by_name(batches: &[RecordBatch]) -> Result<RecordBatch> {
    let mut names: Vec<String> = Vec::new();
    for batch in batches {
        for field in batch.schema().fields() {
            if !names.iter().any(|n| n == field.name()) {
                names.push(field.name().clone());
            }
        }
    }

    let schema = Arc::new(Schema::new(
        names
            .iter()
            .map(|n| Field::new(n, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));

    let mut aligned = Vec::with_capacity(batches.len());
    for batch in batches {
        let cols: Vec<ArrayRef> = names
            .iter()
            .map(|n| match batch.column_by_name(n) {
                Some(col) => col.clone(),
                None => new_null_array(&DataType::Utf8, batch.num_rows()),
            })
            .collect();
        let opts = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
        aligned.push(
            RecordBatch::try_new_with_options(schema.clone(), cols, &opts)
                .context("aligning batch columns")?,
        );
    }

    concat_batches(&schema, &aligned).context("concatenating batches")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::utils::string_column;
    use arrow::array::{Array, StringArray};

    fn batch(cols: &[(&str, Vec<Option<&str>>)]) -> RecordBatch {
        let schema = Arc::new(Schema::new(
            cols.iter()
                .map(|(n, _)| Field::new(*n, DataType::Utf8, true))
                .collect::<Vec<_>>(),
        ));
        let arrays: Vec<ArrayRef> = cols
            .iter()
            .map(|(_, v)| Arc::new(StringArray::from(v.clone())) as ArrayRef)
            .collect();
        RecordBatch::try_new(schema, arrays).unwrap()
    }

    #[test]
    fn same_schema_stacks_rows() -> Result<()> {
        let a = batch(&[("client_id", vec![Some("1")]), ("job", vec![Some("admin.")])]);
        let b = batch(&[("client_id", vec![Some("2")]), ("job", vec![Some("services")])]);
        let out = concat_by_name(&[a, b])?;
        assert_eq!(out.num_rows(), 2);
        assert_eq!(string_column(&out, "job")?.value(1), "services");
        Ok(())
    }

    #[test]
    fn columns_union_by_name_with_null_fill() -> Result<()> {
        let a = batch(&[("client_id", vec![Some("1")]), ("job", vec![Some("admin.")])]);
        // reordered columns plus one the first batch doesn't have
        let b = batch(&[
            ("month", vec![Some("may")]),
            ("client_id", vec![Some("2")]),
        ]);
        let out = concat_by_name(&[a, b])?;

        let names: Vec<String> = out
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();
        assert_eq!(names, vec!["client_id", "job", "month"]);

        let ids = string_column(&out, "client_id")?;
        assert_eq!((ids.value(0), ids.value(1)), ("1", "2"));
        assert!(string_column(&out, "job")?.is_null(1));
        assert!(string_column(&out, "month")?.is_null(0));
        assert_eq!(string_column(&out, "month")?.value(1), "may");
        Ok(())
    }
}
