use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::sync::Arc;
use tracing::warn;

use crate::process::utils::{clean_education, clean_job, flag_column, string_column};

pub const CLIENT_COLUMNS: [&str; 7] = [
    "client_id",
    "age",
    "job",
    "marital",
    "education",
    "credit_default",
    "mortgage",
];

/// Project and clean the client table. Columns missing from the input are left out.
pub fn build_client_table(full: &RecordBatch) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(CLIENT_COLUMNS.len());
    let mut cols: Vec<ArrayRef> = Vec::with_capacity(CLIENT_COLUMNS.len());

    for name in CLIENT_COLUMNS {
        if full.column_by_name(name).is_none() {
            warn!(column = name, "client column not in input, leaving it out");
            continue;
        }
        let src = string_column(full, name)?;
        let (ty, col): (DataType, ArrayRef) = match name {
            "job" => {
                let cleaned: StringArray = src.iter().map(|v| v.map(clean_job)).collect();
                (DataType::Utf8, Arc::new(cleaned))
            }
            "education" => {
                let cleaned: StringArray =
                    src.iter().map(|v| v.and_then(clean_education)).collect();
                (DataType::Utf8, Arc::new(cleaned))
            }
            "credit_default" | "mortgage" => (DataType::Int64, Arc::new(flag_column(src, "yes"))),
            _ => (DataType::Utf8, Arc::new(src.clone())),
        };
        fields.push(Field::new(name, ty, true));
        cols.push(col);
    }

    let opts = RecordBatchOptions::new().with_row_count(Some(full.num_rows()));
    RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), cols, &opts)
        .context("building client table")
}
