use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::process::date_parser::contact_date;
use crate::process::utils::{flag_column, string_column};

pub const CAMPAIGN_COLUMNS: [&str; 7] = [
    "client_id",
    "number_contacts",
    "contact_duration",
    "previous_campaign_contacts",
    "previous_outcome",
    "campaign_outcome",
    "last_contact_date",
];

/// Project and clean the campaign table; `day` + `month` collapse into `last_contact_date`.
pub fn build_campaign_table(full: &RecordBatch, year: i32) -> Result<RecordBatch> {
    let client_id = string_column(full, "client_id")?;
    let number_contacts = string_column(full, "number_contacts")?;
    let contact_duration = string_column(full, "contact_duration")?;
    let previous_contacts = string_column(full, "previous_campaign_contacts")?;
    let previous_outcome = string_column(full, "previous_outcome")?;
    let campaign_outcome = string_column(full, "campaign_outcome")?;
    let day = string_column(full, "day")?;
    let month = string_column(full, "month")?;

    let dates: StringArray = month
        .iter()
        .zip(day.iter())
        .enumerate()
        .map(|(row, (m, d))| {
            contact_date(year, m, d).with_context(|| format!("last_contact_date at row {}", row))
        })
        .collect::<Result<_>>()?;

    let schema = Schema::new(vec![
        Field::new(CAMPAIGN_COLUMNS[0], DataType::Utf8, true),
        Field::new(CAMPAIGN_COLUMNS[1], DataType::Utf8, true),
        Field::new(CAMPAIGN_COLUMNS[2], DataType::Utf8, true),
        Field::new(CAMPAIGN_COLUMNS[3], DataType::Utf8, true),
        Field::new(CAMPAIGN_COLUMNS[4], DataType::Int64, false),
        Field::new(CAMPAIGN_COLUMNS[5], DataType::Int64, false),
        Field::new(CAMPAIGN_COLUMNS[6], DataType::Utf8, true),
    ]);
    let cols: Vec<ArrayRef> = vec![
        Arc::new(client_id.clone()),
        Arc::new(number_contacts.clone()),
        Arc::new(contact_duration.clone()),
        Arc::new(previous_contacts.clone()),
        Arc::new(flag_column(previous_outcome, "success")),
        Arc::new(flag_column(campaign_outcome, "yes")),
        Arc::new(dates),
    ];

    RecordBatch::try_new(Arc::new(schema), cols).context("building campaign table")
}
