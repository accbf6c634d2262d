use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;

pub const ECONOMICS_COLUMNS: [&str; 3] = ["client_id", "cons_price_idx", "euribor_three_months"];

/// Straight projection, values untouched.
pub fn build_economics_table(full: &RecordBatch) -> Result<RecordBatch> {
    let schema = full.schema();
    let indices = ECONOMICS_COLUMNS
        .iter()
        .map(|name| {
            schema
                .index_of(name)
                .with_context(|| format!("missing column `{}`", name))
        })
        .collect::<Result<Vec<_>>>()?;
    full.project(&indices).context("projecting economics table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::test_support::batch_from_csv;
    use crate::process::utils::string_column;

    #[test]
    fn passes_values_through() -> Result<()> {
        let full = batch_from_csv(
            "euribor_three_months,client_id,job,cons_price_idx\n4.857,1,admin.,93.994\n",
        )?;
        let econ = build_economics_table(&full)?;
        assert_eq!(econ.num_columns(), 3);
        assert_eq!(string_column(&econ, "client_id")?.value(0), "1");
        assert_eq!(string_column(&econ, "cons_price_idx")?.value(0), "93.994");
        assert_eq!(string_column(&econ, "euribor_three_months")?.value(0), "4.857");
        assert_eq!(econ.schema().field(0).name(), "client_id");
        Ok(())
    }

    #[test]
    fn missing_column_is_an_error() -> Result<()> {
        let full = batch_from_csv("client_id,cons_price_idx\n1,93.994\n")?;
        let err = build_economics_table(&full).unwrap_err();
        assert!(err.to_string().contains("euribor_three_months"));
        Ok(())
    }
}
