use super::eligibility::EligibilityCalculator;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Label written for rows whose salary produced no result.
pub const NO_RESULT_TIER: &str = "none";

/// One evaluated line of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub salary: f64,
    pub obligations: f64,
    pub actual_dbr_percent: Option<f64>,
    pub visual_dbr_percent: Option<f64>,
    pub available_capacity: Option<f64>,
    pub tier: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("invalid batch csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush batch report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct BatchInputRow {
    salary: f64,
    #[serde(default)]
    obligations: Option<f64>,
}

/// Evaluates every `salary,obligations` row of a CSV export. Blank obligations count as zero.
pub fn evaluate_csv<R: Read>(
    calculator: &EligibilityCalculator,
    reader: R,
) -> Result<Vec<BatchRow>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<BatchInputRow>() {
        let input = record?;
        let obligations = input.obligations.unwrap_or(0.0);
        let row = match calculator.evaluate(input.salary, obligations) {
            Some(result) => BatchRow {
                salary: input.salary,
                obligations,
                actual_dbr_percent: Some(result.actual_dbr_percent),
                visual_dbr_percent: Some(result.visual_dbr_percent),
                available_capacity: Some(result.available_capacity),
                tier: result.tier.label(),
            },
            None => BatchRow {
                salary: input.salary,
                obligations,
                actual_dbr_percent: None,
                visual_dbr_percent: None,
                available_capacity: None,
                tier: NO_RESULT_TIER,
            },
        };
        rows.push(row);
    }

    Ok(rows)
}

pub fn write_report<W: Write>(rows: &[BatchRow], writer: W) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn evaluates_rows_and_marks_guarded_salaries() {
        let input = "salary,obligations\n10000,2000\n0,500\n5000,\n";
        let rows = evaluate_csv(&EligibilityCalculator::default(), Cursor::new(input))
            .expect("batch evaluates");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].tier, "excellent");
        assert_eq!(rows[0].available_capacity, Some(2_500.0));
        assert_eq!(rows[1].tier, NO_RESULT_TIER);
        assert!(rows[1].actual_dbr_percent.is_none());
        assert_eq!(rows[2].obligations, 0.0);
        assert_eq!(rows[2].actual_dbr_percent, Some(0.0));
    }

    #[test]
    fn report_includes_header_and_blank_fields_for_missing_results() {
        let rows = evaluate_csv(
            &EligibilityCalculator::default(),
            Cursor::new("salary,obligations\n0,100\n"),
        )
        .expect("batch evaluates");

        let mut output = Vec::new();
        write_report(&rows, &mut output).expect("report writes");
        let text = String::from_utf8(output).expect("utf8 report");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("salary,obligations,actual_dbr_percent,visual_dbr_percent,available_capacity,tier")
        );
        assert_eq!(lines.next(), Some("0.0,100.0,,,,none"));
    }

    #[test]
    fn malformed_salary_is_reported() {
        let err = evaluate_csv(
            &EligibilityCalculator::default(),
            Cursor::new("salary,obligations\nabc,100\n"),
        )
        .expect_err("non-numeric salary fails");
        assert!(matches!(err, BatchError::Csv(_)));
    }
}
