//! Report output for the two rating predictions

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::types::rating::RatingPrediction;

/// Write the two report lines for a prediction.
pub fn write_report<W: Write>(out: &mut W, prediction: &RatingPrediction) -> io::Result<()> {
    writeln!(out, "Linear Regression | Rating: {:.2}", prediction.rating)?;
    writeln!(
        out,
        "Logistic Regression | Rating range: {}",
        prediction.bucket_label()
    )?;
    Ok(())
}

/// Print the prediction report to stdout.
pub fn print_report(prediction: &RatingPrediction) -> Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), prediction).context("Failed to write report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let prediction = RatingPrediction {
            rating: 4.2,
            bucket_index: 3,
        };

        let mut out = Vec::new();
        write_report(&mut out, &prediction).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Linear Regression | Rating: 4.20\nLogistic Regression | Rating range: (4.0, 4.5]\n"
        );
    }

    #[test]
    fn test_rating_is_rounded_to_two_decimals() {
        let prediction = RatingPrediction {
            rating: 3.14159,
            bucket_index: 1,
        };

        let mut out = Vec::new();
        write_report(&mut out, &prediction).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Linear Regression | Rating: 3.14\n"));
        assert!(text.ends_with("Logistic Regression | Rating range: (3.0, 3.5]\n"));
    }
}
