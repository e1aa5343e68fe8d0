// Unit normalization for roster measurements.
//
// Weights arrive as `"<n>kg"` or `"<n>lbs"`, heights as `"<f>feet<i>inches"`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Pounds to kilograms.
pub const LBS_TO_KG: f64 = 0.453592;

/// Inches to centimeters.
pub const INCH_TO_CM: f64 = 2.54;

const INCHES_PER_FOOT: i64 = 12;

/// Leading decimal number, `parseFloat` style: sign, digits, fraction, exponent.
static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float regex")
});

/// Leading integer, `parseInt` style.
static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?\d+").expect("valid integer regex"));

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("no leading number in {input:?}")]
    NonNumeric { input: String },

    #[error("height {input:?} has no `feet` component")]
    MissingFeet { input: String },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn leading_float(raw: &str) -> Option<f64> {
    let m = LEADING_FLOAT.find(raw)?;
    m.as_str().trim().parse().ok()
}

fn leading_int(raw: &str) -> Option<i64> {
    let m = LEADING_INT.find(raw)?;
    m.as_str().trim().parse().ok()
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Convert a weight string to kilograms.
///
/// Anything containing `kg` is taken as already metric; every other suffix
/// is treated as pounds.
pub fn convert_weight_to_kg(raw: &str) -> Result<f64, UnitError> {
    let value = leading_float(raw).ok_or_else(|| UnitError::NonNumeric {
        input: raw.to_string(),
    })?;
    if raw.contains("kg") {
        Ok(value)
    } else {
        Ok(value * LBS_TO_KG)
    }
}

/// Convert a `"<feet>feet<inches>inches"` height string to centimeters.
///
/// Each piece around `feet` contributes its leading integer; trailing text
/// such as `inches` is ignored. Pieces after the first all count as inches.
pub fn convert_height_to_cm(raw: &str) -> Result<f64, UnitError> {
    let mut pieces = raw.split("feet");
    let feet_piece = pieces.next().unwrap_or_default();
    let rest: Vec<&str> = pieces.collect();
    if rest.is_empty() {
        return Err(UnitError::MissingFeet {
            input: raw.to_string(),
        });
    }

    let non_numeric = || UnitError::NonNumeric {
        input: raw.to_string(),
    };

    let feet = leading_int(feet_piece).ok_or_else(non_numeric)?;
    let mut total_inches = feet * INCHES_PER_FOOT;
    for piece in rest {
        total_inches += leading_int(piece).ok_or_else(non_numeric)?;
    }

    Ok(total_inches as f64 * INCH_TO_CM)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- Weight --

    #[test]
    fn kg_weight_unchanged() {
        assert!(approx(convert_weight_to_kg("100kg").unwrap(), 100.0));
        assert!(approx(convert_weight_to_kg("92.5kg").unwrap(), 92.5));
    }

    #[test]
    fn lbs_weight_converted() {
        assert!(approx(convert_weight_to_kg("220lbs").unwrap(), 220.0 * LBS_TO_KG));
    }

    #[test]
    fn unknown_suffix_treated_as_pounds() {
        assert!(approx(convert_weight_to_kg("200").unwrap(), 200.0 * LBS_TO_KG));
    }

    #[test]
    fn weight_leading_whitespace_and_fraction() {
        assert!(approx(convert_weight_to_kg("  180.5 lbs").unwrap(), 180.5 * LBS_TO_KG));
        assert!(approx(convert_weight_to_kg(".5kg").unwrap(), 0.5));
    }

    #[test]
    fn kg_weight_is_idempotent() {
        for raw in ["185lbs", "97kg", "250.25lbs"] {
            let once = convert_weight_to_kg(raw).unwrap();
            let twice = convert_weight_to_kg(&format!("{once}kg")).unwrap();
            assert!(approx(once, twice), "{raw}: {once} != {twice}");
        }
    }

    #[test]
    fn weight_without_number_rejected() {
        assert_eq!(
            convert_weight_to_kg("heavy"),
            Err(UnitError::NonNumeric {
                input: "heavy".into()
            })
        );
        assert!(convert_weight_to_kg("").is_err());
    }

    // -- Height --

    #[test]
    fn height_feet_and_inches() {
        let cm = convert_height_to_cm("6feet2inches").unwrap();
        assert!(approx(cm, 187.96), "got {cm}");
    }

    #[test]
    fn height_zero_inches() {
        let cm = convert_height_to_cm("7feet0inches").unwrap();
        assert!(approx(cm, 84.0 * INCH_TO_CM));
    }

    #[test]
    fn height_inches_without_unit_text() {
        let cm = convert_height_to_cm("5feet11").unwrap();
        assert!(approx(cm, 71.0 * INCH_TO_CM));
    }

    #[test]
    fn height_missing_feet_rejected() {
        assert_eq!(
            convert_height_to_cm("188cm"),
            Err(UnitError::MissingFeet {
                input: "188cm".into()
            })
        );
    }

    #[test]
    fn height_missing_inches_rejected() {
        assert!(matches!(
            convert_height_to_cm("6feet"),
            Err(UnitError::NonNumeric { .. })
        ));
    }
}
