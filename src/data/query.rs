use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Default minimum peak height.
pub const DEFAULT_MIN_HEIGHT: f64 = 1000.0;

/// Default low-mass cutoff.
pub const DEFAULT_LOW_MASS_CUTOFF: f64 = 16.0;

// ---------------------------------------------------------------------------
// PeakQuery – extractor configuration
// ---------------------------------------------------------------------------

/// Parameters of one peak extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakQuery {
    /// A local maximum must reach at least this intensity.
    pub min_height: f64,
    /// Peaks below this mass-to-charge ratio are dropped. `None` keeps all.
    pub low_mass_cutoff: Option<f64>,
}

impl Default for PeakQuery {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            low_mass_cutoff: Some(DEFAULT_LOW_MASS_CUTOFF),
        }
    }
}

impl PeakQuery {
    /// A query without a low-mass cutoff.
    pub fn unfiltered(min_height: f64) -> Self {
        Self {
            min_height,
            low_mass_cutoff: None,
        }
    }

    /// Build a query from free-form text fields.
    ///
    /// Both fields are trimmed. An empty cutoff disables the low-mass filter;
    /// an empty height is rejected like any other non-numeric text.
    pub fn parse(height_text: &str, cutoff_text: &str) -> Result<Self, InvalidInputError> {
        let min_height = parse_finite("min_height", height_text)?;
        let low_mass_cutoff = match cutoff_text.trim() {
            "" => None,
            text => Some(parse_finite("low_mass_cutoff", text)?),
        };
        Ok(Self {
            min_height,
            low_mass_cutoff,
        })
    }
}

fn parse_finite(field: &'static str, text: &str) -> Result<f64, InvalidInputError> {
    let tok = text.trim();
    let value = tok
        .parse::<f64>()
        .map_err(|_| InvalidInputError::NotANumber {
            field,
            text: tok.to_string(),
        })?;
    if !value.is_finite() {
        return Err(InvalidInputError::NonFiniteParameter { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer_fields() {
        let q = PeakQuery::default();
        assert_eq!(q.min_height, 1000.0);
        assert_eq!(q.low_mass_cutoff, Some(16.0));
        assert_eq!(PeakQuery::parse("1000", "16.00").unwrap(), q);
    }

    #[test]
    fn parse_trims_and_accepts_decimals() {
        let q = PeakQuery::parse("  250.5 ", "\t18\n").unwrap();
        assert_eq!(q.min_height, 250.5);
        assert_eq!(q.low_mass_cutoff, Some(18.0));
    }

    #[test]
    fn empty_cutoff_disables_filter() {
        let q = PeakQuery::parse("1000", "   ").unwrap();
        assert_eq!(q, PeakQuery::unfiltered(1000.0));
    }

    #[test]
    fn negative_height_is_allowed() {
        let q = PeakQuery::parse("-5", "").unwrap();
        assert_eq!(q.min_height, -5.0);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        let err = PeakQuery::parse("abc", "16").unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NotANumber {
                field: "min_height",
                text: "abc".to_string()
            }
        );

        let err = PeakQuery::parse("1000", "16 Da").unwrap_err();
        assert!(matches!(
            err,
            InvalidInputError::NotANumber { field: "low_mass_cutoff", .. }
        ));
    }

    #[test]
    fn empty_height_is_rejected() {
        assert!(matches!(
            PeakQuery::parse("", "16"),
            Err(InvalidInputError::NotANumber { field: "min_height", .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            PeakQuery::parse("NaN", "16"),
            Err(InvalidInputError::NonFiniteParameter { field: "min_height", .. })
        ));
        assert!(matches!(
            PeakQuery::parse("1000", "inf"),
            Err(InvalidInputError::NonFiniteParameter { field: "low_mass_cutoff", .. })
        ));
    }
}
