//! Clinical plausibility validation.
//!
//! Pure check against the closed bounds table. Zero sentinels on the
//! impossible-zero features are inside their bounds and pass here; the
//! preprocessor is responsible for imputing them.

use crate::domain::{ClinicalBounds, Feature, PatientFeatures, ValidationError};

/// Validates a complete measurement record against clinical bounds.
pub struct Validator<'a> {
    bounds: &'a ClinicalBounds,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(bounds: &'a ClinicalBounds) -> Self {
        Self { bounds }
    }

    /// Check every measurement, failing fast on the first violation in
    /// canonical feature order.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] naming the feature and the
    /// violated bound. Non-finite values are treated as out of range.
    pub fn check(&self, features: &PatientFeatures) -> Result<(), ValidationError> {
        for feature in Feature::ORDER {
            let value = features.get(feature);
            let bound = self.bounds.bound(feature);
            if !value.is_finite() || !bound.contains(value) {
                return Err(ValidationError::OutOfRange {
                    feature,
                    value,
                    min: bound.min,
                    max: bound.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range() -> PatientFeatures {
        PatientFeatures {
            pregnancies: 1.0,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            pedigree: 0.5,
            age: 30.0,
        }
    }

    #[test]
    fn test_in_range_record_passes() {
        let bounds = ClinicalBounds::default();
        assert!(Validator::new(&bounds).check(&in_range()).is_ok());
    }

    #[test]
    fn test_glucose_above_bound_rejected() {
        let bounds = ClinicalBounds::default();
        let features = PatientFeatures {
            glucose: 250.0,
            ..in_range()
        };
        let err = Validator::new(&bounds).check(&features).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                feature: Feature::Glucose,
                value: 250.0,
                min: 0.0,
                max: 200.0,
            }
        );
    }

    #[test]
    fn test_zero_sentinels_pass_validation() {
        // Zero glucose/BP/skinfold/insulin/BMI are missing-data sentinels,
        // not validation failures.
        let bounds = ClinicalBounds::default();
        let features = PatientFeatures {
            glucose: 0.0,
            blood_pressure: 0.0,
            skin_thickness: 0.0,
            insulin: 0.0,
            bmi: 0.0,
            ..in_range()
        };
        assert!(Validator::new(&bounds).check(&features).is_ok());
    }

    #[test]
    fn test_age_below_bound_rejected() {
        let bounds = ClinicalBounds::default();
        let features = PatientFeatures {
            age: 18.0,
            ..in_range()
        };
        let err = Validator::new(&bounds).check(&features).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                feature: Feature::Age,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let bounds = ClinicalBounds::default();
        let features = PatientFeatures {
            bmi: f64::NAN,
            ..in_range()
        };
        assert!(Validator::new(&bounds).check(&features).is_err());
    }

    #[test]
    fn test_boundary_values_accepted() {
        let bounds = ClinicalBounds::default();
        let features = PatientFeatures {
            glucose: 200.0,
            bmi: 67.1,
            age: 90.0,
            pregnancies: 17.0,
            ..in_range()
        };
        assert!(Validator::new(&bounds).check(&features).is_ok());
    }
}
