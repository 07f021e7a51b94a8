//! Patient measurement types for diabetes risk assessment.
//!
//! Features follow the Pima Indians Diabetes Database schema: Pregnancies,
//! Glucose, BloodPressure, SkinThickness, Insulin, BMI,
//! DiabetesPedigreeFunction, Age.

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// Validation failures for raw patient input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required measurement was not supplied.
    #[error("missing required field: {0}")]
    MissingField(Feature),

    /// A measurement lies strictly outside its clinical plausibility bounds.
    #[error("{feature} value {value} outside clinical range [{min}, {max}]")]
    OutOfRange {
        feature: Feature,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Raw, possibly incomplete measurements as received from the caller.
///
/// Every field is optional so that absent values can be reported as
/// [`ValidationError::MissingField`] rather than silently defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMeasurements {
    pub pregnancies: Option<f64>,
    pub glucose: Option<f64>,
    pub blood_pressure: Option<f64>,
    pub skin_thickness: Option<f64>,
    pub insulin: Option<f64>,
    pub bmi: Option<f64>,
    pub pedigree: Option<f64>,
    pub age: Option<f64>,
}

impl RawMeasurements {
    /// Resolve into a complete [`PatientFeatures`] record.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingField`] naming the first absent
    /// field, in canonical feature order.
    pub fn resolve(self) -> Result<PatientFeatures, ValidationError> {
        let require = |v: Option<f64>, f: Feature| v.ok_or(ValidationError::MissingField(f));

        Ok(PatientFeatures {
            pregnancies: require(self.pregnancies, Feature::Pregnancies)?,
            glucose: require(self.glucose, Feature::Glucose)?,
            blood_pressure: require(self.blood_pressure, Feature::BloodPressure)?,
            skin_thickness: require(self.skin_thickness, Feature::SkinThickness)?,
            insulin: require(self.insulin, Feature::Insulin)?,
            bmi: require(self.bmi, Feature::Bmi)?,
            pedigree: require(self.pedigree, Feature::Pedigree)?,
            age: require(self.age, Feature::Age)?,
        })
    }
}

/// A complete, immutable set of the 8 clinical measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientFeatures {
    /// Number of pregnancies
    pub pregnancies: f64,
    /// Plasma glucose concentration (mg/dL)
    pub glucose: f64,
    /// Diastolic blood pressure (mmHg)
    pub blood_pressure: f64,
    /// Triceps skinfold thickness (mm)
    pub skin_thickness: f64,
    /// 2-hour serum insulin (μU/mL)
    pub insulin: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Diabetes pedigree function
    pub pedigree: f64,
    /// Age (years)
    pub age: f64,
}

impl PatientFeatures {
    /// Read a single measurement by feature identifier.
    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Pregnancies => self.pregnancies,
            Feature::Glucose => self.glucose,
            Feature::BloodPressure => self.blood_pressure,
            Feature::SkinThickness => self.skin_thickness,
            Feature::Insulin => self.insulin,
            Feature::Bmi => self.bmi,
            Feature::Pedigree => self.pedigree,
            Feature::Age => self.age,
        }
    }

    /// Values in canonical feature order.
    #[must_use]
    pub fn to_array(&self) -> [f64; Feature::COUNT] {
        let mut out = [0.0; Feature::COUNT];
        for (i, feature) in Feature::ORDER.iter().enumerate() {
            out[i] = self.get(*feature);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PatientFeatures {
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
    fn test_to_array_follows_canonical_order() {
        let arr = sample().to_array();
        assert_eq!(arr, [1.0, 120.0, 80.0, 20.0, 80.0, 25.0, 0.5, 30.0]);
    }

    #[test]
    fn test_get_by_feature() {
        let features = sample();
        assert!((features.get(Feature::Glucose) - 120.0).abs() < f64::EPSILON);
        assert!((features.get(Feature::Pedigree) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_complete_input() {
        let raw = RawMeasurements {
            pregnancies: Some(1.0),
            glucose: Some(120.0),
            blood_pressure: Some(80.0),
            skin_thickness: Some(20.0),
            insulin: Some(80.0),
            bmi: Some(25.0),
            pedigree: Some(0.5),
            age: Some(30.0),
        };
        let features = raw.resolve().expect("complete input should resolve");
        assert_eq!(features, sample());
    }

    #[test]
    fn test_resolve_reports_missing_field() {
        let raw = RawMeasurements {
            pregnancies: Some(1.0),
            glucose: None,
            blood_pressure: Some(80.0),
            skin_thickness: Some(20.0),
            insulin: Some(80.0),
            bmi: Some(25.0),
            pedigree: Some(0.5),
            age: Some(30.0),
        };
        let err = raw.resolve().expect_err("must fail");
        assert_eq!(err, ValidationError::MissingField(Feature::Glucose));
    }
}
