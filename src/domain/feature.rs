//! The clinical feature set and its canonical ordering.
//!
//! The ordering in [`Feature::ORDER`] is the contract between offline
//! training and inference: the model artifact's weight vector, scaler
//! parameters, and the standardized vector built per request all use this
//! exact order. Artifacts declaring any other order are rejected at load.

use serde::{Deserialize, Serialize};

/// The eight clinical measurements of the Pima diabetes dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Number of pregnancies
    Pregnancies,
    /// Plasma glucose concentration in mg/dL
    Glucose,
    /// Diastolic blood pressure in mmHg
    BloodPressure,
    /// Triceps skinfold thickness in mm
    SkinThickness,
    /// 2-hour serum insulin in μU/mL
    Insulin,
    /// Body mass index in kg/m²
    Bmi,
    /// Diabetes pedigree function (genetic predisposition score)
    Pedigree,
    /// Age in years
    Age,
}

impl Feature {
    /// Number of features in the model.
    pub const COUNT: usize = 8;

    /// Canonical feature order used at training time.
    pub const ORDER: [Feature; Feature::COUNT] = [
        Feature::Pregnancies,
        Feature::Glucose,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::Insulin,
        Feature::Bmi,
        Feature::Pedigree,
        Feature::Age,
    ];

    /// Stable identifier, matching the keys of the artifact blob.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pregnancies => "pregnancies",
            Self::Glucose => "glucose",
            Self::BloodPressure => "blood_pressure",
            Self::SkinThickness => "skin_thickness",
            Self::Insulin => "insulin",
            Self::Bmi => "bmi",
            Self::Pedigree => "pedigree",
            Self::Age => "age",
        }
    }

    /// Position within [`Feature::ORDER`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether a zero value denotes "not recorded" for this feature.
    ///
    /// A zero glucose, blood pressure, skinfold, insulin, or BMI is
    /// physiologically impossible; the source dataset uses zero as a
    /// missing-data sentinel for these five columns. Zero pregnancies is a
    /// genuine value and must never be imputed.
    #[must_use]
    pub fn zero_is_sentinel(self) -> bool {
        matches!(
            self,
            Self::Glucose | Self::BloodPressure | Self::SkinThickness | Self::Insulin | Self::Bmi
        )
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_indices() {
        for (i, feature) in Feature::ORDER.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_sentinel_features() {
        assert!(Feature::Glucose.zero_is_sentinel());
        assert!(Feature::Bmi.zero_is_sentinel());
        assert!(!Feature::Pregnancies.zero_is_sentinel());
        assert!(!Feature::Age.zero_is_sentinel());
        assert!(!Feature::Pedigree.zero_is_sentinel());
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<&str> = Feature::ORDER.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Feature::COUNT);
    }
}
