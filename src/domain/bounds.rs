//! Configuration tables for clinical plausibility and healthy reference
//! ranges.
//!
//! Both tables are plain immutable values constructed once at startup and
//! passed explicitly to the components that need them, so tests can
//! substitute alternate ranges without process-wide side effects.

use super::feature::Feature;

/// An inclusive `[min, max]` interval for one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Clinical plausibility bounds, derived from the descriptive statistics of
/// the reference dataset. Values strictly outside these ranges are rejected;
/// zero sentinels on impossible-zero features are inside-range by design and
/// handled by imputation instead.
#[derive(Debug, Clone)]
pub struct ClinicalBounds {
    bounds: [Bound; Feature::COUNT],
}

impl ClinicalBounds {
    /// Look up the bound for one feature.
    #[must_use]
    pub fn bound(&self, feature: Feature) -> Bound {
        self.bounds[feature.index()]
    }

    /// Build a table with custom bounds, in canonical feature order.
    #[must_use]
    pub fn from_bounds(bounds: [Bound; Feature::COUNT]) -> Self {
        Self { bounds }
    }
}

impl Default for ClinicalBounds {
    fn default() -> Self {
        // Canonical order: pregnancies, glucose, blood_pressure,
        // skin_thickness, insulin, bmi, pedigree, age.
        Self {
            bounds: [
                Bound { min: 0.0, max: 17.0 },
                Bound { min: 0.0, max: 200.0 },
                Bound { min: 0.0, max: 122.0 },
                Bound { min: 0.0, max: 99.0 },
                Bound { min: 0.0, max: 846.0 },
                Bound { min: 0.0, max: 67.1 },
                Bound { min: 0.0, max: 2.5 },
                Bound { min: 21.0, max: 90.0 },
            ],
        }
    }
}

/// One healthy reference sub-range with its targeted guidance text.
///
/// These ranges are narrower than the clinical plausibility bounds: a value
/// outside them is still a valid measurement, it just warrants a targeted
/// recommendation.
#[derive(Debug, Clone, Copy)]
pub struct HealthyRange {
    pub feature: Feature,
    pub min: f64,
    pub max: f64,
    pub advice: &'static str,
}

impl HealthyRange {
    /// Whether `value` lies inside the closed healthy interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The full rule table of healthy reference sub-ranges, in canonical
/// feature order.
#[derive(Debug, Clone)]
pub struct HealthyRanges {
    rules: Vec<HealthyRange>,
}

impl HealthyRanges {
    /// Iterate rules in canonical feature order.
    pub fn rules(&self) -> impl Iterator<Item = &HealthyRange> {
        self.rules.iter()
    }

    /// Build a table with custom rules. Rules are sorted into canonical
    /// feature order so recommendation output stays deterministic.
    #[must_use]
    pub fn from_rules(mut rules: Vec<HealthyRange>) -> Self {
        rules.sort_by_key(|r| r.feature.index());
        Self { rules }
    }
}

impl Default for HealthyRanges {
    fn default() -> Self {
        Self::from_rules(vec![
            HealthyRange {
                feature: Feature::Glucose,
                min: 70.0,
                max: 140.0,
                advice: "Glucose is outside the healthy range of 70-140 mg/dL: \
                         monitor carbohydrate intake and consider consulting a nutritionist.",
            },
            HealthyRange {
                feature: Feature::BloodPressure,
                min: 60.0,
                max: 80.0,
                advice: "Diastolic blood pressure is outside the healthy range of 60-80 mmHg: \
                         have blood pressure re-checked and reviewed by a clinician.",
            },
            HealthyRange {
                feature: Feature::Insulin,
                min: 16.0,
                max: 166.0,
                advice: "Serum insulin is outside the healthy range of 16-166 uU/mL: \
                         a fasting insulin panel can clarify insulin resistance.",
            },
            HealthyRange {
                feature: Feature::Bmi,
                min: 18.5,
                max: 24.9,
                advice: "BMI is outside the healthy range of 18.5-24.9 kg/m2: \
                         a balanced diet and regular exercise help reach a healthy weight.",
            },
            HealthyRange {
                feature: Feature::Age,
                min: 21.0,
                max: 45.0,
                advice: "Regular health screenings become more important past age 45: \
                         schedule routine glucose checks with your provider.",
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_table() {
        let bounds = ClinicalBounds::default();
        assert_eq!(bounds.bound(Feature::Glucose), Bound { min: 0.0, max: 200.0 });
        assert_eq!(bounds.bound(Feature::Age), Bound { min: 21.0, max: 90.0 });
        assert_eq!(bounds.bound(Feature::Bmi).max, 67.1);
        assert_eq!(bounds.bound(Feature::Insulin).max, 846.0);
    }

    #[test]
    fn test_bound_is_closed_interval() {
        let b = Bound { min: 0.0, max: 200.0 };
        assert!(b.contains(0.0));
        assert!(b.contains(200.0));
        assert!(!b.contains(200.1));
        assert!(!b.contains(-0.1));
    }

    #[test]
    fn test_healthy_ranges_are_narrower_than_bounds() {
        let bounds = ClinicalBounds::default();
        for rule in HealthyRanges::default().rules() {
            let b = bounds.bound(rule.feature);
            assert!(rule.min >= b.min, "{} healthy min below bound", rule.feature);
            assert!(rule.max <= b.max, "{} healthy max above bound", rule.feature);
        }
    }

    #[test]
    fn test_custom_rules_sorted_to_canonical_order() {
        let ranges = HealthyRanges::from_rules(vec![
            HealthyRange { feature: Feature::Age, min: 21.0, max: 45.0, advice: "age" },
            HealthyRange { feature: Feature::Glucose, min: 70.0, max: 140.0, advice: "glucose" },
        ]);
        let order: Vec<Feature> = ranges.rules().map(|r| r.feature).collect();
        assert_eq!(order, vec![Feature::Glucose, Feature::Age]);
    }
}
