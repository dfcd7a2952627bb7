//! Composite signal construction.
//!
//! Z-scores each named component series, then averages them elementwise.
//! An index where ANY component is missing is missing in the composite;
//! there is no partial averaging. The composite is recomputed from its
//! inputs on every call and never mutated in place.

use crate::lag::{LagResult, LagScan};
use crate::transform::zscore;

/// Ordered, named component series feeding one composite.
#[derive(Debug, Clone, Default)]
pub struct CompositeBuilder {
    components: Vec<(String, Vec<f64>)>,
}

impl CompositeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) -> &mut Self {
        self.components.push((name.into(), values));
        self
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Equal-weight mean of the z-scored components over their shortest
    /// common length. No components yields an empty composite.
    pub fn build(&self) -> Vec<f64> {
        if self.components.is_empty() {
            return Vec::new();
        }

        let normalized: Vec<Vec<f64>> = self
            .components
            .iter()
            .map(|(_, values)| zscore(values))
            .collect();

        let len = normalized.iter().map(|v| v.len()).min().unwrap_or(0);
        let weight = normalized.len() as f64;
        let mut out = Vec::with_capacity(len);

        for i in 0..len {
            let mut sum = 0.0;
            let mut missing = false;
            for component in &normalized {
                let v = component[i];
                if v.is_nan() {
                    missing = true;
                    break;
                }
                sum += v;
            }
            out.push(if missing { f64::NAN } else { sum / weight });
        }

        tracing::debug!(
            components = self.components.len(),
            len,
            "composite built"
        );
        out
    }

    /// Best-fit forward offset of the composite against a reference
    /// momentum series: "the composite leads the reference by N days at
    /// correlation R".
    pub fn lead_lag(&self, reference: &[f64], scan: &LagScan) -> LagResult {
        scan.find_optimal(&self.build(), reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn single_component_is_its_zscore() {
        let mut builder = CompositeBuilder::new();
        builder.push("m2", vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(builder.build(), zscore(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn components_average_elementwise() {
        // mirrored series: z-scores cancel exactly
        let mut builder = CompositeBuilder::new();
        builder.push("up", vec![1.0, 2.0, 3.0]);
        builder.push("down", vec![3.0, 2.0, 1.0]);

        let composite = builder.build();
        assert_eq!(composite.len(), 3);
        for &v in &composite {
            assert_approx(v, 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn any_missing_component_blanks_the_index() {
        let mut builder = CompositeBuilder::new();
        builder.push("a", vec![1.0, f64::NAN, 3.0, 4.0]);
        builder.push("b", vec![4.0, 3.0, 2.0, 1.0]);

        let composite = builder.build();
        assert!(!composite[0].is_nan());
        assert!(composite[1].is_nan());
        assert!(!composite[2].is_nan());
    }

    #[test]
    fn shortest_component_governs_length() {
        let mut builder = CompositeBuilder::new();
        builder.push("long", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        builder.push("short", vec![5.0, 4.0, 3.0]);

        assert_eq!(builder.build().len(), 3);
    }

    #[test]
    fn no_components_is_empty() {
        assert!(CompositeBuilder::new().build().is_empty());
    }

    #[test]
    fn lead_lag_recovers_a_built_in_shift() {
        // composite leads the reference by 4 steps
        let raw: Vec<f64> = (0..100)
            .map(|i| (i as f64 * 0.6).sin() * 5.0 + (i as f64 * 0.17).cos() * 2.0)
            .collect();
        let reference: Vec<f64> = (0..raw.len())
            .map(|i| if i >= 4 { raw[i - 4] } else { f64::NAN })
            .collect();

        let mut builder = CompositeBuilder::new();
        builder.push("only", raw);

        let best = builder.lead_lag(&reference, &LagScan::new(0, 10, 1));
        assert_eq!(best.lag, 4);
        assert!(best.correlation > 0.999);
    }
}
