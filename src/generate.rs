use std::ops::RangeInclusive;

use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::error::{ApspError, Result};
use crate::graph::DenseGraph;
use crate::traits::GraphSource;
use crate::weight::Weight;

/// Default weight range of generated edges.
pub const DEFAULT_WEIGHTS: RangeInclusive<i64> = 1..=100;

/// Random dense graph generator.
///
/// For every ordered pair `i != j` one uniform `[0, 1)` draw decides whether
/// the edge exists (`draw < density`); present edges get a weight drawn
/// uniformly from `weights`. The generator owns its `Rng`, so a fixed seed
/// reproduces the same graph.
#[derive(Clone, Debug)]
pub struct RandomGraph<R, W = i64> {
    rng: R,
    density: f64,
    weights: RangeInclusive<W>,
}

impl<R: Rng, W: Weight + SampleUniform> RandomGraph<R, W> {
    pub fn new(rng: R, density: f64, weights: RangeInclusive<W>) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ApspError::InvalidDensity(density));
        }
        if weights.is_empty() || !weights.end().is_finite() {
            return Err(ApspError::InvalidWeightRange);
        }
        Ok(Self { rng, density, weights })
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

impl<R: Rng, W: Weight + SampleUniform> GraphSource<W> for RandomGraph<R, W> {
    fn generate(&mut self, vertices: usize) -> Result<DenseGraph<W>> {
        let mut g = DenseGraph::new(vertices)?;
        for i in 0..vertices {
            for j in 0..vertices {
                if i != j && self.rng.random::<f64>() < self.density {
                    let w = self.rng.random_range(self.weights.clone());
                    g.add_edge(i, j, w)?;
                }
            }
        }
        Ok(g)
    }
}
