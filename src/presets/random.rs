//! Seeded random weight matrices for ad-hoc experiments.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::linalg::WeightMatrix;

/// Symmetric weights with zero diagonal, `w_ij = w_ji ~ N(0, 1)`.
pub fn random_symmetric(order: usize, seed: u64) -> WeightMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut w = Array2::zeros((order, order));

    for i in 0..order {
        for j in (i + 1)..order {
            let value: f64 = StandardNormal.sample(&mut rng);
            w[[i, j]] = value;
            w[[j, i]] = value;
        }
    }

    WeightMatrix::from_square(w)
}

/// Unconstrained weights, every entry `~ N(0, 1)`.
pub fn random_general(order: usize, seed: u64) -> WeightMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Array2::from_shape_simple_fn((order, order), || StandardNormal.sample(&mut rng));
    WeightMatrix::from_square(w)
}
