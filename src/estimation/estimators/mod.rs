mod archimedes;
mod leibniz;
mod monte_carlo;
mod wallis;

pub use archimedes::ArchimedesEstimator;
pub use leibniz::LeibnizEstimator;
pub use monte_carlo::MonteCarloEstimator;
pub use wallis::WallisEstimator;
