//! Numerical building blocks for the wait-time estimator.

pub mod stable;
pub mod summary;
pub mod wait_dist;
