//! Winwait math utilities.

pub mod math;

pub use math::stable::*;
pub use math::summary::*;
pub use math::wait_dist::*;
