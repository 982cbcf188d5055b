//! Mass spectrum peak labelling.
//!
//! [`find_peaks`] turns an ordered `(mass, intensity)` curve and a
//! [`PeakQuery`] into a [`PeakReport`]: the strict local maxima that reach
//! the minimum height and sit at or above the low-mass cutoff, plus the sum
//! of their intensities.

pub mod data;
pub mod error;

pub use data::model::{Peak, PeakReport, Sample, Spectrum};
pub use data::peaks::{find_peaks, local_maxima};
pub use data::query::PeakQuery;
pub use error::InvalidInputError;
