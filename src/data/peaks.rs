use crate::error::InvalidInputError;

use super::model::{Peak, PeakReport, Spectrum};
use super::query::PeakQuery;

// ---------------------------------------------------------------------------
// Local-maximum scan
// ---------------------------------------------------------------------------

/// Indices of strict interior local maxima of `y`, in ascending order.
///
/// The first and last samples are never maxima, and neither is any sample
/// on a flat plateau.
pub fn local_maxima(y: &[f64]) -> Vec<usize> {
    y.windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect()
}

// ---------------------------------------------------------------------------
// Peak extraction
// ---------------------------------------------------------------------------

/// Find the labelled peaks of a spectrum given as separate `x` / `y` columns.
///
/// A peak is a strict local maximum with `y >= query.min_height` and, when a
/// cutoff is set, `x >= low_mass_cutoff`. Its height is the sample intensity.
pub fn find_peaks(x: &[f64], y: &[f64], query: &PeakQuery) -> Result<PeakReport, InvalidInputError> {
    if x.len() != y.len() {
        return Err(InvalidInputError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(InvalidInputError::NonFiniteIntensity { index, value });
    }

    let candidates = local_maxima(y);
    let n_candidates = candidates.len();

    let peaks: Vec<Peak> = candidates
        .into_iter()
        .filter(|&i| y[i] >= query.min_height)
        .map(|i| Peak {
            index: i,
            x: x[i],
            height: y[i],
        })
        .filter(|p| query.low_mass_cutoff.map_or(true, |cutoff| p.x >= cutoff))
        .collect();

    log::debug!(
        "{} samples, {} local maxima, {} peaks kept ({:?})",
        y.len(),
        n_candidates,
        peaks.len(),
        query
    );

    Ok(PeakReport::from_peaks(peaks))
}

impl Spectrum {
    /// Run [`find_peaks`] over this spectrum.
    pub fn find_peaks(&self, query: &PeakQuery) -> Result<PeakReport, InvalidInputError> {
        find_peaks(&self.x, &self.y, query)
    }
}
