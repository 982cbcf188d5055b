use serde::Serialize;

// ---------------------------------------------------------------------------
// Sample / Spectrum – the input curve
// ---------------------------------------------------------------------------

/// One point of a mass spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Mass-to-charge ratio.
    pub x: f64,
    /// Intensity.
    pub y: f64,
}

/// An ordered sequence of samples, stored column-wise.
///
/// Row order is the order of the source file. `x` is usually increasing
/// but nothing here relies on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Mass-to-charge axis.
    pub x: Vec<f64>,
    /// Intensity axis – same length as `x`.
    pub y: Vec<f64>,
}

impl Spectrum {
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let (x, y) = samples.into_iter().map(|s| (s.x, s.y)).unzip();
        Spectrum { x, y }
    }

    /// Iterate the samples in row order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Sample { x, y })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Peak / PeakReport – the extractor's output
// ---------------------------------------------------------------------------

/// A local maximum that survived the height threshold and the low-mass cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    /// Position of the peak in the input sequence.
    pub index: usize,
    /// Mass-to-charge ratio at the peak.
    pub x: f64,
    /// Intensity at the peak.
    pub height: f64,
}

/// Result of one extraction run. Peaks are in ascending input order and
/// `total_intensity` is the sum of their heights.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeakReport {
    pub peaks: Vec<Peak>,
    pub total_intensity: f64,
}

impl PeakReport {
    pub(crate) fn from_peaks(peaks: Vec<Peak>) -> Self {
        let total_intensity = peaks.iter().map(|p| p.height).sum();
        PeakReport {
            peaks,
            total_intensity,
        }
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Peak> {
        self.peaks.iter()
    }
}
