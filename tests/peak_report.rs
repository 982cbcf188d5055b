use spectrum_labeler::data::loader::parse_two_column;
use spectrum_labeler::{find_peaks, local_maxima, InvalidInputError, PeakQuery, Spectrum};

/// Deterministic jagged curves with repeated values, so plateaus show up too.
fn curves() -> Vec<Spectrum> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..40)
        .map(|n| {
            let len = n % 23;
            let x = (0..len).map(|i| 5.0 + i as f64 * 1.5).collect();
            let y = (0..len).map(|_| (next() % 8) as f64 * 500.0).collect();
            Spectrum { x, y }
        })
        .collect()
}

#[test]
fn reported_peaks_are_interior_strict_maxima() {
    for sp in curves() {
        let report = sp.find_peaks(&PeakQuery::unfiltered(f64::MIN)).unwrap();
        for peak in report.iter() {
            let i = peak.index;
            assert!(i > 0 && i + 1 < sp.len(), "boundary peak at {i}");
            assert!(sp.y[i] > sp.y[i - 1] && sp.y[i] > sp.y[i + 1]);
            assert_eq!(peak.height, sp.y[i]);
            assert_eq!(peak.x, sp.x[i]);
        }
        assert_eq!(report.len(), local_maxima(&sp.y).len());
    }
}

#[test]
fn raising_threshold_never_adds_peaks() {
    for sp in curves() {
        let mut previous = usize::MAX;
        for step in 0..=8 {
            let q = PeakQuery::unfiltered(step as f64 * 500.0);
            let count = sp.find_peaks(&q).unwrap().len();
            assert!(count <= previous);
            previous = count;
        }
    }
}

#[test]
fn cutoff_removes_low_mass_peaks_from_list_and_sum() {
    for sp in curves() {
        let all = sp.find_peaks(&PeakQuery::unfiltered(0.0)).unwrap();
        let q = PeakQuery {
            min_height: 0.0,
            low_mass_cutoff: Some(16.0),
        };
        let kept = sp.find_peaks(&q).unwrap();

        assert!(kept.iter().all(|p| p.x >= 16.0));
        let expected: Vec<_> = all.iter().filter(|p| p.x >= 16.0).copied().collect();
        assert_eq!(kept.peaks, expected);

        let dropped: f64 = all.iter().filter(|p| p.x < 16.0).map(|p| p.height).sum();
        assert_eq!(kept.total_intensity + dropped, all.total_intensity);
    }
}

#[test]
fn total_intensity_is_sum_of_reported_heights() {
    for sp in curves() {
        let report = sp.find_peaks(&PeakQuery::default()).unwrap();
        let sum: f64 = report.iter().map(|p| p.height).sum();
        assert_eq!(report.total_intensity, sum);
    }
}

#[test]
fn peaks_are_in_input_order() {
    for sp in curves() {
        let report = sp.find_peaks(&PeakQuery::unfiltered(0.0)).unwrap();
        assert!(report.peaks.windows(2).all(|w| w[0].index < w[1].index));
    }
}

#[test]
fn empty_input_gives_empty_report() {
    let report = find_peaks(&[], &[], &PeakQuery::default()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.total_intensity, 0.0);
}

#[test]
fn loaded_text_flows_into_report() {
    let text = "10 5\n12 1200\n14 3\n16 1500\n18 2\n20 900\n";
    let sp = parse_two_column(text).unwrap();
    let q = PeakQuery::parse("1000", "16.00").unwrap();
    let report = sp.find_peaks(&q).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.peaks[0].x, 16.0);
    assert_eq!(report.peaks[0].height, 1500.0);
    assert_eq!(report.total_intensity, 1500.0);
}

#[test]
fn nan_in_loaded_text_is_rejected_by_extractor() {
    // "NaN" parses as a float, so the loader accepts it.
    let sp = parse_two_column("1 0\n2 NaN\n3 0\n").unwrap();
    let err = sp.find_peaks(&PeakQuery::default()).unwrap_err();
    assert!(matches!(err, InvalidInputError::NonFiniteIntensity { index: 1, .. }));
}
