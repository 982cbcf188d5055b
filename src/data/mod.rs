/// Data layer: core types, loading, query parsing and peak extraction.
///
/// Architecture:
/// ```text
///  mass  intensity  (.txt)        "1000" / "16.00"
///        │                              │
///        ▼                              ▼
///   ┌──────────┐                  ┌──────────┐
///   │  loader   │  → Spectrum     │  query    │  → PeakQuery
///   └──────────┘                  └──────────┘
///        │                              │
///        └──────────────┬───────────────┘
///                       ▼
///                 ┌──────────┐
///                 │  peaks    │  local maxima → threshold → cutoff
///                 └──────────┘
///                       │
///                       ▼
///                  PeakReport
/// ```

pub mod loader;
pub mod model;
pub mod peaks;
pub mod query;
