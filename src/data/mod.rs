//! Data layer: core types, loading, mirroring and peak detection.
//!
//! Architecture:
//! ```text
//!  .txt / .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Series
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ transform  │  series ++ reverse(series)
//!   └───────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  peaks    │  local maxima ≥ threshold → Vec<Peak>
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod peaks;
pub mod transform;
