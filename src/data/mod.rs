/// Data layer: core types, loading, grouping and statistics.
///
/// Architecture:
/// ```text
///  bundled iris.csv / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset │  Vec<IrisRecord>, read-only
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species → GroupView / table indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean, std dev, max, min
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
