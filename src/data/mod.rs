/// Data layer: core types, loading, and averaging.
///
/// Architecture:
/// ```text
///  new1_1.xlsx … new1_5.xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │  Vec<Table>
///        ▼
///   ┌──────────┐
///   │  average  │  row-wise mean of the amplitude column
///   └──────────┘
///        │
///        ▼
///   AveragedSeries
/// ```

pub mod average;
pub mod loader;
pub mod model;
