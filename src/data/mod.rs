/// Data layer: core types, loading, and label selection.
///
/// Architecture:
/// ```text
///  .nii / .nii.gz
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LabelVolume
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LabelVolume  │  ArrayD<f64> grid + NiftiHeader
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  resolve requested labels → labels to process
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
