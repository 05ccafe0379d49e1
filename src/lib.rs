//! Single-pass utilities for labeled NIfTI volumes.
//!
//! The main tool extracts per-label binary masks: load a segmentation,
//! resolve the set of labels to process, write one 0/1 volume per label plus
//! a manifest of the labels written. Two companion tools share the same
//! loader/writer path: nonzero-masked intensity inversion and the voxelwise
//! product of two volumes.

pub mod data;
pub mod extract;
pub mod invert;
pub mod multiply;
