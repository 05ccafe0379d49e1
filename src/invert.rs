//! Intensity inversion over the nonzero voxels of a volume.

use std::path::Path;

use anyhow::{bail, Context, Result};
use ndarray::ArrayD;
use nifti::writer::WriterOptions;

use crate::data::loader;

/// Default upper bound of the inverted intensity range.
pub const DEFAULT_SCALE_MAX: i32 = 2048;

/// Invert the nonzero intensities of a grid onto `[0, scale_max]`.
///
/// Nonzero (strictly positive) voxels are rescaled to `[0, scale_max]` and
/// flipped: the brightest voxel maps to 0, the dimmest to `scale_max`.
/// Background voxels (zero or negative) stay 0. A grid with no positive
/// voxels, or whose positive voxels are all one intensity, is an error.
pub fn invert_intensities(data: &ArrayD<f64>, scale_max: i32) -> Result<ArrayD<i32>> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data.iter().filter(|&&v| v > 0.0) {
        min = min.min(v);
        max = max.max(v);
    }

    if min == f64::INFINITY {
        bail!("Image has no nonzero voxels to invert.");
    }
    if max == min {
        bail!("Nonzero voxels have constant intensity; nothing to invert.");
    }

    let range = max - min;
    Ok(data.mapv(|v| {
        if v > 0.0 {
            scale_max - (((v - min) / range) * f64::from(scale_max)).round() as i32
        } else {
            0
        }
    }))
}

/// Load a volume, invert its nonzero intensities, and write the result with
/// the source header as reference.
pub fn invert(input: &Path, output: &Path, scale_max: i32) -> Result<()> {
    let volume = loader::load_file(input)?;
    let inverted = invert_intensities(&volume.data, scale_max)?;

    WriterOptions::new(output)
        .reference_header(&volume.header)
        .write_nifti(&inverted)
        .with_context(|| format!("writing inverted volume {}", output.display()))?;

    println!("Saved inverted volume to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn grid(values: Vec<f64>) -> ArrayD<f64> {
        ArrayD::from_shape_vec(IxDyn(&[values.len()]), values).unwrap()
    }

    #[test]
    fn brightest_maps_to_zero_and_dimmest_to_scale_max() {
        let inverted = invert_intensities(&grid(vec![0.0, 10.0, 20.0, 30.0]), 2048).unwrap();
        assert_eq!(inverted[[0]], 0);
        assert_eq!(inverted[[1]], 2048);
        assert_eq!(inverted[[2]], 1024);
        assert_eq!(inverted[[3]], 0);
    }

    #[test]
    fn negative_voxels_count_as_background() {
        let inverted = invert_intensities(&grid(vec![-5.0, 1.0, 3.0]), 100).unwrap();
        assert_eq!(inverted[[0]], 0);
        assert_eq!(inverted[[1]], 100);
        assert_eq!(inverted[[2]], 0);
    }

    #[test]
    fn all_zero_grid_is_an_error() {
        let err = invert_intensities(&grid(vec![0.0, 0.0]), 2048).unwrap_err();
        assert!(err.to_string().contains("no nonzero voxels"));
    }

    #[test]
    fn constant_nonzero_intensity_is_an_error() {
        assert!(invert_intensities(&grid(vec![0.0, 7.0, 7.0]), 2048).is_err());
    }
}
