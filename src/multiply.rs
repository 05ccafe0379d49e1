//! Voxelwise product of two volumes (e.g. applying a binary mask to an
//! intensity image).

use std::path::Path;

use anyhow::{bail, Context, Result};
use ndarray::ArrayD;
use nifti::writer::WriterOptions;

use crate::data::loader;

/// Elementwise product of two grids. The shapes must match exactly.
pub fn multiply_grids(a: &ArrayD<f64>, b: &ArrayD<f64>) -> Result<ArrayD<f64>> {
    if a.shape() != b.shape() {
        bail!(
            "Input volumes must have the same shape (got {:?} and {:?})",
            a.shape(),
            b.shape()
        );
    }
    Ok(a * b)
}

/// Load two volumes, multiply them voxelwise, and write the product with the
/// first volume's header as reference.
pub fn multiply(img1: &Path, img2: &Path, out_img: &Path) -> Result<()> {
    let vol1 = loader::load_file(img1)?;
    let vol2 = loader::load_file(img2)?;

    let product = multiply_grids(&vol1.data, &vol2.data)?;

    WriterOptions::new(out_img)
        .reference_header(&vol1.header)
        .write_nifti(&product)
        .with_context(|| format!("writing product volume {}", out_img.display()))?;

    println!("Saved output to {}", out_img.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn grid(shape: &[usize], values: Vec<f64>) -> ArrayD<f64> {
        ArrayD::from_shape_vec(IxDyn(shape), values).unwrap()
    }

    #[test]
    fn product_is_voxelwise() {
        let a = grid(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]);
        let b = grid(&[2, 2], vec![0.0, 2.0, 0.5, 1.0]);
        let expected = grid(&[2, 2], vec![0.0, 4.0, 1.5, 4.0]);
        assert_eq!(multiply_grids(&a, &b).unwrap(), expected);
    }

    #[test]
    fn masking_zeroes_out_unselected_voxels() {
        let intensities = grid(&[3], vec![10.0, 20.0, 30.0]);
        let mask = grid(&[3], vec![0.0, 1.0, 0.0]);
        let product = multiply_grids(&intensities, &mask).unwrap();
        assert_eq!(product, grid(&[3], vec![0.0, 20.0, 0.0]));
    }

    #[test]
    fn mismatched_shapes_are_an_error() {
        let a = grid(&[2, 2], vec![0.0; 4]);
        let b = grid(&[4], vec![0.0; 4]);
        let err = multiply_grids(&a, &b).unwrap_err();
        assert!(err.to_string().contains("same shape"));
    }
}
