use std::path::Path;

use anyhow::{Context, Result};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};

use super::model::LabelVolume;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a labeled volume from a NIfTI file (`.nii` or `.nii.gz`).
///
/// The voxel grid is converted to `f64` (honoring the header's scaling
/// slope/intercept, like nibabel's `get_fdata`); the header is kept as-is so
/// the affine and auxiliary metadata pass through to every output untouched.
pub fn load_file(path: &Path) -> Result<LabelVolume> {
    let object = ReaderOptions::new()
        .read_file(path)
        .with_context(|| format!("reading NIfTI file {}", path.display()))?;

    let header = object.header().clone();
    let data = object
        .into_volume()
        .into_ndarray::<f64>()
        .with_context(|| format!("decoding voxel data of {}", path.display()))?;

    log::debug!(
        "loaded {} – shape {:?}, datatype {}",
        path.display(),
        data.shape(),
        header.datatype
    );

    Ok(LabelVolume::new(data, header))
}
