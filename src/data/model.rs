use ndarray::ArrayD;
use nifti::NiftiHeader;

// ---------------------------------------------------------------------------
// LabelVolume – the loaded segmentation image
// ---------------------------------------------------------------------------

/// A labeled volumetric image: the voxel grid plus the source header.
///
/// The grid is loaded as `f64` regardless of the on-disk datatype, so label
/// comparison is exact equality over whatever values the format yields. The
/// header carries the affine (srow/qform fields) and all auxiliary metadata
/// and is reused verbatim for every output volume.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    /// Voxel grid, N-dimensional.
    pub data: ArrayD<f64>,
    /// Source header, reused as the reference for each written mask.
    pub header: NiftiHeader,
}

impl LabelVolume {
    pub fn new(data: ArrayD<f64>, header: NiftiHeader) -> Self {
        Self { data, header }
    }

    /// Voxel-grid shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Sorted list of distinct values present in the grid, including `0`.
    ///
    /// Deterministic sorted-unique semantics: ascending order, one entry per
    /// distinct value, no hidden state.
    pub fn distinct_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.data.iter().copied().collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values
    }
}
