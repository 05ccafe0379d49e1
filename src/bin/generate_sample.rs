//! Generate a small deterministic labeled volume for trying out the tool
//! without clinical data.

use ndarray::{ArrayD, IxDyn};
use nifti::writer::WriterOptions;

const SHAPE: [usize; 3] = [32, 32, 16];

fn fill_box(seg: &mut ArrayD<f64>, lo: [usize; 3], hi: [usize; 3], label: f64) {
    for x in lo[0]..hi[0] {
        for y in lo[1]..hi[1] {
            for z in lo[2]..hi[2] {
                seg[[x, y, z]] = label;
            }
        }
    }
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_seg.nii.gz".to_string());

    let mut seg = ArrayD::<f64>::zeros(IxDyn(&SHAPE));

    // Three labeled regions in a zero background. Label values are not
    // contiguous on purpose: downstream tooling must not assume 1..N.
    fill_box(&mut seg, [2, 2, 2], [10, 10, 8], 1.0);
    fill_box(&mut seg, [18, 18, 6], [30, 30, 14], 2.0);
    fill_box(&mut seg, [4, 20, 2], [12, 28, 5], 4.0);

    let labeled: usize = seg.iter().filter(|&&v| v != 0.0).count();

    WriterOptions::new(&output_path)
        .write_nifti(&seg)
        .expect("Failed to write sample segmentation");

    println!(
        "Wrote {labeled} labeled voxels ({}x{}x{}) to {output_path}",
        SHAPE[0], SHAPE[1], SHAPE[2]
    );
}
