//! Per-label mask extraction: the one pass the tool performs.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::ArrayD;
use nifti::writer::WriterOptions;

use crate::data::{filter, loader};

// ---------------------------------------------------------------------------
// Mask computation
// ---------------------------------------------------------------------------

/// Binary mask for one label: 1 where the grid equals `label`, 0 elsewhere.
///
/// Exact equality, no tolerance. Rounding noise in the label encoding is an
/// upstream concern and assumed absent.
pub fn binary_mask(data: &ArrayD<f64>, label: f64) -> ArrayD<u8> {
    data.mapv(|v| u8::from(v == label))
}

// ---------------------------------------------------------------------------
// Extraction pass
// ---------------------------------------------------------------------------

/// Extract one binary mask volume per label, then write the label manifest.
///
/// Labels come from `requested` when given (caller order, filtered to values
/// present in the grid) and are auto-discovered otherwise (distinct non-zero
/// values, ascending). A requested list with no surviving labels prints a
/// diagnostic and returns without writing anything. Masks land at
/// `{out_prefix}{label}.nii.gz`, the manifest at `{out_prefix}List.csv`.
pub fn extract(seg_file: &Path, out_prefix: &str, requested: Option<&[i64]>) -> Result<()> {
    let volume = loader::load_file(seg_file)?;
    let labels = filter::resolve_labels(&volume.distinct_values(), requested);

    if requested.is_some() && labels.is_empty() {
        println!("No specified labels found in segmentation.");
        return Ok(());
    }

    log::debug!("processing {} label(s)", labels.len());

    for &label in &labels {
        let mask = binary_mask(&volume.data, label);
        let out_fname = format!("{out_prefix}{}.nii.gz", label as i64);

        WriterOptions::new(&out_fname)
            .reference_header(&volume.header)
            .write_nifti(&mask)
            .with_context(|| format!("writing mask {out_fname}"))?;

        println!("Saved label {} to {out_fname}", label as i64);
    }

    write_manifest(out_prefix, &labels)?;
    Ok(())
}

/// Persist the processed labels, one plain decimal integer per line, in
/// processing order.
fn write_manifest(out_prefix: &str, labels: &[f64]) -> Result<()> {
    let list_path = format!("{out_prefix}List.csv");

    let mut writer = csv::Writer::from_path(&list_path)
        .with_context(|| format!("creating label manifest {list_path}"))?;
    for &label in labels {
        writer
            .write_record([format!("{}", label as i64)])
            .with_context(|| format!("writing label manifest {list_path}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing label manifest {list_path}"))?;

    println!("Saved list of labels to {list_path}");
    Ok(())
}
