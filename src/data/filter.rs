// ---------------------------------------------------------------------------
// Label selection: which labels get a mask, and in what order
// ---------------------------------------------------------------------------

/// Resolve the labels to process against the grid's distinct values.
///
/// * `requested` absent → every distinct non-zero value, ascending (the
///   order `distinct` already carries).
/// * `requested` present → the caller's values in their original order,
///   keeping only those actually present in the grid. `0` is allowed when
///   asked for explicitly. Duplicates are kept: a repeated entry produces a
///   repeated (overwritten) output and a repeated manifest row.
pub fn resolve_labels(distinct: &[f64], requested: Option<&[i64]>) -> Vec<f64> {
    match requested {
        None => distinct.iter().copied().filter(|&v| v != 0.0).collect(),
        Some(list) => list
            .iter()
            .map(|&lbl| lbl as f64)
            .filter(|lbl| distinct.contains(lbl))
            .collect(),
    }
}
