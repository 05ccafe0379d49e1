use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use labelmask::extract;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Segmentation image (NIfTI).
    seg_file: PathBuf,

    /// Output prefix; masks land at {prefix}{label}.nii.gz, the manifest at
    /// {prefix}List.csv.
    out_prefix: String,

    /// Labels to process (default: all except 0).
    #[arg(long, num_args = 1..)]
    labels: Option<Vec<i64>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    extract::extract(&args.seg_file, &args.out_prefix, args.labels.as_deref())
}
