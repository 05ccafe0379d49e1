use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use labelmask::invert;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input volume (NIfTI).
    input: PathBuf,

    /// Output volume.
    output: PathBuf,

    /// Upper bound of the inverted intensity range.
    #[arg(long, default_value_t = invert::DEFAULT_SCALE_MAX)]
    scale_max: i32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    invert::invert(&args.input, &args.output, args.scale_max)
}
