use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use labelmask::multiply;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image 1 (NIfTI).
    img1: PathBuf,

    /// Image 2 (NIfTI).
    img2: PathBuf,

    /// Output image.
    out_img: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    multiply::multiply(&args.img1, &args.img2, &args.out_img)
}
