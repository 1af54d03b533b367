use anyhow::Result;
use clap::Parser;
use healpray_icon_gen::export::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    export::run(args)
}
