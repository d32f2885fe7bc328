use anyhow::{Context, Result};
use clap::Parser;
use day3_6::{orbit, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let orbit_tree = orbit::read_orbits(&args.input_path).with_context(|| {
        format!(
            "Failed to read orbit map from given file({}).",
            args.input_path.display()
        )
    })?;

    let total_orbit_count = orbit_tree.total_orbit_count()?;
    println!(
        "Total orbit count of given orbit map is {}.",
        total_orbit_count
    );

    Ok(())
}
