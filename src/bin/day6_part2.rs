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

    let (you, santa) = ("YOU", "SAN");
    let transfer_count = orbit_tree.transfer_count(you, santa)?;
    println!(
        "It needs {} orbital transfer(s) to move from the object {} orbits to the object {} orbits.",
        transfer_count, you, santa
    );

    Ok(())
}
