use anyhow::{Context, Result};
use clap::Parser;
use day3_6::{wire, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let wires = wire::read_wires(&args.input_path).with_context(|| {
        format!(
            "Failed to read wires from given file({}).",
            args.input_path.display()
        )
    })?;

    let crossing = wire::closest_crossing(&wires)?;
    println!(
        "The closest cross point of given wires is {}, whose manhattan distance to central port is {}.",
        crossing.point(),
        crossing.point().mht_dist()
    );

    Ok(())
}
