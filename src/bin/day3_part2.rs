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

    let crossing = wire::earliest_crossing(&wires)?;
    println!(
        "Given wires can reach cross point {} with the fewest combined steps({}).",
        crossing.point(),
        crossing.steps()
    );

    Ok(())
}
