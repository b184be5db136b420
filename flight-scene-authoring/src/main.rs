/// Flight scene manifest generator main entry point
mod layout;
mod manifest;

use manifest::ManifestGenerator;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [output-dir]", args[0]);
        std::process::exit(1);
    }

    let output_dir = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("assets/scenes/flight");

    let generator = ManifestGenerator::new(Path::new(output_dir));
    generator.generate_manifest()?;

    Ok(())
}
