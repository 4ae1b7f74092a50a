use std::fs;

use anyhow::{Context, Result};
use cavegen::{GenerationParams, Seed, generate_level};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Generate and preview cave levels", long_about = None)]
struct Args {
    /// Path to a JSON parameter file; overrides the individual flags below
    #[arg(long)]
    params: Option<String>,
    #[arg(long, default_value_t = 64)]
    width: usize,
    #[arg(long, default_value_t = 36)]
    height: usize,
    /// Numeric values seed the stream directly, anything else is hashed
    #[arg(long, default_value = "0")]
    seed: String,
    #[arg(long, default_value_t = 45)]
    fill_percent: u8,
    #[arg(long, default_value_t = 5)]
    smooth_iterations: u32,
    #[arg(long, default_value_t = 4)]
    wall_threshold: u8,
    #[arg(long, default_value_t = 10)]
    min_region_size: usize,
    #[arg(long, default_value_t = 1)]
    carve_radius: usize,
    /// Generate this many consecutive numeric seeds and report outcomes
    /// instead of printing a single map
    #[arg(long)]
    runs: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let params = resolve_params(&args)?;

    match args.runs {
        Some(runs) => report_batch(&params, runs),
        None => preview(params),
    }
}

fn resolve_params(args: &Args) -> Result<GenerationParams> {
    if let Some(path) = &args.params {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read parameter file: {path}"))?;
        let params = serde_json::from_str(&data)
            .with_context(|| format!("Failed to deserialize parameter JSON: {path}"))?;
        return Ok(params);
    }

    Ok(GenerationParams {
        width: args.width,
        height: args.height,
        seed: parse_seed(&args.seed),
        fill_percent: args.fill_percent,
        smooth_iterations: args.smooth_iterations,
        wall_threshold: args.wall_threshold,
        min_region_size: args.min_region_size,
        carve_radius: args.carve_radius,
    })
}

fn parse_seed(raw: &str) -> Seed {
    raw.parse::<u64>().map(Seed::Number).unwrap_or_else(|_| Seed::Text(raw.to_string()))
}

fn preview(params: GenerationParams) -> Result<()> {
    let level = generate_level(params).context("Generation failed")?;

    print!("{}", level.render_ascii());
    println!("Rooms: {}", level.rooms.len());
    println!("Open cells: {}", level.grid.open_cell_count());
    println!("Spawn tile: ({}, {})", level.spawn_tile.x, level.spawn_tile.y);
    Ok(())
}

fn report_batch(params: &GenerationParams, runs: u64) -> Result<()> {
    let base_seed = params.seed.value();
    println!("Generating {runs} levels starting from seed {base_seed}...");

    let mut succeeded = 0_u64;
    for offset in 0..runs {
        let seed = base_seed.wrapping_add(offset);
        let attempt = GenerationParams { seed: Seed::Number(seed), ..params.clone() };
        match generate_level(attempt) {
            Ok(level) => {
                succeeded += 1;
                println!("seed {seed}: {} room(s)", level.rooms.len());
            }
            Err(error) => println!("seed {seed}: {error}"),
        }
    }

    println!("Done. {succeeded}/{runs} levels generated.");
    Ok(())
}
