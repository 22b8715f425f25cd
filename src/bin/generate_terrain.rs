//! Terrain generator binary: writes a heightmap and splat maps as PNGs.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>        JSON generation config (defaults for missing fields)
//!   --width <N>            Heightmap width (default: 513)
//!   --height <N>           Heightmap height (default: 513)
//!   --alpha-width <N>      Alphamap width (default: 512)
//!   --alpha-height <N>     Alphamap height (default: 512)
//!   --seed <SEED>          Seed for the seed stream (default: OS entropy)
//!   --fixed-seed <N>       Count noise seeds up from N instead of a random stream
//!   --out <DIR>            Output directory (default: "terrain_out")
//!   --preview              Also write an 8-bit heightmap preview
//!
//! Output structure:
//!   <out>/
//!     manifest.json
//!     heightmap.png
//!     splat_<layer>.png

use std::path::PathBuf;
use std::process::ExitCode;

use terrasynth::core::logging;
use terrasynth::core::Result;
use terrasynth::generation::{
    FixedSeed, GeneratedTerrain, GenerationConfig, GenerationPipeline, SeedGenerator,
};
use terrasynth::sink::PngSink;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(w) = parse_usize_arg(&args, "--width") {
        config.heightmap_size.width = w;
    }
    if let Some(h) = parse_usize_arg(&args, "--height") {
        config.heightmap_size.height = h;
    }
    if let Some(w) = parse_usize_arg(&args, "--alpha-width") {
        config.alphamap_size.width = w;
    }
    if let Some(h) = parse_usize_arg(&args, "--alpha-height") {
        config.alphamap_size.height = h;
    }
    if let Some(seed) = parse_u64_arg(&args, "--seed") {
        config.seed = Some(seed);
    }
    let fixed_seed = parse_u32_arg(&args, "--fixed-seed");
    let out = PathBuf::from(parse_str_arg(&args, "--out").unwrap_or_else(|| "terrain_out".to_string()));
    let preview = args.iter().any(|a| a == "--preview");

    let pipeline = GenerationPipeline::from_config(&config)?;

    println!("=== Terrasynth Terrain Generator ===");
    println!("Heightmap: {}", config.heightmap_size);
    println!("Alphamap:  {}", config.alphamap_size);
    match (fixed_seed, config.seed) {
        (Some(s), _) => println!("Seed:      fixed {}", s),
        (None, Some(s)) => println!("Seed:      {}", s),
        (None, None) => println!("Seed:      entropy"),
    }
    println!("Output:    {}", out.display());
    println!();

    let terrain: GeneratedTerrain = match (fixed_seed, config.seed) {
        (Some(s), _) => pipeline.generate(config.heightmap_size, config.alphamap_size, &mut FixedSeed(s))?,
        (None, Some(s)) => pipeline.generate(
            config.heightmap_size,
            config.alphamap_size,
            &mut SeedGenerator::from_seed_u64(s),
        )?,
        (None, None) => pipeline.generate(
            config.heightmap_size,
            config.alphamap_size,
            &mut SeedGenerator::from_entropy(),
        )?,
    };

    let mut sink = PngSink::new(&out)?;
    terrain.deliver(&mut sink)?;
    if preview {
        terrain.preview(&mut sink)?;
    }
    sink.write_manifest(&terrain, pipeline.params())?;

    if let Some((lo, hi)) = terrain.heights.min_max() {
        println!("Height range: [{:.3}, {:.3}]", lo, hi);
    }
    println!("Seeds: terrain {}, grass {}, moss {}, dirt {}",
        terrain.seeds.terrain,
        terrain.seeds.blend.grass,
        terrain.seeds.blend.moss,
        terrain.seeds.blend.dirt);
    println!("Files: {}", sink.written().len());
    println!();
    println!("=== Generation Complete ===");
    Ok(())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
