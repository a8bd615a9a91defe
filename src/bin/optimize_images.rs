use std::path::PathBuf;

use anyhow::{Context, Result};

use voxelforge::images::{MAX_WIDTH, Optimizer, QUALITY};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public"));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.join("optimized"));

    println!("Starting WebP conversion with multiple sizes...");
    println!("Input directory: {}", input.display());
    println!("Output directory: {}", output.display());
    println!("Quality: {QUALITY}%");
    println!("Max width: {MAX_WIDTH}px");
    println!();

    let optimizer = Optimizer::new(input, output);
    let report = optimizer
        .run()
        .context("WebP batch conversion failed")?;

    println!("WebP conversion complete!");
    println!("Converted: {} images, skipped: {}", report.converted.len(), report.failed);
    println!("Total original size: {:.2}MB", mb(report.total_original_bytes));
    println!("Total WebP size: {:.2}MB", mb(report.total_webp_bytes));
    println!("Total savings: {:.1}%", report.savings_percent());
    println!();
    println!("Converted files:");
    for file in &report.converted {
        println!("  {}:", file.original.display());
        for variant in &file.variants {
            println!(
                "    - {}: {}x{}, {:.2}MB",
                variant.label, variant.width, variant.height, mb(variant.bytes)
            );
        }
    }

    Ok(())
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}
