//! The batch optimizer run against a real (temporary) directory tree.

use std::fs;

use image::{DynamicImage, Rgb, RgbImage};
use voxelforge::images::Optimizer;

// RGB rather than RGBA: the JPEG encoder rejects alpha channels.
fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

#[test]
fn produces_five_derivatives_and_never_upscales() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("public");
    fs::create_dir_all(&input).unwrap();
    test_image(600, 300).save(input.join("hero.png")).unwrap();

    let output = input.join("optimized");
    let report = Optimizer::new(input.clone(), output.clone()).run().unwrap();

    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.failed, 0);

    let variants = &report.converted[0].variants;
    assert_eq!(variants.len(), 5);
    for variant in variants {
        assert!(variant.path.exists(), "missing {}", variant.path.display());
        match variant.label {
            // Only the 480px cap is below the source width.
            "sm" => assert_eq!((variant.width, variant.height), (480, 240)),
            _ => assert_eq!((variant.width, variant.height), (600, 300)),
        }
    }

    for name in ["hero-sm.webp", "hero-md.webp", "hero-lg.webp", "hero-xl.webp", "hero.webp"] {
        assert!(output.join(name).exists(), "missing {name}");
    }

    let manifest: serde_json::Value =
        serde_json::from_reader(fs::File::open(output.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["converted"].as_array().unwrap().len(), 1);
}

#[test]
fn wide_sources_are_capped_at_every_breakpoint() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("public");
    fs::create_dir_all(&input).unwrap();
    test_image(2400, 1200).save(input.join("banner.jpg")).unwrap();

    let output = input.join("optimized");
    let report = Optimizer::new(input, output).run().unwrap();

    let variants = &report.converted[0].variants;
    for variant in variants {
        let expected = match variant.label {
            "sm" => 480,
            "md" => 768,
            "lg" => 1024,
            "xl" | "standard" => 1920,
            other => panic!("unexpected variant {other}"),
        };
        assert_eq!(variant.width, expected);
        assert_eq!(variant.height, expected / 2);
    }
}

#[test]
fn corrupt_files_are_skipped_without_aborting_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("public");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("broken.jpg"), b"not an image at all").unwrap();
    test_image(64, 64).save(input.join("ok.png")).unwrap();

    let report = Optimizer::new(input.clone(), input.join("optimized"))
        .run()
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.converted.len(), 1);
    assert!(report.converted[0].original.ends_with("ok.png"));
}
