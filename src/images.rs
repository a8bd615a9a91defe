//! Batch WebP derivative pipeline behind the `optimize-images` binary.
//!
//! Scans a directory tree for raster images and emits five derivatives
//! per image: four width-capped responsive variants plus a standard one,
//! all lossy WebP at a fixed quality. Caps only ever downscale.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::imageops::FilterType;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

pub const QUALITY: f32 = 80.0;
pub const MAX_WIDTH: u32 = 1920;

/// Responsive breakpoints: output suffix and width cap.
pub const BREAKPOINTS: [(&str, u32); 4] = [("sm", 480), ("md", 768), ("lg", 1024), ("xl", 1920)];

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct Variant {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
pub struct ConvertedImage {
    pub original: PathBuf,
    pub original_bytes: u64,
    pub variants: Vec<Variant>,
}

impl ConvertedImage {
    /// Size of the standard (suffixless) derivative.
    pub fn standard_bytes(&self) -> u64 {
        self.variants
            .iter()
            .find(|v| v.label == "standard")
            .map(|v| v.bytes)
            .unwrap_or(0)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub converted: Vec<ConvertedImage>,
    pub failed: usize,
    pub total_original_bytes: u64,
    /// Aggregated over the standard variants only, mirroring how the
    /// savings figure is quoted.
    pub total_webp_bytes: u64,
}

impl BatchReport {
    pub fn savings_percent(&self) -> f64 {
        if self.total_original_bytes == 0 {
            return 0.0;
        }
        (self.total_original_bytes.saturating_sub(self.total_webp_bytes)) as f64
            / self.total_original_bytes as f64
            * 100.0
    }
}

pub struct Optimizer {
    input: PathBuf,
    output: PathBuf,
    quality: f32,
}

impl Optimizer {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            quality: QUALITY,
        }
    }

    /// All convertible images under the input tree, sorted for stable
    /// output. Extension matching is case-insensitive.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| has_image_extension(path))
            .collect();
        files.sort();
        files
    }

    /// Converts the whole tree. A file that fails to decode or encode is
    /// reported and skipped; it never aborts the batch.
    pub fn run(&self) -> Result<BatchReport, ImageError> {
        fs::create_dir_all(&self.output)?;

        let mut report = BatchReport::default();
        for path in self.scan() {
            match self.convert(&path) {
                Ok(converted) => {
                    info!(
                        "converted {} ({} variants)",
                        path.display(),
                        converted.variants.len()
                    );
                    report.total_original_bytes += converted.original_bytes;
                    report.total_webp_bytes += converted.standard_bytes();
                    report.converted.push(converted);
                }
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    report.failed += 1;
                }
            }
        }

        let manifest_path = self.output.join("manifest.json");
        let manifest = fs::File::create(&manifest_path)?;
        serde_json::to_writer_pretty(manifest, &report)?;
        Ok(report)
    }

    /// Produces the five derivatives for one image.
    pub fn convert(&self, path: &Path) -> Result<ConvertedImage, ImageError> {
        let img = image::open(path).map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let original_bytes = fs::metadata(path)?.len();

        let mut variants = Vec::with_capacity(BREAKPOINTS.len() + 1);
        for (suffix, cap) in BREAKPOINTS {
            let out = self.output.join(format!("{stem}-{suffix}.webp"));
            variants.push(self.encode_variant(&img, &out, suffix, cap)?);
        }
        let standard = self.output.join(format!("{stem}.webp"));
        variants.push(self.encode_variant(&img, &standard, "standard", MAX_WIDTH)?);

        Ok(ConvertedImage {
            original: path.to_path_buf(),
            original_bytes,
            variants,
        })
    }

    fn encode_variant(
        &self,
        img: &DynamicImage,
        out: &Path,
        label: &'static str,
        cap: u32,
    ) -> Result<Variant, ImageError> {
        let resized = cap_width(img, cap);
        // The libwebp encoder only accepts 8-bit RGB(A) buffers.
        let rgba = resized.to_rgba8();
        let encoder = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height());
        let data = encoder.encode(self.quality);
        fs::write(out, &*data)?;
        Ok(Variant {
            label,
            width: resized.width(),
            height: resized.height(),
            path: out.to_path_buf(),
            bytes: data.len() as u64,
        })
    }
}

/// Downscales to fit the width cap, preserving aspect ratio. Images
/// already narrower than the cap come back unchanged.
fn cap_width(img: &DynamicImage, cap: u32) -> DynamicImage {
    if img.width() <= cap {
        return img.clone();
    }
    let height = ((img.height() as u64 * cap as u64) / img.width() as u64).max(1) as u32;
    img.resize_exact(cap, height, FilterType::Lanczos3)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
