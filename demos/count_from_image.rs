use std::path::PathBuf;

use anyhow::{Context, Result};
use finger_count::{PipelineConfig, analyze_frame};

fn main() -> Result<()> {
    env_logger::init();

    let mut image_paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if image_paths.is_empty() {
        image_paths = demo_images()?;
    }
    if image_paths.is_empty() {
        anyhow::bail!("no input images; pass paths or populate a demo/ directory");
    }

    let config = PipelineConfig::default();
    for path in image_paths {
        let source = image::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let gray = source.to_luma8();
        let mut display = source.to_rgba8();

        let analysis = analyze_frame(&gray, &mut display, &config)
            .with_context(|| format!("failed to analyze {}", path.display()))?;

        println!("{} -> {} fingers", path.display(), analysis.finger_count);
        for (i, event) in analysis.events.iter().enumerate() {
            println!(
                "  gap {}: ({}, {}) .. ({}, {}), deepest ({}, {}) at {:.1}px",
                i,
                event.start.x,
                event.start.y,
                event.end.x,
                event.end.y,
                event.far.x,
                event.far.y,
                event.depth
            );
        }

        let out = path.with_extension("annotated.png");
        display
            .save(&out)
            .with_context(|| format!("failed to save {}", out.display()))?;
        println!("  annotated frame written to {}", out.display());
    }

    Ok(())
}

fn demo_images() -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    let entries = match std::fs::read_dir("demo") {
        Ok(entries) => entries,
        Err(_) => return Ok(images),
    };
    for entry in entries {
        let path = entry?.path();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ["png", "jpg", "jpeg"]
                .iter()
                .any(|v| ext.eq_ignore_ascii_case(v))
            {
                images.push(path);
            }
        }
    }
    images.sort();
    Ok(images)
}
