use anyhow::Context;
use micro_png::{encode, Format};
use std::{fs, path::Path};

const SIZE: u32 = 256;

fn gradient(format: Format) -> Vec<u32> {
    let mut pixels = Vec::with_capacity((SIZE * SIZE) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let alpha = match format {
                Format::Rgb => 0,
                Format::Rgba => (x ^ y) & 0xff,
            };
            pixels.push((alpha << 24) | (y << 16) | (x << 8) | (0xff - x));
        }
    }
    pixels
}

fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let output_dir = Path::new(
        args.iter()
            .rfind(|arg| arg.as_str() != "-v")
            .map(String::as_str)
            .unwrap_or("."),
    );
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = vec![];
    for format in [Format::Rgb, Format::Rgba] {
        let png = encode(&gradient(format), SIZE, SIZE, format)
            .with_context(|| format!("Failed to encode the {format} gradient"))?;
        let file_name = format!("{format}.png");
        let path = output_dir.join(&file_name);
        fs::write(&path, &png).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {} ({} bytes)", path.display(), png.len());
        written.push(serde_json::json!({
            "file": file_name,
            "format": format.to_string(),
            "width": SIZE,
            "height": SIZE,
            "bytes": png.len(),
        }));
    }
    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let manifest = serde_json::json!({
        "date": now,
        "images": written,
    });
    fs::write(output_dir.join("manifest.json"), manifest.to_string())?;
    Ok(())
}
