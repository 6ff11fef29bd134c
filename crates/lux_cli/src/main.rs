use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::{load_off, Projection, SceneConfig};
use lux_renderer::Scene;

/// Ray cast a triangle mesh with Blinn-Phong shading.
#[derive(Parser, Debug)]
#[command(name = "lux", version, about)]
struct Args {
    /// Mesh to render (OFF format, triangles only)
    mesh: PathBuf,

    /// JSON scene config (camera, lights, material); defaults if omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "raytrace.png")]
    output: PathBuf,

    /// Override the output width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Override the output height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Use an orthographic camera instead of perspective
    #[arg(long)]
    orthographic: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("Failed to load scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(width) = args.width {
        config.camera.width = width;
    }
    if let Some(height) = args.height {
        config.camera.height = height;
    }
    if args.orthographic {
        config.camera.projection = Projection::Orthographic;
    }

    let start = Instant::now();
    let mesh = load_off(&args.mesh)
        .with_context(|| format!("Failed to load mesh {}", args.mesh.display()))?;
    log::info!(
        "Loaded {} vertices, {} triangles in {:?}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let scene = Scene::new(Arc::new(mesh), &config);
    log::info!(
        "Built BVH with {} nodes (depth {}) in {:?}",
        scene.bvh.node_count(),
        scene.bvh.depth(),
        start.elapsed()
    );

    log::info!(
        "Rendering {}x{} ({:?}, {} lights)",
        scene.camera.image_width,
        scene.camera.image_height,
        scene.camera.projection(),
        scene.shading.lights.len()
    );
    let start = Instant::now();
    let image = scene.render();
    log::info!("Rendered in {:?}", start.elapsed());

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
