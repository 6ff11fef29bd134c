//! Simple ray casting example.
//!
//! Renders a procedurally built octahedron with the default lights and
//! saves it as PNG.

use std::sync::Arc;

use lux_renderer::{DVec3, Mesh, Scene, SceneConfig};

fn main() {
    println!("Lux Ray Caster - Simple Example");
    println!("===============================");

    let start = std::time::Instant::now();
    let mesh = Arc::new(build_octahedron(0.6));
    let mut config = SceneConfig::default();
    config.camera.width = 400;
    config.camera.height = 300;
    let scene = Scene::new(mesh, &config);
    println!(
        "Scene built in {:?} ({} BVH nodes)",
        start.elapsed(),
        scene.bvh.node_count()
    );

    let start = std::time::Instant::now();
    let image = scene.render();
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    let filename = "octahedron.png";
    image.save_png(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_octahedron(radius: f64) -> Mesh {
    let positions = vec![
        DVec3::new(radius, 0.0, 0.0),
        DVec3::new(-radius, 0.0, 0.0),
        DVec3::new(0.0, radius, 0.0),
        DVec3::new(0.0, -radius, 0.0),
        DVec3::new(0.0, 0.0, radius),
        DVec3::new(0.0, 0.0, -radius),
    ];
    // Counter-clockwise seen from outside, so normals point outward
    let triangles = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    Mesh::new(positions, triangles).expect("octahedron indices are valid")
}
