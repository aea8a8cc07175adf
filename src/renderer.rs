/*

    Given a diagram Scene, render an image.

    The renderer hides behind the SceneRenderer capability trait so
    the orientation logic stays testable without any display stack.
    The shipped implementation casts one ray bundle per pixel against
    the cuboid faces, the induction arrow and the axis guides, then
    writes the result as a PNG plus a JSON scene document.

    @date: 2 Dec, 2025
    @author: bartu
*/

use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use crate::camera::Camera;
use crate::geometry::{
    moller_trumbore_intersection, point_segment_distance, ray_segment_distance, tri_normal,
};
use crate::image::ImageData;
use crate::interval::{FloatConst, Interval};
use crate::prelude::*;
use crate::ray::Ray;
use crate::sampler::square_jitter;
use crate::scene::Scene;

/// Fraction of the arrow length taken by the tip cone.
pub const ARROW_LENGTH_RATIO: Float = 0.2;

const RAY_EPSILON: Float = 1e-6;

// Ratios of the axis limit, tuned for the default framing
const SHAFT_RADIUS_RATIO: Float = 0.008;
const TIP_RADIUS_RATIO: Float = 0.024;
const GUIDE_RADIUS_RATIO: Float = 0.004;
const EDGE_BAND_RATIO: Float = 0.01;

const BACKGROUND_COLOR: Vector3 = Vector3::new(1.0, 1.0, 1.0);
const FACE_COLOR: Vector3 = Vector3::new(0.53, 0.81, 0.92); // sky blue
const EDGE_COLOR: Vector3 = Vector3::new(0.80, 0.15, 0.15);
const ARROW_COLOR: Vector3 = Vector3::new(0.10, 0.60, 0.15);
const GUIDE_COLOR: Vector3 = Vector3::new(0.55, 0.55, 0.55);

#[derive(Debug, SmartDefault)]
pub struct RenderConfig {
    #[default = 1000]
    pub width: usize,
    #[default = 800]
    pub height: usize,

    /// Jittered sub-pixel samples; 1 disables antialiasing
    #[default = 4]
    pub num_samples: usize,

    #[default = "./"]
    pub output_dir: String,
}

/// Capability interface consuming the built scene, so the decision
/// core never depends on how (or whether) the diagram is displayed.
pub trait SceneRenderer {
    fn render(&self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>>;
}

#[derive(Debug, Default)]
pub struct PngRenderer {
    pub config: RenderConfig,
}

impl PngRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn save_scene_json(&self, scene: &Scene, basename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let path = Path::new(&self.config.output_dir).join(format!("{basename}.json"));
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), scene)?;
        info!("Scene document saved to {}", path.display());
        Ok(())
    }
}

impl SceneRenderer for PngRenderer {
    fn render(&self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
        let start = Instant::now();
        let resolution = [self.config.width, self.config.height];
        let camera = Camera::frame_scene(scene, resolution);
        let tracables = Tracables::build(scene);
        let samples = self.config.num_samples.max(1);

        info!(
            ">> Rendering '{}' diagram at {}x{} with {} sample(s) per pixel...",
            scene.title, resolution[0], resolution[1], samples
        );
        info!("Diagram axes span 0..{:.2} inches.", scene.axis_limit());
        // The annotation has no font rasterizer to land in the image,
        // so it rides along on the console
        for line in scene.label.lines() {
            info!("  {}", line);
        }

        // --- Rayon Multithreading ---
        let pixel_colors: Vec<Vector3> = (0..resolution[0] * resolution[1])
            .into_par_iter()
            .map(|idx| {
                let (col, row) = (idx % resolution[0], idx / resolution[0]);
                let mut accumulated = Vector3::ZERO;
                for _ in 0..samples {
                    let jitter = if samples == 1 { (0.0, 0.0) } else { square_jitter() };
                    let ray = camera.pixel_ray(col, row, jitter);
                    accumulated += shade_ray(&ray, &tracables);
                }
                accumulated / samples as Float
            })
            .collect();
        // -----------------------------

        let basename = diagram_basename(&scene.title);
        let im = ImageData::new_from_colors(resolution, format!("{basename}.png"), pixel_colors);
        im.save_png(&self.config.output_dir)?;
        self.save_scene_json(scene, &basename)?;

        info!("Rendering of {} took: {:?}", scene.title, start.elapsed());
        Ok(())
    }
}

/// File-friendly name derived from the diagram title.
fn diagram_basename(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/// Scene geometry unpacked into ray-testable primitives.
struct Tracables {
    tris: Vec<([Vector3; 3], usize)>, // two triangles per quad face
    quads: [[Vector3; 4]; 6],
    face_normals: [Vector3; 6],
    arrow_shaft: (Vector3, Vector3),
    arrow_tip: (Vector3, Vector3),
    axes: [(Vector3, Vector3); 3],
    shaft_radius: Float,
    tip_radius: Float,
    guide_radius: Float,
    edge_band: Float,
}

impl Tracables {
    fn build(scene: &Scene) -> Self {
        let limit = scene.axis_limit();

        let mut tris = Vec::with_capacity(12);
        let mut quads = [[Vector3::ZERO; 4]; 6];
        let mut face_normals = [Vector3::ZERO; 6];
        for face in 0..quads.len() {
            let corners = scene.face_corners(face);
            tris.push(([corners[0], corners[1], corners[2]], face));
            tris.push(([corners[0], corners[2], corners[3]], face));
            face_normals[face] = tri_normal(&corners[0], &corners[1], &corners[2]);
            quads[face] = corners;
        }

        // Arrow from the origin along the induction direction, split
        // into a shaft and a shrinking tip cone
        let tip = scene.induct_direction;
        let tip_base = tip * (1.0 - ARROW_LENGTH_RATIO);

        Self {
            tris,
            quads,
            face_normals,
            arrow_shaft: (Vector3::ZERO, tip_base),
            arrow_tip: (tip_base, tip),
            axes: [
                (Vector3::ZERO, Vector3::X * limit),
                (Vector3::ZERO, Vector3::Y * limit),
                (Vector3::ZERO, Vector3::Z * limit),
            ],
            shaft_radius: SHAFT_RADIUS_RATIO * limit,
            tip_radius: TIP_RADIUS_RATIO * limit,
            guide_radius: GUIDE_RADIUS_RATIO * limit,
            edge_band: EDGE_BAND_RATIO * limit,
        }
    }
}

/// Closest-hit shading for one primary ray.
fn shade_ray(ray: &Ray, tracables: &Tracables) -> Vector3 {
    let t_interval = Interval::positive(RAY_EPSILON);
    let mut best_t: Float = FloatConst::INF;
    let mut color = BACKGROUND_COLOR;

    // Cuboid faces, semi matte with darkened edge bands
    for (corners, face) in &tracables.tris {
        if let Some(t) = moller_trumbore_intersection(ray, &t_interval, corners) {
            if t < best_t {
                best_t = t;
                let hit_point = ray.at(t);
                let quad = &tracables.quads[*face];
                let edge_distance = (0..4)
                    .map(|i| point_segment_distance(hit_point, quad[i], quad[(i + 1) % 4]))
                    .fold(FloatConst::INF, Float::min);

                color = if edge_distance < tracables.edge_band {
                    EDGE_COLOR
                } else {
                    let lambert = tracables.face_normals[*face].dot(ray.direction).abs();
                    FACE_COLOR * (0.45 + 0.55 * lambert)
                };
            }
        }
    }

    // Machine induction arrow: shaft cylinder then tip cone
    let (shaft_a, shaft_b) = tracables.arrow_shaft;
    let (t_ray, _, distance) = ray_segment_distance(ray, shaft_a, shaft_b);
    if t_ray > RAY_EPSILON && distance < tracables.shaft_radius && t_ray < best_t {
        best_t = t_ray;
        color = ARROW_COLOR;
    }
    let (tip_base, tip) = tracables.arrow_tip;
    let (t_ray, seg_t, distance) = ray_segment_distance(ray, tip_base, tip);
    if t_ray > RAY_EPSILON && distance < tracables.tip_radius * (1.0 - seg_t) && t_ray < best_t {
        best_t = t_ray;
        color = ARROW_COLOR;
    }

    // Axis guides
    for (axis_a, axis_b) in &tracables.axes {
        let (t_ray, _, distance) = ray_segment_distance(ray, *axis_a, *axis_b);
        if t_ray > RAY_EPSILON && distance < tracables.guide_radius && t_ray < best_t {
            best_t = t_ray;
            color = GUIDE_COLOR;
        }
    }

    color
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDims;
    use crate::orientation::OrientationCategory;

    fn standard_scene() -> Scene {
        // Flat lay: extents (5, 3, 4)
        let dims = ItemDims::new(5.0, 4.0, 3.0);
        Scene::build(&dims, OrientationCategory::StandardDefault).unwrap()
    }

    #[test]
    fn test_head_on_ray_shades_a_face() {
        let scene = standard_scene();
        let tracables = Tracables::build(&scene);
        let center = scene.center();
        let ray = Ray::new(
            Vector3::new(center.x, center.y, 100.0),
            Vector3::new(0.0, 0.0, -1.0),
        );
        let color = shade_ray(&ray, &tracables);
        // Face interior, far from every edge: lambert-scaled sky blue
        assert!((color - FACE_COLOR).length() < 0.1);
    }

    #[test]
    fn test_missing_ray_keeps_background() {
        let scene = standard_scene();
        let tracables = Tracables::build(&scene);
        let ray = Ray::new(
            Vector3::new(0.0, 0.0, 100.0),
            Vector3::new(0.0, 0.0, 1.0), // away from everything
        );
        assert_eq!(shade_ray(&ray, &tracables), BACKGROUND_COLOR);
    }

    #[test]
    fn test_arrow_shaft_is_visible_outside_the_cuboid() {
        let scene = standard_scene();
        let tracables = Tracables::build(&scene);
        // Graze just below the bag floor so no face occludes the shaft,
        // within the shaft radius (0.008 * 6.0 = 0.048)
        let ray = Ray::new(
            Vector3::new(2.0, -0.03, 100.0),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert_eq!(shade_ray(&ray, &tracables), ARROW_COLOR);
    }

    #[test]
    fn test_face_edge_band_is_marked() {
        let scene = standard_scene();
        let tracables = Tracables::build(&scene);
        // Hit the z = 4 face right next to its top edge (y close to 3)
        let ray = Ray::new(
            Vector3::new(2.5, 2.99, 100.0),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert_eq!(shade_ray(&ray, &tracables), EDGE_COLOR);
    }

    #[test]
    fn test_diagram_basename() {
        assert_eq!(diagram_basename("Stand Tall"), "stand_tall");
        assert_eq!(diagram_basename("Standard"), "standard");
    }

    #[test]
    fn test_render_writes_png_and_json() {
        let out = tempfile::tempdir().unwrap();
        let renderer = PngRenderer::new(RenderConfig {
            width: 64,
            height: 48,
            num_samples: 1,
            output_dir: out.path().to_string_lossy().into_owned(),
        });
        let scene = standard_scene();
        renderer.render(&scene).unwrap();
        assert!(out.path().join("standard.png").is_file());
        assert!(out.path().join("standard.json").is_file());
    }
}
