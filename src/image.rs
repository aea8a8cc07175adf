

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::prelude::*;


/// RGB pixel buffer for the rendered diagram. Colors are stored in
/// [0, 1] per channel and scaled at encode time.
#[derive(Clone)]
pub struct ImageData {
    pixel_colors: Vec<Vector3>, // Vector of RGB per pixel, row major from the top
    width: usize,
    height: usize,
    name: String,
}

impl ImageData {

    pub fn new(width: usize, height: usize, name: String, pixel_colors: Vec<Vector3>) -> Self {
        debug_assert!(pixel_colors.len() == width * height);
        ImageData {
            pixel_colors,
            width,
            height,
            name,
        }
    }

    pub fn new_from_colors(resolution: [usize; 2], name: String, colors: Vec<Vector3>) -> Self {
        let (width, height) = (resolution[0], resolution[1]);
        Self::new(width, height, name, colors)
    }

    /// Flattened [R1, G1, B1, R2, G2, B2, ...] bytes, clamped per channel.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixel_colors
            .iter()
            .flat_map(|v| [v.x, v.y, v.z])
            .map(|x| (x * 255.0).clamp(0.0, 255.0) as u8)
            .collect()
    }

    fn check_extension(&self, path: &Path, extension: &str) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(extension)
    }

    pub fn get_png_fullpath(&self, path: &str) -> PathBuf {
        // Check if provided path is a folder: if so, create a .png
        // under this folder, otherwise use the provided path as is
        let extension = "png";
        let path = Path::new(path);
        let mut finalpath: PathBuf = path.to_path_buf();
        if path.is_dir() {
            finalpath = path.join(self.name.clone());
        }

        if !self.check_extension(&finalpath, extension) {
            finalpath.set_extension(extension);
            warn!(">> Extension changed to .{}, final path is {}", extension, finalpath.display());
        }
        finalpath
    }

    /// Encode as PNG. Path is either a folder name or a full path
    /// including <imagename>.png; with a folder the stored image name
    /// is used.
    pub fn save_png(&self, path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path: PathBuf = self.get_png_fullpath(path);

        let file = File::create(&path)?;
        let w = &mut BufWriter::new(file);
        let mut encoder = png::Encoder::new(w, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;

        let data = self.to_rgb();
        writer.write_image_data(&data)?;
        info!("Diagram saved to {}", path.display());
        Ok(path)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb_scales_and_clamps() {
        let colors = vec![
            Vector3::new(0.0, 0.5, 1.0),
            Vector3::new(-0.3, 2.0, 0.25),
        ];
        let im = ImageData::new(2, 1, "t.png".to_string(), colors);
        let rgb = im.to_rgb();
        assert_eq!(rgb, vec![0, 127, 255, 0, 255, 63]);
    }

    #[test]
    fn test_png_extension_is_enforced() {
        let im = ImageData::new(1, 1, "diagram".to_string(), vec![Vector3::ONE]);
        let path = im.get_png_fullpath("./standard.jpeg");
        assert_eq!(path, PathBuf::from("./standard.png"));
    }
}
