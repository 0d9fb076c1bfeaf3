use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

pub fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"),
        None => false,
    }
}

// --- Image files of a directory, sorted by name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

// Orientation tag of a JPEG, 1 (normal) when absent or unreadable
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_image_extensions() {
        assert!(is_image(Path::new("a/b/photo.JPG")));
        assert!(is_image(Path::new("slide.png")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("README")));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = std::env::temp_dir().join(format!("carousel-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), b"no pictures here").unwrap();

        let err = load_sorted_image_paths(&dir).unwrap_err();
        assert!(err.to_string().contains("No image files"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn images_are_sorted_by_name() {
        let dir = std::env::temp_dir().join(format!("carousel-sorted-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["c.png", "a.jpg", "b.gif", "skip.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.gif", "c.png"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
