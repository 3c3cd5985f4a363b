//! `qex enhance` command implementation
//!
//! Prepares downloaded images for text recognition: boost contrast, then
//! a grayscale morphological close (dilate followed by erode) to knock
//! out dark speckle noise. Files are processed in parallel; a file that
//! fails to decode is logged and skipped, it does not abort the batch.

use crate::error::Result;
use crate::progress;
use image::DynamicImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::close;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Enhance every image in `input_dir` into `output_dir`
pub fn run(input_dir: &Path, output_dir: &Path, contrast: f32) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    let inputs = image_files(input_dir)?;
    info!(
        images = inputs.len(),
        input = %input_dir.display(),
        output = %output_dir.display(),
        "Enhancing images"
    );

    let pb = progress::create_progress_bar(inputs.len() as u64, "Enhancing images");

    let failed: usize = inputs
        .par_iter()
        .map(|input| {
            let result = match input.file_name() {
                Some(name) => enhance_one(input, &output_dir.join(name), contrast),
                None => Ok(()),
            };
            pb.inc(1);
            match result {
                Ok(()) => 0,
                Err(error) => {
                    warn!(image = %input.display(), error = %error, "Enhancement failed");
                    1
                }
            }
        })
        .sum();

    pb.finish_with_message("Enhancement complete".to_string());

    if failed > 0 {
        warn!(failed, "Some images could not be enhanced");
    }

    Ok(())
}

fn image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn enhance_one(input: &Path, output: &Path, contrast: f32) -> Result<()> {
    let img = image::open(input)?;
    let contrasted = img.adjust_contrast(contrast);

    // Recognition runs on luminance anyway; the close (dilate then erode)
    // removes isolated dark specks without thinning strokes.
    let gray = contrasted.to_luma8();
    let denoised = close(&gray, Norm::L1, 1);

    DynamicImage::ImageLuma8(denoised).save(output)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_enhance_one_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.png");
        let output = dir.path().join("out").join("sample.png");
        std::fs::create_dir_all(dir.path().join("out")).unwrap();

        let mut img = GrayImage::from_pixel(32, 32, Luma([200u8]));
        // a lone dark pixel the open should suppress
        img.put_pixel(16, 16, Luma([10u8]));
        img.save(&input).unwrap();

        enhance_one(&input, &output, 25.0).unwrap();

        let enhanced = image::open(&output).unwrap().to_luma8();
        assert_eq!(enhanced.dimensions(), (32, 32));
        assert!(enhanced.get_pixel(16, 16)[0] > 100);
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("not-an-image.jpg");
        std::fs::write(&input, b"plain text").unwrap();

        let result = enhance_one(&input, &dir.path().join("out.jpg"), 25.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let files = image_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }
}
