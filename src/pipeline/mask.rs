use image::GrayImage;
use imageproc::contrast::otsu_level;
use imageproc::filter::gaussian_blur_f32;

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Denoises a gray frame and binarizes it into a foreground mask.
///
/// Blur first, then a global Otsu threshold with inverted output: pixels at or
/// below the computed level become foreground. This assumes the hand is
/// presented dark against a lighter background.
pub fn binarize(gray: &GrayImage, blur_kernel: u32) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, sigma_for_kernel(blur_kernel));
    let level = otsu_level(&blurred);

    let mut mask = blurred;
    for px in mask.pixels_mut() {
        px.0[0] = if px.0[0] <= level {
            FOREGROUND
        } else {
            BACKGROUND
        };
    }
    mask
}

/// Sigma a given odd kernel side length implies when left unspecified,
/// matching the common auto-sigma rule for Gaussian smoothing.
fn sigma_for_kernel(kernel: u32) -> f32 {
    0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
}
