use image::Rgba;

use crate::error::PipelineError;

/// Tunable parameters of the analysis pipeline.
///
/// The defaults reproduce the behavior the pipeline was tuned with. Both the
/// blur kernel and the depth threshold are resolution-dependent: they assume a
/// hand that fills a substantial part of the frame and are not normalized by
/// frame size or outline perimeter. Known limitation, kept deliberately.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Side length of the Gaussian blur kernel, in pixels. Must be odd.
    pub blur_kernel: u32,
    /// Minimum defect depth, in pixels, for a defect to count as a finger
    /// gap. Strictly-greater comparison: a defect exactly at the threshold is
    /// rejected.
    pub depth_threshold: f32,
    /// Color used to trace every extracted outline.
    pub outline_color: Rgba<u8>,
    /// Color of the markers at a finger gap's start and end points.
    pub endpoint_color: Rgba<u8>,
    /// Color of the marker at a finger gap's deepest point.
    pub far_point_color: Rgba<u8>,
    /// Radius of the start/end markers, in pixels.
    pub endpoint_radius: i32,
    /// Radius of the deepest-point marker, in pixels.
    pub far_point_radius: i32,
}

impl PipelineConfig {
    pub const DEFAULT_BLUR_KERNEL: u32 = 5;
    pub const DEFAULT_DEPTH_THRESHOLD: f32 = 50.0;
    pub const DEFAULT_ENDPOINT_RADIUS: i32 = 10;
    pub const DEFAULT_FAR_POINT_RADIUS: i32 = 5;

    /// Checks that every field is in its usable range.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.blur_kernel == 0 || self.blur_kernel % 2 == 0 {
            return Err(PipelineError::Config(format!(
                "blur kernel must be odd and non-zero, got {}",
                self.blur_kernel
            )));
        }
        if !self.depth_threshold.is_finite() || self.depth_threshold < 0.0 {
            return Err(PipelineError::Config(format!(
                "depth threshold must be finite and non-negative, got {}",
                self.depth_threshold
            )));
        }
        if self.endpoint_radius < 0 || self.far_point_radius < 0 {
            return Err(PipelineError::Config(format!(
                "marker radii must be non-negative, got {} and {}",
                self.endpoint_radius, self.far_point_radius
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            blur_kernel: Self::DEFAULT_BLUR_KERNEL,
            depth_threshold: Self::DEFAULT_DEPTH_THRESHOLD,
            outline_color: Rgba([255, 0, 0, 255]),
            endpoint_color: Rgba([255, 0, 0, 255]),
            far_point_color: Rgba([0, 255, 0, 255]),
            endpoint_radius: Self::DEFAULT_ENDPOINT_RADIUS,
            far_point_radius: Self::DEFAULT_FAR_POINT_RADIUS,
        }
    }
}
