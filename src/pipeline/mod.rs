//! Frame-to-finger-count pipeline.
//!
//! Five stages run in order, each consuming the previous stage's output:
//! binarize, trace outlines, build the hand hull, analyze convexity defects,
//! annotate. Everything is frame-local; nothing survives one invocation.

pub mod defects;
pub mod hull;
pub mod mask;
pub mod outline;
pub mod overlay;

use image::{GrayImage, RgbaImage};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::types::FrameAnalysis;

/// Analyzes one frame: estimates the extended-finger count of the dominant
/// hand silhouette in `gray` and annotates `rgba` in place.
///
/// `gray` and `rgba` must have identical dimensions. A frame with no usable
/// hand candidate is not an error: it yields a zero count and, beyond the
/// outline trace, an untouched display frame. Errors are reserved for caller
/// contract violations and internal geometry faults.
pub fn analyze_frame(
    gray: &GrayImage,
    rgba: &mut RgbaImage,
    config: &PipelineConfig,
) -> Result<FrameAnalysis, PipelineError> {
    config.validate()?;
    if gray.dimensions() != rgba.dimensions() {
        return Err(PipelineError::FrameSizeMismatch {
            gray: gray.dimensions(),
            rgba: rgba.dimensions(),
        });
    }

    let mask = mask::binarize(gray, config.blur_kernel);
    let outlines = outline::extract_outlines(&mask);
    overlay::draw_outlines(rgba, &outlines, config);

    let Some(hand) = outline::dominant_outline(&outlines) else {
        log::debug!("no hand candidate in frame");
        return Ok(FrameAnalysis::no_hand());
    };
    let hand = &outlines[hand].points;

    let hull = hull::convex_hull_indices(hand);
    if hull.is_empty() {
        log::debug!("hand candidate has no hull, skipping defect analysis");
        return Ok(FrameAnalysis::no_hand());
    }

    let all_defects = defects::convexity_defects(hand, &hull)?;
    let events = defects::classify_fingers(hand, &all_defects, config.depth_threshold)?;
    overlay::draw_finger_events(rgba, &events, config);

    log::debug!("finger count: {}", events.len());
    Ok(FrameAnalysis {
        finger_count: events.len(),
        events,
    })
}
