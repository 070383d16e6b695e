use image::RgbaImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::config::PipelineConfig;
use crate::types::{FingerEvent, Outline};

/// Traces every extracted outline onto the display frame as a closed
/// polyline. Visual feedback only; the hand candidate is not singled out.
pub fn draw_outlines(frame: &mut RgbaImage, outlines: &[Outline], config: &PipelineConfig) {
    for outline in outlines {
        let pts = &outline.points;
        match pts.len() {
            0 => {}
            1 => {
                draw_filled_circle_mut(frame, (pts[0].x, pts[0].y), 0, config.outline_color);
            }
            _ => {
                for i in 0..pts.len() {
                    let a = pts[i];
                    let b = pts[(i + 1) % pts.len()];
                    draw_line_segment_mut(
                        frame,
                        (a.x as f32, a.y as f32),
                        (b.x as f32, b.y as f32),
                        config.outline_color,
                    );
                }
            }
        }
    }
}

/// Marks each accepted finger gap: filled discs on the gap's start and end
/// points and a smaller, differently colored disc on its deepest point.
pub fn draw_finger_events(frame: &mut RgbaImage, events: &[FingerEvent], config: &PipelineConfig) {
    for event in events {
        draw_filled_circle_mut(
            frame,
            (event.start.x, event.start.y),
            config.endpoint_radius,
            config.endpoint_color,
        );
        draw_filled_circle_mut(
            frame,
            (event.end.x, event.end.y),
            config.endpoint_radius,
            config.endpoint_color,
        );
        draw_filled_circle_mut(
            frame,
            (event.far.x, event.far.y),
            config.far_point_radius,
            config.far_point_color,
        );
    }
}
