//! Per-frame hand silhouette analysis.
//!
//! Given a grayscale frame and an RGBA display frame of the same size, the
//! pipeline binarizes the gray frame into a foreground mask, traces the
//! dominant silhouette's outline, builds its convex hull and measures the
//! convexity defects between the two. Defects deeper than a threshold are
//! counted as gaps between extended fingers; the display frame is annotated
//! with the outlines and a marker per accepted gap.
//!
//! The pipeline is stateless: one synchronous call per delivered frame, no
//! buffering, no cross-frame state. Frame delivery (camera, permissions, UI)
//! is the host's concern.
//!
//! ```no_run
//! use finger_count::{analyze_frame, PipelineConfig};
//!
//! # fn main() -> Result<(), finger_count::PipelineError> {
//! let gray = image::GrayImage::new(640, 480);
//! let mut display = image::RgbaImage::new(640, 480);
//! let analysis = analyze_frame(&gray, &mut display, &PipelineConfig::default())?;
//! println!("fingers: {}", analysis.finger_count);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::analyze_frame;
pub use types::{ConvexityDefect, FingerEvent, FrameAnalysis, Outline};
