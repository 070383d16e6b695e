use thiserror::Error;

/// Failures the pipeline reports to its caller.
///
/// Geometric absence (no foreground region, too few outline points for a
/// hull) is not an error: those frames recover locally to a zero count.
/// Only caller contract violations and internal geometry faults surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A configuration field is outside its usable range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The gray and display frames do not have identical dimensions.
    #[error("frame size mismatch: gray is {gray:?}, display is {rgba:?}")]
    FrameSizeMismatch { gray: (u32, u32), rgba: (u32, u32) },

    /// A hull or defect index fell outside the outline's point range. This is
    /// an internal contract violation, never a property of the input frame;
    /// the host should log it and drop the frame.
    #[error("geometry index {index} out of range for outline of {len} points")]
    InvalidGeometryIndex { index: usize, len: usize },
}
