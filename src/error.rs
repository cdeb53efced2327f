use thiserror::Error;

/// Top-level error type for the meshloft kernel.
#[derive(Debug, Error)]
pub enum MeshloftError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Boolean(#[from] BooleanError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Warp(#[from] WarpError),
}

/// Errors related to 2D shape construction and interpolation.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("contour must have at least 3 points, got {0}")]
    DegenerateContour(usize),

    #[error("degenerate shape: {0}")]
    Degenerate(String),

    #[error("cannot interpolate a shape with {left} holes against one with {right}")]
    HoleCountMismatch { left: usize, right: usize },

    #[error("cannot interpolate a contour of {left} points against one of {right}")]
    PointCountMismatch { left: usize, right: usize },

    #[error("{parameter} must be positive, got {value}")]
    NonPositiveParameter { parameter: &'static str, value: f64 },
}

/// Errors related to pose frames and warp volumes.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("zero-length {0} vector")]
    ZeroVector(&'static str),

    #[error("heading and up vectors are parallel")]
    ParallelVectors,

    #[error("volume {parameter} must be positive, got {value}")]
    NonPositiveExtent { parameter: &'static str, value: f64 },
}

/// Errors reported by mesh consistency audits.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but only {vertices} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertices: usize,
    },

    #[error("{groups} group labels attached to {faces} faces")]
    GroupCountMismatch { groups: usize, faces: usize },
}

/// Errors reported by the boolean shape adapter.
#[derive(Debug, Error)]
pub enum BooleanError {
    #[error("{operation} produced no output paths")]
    EmptyResult { operation: &'static str },

    #[error("{operation} failed: {message}")]
    External {
        operation: &'static str,
        message: String,
    },
}

/// Errors reported by the cap triangulation adapter.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("ear clipping failed: {0}")]
    EarClip(String),

    #[error("ear clipping returned {0} indices, expected a non-empty multiple of 3")]
    IncompleteTriangulation(usize),
}

/// Errors reported by the sweep and loft engines.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep requires at least 2 samples, got {0}")]
    InsufficientSamples(usize),

    #[error("sample {sample} carries {found} holes, expected {expected}")]
    HoleCountMismatch {
        sample: usize,
        expected: usize,
        found: usize,
    },

    #[error("sample {sample} contour {contour} has {found} points, expected {expected}")]
    PointCountMismatch {
        sample: usize,
        contour: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors reported by the warp engine.
#[derive(Debug, Error)]
pub enum WarpError {
    #[error("{requested} subdivision passes exceed the supported maximum of {max}")]
    SubdivisionBounds { requested: usize, max: usize },
}

/// Convenience type alias for results using [`MeshloftError`].
pub type Result<T> = std::result::Result<T, MeshloftError>;
