//! Error types for the animator.

use thiserror::Error;

/// Failures while bringing up the GPU surface.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface not supported by adapter")]
    UnsupportedSurface,
}

/// Invalid data handed to the plot.
#[derive(Debug, Error, PartialEq)]
pub enum PlotError {
    /// x and y sequences must pair up one-to-one.
    #[error("Length mismatch: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}

/// Failures while stepping the animation.
#[derive(Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("Non-finite displacement at frame {frame} (t = {time})")]
    NonFinite { frame: usize, time: f64 },
}

/// Anything that stops the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PlotError::LengthMismatch { xs: 10, ys: 9 };
        assert_eq!(err.to_string(), "Length mismatch: 10 x values, 9 y values");

        let err = AnimationError::NonFinite { frame: 3, time: 0.5 };
        assert_eq!(err.to_string(), "Non-finite displacement at frame 3 (t = 0.5)");
    }

    #[test]
    fn test_app_error_is_transparent() {
        let err = AppError::from(AnimationError::NonFinite { frame: 0, time: 0.0 });
        assert_eq!(err.to_string(), "Non-finite displacement at frame 0 (t = 0)");
    }
}
