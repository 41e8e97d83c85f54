//! Renderer errors.

use nodepick_core::SurfaceError;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_converts() {
        let err: RendererError = SurfaceError::Detached.into();
        assert!(matches!(err, RendererError::Surface(SurfaceError::Detached)));
        assert_eq!(
            err.to_string(),
            "Surface error: surface has been detached from its view"
        );
    }
}
