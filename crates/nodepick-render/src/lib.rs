//! NodePick Render Library
//!
//! Drawing surface implementations for NodePick.
//! The default implementation records into a Vello scene for GPU rendering.

mod error;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use error::{RenderResult, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
