// glcaps/src/lib.rs
//
//! OpenGL version negotiation and feature gating.
//!
//! This crate answers two questions for the rest of a renderer: "is this OpenGL version
//! available?" and "is this optional feature available?". A `CapabilityRegistry` is initialized
//! once against a context that is current on the calling thread. It walks the ladder of desktop
//! OpenGL versions from 1.1 upwards, unlocking the extensions that each version promoted to core,
//! and then looks for the remaining catalog features in the extension string. The answers are
//! fixed from then on and can be read from any thread.
//!
//! The registry also tracks the active context and the profile derived from it, and forwards
//! image and buffer creation to that profile.
//!
//! ```no_run
//! # use glcaps::{CapabilityRegistry, Context, GlowCapabilitySource, ProbeAttributes};
//! # fn run<C: Context>(gl: &glow::Context) -> Result<(), glcaps::Error> {
//! let mut registry = CapabilityRegistry::<C>::new();
//! registry.initialize(&mut GlowCapabilitySource::new(gl), &ProbeAttributes::default())?;
//! if registry.supports_feature(glcaps::Feature::ARB_DIRECT_STATE_ACCESS) {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub use crate::error::Error;

mod attributes;
pub use crate::attributes::{ProbeAttributes, ProbeFlags};

mod feature;
pub use crate::feature::Feature;

mod info;
pub use crate::info::{GLApi, GLVersion, VERSION_LADDER};

pub mod promotion;

mod profile;
pub use crate::profile::{BufferDescriptor, Context, GLenum, ImageDescriptor, Profile};

mod registry;
pub use crate::registry::{Binding, Capabilities, CapabilityRegistry, VersionSet};

mod source;
pub use crate::source::{CapabilitySource, GlowCapabilitySource, StaticCapabilitySource};

#[cfg(test)]
mod tests;
