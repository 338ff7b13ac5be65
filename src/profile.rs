// glcaps/src/profile.rs
//
//! The context and profile collaborators a registry binds to.
//!
//! A profile knows how to create images and buffers in the way a particular OpenGL version
//! expects. The registry never looks inside either object; it only keeps the active pair and
//! forwards resource creation to the profile.

use crate::error::Error;
use crate::feature::Feature;
use crate::info::GLVersion;
use crate::registry::Capabilities;

use euclid::default::Size2D;

/// An OpenGL enumerant, such as `GL_TEXTURE_2D`.
pub type GLenum = u32;

/// A context that can be bound to a registry.
pub trait Context {
    /// The profile derived from this context.
    type Profile: Profile;

    /// Derives the profile to use while this context is active.
    fn profile(&self) -> Self::Profile;
}

/// A version-bound configuration used to create resources.
pub trait Profile {
    /// The image type this profile creates.
    type Image;
    /// The buffer type this profile creates.
    type Buffer;

    /// The version tier this profile targets.
    fn version(&self) -> GLVersion;

    /// Whether `feature` is usable through this profile.
    ///
    /// The platform must support the feature. A feature that a tier unlocked also needs the
    /// profile to target at least that tier; one granted through the extension string doesn't.
    fn supports(&self, feature: Feature, capabilities: &Capabilities) -> bool {
        if !capabilities.supports_feature(feature) {
            return false;
        }
        if capabilities.is_extension_feature(feature) {
            return true;
        }
        match crate::promotion::promotion_version(feature) {
            Some(version) => self.version() >= version,
            None => true,
        }
    }

    /// Creates an image with the given layout, filled with `pixels`.
    fn image(&self, descriptor: &ImageDescriptor, pixels: &[u8]) -> Result<Self::Image, Error>;

    /// Creates a buffer with the given layout.
    fn buffer(&self, descriptor: &BufferDescriptor) -> Result<Self::Buffer, Error>;
}

/// The layout of an image to create, in the terms of `glTexImage2D`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageDescriptor {
    /// The texture target, e.g. `GL_TEXTURE_2D`.
    pub target: GLenum,
    /// The mipmap level of detail.
    pub level: i32,
    /// The internal format the image is stored in.
    pub internal_format: GLenum,
    /// The size of the image, in pixels.
    pub size: Size2D<i32>,
    /// The border width; must be 0 on core profiles.
    pub border: i32,
    /// The format of the supplied pixel data.
    pub format: GLenum,
}

/// The layout of a buffer to create, in the terms of `glBufferData`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BufferDescriptor {
    /// The buffer target, e.g. `GL_ARRAY_BUFFER`.
    pub target: GLenum,
    /// The size of the buffer, in bytes.
    pub size: usize,
    /// The usage hint, e.g. `GL_STATIC_DRAW`.
    pub usage: GLenum,
}
