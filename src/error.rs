// glcaps/src/error.rs
//
//! Various errors that methods can produce.

use crate::info::GLVersion;

use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// There is no OpenGL context current on the calling thread, so no capability table can be
    /// produced.
    NoCurrentContext,
    /// The native layer failed to answer a capability query.
    CapabilityQueryFailed,
    /// The native layer reported a version tier as supported while a lower tier was not.
    ///
    /// Only produced when `ProbeFlags::STRICT_LADDER` is set.
    NonMonotonicVersions {
        /// The first tier reported as unsupported.
        missing: GLVersion,
        /// A higher tier that was nevertheless reported as supported.
        found: GLVersion,
    },
    /// The requested OpenGL version isn't supported by the current context.
    UnsupportedGLVersion,
    /// The integer tier code doesn't name a rung of the version ladder.
    UnknownVersionTier(u8),
    /// No profile is bound to the registry, so there is nothing to delegate to.
    NoProfileBound,
    /// The bound profile couldn't create the requested image or buffer.
    ResourceCreationFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::NoCurrentContext => write!(f, "no OpenGL context is current on this thread"),
            Error::CapabilityQueryFailed => write!(f, "the native capability query failed"),
            Error::NonMonotonicVersions { missing, found } => write!(
                f,
                "OpenGL {} reported as supported but OpenGL {} is not",
                found, missing
            ),
            Error::UnsupportedGLVersion => write!(f, "unsupported OpenGL version"),
            Error::UnknownVersionTier(code) => write!(f, "unknown OpenGL version tier {}", code),
            Error::NoProfileBound => write!(f, "no profile is bound"),
            Error::ResourceCreationFailed => write!(f, "the profile failed to create the resource"),
        }
    }
}

impl std::error::Error for Error {}
