// glcaps/src/info.rs
//
//! OpenGL API and version information, and the ladder of version tiers.

use crate::error::Error;

use std::fmt::{self, Display, Formatter};

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GLApi {
    /// OpenGL (full or desktop OpenGL).
    GL,
    /// OpenGL ES (embedded OpenGL).
    GLES,
}

impl GLApi {
    pub(crate) fn from_glow(version: &glow::Version) -> GLApi {
        if version.is_embedded {
            GLApi::GLES
        } else {
            GLApi::GL
        }
    }
}

/// An OpenGL version.
///
/// Versions order by major, then minor number, which is also the order of the tiers on the
/// version ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

/// Every desktop OpenGL version that is probed, in ascending order.
///
/// Each tier is cumulative: support for a tier implies support for all the tiers before it.
pub static VERSION_LADDER: [GLVersion; 17] = [
    GLVersion { major: 1, minor: 1 },
    GLVersion { major: 1, minor: 2 },
    GLVersion { major: 1, minor: 3 },
    GLVersion { major: 1, minor: 4 },
    GLVersion { major: 1, minor: 5 },
    GLVersion { major: 2, minor: 0 },
    GLVersion { major: 2, minor: 1 },
    GLVersion { major: 3, minor: 0 },
    GLVersion { major: 3, minor: 1 },
    GLVersion { major: 3, minor: 2 },
    GLVersion { major: 3, minor: 3 },
    GLVersion { major: 4, minor: 0 },
    GLVersion { major: 4, minor: 1 },
    GLVersion { major: 4, minor: 2 },
    GLVersion { major: 4, minor: 3 },
    GLVersion { major: 4, minor: 4 },
    GLVersion { major: 4, minor: 5 },
];

impl GLVersion {
    /// The floor of the ladder. Anything below this can't drive the binding at all, so it is
    /// always considered supported.
    pub const BASELINE: GLVersion = GLVersion { major: 1, minor: 1 };

    /// Creates a GL version structure with the given major and minor version numbers.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Returns the version for an integer tier code such as `33` for OpenGL 3.3.
    ///
    /// Only codes naming a rung of `VERSION_LADDER` are accepted.
    pub fn from_tier(code: u8) -> Result<GLVersion, Error> {
        let version = GLVersion::new(code / 10, code % 10);
        match version.ladder_index() {
            Some(_) => Ok(version),
            None => Err(Error::UnknownVersionTier(code)),
        }
    }

    /// The integer tier code of this version (`major * 10 + minor`).
    ///
    /// Returns `None` when the code doesn't fit in a byte or the minor number has more than one
    /// digit.
    pub fn tier(&self) -> Option<u8> {
        if self.minor > 9 {
            return None;
        }
        self.major.checked_mul(10)?.checked_add(self.minor)
    }

    /// The position of this version on `VERSION_LADDER`, if it is a rung of it.
    pub fn ladder_index(&self) -> Option<usize> {
        VERSION_LADDER.iter().position(|version| version == self)
    }

    /// Converts the version glow parsed out of `GL_VERSION`.
    ///
    /// Components that don't fit in a byte are clamped; no real implementation reports them.
    pub fn from_glow(version: &glow::Version) -> GLVersion {
        GLVersion {
            major: version.major.min(u8::MAX as u32) as u8,
            minor: version.minor.min(u8::MAX as u32) as u8,
        }
    }
}

impl Display for GLVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
