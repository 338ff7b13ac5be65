// glcaps/src/attributes.rs
//
//! Options that control how capabilities are probed.

use crate::info::GLVersion;

use bitflags::bitflags;

bitflags! {
    /// Switches for the optional parts of capability probing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ProbeFlags: u8 {
        /// After walking the version ladder, look for catalog features that no reached tier
        /// promoted in the extension string.
        const EXTENSIONS    = 0x01;
        /// Fail initialization if any tier above the first unsupported one claims support.
        const STRICT_LADDER = 0x02;
    }
}

/// Attributes that describe how a capability registry should be initialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeAttributes {
    /// The highest version to probe. Tiers above it are never queried and never recorded.
    ///
    /// `None` walks the whole ladder.
    pub max_version: Option<GLVersion>,
    /// Optional probing behavior.
    pub flags: ProbeFlags,
}

impl Default for ProbeAttributes {
    fn default() -> ProbeAttributes {
        let mut flags = ProbeFlags::STRICT_LADDER;
        if cfg!(not(feature = "no-extension-probe")) {
            flags |= ProbeFlags::EXTENSIONS;
        }
        ProbeAttributes { max_version: None, flags }
    }
}

impl ProbeAttributes {
    /// Attributes that only walk the ladder, trusting the source and skipping extensions.
    pub fn ladder_only() -> ProbeAttributes {
        ProbeAttributes { max_version: None, flags: ProbeFlags::empty() }
    }

    #[inline]
    pub(crate) fn allows(&self, version: GLVersion) -> bool {
        self.max_version.map_or(true, |max_version| version <= max_version)
    }
}
