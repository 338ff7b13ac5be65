// glcaps/src/source.rs
//
//! Native capability sources.
//!
//! A capability source answers, for the context that is current on the calling thread, whether
//! a given version tier or extension is available. The registry walks a source exactly once per
//! initialization and then never touches it again.

use crate::error::Error;
use crate::info::{GLApi, GLVersion, VERSION_LADDER};

use fnv::FnvHashSet;
use glow::HasContext;
use log::debug;
use std::cell::{Cell, RefCell};

/// The native layer the registry probes.
pub trait CapabilitySource {
    /// The API of the current context.
    fn gl_api(&self) -> GLApi;

    /// Returns `Err(Error::NoCurrentContext)` if there is no usable context to probe.
    fn check_current(&self) -> Result<(), Error>;

    /// Whether the context supports the given version tier.
    fn supports_version(&self, version: GLVersion) -> Result<bool, Error>;

    /// Whether the context advertises the named extension (e.g. `GL_ARB_sync`).
    fn supports_extension(&self, name: &str) -> Result<bool, Error>;

    /// Finishes building the native capability table.
    ///
    /// The registry calls this exactly once per initialization, after all version queries.
    fn create_capabilities(&mut self) -> Result<(), Error>;
}

/// A capability source backed by a loaded `glow` context.
///
/// `glow` parses `GL_VERSION` and gathers the extension list when the context is loaded, so the
/// answers here are stable for the lifetime of the context.
pub struct GlowCapabilitySource<'a, G: HasContext> {
    gl: &'a G,
    finalized: bool,
}

impl<'a, G: HasContext> GlowCapabilitySource<'a, G> {
    /// Wraps a loaded `glow` context. The context must be current on this thread.
    #[inline]
    pub fn new(gl: &'a G) -> GlowCapabilitySource<'a, G> {
        GlowCapabilitySource { gl, finalized: false }
    }

    /// Whether `create_capabilities()` has run.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn version(&self) -> GLVersion {
        GLVersion::from_glow(self.gl.version())
    }
}

impl<'a, G: HasContext> CapabilitySource for GlowCapabilitySource<'a, G> {
    fn gl_api(&self) -> GLApi {
        GLApi::from_glow(self.gl.version())
    }

    fn check_current(&self) -> Result<(), Error> {
        // A context that was loaded while nothing was current parses an empty version string.
        if self.version().major == 0 {
            Err(Error::NoCurrentContext)
        } else {
            Ok(())
        }
    }

    fn supports_version(&self, version: GLVersion) -> Result<bool, Error> {
        self.check_current()?;
        match self.gl_api() {
            GLApi::GL => Ok(version <= self.version()),
            // ES numbering doesn't map onto the desktop ladder; only the floor is implied.
            GLApi::GLES => Ok(version == GLVersion::BASELINE),
        }
    }

    fn supports_extension(&self, name: &str) -> Result<bool, Error> {
        self.check_current()?;
        Ok(self.gl.supported_extensions().contains(name))
    }

    fn create_capabilities(&mut self) -> Result<(), Error> {
        self.check_current()?;
        let version = self.gl.version();
        debug!(
            "Capabilities created for OpenGL {}.{} ({}), {} extensions",
            version.major,
            version.minor,
            version.vendor_info,
            self.gl.supported_extensions().len()
        );
        self.finalized = true;
        Ok(())
    }
}

/// A capability source with a fixed answer for every query.
///
/// Useful for headless use and for simulating several contexts in tests. It records the order
/// in which versions were queried and how often the capability table was finalized.
#[derive(Debug)]
pub struct StaticCapabilitySource {
    api: GLApi,
    versions: Vec<GLVersion>,
    extensions: FnvHashSet<String>,
    current: bool,
    failing_version: Option<GLVersion>,
    version_queries: RefCell<Vec<GLVersion>>,
    extension_queries: Cell<usize>,
    finalize_count: usize,
}

impl StaticCapabilitySource {
    /// A well-behaved desktop source supporting every ladder tier up to and including
    /// `max_version`.
    pub fn new(max_version: GLVersion) -> StaticCapabilitySource {
        let versions = VERSION_LADDER
            .iter()
            .copied()
            .filter(|version| *version <= max_version)
            .collect::<Vec<_>>();
        StaticCapabilitySource::with_versions(&versions)
    }

    /// A source that claims support for exactly the given tiers, holes included.
    pub fn with_versions(versions: &[GLVersion]) -> StaticCapabilitySource {
        StaticCapabilitySource {
            api: GLApi::GL,
            versions: versions.to_vec(),
            extensions: FnvHashSet::default(),
            current: true,
            failing_version: None,
            version_queries: RefCell::new(vec![]),
            extension_queries: Cell::new(0),
            finalize_count: 0,
        }
    }

    /// A source standing in for a thread with no current context.
    pub fn without_context() -> StaticCapabilitySource {
        let mut source = StaticCapabilitySource::with_versions(&[]);
        source.current = false;
        source
    }

    /// Adds extensions to the advertised extension string.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> StaticCapabilitySource
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Reports the given API instead of desktop OpenGL.
    pub fn with_api(mut self, api: GLApi) -> StaticCapabilitySource {
        self.api = api;
        self
    }

    /// Makes the query for `version` fail with `Error::CapabilityQueryFailed`.
    pub fn failing_at(mut self, version: GLVersion) -> StaticCapabilitySource {
        self.failing_version = Some(version);
        self
    }

    /// Every version queried so far, in query order.
    pub fn version_queries(&self) -> Vec<GLVersion> {
        self.version_queries.borrow().clone()
    }

    /// How many extension queries were made.
    pub fn extension_queries(&self) -> usize {
        self.extension_queries.get()
    }

    /// How many times `create_capabilities()` ran.
    pub fn finalize_count(&self) -> usize {
        self.finalize_count
    }
}

impl CapabilitySource for StaticCapabilitySource {
    fn gl_api(&self) -> GLApi {
        self.api
    }

    fn check_current(&self) -> Result<(), Error> {
        if self.current {
            Ok(())
        } else {
            Err(Error::NoCurrentContext)
        }
    }

    fn supports_version(&self, version: GLVersion) -> Result<bool, Error> {
        self.check_current()?;
        self.version_queries.borrow_mut().push(version);
        if self.failing_version == Some(version) {
            return Err(Error::CapabilityQueryFailed);
        }
        Ok(self.versions.contains(&version))
    }

    fn supports_extension(&self, name: &str) -> Result<bool, Error> {
        self.check_current()?;
        self.extension_queries.set(self.extension_queries.get() + 1);
        Ok(self.extensions.contains(name))
    }

    fn create_capabilities(&mut self) -> Result<(), Error> {
        self.check_current()?;
        self.finalize_count += 1;
        Ok(())
    }
}
