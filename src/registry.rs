// glcaps/src/registry.rs
//
//! The capability registry.
//!
//! A registry is initialized against a live context by walking the version ladder from the
//! bottom, recording every supported tier and the features each tier promotes to core. After
//! that the recorded capabilities never change, so queries are plain reads that any number of
//! threads can make at once.
//!
//! Separately, a registry keeps the active context together with the profile derived from it.
//! The pair is replaced under a lock, so observers always see a profile and a context that belong
//! together.

use crate::attributes::{ProbeAttributes, ProbeFlags};
use crate::error::Error;
use crate::feature::Feature;
use crate::info::{GLApi, GLVersion, VERSION_LADDER};
use crate::profile::{BufferDescriptor, Context, ImageDescriptor, Profile};
use crate::promotion;
use crate::source::CapabilitySource;

use bitflags::bitflags;
use fnv::FnvHashSet;
use log::{debug, info, warn};
use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

bitflags! {
    /// A set of tiers on the version ladder.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct VersionSet: u32 {
        const GL_1_1 = 1 << 0;
        const GL_1_2 = 1 << 1;
        const GL_1_3 = 1 << 2;
        const GL_1_4 = 1 << 3;
        const GL_1_5 = 1 << 4;
        const GL_2_0 = 1 << 5;
        const GL_2_1 = 1 << 6;
        const GL_3_0 = 1 << 7;
        const GL_3_1 = 1 << 8;
        const GL_3_2 = 1 << 9;
        const GL_3_3 = 1 << 10;
        const GL_4_0 = 1 << 11;
        const GL_4_1 = 1 << 12;
        const GL_4_2 = 1 << 13;
        const GL_4_3 = 1 << 14;
        const GL_4_4 = 1 << 15;
        const GL_4_5 = 1 << 16;
    }
}

impl VersionSet {
    /// The single-tier set for `version`, or `None` if it isn't on the ladder.
    pub fn from_version(version: GLVersion) -> Option<VersionSet> {
        version
            .ladder_index()
            .map(|index| VersionSet::from_bits_truncate(1 << index))
    }

    /// Whether `version` is in the set.
    #[inline]
    pub fn contains_version(&self, version: GLVersion) -> bool {
        VersionSet::from_version(version).map_or(false, |bit| self.contains(bit))
    }

    /// The tiers in the set, lowest first.
    pub fn versions(&self) -> impl Iterator<Item = GLVersion> + '_ {
        VERSION_LADDER
            .iter()
            .copied()
            .filter(move |version| self.contains_version(*version))
    }

    /// Whether every tier below the highest one in the set is also in the set.
    pub fn is_contiguous(&self) -> bool {
        let bits = self.bits();
        bits & bits.wrapping_add(1) == 0
    }
}

/// The capabilities detected for one context.
///
/// Once produced by `Capabilities::probe()` this value is never modified.
#[derive(Clone, PartialEq)]
pub struct Capabilities {
    api: GLApi,
    versions: VersionSet,
    features: FnvHashSet<Feature>,
    extension_features: FnvHashSet<Feature>,
    current_version: GLVersion,
}

impl Capabilities {
    /// Walks the version ladder and the extension string of `source`.
    ///
    /// Tiers are queried strictly in ascending order, starting above the 1.1 floor, which is
    /// recorded without asking. Walking stops at the first unsupported tier. On success the
    /// source's capability table has been finalized exactly once.
    pub fn probe<S>(source: &mut S, attributes: &ProbeAttributes) -> Result<Capabilities, Error>
    where
        S: CapabilitySource + ?Sized,
    {
        source.check_current()?;

        let mut capabilities = Capabilities {
            api: source.gl_api(),
            versions: VersionSet::empty(),
            features: FnvHashSet::default(),
            extension_features: FnvHashSet::default(),
            current_version: GLVersion::BASELINE,
        };
        capabilities.reach(GLVersion::BASELINE);

        let mut rungs = VERSION_LADDER[1..]
            .iter()
            .copied()
            .filter(|version| attributes.allows(*version));
        let mut first_unsupported = None;
        for version in &mut rungs {
            if !source.supports_version(version)? {
                first_unsupported = Some(version);
                break;
            }
            capabilities.reach(version);
        }

        if let Some(missing) = first_unsupported {
            debug!(
                "OpenGL {} is unsupported; stopping at {}",
                missing, capabilities.current_version
            );
            if attributes.flags.contains(ProbeFlags::STRICT_LADDER) {
                for version in rungs {
                    if source.supports_version(version)? {
                        warn!("OpenGL {} reported without OpenGL {}", version, missing);
                        return Err(Error::NonMonotonicVersions { missing, found: version });
                    }
                }
            }
        }

        if attributes.flags.contains(ProbeFlags::EXTENSIONS) {
            for &feature in Feature::catalog() {
                if capabilities.features.contains(&feature) {
                    continue;
                }
                if source.supports_extension(feature.name())? {
                    capabilities.features.insert(feature);
                    capabilities.extension_features.insert(feature);
                }
            }
            debug!(
                "{} features granted through the extension string",
                capabilities.extension_features.len()
            );
        }

        source.create_capabilities()?;

        info!(
            "Detected OpenGL {} ({:?}) with {} features",
            capabilities.current_version,
            capabilities.api,
            capabilities.features.len()
        );
        Ok(capabilities)
    }

    // Records `version` as supported, makes it the current version, and unlocks everything it
    // promotes.
    fn reach(&mut self, version: GLVersion) {
        if let Some(bit) = VersionSet::from_version(version) {
            self.versions |= bit;
        }
        self.current_version = version;
        self.features
            .extend(promotion::promoted_in(version).iter().copied());
    }

    /// The API of the probed context.
    #[inline]
    pub fn api(&self) -> GLApi {
        self.api
    }

    /// Whether the version tier is supported.
    #[inline]
    pub fn supports_version(&self, version: GLVersion) -> bool {
        self.versions.contains_version(version)
    }

    /// Whether the feature is supported, either through a supported tier or an extension.
    #[inline]
    pub fn supports_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Whether the feature was granted through the extension string rather than by a supported
    /// tier.
    #[inline]
    pub fn is_extension_feature(&self, feature: Feature) -> bool {
        self.extension_features.contains(&feature)
    }

    /// The highest supported tier.
    #[inline]
    pub fn current_version(&self) -> GLVersion {
        self.current_version
    }

    /// The supported tiers.
    #[inline]
    pub fn versions(&self) -> VersionSet {
        self.versions
    }

    /// The supported features, in no particular order.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }
}

impl Debug for Capabilities {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut features = self.features.iter().collect::<Vec<_>>();
        features.sort();
        f.debug_struct("Capabilities")
            .field("api", &self.api)
            .field("current_version", &self.current_version)
            .field("versions", &self.versions.versions().collect::<Vec<_>>())
            .field("features", &features)
            .finish()
    }
}

/// The active profile together with the context it was derived from.
pub struct Binding<C: Context> {
    /// The profile derived from `context`.
    pub profile: Arc<C::Profile>,
    /// The active context.
    pub context: Arc<C>,
}

impl<C: Context> Clone for Binding<C> {
    fn clone(&self) -> Binding<C> {
        Binding { profile: self.profile.clone(), context: self.context.clone() }
    }
}

/// The capabilities of the graphics subsystem, plus the active context and profile.
///
/// Construct one at graphics startup, initialize it once a context is current, and hand out
/// references to it. `initialize()` needs exclusive access, so nothing can query a registry while
/// it is being initialized.
pub struct CapabilityRegistry<C: Context> {
    capabilities: Option<Capabilities>,
    binding: Mutex<Option<Binding<C>>>,
}

impl<C: Context> Default for CapabilityRegistry<C> {
    fn default() -> CapabilityRegistry<C> {
        CapabilityRegistry::new()
    }
}

impl<C: Context> CapabilityRegistry<C> {
    /// Creates an uninitialized registry with no context bound.
    ///
    /// Every query answers `false` until `initialize()` succeeds.
    pub fn new() -> CapabilityRegistry<C> {
        CapabilityRegistry { capabilities: None, binding: Mutex::new(None) }
    }

    /// Probes `source` and records its capabilities.
    ///
    /// Any earlier state is discarded first; if probing fails the registry is left
    /// uninitialized and the error is returned. Probing the same source again yields the same
    /// capabilities.
    pub fn initialize<S>(&mut self, source: &mut S, attributes: &ProbeAttributes) -> Result<(), Error>
    where
        S: CapabilitySource + ?Sized,
    {
        self.capabilities = None;
        self.capabilities = Some(Capabilities::probe(source, attributes)?);
        Ok(())
    }

    /// Whether `initialize()` has succeeded.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.capabilities.is_some()
    }

    /// The recorded capabilities, if initialized.
    #[inline]
    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Whether the version tier is supported. `false` before initialization.
    pub fn supports_version(&self, version: GLVersion) -> bool {
        self.capabilities
            .as_ref()
            .map_or(false, |capabilities| capabilities.supports_version(version))
    }

    /// Whether the tier with the integer code `tier` (e.g. `33`) is supported.
    pub fn supports_tier(&self, tier: u8) -> bool {
        GLVersion::from_tier(tier).map_or(false, |version| self.supports_version(version))
    }

    /// Whether the feature is supported. `false` before initialization.
    pub fn supports_feature(&self, feature: Feature) -> bool {
        self.capabilities
            .as_ref()
            .map_or(false, |capabilities| capabilities.supports_feature(feature))
    }

    /// The highest supported tier, or `None` before initialization.
    pub fn current_version(&self) -> Option<GLVersion> {
        self.capabilities
            .as_ref()
            .map(|capabilities| capabilities.current_version())
    }

    /// The supported tiers, lowest first. Empty before initialization.
    pub fn versions(&self) -> impl Iterator<Item = GLVersion> + '_ {
        self.capabilities
            .iter()
            .flat_map(|capabilities| VERSION_LADDER.iter().copied().filter(move |version| {
                capabilities.supports_version(*version)
            }))
    }

    /// The supported features, in no particular order. Empty before initialization.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.capabilities
            .iter()
            .flat_map(|capabilities| capabilities.features())
    }

    /// Picks `requested` for a profile if the context supports it.
    pub fn select_version(&self, requested: GLVersion) -> Result<GLVersion, Error> {
        if self.supports_version(requested) {
            Ok(requested)
        } else {
            Err(Error::UnsupportedGLVersion)
        }
    }

    fn lock(&self) -> MutexGuard<Option<Binding<C>>> {
        self.binding.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Makes `context` the active context, along with the profile derived from it.
    ///
    /// Both halves are replaced in one critical section. Returns the previous binding, if any.
    pub fn set_context(&self, context: Arc<C>) -> Option<Binding<C>> {
        let profile = Arc::new(context.profile());
        debug!("Binding profile for OpenGL {}", profile.version());
        self.lock().replace(Binding { profile, context })
    }

    /// Unbinds the active context, returning it with its profile.
    pub fn clear_context(&self) -> Option<Binding<C>> {
        self.lock().take()
    }

    /// The active profile and context, read together.
    pub fn binding(&self) -> Option<Binding<C>> {
        self.lock().clone()
    }

    /// The active profile.
    pub fn profile(&self) -> Option<Arc<C::Profile>> {
        self.lock().as_ref().map(|binding| binding.profile.clone())
    }

    /// The active context.
    pub fn context(&self) -> Option<Arc<C>> {
        self.lock().as_ref().map(|binding| binding.context.clone())
    }

    /// Creates an image through the active profile.
    pub fn image(
        &self,
        descriptor: &ImageDescriptor,
        pixels: &[u8],
    ) -> Result<<C::Profile as Profile>::Image, Error> {
        let profile = self.profile().ok_or(Error::NoProfileBound)?;
        profile.image(descriptor, pixels)
    }

    /// Creates a buffer through the active profile.
    pub fn buffer(
        &self,
        descriptor: &BufferDescriptor,
    ) -> Result<<C::Profile as Profile>::Buffer, Error> {
        let profile = self.profile().ok_or(Error::NoProfileBound)?;
        profile.buffer(descriptor)
    }
}
