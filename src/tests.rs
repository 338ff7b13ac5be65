// glcaps/src/tests.rs
//
//! Unit tests.

use crate::{BufferDescriptor, CapabilityRegistry, Context, Error, Feature, GLApi, GLVersion};
use crate::{ImageDescriptor, ProbeAttributes, ProbeFlags, Profile, StaticCapabilitySource};
use crate::{VersionSet, VERSION_LADDER};
use crate::promotion::PROMOTIONS;

use euclid::default::Size2D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Barrier};
use std::thread;

struct TestContext {
    id: usize,
    version: GLVersion,
}

struct TestProfile {
    context_id: usize,
    version: GLVersion,
}

impl Context for TestContext {
    type Profile = TestProfile;

    fn profile(&self) -> TestProfile {
        TestProfile { context_id: self.id, version: self.version }
    }
}

impl Profile for TestProfile {
    type Image = (usize, ImageDescriptor, usize);
    type Buffer = (usize, BufferDescriptor);

    fn version(&self) -> GLVersion {
        self.version
    }

    fn image(&self, descriptor: &ImageDescriptor, pixels: &[u8]) -> Result<Self::Image, Error> {
        Ok((self.context_id, *descriptor, pixels.len()))
    }

    fn buffer(&self, descriptor: &BufferDescriptor) -> Result<Self::Buffer, Error> {
        if descriptor.size == 0 {
            return Err(Error::ResourceCreationFailed);
        }
        Ok((self.context_id, *descriptor))
    }
}

type TestRegistry = CapabilityRegistry<TestContext>;

// Walks the ladder strictly and looks at the extension string, whatever the crate features say.
fn exhaustive() -> ProbeAttributes {
    ProbeAttributes {
        max_version: None,
        flags: ProbeFlags::EXTENSIONS | ProbeFlags::STRICT_LADDER,
    }
}

fn initialized(source: &mut StaticCapabilitySource) -> TestRegistry {
    let mut registry = TestRegistry::new();
    registry.initialize(source, &exhaustive()).unwrap();
    registry
}

fn context(id: usize, version: GLVersion) -> Arc<TestContext> {
    Arc::new(TestContext { id, version })
}

#[test]
fn test_baseline_only_source() {
    let mut source = StaticCapabilitySource::new(GLVersion::BASELINE);
    let registry = initialized(&mut source);
    assert!(registry.supports_tier(11));
    assert!(!registry.supports_tier(12));
    assert!(!registry.supports_tier(20));
    assert_eq!(registry.current_version(), Some(GLVersion::new(1, 1)));
    assert!(!registry.supports_feature(Feature::ARB_VERTEX_SHADER));
    assert_eq!(registry.features().count(), 0);
    // Only the first rung above the floor is asked about, plus the strict scan above it.
    assert_eq!(source.version_queries()[0], GLVersion::new(1, 2));
}

#[test]
fn test_source_up_to_2_0() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(2, 0));
    let registry = initialized(&mut source);
    assert_eq!(registry.current_version(), Some(GLVersion::new(2, 0)));
    assert!(registry.supports_tier(13));
    assert!(registry.supports_version(GLVersion::new(1, 5)));
    assert!(!registry.supports_version(GLVersion::new(2, 1)));
    assert!(registry.supports_feature(Feature::ARB_SHADER_OBJECTS));
    assert!(registry.supports_feature(Feature::ARB_VERTEX_BUFFER_OBJECT));
    assert!(!registry.supports_feature(Feature::ARB_PIXEL_BUFFER_OBJECT));
    assert!(!registry.supports_feature(Feature::ARB_CLIP_CONTROL));
}

#[test]
fn test_full_ladder() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(4, 5));
    let registry = initialized(&mut source);
    assert_eq!(registry.current_version(), Some(GLVersion::new(4, 5)));
    assert_eq!(registry.versions().collect::<Vec<_>>(), VERSION_LADDER.to_vec());
    assert!(registry.supports_feature(Feature::ARB_CLIP_CONTROL));
    assert_eq!(registry.capabilities().unwrap().versions(), VersionSet::all());
    // The 1.1 floor is never queried.
    assert!(!source.version_queries().contains(&GLVersion::BASELINE));
}

// 3.2 is recorded as 3.2; it must not be reported as an earlier tier.
#[test]
fn test_current_version_is_highest_tier() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(3, 2));
    let registry = initialized(&mut source);
    assert_eq!(registry.current_version(), Some(GLVersion::new(3, 2)));
    assert!(registry.supports_feature(Feature::ARB_SYNC));
    assert!(!registry.supports_feature(Feature::ARB_TIMER_QUERY));
}

#[test]
fn test_well_behaved_sources_are_monotonic() {
    for (index, &max_version) in VERSION_LADDER.iter().enumerate() {
        let mut source = StaticCapabilitySource::new(max_version);
        let registry = initialized(&mut source);

        for (other_index, &version) in VERSION_LADDER.iter().enumerate() {
            assert_eq!(registry.supports_version(version), other_index <= index);
        }
        assert_eq!(registry.current_version(), registry.versions().max());
        assert!(registry.capabilities().unwrap().versions().is_contiguous());

        for promotion in PROMOTIONS {
            for &feature in promotion.features {
                assert_eq!(
                    registry.supports_feature(feature),
                    promotion.version <= max_version,
                    "{} at OpenGL {}",
                    feature,
                    max_version
                );
            }
        }
    }
}

#[test]
fn test_unpromoted_features_need_the_extension_string() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(4, 5));
    let registry = initialized(&mut source);
    assert!(!registry.supports_feature(Feature::NV_PATH_RENDERING));
    assert!(!registry.supports_feature(Feature::EXT_TEXTURE_FILTER_ANISOTROPIC));
}

#[test]
fn test_extension_probing() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(3, 3)).with_extensions(vec![
        "GL_NV_path_rendering",
        "GL_ARB_clip_control",
        "GL_ARB_vertex_shader",
        "GL_VENDOR_unknown_extension",
    ]);
    let registry = initialized(&mut source);
    assert!(registry.supports_feature(Feature::NV_PATH_RENDERING));
    // Granted ahead of the tier that promotes it.
    assert!(registry.supports_feature(Feature::ARB_CLIP_CONTROL));
    assert!(!registry.supports_version(GLVersion::new(4, 5)));
    assert!(registry.supports_feature(Feature::ARB_VERTEX_SHADER));

    // Features already unlocked by a tier aren't looked up again.
    let unlocked = VERSION_LADDER
        .iter()
        .filter(|version| **version <= GLVersion::new(3, 3))
        .map(|version| crate::promotion::promoted_in(*version).len())
        .sum::<usize>();
    assert_eq!(source.extension_queries(), Feature::catalog().len() - unlocked);
}

#[test]
fn test_ladder_only_skips_extensions() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(3, 3))
        .with_extensions(vec!["GL_NV_path_rendering"]);
    let mut registry = TestRegistry::new();
    registry.initialize(&mut source, &ProbeAttributes::ladder_only()).unwrap();
    assert!(!registry.supports_feature(Feature::NV_PATH_RENDERING));
    assert_eq!(source.extension_queries(), 0);
}

#[test]
fn test_probing_is_ascending_and_stops_at_first_gap() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(2, 1));
    let mut registry = TestRegistry::new();
    registry.initialize(&mut source, &ProbeAttributes::ladder_only()).unwrap();
    assert_eq!(
        source.version_queries(),
        vec![
            GLVersion::new(1, 2),
            GLVersion::new(1, 3),
            GLVersion::new(1, 4),
            GLVersion::new(1, 5),
            GLVersion::new(2, 0),
            GLVersion::new(2, 1),
            GLVersion::new(3, 0),
        ]
    );
}

#[test]
fn test_strict_ladder_rejects_holes() {
    let versions = [
        GLVersion::new(1, 2),
        GLVersion::new(1, 3),
        GLVersion::new(2, 0),
    ];
    let mut source = StaticCapabilitySource::with_versions(&versions);
    let mut registry = TestRegistry::new();
    let result = registry.initialize(&mut source, &exhaustive());
    assert_eq!(
        result,
        Err(Error::NonMonotonicVersions {
            missing: GLVersion::new(1, 4),
            found: GLVersion::new(2, 0),
        })
    );
    assert!(!registry.is_initialized());
    assert!(!registry.supports_tier(11));
    assert_eq!(source.finalize_count(), 0);
}

#[test]
fn test_lenient_ladder_keeps_the_prefix() {
    let versions = [
        GLVersion::new(1, 2),
        GLVersion::new(1, 3),
        GLVersion::new(2, 0),
    ];
    let mut source = StaticCapabilitySource::with_versions(&versions);
    let mut registry = TestRegistry::new();
    let attributes = ProbeAttributes { max_version: None, flags: ProbeFlags::EXTENSIONS };
    registry.initialize(&mut source, &attributes).unwrap();
    assert_eq!(registry.current_version(), Some(GLVersion::new(1, 3)));
    assert!(!registry.supports_tier(20));
    assert!(!registry.supports_feature(Feature::ARB_SHADER_OBJECTS));
    assert!(!source.version_queries().contains(&GLVersion::new(2, 0)));
}

#[test]
fn test_random_ladders() {
    let mut rng = StdRng::seed_from_u64(0x6c61_6464);
    for _ in 0..200 {
        let versions = VERSION_LADDER[1..]
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(0.7))
            .collect::<Vec<_>>();
        let prefix = VERSION_LADDER[1..]
            .iter()
            .copied()
            .take_while(|version| versions.contains(version))
            .collect::<Vec<_>>();
        let missing = VERSION_LADDER[1..]
            .iter()
            .copied()
            .find(|version| !versions.contains(version));
        let found = missing.and_then(|missing| {
            versions.iter().copied().find(|version| *version > missing)
        });

        let mut lenient = TestRegistry::new();
        lenient
            .initialize(
                &mut StaticCapabilitySource::with_versions(&versions),
                &ProbeAttributes::ladder_only(),
            )
            .unwrap();
        let expected_current = prefix.last().copied().unwrap_or(GLVersion::BASELINE);
        assert_eq!(lenient.current_version(), Some(expected_current));
        assert_eq!(lenient.versions().count(), prefix.len() + 1);
        assert!(lenient.capabilities().unwrap().versions().is_contiguous());

        let mut strict = TestRegistry::new();
        let result = strict.initialize(
            &mut StaticCapabilitySource::with_versions(&versions),
            &exhaustive(),
        );
        match (missing, found) {
            (Some(missing), Some(found)) => {
                assert_eq!(result, Err(Error::NonMonotonicVersions { missing, found }));
                assert!(!strict.is_initialized());
            }
            _ => {
                assert_eq!(result, Ok(()));
                assert_eq!(strict.current_version(), Some(expected_current));
            }
        }
    }
}

#[test]
fn test_max_version_caps_probing() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(4, 5));
    let mut registry = TestRegistry::new();
    let attributes = ProbeAttributes {
        max_version: Some(GLVersion::new(3, 3)),
        ..exhaustive()
    };
    registry.initialize(&mut source, &attributes).unwrap();
    assert_eq!(registry.current_version(), Some(GLVersion::new(3, 3)));
    assert!(!registry.supports_tier(40));
    assert!(source.version_queries().iter().all(|version| *version <= GLVersion::new(3, 3)));
}

#[test]
fn test_no_current_context() {
    let mut source = StaticCapabilitySource::without_context();
    let mut registry = TestRegistry::new();
    assert_eq!(
        registry.initialize(&mut source, &exhaustive()),
        Err(Error::NoCurrentContext)
    );
    assert!(!registry.is_initialized());
    assert!(!registry.supports_tier(11));
    assert_eq!(registry.current_version(), None);
    assert_eq!(source.finalize_count(), 0);
}

#[test]
fn test_failed_reinitialization_clears_state() {
    let mut registry = initialized(&mut StaticCapabilitySource::new(GLVersion::new(3, 0)));
    assert!(registry.is_initialized());

    let mut failing = StaticCapabilitySource::new(GLVersion::new(4, 5))
        .failing_at(GLVersion::new(2, 1));
    assert_eq!(
        registry.initialize(&mut failing, &exhaustive()),
        Err(Error::CapabilityQueryFailed)
    );
    assert!(!registry.is_initialized());
    assert!(!registry.supports_tier(20));
    assert!(!registry.supports_feature(Feature::ARB_TEXTURE_COMPRESSION));
    assert_eq!(failing.finalize_count(), 0);
}

#[test]
fn test_queries_before_initialization() {
    let registry = TestRegistry::new();
    assert!(!registry.is_initialized());
    assert!(registry.capabilities().is_none());
    assert_eq!(registry.current_version(), None);
    for version in VERSION_LADDER.iter() {
        assert!(!registry.supports_version(*version));
    }
    assert!(!registry.supports_feature(Feature::ARB_MULTITEXTURE));
    assert_eq!(registry.versions().count(), 0);
    assert_eq!(registry.select_version(GLVersion::BASELINE), Err(Error::UnsupportedGLVersion));
}

#[test]
fn test_reinitialization_is_idempotent() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(3, 3))
        .with_extensions(vec!["GL_ARB_debug_output"]);
    let mut registry = initialized(&mut source);
    let first = registry.capabilities().cloned().unwrap();
    registry.initialize(&mut source, &exhaustive()).unwrap();
    assert_eq!(registry.capabilities(), Some(&first));
    assert_eq!(source.finalize_count(), 2);
}

#[test]
fn test_finalized_once_per_initialization() {
    let mut source = StaticCapabilitySource::new(GLVersion::new(4, 1));
    initialized(&mut source);
    assert_eq!(source.finalize_count(), 1);
}

#[test]
fn test_embedded_source_only_has_the_floor() {
    let mut source = StaticCapabilitySource::with_versions(&[GLVersion::BASELINE])
        .with_api(GLApi::GLES)
        .with_extensions(vec!["GL_KHR_debug"]);
    let registry = initialized(&mut source);
    let capabilities = registry.capabilities().unwrap();
    assert_eq!(capabilities.api(), GLApi::GLES);
    assert_eq!(capabilities.current_version(), GLVersion::BASELINE);
    assert!(registry.supports_feature(Feature::KHR_DEBUG));
}

#[test]
fn test_select_version() {
    let registry = initialized(&mut StaticCapabilitySource::new(GLVersion::new(3, 3)));
    assert_eq!(registry.select_version(GLVersion::new(3, 0)), Ok(GLVersion::new(3, 0)));
    assert_eq!(registry.select_version(GLVersion::new(4, 0)), Err(Error::UnsupportedGLVersion));
    assert_eq!(registry.select_version(GLVersion::new(3, 4)), Err(Error::UnsupportedGLVersion));
    assert!(!registry.supports_tier(34));
}

#[test]
fn test_profile_supports() {
    let registry = initialized(
        &mut StaticCapabilitySource::new(GLVersion::new(4, 5))
            .with_extensions(vec!["GL_NV_path_rendering"]),
    );
    let capabilities = registry.capabilities().unwrap();
    let profile = TestProfile { context_id: 0, version: GLVersion::new(3, 3) };
    assert!(profile.supports(Feature::ARB_TIMER_QUERY, capabilities));
    assert!(!profile.supports(Feature::ARB_CLIP_CONTROL, capabilities));
    assert!(profile.supports(Feature::NV_PATH_RENDERING, capabilities));
    assert!(!profile.supports(Feature::NV_FENCE, capabilities));
}

#[test]
fn test_profile_supports_features_from_the_extension_string() {
    let registry = initialized(
        &mut StaticCapabilitySource::new(GLVersion::new(3, 3))
            .with_extensions(vec!["GL_ARB_clip_control"]),
    );
    let capabilities = registry.capabilities().unwrap();
    assert!(capabilities.is_extension_feature(Feature::ARB_CLIP_CONTROL));
    assert!(!capabilities.is_extension_feature(Feature::ARB_TIMER_QUERY));

    let profile = TestProfile { context_id: 0, version: GLVersion::new(3, 3) };
    assert!(registry.supports_feature(Feature::ARB_CLIP_CONTROL));
    assert!(profile.supports(Feature::ARB_CLIP_CONTROL, capabilities));

    // Tier-unlocked features still follow the profile's version.
    let old_profile = TestProfile { context_id: 0, version: GLVersion::new(2, 1) };
    assert!(!old_profile.supports(Feature::ARB_TIMER_QUERY, capabilities));
    assert!(old_profile.supports(Feature::ARB_CLIP_CONTROL, capabilities));
}

#[test]
fn test_default_attributes() {
    let attributes = ProbeAttributes::default();
    assert_eq!(attributes.max_version, None);
    assert!(attributes.flags.contains(ProbeFlags::STRICT_LADDER));
    assert_eq!(
        attributes.flags.contains(ProbeFlags::EXTENSIONS),
        cfg!(not(feature = "no-extension-probe"))
    );
    assert_eq!(ProbeAttributes::ladder_only().flags, ProbeFlags::empty());
}

#[test]
fn test_binding() {
    let registry = TestRegistry::new();
    assert!(registry.binding().is_none());
    assert!(registry.profile().is_none());
    assert!(registry.context().is_none());

    assert!(registry.set_context(context(1, GLVersion::new(3, 3))).is_none());
    assert_eq!(registry.profile().unwrap().context_id, 1);
    assert_eq!(registry.context().unwrap().id, 1);

    let previous = registry.set_context(context(2, GLVersion::new(2, 1))).unwrap();
    assert_eq!(previous.context.id, 1);
    assert_eq!(previous.profile.context_id, 1);
    let binding = registry.binding().unwrap();
    assert_eq!(binding.context.id, 2);
    assert_eq!(binding.profile.version(), GLVersion::new(2, 1));

    assert_eq!(registry.clear_context().unwrap().context.id, 2);
    assert!(registry.binding().is_none());
}

#[test]
fn test_resource_creation_delegates_to_profile() {
    let registry = TestRegistry::new();
    let image = ImageDescriptor {
        target: glow::TEXTURE_2D,
        level: 0,
        internal_format: glow::RGBA8,
        size: Size2D::new(2, 2),
        border: 0,
        format: glow::RGBA,
    };
    let buffer = BufferDescriptor { target: glow::ARRAY_BUFFER, size: 64, usage: glow::STATIC_DRAW };
    assert!(matches!(registry.image(&image, &[0; 16]), Err(Error::NoProfileBound)));
    assert!(matches!(registry.buffer(&buffer), Err(Error::NoProfileBound)));

    registry.set_context(context(7, GLVersion::new(3, 3)));
    assert_eq!(registry.image(&image, &[0; 16]).unwrap(), (7, image, 16));
    assert_eq!(registry.buffer(&buffer).unwrap(), (7, buffer));
    let empty = BufferDescriptor { size: 0, ..buffer };
    assert!(matches!(registry.buffer(&empty), Err(Error::ResourceCreationFailed)));
}

#[test]
fn test_set_context_is_atomic() {
    const ITERATIONS: usize = 500;

    let registry = Arc::new(TestRegistry::new());
    let barrier = Arc::new(Barrier::new(3));

    let writers = [1, 2]
        .iter()
        .map(|&id| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS {
                    registry.set_context(context(id, GLVersion::new(3, 3)));
                }
            })
        })
        .collect::<Vec<_>>();

    let reader = {
        let registry = registry.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS * 2 {
                if let Some(binding) = registry.binding() {
                    assert_eq!(binding.profile.context_id, binding.context.id);
                }
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    let binding = registry.binding().unwrap();
    assert!(binding.context.id == 1 || binding.context.id == 2);
    assert_eq!(binding.profile.context_id, binding.context.id);
}

#[test]
fn test_concurrent_queries_after_initialization() {
    let registry = Arc::new(initialized(&mut StaticCapabilitySource::new(GLVersion::new(4, 3))));
    let readers = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(registry.supports_feature(Feature::ARB_COMPUTE_SHADER));
                    assert!(!registry.supports_feature(Feature::ARB_BUFFER_STORAGE));
                    assert_eq!(registry.current_version(), Some(GLVersion::new(4, 3)));
                }
            })
        })
        .collect::<Vec<_>>();
    for reader in readers {
        reader.join().unwrap();
    }
}
