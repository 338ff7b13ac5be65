// glcaps/src/promotion.rs
//
//! The table of features that each OpenGL version promotes to core.

use crate::feature::Feature;
use crate::info::GLVersion;

/// The extensions a version tier folds into core OpenGL.
#[derive(Clone, Copy, Debug)]
pub struct Promotion {
    /// The version that made these features core.
    pub version: GLVersion,
    /// The features that are guaranteed once `version` is supported.
    pub features: &'static [Feature],
}

/// Every promotion, in ascending version order.
///
/// Tiers that promoted nothing the catalog tracks (1.1) have no entry.
pub static PROMOTIONS: &[Promotion] = &[
    Promotion {
        version: GLVersion::new(1, 2),
        features: &[
            Feature::EXT_BGRA,
            Feature::EXT_DRAW_RANGE_ELEMENTS,
            Feature::EXT_PACKED_PIXELS,
            Feature::EXT_RESCALE_NORMAL,
            Feature::EXT_SEPARATE_SPECULAR_COLOR,
            Feature::EXT_TEXTURE3D,
            Feature::SGIS_TEXTURE_EDGE_CLAMP,
            Feature::SGIS_TEXTURE_LOD,
        ],
    },
    Promotion {
        version: GLVersion::new(1, 3),
        features: &[
            Feature::ARB_TEXTURE_COMPRESSION,
            Feature::ARB_TEXTURE_CUBE_MAP,
            Feature::ARB_MULTISAMPLE,
            Feature::ARB_MULTITEXTURE,
            Feature::ARB_TEXTURE_ENV_ADD,
            Feature::ARB_TEXTURE_ENV_COMBINE,
            Feature::ARB_TEXTURE_ENV_DOT3,
            Feature::ARB_TEXTURE_BORDER_CLAMP,
            Feature::ARB_TRANSPOSE_MATRIX,
        ],
    },
    Promotion {
        version: GLVersion::new(1, 4),
        features: &[
            Feature::SGIS_GENERATE_MIPMAP,
            Feature::NV_BLEND_SQUARE,
            Feature::ARB_DEPTH_TEXTURE,
            Feature::ARB_SHADOW,
            Feature::EXT_FOG_COORD,
            Feature::EXT_MULTI_DRAW_ARRAYS,
            Feature::ARB_POINT_PARAMETERS,
            Feature::EXT_SECONDARY_COLOR,
            Feature::EXT_BLEND_FUNC_SEPARATE,
            Feature::EXT_STENCIL_WRAP,
            Feature::ARB_TEXTURE_ENV_CROSSBAR,
            Feature::EXT_TEXTURE_LOD_BIAS,
            Feature::ARB_TEXTURE_MIRRORED_REPEAT,
            Feature::ARB_WINDOW_POS,
        ],
    },
    Promotion {
        version: GLVersion::new(1, 5),
        features: &[
            Feature::ARB_VERTEX_BUFFER_OBJECT,
            Feature::ARB_OCCLUSION_QUERY,
            Feature::EXT_SHADOW_FUNCS,
        ],
    },
    Promotion {
        version: GLVersion::new(2, 0),
        features: &[
            Feature::ARB_SHADER_OBJECTS,
            Feature::ARB_VERTEX_SHADER,
            Feature::ARB_FRAGMENT_SHADER,
            Feature::ARB_SHADING_LANGUAGE_100,
            Feature::ARB_DRAW_BUFFERS,
            Feature::ARB_TEXTURE_NON_POWER_OF_TWO,
            Feature::ARB_POINT_SPRITE,
            Feature::ATI_SEPARATE_STENCIL,
            Feature::EXT_STENCIL_TWO_SIDE,
        ],
    },
    Promotion {
        version: GLVersion::new(2, 1),
        features: &[Feature::ARB_PIXEL_BUFFER_OBJECT, Feature::EXT_TEXTURE_SRGB],
    },
    Promotion {
        version: GLVersion::new(3, 0),
        features: &[
            Feature::EXT_GPU_SHADER4,
            Feature::NV_CONDITIONAL_RENDER,
            Feature::APPLE_FLUSH_BUFFER_RANGE,
            Feature::ARB_COLOR_BUFFER_FLOAT,
            Feature::NV_DEPTH_BUFFER_FLOAT,
            Feature::ARB_TEXTURE_FLOAT,
            Feature::EXT_PACKED_FLOAT,
            Feature::EXT_TEXTURE_SHARED_EXPONENT,
            Feature::EXT_FRAMEBUFFER_OBJECT,
            Feature::NV_HALF_FLOAT,
            Feature::ARB_HALF_FLOAT_PIXEL,
            Feature::EXT_FRAMEBUFFER_MULTISAMPLE,
            Feature::EXT_FRAMEBUFFER_BLIT,
            Feature::EXT_TEXTURE_INTEGER,
            Feature::EXT_TEXTURE_ARRAY,
            Feature::EXT_PACKED_DEPTH_STENCIL,
            Feature::EXT_DRAW_BUFFERS2,
            Feature::EXT_TEXTURE_COMPRESSION_RGTC,
            Feature::EXT_TRANSFORM_FEEDBACK,
            Feature::APPLE_VERTEX_ARRAY_OBJECT,
            Feature::EXT_FRAMEBUFFER_SRGB,
        ],
    },
    Promotion {
        version: GLVersion::new(3, 1),
        features: &[
            Feature::ARB_DRAW_INSTANCED,
            Feature::ARB_COPY_BUFFER,
            Feature::NV_PRIMITIVE_RESTART,
            Feature::ARB_TEXTURE_BUFFER_OBJECT,
            Feature::ARB_TEXTURE_RECTANGLE,
            Feature::ARB_UNIFORM_BUFFER_OBJECT,
        ],
    },
    Promotion {
        version: GLVersion::new(3, 2),
        features: &[
            Feature::ARB_VERTEX_ARRAY_BGRA,
            Feature::ARB_DRAW_ELEMENTS_BASE_VERTEX,
            Feature::ARB_FRAGMENT_COORD_CONVENTIONS,
            Feature::ARB_PROVOKING_VERTEX,
            Feature::ARB_SEAMLESS_CUBE_MAP,
            Feature::ARB_TEXTURE_MULTISAMPLE,
            Feature::ARB_DEPTH_CLAMP,
            Feature::ARB_GEOMETRY_SHADER4,
            Feature::ARB_SYNC,
        ],
    },
    Promotion {
        version: GLVersion::new(3, 3),
        features: &[
            Feature::ARB_SHADER_BIT_ENCODING,
            Feature::ARB_BLEND_FUNC_EXTENDED,
            Feature::ARB_EXPLICIT_ATTRIB_LOCATION,
            Feature::ARB_OCCLUSION_QUERY2,
            Feature::ARB_SAMPLER_OBJECTS,
            Feature::ARB_TEXTURE_RGB10_A2UI,
            Feature::ARB_TEXTURE_SWIZZLE,
            Feature::ARB_TIMER_QUERY,
            Feature::ARB_INSTANCED_ARRAYS,
            Feature::ARB_VERTEX_TYPE_2_10_10_10_REV,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 0),
        features: &[
            Feature::ARB_TEXTURE_QUERY_LOD,
            Feature::ARB_DRAW_BUFFERS_BLEND,
            Feature::ARB_DRAW_INDIRECT,
            Feature::ARB_GPU_SHADER5,
            Feature::ARB_GPU_SHADER_FP64,
            Feature::ARB_SAMPLE_SHADING,
            Feature::ARB_SHADER_SUBROUTINE,
            Feature::ARB_TESSELLATION_SHADER,
            Feature::ARB_TEXTURE_BUFFER_OBJECT_RGB32,
            Feature::ARB_TEXTURE_CUBE_MAP_ARRAY,
            Feature::ARB_TEXTURE_GATHER,
            Feature::ARB_TRANSFORM_FEEDBACK2,
            Feature::ARB_TRANSFORM_FEEDBACK3,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 1),
        features: &[
            Feature::ARB_ES2_COMPATIBILITY,
            Feature::ARB_GET_PROGRAM_BINARY,
            Feature::ARB_SEPARATE_SHADER_OBJECTS,
            Feature::ARB_SHADER_PRECISION,
            Feature::ARB_VERTEX_ATTRIB_64BIT,
            Feature::ARB_VIEWPORT_ARRAY,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 2),
        features: &[
            Feature::ARB_TEXTURE_COMPRESSION_BPTC,
            Feature::ARB_COMPRESSED_TEXTURE_PIXEL_STORAGE,
            Feature::ARB_SHADER_ATOMIC_COUNTERS,
            Feature::ARB_TEXTURE_STORAGE,
            Feature::ARB_TRANSFORM_FEEDBACK_INSTANCED,
            Feature::ARB_BASE_INSTANCE,
            Feature::ARB_SHADER_IMAGE_LOAD_STORE,
            Feature::ARB_CONSERVATIVE_DEPTH,
            Feature::ARB_SHADING_LANGUAGE_420PACK,
            Feature::ARB_INTERNALFORMAT_QUERY,
            Feature::ARB_MAP_BUFFER_ALIGNMENT,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 3),
        features: &[
            Feature::ARB_ARRAYS_OF_ARRAYS,
            Feature::ARB_ES3_COMPATIBILITY,
            Feature::ARB_CLEAR_BUFFER_OBJECT,
            Feature::ARB_COMPUTE_SHADER,
            Feature::ARB_COPY_IMAGE,
            Feature::KHR_DEBUG,
            Feature::ARB_EXPLICIT_UNIFORM_LOCATION,
            Feature::ARB_FRAGMENT_LAYER_VIEWPORT,
            Feature::ARB_FRAMEBUFFER_NO_ATTACHMENTS,
            Feature::ARB_INTERNALFORMAT_QUERY2,
            Feature::ARB_INVALIDATE_SUBDATA,
            Feature::ARB_MULTI_DRAW_INDIRECT,
            Feature::ARB_PROGRAM_INTERFACE_QUERY,
            Feature::ARB_ROBUST_BUFFER_ACCESS_BEHAVIOR,
            Feature::ARB_SHADER_IMAGE_SIZE,
            Feature::ARB_SHADER_STORAGE_BUFFER_OBJECT,
            Feature::ARB_STENCIL_TEXTURING,
            Feature::ARB_TEXTURE_BUFFER_RANGE,
            Feature::ARB_TEXTURE_QUERY_LEVELS,
            Feature::ARB_TEXTURE_STORAGE_MULTISAMPLE,
            Feature::ARB_TEXTURE_VIEW,
            Feature::ARB_VERTEX_ATTRIB_BINDING,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 4),
        features: &[
            Feature::ARB_BUFFER_STORAGE,
            Feature::ARB_CLEAR_TEXTURE,
            Feature::ARB_ENHANCED_LAYOUTS,
            Feature::ARB_MULTI_BIND,
            Feature::ARB_QUERY_BUFFER_OBJECT,
            Feature::ARB_TEXTURE_MIRROR_CLAMP_TO_EDGE,
            Feature::ARB_TEXTURE_STENCIL8,
            Feature::ARB_VERTEX_TYPE_10F_11F_11F_REV,
        ],
    },
    Promotion {
        version: GLVersion::new(4, 5),
        features: &[
            Feature::ARB_CLIP_CONTROL,
            Feature::ARB_CULL_DISTANCE,
            Feature::ARB_ES3_1_COMPATIBILITY,
            Feature::ARB_CONDITIONAL_RENDER_INVERTED,
            Feature::KHR_CONTEXT_FLUSH_CONTROL,
            Feature::ARB_DERIVATIVE_CONTROL,
            Feature::ARB_DIRECT_STATE_ACCESS,
            Feature::ARB_GET_TEXTURE_SUB_IMAGE,
            Feature::KHR_ROBUSTNESS,
            Feature::ARB_SHADER_TEXTURE_IMAGE_SAMPLES,
            Feature::ARB_TEXTURE_BARRIER,
        ],
    },
];

/// The features promoted to core by exactly `version`.
pub fn promoted_in(version: GLVersion) -> &'static [Feature] {
    PROMOTIONS
        .iter()
        .find(|promotion| promotion.version == version)
        .map_or(&[], |promotion| promotion.features)
}

/// The version that promoted `feature` to core, if any did.
pub fn promotion_version(feature: Feature) -> Option<GLVersion> {
    PROMOTIONS
        .iter()
        .find(|promotion| promotion.features.contains(&feature))
        .map(|promotion| promotion.version)
}
