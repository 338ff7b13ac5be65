// glcaps/src/feature.rs
//
//! The closed catalog of optional OpenGL features.
//!
//! A feature is identified by the name of the extension that introduced it, exactly as it
//! appears in the `GL_EXTENSIONS` list. That lets the same identifier serve both for features that
//! a version tier promotes to core and for features that are probed directly in the extension
//! string.

use std::fmt::{self, Display, Formatter};

/// A named optional OpenGL capability.
///
/// Values can only be obtained from the catalog, either through the associated constants or by
/// looking an extension name up with `Feature::from_name()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feature(&'static str);

impl Feature {
    /// The extension name, e.g. `GL_ARB_vertex_shader`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// The vendor prefix of the extension, e.g. `ARB` or `NV`.
    pub fn vendor(&self) -> &'static str {
        let unprefixed = self.0.trim_start_matches("GL_");
        match unprefixed.find('_') {
            Some(end) => &unprefixed[..end],
            None => unprefixed,
        }
    }

    /// Looks up a catalog entry by extension name.
    ///
    /// Returns `None` for extensions the catalog doesn't know about.
    pub fn from_name(name: &str) -> Option<Feature> {
        CATALOG.iter().copied().find(|feature| feature.0 == name)
    }

    /// Every feature in the catalog.
    #[inline]
    pub fn catalog() -> &'static [Feature] {
        CATALOG
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Feature({})", self.0)
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

feature_catalog! {
    // AMD

    AMD_BLEND_MINMAX_FACTOR => "GL_AMD_blend_minmax_factor",
    AMD_DEBUG_OUTPUT => "GL_AMD_debug_output",
    AMD_DEPTH_CLAMP_SEPARATE => "GL_AMD_depth_clamp_separate",
    AMD_DRAW_BUFFERS_BLEND => "GL_AMD_draw_buffers_blend",
    AMD_GPU_SHADER_INT64 => "GL_AMD_gpu_shader_int64",
    AMD_INTERLEAVED_ELEMENTS => "GL_AMD_interleaved_elements",
    AMD_OCCLUSION_QUERY_EVENT => "GL_AMD_occlusion_query_event",
    AMD_PERFORMANCE_MONITOR => "GL_AMD_performance_monitor",
    AMD_PINNED_MEMORY => "GL_AMD_pinned_memory",
    AMD_QUERY_BUFFER_OBJECT => "GL_AMD_query_buffer_object",
    AMD_SAMPLE_POSITIONS => "GL_AMD_sample_positions",
    AMD_SEAMLESS_CUBEMAP_PER_TEXTURE => "GL_AMD_seamless_cubemap_per_texture",
    AMD_SPARSE_TEXTURE => "GL_AMD_sparse_texture",
    AMD_STENCIL_OPERATION_EXTENDED => "GL_AMD_stencil_operation_extended",
    AMD_TRANSFORM_FEEDBACK4 => "GL_AMD_transform_feedback4",
    AMD_VERTEX_SHADER_TESSELLATOR => "GL_AMD_vertex_shader_tessellator",

    // APPLE

    APPLE_FLUSH_BUFFER_RANGE => "GL_APPLE_flush_buffer_range",
    APPLE_VERTEX_ARRAY_OBJECT => "GL_APPLE_vertex_array_object",

    // ARB

    ARB_ARRAYS_OF_ARRAYS => "GL_ARB_arrays_of_arrays",
    ARB_BASE_INSTANCE => "GL_ARB_base_instance",
    ARB_BINDLESS_TEXTURE => "GL_ARB_bindless_texture",
    ARB_BLEND_FUNC_EXTENDED => "GL_ARB_blend_func_extended",
    ARB_BUFFER_STORAGE => "GL_ARB_buffer_storage",
    ARB_CL_EVENT => "GL_ARB_cl_event",
    ARB_CLEAR_BUFFER_OBJECT => "GL_ARB_clear_buffer_object",
    ARB_CLEAR_TEXTURE => "GL_ARB_clear_texture",
    ARB_CLIP_CONTROL => "GL_ARB_clip_control",
    ARB_COLOR_BUFFER_FLOAT => "GL_ARB_color_buffer_float",
    ARB_COMPRESSED_TEXTURE_PIXEL_STORAGE => "GL_ARB_compressed_texture_pixel_storage",
    ARB_COMPUTE_SHADER => "GL_ARB_compute_shader",
    ARB_COMPUTE_VARIABLE_GROUP_SIZE => "GL_ARB_compute_variable_group_size",
    ARB_CONDITIONAL_RENDER_INVERTED => "GL_ARB_conditional_render_inverted",
    ARB_CONSERVATIVE_DEPTH => "GL_ARB_conservative_depth",
    ARB_COPY_BUFFER => "GL_ARB_copy_buffer",
    ARB_COPY_IMAGE => "GL_ARB_copy_image",
    ARB_CULL_DISTANCE => "GL_ARB_cull_distance",
    ARB_DEBUG_OUTPUT => "GL_ARB_debug_output",
    ARB_DEPTH_BUFFER_FLOAT => "GL_ARB_depth_buffer_float",
    ARB_DEPTH_CLAMP => "GL_ARB_depth_clamp",
    ARB_DEPTH_TEXTURE => "GL_ARB_depth_texture",
    ARB_DERIVATIVE_CONTROL => "GL_ARB_derivative_control",
    ARB_DIRECT_STATE_ACCESS => "GL_ARB_direct_state_access",
    ARB_DRAW_BUFFERS => "GL_ARB_draw_buffers",
    ARB_DRAW_BUFFERS_BLEND => "GL_ARB_draw_buffers_blend",
    ARB_DRAW_ELEMENTS_BASE_VERTEX => "GL_ARB_draw_elements_base_vertex",
    ARB_DRAW_INDIRECT => "GL_ARB_draw_indirect",
    ARB_DRAW_INSTANCED => "GL_ARB_draw_instanced",
    ARB_ENHANCED_LAYOUTS => "GL_ARB_enhanced_layouts",
    ARB_ES2_COMPATIBILITY => "GL_ARB_ES2_compatibility",
    ARB_ES3_COMPATIBILITY => "GL_ARB_ES3_compatibility",
    ARB_ES3_1_COMPATIBILITY => "GL_ARB_ES3_1_compatibility",
    ARB_ES3_2_COMPATIBILITY => "GL_ARB_ES3_2_compatibility",
    ARB_EXPLICIT_ATTRIB_LOCATION => "GL_ARB_explicit_attrib_location",
    ARB_EXPLICIT_UNIFORM_LOCATION => "GL_ARB_explicit_uniform_location",
    ARB_FRAGMENT_COORD_CONVENTIONS => "GL_ARB_fragment_coord_conventions",
    ARB_FRAGMENT_LAYER_VIEWPORT => "GL_ARB_fragment_layer_viewport",
    ARB_FRAGMENT_PROGRAM => "GL_ARB_fragment_program",
    ARB_FRAGMENT_SHADER => "GL_ARB_fragment_shader",
    ARB_FRAMEBUFFER_NO_ATTACHMENTS => "GL_ARB_framebuffer_no_attachments",
    ARB_FRAMEBUFFER_OBJECT => "GL_ARB_framebuffer_object",
    ARB_FRAMEBUFFER_SRGB => "GL_ARB_framebuffer_sRGB",
    ARB_GEOMETRY_SHADER4 => "GL_ARB_geometry_shader4",
    ARB_GET_PROGRAM_BINARY => "GL_ARB_get_program_binary",
    ARB_GET_TEXTURE_SUB_IMAGE => "GL_ARB_get_texture_sub_image",
    ARB_GPU_SHADER5 => "GL_ARB_gpu_shader5",
    ARB_GPU_SHADER_FP64 => "GL_ARB_gpu_shader_fp64",
    ARB_GPU_SHADER_INT64 => "GL_ARB_gpu_shader_int64",
    ARB_HALF_FLOAT_PIXEL => "GL_ARB_half_float_pixel",
    ARB_HALF_FLOAT_VERTEX => "GL_ARB_half_float_vertex",
    ARB_IMAGING => "GL_ARB_imaging",
    ARB_INDIRECT_PARAMETERS => "GL_ARB_indirect_parameters",
    ARB_INSTANCED_ARRAYS => "GL_ARB_instanced_arrays",
    ARB_INTERNALFORMAT_QUERY => "GL_ARB_internalformat_query",
    ARB_INTERNALFORMAT_QUERY2 => "GL_ARB_internalformat_query2",
    ARB_INVALIDATE_SUBDATA => "GL_ARB_invalidate_subdata",
    ARB_MAP_BUFFER_ALIGNMENT => "GL_ARB_map_buffer_alignment",
    ARB_MAP_BUFFER_RANGE => "GL_ARB_map_buffer_range",
    ARB_MATRIX_PALETTE => "GL_ARB_matrix_palette",
    ARB_MULTI_BIND => "GL_ARB_multi_bind",
    ARB_MULTI_DRAW_INDIRECT => "GL_ARB_multi_draw_indirect",
    ARB_MULTISAMPLE => "GL_ARB_multisample",
    ARB_MULTITEXTURE => "GL_ARB_multitexture",
    ARB_OCCLUSION_QUERY => "GL_ARB_occlusion_query",
    ARB_OCCLUSION_QUERY2 => "GL_ARB_occlusion_query2",
    ARB_PARALLEL_SHADER_COMPILE => "GL_ARB_parallel_shader_compile",
    ARB_PIPELINE_STATISTICS_QUERY => "GL_ARB_pipeline_statistics_query",
    ARB_PIXEL_BUFFER_OBJECT => "GL_ARB_pixel_buffer_object",
    ARB_POINT_PARAMETERS => "GL_ARB_point_parameters",
    ARB_POINT_SPRITE => "GL_ARB_point_sprite",
    ARB_PROGRAM_INTERFACE_QUERY => "GL_ARB_program_interface_query",
    ARB_PROVOKING_VERTEX => "GL_ARB_provoking_vertex",
    ARB_QUERY_BUFFER_OBJECT => "GL_ARB_query_buffer_object",
    ARB_ROBUST_BUFFER_ACCESS_BEHAVIOR => "GL_ARB_robust_buffer_access_behavior",
    ARB_ROBUSTNESS => "GL_ARB_robustness",
    ARB_SAMPLE_LOCATIONS => "GL_ARB_sample_locations",
    ARB_SAMPLE_SHADING => "GL_ARB_sample_shading",
    ARB_SAMPLER_OBJECTS => "GL_ARB_sampler_objects",
    ARB_SEAMLESS_CUBE_MAP => "GL_ARB_seamless_cube_map",
    ARB_SEAMLESS_CUBEMAP_PER_TEXTURE => "GL_ARB_seamless_cubemap_per_texture",
    ARB_SEPARATE_SHADER_OBJECTS => "GL_ARB_separate_shader_objects",
    ARB_SHADER_ATOMIC_COUNTERS => "GL_ARB_shader_atomic_counters",
    ARB_SHADER_BIT_ENCODING => "GL_ARB_shader_bit_encoding",
    ARB_SHADER_IMAGE_LOAD_STORE => "GL_ARB_shader_image_load_store",
    ARB_SHADER_IMAGE_SIZE => "GL_ARB_shader_image_size",
    ARB_SHADER_OBJECTS => "GL_ARB_shader_objects",
    ARB_SHADER_PRECISION => "GL_ARB_shader_precision",
    ARB_SHADER_STORAGE_BUFFER_OBJECT => "GL_ARB_shader_storage_buffer_object",
    ARB_SHADER_SUBROUTINE => "GL_ARB_shader_subroutine",
    ARB_SHADER_TEXTURE_IMAGE_SAMPLES => "GL_ARB_shader_texture_image_samples",
    ARB_SHADING_LANGUAGE_100 => "GL_ARB_shading_language_100",
    ARB_SHADING_LANGUAGE_420PACK => "GL_ARB_shading_language_420pack",
    ARB_SHADING_LANGUAGE_INCLUDE => "GL_ARB_shading_language_include",
    ARB_SHADOW => "GL_ARB_shadow",
    ARB_SHADOW_AMBIENT => "GL_ARB_shadow_ambient",
    ARB_SPARSE_BUFFER => "GL_ARB_sparse_buffer",
    ARB_SPARSE_TEXTURE => "GL_ARB_sparse_texture",
    ARB_STENCIL_TEXTURING => "GL_ARB_stencil_texturing",
    ARB_SYNC => "GL_ARB_sync",
    ARB_TESSELLATION_SHADER => "GL_ARB_tessellation_shader",
    ARB_TEXTURE_BARRIER => "GL_ARB_texture_barrier",
    ARB_TEXTURE_BORDER_CLAMP => "GL_ARB_texture_border_clamp",
    ARB_TEXTURE_BUFFER_OBJECT => "GL_ARB_texture_buffer_object",
    ARB_TEXTURE_BUFFER_OBJECT_RGB32 => "GL_ARB_texture_buffer_object_rgb32",
    ARB_TEXTURE_BUFFER_RANGE => "GL_ARB_texture_buffer_range",
    ARB_TEXTURE_COMPRESSION => "GL_ARB_texture_compression",
    ARB_TEXTURE_COMPRESSION_BPTC => "GL_ARB_texture_compression_bptc",
    ARB_TEXTURE_COMPRESSION_RGTC => "GL_ARB_texture_compression_rgtc",
    ARB_TEXTURE_CUBE_MAP => "GL_ARB_texture_cube_map",
    ARB_TEXTURE_CUBE_MAP_ARRAY => "GL_ARB_texture_cube_map_array",
    ARB_TEXTURE_ENV_ADD => "GL_ARB_texture_env_add",
    ARB_TEXTURE_ENV_COMBINE => "GL_ARB_texture_env_combine",
    ARB_TEXTURE_ENV_CROSSBAR => "GL_ARB_texture_env_crossbar",
    ARB_TEXTURE_ENV_DOT3 => "GL_ARB_texture_env_dot3",
    ARB_TEXTURE_FILTER_MINMAX => "GL_ARB_texture_filter_minmax",
    ARB_TEXTURE_FLOAT => "GL_ARB_texture_float",
    ARB_TEXTURE_GATHER => "GL_ARB_texture_gather",
    ARB_TEXTURE_MIRROR_CLAMP_TO_EDGE => "GL_ARB_texture_mirror_clamp_to_edge",
    ARB_TEXTURE_MIRRORED_REPEAT => "GL_ARB_texture_mirrored_repeat",
    ARB_TEXTURE_MULTISAMPLE => "GL_ARB_texture_multisample",
    ARB_TEXTURE_NON_POWER_OF_TWO => "GL_ARB_texture_non_power_of_two",
    ARB_TEXTURE_QUERY_LEVELS => "GL_ARB_texture_query_levels",
    ARB_TEXTURE_QUERY_LOD => "GL_ARB_texture_query_lod",
    ARB_TEXTURE_RECTANGLE => "GL_ARB_texture_rectangle",
    ARB_TEXTURE_RG => "GL_ARB_texture_rg",
    ARB_TEXTURE_RGB10_A2UI => "GL_ARB_texture_rgb10_a2ui",
    ARB_TEXTURE_STENCIL8 => "GL_ARB_texture_stencil8",
    ARB_TEXTURE_STORAGE => "GL_ARB_texture_storage",
    ARB_TEXTURE_STORAGE_MULTISAMPLE => "GL_ARB_texture_storage_multisample",
    ARB_TEXTURE_SWIZZLE => "GL_ARB_texture_swizzle",
    ARB_TEXTURE_VIEW => "GL_ARB_texture_view",
    ARB_TIMER_QUERY => "GL_ARB_timer_query",
    ARB_TRANSFORM_FEEDBACK2 => "GL_ARB_transform_feedback2",
    ARB_TRANSFORM_FEEDBACK3 => "GL_ARB_transform_feedback3",
    ARB_TRANSFORM_FEEDBACK_INSTANCED => "GL_ARB_transform_feedback_instanced",
    ARB_TRANSFORM_FEEDBACK_OVERFLOW_QUERY => "GL_ARB_transform_feedback_overflow_query",
    ARB_TRANSPOSE_MATRIX => "GL_ARB_transpose_matrix",
    ARB_UNIFORM_BUFFER_OBJECT => "GL_ARB_uniform_buffer_object",
    ARB_VERTEX_ARRAY_BGRA => "GL_ARB_vertex_array_bgra",
    ARB_VERTEX_ARRAY_OBJECT => "GL_ARB_vertex_array_object",
    ARB_VERTEX_ATTRIB_64BIT => "GL_ARB_vertex_attrib_64bit",
    ARB_VERTEX_ATTRIB_BINDING => "GL_ARB_vertex_attrib_binding",
    ARB_VERTEX_BLEND => "GL_ARB_vertex_blend",
    ARB_VERTEX_BUFFER_OBJECT => "GL_ARB_vertex_buffer_object",
    ARB_VERTEX_PROGRAM => "GL_ARB_vertex_program",
    ARB_VERTEX_SHADER => "GL_ARB_vertex_shader",
    ARB_VERTEX_TYPE_10F_11F_11F_REV => "GL_ARB_vertex_type_10f_11f_11f_rev",
    ARB_VERTEX_TYPE_2_10_10_10_REV => "GL_ARB_vertex_type_2_10_10_10_rev",
    ARB_VIEWPORT_ARRAY => "GL_ARB_viewport_array",
    ARB_WINDOW_POS => "GL_ARB_window_pos",

    // ATI

    ATI_MEMINFO => "GL_ATI_meminfo",
    ATI_SEPARATE_STENCIL => "GL_ATI_separate_stencil",
    ATI_TEXTURE_COMPRESSION_3DC => "GL_ATI_texture_compression_3dc",

    // EXT

    EXT_422_PIXELS => "GL_EXT_422_pixels",
    EXT_ABGR => "GL_EXT_abgr",
    EXT_BGRA => "GL_EXT_bgra",
    EXT_BINDABLE_UNIFORM => "GL_EXT_bindable_uniform",
    EXT_BLEND_COLOR => "GL_EXT_blend_color",
    EXT_BLEND_EQUATION_SEPARATE => "GL_EXT_blend_equation_separate",
    EXT_BLEND_FUNC_SEPARATE => "GL_EXT_blend_func_separate",
    EXT_BLEND_LOGIC_OP => "GL_EXT_blend_logic_op",
    EXT_BLEND_MINMAX => "GL_EXT_blend_minmax",
    EXT_BLEND_SUBTRACT => "GL_EXT_blend_subtract",
    EXT_CLIP_VOLUME_HINT => "GL_EXT_clip_volume_hint",
    EXT_COMPILED_VERTEX_ARRAY => "GL_EXT_compiled_vertex_array",
    EXT_DEBUG_LABEL => "GL_EXT_debug_label",
    EXT_DEBUG_MARKER => "GL_EXT_debug_marker",
    EXT_DEPTH_BOUNDS_TEST => "GL_EXT_depth_bounds_test",
    EXT_DIRECT_STATE_ACCESS => "GL_EXT_direct_state_access",
    EXT_DRAW_BUFFERS2 => "GL_EXT_draw_buffers2",
    EXT_DRAW_INSTANCED => "GL_EXT_draw_instanced",
    EXT_DRAW_RANGE_ELEMENTS => "GL_EXT_draw_range_elements",
    EXT_FOG_COORD => "GL_EXT_fog_coord",
    EXT_FRAMEBUFFER_BLIT => "GL_EXT_framebuffer_blit",
    EXT_FRAMEBUFFER_MULTISAMPLE => "GL_EXT_framebuffer_multisample",
    EXT_FRAMEBUFFER_MULTISAMPLE_BLIT_SCALED => "GL_EXT_framebuffer_multisample_blit_scaled",
    EXT_FRAMEBUFFER_OBJECT => "GL_EXT_framebuffer_object",
    EXT_FRAMEBUFFER_SRGB => "GL_EXT_framebuffer_sRGB",
    EXT_GEOMETRY_SHADER4 => "GL_EXT_geometry_shader4",
    EXT_GPU_PROGRAM_PARAMETERS => "GL_EXT_gpu_program_parameters",
    EXT_GPU_SHADER4 => "GL_EXT_gpu_shader4",
    EXT_MULTI_DRAW_ARRAYS => "GL_EXT_multi_draw_arrays",
    EXT_PACKED_DEPTH_STENCIL => "GL_EXT_packed_depth_stencil",
    EXT_PACKED_FLOAT => "GL_EXT_packed_float",
    EXT_PACKED_PIXELS => "GL_EXT_packed_pixels",
    EXT_POLYGON_OFFSET_CLAMP => "GL_EXT_polygon_offset_clamp",
    EXT_PROVOKING_VERTEX => "GL_EXT_provoking_vertex",
    EXT_RASTER_MULTISAMPLE => "GL_EXT_raster_multisample",
    EXT_RESCALE_NORMAL => "GL_EXT_rescale_normal",
    EXT_SECONDARY_COLOR => "GL_EXT_secondary_color",
    EXT_SEPARATE_SHADER_OBJECTS => "GL_EXT_separate_shader_objects",
    EXT_SEPARATE_SPECULAR_COLOR => "GL_EXT_separate_specular_color",
    EXT_SHADER_IMAGE_LOAD_STORE => "GL_EXT_shader_image_load_store",
    EXT_SHADOW_FUNCS => "GL_EXT_shadow_funcs",
    EXT_STENCIL_CLEAR_TAG => "GL_EXT_stencil_clear_tag",
    EXT_STENCIL_TWO_SIDE => "GL_EXT_stencil_two_side",
    EXT_STENCIL_WRAP => "GL_EXT_stencil_wrap",
    EXT_TEXTURE3D => "GL_EXT_texture3D",
    EXT_TEXTURE_ARRAY => "GL_EXT_texture_array",
    EXT_TEXTURE_BUFFER_OBJECT => "GL_EXT_texture_buffer_object",
    EXT_TEXTURE_COMPRESSION_LATC => "GL_EXT_texture_compression_latc",
    EXT_TEXTURE_COMPRESSION_RGTC => "GL_EXT_texture_compression_rgtc",
    EXT_TEXTURE_COMPRESSION_S3TC => "GL_EXT_texture_compression_s3tc",
    EXT_TEXTURE_FILTER_ANISOTROPIC => "GL_EXT_texture_filter_anisotropic",
    EXT_TEXTURE_FILTER_MINMAX => "GL_EXT_texture_filter_minmax",
    EXT_TEXTURE_INTEGER => "GL_EXT_texture_integer",
    EXT_TEXTURE_LOD_BIAS => "GL_EXT_texture_lod_bias",
    EXT_TEXTURE_MIRROR_CLAMP => "GL_EXT_texture_mirror_clamp",
    EXT_TEXTURE_SHARED_EXPONENT => "GL_EXT_texture_shared_exponent",
    EXT_TEXTURE_SNORM => "GL_EXT_texture_snorm",
    EXT_TEXTURE_SRGB => "GL_EXT_texture_sRGB",
    EXT_TEXTURE_SRGB_DECODE => "GL_EXT_texture_sRGB_decode",
    EXT_TEXTURE_SWIZZLE => "GL_EXT_texture_swizzle",
    EXT_TIMER_QUERY => "GL_EXT_timer_query",
    EXT_TRANSFORM_FEEDBACK => "GL_EXT_transform_feedback",
    EXT_VERTEX_ATTRIB_64BIT => "GL_EXT_vertex_attrib_64bit",
    EXT_X11_SYNC_OBJECT => "GL_EXT_x11_sync_object",

    // HP

    HP_CONVOLUTION_BORDER_MODES => "GL_HP_convolution_border_modes",

    // INTEL

    INTEL_FRAMEBUFFER_CMAA => "GL_INTEL_framebuffer_CMAA",
    INTEL_MAP_TEXTURE => "GL_INTEL_map_texture",
    INTEL_PERFORMANCE_QUERY => "GL_INTEL_performance_query",

    // KHR

    KHR_BLEND_EQUATION_ADVANCED => "GL_KHR_blend_equation_advanced",
    KHR_BLEND_EQUATION_ADVANCED_COHERENT => "GL_KHR_blend_equation_advanced_coherent",
    KHR_CONTEXT_FLUSH_CONTROL => "GL_KHR_context_flush_control",
    KHR_DEBUG => "GL_KHR_debug",
    KHR_NO_ERROR => "GL_KHR_no_error",
    KHR_ROBUSTNESS => "GL_KHR_robustness",
    KHR_TEXTURE_COMPRESSION_ASTC_LDR => "GL_KHR_texture_compression_astc_ldr",

    // NV

    NV_BINDLESS_MULTI_DRAW_INDIRECT => "GL_NV_bindless_multi_draw_indirect",
    NV_BINDLESS_MULTI_DRAW_INDIRECT_COUNT => "GL_NV_bindless_multi_draw_indirect_count",
    NV_BINDLESS_TEXTURE => "GL_NV_bindless_texture",
    NV_BLEND_EQUATION_ADVANCED => "GL_NV_blend_equation_advanced",
    NV_BLEND_EQUATION_ADVANCED_COHERENT => "GL_NV_blend_equation_advanced_coherent",
    NV_BLEND_SQUARE => "GL_NV_blend_square",
    NV_COMMAND_LIST => "GL_NV_command_list",
    NV_CONDITIONAL_RENDER => "GL_NV_conditional_render",
    NV_CONSERVATIVE_RASTER => "GL_NV_conservative_raster",
    NV_CONSERVATIVE_RASTER_DILATE => "GL_NV_conservative_raster_dilate",
    NV_COPY_DEPTH_TO_COLOR => "GL_NV_copy_depth_to_color",
    NV_COPY_IMAGE => "GL_NV_copy_image",
    NV_DEEP_TEXTURE3D => "GL_NV_deep_texture3D",
    NV_DEPTH_BUFFER_FLOAT => "GL_NV_depth_buffer_float",
    NV_DEPTH_CLAMP => "GL_NV_depth_clamp",
    NV_DRAW_TEXTURE => "GL_NV_draw_texture",
    NV_DRAW_VULKAN_IMAGE => "GL_NV_draw_vulkan_image",
    NV_EXPLICIT_MULTISAMPLE => "GL_NV_explicit_multisample",
    NV_FENCE => "GL_NV_fence",
    NV_FILL_RECTANGLE => "GL_NV_fill_rectangle",
    NV_FLOAT_BUFFER => "GL_NV_float_buffer",
    NV_FOG_DISTANCE => "GL_NV_fog_distance",
    NV_FRAGMENT_COVERAGE_TO_COLOR => "GL_NV_fragment_coverage_to_color",
    NV_FRAMEBUFFER_MIXED_SAMPLES => "GL_NV_framebuffer_mixed_samples",
    NV_FRAMEBUFFER_MULTISAMPLE_COVERAGE => "GL_NV_framebuffer_multisample_coverage",
    NV_GPU_SHADER5 => "GL_NV_gpu_shader5",
    NV_HALF_FLOAT => "GL_NV_half_float",
    NV_INTERNALFORMAT_SAMPLE_QUERY => "GL_NV_internalformat_sample_query",
    NV_LIGHT_MAX_EXPONENT => "GL_NV_light_max_exponent",
    NV_MULTISAMPLE_COVERAGE => "GL_NV_multisample_coverage",
    NV_MULTISAMPLE_FILTER_HINT => "GL_NV_multisample_filter_hint",
    NV_PACKED_DEPTH_STENCIL => "GL_NV_packed_depth_stencil",
    NV_PATH_RENDERING => "GL_NV_path_rendering",
    NV_PATH_RENDERING_SHARED_EDGE => "GL_NV_path_rendering_shared_edge",
    NV_PIXEL_DATA_RANGE => "GL_NV_pixel_data_range",
    NV_POINT_SPRITE => "GL_NV_point_sprite",
    NV_PRIMITIVE_RESTART => "GL_NV_primitive_restart",
    NV_SAMPLE_LOCATIONS => "GL_NV_sample_locations",
    NV_SHADER_BUFFER_LOAD => "GL_NV_shader_buffer_load",
    NV_SHADER_BUFFER_STORE => "GL_NV_shader_buffer_store",
    NV_SHADER_THREAD_GROUP => "GL_NV_shader_thread_group",
    NV_TEXGEN_REFLECTION => "GL_NV_texgen_reflection",
    NV_TEXTURE_BARRIER => "GL_NV_texture_barrier",
    NV_TEXTURE_MULTISAMPLE => "GL_NV_texture_multisample",
    NV_TRANSFORM_FEEDBACK => "GL_NV_transform_feedback",
    NV_TRANSFORM_FEEDBACK2 => "GL_NV_transform_feedback2",
    NV_UNIFORM_BUFFER_UNIFIED_MEMORY => "GL_NV_uniform_buffer_unified_memory",
    NV_VERTEX_ARRAY_RANGE => "GL_NV_vertex_array_range",
    NV_VERTEX_ARRAY_RANGE2 => "GL_NV_vertex_array_range2",
    NV_VERTEX_ATTRIB_INTEGER_64BIT => "GL_NV_vertex_attrib_integer_64bit",
    NV_VERTEX_BUFFER_UNIFIED_MEMORY => "GL_NV_vertex_buffer_unified_memory",
    NV_VIEWPORT_SWIZZLE => "GL_NV_viewport_swizzle",
    NVX_CONDITIONAL_RENDER => "GL_NVX_conditional_render",
    NVX_GPU_MEMORY_INFO => "GL_NVX_gpu_memory_info",

    // OVR

    OVR_MULTIVIEW => "GL_OVR_multiview",

    // SGI

    SGI_COLOR_MATRIX => "GL_SGI_color_matrix",
    SGIS_GENERATE_MIPMAP => "GL_SGIS_generate_mipmap",
    SGIS_TEXTURE_EDGE_CLAMP => "GL_SGIS_texture_edge_clamp",
    SGIS_TEXTURE_LOD => "GL_SGIS_texture_lod",
}
