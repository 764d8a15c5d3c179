//! OpenCL C 2.0 vocabulary.
//!
//! The primary set is the type keywords, address-space and access
//! qualifiers and attribute names together with the type names the
//! standard reserves (`bool2`, `float4x4`, `quad`, ...). Predefined macros
//! and constants form the secondary set and are tagged as
//! [`TagCategory::BuiltinMacro`](shadetag_core::TagCategory::BuiltinMacro).

/// Types, qualifiers and attribute names.
pub const KEYWORDS: &[&str] = &[
    "__attribute__", "__constant", "__generic", "__global", "__kernel", "__kernel_exec", "__local",
    "__private", "__read_only", "__read_write", "__write_only", "aligned", "atomic_double",
    "atomic_flag", "atomic_float", "atomic_int", "atomic_intptr_t", "atomic_long",
    "atomic_ptrdiff_t", "atomic_size_t", "atomic_uint", "atomic_uintptr_t", "atomic_ulong", "bool",
    "char", "char16", "char2", "char3", "char4", "char8", "cl_mem_fence_flags", "clk_event_t",
    "clk_profiling_info", "const", "device", "double", "double16", "double2", "double3", "double4",
    "double8", "endian", "even", "event_t", "extern", "float", "float16", "float2", "float3",
    "float4", "float8", "generic", "half", "hi", "host", "image1d_array_t", "image1d_buffer_t",
    "image1d_t", "image2d_array_depth_t", "image2d_array_t", "image2d_depth_t", "image2d_t",
    "image3d_t", "int", "int16", "int2", "int3", "int4", "int8", "intptr_t",
    "kernel_enqueue_flags_t", "lo", "long", "long16", "long2", "long3", "long4", "long8",
    "memory_order", "memory_scope", "ndrange_t", "nosvm", "odd", "opencl_unroll_hint", "packed",
    "pipe", "ptrdiff_t", "queue_t", "read_only", "read_write", "reqd_work_group_size",
    "reserve_id_t", "restrict", "sampler_t", "short", "short16", "short2", "short3", "short4",
    "short8", "size_t", "static", "typedef", "uchar", "uchar16", "uchar2", "uchar3", "uchar4",
    "uchar8", "uint", "uint16", "uint2", "uint3", "uint4", "uint8", "uintptr_t", "ulong",
    "ulong16", "ulong2", "ulong3", "ulong4", "ulong8", "uniform", "unsigned", "ushort", "ushort16",
    "ushort2", "ushort3", "ushort4", "ushort8", "vec_type_hint", "void", "volatile",
    "work_group_size_hint", "write_only",
];

/// Type names reserved by the standard; highlighted like keywords.
pub const RESERVED_TYPES: &[&str] = &[
    "bool16", "bool2", "bool3", "bool4", "bool8", "complex", "double16x16", "double16x2",
    "double16x3", "double16x4", "double16x8", "double2x16", "double2x2", "double2x3", "double2x4",
    "double2x8", "double3x16", "double3x2", "double3x3", "double3x4", "double3x8", "double4x16",
    "double4x2", "double4x3", "double4x4", "double4x8", "double8x16", "double8x2", "double8x3",
    "double8x4", "double8x8", "float16x16", "float16x2", "float16x3", "float16x4", "float16x8",
    "float2x16", "float2x2", "float2x3", "float2x4", "float2x8", "float3x16", "float3x2",
    "float3x3", "float3x4", "float3x8", "float4x16", "float4x2", "float4x3", "float4x4",
    "float4x8", "float8x16", "float8x2", "float8x3", "float8x4", "float8x8", "half16", "half2",
    "half3", "half4", "half8", "imaginary", "quad", "quad16", "quad2", "quad3", "quad4", "quad8",
];

/// Predefined macros, limits, math constants and enum-like values.
pub const BUILTIN_CONSTANTS: &[&str] = &[
    "ATOMIC_FLAG_INIT", "ATOMIC_VAR_INIT", "CHAR_BIT", "CHAR_MAX", "CHAR_MIN", "CLK_A", "CLK_ABGR",
    "CLK_ADDRESS_CLAMP", "CLK_ADDRESS_CLAMP_TO_EDGE", "CLK_ADDRESS_MIRRORED_REPEAT",
    "CLK_ADDRESS_NONE", "CLK_ADDRESS_REPEAT", "CLK_ARGB", "CLK_BGRA", "CLK_DEPTH",
    "CLK_DEVICE_QUEUE_FULL", "CLK_ENQUEUE_FLAGS_NO_WAIT", "CLK_ENQUEUE_FLAGS_WAIT_KERNEL",
    "CLK_ENQUEUE_FLAGS_WAIT_WORK_GROUP", "CLK_EVENT_ALLOCATION_FAILURE", "CLK_FILTER_LINEAR",
    "CLK_FILTER_NEAREST", "CLK_FLOAT", "CLK_GLOBAL_MEM_FENCE", "CLK_HALF_FLOAT",
    "CLK_IMAGE_MEM_FENCE", "CLK_INTENSITY", "CLK_INVALID_ARG_SIZE", "CLK_INVALID_EVENT_WAIT_LIST",
    "CLK_INVALID_NDRANGE", "CLK_INVALID_QUEUE", "CLK_LOCAL_MEM_FENCE", "CLK_LUMINANCE",
    "CLK_NORMALIZED_COORDS_FALSE", "CLK_NORMALIZED_COORDS_TRUE", "CLK_NULL_RESERVE_ID",
    "CLK_OUT_OF_RESOURCES", "CLK_R", "CLK_RA", "CLK_RG", "CLK_RGB", "CLK_RGBA", "CLK_RGBx",
    "CLK_RGx", "CLK_Rx", "CLK_SIGNED_INT16", "CLK_SIGNED_INT32", "CLK_SIGNED_INT8",
    "CLK_SNORM_INT16", "CLK_SNORM_INT8", "CLK_UNORM_INT16", "CLK_UNORM_INT8",
    "CLK_UNORM_SHORT_101010", "CLK_UNORM_SHORT_555", "CLK_UNORM_SHORT_565", "CLK_UNSIGNED_INT16",
    "CLK_UNSIGNED_INT32", "CLK_UNSIGNED_INT8", "CLK_sBGRA", "CLK_sRGB", "CLK_sRGBA", "CLK_sRGBx",
    "CL_DEVICE_MAX_GLOBAL_VARIABLE_SIZE", "CL_VERSION_1_0", "CL_VERSION_1_1", "CL_VERSION_1_2",
    "CL_VERSION_2_0", "DBL_DIG", "DBL_EPSILSON", "DBL_MANT_DIG", "DBL_MAX", "DBL_MAX_10_EXP",
    "DBL_MAX_EXP", "DBL_MIN", "DBL_MIN_10_EXP", "DBL_MIN_EXP", "FLT_DIG", "FLT_EPSILSON",
    "FLT_MANT_DIG", "FLT_MAX", "FLT_MAX_10_EXP", "FLT_MAX_EXP", "FLT_MIN", "FLT_MIN_10_EXP",
    "FLT_MIN_EXP", "FLT_RADIX", "FP_CONTRACT", "FP_FAST_FMAF", "HIGE_VAL", "HUGE_VALF", "INFINITY",
    "INT_MAX", "INT_MIN", "LONG_MAX", "LONG_MIN", "MAXFLOAT", "M_1_PI", "M_1_PI_F", "M_2_PI",
    "M_2_PI_F", "M_2_SQRTPI", "M_2_SQRTPI_F", "M_E", "M_E_F", "M_LN10", "M_LN10_F", "M_LN2",
    "M_LN2_F", "M_LOG10E", "M_LOG10E_F", "M_LOG2E", "M_LOG2E_F", "M_PI", "M_PI_2", "M_PI_2_F",
    "M_PI_4", "M_PI_4_F", "M_PI_F", "M_SQRT1_2", "M_SQRT1_2_F", "M_SQRT2", "M_SQRT2_F", "NAN",
    "NULL", "SCHAR_MAX", "SCHAR_MIN", "SHRT_MAX", "SHRT_MIN", "UCHAR_MAX", "UINT_MAX", "ULONG_MAX",
    "USHRT_MAX", "__ENDIAN_LITTLE__", "__FAST_RELAXED_MATH__", "__FILE__", "__IMAGE_SUPPORT__",
    "__LINE__", "__OPENCL_C_VERSION__", "__OPENCL_VERSION__", "memory_order_acq_rel",
    "memory_order_acquire", "memory_order_relaxed", "memory_order_release", "memory_order_seq_cst",
    "memory_scope_all_svm_devices", "memory_scope_device", "memory_scope_work_group",
    "memory_scope_work_item",
];
