//! GLSL vocabulary.
//!
//! Storage qualifiers, interpolation and precision qualifiers, scalar,
//! vector, matrix, sampler and image types, plus the words GLSL reserves for
//! future use (`asm`, `class`, `hvec2`, ...). Everything is reported as
//! [`TagCategory::Keyword`](shadetag_core::TagCategory::Keyword).

/// Reserved words of GLSL up to 1.50 with the image types of later versions.
pub const KEYWORDS: &[&str] = &[
    "FALSE", "active", "asm", "attribute", "bool", "bvec2", "bvec3", "bvec4", "cast", "centroid",
    "class", "common", "const", "discard", "double", "dvec2", "dvec3", "dvec4", "enum", "false",
    "filter", "fixed", "flat", "float", "fvec2", "fvec3", "fvec4", "half", "highp", "hvec2",
    "hvec3", "hvec4", "iimage1D", "iimage1DArray", "iimage2D", "iimage2DArray", "iimage3D",
    "iimageBuffer", "iimageCube", "image1D", "image1DArray", "image1DArrayShadow", "image1DShadow",
    "image2D", "image2DArray", "image2DArrayShadow", "image2DShadow", "image3D", "imageBuffer",
    "imageCube", "in", "inout", "input", "int", "interface", "invariant", "isampler1D",
    "isampler1DArray", "isampler2D", "isampler2DArray", "isampler2DMS", "isampler2DMSArray",
    "isampler2DRect", "isampler3D", "isamplerBuffer", "isamplerCube", "ivec2", "ivec3", "ivec4",
    "layout", "lowp", "mat2", "mat2x2", "mat2x3", "mat2x4", "mat3", "mat3x2", "mat3x3", "mat3x4",
    "mat4", "mat4x2", "mat4x3", "mat4x4", "mediump", "noinline", "noperspective", "out", "output",
    "packed", "partition", "precision", "return", "row_major", "sampler1D", "sampler1DArray",
    "sampler1DArrayShadow", "sampler1DShadow", "sampler2D", "sampler2DArray",
    "sampler2DArrayShadow", "sampler2DMS", "sampler2DMSArray", "sampler2DRect",
    "sampler2DRectShadow", "sampler2DShadow", "sampler3D", "sampler3DRect", "samplerBuffer",
    "samplerCube", "samplerCubeShadow", "sizeofcast", "smooth", "struct", "superp", "template",
    "this", "true", "typedef", "uimage1D", "uimage1DArray", "uimage2D", "uimage2DArray", "uimage3D",
    "uimageBuffer", "uimageCube", "uint", "uniform", "union", "usampler1D", "usampler1DArray",
    "usampler2D", "usampler2DArray", "usampler2DMS", "usampler2DMSArray", "usampler2DRect",
    "usampler3D", "usamplerBuffer", "usamplerCube", "uvec2", "uvec3", "uvec4", "varying", "vec2",
    "vec3", "vec4", "void",
];
