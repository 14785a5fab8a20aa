//! Plain data and enumerations shared by the Direct2D projections.
//!
//! Field order and constant values follow `d2d1.h` through `d2d1_3.h`,
//! `dcommon.h`, `dwrite.h` and `dxgiformat.h`.

#![allow(non_camel_case_types, non_snake_case)]

use crate::minwindef::{BOOL, HWND};
use crate::*;
use std::ffi::c_void;
use windows::core::{GUID, HRESULT};

pub type D2D1_TAG = u64;
pub type PCWSTR = *const u16;

pub const D2D1_DEFAULT_FLATTENING_TOLERANCE: f32 = 0.25;

native_enum! {
    DXGI_FORMAT: u32 {
        DXGI_FORMAT_UNKNOWN = 0,
        DXGI_FORMAT_R16G16B16A16_FLOAT = 10,
        DXGI_FORMAT_R8G8B8A8_UNORM = 28,
        DXGI_FORMAT_A8_UNORM = 65,
        DXGI_FORMAT_B8G8R8A8_UNORM = 87,
    }
}

native_enum! {
    DXGI_COLOR_SPACE_TYPE: u32 {
        DXGI_COLOR_SPACE_RGB_FULL_G22_NONE_P709 = 0,
        DXGI_COLOR_SPACE_RGB_FULL_G10_NONE_P709 = 1,
        DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P709 = 2,
        DXGI_COLOR_SPACE_RGB_STUDIO_G22_NONE_P2020 = 3,
    }
}

native_enum! {
    D2D1_ALPHA_MODE: u32 {
        D2D1_ALPHA_MODE_UNKNOWN = 0,
        D2D1_ALPHA_MODE_PREMULTIPLIED = 1,
        D2D1_ALPHA_MODE_STRAIGHT = 2,
        D2D1_ALPHA_MODE_IGNORE = 3,
    }
}

native_enum! {
    D2D1_GAMMA: u32 {
        D2D1_GAMMA_2_2 = 0,
        D2D1_GAMMA_1_0 = 1,
    }
}

native_enum! {
    D2D1_GAMMA1: u32 {
        D2D1_GAMMA1_G22 = 0,
        D2D1_GAMMA1_G10 = 1,
        D2D1_GAMMA1_G2084 = 2,
    }
}

native_enum! {
    D2D1_EXTEND_MODE: u32 {
        D2D1_EXTEND_MODE_CLAMP = 0,
        D2D1_EXTEND_MODE_WRAP = 1,
        D2D1_EXTEND_MODE_MIRROR = 2,
    }
}

native_enum! {
    flags D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS: u32 {
        D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS_NONE = 0,
        D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS_GDI_COMPATIBLE = 1,
    }
}

native_enum! {
    D2D1_OPACITY_MASK_CONTENT: u32 {
        D2D1_OPACITY_MASK_CONTENT_GRAPHICS = 0,
        D2D1_OPACITY_MASK_CONTENT_TEXT_NATURAL = 1,
        D2D1_OPACITY_MASK_CONTENT_TEXT_GDI_COMPATIBLE = 2,
    }
}

native_enum! {
    D2D1_BITMAP_INTERPOLATION_MODE: u32 {
        D2D1_BITMAP_INTERPOLATION_MODE_NEAREST_NEIGHBOR = 0,
        D2D1_BITMAP_INTERPOLATION_MODE_LINEAR = 1,
    }
}

native_enum! {
    D2D1_INTERPOLATION_MODE: u32 {
        D2D1_INTERPOLATION_MODE_NEAREST_NEIGHBOR = 0,
        D2D1_INTERPOLATION_MODE_LINEAR = 1,
        D2D1_INTERPOLATION_MODE_CUBIC = 2,
        D2D1_INTERPOLATION_MODE_MULTI_SAMPLE_LINEAR = 3,
        D2D1_INTERPOLATION_MODE_ANISOTROPIC = 4,
        D2D1_INTERPOLATION_MODE_HIGH_QUALITY_CUBIC = 5,
    }
}

native_enum! {
    flags D2D1_DRAW_TEXT_OPTIONS: u32 {
        D2D1_DRAW_TEXT_OPTIONS_NONE = 0,
        D2D1_DRAW_TEXT_OPTIONS_NO_SNAP = 1,
        D2D1_DRAW_TEXT_OPTIONS_CLIP = 2,
        D2D1_DRAW_TEXT_OPTIONS_ENABLE_COLOR_FONT = 4,
        D2D1_DRAW_TEXT_OPTIONS_DISABLE_COLOR_BITMAP_SNAPPING = 8,
    }
}

native_enum! {
    DWRITE_MEASURING_MODE: u32 {
        DWRITE_MEASURING_MODE_NATURAL = 0,
        DWRITE_MEASURING_MODE_GDI_CLASSIC = 1,
        DWRITE_MEASURING_MODE_GDI_NATURAL = 2,
    }
}

native_enum! {
    flags DWRITE_GLYPH_IMAGE_FORMATS: u32 {
        DWRITE_GLYPH_IMAGE_FORMATS_NONE = 0,
        DWRITE_GLYPH_IMAGE_FORMATS_TRUETYPE = 0x1,
        DWRITE_GLYPH_IMAGE_FORMATS_CFF = 0x2,
        DWRITE_GLYPH_IMAGE_FORMATS_COLR = 0x4,
        DWRITE_GLYPH_IMAGE_FORMATS_SVG = 0x8,
        DWRITE_GLYPH_IMAGE_FORMATS_PNG = 0x10,
        DWRITE_GLYPH_IMAGE_FORMATS_JPEG = 0x20,
        DWRITE_GLYPH_IMAGE_FORMATS_TIFF = 0x40,
        DWRITE_GLYPH_IMAGE_FORMATS_PREMULTIPLIED_B8G8R8A8 = 0x80,
    }
}

native_enum! {
    D2D1_ANTIALIAS_MODE: u32 {
        D2D1_ANTIALIAS_MODE_PER_PRIMITIVE = 0,
        D2D1_ANTIALIAS_MODE_ALIASED = 1,
    }
}

native_enum! {
    D2D1_TEXT_ANTIALIAS_MODE: u32 {
        D2D1_TEXT_ANTIALIAS_MODE_DEFAULT = 0,
        D2D1_TEXT_ANTIALIAS_MODE_CLEARTYPE = 1,
        D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE = 2,
        D2D1_TEXT_ANTIALIAS_MODE_ALIASED = 3,
    }
}

native_enum! {
    flags D2D1_LAYER_OPTIONS: u32 {
        D2D1_LAYER_OPTIONS_NONE = 0,
        D2D1_LAYER_OPTIONS_INITIALIZE_FOR_CLEARTYPE = 1,
    }
}

native_enum! {
    flags D2D1_LAYER_OPTIONS1: u32 {
        D2D1_LAYER_OPTIONS1_NONE = 0,
        D2D1_LAYER_OPTIONS1_INITIALIZE_FROM_BACKGROUND = 1,
        D2D1_LAYER_OPTIONS1_IGNORE_ALPHA = 2,
    }
}

native_enum! {
    D2D1_RENDER_TARGET_TYPE: u32 {
        D2D1_RENDER_TARGET_TYPE_DEFAULT = 0,
        D2D1_RENDER_TARGET_TYPE_SOFTWARE = 1,
        D2D1_RENDER_TARGET_TYPE_HARDWARE = 2,
    }
}

native_enum! {
    flags D2D1_RENDER_TARGET_USAGE: u32 {
        D2D1_RENDER_TARGET_USAGE_NONE = 0,
        D2D1_RENDER_TARGET_USAGE_FORCE_BITMAP_REMOTING = 1,
        D2D1_RENDER_TARGET_USAGE_GDI_COMPATIBLE = 2,
    }
}

native_enum! {
    D2D1_FEATURE_LEVEL: u32 {
        D2D1_FEATURE_LEVEL_DEFAULT = 0,
        D2D1_FEATURE_LEVEL_9 = 0x9100,
        D2D1_FEATURE_LEVEL_10 = 0xa000,
    }
}

native_enum! {
    flags D2D1_PRESENT_OPTIONS: u32 {
        D2D1_PRESENT_OPTIONS_NONE = 0,
        D2D1_PRESENT_OPTIONS_RETAIN_CONTENTS = 1,
        D2D1_PRESENT_OPTIONS_IMMEDIATELY = 2,
    }
}

native_enum! {
    D2D1_FILL_MODE: u32 {
        D2D1_FILL_MODE_ALTERNATE = 0,
        D2D1_FILL_MODE_WINDING = 1,
    }
}

native_enum! {
    D2D1_CAP_STYLE: u32 {
        D2D1_CAP_STYLE_FLAT = 0,
        D2D1_CAP_STYLE_SQUARE = 1,
        D2D1_CAP_STYLE_ROUND = 2,
        D2D1_CAP_STYLE_TRIANGLE = 3,
    }
}

native_enum! {
    D2D1_LINE_JOIN: u32 {
        D2D1_LINE_JOIN_MITER = 0,
        D2D1_LINE_JOIN_BEVEL = 1,
        D2D1_LINE_JOIN_ROUND = 2,
        D2D1_LINE_JOIN_MITER_OR_BEVEL = 3,
    }
}

native_enum! {
    D2D1_DASH_STYLE: u32 {
        D2D1_DASH_STYLE_SOLID = 0,
        D2D1_DASH_STYLE_DASH = 1,
        D2D1_DASH_STYLE_DOT = 2,
        D2D1_DASH_STYLE_DASH_DOT = 3,
        D2D1_DASH_STYLE_DASH_DOT_DOT = 4,
        D2D1_DASH_STYLE_CUSTOM = 5,
    }
}

native_enum! {
    D2D1_STROKE_TRANSFORM_TYPE: u32 {
        D2D1_STROKE_TRANSFORM_TYPE_NORMAL = 0,
        D2D1_STROKE_TRANSFORM_TYPE_FIXED = 1,
        D2D1_STROKE_TRANSFORM_TYPE_HAIRLINE = 2,
    }
}

native_enum! {
    D2D1_PRIMITIVE_BLEND: u32 {
        D2D1_PRIMITIVE_BLEND_SOURCE_OVER = 0,
        D2D1_PRIMITIVE_BLEND_COPY = 1,
        D2D1_PRIMITIVE_BLEND_MIN = 2,
        D2D1_PRIMITIVE_BLEND_ADD = 3,
        D2D1_PRIMITIVE_BLEND_MAX = 4,
    }
}

native_enum! {
    D2D1_UNIT_MODE: u32 {
        D2D1_UNIT_MODE_DIPS = 0,
        D2D1_UNIT_MODE_PIXELS = 1,
    }
}

native_enum! {
    flags D2D1_DEVICE_CONTEXT_OPTIONS: u32 {
        D2D1_DEVICE_CONTEXT_OPTIONS_NONE = 0,
        D2D1_DEVICE_CONTEXT_OPTIONS_ENABLE_MULTITHREADED_OPTIMIZATIONS = 1,
    }
}

native_enum! {
    D2D1_RENDERING_PRIORITY: u32 {
        D2D1_RENDERING_PRIORITY_NORMAL = 0,
        D2D1_RENDERING_PRIORITY_LOW = 1,
    }
}

native_enum! {
    D2D1_COLOR_SPACE: u32 {
        D2D1_COLOR_SPACE_CUSTOM = 0,
        D2D1_COLOR_SPACE_SRGB = 1,
        D2D1_COLOR_SPACE_SCRGB = 2,
    }
}

native_enum! {
    D2D1_BUFFER_PRECISION: u32 {
        D2D1_BUFFER_PRECISION_UNKNOWN = 0,
        D2D1_BUFFER_PRECISION_8BPC_UNORM = 1,
        D2D1_BUFFER_PRECISION_8BPC_UNORM_SRGB = 2,
        D2D1_BUFFER_PRECISION_16BPC_UNORM = 3,
        D2D1_BUFFER_PRECISION_16BPC_FLOAT = 4,
        D2D1_BUFFER_PRECISION_32BPC_FLOAT = 5,
    }
}

native_enum! {
    D2D1_COLOR_INTERPOLATION_MODE: u32 {
        D2D1_COLOR_INTERPOLATION_MODE_STRAIGHT = 0,
        D2D1_COLOR_INTERPOLATION_MODE_PREMULTIPLIED = 1,
    }
}

native_enum! {
    D2D1_COMPOSITE_MODE: u32 {
        D2D1_COMPOSITE_MODE_SOURCE_OVER = 0,
        D2D1_COMPOSITE_MODE_DESTINATION_OVER = 1,
        D2D1_COMPOSITE_MODE_SOURCE_IN = 2,
        D2D1_COMPOSITE_MODE_DESTINATION_IN = 3,
        D2D1_COMPOSITE_MODE_SOURCE_OUT = 4,
        D2D1_COMPOSITE_MODE_DESTINATION_OUT = 5,
        D2D1_COMPOSITE_MODE_SOURCE_ATOP = 6,
        D2D1_COMPOSITE_MODE_DESTINATION_ATOP = 7,
        D2D1_COMPOSITE_MODE_XOR = 8,
        D2D1_COMPOSITE_MODE_PLUS = 9,
        D2D1_COMPOSITE_MODE_SOURCE_COPY = 10,
        D2D1_COMPOSITE_MODE_BOUNDED_SOURCE_COPY = 11,
        D2D1_COMPOSITE_MODE_MASK_INVERT = 12,
    }
}

native_enum! {
    flags D2D1_BITMAP_OPTIONS: u32 {
        D2D1_BITMAP_OPTIONS_NONE = 0,
        D2D1_BITMAP_OPTIONS_TARGET = 1,
        D2D1_BITMAP_OPTIONS_CANNOT_DRAW = 2,
        D2D1_BITMAP_OPTIONS_CPU_READ = 4,
        D2D1_BITMAP_OPTIONS_GDI_COMPATIBLE = 8,
    }
}

native_enum! {
    D2D1_PRINT_FONT_SUBSET_MODE: u32 {
        D2D1_PRINT_FONT_SUBSET_MODE_DEFAULT = 0,
        D2D1_PRINT_FONT_SUBSET_MODE_EACHPAGE = 1,
        D2D1_PRINT_FONT_SUBSET_MODE_NONE = 2,
    }
}

native_enum! {
    D2D1_INK_NIB_SHAPE: u32 {
        D2D1_INK_NIB_SHAPE_ROUND = 0,
        D2D1_INK_NIB_SHAPE_SQUARE = 1,
    }
}

native_enum! {
    D2D1_PATCH_EDGE_MODE: u32 {
        D2D1_PATCH_EDGE_MODE_ALIASED = 0,
        D2D1_PATCH_EDGE_MODE_ANTIALIASED = 1,
        D2D1_PATCH_EDGE_MODE_ALIASED_INFLATED = 2,
    }
}

native_enum! {
    flags D2D1_IMAGE_SOURCE_LOADING_OPTIONS: u32 {
        D2D1_IMAGE_SOURCE_LOADING_OPTIONS_NONE = 0,
        D2D1_IMAGE_SOURCE_LOADING_OPTIONS_RELEASE_SOURCE = 1,
        D2D1_IMAGE_SOURCE_LOADING_OPTIONS_CACHE_ON_DEMAND = 2,
    }
}

native_enum! {
    flags D2D1_IMAGE_SOURCE_FROM_DXGI_OPTIONS: u32 {
        D2D1_IMAGE_SOURCE_FROM_DXGI_OPTIONS_NONE = 0,
        D2D1_IMAGE_SOURCE_FROM_DXGI_OPTIONS_LOW_QUALITY_PRIMARY_CONVERSION = 1,
    }
}

native_enum! {
    D2D1_ORIENTATION: u32 {
        D2D1_ORIENTATION_DEFAULT = 1,
        D2D1_ORIENTATION_FLIP_HORIZONTAL = 2,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE180 = 3,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE180_FLIP_HORIZONTAL = 4,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE90_FLIP_HORIZONTAL = 5,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE270 = 6,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE270_FLIP_HORIZONTAL = 7,
        D2D1_ORIENTATION_ROTATE_CLOCKWISE90 = 8,
    }
}

native_enum! {
    flags D2D1_TRANSFORMED_IMAGE_SOURCE_OPTIONS: u32 {
        D2D1_TRANSFORMED_IMAGE_SOURCE_OPTIONS_NONE = 0,
        D2D1_TRANSFORMED_IMAGE_SOURCE_OPTIONS_DISABLE_DPI_SCALE = 1,
    }
}

native_enum! {
    flags D2D1_SPRITE_OPTIONS: u32 {
        D2D1_SPRITE_OPTIONS_NONE = 0,
        D2D1_SPRITE_OPTIONS_CLAMP_TO_SOURCE_RECTANGLE = 1,
    }
}

native_enum! {
    D2D1_COLOR_BITMAP_GLYPH_SNAP_OPTION: u32 {
        D2D1_COLOR_BITMAP_GLYPH_SNAP_OPTION_DEFAULT = 0,
        D2D1_COLOR_BITMAP_GLYPH_SNAP_OPTION_DISABLE = 1,
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D_POINT_2F {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D_POINT_2U {
    pub x: u32,
    pub y: u32,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D_SIZE_F {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D_SIZE_U {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D_RECT_F {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D_RECT_U {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

pub type D2D1_POINT_2F = D2D_POINT_2F;
pub type D2D1_POINT_2U = D2D_POINT_2U;
pub type D2D1_SIZE_F = D2D_SIZE_F;
pub type D2D1_SIZE_U = D2D_SIZE_U;
pub type D2D1_RECT_F = D2D_RECT_F;
pub type D2D1_RECT_U = D2D_RECT_U;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_COLOR_F {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Row-major 3x2 affine matrix.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct D2D_MATRIX_3X2_F {
    pub _11: f32,
    pub _12: f32,
    pub _21: f32,
    pub _22: f32,
    pub _31: f32,
    pub _32: f32,
}

impl D2D_MATRIX_3X2_F {
    pub const IDENTITY: Self = Self {
        _11: 1.0,
        _12: 0.0,
        _21: 0.0,
        _22: 1.0,
        _31: 0.0,
        _32: 0.0,
    };

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            _31: x,
            _32: y,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            _11: x,
            _22: y,
            ..Self::IDENTITY
        }
    }
}

impl Default for D2D_MATRIX_3X2_F {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub type D2D1_MATRIX_3X2_F = D2D_MATRIX_3X2_F;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D_MATRIX_4X4_F {
    pub m: [[f32; 4]; 4],
}

pub type D2D1_MATRIX_4X4_F = D2D_MATRIX_4X4_F;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_PIXEL_FORMAT {
    pub format: DXGI_FORMAT,
    pub alphaMode: D2D1_ALPHA_MODE,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_BITMAP_PROPERTIES {
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct D2D1_BITMAP_PROPERTIES1 {
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
    pub bitmapOptions: D2D1_BITMAP_OPTIONS,
    pub colorContext: *mut ID2D1ColorContext,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_BITMAP_BRUSH_PROPERTIES {
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_BITMAP_INTERPOLATION_MODE,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_BITMAP_BRUSH_PROPERTIES1 {
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_INTERPOLATION_MODE,
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct D2D1_BRUSH_PROPERTIES {
    pub opacity: f32,
    pub transform: D2D1_MATRIX_3X2_F,
}

impl Default for D2D1_BRUSH_PROPERTIES {
    #[inline]
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: D2D1_MATRIX_3X2_F::IDENTITY,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_GRADIENT_STOP {
    pub position: f32,
    pub color: D2D1_COLOR_F,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_LINEAR_GRADIENT_BRUSH_PROPERTIES {
    pub startPoint: D2D1_POINT_2F,
    pub endPoint: D2D1_POINT_2F,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_RADIAL_GRADIENT_BRUSH_PROPERTIES {
    pub center: D2D1_POINT_2F,
    pub gradientOriginOffset: D2D1_POINT_2F,
    pub radiusX: f32,
    pub radiusY: f32,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_ROUNDED_RECT {
    pub rect: D2D1_RECT_F,
    pub radiusX: f32,
    pub radiusY: f32,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_ELLIPSE {
    pub point: D2D1_POINT_2F,
    pub radiusX: f32,
    pub radiusY: f32,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct D2D1_LAYER_PARAMETERS {
    pub contentBounds: D2D1_RECT_F,
    pub geometricMask: *mut ID2D1Geometry,
    pub maskAntialiasMode: D2D1_ANTIALIAS_MODE,
    pub maskTransform: D2D1_MATRIX_3X2_F,
    pub opacity: f32,
    pub opacityBrush: *mut ID2D1Brush,
    pub layerOptions: D2D1_LAYER_OPTIONS,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct D2D1_LAYER_PARAMETERS1 {
    pub contentBounds: D2D1_RECT_F,
    pub geometricMask: *mut ID2D1Geometry,
    pub maskAntialiasMode: D2D1_ANTIALIAS_MODE,
    pub maskTransform: D2D1_MATRIX_3X2_F,
    pub opacity: f32,
    pub opacityBrush: *mut ID2D1Brush,
    pub layerOptions: D2D1_LAYER_OPTIONS1,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_RENDER_TARGET_PROPERTIES {
    pub r#type: D2D1_RENDER_TARGET_TYPE,
    pub pixelFormat: D2D1_PIXEL_FORMAT,
    pub dpiX: f32,
    pub dpiY: f32,
    pub usage: D2D1_RENDER_TARGET_USAGE,
    pub minLevel: D2D1_FEATURE_LEVEL,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_HWND_RENDER_TARGET_PROPERTIES {
    pub hwnd: HWND,
    pub pixelSize: D2D1_SIZE_U,
    pub presentOptions: D2D1_PRESENT_OPTIONS,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_STROKE_STYLE_PROPERTIES {
    pub startCap: D2D1_CAP_STYLE,
    pub endCap: D2D1_CAP_STYLE,
    pub dashCap: D2D1_CAP_STYLE,
    pub lineJoin: D2D1_LINE_JOIN,
    pub miterLimit: f32,
    pub dashStyle: D2D1_DASH_STYLE,
    pub dashOffset: f32,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_STROKE_STYLE_PROPERTIES1 {
    pub startCap: D2D1_CAP_STYLE,
    pub endCap: D2D1_CAP_STYLE,
    pub dashCap: D2D1_CAP_STYLE,
    pub lineJoin: D2D1_LINE_JOIN,
    pub miterLimit: f32,
    pub dashStyle: D2D1_DASH_STYLE,
    pub dashOffset: f32,
    pub transformType: D2D1_STROKE_TRANSFORM_TYPE,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_DRAWING_STATE_DESCRIPTION {
    pub antialiasMode: D2D1_ANTIALIAS_MODE,
    pub textAntialiasMode: D2D1_TEXT_ANTIALIAS_MODE,
    pub tag1: D2D1_TAG,
    pub tag2: D2D1_TAG,
    pub transform: D2D1_MATRIX_3X2_F,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_DRAWING_STATE_DESCRIPTION1 {
    pub antialiasMode: D2D1_ANTIALIAS_MODE,
    pub textAntialiasMode: D2D1_TEXT_ANTIALIAS_MODE,
    pub tag1: D2D1_TAG,
    pub tag2: D2D1_TAG,
    pub transform: D2D1_MATRIX_3X2_F,
    pub primitiveBlend: D2D1_PRIMITIVE_BLEND,
    pub unitMode: D2D1_UNIT_MODE,
}

pub type PD2D1_PROPERTY_SET_FUNCTION =
    Option<unsafe extern "system" fn(effect: *mut IUnknown, data: *const u8, dataSize: u32) -> HRESULT>;
pub type PD2D1_PROPERTY_GET_FUNCTION = Option<
    unsafe extern "system" fn(
        effect: *const IUnknown,
        data: *mut u8,
        dataSize: u32,
        actualSize: *mut u32,
    ) -> HRESULT,
>;
pub type PD2D1_EFFECT_FACTORY =
    Option<unsafe extern "system" fn(effectImpl: *mut *mut IUnknown) -> HRESULT>;

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct D2D1_PROPERTY_BINDING {
    pub propertyName: PCWSTR,
    pub setFunction: PD2D1_PROPERTY_SET_FUNCTION,
    pub getFunction: PD2D1_PROPERTY_GET_FUNCTION,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_IMAGE_BRUSH_PROPERTIES {
    pub sourceRectangle: D2D1_RECT_F,
    pub extendModeX: D2D1_EXTEND_MODE,
    pub extendModeY: D2D1_EXTEND_MODE,
    pub interpolationMode: D2D1_INTERPOLATION_MODE,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_RENDERING_CONTROLS {
    pub bufferPrecision: D2D1_BUFFER_PRECISION,
    pub tileSize: D2D1_SIZE_U,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct D2D1_EFFECT_INPUT_DESCRIPTION {
    pub effect: *mut ID2D1Effect,
    pub inputIndex: u32,
    pub inputRectangle: D2D1_RECT_F,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_PRINT_CONTROL_PROPERTIES {
    pub fontSubset: D2D1_PRINT_FONT_SUBSET_MODE,
    pub rasterDPI: f32,
    pub colorSpace: D2D1_COLOR_SPACE,
}

/// A point on an ink stroke with the nib radius at that point.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_INK_POINT {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A cubic Bézier segment of an ink stroke; the start point is the end of
/// the previous segment.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_INK_BEZIER_SEGMENT {
    pub point1: D2D1_INK_POINT,
    pub point2: D2D1_INK_POINT,
    pub point3: D2D1_INK_POINT,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_INK_STYLE_PROPERTIES {
    pub nibShape: D2D1_INK_NIB_SHAPE,
    pub nibTransform: D2D1_MATRIX_3X2_F,
}

/// A tensor patch of a gradient mesh: sixteen control points, the colors
/// of the four corners and the antialiasing of each edge.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_GRADIENT_MESH_PATCH {
    pub point00: D2D1_POINT_2F,
    pub point01: D2D1_POINT_2F,
    pub point02: D2D1_POINT_2F,
    pub point03: D2D1_POINT_2F,
    pub point10: D2D1_POINT_2F,
    pub point11: D2D1_POINT_2F,
    pub point12: D2D1_POINT_2F,
    pub point13: D2D1_POINT_2F,
    pub point20: D2D1_POINT_2F,
    pub point21: D2D1_POINT_2F,
    pub point22: D2D1_POINT_2F,
    pub point23: D2D1_POINT_2F,
    pub point30: D2D1_POINT_2F,
    pub point31: D2D1_POINT_2F,
    pub point32: D2D1_POINT_2F,
    pub point33: D2D1_POINT_2F,
    pub color00: D2D1_COLOR_F,
    pub color03: D2D1_COLOR_F,
    pub color30: D2D1_COLOR_F,
    pub color33: D2D1_COLOR_F,
    pub topEdgeMode: D2D1_PATCH_EDGE_MODE,
    pub leftEdgeMode: D2D1_PATCH_EDGE_MODE,
    pub bottomEdgeMode: D2D1_PATCH_EDGE_MODE,
    pub rightEdgeMode: D2D1_PATCH_EDGE_MODE,
}

/// Primaries, white point and gamma of a simple color profile.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_SIMPLE_COLOR_PROFILE {
    pub redPrimary: D2D1_POINT_2F,
    pub greenPrimary: D2D1_POINT_2F,
    pub bluePrimary: D2D1_POINT_2F,
    pub whitePointXZ: D2D1_POINT_2F,
    pub gamma: D2D1_GAMMA1,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct D2D1_TRANSFORMED_IMAGE_SOURCE_PROPERTIES {
    pub orientation: D2D1_ORIENTATION,
    pub scaleX: f32,
    pub scaleY: f32,
    pub interpolationMode: D2D1_INTERPOLATION_MODE,
    pub options: D2D1_TRANSFORMED_IMAGE_SOURCE_OPTIONS,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct DWRITE_GLYPH_OFFSET {
    pub advanceOffset: f32,
    pub ascenderOffset: f32,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DWRITE_GLYPH_RUN {
    pub fontFace: *mut IDWriteFontFace,
    pub fontEmSize: f32,
    pub glyphCount: u32,
    pub glyphIndices: *const u16,
    pub glyphAdvances: *const f32,
    pub glyphOffsets: *const DWRITE_GLYPH_OFFSET,
    pub isSideways: BOOL,
    pub bidiLevel: u32,
}

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct DWRITE_GLYPH_RUN_DESCRIPTION {
    pub localeName: PCWSTR,
    pub string: PCWSTR,
    pub stringLength: u32,
    pub clusterMap: *const u16,
    pub textPosition: u32,
}

pub type REFCLSID = *const GUID;
pub type REFIID = *const GUID;
pub type LPVOID = *mut c_void;
