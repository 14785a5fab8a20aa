use crate::*;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr::{null, null_mut};

interface! {
    #[uuid(0x4dc583bf_3a10_438a_8722_e9765224f1f1)]
    /// A batch of sprites drawn from one bitmap by
    /// `ID2D1DeviceContext3::DrawSpriteBatch`.
    interface ID2D1SpriteBatch(ID2D1SpriteBatchVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn AddSprites(
            spriteCount: u32,
            destinationRectangles: *const D2D1_RECT_F,
            sourceRectangles: *const D2D1_RECT_U,
            colors: *const D2D1_COLOR_F,
            transforms: *const D2D1_MATRIX_3X2_F,
            destinationRectanglesStride: u32,
            sourceRectanglesStride: u32,
            colorsStride: u32,
            transformsStride: u32,
        ) -> HRESULT,
        fn SetSprites(
            startIndex: u32,
            spriteCount: u32,
            destinationRectangles: *const D2D1_RECT_F,
            sourceRectangles: *const D2D1_RECT_U,
            colors: *const D2D1_COLOR_F,
            transforms: *const D2D1_MATRIX_3X2_F,
            destinationRectanglesStride: u32,
            sourceRectanglesStride: u32,
            colorsStride: u32,
            transformsStride: u32,
        ) -> HRESULT,
        fn GetSprites(
            startIndex: u32,
            spriteCount: u32,
            destinationRectangles: *mut D2D1_RECT_F,
            sourceRectangles: *mut D2D1_RECT_U,
            colors: *mut D2D1_COLOR_F,
            transforms: *mut D2D1_MATRIX_3X2_F,
        ) -> HRESULT,
        fn GetSpriteCount() -> u32,
        fn Clear() -> (),
    }
}

/// Strided per-sprite arrays for `AddSprites` and `SetSprites`.
///
/// Null arrays are left to the native defaults: the whole bitmap as
/// source, opaque white, identity transform. A stride of zero repeats the
/// first element for every sprite. The arrays are borrowed for `'a`.
#[derive(Clone, Copy, Debug)]
pub struct SpriteData<'a> {
    pub destination_rectangles: *const D2D1_RECT_F,
    pub source_rectangles: *const D2D1_RECT_U,
    pub colors: *const D2D1_COLOR_F,
    pub transforms: *const D2D1_MATRIX_3X2_F,
    pub destination_rectangles_stride: u32,
    pub source_rectangles_stride: u32,
    pub colors_stride: u32,
    pub transforms_stride: u32,
    _marker: PhantomData<&'a ()>,
}

impl Default for SpriteData<'_> {
    fn default() -> Self {
        Self {
            destination_rectangles: null(),
            source_rectangles: null(),
            colors: null(),
            transforms: null(),
            destination_rectangles_stride: size_of::<D2D1_RECT_F>() as u32,
            source_rectangles_stride: size_of::<D2D1_RECT_U>() as u32,
            colors_stride: size_of::<D2D1_COLOR_F>() as u32,
            transforms_stride: size_of::<D2D1_MATRIX_3X2_F>() as u32,
            _marker: PhantomData,
        }
    }
}

impl<'a> SpriteData<'a> {
    /// Tightly packed destinations; the other arrays stay null.
    pub fn destinations(rects: &'a [D2D1_RECT_F]) -> Self {
        Self {
            destination_rectangles: rects.as_ptr(),
            ..Default::default()
        }
    }

    pub fn with_sources(mut self, rects: &'a [D2D1_RECT_U]) -> Self {
        self.source_rectangles = rects.as_ptr();
        self
    }

    pub fn with_colors(mut self, colors: &'a [D2D1_COLOR_F]) -> Self {
        self.colors = colors.as_ptr();
        self
    }

    pub fn with_transforms(mut self, transforms: &'a [D2D1_MATRIX_3X2_F]) -> Self {
        self.transforms = transforms.as_ptr();
        self
    }

    /// Replaces all four strides, in the order of the native parameters.
    pub fn with_strides(mut self, destinations: u32, sources: u32, colors: u32, transforms: u32) -> Self {
        self.destination_rectangles_stride = destinations;
        self.source_rectangles_stride = sources;
        self.colors_stride = colors;
        self.transforms_stride = transforms;
        self
    }
}

impl ID2D1SpriteBatch {
    /// Appends `count` sprites read from `data`.
    ///
    /// # Safety
    ///
    /// Every non-null array in `data` must hold `count` elements at its
    /// stride.
    #[inline]
    pub unsafe fn add_sprites(&self, count: u32, data: &SpriteData<'_>) -> Result<()> {
        self.AddSprites(
            count,
            data.destination_rectangles,
            data.source_rectangles,
            data.colors,
            data.transforms,
            data.destination_rectangles_stride,
            data.source_rectangles_stride,
            data.colors_stride,
            data.transforms_stride,
        )
        .check()
    }

    /// Overwrites `count` sprites from `start`. Null arrays leave the
    /// corresponding property unchanged.
    #[inline]
    pub unsafe fn set_sprites(&self, start: u32, count: u32, data: &SpriteData<'_>) -> Result<()> {
        self.SetSprites(
            start,
            count,
            data.destination_rectangles,
            data.source_rectangles,
            data.colors,
            data.transforms,
            data.destination_rectangles_stride,
            data.source_rectangles_stride,
            data.colors_stride,
            data.transforms_stride,
        )
        .check()
    }

    /// Reads the destination rectangles of `count` sprites from `start`.
    pub unsafe fn destination_rectangles(&self, start: u32, count: u32) -> Result<Vec<D2D1_RECT_F>> {
        let mut rects = vec![D2D1_RECT_F::default(); count as usize];
        self.GetSprites(
            start,
            count,
            rects.as_mut_ptr(),
            null_mut(),
            null_mut(),
            null_mut(),
        )
        .check()?;
        Ok(rects)
    }

    #[inline]
    pub unsafe fn clear(&self) {
        self.Clear();
    }
}
