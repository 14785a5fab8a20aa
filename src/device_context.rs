use crate::com_ptr::{opt, opt_mut, raw, wrap};
use crate::*;
use std::ffi::c_void;
use std::ptr::{null, null_mut};

interface! {
    #[uuid(0xe8f7fe7a_191c_466d_ad95_975678bda998)]
    /// A render target bound to a device that can draw images and effects.
    interface ID2D1DeviceContext(ID2D1DeviceContextVtbl): ID2D1RenderTarget(ID2D1RenderTargetVtbl) {
        fn CreateBitmap(
            size: D2D1_SIZE_U,
            sourceData: *const c_void,
            pitch: u32,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateBitmapFromWicBitmap(
            wicBitmapSource: *mut IWICBitmapSource,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateColorContext(
            space: D2D1_COLOR_SPACE,
            profile: *const u8,
            profileSize: u32,
            colorContext: *mut *mut ID2D1ColorContext,
        ) -> HRESULT,
        fn CreateColorContextFromFilename(
            filename: PCWSTR,
            colorContext: *mut *mut ID2D1ColorContext,
        ) -> HRESULT,
        fn CreateColorContextFromWicColorContext(
            wicColorContext: *mut IWICColorContext,
            colorContext: *mut *mut ID2D1ColorContext,
        ) -> HRESULT,
        fn CreateBitmapFromDxgiSurface(
            surface: *mut IDXGISurface,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES1,
            bitmap: *mut *mut ID2D1Bitmap1,
        ) -> HRESULT,
        fn CreateEffect(effectId: REFCLSID, effect: *mut *mut ID2D1Effect) -> HRESULT,
        fn CreateGradientStopCollection(
            straightAlphaGradientStops: *const D2D1_GRADIENT_STOP,
            straightAlphaGradientStopsCount: u32,
            preInterpolationSpace: D2D1_COLOR_SPACE,
            postInterpolationSpace: D2D1_COLOR_SPACE,
            bufferPrecision: D2D1_BUFFER_PRECISION,
            extendMode: D2D1_EXTEND_MODE,
            colorInterpolationMode: D2D1_COLOR_INTERPOLATION_MODE,
            gradientStopCollection1: *mut *mut ID2D1GradientStopCollection1,
        ) -> HRESULT,
        fn CreateImageBrush(
            image: *mut ID2D1Image,
            imageBrushProperties: *const D2D1_IMAGE_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            imageBrush: *mut *mut ID2D1ImageBrush,
        ) -> HRESULT,
        fn CreateBitmapBrush(
            bitmap: *mut ID2D1Bitmap,
            bitmapBrushProperties: *const D2D1_BITMAP_BRUSH_PROPERTIES1,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            bitmapBrush: *mut *mut ID2D1BitmapBrush1,
        ) -> HRESULT,
        fn CreateCommandList(commandList: *mut *mut ID2D1CommandList) -> HRESULT,
        fn IsDxgiFormatSupported(format: DXGI_FORMAT) -> BOOL,
        fn IsBufferPrecisionSupported(bufferPrecision: D2D1_BUFFER_PRECISION) -> BOOL,
        fn GetImageLocalBounds(image: *mut ID2D1Image, localBounds: *mut D2D1_RECT_F) -> HRESULT,
        fn GetImageWorldBounds(image: *mut ID2D1Image, worldBounds: *mut D2D1_RECT_F) -> HRESULT,
        fn GetGlyphRunWorldBounds(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            measuringMode: DWRITE_MEASURING_MODE,
            bounds: *mut D2D1_RECT_F,
        ) -> HRESULT,
        fn GetDevice(device: *mut *mut ID2D1Device) -> (),
        fn SetTarget(image: *mut ID2D1Image) -> (),
        fn GetTarget(image: *mut *mut ID2D1Image) -> (),
        fn SetRenderingControls(renderingControls: *const D2D1_RENDERING_CONTROLS) -> (),
        fn GetRenderingControls(renderingControls: *mut D2D1_RENDERING_CONTROLS) -> (),
        fn SetPrimitiveBlend(primitiveBlend: D2D1_PRIMITIVE_BLEND) -> (),
        fn GetPrimitiveBlend() -> D2D1_PRIMITIVE_BLEND,
        fn SetUnitMode(unitMode: D2D1_UNIT_MODE) -> (),
        fn GetUnitMode() -> D2D1_UNIT_MODE,
        fn DrawGlyphRun(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            glyphRunDescription: *const DWRITE_GLYPH_RUN_DESCRIPTION,
            foregroundBrush: *mut ID2D1Brush,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn DrawImage(
            image: *mut ID2D1Image,
            targetOffset: *const D2D1_POINT_2F,
            imageRectangle: *const D2D1_RECT_F,
            interpolationMode: D2D1_INTERPOLATION_MODE,
            compositeMode: D2D1_COMPOSITE_MODE,
        ) -> (),
        fn DrawGdiMetafile(
            gdiMetafile: *mut ID2D1GdiMetafile,
            targetOffset: *const D2D1_POINT_2F,
        ) -> (),
        fn DrawBitmap(
            bitmap: *mut ID2D1Bitmap,
            destinationRectangle: *const D2D1_RECT_F,
            opacity: f32,
            interpolationMode: D2D1_INTERPOLATION_MODE,
            sourceRectangle: *const D2D1_RECT_F,
            perspectiveTransform: *const D2D1_MATRIX_4X4_F,
        ) -> (),
        fn PushLayer(layerParameters: *const D2D1_LAYER_PARAMETERS1, layer: *mut ID2D1Layer) -> (),
        fn InvalidateEffectInputRectangle(
            effect: *mut ID2D1Effect,
            input: u32,
            inputRectangle: *const D2D1_RECT_F,
        ) -> HRESULT,
        fn GetEffectInvalidRectangleCount(
            effect: *mut ID2D1Effect,
            rectangleCount: *mut u32,
        ) -> HRESULT,
        fn GetEffectInvalidRectangles(
            effect: *mut ID2D1Effect,
            rectangles: *mut D2D1_RECT_F,
            rectanglesCount: u32,
        ) -> HRESULT,
        fn GetEffectRequiredInputRectangles(
            renderEffect: *mut ID2D1Effect,
            renderImageRectangle: *const D2D1_RECT_F,
            inputDescriptions: *const D2D1_EFFECT_INPUT_DESCRIPTION,
            requiredInputRects: *mut D2D1_RECT_F,
            inputCount: u32,
        ) -> HRESULT,
        fn FillOpacityMask(
            opacityMask: *mut ID2D1Bitmap,
            brush: *mut ID2D1Brush,
            destinationRectangle: *const D2D1_RECT_F,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
    }
}

interface! {
    #[uuid(0xd37f57e4_6908_459f_a199_e72f24f79987)]
    interface ID2D1DeviceContext1(ID2D1DeviceContext1Vtbl): ID2D1DeviceContext(ID2D1DeviceContextVtbl) {
        fn CreateFilledGeometryRealization(
            geometry: *mut ID2D1Geometry,
            flatteningTolerance: f32,
            geometryRealization: *mut *mut ID2D1GeometryRealization,
        ) -> HRESULT,
        fn CreateStrokedGeometryRealization(
            geometry: *mut ID2D1Geometry,
            flatteningTolerance: f32,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
            geometryRealization: *mut *mut ID2D1GeometryRealization,
        ) -> HRESULT,
        fn DrawGeometryRealization(
            geometryRealization: *mut ID2D1GeometryRealization,
            brush: *mut ID2D1Brush,
        ) -> (),
    }
}

interface! {
    #[uuid(0x394ea6a3_0c34_4321_950b_6ca20f0be6c7)]
    /// Adds ink, gradient meshes and image sources.
    interface ID2D1DeviceContext2(ID2D1DeviceContext2Vtbl): ID2D1DeviceContext1(ID2D1DeviceContext1Vtbl) {
        fn CreateInk(startPoint: *const D2D1_INK_POINT, ink: *mut *mut ID2D1Ink) -> HRESULT,
        fn CreateInkStyle(
            inkStyleProperties: *const D2D1_INK_STYLE_PROPERTIES,
            inkStyle: *mut *mut ID2D1InkStyle,
        ) -> HRESULT,
        fn CreateGradientMesh(
            patches: *const D2D1_GRADIENT_MESH_PATCH,
            patchesCount: u32,
            gradientMesh: *mut *mut ID2D1GradientMesh,
        ) -> HRESULT,
        fn CreateImageSourceFromWic(
            wicBitmapSource: *mut IWICBitmapSource,
            loadingOptions: D2D1_IMAGE_SOURCE_LOADING_OPTIONS,
            alphaMode: D2D1_ALPHA_MODE,
            imageSource: *mut *mut ID2D1ImageSourceFromWic,
        ) -> HRESULT,
        fn CreateLookupTable3D(
            precision: D2D1_BUFFER_PRECISION,
            extents: *const u32,
            data: *const u8,
            dataCount: u32,
            strides: *const u32,
            lookupTable: *mut *mut ID2D1LookupTable3D,
        ) -> HRESULT,
        fn CreateImageSourceFromDxgi(
            surfaces: *const *mut IDXGISurface,
            surfaceCount: u32,
            colorSpace: DXGI_COLOR_SPACE_TYPE,
            options: D2D1_IMAGE_SOURCE_FROM_DXGI_OPTIONS,
            imageSource: *mut *mut ID2D1ImageSource,
        ) -> HRESULT,
        fn GetGradientMeshWorldBounds(
            gradientMesh: *mut ID2D1GradientMesh,
            pBounds: *mut D2D1_RECT_F,
        ) -> HRESULT,
        fn DrawInk(ink: *mut ID2D1Ink, brush: *mut ID2D1Brush, inkStyle: *mut ID2D1InkStyle) -> (),
        fn DrawGradientMesh(gradientMesh: *mut ID2D1GradientMesh) -> (),
        fn DrawGdiMetafile(
            gdiMetafile: *mut ID2D1GdiMetafile,
            destinationRectangle: *const D2D1_RECT_F,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
        fn CreateTransformedImageSource(
            imageSource: *mut ID2D1ImageSource,
            properties: *const D2D1_TRANSFORMED_IMAGE_SOURCE_PROPERTIES,
            transformedImageSource: *mut *mut ID2D1TransformedImageSource,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0x235a7496_8351_414c_bcd4_6672ab2d8e00)]
    interface ID2D1DeviceContext3(ID2D1DeviceContext3Vtbl): ID2D1DeviceContext2(ID2D1DeviceContext2Vtbl) {
        fn CreateSpriteBatch(spriteBatch: *mut *mut ID2D1SpriteBatch) -> HRESULT,
        fn DrawSpriteBatch(
            spriteBatch: *mut ID2D1SpriteBatch,
            startIndex: u32,
            spriteCount: u32,
            bitmap: *mut ID2D1Bitmap,
            interpolationMode: D2D1_BITMAP_INTERPOLATION_MODE,
            spriteOptions: D2D1_SPRITE_OPTIONS,
        ) -> (),
    }
}

interface! {
    #[uuid(0x8c427831_3d90_4476_b647_c4fae349e4db)]
    interface ID2D1DeviceContext4(ID2D1DeviceContext4Vtbl): ID2D1DeviceContext3(ID2D1DeviceContext3Vtbl) {
        fn CreateSvgGlyphStyle(svgGlyphStyle: *mut *mut ID2D1SvgGlyphStyle) -> HRESULT,
        fn DrawText(
            string: *const u16,
            stringLength: u32,
            textFormat: *mut IDWriteTextFormat,
            layoutRect: *const D2D1_RECT_F,
            defaultFillBrush: *mut ID2D1Brush,
            svgGlyphStyle: *mut ID2D1SvgGlyphStyle,
            colorPaletteIndex: u32,
            options: D2D1_DRAW_TEXT_OPTIONS,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn DrawTextLayout(
            origin: D2D1_POINT_2F,
            textLayout: *mut IDWriteTextLayout,
            defaultFillBrush: *mut ID2D1Brush,
            svgGlyphStyle: *mut ID2D1SvgGlyphStyle,
            colorPaletteIndex: u32,
            options: D2D1_DRAW_TEXT_OPTIONS,
        ) -> (),
        fn DrawColorBitmapGlyphRun(
            glyphImageFormat: DWRITE_GLYPH_IMAGE_FORMATS,
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            measuringMode: DWRITE_MEASURING_MODE,
            bitmapSnapOption: D2D1_COLOR_BITMAP_GLYPH_SNAP_OPTION,
        ) -> (),
        fn DrawSvgGlyphRun(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            defaultFillBrush: *mut ID2D1Brush,
            svgGlyphStyle: *mut ID2D1SvgGlyphStyle,
            colorPaletteIndex: u32,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn GetColorBitmapGlyphImage(
            glyphImageFormat: DWRITE_GLYPH_IMAGE_FORMATS,
            glyphOrigin: D2D1_POINT_2F,
            fontFace: *mut IDWriteFontFace,
            fontEmSize: f32,
            glyphIndex: u16,
            isSideways: BOOL,
            worldTransform: *const D2D1_MATRIX_3X2_F,
            dpiX: f32,
            dpiY: f32,
            glyphTransform: *mut D2D1_MATRIX_3X2_F,
            glyphImage: *mut *mut ID2D1Image,
        ) -> HRESULT,
        fn GetSvgGlyphImage(
            glyphOrigin: D2D1_POINT_2F,
            fontFace: *mut IDWriteFontFace,
            fontEmSize: f32,
            glyphIndex: u16,
            isSideways: BOOL,
            worldTransform: *const D2D1_MATRIX_3X2_F,
            defaultFillBrush: *mut ID2D1Brush,
            svgGlyphStyle: *mut ID2D1SvgGlyphStyle,
            colorPaletteIndex: u32,
            glyphTransform: *mut D2D1_MATRIX_3X2_F,
            glyphImage: *mut *mut ID2D1CommandList,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0x7836d248_68cc_4df6_b9e8_de991bf62eb7)]
    /// Adds SVG documents and color contexts built from DXGI color spaces
    /// or simple color profiles.
    interface ID2D1DeviceContext5(ID2D1DeviceContext5Vtbl): ID2D1DeviceContext4(ID2D1DeviceContext4Vtbl) {
        fn CreateSvgDocument(
            inputXmlStream: *mut IStream,
            viewportSize: D2D1_SIZE_F,
            svgDocument: *mut *mut ID2D1SvgDocument,
        ) -> HRESULT,
        fn DrawSvgDocument(svgDocument: *mut ID2D1SvgDocument) -> (),
        fn CreateColorContextFromDxgiColorSpace(
            colorSpace: DXGI_COLOR_SPACE_TYPE,
            colorContext: *mut *mut ID2D1ColorContext1,
        ) -> HRESULT,
        fn CreateColorContextFromSimpleColorProfile(
            simpleProfile: *const D2D1_SIMPLE_COLOR_PROFILE,
            colorContext: *mut *mut ID2D1ColorContext1,
        ) -> HRESULT,
    }
}

impl ID2D1DeviceContext {
    /// The device this context belongs to.
    #[inline]
    pub unsafe fn device(&self) -> Option<ComPtr<ID2D1Device>> {
        let mut device = null_mut();
        self.GetDevice(&mut device);
        ComPtr::from_raw(device)
    }

    /// The current target, or `None` when no target is set.
    #[inline]
    pub unsafe fn target(&self) -> Option<ComPtr<ID2D1Image>> {
        let mut image = null_mut();
        self.GetTarget(&mut image);
        ComPtr::from_raw(image)
    }

    #[inline]
    pub unsafe fn set_target(&self, image: Option<&ID2D1Image>) {
        self.SetTarget(opt_mut(image));
    }

    #[inline]
    pub unsafe fn create_bitmap(
        &self,
        size: D2D1_SIZE_U,
        data: Option<(&[u8], u32)>,
        props: &D2D1_BITMAP_PROPERTIES1,
    ) -> Result<ComPtr<ID2D1Bitmap1>> {
        let (src, pitch) = data.map_or((null(), 0), |(d, p)| (d.as_ptr() as *const c_void, p));
        let mut bitmap = null_mut();
        let hr = self.CreateBitmap(size, src, pitch, props, &mut bitmap);
        wrap(hr, bitmap)
    }

    #[inline]
    pub unsafe fn create_bitmap_from_dxgi_surface(
        &self,
        surface: &IDXGISurface,
        props: Option<&D2D1_BITMAP_PROPERTIES1>,
    ) -> Result<ComPtr<ID2D1Bitmap1>> {
        let mut bitmap = null_mut();
        let hr = self.CreateBitmapFromDxgiSurface(raw(surface), opt(props), &mut bitmap);
        wrap(hr, bitmap)
    }

    /// `DrawImage` with the header's defaults: no offset, the whole image,
    /// linear interpolation and source-over composition.
    #[inline]
    pub unsafe fn draw_image(
        &self,
        image: &ID2D1Image,
        offset: Option<&D2D1_POINT_2F>,
        source: Option<&D2D1_RECT_F>,
    ) {
        self.DrawImage(
            raw(image),
            opt(offset),
            opt(source),
            D2D1_INTERPOLATION_MODE_LINEAR,
            D2D1_COMPOSITE_MODE_SOURCE_OVER,
        );
    }

    /// `DrawBitmap` at full opacity with linear interpolation and no
    /// perspective transform.
    #[inline]
    pub unsafe fn draw_bitmap(
        &self,
        bitmap: &ID2D1Bitmap,
        dest: Option<&D2D1_RECT_F>,
        source: Option<&D2D1_RECT_F>,
    ) {
        self.DrawBitmap(
            raw(bitmap),
            opt(dest),
            1.0,
            D2D1_INTERPOLATION_MODE_LINEAR,
            opt(source),
            null(),
        );
    }

    #[inline]
    pub unsafe fn image_local_bounds(&self, image: &ID2D1Image) -> Result<D2D1_RECT_F> {
        let mut bounds = D2D1_RECT_F::default();
        self.GetImageLocalBounds(raw(image), &mut bounds).check()?;
        Ok(bounds)
    }

    #[inline]
    pub unsafe fn image_world_bounds(&self, image: &ID2D1Image) -> Result<D2D1_RECT_F> {
        let mut bounds = D2D1_RECT_F::default();
        self.GetImageWorldBounds(raw(image), &mut bounds).check()?;
        Ok(bounds)
    }
}

impl ID2D1DeviceContext2 {
    #[inline]
    pub unsafe fn create_ink(&self, start: &D2D1_INK_POINT) -> Result<ComPtr<ID2D1Ink>> {
        let mut ink = null_mut();
        let hr = self.CreateInk(start, &mut ink);
        wrap(hr, ink)
    }

    #[inline]
    pub unsafe fn create_ink_style(
        &self,
        props: Option<&D2D1_INK_STYLE_PROPERTIES>,
    ) -> Result<ComPtr<ID2D1InkStyle>> {
        let mut style = null_mut();
        let hr = self.CreateInkStyle(opt(props), &mut style);
        wrap(hr, style)
    }

    #[inline]
    pub unsafe fn create_gradient_mesh(
        &self,
        patches: &[D2D1_GRADIENT_MESH_PATCH],
    ) -> Result<ComPtr<ID2D1GradientMesh>> {
        let count = u32::try_from(patches.len()).map_err(|_| Error::Conversion { target: "u32" })?;
        let mut mesh = null_mut();
        let hr = self.CreateGradientMesh(patches.as_ptr(), count, &mut mesh);
        wrap(hr, mesh)
    }

    #[inline]
    pub unsafe fn gradient_mesh_world_bounds(&self, mesh: &ID2D1GradientMesh) -> Result<D2D1_RECT_F> {
        let mut bounds = D2D1_RECT_F::default();
        self.GetGradientMeshWorldBounds(raw(mesh), &mut bounds).check()?;
        Ok(bounds)
    }

    /// `DrawInk`, with the default style when `style` is `None`.
    #[inline]
    pub unsafe fn draw_ink(&self, ink: &ID2D1Ink, brush: &ID2D1Brush, style: Option<&ID2D1InkStyle>) {
        self.DrawInk(raw(ink), raw(brush), opt_mut(style));
    }

    #[inline]
    pub unsafe fn draw_gradient_mesh(&self, mesh: &ID2D1GradientMesh) {
        self.DrawGradientMesh(raw(mesh));
    }

    /// `DrawGdiMetafile` into a rectangle. `None` means the metafile's own
    /// bounds for either rectangle.
    #[inline]
    pub unsafe fn draw_gdi_metafile(
        &self,
        metafile: &ID2D1GdiMetafile,
        dest: Option<&D2D1_RECT_F>,
        source: Option<&D2D1_RECT_F>,
    ) {
        self.DrawGdiMetafile(raw(metafile), opt(dest), opt(source));
    }
}

impl ID2D1DeviceContext3 {
    #[inline]
    pub unsafe fn create_sprite_batch(&self) -> Result<ComPtr<ID2D1SpriteBatch>> {
        let mut batch = null_mut();
        let hr = self.CreateSpriteBatch(&mut batch);
        wrap(hr, batch)
    }

    /// Draws `count` sprites from `start` with linear interpolation and no
    /// sprite options.
    #[inline]
    pub unsafe fn draw_sprite_batch(
        &self,
        batch: &ID2D1SpriteBatch,
        start: u32,
        count: u32,
        bitmap: &ID2D1Bitmap,
    ) {
        self.DrawSpriteBatch(
            raw(batch),
            start,
            count,
            raw(bitmap),
            D2D1_BITMAP_INTERPOLATION_MODE_LINEAR,
            D2D1_SPRITE_OPTIONS_NONE,
        );
    }

    /// Draws every sprite of the batch.
    #[inline]
    pub unsafe fn draw_all_sprites(&self, batch: &ID2D1SpriteBatch, bitmap: &ID2D1Bitmap) {
        self.draw_sprite_batch(batch, 0, batch.GetSpriteCount(), bitmap);
    }
}

impl ID2D1DeviceContext5 {
    #[inline]
    pub unsafe fn create_color_context_from_dxgi_color_space(
        &self,
        color_space: DXGI_COLOR_SPACE_TYPE,
    ) -> Result<ComPtr<ID2D1ColorContext1>> {
        let mut ctx = null_mut();
        let hr = self.CreateColorContextFromDxgiColorSpace(color_space, &mut ctx);
        wrap(hr, ctx)
    }

    #[inline]
    pub unsafe fn create_color_context_from_simple_color_profile(
        &self,
        profile: &D2D1_SIMPLE_COLOR_PROFILE,
    ) -> Result<ComPtr<ID2D1ColorContext1>> {
        let mut ctx = null_mut();
        let hr = self.CreateColorContextFromSimpleColorProfile(profile, &mut ctx);
        wrap(hr, ctx)
    }

    #[inline]
    pub unsafe fn draw_svg_document(&self, document: &ID2D1SvgDocument) {
        self.DrawSvgDocument(raw(document));
    }
}
