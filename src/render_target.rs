use crate::com_ptr::{opt, opt_mut, raw};
use crate::*;
use std::ffi::c_void;
use std::mem::MaybeUninit;
use std::ptr::null_mut;

interface! {
    #[uuid(0x2cd90694_12e2_11dc_9fed_001143a055f9)]
    interface ID2D1RenderTarget(ID2D1RenderTargetVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn CreateBitmap(
            size: D2D1_SIZE_U,
            srcData: *const c_void,
            pitch: u32,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateBitmapFromWicBitmap(
            wicBitmapSource: *mut IWICBitmapSource,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateSharedBitmap(
            riid: REFIID,
            data: *mut c_void,
            bitmapProperties: *const D2D1_BITMAP_PROPERTIES,
            bitmap: *mut *mut ID2D1Bitmap,
        ) -> HRESULT,
        fn CreateBitmapBrush(
            bitmap: *mut ID2D1Bitmap,
            bitmapBrushProperties: *const D2D1_BITMAP_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            bitmapBrush: *mut *mut ID2D1BitmapBrush,
        ) -> HRESULT,
        fn CreateSolidColorBrush(
            color: *const D2D1_COLOR_F,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            solidColorBrush: *mut *mut ID2D1SolidColorBrush,
        ) -> HRESULT,
        fn CreateGradientStopCollection(
            gradientStops: *const D2D1_GRADIENT_STOP,
            gradientStopsCount: u32,
            colorInterpolationGamma: D2D1_GAMMA,
            extendMode: D2D1_EXTEND_MODE,
            gradientStopCollection: *mut *mut ID2D1GradientStopCollection,
        ) -> HRESULT,
        fn CreateLinearGradientBrush(
            linearGradientBrushProperties: *const D2D1_LINEAR_GRADIENT_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            gradientStopCollection: *mut ID2D1GradientStopCollection,
            linearGradientBrush: *mut *mut ID2D1LinearGradientBrush,
        ) -> HRESULT,
        fn CreateRadialGradientBrush(
            radialGradientBrushProperties: *const D2D1_RADIAL_GRADIENT_BRUSH_PROPERTIES,
            brushProperties: *const D2D1_BRUSH_PROPERTIES,
            gradientStopCollection: *mut ID2D1GradientStopCollection,
            radialGradientBrush: *mut *mut ID2D1RadialGradientBrush,
        ) -> HRESULT,
        fn CreateCompatibleRenderTarget(
            desiredSize: *const D2D1_SIZE_F,
            desiredPixelSize: *const D2D1_SIZE_U,
            desiredFormat: *const D2D1_PIXEL_FORMAT,
            options: D2D1_COMPATIBLE_RENDER_TARGET_OPTIONS,
            bitmapRenderTarget: *mut *mut ID2D1BitmapRenderTarget,
        ) -> HRESULT,
        fn CreateLayer(size: *const D2D1_SIZE_F, layer: *mut *mut ID2D1Layer) -> HRESULT,
        fn CreateMesh(mesh: *mut *mut ID2D1Mesh) -> HRESULT,
        fn DrawLine(
            point0: D2D1_POINT_2F,
            point1: D2D1_POINT_2F,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn DrawRectangle(
            rect: *const D2D1_RECT_F,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillRectangle(rect: *const D2D1_RECT_F, brush: *mut ID2D1Brush) -> (),
        fn DrawRoundedRectangle(
            roundedRect: *const D2D1_ROUNDED_RECT,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillRoundedRectangle(roundedRect: *const D2D1_ROUNDED_RECT, brush: *mut ID2D1Brush) -> (),
        fn DrawEllipse(
            ellipse: *const D2D1_ELLIPSE,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillEllipse(ellipse: *const D2D1_ELLIPSE, brush: *mut ID2D1Brush) -> (),
        fn DrawGeometry(
            geometry: *mut ID2D1Geometry,
            brush: *mut ID2D1Brush,
            strokeWidth: f32,
            strokeStyle: *mut ID2D1StrokeStyle,
        ) -> (),
        fn FillGeometry(
            geometry: *mut ID2D1Geometry,
            brush: *mut ID2D1Brush,
            opacityBrush: *mut ID2D1Brush,
        ) -> (),
        fn FillMesh(mesh: *mut ID2D1Mesh, brush: *mut ID2D1Brush) -> (),
        fn FillOpacityMask(
            opacityMask: *mut ID2D1Bitmap,
            brush: *mut ID2D1Brush,
            content: D2D1_OPACITY_MASK_CONTENT,
            destinationRectangle: *const D2D1_RECT_F,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
        fn DrawBitmap(
            bitmap: *mut ID2D1Bitmap,
            destinationRectangle: *const D2D1_RECT_F,
            opacity: f32,
            interpolationMode: D2D1_BITMAP_INTERPOLATION_MODE,
            sourceRectangle: *const D2D1_RECT_F,
        ) -> (),
        fn DrawText(
            string: *const u16,
            stringLength: u32,
            textFormat: *mut IDWriteTextFormat,
            layoutRect: *const D2D1_RECT_F,
            defaultFillBrush: *mut ID2D1Brush,
            options: D2D1_DRAW_TEXT_OPTIONS,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn DrawTextLayout(
            origin: D2D1_POINT_2F,
            textLayout: *mut IDWriteTextLayout,
            defaultFillBrush: *mut ID2D1Brush,
            options: D2D1_DRAW_TEXT_OPTIONS,
        ) -> (),
        fn DrawGlyphRun(
            baselineOrigin: D2D1_POINT_2F,
            glyphRun: *const DWRITE_GLYPH_RUN,
            foregroundBrush: *mut ID2D1Brush,
            measuringMode: DWRITE_MEASURING_MODE,
        ) -> (),
        fn SetTransform(transform: *const D2D1_MATRIX_3X2_F) -> (),
        fn GetTransform(transform: *mut D2D1_MATRIX_3X2_F) -> (),
        fn SetAntialiasMode(antialiasMode: D2D1_ANTIALIAS_MODE) -> (),
        fn GetAntialiasMode() -> D2D1_ANTIALIAS_MODE,
        fn SetTextAntialiasMode(textAntialiasMode: D2D1_TEXT_ANTIALIAS_MODE) -> (),
        fn GetTextAntialiasMode() -> D2D1_TEXT_ANTIALIAS_MODE,
        fn SetTextRenderingParams(textRenderingParams: *mut IDWriteRenderingParams) -> (),
        fn GetTextRenderingParams(textRenderingParams: *mut *mut IDWriteRenderingParams) -> (),
        fn SetTags(tag1: D2D1_TAG, tag2: D2D1_TAG) -> (),
        fn GetTags(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> (),
        fn PushLayer(layerParameters: *const D2D1_LAYER_PARAMETERS, layer: *mut ID2D1Layer) -> (),
        fn PopLayer() -> (),
        fn Flush(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> HRESULT,
        fn SaveDrawingState(drawingStateBlock: *mut ID2D1DrawingStateBlock) -> (),
        fn RestoreDrawingState(drawingStateBlock: *mut ID2D1DrawingStateBlock) -> (),
        fn PushAxisAlignedClip(
            clipRect: *const D2D1_RECT_F,
            antialiasMode: D2D1_ANTIALIAS_MODE,
        ) -> (),
        fn PopAxisAlignedClip() -> (),
        fn Clear(clearColor: *const D2D1_COLOR_F) -> (),
        fn BeginDraw() -> (),
        fn EndDraw(tag1: *mut D2D1_TAG, tag2: *mut D2D1_TAG) -> HRESULT,
        /// Returns by hidden out pointer, as C++ member functions returning
        /// a struct do.
        fn GetPixelFormat(result: *mut D2D1_PIXEL_FORMAT) -> *mut D2D1_PIXEL_FORMAT,
        fn SetDpi(dpiX: f32, dpiY: f32) -> (),
        fn GetDpi(dpiX: *mut f32, dpiY: *mut f32) -> (),
        fn GetSize(result: *mut D2D1_SIZE_F) -> *mut D2D1_SIZE_F,
        fn GetPixelSize(result: *mut D2D1_SIZE_U) -> *mut D2D1_SIZE_U,
        fn GetMaximumBitmapSize() -> u32,
        fn IsSupported(renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES) -> BOOL,
    }
}

impl ID2D1RenderTarget {
    /// `GetPixelFormat` returning the value.
    #[inline]
    pub unsafe fn pixel_format(&self) -> D2D1_PIXEL_FORMAT {
        let mut ret = MaybeUninit::uninit();
        self.GetPixelFormat(ret.as_mut_ptr());
        ret.assume_init()
    }

    #[inline]
    pub unsafe fn size(&self) -> D2D1_SIZE_F {
        let mut ret = MaybeUninit::uninit();
        self.GetSize(ret.as_mut_ptr());
        ret.assume_init()
    }

    #[inline]
    pub unsafe fn pixel_size(&self) -> D2D1_SIZE_U {
        let mut ret = MaybeUninit::uninit();
        self.GetPixelSize(ret.as_mut_ptr());
        ret.assume_init()
    }

    #[inline]
    pub unsafe fn transform(&self) -> D2D1_MATRIX_3X2_F {
        let mut ret = D2D1_MATRIX_3X2_F::IDENTITY;
        self.GetTransform(&mut ret);
        ret
    }

    /// `DrawLine` with the header's defaults: width 1 and no stroke style.
    #[inline]
    pub unsafe fn draw_line(
        &self,
        point0: D2D1_POINT_2F,
        point1: D2D1_POINT_2F,
        brush: &ID2D1Brush,
        stroke_width: Option<f32>,
        stroke_style: Option<&ID2D1StrokeStyle>,
    ) {
        self.DrawLine(
            point0,
            point1,
            raw(brush),
            stroke_width.unwrap_or(1.0),
            opt_mut(stroke_style),
        );
    }

    #[inline]
    pub unsafe fn draw_rectangle(
        &self,
        rect: &D2D1_RECT_F,
        brush: &ID2D1Brush,
        stroke_width: Option<f32>,
        stroke_style: Option<&ID2D1StrokeStyle>,
    ) {
        self.DrawRectangle(
            rect,
            raw(brush),
            stroke_width.unwrap_or(1.0),
            opt_mut(stroke_style),
        );
    }

    #[inline]
    pub unsafe fn clear(&self, color: Option<&D2D1_COLOR_F>) {
        self.Clear(opt(color));
    }

    /// `EndDraw` without tags, checked.
    #[inline]
    pub unsafe fn end_draw(&self) -> Result<()> {
        self.EndDraw(null_mut(), null_mut()).check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::mem::{offset_of, size_of};
    use windows::Win32::Foundation::{D2DERR_RECREATE_TARGET, S_OK};

    #[test]
    fn vtable_layout() {
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, parent), 0);
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, CreateBitmap), slot(4));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, CreateMesh), slot(14));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, DrawLine), slot(15));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, DrawText), slot(27));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, SetTransform), slot(30));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, PushLayer), slot(40));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, Clear), slot(47));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, BeginDraw), slot(48));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, EndDraw), slot(49));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, GetSize), slot(53));
        assert_eq!(offset_of!(ID2D1RenderTargetVtbl, IsSupported), slot(56));
        assert_eq!(size_of::<ID2D1RenderTargetVtbl>(), slot(57));
    }

    unsafe extern "system" fn draw_line(
        this: *mut ID2D1RenderTarget,
        p0: D2D1_POINT_2F,
        p1: D2D1_POINT_2F,
        brush: *mut ID2D1Brush,
        width: f32,
        style: *mut ID2D1StrokeStyle,
    ) {
        FakeObject::from_this(this).record(format!(
            "DrawLine({},{} {},{} {} {} {})",
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            ptr(brush),
            width,
            ptr(style)
        ));
    }

    unsafe extern "system" fn draw_rectangle(
        this: *mut ID2D1RenderTarget,
        rect: *const D2D1_RECT_F,
        brush: *mut ID2D1Brush,
        width: f32,
        style: *mut ID2D1StrokeStyle,
    ) {
        let rect = &*rect;
        FakeObject::from_this(this).record(format!(
            "DrawRectangle({},{} {},{} {} {} {})",
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
            ptr(brush),
            width,
            ptr(style)
        ));
    }

    unsafe extern "system" fn clear(this: *mut ID2D1RenderTarget, color: *const D2D1_COLOR_F) {
        FakeObject::from_this(this).record(format!("Clear({})", ptr(color)));
    }

    unsafe extern "system" fn end_draw(
        _this: *mut ID2D1RenderTarget,
        tag1: *mut D2D1_TAG,
        tag2: *mut D2D1_TAG,
    ) -> HRESULT {
        if tag1.is_null() && tag2.is_null() {
            D2DERR_RECREATE_TARGET
        } else {
            S_OK
        }
    }

    unsafe extern "system" fn get_size(
        _this: *mut ID2D1RenderTarget,
        result: *mut D2D1_SIZE_F,
    ) -> *mut D2D1_SIZE_F {
        *result = D2D1_SIZE_F {
            width: 640.0,
            height: 480.0,
        };
        result
    }

    unsafe extern "system" fn get_pixel_format(
        _this: *mut ID2D1RenderTarget,
        result: *mut D2D1_PIXEL_FORMAT,
    ) -> *mut D2D1_PIXEL_FORMAT {
        *result = D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        };
        result
    }

    fn fake() -> Box<FakeObject> {
        FakeObject::new(57)
            .with_slot(15, draw_line as *const ())
            .with_slot(16, draw_rectangle as *const ())
            .with_slot(47, clear as *const ())
            .with_slot(49, end_draw as *const ())
            .with_slot(50, get_pixel_format as *const ())
            .with_slot(53, get_size as *const ())
    }

    #[test]
    fn optional_parameters_default() {
        let object = fake();
        let rt = unsafe { object.get::<ID2D1RenderTarget>() };
        let brush = unsafe { object.get::<ID2D1Brush>() };
        let p0 = D2D1_POINT_2F { x: 1.0, y: 2.0 };
        let p1 = D2D1_POINT_2F { x: 3.0, y: 4.0 };
        unsafe {
            rt.draw_line(p0, p1, brush, None, None);
            rt.draw_line(p0, p1, brush, Some(2.5), None);
            rt.clear(None);
            rt.clear(Some(&D2D1_COLOR_F::default()));
        }
        assert_eq!(
            object.calls(),
            [
                "DrawLine(1,2 3,4 ptr 1 null)",
                "DrawLine(1,2 3,4 ptr 2.5 null)",
                "Clear(null)",
                "Clear(ptr)",
            ]
        );
    }

    #[test]
    fn draw_rectangle_defaults_to_hairline() {
        let object = fake();
        let rt = unsafe { object.get::<ID2D1RenderTarget>() };
        let brush = unsafe { object.get::<ID2D1Brush>() };
        let style = unsafe { object.get::<ID2D1StrokeStyle>() };
        let rect = D2D1_RECT_F {
            left: 0.0,
            top: 0.0,
            right: 10.0,
            bottom: 5.0,
        };
        unsafe {
            rt.draw_rectangle(&rect, brush, None, None);
            rt.draw_rectangle(&rect, brush, Some(3.0), Some(style));
        }
        assert_eq!(
            object.calls(),
            [
                "DrawRectangle(0,0 10,5 ptr 1 null)",
                "DrawRectangle(0,0 10,5 ptr 3 ptr)",
            ]
        );
    }

    #[test]
    fn struct_returns_use_hidden_pointer() {
        let object = fake();
        let rt = unsafe { object.get::<ID2D1RenderTarget>() };
        let size = unsafe { rt.size() };
        assert_eq!((size.width, size.height), (640.0, 480.0));
        let format = unsafe { rt.pixel_format() };
        assert_eq!(format.format, DXGI_FORMAT_B8G8R8A8_UNORM);
        assert_eq!(format.alphaMode, D2D1_ALPHA_MODE_PREMULTIPLIED);
    }

    #[test]
    fn end_draw_passes_status_through() {
        let object = fake();
        let rt = unsafe { object.get::<ID2D1RenderTarget>() };
        assert_eq!(
            unsafe { rt.end_draw() }.unwrap_err(),
            ErrorKind::RecreateTarget
        );
        let (mut t1, mut t2) = (0, 0);
        assert_eq!(unsafe { rt.EndDraw(&mut t1, &mut t2) }, S_OK);
    }
}
