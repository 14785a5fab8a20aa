use crate::com_ptr::wrap;
use crate::*;
use std::ptr::null_mut;
use windows::Win32::Foundation::ERROR_INSUFFICIENT_BUFFER;

interface! {
    #[uuid(0x06152247_6f50_465a_9245_118bfd3b6007)]
    interface ID2D1Factory(ID2D1FactoryVtbl): IUnknown(IUnknownVtbl) {
        fn ReloadSystemMetrics() -> HRESULT,
        fn GetDesktopDpi(dpiX: *mut f32, dpiY: *mut f32) -> (),
        fn CreateRectangleGeometry(
            rectangle: *const D2D1_RECT_F,
            rectangleGeometry: *mut *mut ID2D1RectangleGeometry,
        ) -> HRESULT,
        fn CreateRoundedRectangleGeometry(
            roundedRectangle: *const D2D1_ROUNDED_RECT,
            roundedRectangleGeometry: *mut *mut ID2D1RoundedRectangleGeometry,
        ) -> HRESULT,
        fn CreateEllipseGeometry(
            ellipse: *const D2D1_ELLIPSE,
            ellipseGeometry: *mut *mut ID2D1EllipseGeometry,
        ) -> HRESULT,
        fn CreateGeometryGroup(
            fillMode: D2D1_FILL_MODE,
            geometries: *const *mut ID2D1Geometry,
            geometriesCount: u32,
            geometryGroup: *mut *mut ID2D1GeometryGroup,
        ) -> HRESULT,
        fn CreateTransformedGeometry(
            sourceGeometry: *mut ID2D1Geometry,
            transform: *const D2D1_MATRIX_3X2_F,
            transformedGeometry: *mut *mut ID2D1TransformedGeometry,
        ) -> HRESULT,
        fn CreatePathGeometry(pathGeometry: *mut *mut ID2D1PathGeometry) -> HRESULT,
        fn CreateStrokeStyle(
            strokeStyleProperties: *const D2D1_STROKE_STYLE_PROPERTIES,
            dashes: *const f32,
            dashesCount: u32,
            strokeStyle: *mut *mut ID2D1StrokeStyle,
        ) -> HRESULT,
        fn CreateDrawingStateBlock(
            drawingStateDescription: *const D2D1_DRAWING_STATE_DESCRIPTION,
            textRenderingParams: *mut IDWriteRenderingParams,
            drawingStateBlock: *mut *mut ID2D1DrawingStateBlock,
        ) -> HRESULT,
        fn CreateWicBitmapRenderTarget(
            target: *mut IWICBitmap,
            renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES,
            renderTarget: *mut *mut ID2D1RenderTarget,
        ) -> HRESULT,
        fn CreateHwndRenderTarget(
            renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES,
            hwndRenderTargetProperties: *const D2D1_HWND_RENDER_TARGET_PROPERTIES,
            hwndRenderTarget: *mut *mut ID2D1HwndRenderTarget,
        ) -> HRESULT,
        fn CreateDxgiSurfaceRenderTarget(
            dxgiSurface: *mut IDXGISurface,
            renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES,
            renderTarget: *mut *mut ID2D1RenderTarget,
        ) -> HRESULT,
        fn CreateDCRenderTarget(
            renderTargetProperties: *const D2D1_RENDER_TARGET_PROPERTIES,
            dcRenderTarget: *mut *mut ID2D1DCRenderTarget,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0xbb12d362_daee_4b9a_aa1d_14ba401cfa1f)]
    interface ID2D1Factory1(ID2D1Factory1Vtbl): ID2D1Factory(ID2D1FactoryVtbl) {
        fn CreateDevice(dxgiDevice: *mut IDXGIDevice, d2dDevice: *mut *mut ID2D1Device) -> HRESULT,
        fn CreateStrokeStyle(
            strokeStyleProperties: *const D2D1_STROKE_STYLE_PROPERTIES1,
            dashes: *const f32,
            dashesCount: u32,
            strokeStyle: *mut *mut ID2D1StrokeStyle1,
        ) -> HRESULT,
        fn CreatePathGeometry(pathGeometry: *mut *mut ID2D1PathGeometry1) -> HRESULT,
        fn CreateDrawingStateBlock(
            drawingStateDescription: *const D2D1_DRAWING_STATE_DESCRIPTION1,
            textRenderingParams: *mut IDWriteRenderingParams,
            drawingStateBlock: *mut *mut ID2D1DrawingStateBlock1,
        ) -> HRESULT,
        fn CreateGdiMetafile(
            metafileStream: *mut IStream,
            metafile: *mut *mut ID2D1GdiMetafile,
        ) -> HRESULT,
        fn RegisterEffectFromStream(
            classId: REFCLSID,
            propertyXml: *mut IStream,
            bindings: *const D2D1_PROPERTY_BINDING,
            bindingsCount: u32,
            effectFactory: PD2D1_EFFECT_FACTORY,
        ) -> HRESULT,
        fn RegisterEffectFromString(
            classId: REFCLSID,
            propertyXml: PCWSTR,
            bindings: *const D2D1_PROPERTY_BINDING,
            bindingsCount: u32,
            effectFactory: PD2D1_EFFECT_FACTORY,
        ) -> HRESULT,
        fn UnregisterEffect(classId: REFCLSID) -> HRESULT,
        fn GetRegisteredEffects(
            effects: *mut GUID,
            effectsCount: u32,
            effectsReturned: *mut u32,
            effectsRegistered: *mut u32,
        ) -> HRESULT,
        fn GetEffectProperties(
            effectId: REFCLSID,
            properties: *mut *mut ID2D1Properties,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0x94f81a73_9212_4376_9c58_b16a3a0d3992)]
    interface ID2D1Factory2(ID2D1Factory2Vtbl): ID2D1Factory1(ID2D1Factory1Vtbl) {
        fn CreateDevice(dxgiDevice: *mut IDXGIDevice, d2dDevice1: *mut *mut ID2D1Device1) -> HRESULT,
    }
}

interface! {
    #[uuid(0x0869759f_4f00_413f_b03e_2bda45404d0f)]
    /// Factory that creates `ID2D1Device2` devices.
    interface ID2D1Factory3(ID2D1Factory3Vtbl): ID2D1Factory2(ID2D1Factory2Vtbl) {
        fn CreateDevice(dxgiDevice: *mut IDXGIDevice, d2dDevice2: *mut *mut ID2D1Device2) -> HRESULT,
    }
}

impl ID2D1Factory {
    /// `GetDesktopDpi` as a pair.
    #[inline]
    pub unsafe fn desktop_dpi(&self) -> (f32, f32) {
        let mut dpi = (0.0, 0.0);
        self.GetDesktopDpi(&mut dpi.0, &mut dpi.1);
        dpi
    }
}

impl ID2D1Factory1 {
    /// Lists registered effect class ids, growing the buffer until it holds
    /// all of them.
    pub unsafe fn registered_effects(&self) -> Result<Vec<GUID>> {
        let mut effects = Vec::new();
        loop {
            let mut returned = 0;
            let mut registered = 0;
            let buffer = if effects.is_empty() {
                null_mut()
            } else {
                effects.as_mut_ptr()
            };
            let hr = self.GetRegisteredEffects(
                buffer,
                effects.len() as u32,
                &mut returned,
                &mut registered,
            );
            if hr == ERROR_INSUFFICIENT_BUFFER.to_hresult() && registered as usize > effects.len() {
                effects.resize(registered as usize, GUID::zeroed());
                continue;
            }
            hr.check()?;
            effects.truncate(returned as usize);
            return Ok(effects);
        }
    }
}

impl ID2D1Factory3 {
    #[inline]
    pub unsafe fn create_device(&self, dxgi_device: &IDXGIDevice) -> Result<ComPtr<ID2D1Device2>> {
        let mut device = null_mut();
        let hr = self.CreateDevice(dxgi_device as *const _ as *mut _, &mut device);
        wrap(hr, device)
    }
}

/// Creates a factory through `D2D1CreateFactory`.
///
/// Links against `d2d1.dll`, so it only exists on Windows.
#[cfg(windows)]
pub fn create_factory<T: Interface>(
    factory_type: D2D1_FACTORY_TYPE,
    options: Option<&D2D1_FACTORY_OPTIONS>,
) -> Result<ComPtr<T>> {
    use std::ffi::c_void;

    #[link(name = "d2d1")]
    extern "system" {
        fn D2D1CreateFactory(
            factoryType: D2D1_FACTORY_TYPE,
            riid: REFIID,
            pFactoryOptions: *const D2D1_FACTORY_OPTIONS,
            ppIFactory: *mut *mut c_void,
        ) -> HRESULT;
    }
    let mut factory = null_mut();
    unsafe {
        let hr = D2D1CreateFactory(
            factory_type,
            &T::IID,
            options.map_or(std::ptr::null(), |o| o as *const _),
            &mut factory,
        );
        wrap(hr, factory as *mut T)
    }
}

native_enum! {
    D2D1_FACTORY_TYPE: u32 {
        D2D1_FACTORY_TYPE_SINGLE_THREADED = 0,
        D2D1_FACTORY_TYPE_MULTI_THREADED = 1,
    }
}

native_enum! {
    D2D1_DEBUG_LEVEL: u32 {
        D2D1_DEBUG_LEVEL_NONE = 0,
        D2D1_DEBUG_LEVEL_ERROR = 1,
        D2D1_DEBUG_LEVEL_WARNING = 2,
        D2D1_DEBUG_LEVEL_INFORMATION = 3,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(C)]
pub struct D2D1_FACTORY_OPTIONS {
    pub debugLevel: D2D1_DEBUG_LEVEL,
}
