use crate::com_ptr::{opt_mut, wrap};
use crate::*;
use std::ptr::null_mut;

interface! {
    #[uuid(0x47dd575d_ac05_4cdd_8049_9b02cd16f44c)]
    interface ID2D1Device(ID2D1DeviceVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn CreateDeviceContext(
            options: D2D1_DEVICE_CONTEXT_OPTIONS,
            deviceContext: *mut *mut ID2D1DeviceContext,
        ) -> HRESULT,
        fn CreatePrintControl(
            wicFactory: *mut IWICImagingFactory,
            documentTarget: *mut IPrintDocumentPackageTarget,
            printControlProperties: *const D2D1_PRINT_CONTROL_PROPERTIES,
            printControl: *mut *mut ID2D1PrintControl,
        ) -> HRESULT,
        fn SetMaximumTextureMemory(maximumInBytes: u64) -> (),
        fn GetMaximumTextureMemory() -> u64,
        fn ClearResources(millisecondsSinceUse: u32) -> (),
    }
}

interface! {
    #[uuid(0xd21768e1_23a4_4823_a14b_7c3eba85d658)]
    interface ID2D1Device1(ID2D1Device1Vtbl): ID2D1Device(ID2D1DeviceVtbl) {
        fn GetRenderingPriority() -> D2D1_RENDERING_PRIORITY,
        fn SetRenderingPriority(renderingPriority: D2D1_RENDERING_PRIORITY) -> (),
        fn CreateDeviceContext(
            options: D2D1_DEVICE_CONTEXT_OPTIONS,
            deviceContext1: *mut *mut ID2D1DeviceContext1,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0xa44472e1_8dfb_4e60_8492_6e2861c9ca8b)]
    /// A rendering device bound to a DXGI device, creating
    /// `ID2D1DeviceContext2` contexts.
    interface ID2D1Device2(ID2D1Device2Vtbl): ID2D1Device1(ID2D1Device1Vtbl) {
        fn CreateDeviceContext(
            options: D2D1_DEVICE_CONTEXT_OPTIONS,
            deviceContext2: *mut *mut ID2D1DeviceContext2,
        ) -> HRESULT,
        fn FlushDeviceContexts(bitmap: *mut ID2D1Bitmap) -> (),
        fn GetDxgiDevice(dxgiDevice: *mut *mut IDXGIDevice) -> HRESULT,
    }
}

impl ID2D1Device {
    /// `ClearResources` with the default age of zero milliseconds, which
    /// discards every cached resource.
    #[inline]
    pub unsafe fn clear_resources(&self) {
        self.ClearResources(0);
    }
}

impl ID2D1Device2 {
    #[inline]
    pub unsafe fn create_device_context(
        &self,
        options: D2D1_DEVICE_CONTEXT_OPTIONS,
    ) -> Result<ComPtr<ID2D1DeviceContext2>> {
        let mut dc = null_mut();
        let hr = self.CreateDeviceContext(options, &mut dc);
        wrap(hr, dc)
    }

    /// Flushes every context that draws to `bitmap`, or every context of
    /// the device when `None`.
    #[inline]
    pub unsafe fn flush_device_contexts(&self, bitmap: Option<&ID2D1Bitmap>) {
        self.FlushDeviceContexts(opt_mut(bitmap));
    }

    #[inline]
    pub unsafe fn dxgi_device(&self) -> Result<ComPtr<IDXGIDevice>> {
        let mut device = null_mut();
        let hr = self.GetDxgiDevice(&mut device);
        wrap(hr, device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::mem::{offset_of, size_of};
    use windows::Win32::Foundation::{E_OUTOFMEMORY, E_POINTER, S_OK};

    #[test]
    fn vtable_layout() {
        assert_eq!(offset_of!(ID2D1DeviceVtbl, CreateDeviceContext), slot(4));
        assert_eq!(offset_of!(ID2D1DeviceVtbl, ClearResources), slot(8));
        assert_eq!(size_of::<ID2D1DeviceVtbl>(), slot(9));
        assert_eq!(offset_of!(ID2D1Device1Vtbl, GetRenderingPriority), slot(9));
        assert_eq!(offset_of!(ID2D1Device1Vtbl, CreateDeviceContext), slot(11));
        assert_eq!(size_of::<ID2D1Device1Vtbl>(), slot(12));
        assert_eq!(offset_of!(ID2D1Device2Vtbl, parent), 0);
        assert_eq!(offset_of!(ID2D1Device2Vtbl, CreateDeviceContext), slot(12));
        assert_eq!(offset_of!(ID2D1Device2Vtbl, FlushDeviceContexts), slot(13));
        assert_eq!(offset_of!(ID2D1Device2Vtbl, GetDxgiDevice), slot(14));
        assert_eq!(size_of::<ID2D1Device2Vtbl>(), slot(15));
    }

    unsafe extern "system" fn clear_resources(this: *mut ID2D1Device, ms: u32) {
        FakeObject::from_this(this).record(format!("ClearResources({ms})"));
    }

    unsafe extern "system" fn set_priority(this: *mut ID2D1Device1, p: D2D1_RENDERING_PRIORITY) {
        FakeObject::from_this(this).record(format!("SetRenderingPriority({})", p.0));
    }

    unsafe extern "system" fn create_context(
        this: *mut ID2D1Device2,
        options: D2D1_DEVICE_CONTEXT_OPTIONS,
        dc: *mut *mut ID2D1DeviceContext2,
    ) -> HRESULT {
        FakeObject::from_this(this).record(format!("CreateDeviceContext({})", options.0));
        if options == D2D1_DEVICE_CONTEXT_OPTIONS_NONE {
            *dc = this as *mut ID2D1DeviceContext2;
            S_OK
        } else {
            E_OUTOFMEMORY
        }
    }

    unsafe extern "system" fn flush(this: *mut ID2D1Device2, bitmap: *mut ID2D1Bitmap) {
        FakeObject::from_this(this).record(format!("FlushDeviceContexts({})", ptr(bitmap)));
    }

    unsafe extern "system" fn get_dxgi_device(
        this: *mut ID2D1Device2,
        dxgi_device: *mut *mut IDXGIDevice,
    ) -> HRESULT {
        FakeObject::from_this(this).record("GetDxgiDevice");
        (*this).AddRef();
        *dxgi_device = this as *mut IDXGIDevice;
        S_OK
    }

    unsafe extern "system" fn get_no_dxgi_device(
        _this: *mut ID2D1Device2,
        dxgi_device: *mut *mut IDXGIDevice,
    ) -> HRESULT {
        *dxgi_device = null_mut();
        S_OK
    }

    fn fake() -> Box<FakeObject> {
        FakeObject::new(15)
            .with_slot(8, clear_resources as *const ())
            .with_slot(10, set_priority as *const ())
            .with_slot(12, create_context as *const ())
            .with_slot(13, flush as *const ())
            .with_slot(14, get_dxgi_device as *const ())
    }

    #[test]
    fn forwards_through_inherited_slots() {
        let object = fake();
        let device = unsafe { object.get::<ID2D1Device2>() };
        unsafe {
            device.clear_resources();
            device.ClearResources(500);
            device.SetRenderingPriority(D2D1_RENDERING_PRIORITY_LOW);
            device.flush_device_contexts(None);
            device.flush_device_contexts(Some(object.get::<ID2D1Bitmap>()));
        }
        assert_eq!(
            object.calls(),
            [
                "ClearResources(0)",
                "ClearResources(500)",
                "SetRenderingPriority(1)",
                "FlushDeviceContexts(null)",
                "FlushDeviceContexts(ptr)",
            ]
        );
    }

    #[test]
    fn create_device_context_wraps_out_parameter() {
        let object = fake();
        let device = unsafe { object.get::<ID2D1Device2>() };
        let dc = unsafe { device.create_device_context(D2D1_DEVICE_CONTEXT_OPTIONS_NONE) }.unwrap();
        assert_eq!(dc.as_raw() as usize, object.as_ptr() as usize);
        std::mem::forget(dc);

        let err = unsafe {
            device.create_device_context(
                D2D1_DEVICE_CONTEXT_OPTIONS_ENABLE_MULTITHREADED_OPTIMIZATIONS,
            )
        }
        .unwrap_err();
        assert_eq!(err, ErrorKind::OutOfMemory);
    }

    #[test]
    fn dxgi_device_is_owned() {
        let object = fake();
        let device = unsafe { object.get::<ID2D1Device2>() };
        let dxgi = unsafe { device.dxgi_device() }.unwrap();
        assert_eq!(dxgi.as_raw() as usize, object.as_ptr() as usize);
        assert_eq!(object.refs(), 2);
        drop(dxgi);
        assert_eq!(object.refs(), 1);
        assert_eq!(object.calls(), ["GetDxgiDevice"]);

        let object = FakeObject::new(15).with_slot(14, get_no_dxgi_device as *const ());
        let device = unsafe { object.get::<ID2D1Device2>() };
        assert_eq!(
            unsafe { device.dxgi_device() }.unwrap_err(),
            Error::Native(E_POINTER)
        );
    }
}
