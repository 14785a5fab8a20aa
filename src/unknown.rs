use std::ffi::c_void;
use windows::core::{GUID, HRESULT};

/// Marks a `#[repr(C)]` struct whose only field is a pointer to a vtable
/// starting with the three `IUnknown` slots.
///
/// # Safety
///
/// Implementors must have exactly that layout. Every struct produced by the
/// projection macros does.
pub unsafe trait ComObject: Sized {
    #[inline]
    fn as_unknown(&self) -> &IUnknown {
        unsafe { &*(self as *const Self as *const IUnknown) }
    }
}

/// An interface with a known interface identifier.
pub trait Interface: ComObject {
    const IID: GUID;
}

#[allow(non_snake_case)]
#[repr(C)]
pub struct IUnknownVtbl {
    pub QueryInterface: unsafe extern "system" fn(
        This: *mut IUnknown,
        riid: *const GUID,
        ppvObject: *mut *mut c_void,
    ) -> HRESULT,
    pub AddRef: unsafe extern "system" fn(This: *mut IUnknown) -> u32,
    pub Release: unsafe extern "system" fn(This: *mut IUnknown) -> u32,
}

#[allow(non_snake_case)]
#[repr(C)]
pub struct IUnknown {
    pub lpVtbl: *const IUnknownVtbl,
}

#[allow(non_snake_case)]
impl IUnknown {
    #[inline]
    pub unsafe fn QueryInterface(&self, riid: *const GUID, ppvObject: *mut *mut c_void) -> HRESULT {
        ((*self.lpVtbl).QueryInterface)(self as *const Self as *mut Self, riid, ppvObject)
    }

    #[inline]
    pub unsafe fn AddRef(&self) -> u32 {
        ((*self.lpVtbl).AddRef)(self as *const Self as *mut Self)
    }

    #[inline]
    pub unsafe fn Release(&self) -> u32 {
        ((*self.lpVtbl).Release)(self as *const Self as *mut Self)
    }
}

impl Interface for IUnknown {
    const IID: GUID = GUID::from_u128(0x00000000_0000_0000_c000_000000000046);
}

unsafe impl ComObject for IUnknown {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn vtable_layout() {
        assert_eq!(offset_of!(IUnknownVtbl, QueryInterface), slot(0));
        assert_eq!(offset_of!(IUnknownVtbl, AddRef), slot(1));
        assert_eq!(offset_of!(IUnknownVtbl, Release), slot(2));
        assert_eq!(size_of::<IUnknownVtbl>(), slot(3));
        assert_eq!(size_of::<IUnknown>(), size_of::<usize>());
    }

    #[test]
    fn reference_counting_forwards() {
        let object = FakeObject::new(3);
        let unknown = unsafe { object.get::<IUnknown>() };
        unsafe {
            assert_eq!(unknown.AddRef(), 2);
            assert_eq!(unknown.AddRef(), 3);
            assert_eq!(unknown.Release(), 2);
        }
        assert_eq!(object.refs(), 2);
    }

    #[test]
    fn query_interface_forwards_iid() {
        let object = FakeObject::new(3).accepting(IUnknown::IID);
        let unknown = unsafe { object.get::<IUnknown>() };
        let mut out = std::ptr::null_mut();
        let hr = unsafe { unknown.QueryInterface(&IUnknown::IID, &mut out) };
        assert!(hr.is_ok());
        assert_eq!(out, object.as_ptr());
        assert_eq!(object.refs(), 2);

        let other = GUID::from_u128(0x12345678_1234_1234_1234_123456789abc);
        let hr = unsafe { unknown.QueryInterface(&other, &mut out) };
        assert_eq!(hr, windows::Win32::Foundation::E_NOINTERFACE);
        assert!(out.is_null());
    }
}
