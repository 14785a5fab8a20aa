use crate::*;
use std::ptr::{null, null_mut, NonNull};
use windows::Win32::Foundation::E_POINTER;

/// An owned reference to a COM object.
///
/// The projections themselves never touch reference counts. `ComPtr` adopts
/// exactly one reference and gives it back in `Drop`.
pub struct ComPtr<T: ComObject>(NonNull<T>);

impl<T: ComObject> ComPtr<T> {
    /// Adopts a reference the caller already owns. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a live object of interface `T`.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| {
            log::trace!("adopt {}: {:p}", std::any::type_name::<T>(), ptr);
            Self(ptr)
        })
    }

    #[inline]
    pub fn as_raw(&self) -> *mut T {
        self.0.as_ptr()
    }

    /// Releases ownership without calling `Release`.
    #[inline]
    pub fn into_raw(self) -> *mut T {
        let ptr = self.as_raw();
        std::mem::forget(self);
        ptr
    }

    /// Queries for another interface of the same object.
    pub fn cast<U: Interface>(&self) -> Result<ComPtr<U>> {
        let mut ptr = null_mut();
        unsafe {
            self.as_unknown().QueryInterface(&U::IID, &mut ptr).check()?;
            ComPtr::from_raw(ptr as *mut U).ok_or(Error::Native(E_POINTER))
        }
    }
}

impl<T: ComObject> std::ops::Deref for ComPtr<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        unsafe { self.0.as_ref() }
    }
}

impl<T: ComObject> Clone for ComPtr<T> {
    #[inline]
    fn clone(&self) -> Self {
        unsafe {
            self.as_unknown().AddRef();
        }
        Self(self.0)
    }
}

impl<T: ComObject> Drop for ComPtr<T> {
    fn drop(&mut self) {
        let remaining = unsafe { self.as_unknown().Release() };
        log::trace!(
            "release {}: {:p}, {} references remain",
            std::any::type_name::<T>(),
            self.0,
            remaining
        );
    }
}

impl<T: ComObject> PartialEq for ComPtr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ComObject> Eq for ComPtr<T> {}

impl<T: ComObject> std::fmt::Debug for ComPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ComPtr<{}>({:p})", std::any::type_name::<T>(), self.0)
    }
}

/// Wraps the out-parameter of a creating call, passing failures through.
pub(crate) unsafe fn wrap<T: ComObject>(hr: HRESULT, ptr: *mut T) -> Result<ComPtr<T>> {
    hr.check()?;
    ComPtr::from_raw(ptr).ok_or(Error::Native(E_POINTER))
}

/// An optional `const` argument; `None` is null.
#[inline]
pub(crate) fn opt<T>(v: Option<&T>) -> *const T {
    v.map_or(null(), |v| v as *const T)
}

/// An optional interface argument; `None` is null.
#[inline]
pub(crate) fn opt_mut<T>(v: Option<&T>) -> *mut T {
    v.map_or(null_mut(), |v| v as *const T as *mut T)
}

/// An interface argument the native signature takes as `*mut`.
#[inline]
pub(crate) fn raw<T>(v: &T) -> *mut T {
    v as *const T as *mut T
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use windows::Win32::Foundation::{E_FAIL, S_OK};

    #[test]
    fn clone_and_drop_balance() {
        let object = FakeObject::new(4);
        let p = unsafe { ComPtr::from_raw(object.as_ptr() as *mut ID2D1Resource) }.unwrap();
        let q = p.clone();
        assert_eq!(object.refs(), 2);
        assert_eq!(p, q);
        drop(p);
        assert_eq!(object.refs(), 1);
        let raw = q.into_raw();
        assert_eq!(object.refs(), 1);
        drop(unsafe { ComPtr::from_raw(raw) });
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn null_is_not_adopted() {
        assert!(unsafe { ComPtr::<IUnknown>::from_raw(null_mut()) }.is_none());
        assert_eq!(
            unsafe { wrap::<IUnknown>(S_OK, null_mut()) }.unwrap_err(),
            ErrorKind::Pointer
        );
    }

    #[test]
    fn failed_status_is_passed_through() {
        let object = FakeObject::new(3);
        let r = unsafe { wrap(E_FAIL, object.as_ptr() as *mut IUnknown) };
        assert_eq!(r.unwrap_err(), Error::Native(E_FAIL));
        assert_eq!(object.refs(), 1);
    }

    #[test]
    fn cast_queries_iid() {
        let object = FakeObject::new(4).accepting(ID2D1Resource::IID);
        let unknown = unsafe { ComPtr::from_raw(object.as_ptr() as *mut IUnknown) }.unwrap();
        let resource = unknown.cast::<ID2D1Resource>().unwrap();
        assert_eq!(object.refs(), 2);
        assert_eq!(
            unknown.cast::<ID2D1Factory>().unwrap_err(),
            ErrorKind::NoInterface
        );
        drop(resource);
        drop(unknown);
        assert_eq!(object.refs(), 0);
    }

    #[test]
    fn argument_pointers() {
        let color = D2D1_COLOR_F {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        };
        assert!(opt::<D2D1_COLOR_F>(None).is_null());
        assert_eq!(opt(Some(&color)), &color as *const D2D1_COLOR_F);
        assert!(opt_mut::<ID2D1Resource>(None).is_null());

        let object = FakeObject::new(4);
        let resource = unsafe { object.get::<ID2D1Resource>() };
        assert_eq!(raw(resource), object.as_ptr() as *mut ID2D1Resource);
        assert_eq!(opt_mut(Some(resource)), raw(resource));
        assert_eq!(object.refs(), 1);
    }
}
