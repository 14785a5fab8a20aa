//! Fake COM objects for exercising forwarders without the native runtime.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use windows::core::{GUID, HRESULT};
use windows::Win32::Foundation::{E_NOINTERFACE, E_POINTER, S_OK};

pub(crate) const fn slot(index: usize) -> usize {
    index * std::mem::size_of::<usize>()
}

/// A heap-pinned object whose first field is a vtable pointer, like any COM
/// object. Unset slots abort when called.
#[repr(C)]
pub(crate) struct FakeObject {
    vtbl: *const *const (),
    slots: Box<[*const ()]>,
    refs: Cell<u32>,
    accepted: Vec<GUID>,
    calls: RefCell<Vec<String>>,
}

impl FakeObject {
    pub(crate) fn new(slot_count: usize) -> Box<Self> {
        assert!(slot_count >= 3);
        let mut slots = vec![unexpected_slot as *const (); slot_count].into_boxed_slice();
        slots[0] = query_interface as *const ();
        slots[1] = add_ref as *const ();
        slots[2] = release as *const ();
        let vtbl = slots.as_ptr();
        Box::new(Self {
            vtbl,
            slots,
            refs: Cell::new(1),
            accepted: vec![],
            calls: RefCell::new(vec![]),
        })
    }

    pub(crate) fn with_slot(mut self: Box<Self>, index: usize, f: *const ()) -> Box<Self> {
        self.slots[index] = f;
        self
    }

    pub(crate) fn accepting(mut self: Box<Self>, iid: GUID) -> Box<Self> {
        self.accepted.push(iid);
        self
    }

    /// Views the object through an interface projection.
    pub(crate) unsafe fn get<T>(&self) -> &T {
        &*(self as *const Self as *const T)
    }

    pub(crate) fn as_ptr(&self) -> *mut c_void {
        self as *const Self as *mut c_void
    }

    pub(crate) fn refs(&self) -> u32 {
        self.refs.get()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) unsafe fn from_this<'a, T>(this: *mut T) -> &'a Self {
        &*(this as *const Self)
    }

    pub(crate) fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

unsafe extern "system" fn query_interface(
    this: *mut c_void,
    riid: *const GUID,
    out: *mut *mut c_void,
) -> HRESULT {
    if out.is_null() {
        return E_POINTER;
    }
    let object = FakeObject::from_this(this);
    if object.accepted.contains(&*riid) {
        object.refs.set(object.refs.get() + 1);
        *out = this;
        S_OK
    } else {
        *out = std::ptr::null_mut();
        E_NOINTERFACE
    }
}

unsafe extern "system" fn add_ref(this: *mut c_void) -> u32 {
    let object = FakeObject::from_this(this);
    object.refs.set(object.refs.get() + 1);
    object.refs.get()
}

unsafe extern "system" fn release(this: *mut c_void) -> u32 {
    let object = FakeObject::from_this(this);
    object.refs.set(object.refs.get() - 1);
    object.refs.get()
}

extern "system" fn unexpected_slot() {
    std::process::abort();
}

/// Renders a possibly-null pointer for call records.
pub(crate) fn ptr<T>(p: *const T) -> String {
    if p.is_null() {
        "null".to_string()
    } else {
        "ptr".to_string()
    }
}
