//! Transparent carriers for the scalar and handle types of `minwindef.h`.
//!
//! Every type here has the size, alignment and bit layout of the native type
//! it stands in for, so it can appear directly in FFI signatures.

#![allow(non_camel_case_types, non_snake_case)]

use crate::error::Error;
use raw_window_handle::{RawWindowHandle, Win32WindowHandle};
use std::any::Any;
use std::cmp::Ordering;
use std::ffi::c_void;

/// Ordering against an arbitrary value, failing when it is not of the same
/// wrapper type.
fn compare_any<T: Ord + 'static>(
    this: &T,
    other: Option<&dyn Any>,
    expected: &'static str,
) -> crate::Result<Ordering> {
    match other {
        None => Ok(Ordering::Greater),
        Some(other) => other
            .downcast_ref::<T>()
            .map(|other| this.cmp(other))
            .ok_or(Error::InvalidType { expected }),
    }
}

fn equals_any<T: PartialEq + 'static>(this: &T, other: Option<&dyn Any>) -> bool {
    other
        .and_then(|other| other.downcast_ref::<T>())
        .map_or(false, |other| this == other)
}

macro_rules! dynamic_comparison {
    ($name:ident) => {
        impl $name {
            /// Compares with a value of unknown type. `None` sorts first.
            #[inline]
            pub fn compare_to(&self, other: Option<&dyn Any>) -> crate::Result<Ordering> {
                compare_any(self, other, stringify!($name))
            }

            #[inline]
            pub fn equals(&self, other: Option<&dyn Any>) -> bool {
                equals_any(self, other)
            }
        }
    };
}

macro_rules! binary_op {
    ($name:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl ::std::ops::$trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let $a = self.0;
                let $b = rhs.0;
                Self($body)
            }
        }

        impl ::std::ops::$assign_trait for $name {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = ::std::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! integer_type {
    (
        $(#[$attr:meta])*
        $name:ident($repr:ty) try_from { $($from:ty),* }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            pub const MIN: Self = Self(<$repr>::MIN);
            pub const MAX: Self = Self(<$repr>::MAX);

            #[inline]
            pub const fn value(self) -> $repr {
                self.0
            }

            #[inline]
            pub const fn increment(self) -> Self {
                Self(self.0.wrapping_add(1))
            }

            #[inline]
            pub const fn decrement(self) -> Self {
                Self(self.0.wrapping_sub(1))
            }
        }

        dynamic_comparison!($name);

        impl From<$repr> for $name {
            #[inline]
            fn from(src: $repr) -> Self {
                Self(src)
            }
        }

        impl From<$name> for $repr {
            #[inline]
            fn from(src: $name) -> Self {
                src.0
            }
        }

        $(
            impl TryFrom<$from> for $name {
                type Error = Error;

                #[inline]
                fn try_from(src: $from) -> crate::Result<Self> {
                    <$repr>::try_from(src).map(Self).map_err(|_| Error::Conversion {
                        target: stringify!($name),
                    })
                }
            }
        )*

        impl PartialEq<$repr> for $name {
            #[inline]
            fn eq(&self, rhs: &$repr) -> bool {
                self.0 == *rhs
            }
        }

        impl PartialOrd<$repr> for $name {
            #[inline]
            fn partial_cmp(&self, rhs: &$repr) -> Option<Ordering> {
                self.0.partial_cmp(rhs)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::UpperHex::fmt(&self.0, f)
            }
        }

        binary_op!($name, Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
        binary_op!($name, Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
        binary_op!($name, Mul, mul, MulAssign, mul_assign, |a, b| a.wrapping_mul(b));
        binary_op!($name, Div, div, DivAssign, div_assign, |a, b| a / b);
        binary_op!($name, Rem, rem, RemAssign, rem_assign, |a, b| a % b);
        binary_op!($name, BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
        binary_op!($name, BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
        binary_op!($name, BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);

        impl ::std::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }

        impl ::std::ops::Shl<u32> for $name {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: u32) -> Self {
                Self(self.0.wrapping_shl(rhs))
            }
        }

        impl ::std::ops::Shr<u32> for $name {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: u32) -> Self {
                Self(self.0.wrapping_shr(rhs))
            }
        }
    };
}

macro_rules! handle_type {
    (
        $(#[$attr:meta])*
        $name:ident($repr:ty)
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            pub const NULL: Self = Self(::std::ptr::null_mut());

            #[inline]
            pub fn is_null(self) -> bool {
                self.0.is_null()
            }
        }

        dynamic_comparison!($name);

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::NULL
            }
        }

        impl From<$repr> for $name {
            #[inline]
            fn from(src: $repr) -> Self {
                Self(src)
            }
        }

        impl From<$name> for $repr {
            #[inline]
            fn from(src: $name) -> Self {
                src.0
            }
        }

        impl From<isize> for $name {
            #[inline]
            fn from(src: isize) -> Self {
                Self(src as $repr)
            }
        }

        impl From<$name> for isize {
            #[inline]
            fn from(src: $name) -> Self {
                src.0 as isize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write_address(f, self.0 as usize)
            }
        }
    };
}

/// Pointer-sized values print as zero-padded upper-case hex.
fn write_address(f: &mut std::fmt::Formatter, address: usize) -> std::fmt::Result {
    write!(
        f,
        "0x{:0width$X}",
        address,
        width = std::mem::size_of::<usize>() * 2
    )
}

integer_type! {
    /// An atom table entry.
    ATOM(u16) try_from { u8, u32, u64, usize, i8, i16, i32, i64, isize }
}

integer_type! {
    /// Win32 boolean. Anything but zero is true.
    BOOL(i32) try_from { u8, u16, u32, u64, usize, i8, i16, i64, isize }
}

integer_type! {
    WORD(u16) try_from { u8, u32, u64, usize, i8, i16, i32, i64, isize }
}

integer_type! {
    UCHAR(u8) try_from { u16, u32, u64, usize, i8, i16, i32, i64, isize }
}

integer_type! {
    UINT(u32) try_from { u8, u16, u64, usize, i8, i16, i32, i64, isize }
}

integer_type! {
    /// Message parameter; also carries pointers and handles.
    WPARAM(usize) try_from { u8, u16, u32, u64, i8, i16, i32, i64, isize }
}

integer_type! {
    /// Message parameter; also carries pointers and handles.
    LPARAM(isize) try_from { u8, u16, u32, u64, usize, i8, i16, i32, i64 }
}

integer_type! {
    /// Result of message processing.
    LRESULT(isize) try_from { u8, u16, u32, u64, usize, i8, i16, i32, i64 }
}

handle_type! {
    /// Base address of a loaded module.
    HMODULE(*mut c_void)
}

handle_type! {
    HWND(*mut c_void)
}

pub type HINSTANCE = HMODULE;

pub const FALSE: BOOL = BOOL(0);
pub const TRUE: BOOL = BOOL(1);

impl BOOL {
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for BOOL {
    #[inline]
    fn from(src: bool) -> Self {
        if src {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<BOOL> for bool {
    #[inline]
    fn from(src: BOOL) -> Self {
        src.as_bool()
    }
}

impl PartialEq<bool> for BOOL {
    #[inline]
    fn eq(&self, rhs: &bool) -> bool {
        self.as_bool() == *rhs
    }
}

macro_rules! pointer_conversions {
    ($($name:ident($repr:ty)),*) => {
        $(
            impl From<*mut c_void> for $name {
                #[inline]
                fn from(src: *mut c_void) -> Self {
                    Self(src as $repr)
                }
            }

            impl From<*const c_void> for $name {
                #[inline]
                fn from(src: *const c_void) -> Self {
                    Self(src as $repr)
                }
            }

            impl From<$name> for *mut c_void {
                #[inline]
                fn from(src: $name) -> Self {
                    src.0 as *mut c_void
                }
            }

            impl From<$name> for *const c_void {
                #[inline]
                fn from(src: $name) -> Self {
                    src.0 as *const c_void
                }
            }
        )*
    };
}

pointer_conversions!(WPARAM(usize), LPARAM(isize), LRESULT(isize));

impl From<WPARAM> for LPARAM {
    #[inline]
    fn from(src: WPARAM) -> Self {
        Self(src.0 as isize)
    }
}

impl From<LRESULT> for LPARAM {
    #[inline]
    fn from(src: LRESULT) -> Self {
        Self(src.0)
    }
}

impl From<LPARAM> for LRESULT {
    #[inline]
    fn from(src: LPARAM) -> Self {
        Self(src.0)
    }
}

/// Pointer to read-only memory of unspecified type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct LPCVOID(pub *const c_void);

impl LPCVOID {
    pub const NULL: Self = Self(std::ptr::null());

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

dynamic_comparison!(LPCVOID);

impl Default for LPCVOID {
    #[inline]
    fn default() -> Self {
        Self::NULL
    }
}

impl From<*const c_void> for LPCVOID {
    #[inline]
    fn from(src: *const c_void) -> Self {
        Self(src)
    }
}

impl From<*mut c_void> for LPCVOID {
    #[inline]
    fn from(src: *mut c_void) -> Self {
        Self(src)
    }
}

impl From<LPCVOID> for *const c_void {
    #[inline]
    fn from(src: LPCVOID) -> Self {
        src.0
    }
}

impl<T> From<&T> for LPCVOID {
    #[inline]
    fn from(src: &T) -> Self {
        Self(src as *const T as *const c_void)
    }
}

impl std::fmt::Debug for LPCVOID {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "LPCVOID({})", self)
    }
}

impl std::fmt::Display for LPCVOID {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_address(f, self.0 as usize)
    }
}

impl From<&Win32WindowHandle> for HWND {
    #[inline]
    fn from(src: &Win32WindowHandle) -> Self {
        Self(src.hwnd)
    }
}

impl From<&Win32WindowHandle> for HMODULE {
    #[inline]
    fn from(src: &Win32WindowHandle) -> Self {
        Self(src.hinstance)
    }
}

impl TryFrom<RawWindowHandle> for HWND {
    type Error = Error;

    fn try_from(src: RawWindowHandle) -> crate::Result<Self> {
        match src {
            RawWindowHandle::Win32(handle) => Ok(Self::from(&handle)),
            _ => Err(Error::InvalidType {
                expected: "Win32WindowHandle",
            }),
        }
    }
}

#[inline]
pub const fn MAKEWORD(low: u8, high: u8) -> WORD {
    WORD(low as u16 | (high as u16) << 8)
}

#[inline]
pub const fn MAKELONG(low: WORD, high: WORD) -> i32 {
    (low.0 as u32 | (high.0 as u32) << 16) as i32
}

#[inline]
pub const fn LOWORD(value: usize) -> WORD {
    WORD((value & 0xffff) as u16)
}

#[inline]
pub const fn HIWORD(value: usize) -> WORD {
    WORD(((value >> 16) & 0xffff) as u16)
}

#[inline]
pub const fn LOBYTE(value: usize) -> u8 {
    (value & 0xff) as u8
}

#[inline]
pub const fn HIBYTE(value: usize) -> u8 {
    ((value >> 8) & 0xff) as u8
}

#[inline]
pub const fn MAKEWPARAM(low: WORD, high: WORD) -> WPARAM {
    WPARAM(MAKELONG(low, high) as u32 as usize)
}

#[inline]
pub const fn MAKELPARAM(low: WORD, high: WORD) -> LPARAM {
    LPARAM(MAKELONG(low, high) as u32 as isize)
}

#[inline]
pub const fn MAKELRESULT(low: WORD, high: WORD) -> LRESULT {
    LRESULT(MAKELONG(low, high) as u32 as isize)
}

/// Signed x coordinate packed in the low word, as mouse messages carry it.
#[inline]
pub const fn GET_X_LPARAM(lp: LPARAM) -> i32 {
    LOWORD(lp.0 as usize).0 as i16 as i32
}

#[inline]
pub const fn GET_Y_LPARAM(lp: LPARAM) -> i32 {
    HIWORD(lp.0 as usize).0 as i16 as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::mem::{align_of, size_of};

    #[test]
    fn layout_matches_native() {
        assert_eq!(size_of::<ATOM>(), 2);
        assert_eq!(size_of::<BOOL>(), 4);
        assert_eq!(size_of::<WORD>(), 2);
        assert_eq!(size_of::<UCHAR>(), 1);
        assert_eq!(size_of::<UINT>(), 4);
        assert_eq!(size_of::<WPARAM>(), size_of::<usize>());
        assert_eq!(size_of::<LPARAM>(), size_of::<isize>());
        assert_eq!(size_of::<LRESULT>(), size_of::<isize>());
        assert_eq!(size_of::<HMODULE>(), size_of::<*mut c_void>());
        assert_eq!(size_of::<LPCVOID>(), size_of::<*const c_void>());
        assert_eq!(align_of::<ATOM>(), align_of::<u16>());
        assert_eq!(align_of::<BOOL>(), align_of::<i32>());
        assert_eq!(align_of::<HMODULE>(), align_of::<*mut c_void>());
    }

    #[test]
    fn round_trips() {
        for v in [0u16, 1, 0x7fff, 0x8000, u16::MAX] {
            assert_eq!(u16::from(WORD::from(v)), v);
            assert_eq!(u16::from(ATOM::from(v)), v);
        }
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::from(BOOL::from(v)), v);
        }
        for v in [0u8, 0x7f, u8::MAX] {
            assert_eq!(u8::from(UCHAR::from(v)), v);
        }
        for v in [0u32, 42, u32::MAX] {
            assert_eq!(u32::from(UINT::from(v)), v);
        }
        for v in [0usize, 1, usize::MAX] {
            assert_eq!(usize::from(WPARAM::from(v)), v);
        }
        for v in [isize::MIN, -1, 0, isize::MAX] {
            assert_eq!(isize::from(LPARAM::from(v)), v);
            assert_eq!(isize::from(LRESULT::from(v)), v);
        }
        let p = 0x1000 as *mut c_void;
        assert_eq!(<*mut c_void>::from(HMODULE::from(p)), p);
        assert_eq!(<*mut c_void>::from(WPARAM::from(p)), p);
        assert_eq!(<*mut c_void>::from(LPARAM::from(p)), p);
        assert_eq!(<*const c_void>::from(LPCVOID::from(p)), p as *const c_void);
        assert_eq!(isize::from(HMODULE::from(-8isize)), -8);
    }

    #[test]
    fn narrowing_conversions() {
        assert_eq!(WORD::try_from(0xffffu32), Ok(WORD(0xffff)));
        assert_eq!(
            WORD::try_from(0x10000u32),
            Err(Error::Conversion { target: "WORD" })
        );
        assert!(UCHAR::try_from(-1i32).is_err());
        assert_eq!(UINT::try_from(7i64), Ok(UINT(7)));
        assert!(ATOM::try_from(-1i16).is_err());
        assert_eq!(LPARAM::try_from(usize::MAX).is_err(), true);
    }

    #[test]
    fn comparisons_follow_underlying_value() {
        let values = [0u16, 1, 2, 0x8000, u16::MAX];
        for a in values {
            for b in values {
                assert_eq!(WORD(a).cmp(&WORD(b)), a.cmp(&b));
                assert_eq!(ATOM(a) < ATOM(b), a < b);
                assert_eq!(WORD(a) == WORD(b), a == b);
            }
        }
        let signed = [isize::MIN, -1, 0, 1, isize::MAX];
        for a in signed {
            for b in signed {
                assert_eq!(LRESULT(a).cmp(&LRESULT(b)), a.cmp(&b));
            }
        }
        assert!(LPCVOID(0x10 as _) < LPCVOID(0x20 as _));
        assert!(WORD(3) > 2u16);
    }

    #[test]
    fn dynamic_comparison() {
        let a = ATOM(5);
        assert_eq!(a.compare_to(Some(&ATOM(7))), Ok(Ordering::Less));
        assert_eq!(a.compare_to(Some(&ATOM(5))), Ok(Ordering::Equal));
        assert_eq!(a.compare_to(None), Ok(Ordering::Greater));
        assert_eq!(
            a.compare_to(Some(&WORD(5))),
            Err(Error::InvalidType { expected: "ATOM" })
        );
        assert_eq!(
            a.compare_to(Some(&5u16)),
            Err(Error::InvalidType { expected: "ATOM" })
        );
        assert!(a.equals(Some(&ATOM(5))));
        assert!(!a.equals(Some(&WORD(5))));
        assert!(!a.equals(None));
        assert!(HMODULE::NULL.equals(Some(&HMODULE::default())));
    }

    #[test]
    fn hashing_follows_value() {
        let set: HashSet<_> = [UINT(1), UINT(2), UINT(1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(WORD(u16::MAX) + WORD(1), WORD(0));
        assert_eq!(WORD(0) - WORD(1), WORD(u16::MAX));
        assert_eq!(UINT(6) * UINT(7), UINT(42));
        assert_eq!(UINT(43) / UINT(2), UINT(21));
        assert_eq!(UINT(43) % UINT(2), UINT(1));
        assert_eq!(UCHAR(0xf0) & UCHAR(0x3c), UCHAR(0x30));
        assert_eq!(UCHAR(0xf0) | UCHAR(0x0f), UCHAR(0xff));
        assert_eq!(UCHAR(0xff) ^ UCHAR(0x0f), UCHAR(0xf0));
        assert_eq!(!UCHAR(0), UCHAR::MAX);
        assert_eq!(WORD(1) << 15, WORD(0x8000));
        assert_eq!(WORD(0x8000) >> 15, WORD(1));
        assert_eq!(ATOM::MAX.increment(), ATOM(0));
        assert_eq!(ATOM(0).decrement(), ATOM::MAX);
        let mut w = WPARAM(1);
        w += WPARAM(2);
        assert_eq!(w, WPARAM(3));
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(BOOL::from(true), TRUE);
        assert_eq!(BOOL::from(false), FALSE);
        assert!(bool::from(BOOL(-1)));
        assert!(!bool::from(FALSE));
        assert!(BOOL(2) == true);
    }

    #[test]
    fn formatting() {
        assert_eq!(WORD(42).to_string(), "42");
        assert_eq!(LRESULT(-1).to_string(), "-1");
        assert_eq!(format!("{:x}", UINT(0xbeef)), "beef");
        assert_eq!(format!("{:?}", ATOM(7)), "ATOM(7)");
        let width = size_of::<usize>() * 2;
        assert_eq!(
            HMODULE(0xab as _).to_string(),
            format!("0x{:0width$X}", 0xab, width = width)
        );
        assert_eq!(
            LPCVOID::NULL.to_string(),
            format!("0x{}", "0".repeat(width))
        );
    }

    #[test]
    fn word_macros() {
        assert_eq!(MAKEWORD(0x34, 0x12), WORD(0x1234));
        assert_eq!(MAKELONG(WORD(0x5678), WORD(0x1234)), 0x12345678);
        assert_eq!(LOWORD(0x12345678), WORD(0x5678));
        assert_eq!(HIWORD(0x12345678), WORD(0x1234));
        assert_eq!(LOBYTE(0x1234), 0x34);
        assert_eq!(HIBYTE(0x1234), 0x12);
        assert_eq!(MAKEWPARAM(WORD(1), WORD(2)), WPARAM(0x0002_0001));
        assert_eq!(MAKELPARAM(WORD(0xffff), WORD(0xffff)), LPARAM(0xffff_ffff));
        assert_eq!(MAKELRESULT(WORD(0), WORD(1)), LRESULT(0x1_0000));
        let lp = MAKELPARAM(WORD((-5i16) as u16), WORD(300));
        assert_eq!(GET_X_LPARAM(lp), -5);
        assert_eq!(GET_Y_LPARAM(lp), 300);
    }

    #[test]
    fn window_handle_interop() {
        let mut handle = Win32WindowHandle::empty();
        handle.hwnd = 0x100 as _;
        handle.hinstance = 0x200 as _;
        assert_eq!(HWND::from(&handle), HWND(0x100 as _));
        assert_eq!(HMODULE::from(&handle), HMODULE(0x200 as _));
        assert_eq!(
            HWND::try_from(RawWindowHandle::Win32(handle)),
            Ok(HWND(0x100 as _))
        );
        assert!(HWND::try_from(RawWindowHandle::Web(
            raw_window_handle::WebWindowHandle::empty()
        ))
        .is_err());
    }
}
