/// Declares a COM interface projection.
///
/// The vtable embeds the parent vtable as its first field, so every slot
/// keeps the offset COM gives it: inherited slots first, own slots appended
/// in declaration order. Each forwarder reads its slot and calls through
/// with `self` as `this`; the native return value is handed back untouched.
macro_rules! interface {
    (
        #[uuid($iid:literal)]
        $(#[$attr:meta])*
        interface $name:ident($vtbl:ident): $parent:ident($pvtbl:ident) {
            $(
                $(#[$fattr:meta])*
                fn $method:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty,
            )*
        }
    ) => {
        #[allow(non_snake_case)]
        #[repr(C)]
        pub struct $vtbl {
            pub parent: $pvtbl,
            $(
                pub $method: unsafe extern "system" fn(This: *mut $name, $($arg: $ty),*) -> $ret,
            )*
        }

        $(#[$attr])*
        #[allow(non_snake_case)]
        #[repr(C)]
        pub struct $name {
            pub lpVtbl: *const $vtbl,
        }

        #[allow(non_snake_case)]
        impl $name {
            $(
                $(#[$fattr])*
                #[inline]
                pub unsafe fn $method(&self, $($arg: $ty),*) -> $ret {
                    ((*self.lpVtbl).$method)(self as *const Self as *mut Self, $($arg),*)
                }
            )*
        }

        impl ::core::ops::Deref for $name {
            type Target = $parent;

            #[inline]
            fn deref(&self) -> &$parent {
                unsafe { &*(self as *const Self as *const $parent) }
            }
        }

        impl $crate::Interface for $name {
            const IID: ::windows::core::GUID = ::windows::core::GUID::from_u128($iid);
        }

        unsafe impl $crate::ComObject for $name {}
    };
}

/// Declares interfaces that appear in signatures but whose own slots are
/// not projected. Only the `IUnknown` prefix of their vtable is reachable.
macro_rules! opaque_interface {
    ($($(#[$attr:meta])* $name:ident $(= $iid:literal)?;)*) => {
        $(
            $(#[$attr])*
            #[allow(non_snake_case)]
            #[repr(C)]
            pub struct $name {
                pub lpVtbl: *const $crate::IUnknownVtbl,
            }

            impl ::core::ops::Deref for $name {
                type Target = $crate::IUnknown;

                #[inline]
                fn deref(&self) -> &$crate::IUnknown {
                    unsafe { &*(self as *const Self as *const $crate::IUnknown) }
                }
            }

            $(
                impl $crate::Interface for $name {
                    const IID: ::windows::core::GUID = ::windows::core::GUID::from_u128($iid);
                }
            )?

            unsafe impl $crate::ComObject for $name {}
        )*
    };
}

/// Declares a native C enum as a transparent newtype plus its constants.
///
/// Native calls may hand back values this crate does not name, so the
/// newtype accepts every bit pattern of the underlying integer.
macro_rules! native_enum {
    (
        $(#[$attr:meta])*
        flags $name:ident: $repr:ty {
            $($konst:ident = $value:expr,)*
        }
    ) => {
        native_enum! {
            $(#[$attr])*
            $name: $repr {
                $($konst = $value,)*
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl $name {
            #[inline]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }
    };
    (
        $(#[$attr:meta])*
        $name:ident: $repr:ty {
            $($konst:ident = $value:expr,)*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        $(
            pub const $konst: $name = $name($value);
        )*
    };
}
