//! Raw projections of the Win32 and Direct2D ABI.
//!
//! Two kinds of item live here. The `minwindef` wrappers are transparent
//! carriers for native scalars and handles. The interface projections are
//! vtable layouts plus forwarders that call straight into the native slot,
//! covering `ID2D1Factory3`, `ID2D1Device2`, `ID2D1DeviceContext5`,
//! `ID2D1Ink`, `ID2D1GradientMesh`, `ID2D1SpriteBatch` and their bases.
//!
//! Projections never touch reference counts. Hold objects in [`ComPtr`]
//! when ownership matters.

#![allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    clippy::missing_safety_doc,
    clippy::too_many_arguments
)]

#[macro_use]
mod macros;

mod com_ptr;
mod device;
mod device_context;
pub mod error;
mod factory;
mod gradient_mesh;
mod ink;
pub mod minwindef;
mod render_target;
mod resource;
mod shape;
mod sprite_batch;
pub mod types;
mod unknown;

#[cfg(test)]
mod testing;

pub use com_ptr::*;
pub use device::*;
pub use device_context::*;
pub use error::{Error, ErrorKind, HResultExt};
pub use factory::*;
pub use gecl;
pub use gecl::{circle, point, rect, rgba, size, vector};
pub use gradient_mesh::*;
pub use ink::*;
pub use minwindef::*;
pub use render_target::*;
pub use resource::*;
pub use shape::*;
pub use sprite_batch::*;
pub use types::*;
pub use unknown::*;
pub use windows::core::{GUID, HRESULT};

pub type Result<T> = core::result::Result<T, Error>;
