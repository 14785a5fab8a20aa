use crate::*;

interface! {
    #[uuid(0xf292e401_c050_4cde_83d7_04962d3b23c2)]
    /// An immutable set of tensor patches, created by
    /// `ID2D1DeviceContext2::CreateGradientMesh`.
    interface ID2D1GradientMesh(ID2D1GradientMeshVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn GetPatchCount() -> u32,
        fn GetPatches(
            startIndex: u32,
            patches: *mut D2D1_GRADIENT_MESH_PATCH,
            patchesCount: u32,
        ) -> HRESULT,
    }
}

impl ID2D1GradientMesh {
    /// Copies `count` patches starting at `start`.
    pub unsafe fn patches_range(&self, start: u32, count: u32) -> Result<Vec<D2D1_GRADIENT_MESH_PATCH>> {
        let mut patches = vec![D2D1_GRADIENT_MESH_PATCH::default(); count as usize];
        self.GetPatches(start, patches.as_mut_ptr(), count).check()?;
        Ok(patches)
    }

    #[inline]
    pub unsafe fn patches(&self) -> Result<Vec<D2D1_GRADIENT_MESH_PATCH>> {
        self.patches_range(0, self.GetPatchCount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use std::mem::{offset_of, size_of};
    use windows::Win32::Foundation::{E_INVALIDARG, S_OK};

    #[test]
    fn vtable_layout() {
        assert_eq!(offset_of!(ID2D1GradientMeshVtbl, parent), 0);
        assert_eq!(offset_of!(ID2D1GradientMeshVtbl, GetPatchCount), slot(4));
        assert_eq!(offset_of!(ID2D1GradientMeshVtbl, GetPatches), slot(5));
        assert_eq!(size_of::<ID2D1GradientMeshVtbl>(), slot(6));
    }

    const PATCHES: u32 = 3;

    unsafe extern "system" fn get_patch_count(_this: *mut ID2D1GradientMesh) -> u32 {
        PATCHES
    }

    unsafe extern "system" fn get_patches(
        this: *mut ID2D1GradientMesh,
        start: u32,
        patches: *mut D2D1_GRADIENT_MESH_PATCH,
        count: u32,
    ) -> HRESULT {
        FakeObject::from_this(this).record(format!("GetPatches({start}, {count})"));
        if start + count > PATCHES {
            return E_INVALIDARG;
        }
        for i in 0..count {
            let patch = &mut *patches.add(i as usize);
            patch.point00.x = (start + i) as f32;
            patch.rightEdgeMode = D2D1_PATCH_EDGE_MODE_ANTIALIASED;
        }
        S_OK
    }

    #[test]
    fn patches_are_copied_out() {
        let object = FakeObject::new(6)
            .with_slot(4, get_patch_count as *const ())
            .with_slot(5, get_patches as *const ());
        let mesh = unsafe { object.get::<ID2D1GradientMesh>() };

        let patches = unsafe { mesh.patches() }.unwrap();
        assert_eq!(patches.len(), 3);
        assert_eq!(patches[2].point00.x, 2.0);
        assert_eq!(patches[0].rightEdgeMode, D2D1_PATCH_EDGE_MODE_ANTIALIASED);
        assert_eq!(patches[0].topEdgeMode, D2D1_PATCH_EDGE_MODE_ALIASED);

        assert_eq!(
            unsafe { mesh.patches_range(2, 2) }.unwrap_err(),
            ErrorKind::InvalidArg
        );
        assert_eq!(object.calls(), ["GetPatches(0, 3)", "GetPatches(2, 2)"]);
    }
}
