use crate::com_ptr::{opt, opt_mut, raw};
use crate::*;
use std::mem::MaybeUninit;

interface! {
    #[uuid(0xb499923b_7029_478f_a8b3_432c7c5f5312)]
    /// A single continuous ink stroke: a start point followed by cubic
    /// Bézier segments, each point carrying its own nib radius.
    interface ID2D1Ink(ID2D1InkVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn SetStartPoint(startPoint: *const D2D1_INK_POINT) -> (),
        fn GetStartPoint(result: *mut D2D1_INK_POINT) -> *mut D2D1_INK_POINT,
        fn AddSegments(segments: *const D2D1_INK_BEZIER_SEGMENT, segmentsCount: u32) -> HRESULT,
        fn RemoveSegmentsAtEnd(segmentsCount: u32) -> HRESULT,
        fn SetSegments(
            startSegment: u32,
            segments: *const D2D1_INK_BEZIER_SEGMENT,
            segmentsCount: u32,
        ) -> HRESULT,
        fn SetSegmentAtEnd(segment: *const D2D1_INK_BEZIER_SEGMENT) -> HRESULT,
        fn GetSegmentCount() -> u32,
        fn GetSegments(
            startSegment: u32,
            segments: *mut D2D1_INK_BEZIER_SEGMENT,
            segmentsCount: u32,
        ) -> HRESULT,
        fn StreamAsGeometry(
            inkStyle: *mut ID2D1InkStyle,
            worldTransform: *const D2D1_MATRIX_3X2_F,
            flatteningTolerance: f32,
            geometrySink: *mut ID2D1SimplifiedGeometrySink,
        ) -> HRESULT,
        fn GetBounds(
            inkStyle: *mut ID2D1InkStyle,
            worldTransform: *const D2D1_MATRIX_3X2_F,
            bounds: *mut D2D1_RECT_F,
        ) -> HRESULT,
    }
}

interface! {
    #[uuid(0xbae8b344_23fc_4071_8cb5_d05d6f073848)]
    /// Nib shape and transform used to render ink.
    interface ID2D1InkStyle(ID2D1InkStyleVtbl): ID2D1Resource(ID2D1ResourceVtbl) {
        fn SetNibTransform(transform: *const D2D1_MATRIX_3X2_F) -> (),
        fn GetNibTransform(transform: *mut D2D1_MATRIX_3X2_F) -> (),
        fn SetNibShape(nibShape: D2D1_INK_NIB_SHAPE) -> (),
        fn GetNibShape() -> D2D1_INK_NIB_SHAPE,
    }
}

impl ID2D1Ink {
    #[inline]
    pub unsafe fn start_point(&self) -> D2D1_INK_POINT {
        let mut ret = MaybeUninit::uninit();
        self.GetStartPoint(ret.as_mut_ptr());
        ret.assume_init()
    }

    #[inline]
    pub unsafe fn set_start_point(&self, point: &D2D1_INK_POINT) {
        self.SetStartPoint(point);
    }

    #[inline]
    pub unsafe fn add_segments(&self, segments: &[D2D1_INK_BEZIER_SEGMENT]) -> Result<()> {
        self.AddSegments(segments.as_ptr(), segment_count(segments.len())?)
            .check()
    }

    #[inline]
    pub unsafe fn set_segments(&self, start: u32, segments: &[D2D1_INK_BEZIER_SEGMENT]) -> Result<()> {
        self.SetSegments(start, segments.as_ptr(), segment_count(segments.len())?)
            .check()
    }

    /// Copies every segment out of the stroke.
    pub unsafe fn segments(&self) -> Result<Vec<D2D1_INK_BEZIER_SEGMENT>> {
        let count = self.GetSegmentCount();
        let mut segments = vec![D2D1_INK_BEZIER_SEGMENT::default(); count as usize];
        self.GetSegments(0, segments.as_mut_ptr(), count).check()?;
        Ok(segments)
    }

    /// `StreamAsGeometry` with an optional style and transform, flattening
    /// with `D2D1_DEFAULT_FLATTENING_TOLERANCE` when no tolerance is given.
    #[inline]
    pub unsafe fn stream_as_geometry(
        &self,
        style: Option<&ID2D1InkStyle>,
        transform: Option<&D2D1_MATRIX_3X2_F>,
        tolerance: Option<f32>,
        sink: &ID2D1SimplifiedGeometrySink,
    ) -> Result<()> {
        self.StreamAsGeometry(
            opt_mut(style),
            opt(transform),
            tolerance.unwrap_or(D2D1_DEFAULT_FLATTENING_TOLERANCE),
            raw(sink),
        )
        .check()
    }

    #[inline]
    pub unsafe fn bounds(
        &self,
        style: Option<&ID2D1InkStyle>,
        transform: Option<&D2D1_MATRIX_3X2_F>,
    ) -> Result<D2D1_RECT_F> {
        let mut bounds = D2D1_RECT_F::default();
        self.GetBounds(opt_mut(style), opt(transform), &mut bounds)
            .check()?;
        Ok(bounds)
    }
}

impl ID2D1InkStyle {
    #[inline]
    pub unsafe fn nib_transform(&self) -> D2D1_MATRIX_3X2_F {
        let mut ret = D2D1_MATRIX_3X2_F::IDENTITY;
        self.GetNibTransform(&mut ret);
        ret
    }
}

fn segment_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::Conversion { target: "u32" })
}
