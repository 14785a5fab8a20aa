use crate::com_ptr::{opt_mut, raw};
use crate::*;

pub type Point<T> = gecl::Point<T>;
pub type Size<T> = gecl::Size<T>;
pub type Rect<T> = gecl::Rect<T>;
pub type Vector<T> = gecl::Vector<T>;
pub type Rgba<T> = gecl::Rgba<T>;
pub type Circle = gecl::Circle<f32>;
pub type Ellipse = gecl::Ellipse<f32>;

impl From<Point<f32>> for D2D_POINT_2F {
    #[inline]
    fn from(src: Point<f32>) -> Self {
        Self { x: src.x, y: src.y }
    }
}

impl From<D2D_POINT_2F> for Point<f32> {
    #[inline]
    fn from(src: D2D_POINT_2F) -> Self {
        Self { x: src.x, y: src.y }
    }
}

impl From<Vector<f32>> for D2D_POINT_2F {
    #[inline]
    fn from(src: Vector<f32>) -> Self {
        Self { x: src.x, y: src.y }
    }
}

impl From<Size<f32>> for D2D_SIZE_F {
    #[inline]
    fn from(src: Size<f32>) -> Self {
        Self {
            width: src.width,
            height: src.height,
        }
    }
}

impl From<D2D_SIZE_F> for Size<f32> {
    #[inline]
    fn from(src: D2D_SIZE_F) -> Self {
        Size::new(src.width, src.height)
    }
}

impl From<Size<u32>> for D2D_SIZE_U {
    #[inline]
    fn from(src: Size<u32>) -> Self {
        Self {
            width: src.width,
            height: src.height,
        }
    }
}

impl From<D2D_SIZE_U> for Size<u32> {
    #[inline]
    fn from(src: D2D_SIZE_U) -> Self {
        Size::new(src.width, src.height)
    }
}

impl From<Rect<f32>> for D2D_RECT_F {
    #[inline]
    fn from(src: Rect<f32>) -> Self {
        let ep = src.endpoint();
        Self {
            left: src.origin.x,
            top: src.origin.y,
            right: ep.x,
            bottom: ep.y,
        }
    }
}

impl From<Rgba<f32>> for D2D1_COLOR_F {
    #[inline]
    fn from(src: Rgba<f32>) -> Self {
        Self {
            r: src.r,
            g: src.g,
            b: src.b,
            a: src.a,
        }
    }
}

impl From<Circle> for D2D1_ELLIPSE {
    #[inline]
    fn from(src: Circle) -> Self {
        Self {
            point: src.center.into(),
            radiusX: src.radius,
            radiusY: src.radius,
        }
    }
}

impl From<Ellipse> for D2D1_ELLIPSE {
    #[inline]
    fn from(src: Ellipse) -> Self {
        Self {
            point: src.center.into(),
            radiusX: src.radius.x,
            radiusY: src.radius.y,
        }
    }
}

impl D2D1_INK_POINT {
    /// An ink point at `point` with a nib of `radius`.
    #[inline]
    pub fn new(point: impl Into<Point<f32>>, radius: f32) -> Self {
        let point = point.into();
        Self {
            x: point.x,
            y: point.y,
            radius,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RoundedRect {
    pub rect: Rect<f32>,
    pub radius: Vector<f32>,
}

impl RoundedRect {
    #[inline]
    pub fn new(rect: impl Into<Rect<f32>>, radius: impl Into<Vector<f32>>) -> Self {
        Self {
            rect: rect.into(),
            radius: radius.into(),
        }
    }
}

impl From<RoundedRect> for D2D1_ROUNDED_RECT {
    #[inline]
    fn from(src: RoundedRect) -> Self {
        Self {
            rect: src.rect.into(),
            radiusX: src.radius.x,
            radiusY: src.radius.y,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Line(pub Point<f32>, pub Point<f32>);

impl Line {
    #[inline]
    pub fn new(x0: impl Into<Point<f32>>, x1: impl Into<Point<f32>>) -> Self {
        Self(x0.into(), x1.into())
    }
}

/// Shapes that fill through a render target's `Fill*` slots.
pub trait Fill {
    unsafe fn fill(&self, rt: &ID2D1RenderTarget, brush: &ID2D1Brush);
}

/// Shapes that outline through a render target's `Draw*` slots.
pub trait Stroke {
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    );
}

impl Fill for Rect<f32> {
    #[inline]
    unsafe fn fill(&self, rt: &ID2D1RenderTarget, brush: &ID2D1Brush) {
        rt.FillRectangle(&(*self).into(), raw(brush));
    }
}

impl Stroke for Rect<f32> {
    #[inline]
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        rt.DrawRectangle(&(*self).into(), raw(brush), width, opt_mut(style));
    }
}

impl Fill for Circle {
    #[inline]
    unsafe fn fill(&self, rt: &ID2D1RenderTarget, brush: &ID2D1Brush) {
        rt.FillEllipse(&(*self).into(), raw(brush));
    }
}

impl Stroke for Circle {
    #[inline]
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        rt.DrawEllipse(&(*self).into(), raw(brush), width, opt_mut(style));
    }
}

impl Fill for Ellipse {
    #[inline]
    unsafe fn fill(&self, rt: &ID2D1RenderTarget, brush: &ID2D1Brush) {
        rt.FillEllipse(&(*self).into(), raw(brush));
    }
}

impl Stroke for Ellipse {
    #[inline]
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        rt.DrawEllipse(&(*self).into(), raw(brush), width, opt_mut(style));
    }
}

impl Fill for RoundedRect {
    #[inline]
    unsafe fn fill(&self, rt: &ID2D1RenderTarget, brush: &ID2D1Brush) {
        rt.FillRoundedRectangle(&(*self).into(), raw(brush));
    }
}

impl Stroke for RoundedRect {
    #[inline]
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        rt.DrawRoundedRectangle(&(*self).into(), raw(brush), width, opt_mut(style));
    }
}

impl Stroke for Line {
    #[inline]
    unsafe fn stroke(
        &self,
        rt: &ID2D1RenderTarget,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        rt.DrawLine(self.0.into(), self.1.into(), raw(brush), width, opt_mut(style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn conversions() {
        let p: D2D_POINT_2F = gecl::point(1.0, 2.0).into();
        assert_eq!(p, D2D_POINT_2F { x: 1.0, y: 2.0 });
        assert_eq!(Point::from(p), gecl::point(1.0, 2.0));

        let s: D2D_SIZE_U = Size::new(640u32, 480).into();
        assert_eq!((s.width, s.height), (640, 480));
        assert_eq!(Size::<u32>::from(s), Size::new(640, 480));

        let r: D2D_RECT_F = Rect::new((10.0, 20.0), (30.0, 40.0)).into();
        assert_eq!(
            r,
            D2D_RECT_F {
                left: 10.0,
                top: 20.0,
                right: 40.0,
                bottom: 60.0,
            }
        );

        let ink = D2D1_INK_POINT::new((3.0, 4.0), 1.5);
        assert_eq!((ink.x, ink.y, ink.radius), (3.0, 4.0, 1.5));

        let rr: D2D1_ROUNDED_RECT =
            RoundedRect::new(Rect::new((0.0, 0.0), (8.0, 8.0)), (2.0, 3.0)).into();
        assert_eq!((rr.radiusX, rr.radiusY), (2.0, 3.0));
        assert_eq!(rr.rect.right, 8.0);
    }

    unsafe extern "system" fn fill_rectangle(
        this: *mut ID2D1RenderTarget,
        rect: *const D2D1_RECT_F,
        _brush: *mut ID2D1Brush,
    ) {
        let rect = &*rect;
        FakeObject::from_this(this).record(format!(
            "FillRectangle({} {} {} {})",
            rect.left, rect.top, rect.right, rect.bottom
        ));
    }

    unsafe extern "system" fn draw_line(
        this: *mut ID2D1RenderTarget,
        p0: D2D1_POINT_2F,
        p1: D2D1_POINT_2F,
        _brush: *mut ID2D1Brush,
        width: f32,
        style: *mut ID2D1StrokeStyle,
    ) {
        FakeObject::from_this(this).record(format!(
            "DrawLine({},{} {},{} {} {})",
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            width,
            ptr(style)
        ));
    }

    #[test]
    fn shapes_draw_through_render_target() {
        let object = FakeObject::new(57)
            .with_slot(15, draw_line as *const ())
            .with_slot(17, fill_rectangle as *const ());
        let rt = unsafe { object.get::<ID2D1RenderTarget>() };
        let brush = unsafe { object.get::<ID2D1Brush>() };
        unsafe {
            Rect::new((1.0, 2.0), (3.0, 4.0)).fill(rt, brush);
            Line::new((0.0, 0.0), (5.0, 5.0)).stroke(rt, brush, 2.0, None);
        }
        assert_eq!(
            object.calls(),
            ["FillRectangle(1 2 4 6)", "DrawLine(0,0 5,5 2 null)"]
        );
    }
}
