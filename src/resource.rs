use crate::*;

interface! {
    #[uuid(0x2cd90691_12e2_11dc_9fed_001143a055f9)]
    /// Root of every object a Direct2D factory or device creates.
    interface ID2D1Resource(ID2D1ResourceVtbl): IUnknown(IUnknownVtbl) {
        fn GetFactory(factory: *mut *mut ID2D1Factory) -> (),
    }
}

opaque_interface! {
    ID2D1Image = 0x65019f75_8da2_497c_b32c_dfa34e48ede6;
    ID2D1Bitmap = 0xa2296057_ea42_4099_983b_539fb6505426;
    ID2D1Bitmap1 = 0xa898a84c_3873_4588_b08b_ebbf978df041;
    ID2D1Brush = 0x2cd906a8_12e2_11dc_9fed_001143a055f9;
    ID2D1BitmapBrush;
    ID2D1BitmapBrush1;
    ID2D1SolidColorBrush;
    ID2D1LinearGradientBrush;
    ID2D1RadialGradientBrush;
    ID2D1ImageBrush;
    ID2D1GradientStopCollection;
    ID2D1GradientStopCollection1;
    ID2D1BitmapRenderTarget;
    ID2D1HwndRenderTarget;
    ID2D1DCRenderTarget;
    ID2D1Layer;
    ID2D1Mesh;
    ID2D1Geometry;
    ID2D1RectangleGeometry;
    ID2D1RoundedRectangleGeometry;
    ID2D1EllipseGeometry;
    ID2D1GeometryGroup;
    ID2D1TransformedGeometry;
    ID2D1PathGeometry;
    ID2D1PathGeometry1;
    ID2D1GeometryRealization;
    ID2D1SimplifiedGeometrySink;
    ID2D1StrokeStyle;
    ID2D1StrokeStyle1;
    ID2D1DrawingStateBlock;
    ID2D1DrawingStateBlock1;
    ID2D1GdiMetafile;
    ID2D1Properties;
    ID2D1ColorContext;
    ID2D1ColorContext1;
    ID2D1Effect;
    ID2D1CommandList;
    ID2D1PrintControl;
    ID2D1ImageSource;
    ID2D1ImageSourceFromWic;
    ID2D1TransformedImageSource;
    ID2D1LookupTable3D;
    ID2D1SvgGlyphStyle;
    ID2D1SvgDocument;
    IDWriteRenderingParams;
    IDWriteTextFormat;
    IDWriteTextLayout;
    IDWriteFontFace;
    IWICImagingFactory;
    IWICBitmap;
    IWICBitmapSource;
    IWICColorContext;
    IDXGIDevice = 0x54ec77fa_1377_44e6_8c32_88fd5f44c84c;
    IDXGISurface = 0xcafcb56c_6ac3_4889_bf47_9e23bbd260ec;
    IStream;
    IPrintDocumentPackageTarget;
}
