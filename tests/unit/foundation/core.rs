use super::*;

#[test]
fn image_handle_raw_roundtrip() {
    let h = ImageHandle::from_u64(0xDEAD_BEEF);
    assert_eq!(h.as_u64(), 0xDEAD_BEEF);
    assert_eq!(h, ImageHandle::from_u64(0xDEAD_BEEF));
}

#[test]
fn image_paint_serializes_with_scale_mode() {
    let paint = ImagePaint {
        scale_mode: ScaleMode::Crop,
        image: ImageHandle::from_u64(7),
    };
    let json = serde_json::to_string(&paint).unwrap();
    assert!(json.contains("Crop"));

    let back: ImagePaint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, paint);
}

#[test]
fn geometry_capture_is_independent() {
    let mut live = NodeGeometry::new(Point::new(10.0, 20.0), Size::new(80.0, 60.0));
    let captured = live;

    live.position = Point::new(999.0, 999.0);
    assert_eq!(captured.position, Point::new(10.0, 20.0));
    assert_eq!(captured.size, Size::new(80.0, 60.0));
}
