use super::*;

fn solid_rgba(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect()
}

#[test]
fn raw_bitmap_wire_roundtrip() {
    let raw = RawBitmap::new(3, 2, solid_rgba(3, 2, [255, 0, 0, 255])).unwrap();
    let bytes = raw.to_bytes();
    assert_eq!(bytes.len(), 8 + 3 * 2 * 4);
    assert_eq!(RawBitmap::from_bytes(&bytes).unwrap(), raw);
}

#[test]
fn raw_bitmap_rejects_truncated_header() {
    let err = RawBitmap::from_bytes(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, SlideloomError::Validation(_)));
}

#[test]
fn raw_bitmap_rejects_length_mismatch() {
    let mut bytes = RawBitmap::new(2, 2, solid_rgba(2, 2, [0, 0, 0, 255]))
        .unwrap()
        .to_bytes();

    bytes.pop();
    assert!(matches!(
        RawBitmap::from_bytes(&bytes).unwrap_err(),
        SlideloomError::Validation(_)
    ));

    bytes.extend_from_slice(&[0, 0]);
    assert!(matches!(
        RawBitmap::from_bytes(&bytes).unwrap_err(),
        SlideloomError::Validation(_)
    ));
}

#[test]
fn raw_bitmap_rejects_zero_dimensions() {
    assert!(matches!(
        RawBitmap::new(0, 4, Vec::new()).unwrap_err(),
        SlideloomError::Validation(_)
    ));
}

#[test]
fn png_transcoder_produces_decodable_png() {
    let raw = RawBitmap::new(4, 3, solid_rgba(4, 3, [10, 20, 30, 255])).unwrap();
    let png = PngTranscoder.transcode(&raw.to_bytes()).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (4, 3));
    assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn png_transcoder_rejects_garbage() {
    assert!(matches!(
        PngTranscoder.transcode(b"not a bitmap").unwrap_err(),
        SlideloomError::Validation(_)
    ));
}
