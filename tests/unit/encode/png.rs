use super::*;
use std::path::PathBuf;

fn out_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("png_encode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn file_names_are_one_based_and_unpadded() {
    assert_eq!(frame_file_name(FrameIndex(1)), "frame-1.png");
    assert_eq!(frame_file_name(FrameIndex(8)), "frame-8.png");
    assert_eq!(frame_file_name(FrameIndex(10)), "frame-10.png");
}

#[test]
fn ensure_parent_dir_creates_missing_directories() {
    let base = out_dir().join("nested");
    let _ = std::fs::remove_dir_all(&base);
    let target = base.join("a").join("b").join("frame-1.png");
    ensure_parent_dir(&target).unwrap();
    assert!(target.parent().unwrap().is_dir());
}

#[test]
fn byte_length_mismatch_is_an_encode_error() {
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![0; 15],
        premultiplied: false,
    };
    let err = write_frame_png(&frame, &out_dir().join("bad.png")).unwrap_err();
    assert!(matches!(err, LogomotiveError::Encode(_)));
}

#[test]
fn straight_alpha_frames_round_trip_losslessly() {
    let pixels: [[u8; 4]; 4] = [
        [255, 0, 0, 255],
        [0, 255, 0, 128],
        [1, 2, 3, 0],
        [10, 20, 30, 255],
    ];
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: pixels.concat(),
        premultiplied: false,
    };

    let path = out_dir().join("straight.png");
    write_frame_png(&frame, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.into_raw(), frame.data);
}

#[test]
fn premultiplied_frames_are_unpremultiplied_before_encoding() {
    let frame = FrameRgba {
        width: 3,
        height: 1,
        data: [
            [100, 50, 25, 128], // translucent
            [7, 7, 7, 0],       // fully transparent: rgb is zeroed
            [249, 115, 22, 255], // opaque: passes through unchanged
        ]
        .concat(),
        premultiplied: true,
    };

    let path = out_dir().join("premul.png");
    write_frame_png(&frame, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    let raw = decoded.into_raw();
    assert_eq!(&raw[0..4], &[199, 100, 50, 128]);
    assert_eq!(&raw[4..8], &[0, 0, 0, 0]);
    assert_eq!(&raw[8..12], &[249, 115, 22, 255]);
}
