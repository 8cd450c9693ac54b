// tests/integration_tests.rs
//! Integration tests for the raw buffer library

use rawbuf::prelude::*;

#[test]
fn test_telemetry_packet_simulation() {
    // Simulate a telemetry packet: seq | flags | reading | checksum
    let mut packet = RawBuffer::new(64);
    let mut cur = Cursor::new(&mut packet, 0);

    unsafe {
        cur.put_u32(1724); // sequence
        cur.put_u8(0b0000_0101); // flags
        cur.put_f64(-17.25); // sensor reading
        cur.put_u16(0xBEEF); // checksum
    }
    let written = cur.pos();
    assert_eq!(written, 4 + 1 + 8 + 2);

    // Decode it back in the same order
    cur.set_pos(0);
    unsafe {
        assert_eq!(cur.get_u32(), 1724);
        assert_eq!(cur.get_u8(), 0b0000_0101);
        assert_eq!(cur.get_f64(), -17.25);
        assert_eq!(cur.get_u16(), 0xBEEF);
    }
    assert_eq!(cur.pos(), written);
}

#[test]
fn test_packet_field_skipping() {
    let mut packet = RawBuffer::new(32);
    let mut cur = Cursor::new(&mut packet, 0);
    unsafe {
        cur.put_u32(1);
        cur.put_f32(9.5);
        cur.put_i16(-2);
    }

    // Skip the header and the float, read only the trailing i16
    cur.set_pos(0);
    cur.advance(ScalarKind::U32);
    cur.advance(ScalarKind::F32);
    unsafe {
        assert_eq!(cur.get_i16(), -2);
    }
}

#[test]
fn test_record_batch_through_one_layout() {
    // One layout compiled up front, many record buffers written against it
    let layout = Layout::compile([
        ("id", ScalarKind::U32),
        ("temperature", ScalarKind::F32),
        ("humidity", ScalarKind::F32),
        ("status", ScalarKind::U8),
    ])
    .unwrap();
    assert_eq!(layout.size(), 13);

    let mut records: Vec<RawBuffer> = Vec::new();
    for i in 0..100u32 {
        let mut rec = layout.alloc();
        unsafe {
            layout.set(&mut rec, "id", Scalar::U32(i)).unwrap();
            layout
                .set(&mut rec, "temperature", Scalar::F32(20.0 + i as f32 * 0.5))
                .unwrap();
            layout.set(&mut rec, "humidity", Scalar::F32(0.4)).unwrap();
            layout
                .set(&mut rec, "status", Scalar::U8((i % 3) as u8))
                .unwrap();
        }
        records.push(rec);
    }

    for (i, rec) in records.iter().enumerate() {
        unsafe {
            assert_eq!(layout.get(rec, "id").unwrap(), Scalar::U32(i as u32));
            assert_eq!(
                layout.get(rec, "temperature").unwrap(),
                Scalar::F32(20.0 + i as f32 * 0.5)
            );
            assert_eq!(
                layout.get(rec, "status").unwrap(),
                Scalar::U8((i % 3) as u8)
            );
        }
    }
}

#[test]
fn test_layout_concrete_offsets() {
    let layout = Layout::compile([
        ("a", ScalarKind::I8),
        ("b", ScalarKind::F64),
        ("c", ScalarKind::I32),
    ])
    .unwrap();

    assert_eq!(layout.size(), 13);
    assert_eq!(layout.offset_of("a"), Some(0));
    assert_eq!(layout.offset_of("b"), Some(1));
    assert_eq!(layout.offset_of("c"), Some(9));

    let mut buf = layout.alloc();
    unsafe {
        layout.set(&mut buf, "a", Scalar::I8(7)).unwrap();
        layout.set(&mut buf, "b", Scalar::F64(3.5)).unwrap();
        layout.set(&mut buf, "c", Scalar::I32(-100)).unwrap();

        assert_eq!(layout.get(&buf, "a").unwrap(), Scalar::I8(7));
        assert_eq!(layout.get(&buf, "b").unwrap(), Scalar::F64(3.5));
        assert_eq!(layout.get(&buf, "c").unwrap(), Scalar::I32(-100));
    }
}

#[test]
fn test_buffer_clone_independence() {
    let mut original = RawBuffer::new(100);
    original.put_u32_at(0, 42).unwrap();

    let mut cloned = original.clone();
    cloned.put_u32_at(0, 99).unwrap();

    assert_eq!(original.get_u32_at(0).unwrap(), 42);
    assert_eq!(cloned.get_u32_at(0).unwrap(), 99);
    assert_eq!(cloned.len(), original.len());
}

#[test]
fn test_slice_is_independent_copy() {
    let mut buf = RawBuffer::from_slice(&[10, 20, 30, 40, 50]);
    let piece = buf.slice(1, 3).unwrap();
    assert_eq!(piece.as_slice(), &[20, 30, 40]);

    buf.fill_range(0, buf.len(), 0).unwrap();
    assert_eq!(piece.as_slice(), &[20, 30, 40]);
}

#[test]
fn test_reverse_round_trip() {
    let data: Vec<u8> = (0..37).collect();
    let mut buf = RawBuffer::from_slice(&data);

    buf.reverse();
    assert_eq!(buf.as_slice()[0], 36);
    buf.reverse();
    assert_eq!(buf.as_slice(), data.as_slice());
}

#[test]
fn test_compare_is_lexicographic() {
    use std::cmp::Ordering;

    let a = RawBuffer::from_slice(b"abc");
    let b = RawBuffer::from_slice(b"abd");
    let ab = RawBuffer::from_slice(b"ab");

    assert_eq!(a.cmp(&a), Ordering::Equal);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
    assert_eq!(ab.cmp(&a), Ordering::Less);
    assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
}

#[test]
fn test_rendering_shapes() {
    let buf = RawBuffer::from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);

    let hex = buf.to_hex();
    assert_eq!(hex, "0123456789ABCDEF");
    assert_eq!(hex.len(), 2 * buf.len());

    let bits = buf.to_binary_string();
    assert_eq!(bits.len(), 8 * buf.len());
    assert!(bits.starts_with("00000001"));
    assert!(bits.chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn test_fill_clear_burn() {
    let mut buf = RawBuffer::new(8);
    buf.fill_range(2, 3, 0xFF).unwrap();
    assert_eq!(buf.as_slice(), &[0, 0, 255, 255, 255, 0, 0, 0]);

    buf.clear();
    assert!(buf.as_slice().iter().all(|&b| b == 0));

    buf.fill_range(0, 8, 0xAA).unwrap();
    buf.burn();
    assert!(buf.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_copy_between_buffers() {
    let mut header = RawBuffer::new(16);
    header.put_u32_at(0, 0xCAFE).unwrap();

    let mut frame = RawBuffer::new(64);
    frame.copy_from(8, &header, 0, 16).unwrap();

    assert_eq!(frame.get_u32_at(8).unwrap(), 0xCAFE);
}

#[test]
fn test_checked_tier_error_handling() {
    let mut buf = RawBuffer::new(10);

    assert!(buf.put_f64_at(4, 1.0).is_err());
    assert!(buf.get_u32_at(7).is_err());
    assert!(buf.slice(8, 4).is_err());
    assert!(buf.fill_range(9, 2, 0).is_err());

    let layout = Layout::compile([("a", ScalarKind::U8), ("a", ScalarKind::U8)]);
    assert!(matches!(layout, Err(BufferError::DuplicateField(_))));
}

#[test]
fn test_scalar_round_trip_extremes() {
    let mut buf = RawBuffer::new(64);
    let mut cur = Cursor::new(&mut buf, 0);

    unsafe {
        cur.put_i8(i8::MIN);
        cur.put_i8(i8::MAX);
        cur.put_u8(u8::MAX);
        cur.put_i16(i16::MIN);
        cur.put_u16(u16::MAX);
        cur.put_i32(i32::MIN);
        cur.put_u32(u32::MAX);
        cur.put_f32(f32::MIN_POSITIVE);
        cur.put_f64(f64::MAX);
    }

    cur.set_pos(0);
    unsafe {
        assert_eq!(cur.get_i8(), i8::MIN);
        assert_eq!(cur.get_i8(), i8::MAX);
        assert_eq!(cur.get_u8(), u8::MAX);
        assert_eq!(cur.get_i16(), i16::MIN);
        assert_eq!(cur.get_u16(), u16::MAX);
        assert_eq!(cur.get_i32(), i32::MIN);
        assert_eq!(cur.get_u32(), u32::MAX);
        assert_eq!(cur.get_f32(), f32::MIN_POSITIVE);
        assert_eq!(cur.get_f64(), f64::MAX);
    }
}

#[test]
fn test_layout_buffer_larger_than_layout() {
    // A buffer bigger than the layout is valid; fields address its prefix
    let layout = Layout::compile([("head", ScalarKind::U32)]).unwrap();
    let mut buf = RawBuffer::new(1024);

    layout.try_set(&mut buf, "head", Scalar::U32(77)).unwrap();
    assert_eq!(layout.try_get(&buf, "head").unwrap(), Scalar::U32(77));
}
