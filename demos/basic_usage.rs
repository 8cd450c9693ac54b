// demos/basic_usage.rs
//! Basic usage example of the raw buffer library

use rawbuf::prelude::*;

fn main() -> Result<()> {
    println!("=== Basic Buffer Usage ===\n");

    // 1. Create a fixed-size buffer and use the checked tier
    let mut buf = RawBuffer::new(64);

    buf.put_u32_at(0, 12345)?;
    buf.put_f64_at(4, -2.5)?;
    buf.put_u8_at(12, 0xFF)?;

    println!("Buffer length: {}", buf.len());
    println!("Read u32: {}", buf.get_u32_at(0)?);
    println!("Read f64: {}", buf.get_f64_at(4)?);
    println!("Read byte: 0x{:02X}", buf.get_u8_at(12)?);

    println!("\n=== Cursor: Sequential Packing ===\n");

    // 2. Pack a heterogeneous sequence without tracking offsets by hand
    let mut packet = RawBuffer::new(32);
    let mut cur = Cursor::new(&mut packet, 0);

    unsafe {
        cur.put_u32(7); // sequence number
        cur.put_u8(3); // message type
        cur.put_f32(21.75); // payload
    }
    println!("Packed {} bytes", cur.pos());

    cur.set_pos(0);
    unsafe {
        println!("seq={}", cur.get_u32());
        println!("type={}", cur.get_u8());
        println!("payload={}", cur.get_f32());
    }

    println!("\n=== Byte Utilities ===\n");

    // 3. Whole-buffer operations
    let mut bytes = RawBuffer::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    println!("hex:    {}", bytes.to_hex());
    println!("binary: {}", bytes.to_binary_string());

    bytes.reverse();
    println!("reversed: {}", bytes.to_hex());

    let piece = bytes.slice(1, 2)?;
    println!("slice(1, 2): {}", piece.to_hex());

    let mut zeroed = bytes.clone();
    zeroed.fill_range(0, zeroed.len(), 0)?;
    println!("filled: {}", zeroed.to_hex());
    println!("compare(reversed, filled): {:?}", bytes.cmp(&zeroed));

    // Securely erase when the data was sensitive
    bytes.burn();
    println!("burned: {}", bytes.to_hex());

    Ok(())
}
