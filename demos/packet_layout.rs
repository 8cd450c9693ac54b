// demos/packet_layout.rs
//! Compiled layouts: one offset computation, many record buffers

use rawbuf::prelude::*;

fn main() -> Result<()> {
    println!("=== Compiled Record Layout ===\n");

    // Compile once, reuse forever
    let layout = Layout::compile([
        ("id", ScalarKind::U32),
        ("temperature", ScalarKind::F32),
        ("humidity", ScalarKind::F32),
        ("status", ScalarKind::U8),
    ])?;

    println!("Record size: {} bytes", layout.size());
    for field in layout.fields() {
        println!(
            "  {:<12} {:?} @ offset {}",
            field.name(),
            field.kind(),
            field.offset()
        );
    }

    println!("\n=== Writing Records ===\n");

    let mut records = Vec::new();
    for i in 0..5u32 {
        let mut rec = layout.alloc();
        unsafe {
            layout.set(&mut rec, "id", Scalar::U32(i))?;
            layout.set(&mut rec, "temperature", Scalar::F32(19.5 + i as f32))?;
            layout.set(&mut rec, "humidity", Scalar::F32(0.55))?;
            layout.set(&mut rec, "status", Scalar::U8(if i % 2 == 0 { 1 } else { 0 }))?;
        }
        records.push(rec);
    }

    for rec in &records {
        unsafe {
            println!(
                "id={:?} temperature={:?} status={:?}",
                layout.get(rec, "id")?,
                layout.get(rec, "temperature")?,
                layout.get(rec, "status")?
            );
        }
    }

    println!("\n=== Checked Access ===\n");

    let mut rec = layout.alloc();

    // Wrong kind and unknown name fail loudly on the checked tier
    let err = layout.try_set(&mut rec, "id", Scalar::F64(1.0)).unwrap_err();
    println!("kind mismatch: {}", err);

    let err = layout.try_get(&rec, "velocity").unwrap_err();
    println!("unknown field: {}", err);

    layout.try_set(&mut rec, "id", Scalar::U32(99))?;
    println!("id after checked set: {:?}", layout.try_get(&rec, "id")?);

    Ok(())
}
