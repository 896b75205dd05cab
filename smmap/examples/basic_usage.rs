//! Map a scratch file as 32-bit integers and exercise reads, writes and ranges

use smmap::{file_io, FormatCode, MapOptions, SmmapError};
use std::time::Instant;

fn main() -> smmap::Result<()> {
    let path = std::env::temp_dir().join("smmap_basic_usage.bin");
    let count = 1_000_000;

    let start = Instant::now();
    file_io::create_backing_file(&path, count, FormatCode::I32, 0)?;
    let mut view = file_io::open_path(&path, count, FormatCode::I32, &MapOptions::read_write())?;
    println!("Mapped {count} x 'i' in {:?}", start.elapsed());

    let start = Instant::now();
    let values: Vec<i32> = (0..count as i32).collect();
    view.set_slice(0, count as isize, &values)?;
    println!("Wrote {count} elements in {:?}", start.elapsed());

    view.set_item(0, i32::MAX)?;
    match view.set_item(0, i32::MAX as i64 + 1) {
        Err(err) if err.as_core() == Some(SmmapError::ValueOutOfRange { code: FormatCode::I32 }) => {
            println!("Rejected out-of-range value: {err}");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    println!("First five: {:?}", view.get_slice(0, 5)?);
    println!("Negative low bound clamps to 0: {:?}", view.get_slice(-10, 2)?);

    let sum: i64 = view.as_typed::<i32>()?.iter().map(|&v| v as i64).sum();
    println!("Sum via zero-copy slice: {sum}");

    view.close();
    println!("After close: {}", view.len().unwrap_err());

    std::fs::remove_file(&path)?;
    Ok(())
}
