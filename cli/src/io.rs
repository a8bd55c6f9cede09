//! File plumbing: read-only mapped input, whole-buffer output.

use std::fs::{self, File};
use std::io;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

/// Input bytes, memory-mapped when the file is non-empty.
pub enum InputBuffer {
    Mapped(Mmap),
    Empty,
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputBuffer::Mapped(map) => &map[..],
            InputBuffer::Empty => &[],
        }
    }
}

pub fn read_input(path: &Path) -> io::Result<InputBuffer> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        // Zero-length mappings are rejected by the OS.
        return Ok(InputBuffer::Empty);
    }
    // SAFETY: read-only map; the file must not be truncated while the map is alive.
    let map = unsafe { Mmap::map(&file)? };
    Ok(InputBuffer::Mapped(map))
}

pub fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
