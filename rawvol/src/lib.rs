#![forbid(unsafe_code)]

//! # `rawvol`: flat raw binary volume files
//!
//! The simplest possible volume interchange format: one element per cell in
//! the volume's row-major storage order, nothing else. `u8` volumes are the
//! raw bytes; `f64` volumes are IEEE-754 doubles, 8 bytes per cell,
//! little-endian. A file's size therefore always equals
//! `cells * size_of::<Element>()`, and readers treat any other size as
//! corrupt. The material map travels as a separate text file.

extern crate matmap;
extern crate voxvol;

use std::io::{self, Read, Write};

use matmap::MaterialMap;
use voxvol::{Extent, Volume};

// Encoded bytes buffered per write when an element type needs conversion
const WRITE_CHUNK: usize = 8192;

/// Writes the raw cell bytes of a u8 volume.
pub fn write_u8_volume<W: Write>(volume: &Volume<u8>, out: &mut W) -> io::Result<()> {
	out.write_all(volume.as_slice())
}

/// Writes an f64 volume as little-endian doubles, 8 bytes per cell.
pub fn write_f64_volume<W: Write>(volume: &Volume<f64>, out: &mut W) -> io::Result<()> {
	let mut buffer = Vec::with_capacity(WRITE_CHUNK);

	for &value in volume.as_slice() {
		buffer.extend_from_slice(&value.to_le_bytes());

		if buffer.len() >= WRITE_CHUNK {
			out.write_all(&buffer)?;
			buffer.clear();
		}
	}

	if !buffer.is_empty() {
		out.write_all(&buffer)?;
	}

	Ok(())
}

/// Reads a u8 volume of the given extent, rejecting streams whose length
/// does not match the extent.
pub fn read_u8_volume<R: Read>(input: &mut R, extent: Extent) -> io::Result<Volume<u8>> {
	let bytes = read_exact_len(input, extent.cells())?;

	Ok(Volume::from_raw(bytes.into_boxed_slice(), extent))
}

/// Reads an f64 volume of the given extent, rejecting streams whose length
/// does not match the extent.
pub fn read_f64_volume<R: Read>(input: &mut R, extent: Extent) -> io::Result<Volume<f64>> {
	let bytes = read_exact_len(input, extent.cells() * 8)?;
	let mut cells = Vec::with_capacity(extent.cells());

	for chunk in bytes.chunks_exact(8) {
		let mut raw = [0u8; 8];

		raw.copy_from_slice(chunk);
		cells.push(f64::from_le_bytes(raw));
	}

	Ok(Volume::from_raw(cells.into_boxed_slice(), extent))
}

/// Writes a material map in its text format, newline-joined lines with no
/// trailing newline.
pub fn write_material_map<W: Write>(map: &MaterialMap, out: &mut W) -> io::Result<()> {
	out.write_all(map.to_text().as_bytes())
}

/// Reads and parses a material map text file. Invalid UTF-8 and malformed
/// entries both surface as `InvalidData`.
pub fn read_material_map<R: Read>(input: &mut R) -> io::Result<MaterialMap> {
	let mut text = String::new();

	input.read_to_string(&mut text)?;

	MaterialMap::parse(&text).map_err(io::Error::from)
}

fn read_exact_len<R: Read>(input: &mut R, len: usize) -> io::Result<Vec<u8>> {
	let mut bytes = vec![0; len];

	input.read_exact(&mut bytes).map_err(|error| match error.kind() {
		io::ErrorKind::UnexpectedEof => io::Error::new(
			io::ErrorKind::InvalidData,
			"volume dimensions and stream length do not match: stream too short"
		),
		_ => error
	})?;

	let mut trailing = [0; 1];

	if input.read(&mut trailing)? != 0 {
		return Err(io::Error::new(
			io::ErrorKind::InvalidData,
			"volume dimensions and stream length do not match: trailing data"
		));
	}

	Ok(bytes)
}
