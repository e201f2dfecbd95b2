#![forbid(unsafe_code)]

//! # `templater`: frontend glue for the template binaries
//!
//! Loading and validation shared by the generator and checker frontends,
//! mirroring what the binary import side of an imaging tool checks before
//! accepting a template set: exact file sizes, a parseable material map,
//! and a map entry for every index the material volume uses.

extern crate matmap;
extern crate rawvol;
extern crate voxvol;

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use matmap::MaterialId;
use voxvol::{Extent, Volume, MAX_AXIS};

/// What a validated template set looks like from the outside: which
/// material indices the volume uses, how many cells each covers, and the
/// density range encountered.
pub struct TemplateReport {
	/// Per-material cell counts in index order, with the mapped name.
	pub census: Vec<(MaterialId, String, usize)>,
	pub density_min: f64,
	pub density_max: f64
}

/// Loads a template set from individual file paths and validates it.
/// Size mismatches, malformed map entries, and material indices without a
/// map entry all fail with `InvalidData`.
pub fn check_files(
	material_path: &Path, density_path: &Path, map_path: &Path, extent: Extent
) -> io::Result<TemplateReport> {
	let mut material_in = File::open(material_path)?;
	let materials = rawvol::read_u8_volume(&mut material_in, extent)?;

	let mut density_in = File::open(density_path)?;
	let densities = rawvol::read_f64_volume(&mut density_in, extent)?;

	let mut map_in = File::open(map_path)?;
	let map = rawvol::read_material_map(&mut map_in)?;

	let missing = map.missing_ids(materials.as_slice());

	if !missing.is_empty() {
		let listed: Vec<String> = missing.iter().map(|id| id.to_string()).collect();

		return Err(io::Error::new(
			io::ErrorKind::InvalidData,
			format!("material volume uses indices with no map entry: {}", listed.join(", "))
		));
	}

	let census = material_census(&materials)
		.into_iter()
		.map(|(id, cells)| {
			let name = map.get(id).map(|material| material.name().to_owned());

			// every used index was just checked against the map
			(id, name.unwrap_or_default(), cells)
		})
		.collect();

	let mut density_min = std::f64::INFINITY;
	let mut density_max = std::f64::NEG_INFINITY;

	for &density in densities.as_slice() {
		density_min = density_min.min(density);
		density_max = density_max.max(density);
	}

	Ok(TemplateReport { census, density_min, density_max })
}

/// Counts the cells covered by each material index present in the volume,
/// in index order.
pub fn material_census(materials: &Volume<u8>) -> Vec<(MaterialId, usize)> {
	let mut counts = [0usize; 256];

	for &cell in materials.as_slice() {
		counts[cell as usize] += 1;
	}

	(0..=255u8)
		.filter(|&index| counts[index as usize] > 0)
		.map(|index| (MaterialId::new(index), counts[index as usize]))
		.collect()
}

/// Argument validator for axis cell counts: a positive integer no larger
/// than `MAX_AXIS`.
pub fn validate_axis(value: String) -> Result<(), String> {
	match value.parse::<usize>() {
		Ok(0) => Err("zero values are not a valid argument".to_owned()),
		Ok(cells) if cells > MAX_AXIS => Err(format!("axis too large (maximum: {})", MAX_AXIS)),
		Ok(_) => Ok(()),
		Err(parse) => Err(parse.to_string())
	}
}

/// Microseconds elapsed since the given instant.
pub fn duration_us(start: &Instant) -> u64 {
	let time = start.elapsed();

	time.as_secs() * 1000000 + (time.subsec_nanos() / 1000) as u64
}
