use std::fs::File;
use std::io;
use std::path::Path;

use cgmath::Vector3;
use matmap::{Material, MaterialId, MaterialMap};
use voxvol::{Extent, Volume, VolumeMask};

use crate::sphere::SphereSettings;

/// Cells along each axis of the template volume.
pub const DIM: usize = 256;

/// Material index of the air background.
pub const AIR: MaterialId = MaterialId::new(0);
/// Material index of the water sphere.
pub const WATER: MaterialId = MaterialId::new(1);

/// Mass density of air, in g/cm³.
pub const AIR_DENSITY: f64 = 0.001225;
/// Mass density of water, in g/cm³.
pub const WATER_DENSITY: f64 = 1.0;

pub const MATERIAL_FILE: &str = "materialTemplate.dat";
pub const DENSITY_FILE: &str = "densityTemplate.dat";
pub const MATERIAL_MAP_FILE: &str = "materialMapTemplate.dat";

/// A complete template dataset: co-indexed material and density volumes
/// plus the map naming the material indices.
pub struct TemplateSet {
	pub materials: Volume<u8>,
	pub densities: Volume<f64>,
	pub map: MaterialMap
}

/// Builds the water-sphere template: a sphere of water, radius `DIM / 4`,
/// centered in a `DIM`³ volume of air. Cells exactly on the sphere surface
/// are air. The density volume is filled with the air density first, then
/// the sphere cells are overwritten with the water density.
pub fn water_sphere() -> TemplateSet {
	let extent = Extent::cube(DIM).unwrap();
	let center = (DIM / 2) as f64;

	let sphere = SphereSettings {
		center: Vector3::new(center, center, center),
		radius: (DIM / 4) as f64
	};

	let mut inside = VolumeMask::empty(extent);

	sphere.stamp(&mut inside);

	let mut materials = Volume::filled(extent, AIR.index());

	materials.set_where(&inside, WATER.index());

	let mut densities = Volume::filled(extent, AIR_DENSITY);

	densities.set_where(&inside, WATER_DENSITY);

	TemplateSet { materials, densities, map: water_sphere_map() }
}

/// The two-entry material map of the water-sphere template, air first.
pub fn water_sphere_map() -> MaterialMap {
	let mut map = MaterialMap::new();

	map.insert(AIR, Material::new("Air", "N0.75O0.25").unwrap());
	map.insert(WATER, Material::new("Water", "H2O").unwrap());

	map
}

impl TemplateSet {
	/// Writes the three template files into the given directory, truncating
	/// any existing files: the material volume, the density volume, then
	/// the material map. A failure partway through leaves already-written
	/// files in place.
	pub fn write_to_dir(&self, dir: &Path) -> io::Result<()> {
		let mut material_out = File::create(dir.join(MATERIAL_FILE))?;

		rawvol::write_u8_volume(&self.materials, &mut material_out)?;

		let mut density_out = File::create(dir.join(DENSITY_FILE))?;

		rawvol::write_f64_volume(&self.densities, &mut density_out)?;

		let mut map_out = File::create(dir.join(MATERIAL_MAP_FILE))?;

		rawvol::write_material_map(&self.map, &mut map_out)
	}

	/// Reads a template set of the given extent back from a directory,
	/// validating the file sizes against the extent and parsing the
	/// material map.
	pub fn read_from_dir(dir: &Path, extent: Extent) -> io::Result<TemplateSet> {
		let mut material_in = File::open(dir.join(MATERIAL_FILE))?;
		let materials = rawvol::read_u8_volume(&mut material_in, extent)?;

		let mut density_in = File::open(dir.join(DENSITY_FILE))?;
		let densities = rawvol::read_f64_volume(&mut density_in, extent)?;

		let mut map_in = File::open(dir.join(MATERIAL_MAP_FILE))?;
		let map = rawvol::read_material_map(&mut map_in)?;

		Ok(TemplateSet { materials, densities, map })
	}
}

#[cfg(test)]
mod test {
	use cgmath::Vector3;

	use crate::sphere::SphereSettings;
	use crate::template::{
		water_sphere, water_sphere_map, AIR, AIR_DENSITY, DIM, WATER, WATER_DENSITY
	};

	#[test]
	fn test_map_text() {
		assert_eq!(water_sphere_map().to_text(), "0, Air, N0.75O0.25\n1, Water, H2O");
	}

	#[test]
	fn test_water_sphere_template() {
		let set = water_sphere();
		let extent = set.materials.extent();

		assert_eq!(extent.cells(), DIM * DIM * DIM);
		assert_eq!(set.densities.extent(), extent);

		let sphere = SphereSettings {
			center: Vector3::new(128.0, 128.0, 128.0),
			radius: 64.0
		};

		let materials = set.materials.as_slice();
		let densities = set.densities.as_slice();

		let mut water_cells = 0;

		for (offset, (x, y, z)) in extent.positions().enumerate() {
			let material = materials[offset];
			let density = densities[offset];

			// two-material dataset with exact densities, co-indexed
			match material {
				0 => assert_eq!(density, AIR_DENSITY),
				1 => assert_eq!(density, WATER_DENSITY),
				other => panic!("unexpected material index {}", other)
			}

			// the water region is exactly the strict sphere interior
			assert_eq!(material == 1, sphere.contains(x, y, z));

			if material == 1 {
				water_cells += 1;
			}
		}

		// strictly fewer cells than the enclosing cube of side 2 * radius
		assert!(water_cells > 0);
		assert!(water_cells < 128 * 128 * 128);

		// cells on the surface itself are air
		assert_eq!(set.materials[(192, 128, 128)], 0);
		assert_eq!(set.materials[(191, 128, 128)], 1);
		assert_eq!(set.densities[(192, 128, 128)], AIR_DENSITY);
		assert_eq!(set.densities[(191, 128, 128)], WATER_DENSITY);

		assert!(set.map.get(AIR).is_some());
		assert!(set.map.get(WATER).is_some());
		assert!(set.map.missing_ids(materials).is_empty());
	}

	#[test]
	fn test_deterministic() {
		let first = water_sphere();
		let second = water_sphere();

		assert_eq!(first.materials.as_slice(), second.materials.as_slice());
		assert_eq!(first.densities.as_slice(), second.densities.as_slice());
		assert_eq!(first.map.to_text(), second.map.to_text());
	}
}
