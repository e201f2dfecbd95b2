use cgmath::{InnerSpace, Vector3};
use voxvol::VolumeMask;

/// A solid sphere over cell coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereSettings {
	pub center: Vector3<f64>,
	pub radius: f64
}

impl SphereSettings {
	/// Whether a cell lies strictly inside the sphere: squared distance
	/// from the cell coordinate to the center, compared against radius²
	/// with `<`. A cell exactly on the surface is outside.
	///
	/// Cell coordinates are small integers, exactly representable in f64,
	/// so for integer centers and radii the comparison is exact.
	pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
		let delta = Vector3::new(x as f64, y as f64, z as f64) - self.center;

		delta.magnitude2() < self.radius * self.radius
	}

	/// Marks every cell of the grid that lies inside the sphere. Cells
	/// outside the sphere are left as they are.
	pub fn stamp(&self, mask: &mut VolumeMask) {
		let extent = mask.extent();

		for x in 0..extent.x() {
			for y in 0..extent.y() {
				for z in 0..extent.z() {
					if self.contains(x, y, z) {
						mask.set(x, y, z, true);
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use cgmath::Vector3;
	use voxvol::{Extent, VolumeMask};

	use crate::sphere::SphereSettings;

	fn sphere(center: f64, radius: f64) -> SphereSettings {
		SphereSettings { center: Vector3::new(center, center, center), radius }
	}

	#[test]
	fn test_boundary_is_outside() {
		let sphere = sphere(4.0, 2.0);

		assert!(sphere.contains(4, 4, 4));
		assert!(sphere.contains(5, 4, 4));

		// exactly on the surface
		assert!(!sphere.contains(6, 4, 4));
		assert!(!sphere.contains(4, 2, 4));

		assert!(!sphere.contains(6, 6, 6));
	}

	#[test]
	fn test_stamp_matches_membership() {
		let extent = Extent::cube(9).unwrap();
		let sphere = sphere(4.0, 2.0);
		let mut mask = VolumeMask::empty(extent);

		sphere.stamp(&mut mask);

		let mut inside = 0;

		for (x, y, z) in extent.positions() {
			assert_eq!(mask.get(x, y, z), sphere.contains(x, y, z));

			if mask.get(x, y, z) {
				inside += 1;
			}
		}

		assert_eq!(mask.count_ones(), inside);

		// the center cell and its six face neighbors are all inside
		assert!(inside >= 7);
	}
}
