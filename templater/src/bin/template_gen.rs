extern crate phantom;
extern crate templater;

use std::io;
use std::path::Path;
use std::time::Instant;

use templater::duration_us;

fn main() -> io::Result<()> {
	println!("[=======] Building water sphere template ({0} x {0} x {0} cells)", phantom::DIM);

	let build_start = Instant::now();
	let set = phantom::water_sphere();
	let build_us = duration_us(&build_start);

	println!("[=======] Build complete in {:.3}ms", (build_us as f64) / 1000.0);
	println!(
		"[=======] Writing {}, {}, {}",
		phantom::MATERIAL_FILE,
		phantom::DENSITY_FILE,
		phantom::MATERIAL_MAP_FILE
	);

	let write_start = Instant::now();

	set.write_to_dir(Path::new("."))?;

	let write_us = duration_us(&write_start);

	println!("[=======] Writing complete in {:.3}ms", (write_us as f64) / 1000.0);

	Ok(())
}
