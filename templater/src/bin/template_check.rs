extern crate clap;
extern crate templater;
extern crate voxvol;

use clap::{App, Arg};
use std::path::Path;
use std::process;
use std::str::FromStr;

use templater::{check_files, validate_axis};
use voxvol::Extent;

fn main() {
	let matches = App::new("Template Checker")
		.version("0.1.0")
		.about("Validates a binary-import template set: file sizes against the volume dimensions, the material map, and index coverage")
		.arg(Arg::with_name("material")
			.short("m")
			.long("material")
			.value_name("FILE")
			.help("Path to the material index volume (1 byte per cell)")
			.takes_value(true)
			.required(true)
		)
		.arg(Arg::with_name("density")
			.short("d")
			.long("density")
			.value_name("FILE")
			.help("Path to the density volume (8 bytes per cell, little-endian doubles)")
			.takes_value(true)
			.required(true)
		)
		.arg(Arg::with_name("map")
			.long("map")
			.value_name("FILE")
			.help("Path to the material map text file")
			.takes_value(true)
			.required(true)
		)
		.arg(Arg::with_name("dim-x")
			.long("dim-x")
			.value_name("CELLS")
			.help("Cell count along the X axis")
			.default_value("256")
			.validator(validate_axis)
		)
		.arg(Arg::with_name("dim-y")
			.long("dim-y")
			.value_name("CELLS")
			.help("Cell count along the Y axis")
			.default_value("256")
			.validator(validate_axis)
		)
		.arg(Arg::with_name("dim-z")
			.long("dim-z")
			.value_name("CELLS")
			.help("Cell count along the Z axis")
			.default_value("256")
			.validator(validate_axis)
		)
		.get_matches();

	let axis = |name: &str| usize::from_str(matches.value_of(name).unwrap()).unwrap();

	// the validator already bounded each axis
	let extent = Extent::new(axis("dim-x"), axis("dim-y"), axis("dim-z")).unwrap();

	let material = Path::new(matches.value_of("material").unwrap());
	let density = Path::new(matches.value_of("density").unwrap());
	let map = Path::new(matches.value_of("map").unwrap());

	println!("[=======] Checking template set against {} cells", extent);

	let report = match check_files(material, density, map, extent) {
		Ok(report) => report,
		Err(error) => {
			println!("error: {}", error);
			process::exit(1);
		}
	};

	for (id, name, cells) in &report.census {
		let percentage = (*cells as f64 / extent.cells() as f64) * 100.0;

		println!("[{:6.2}%] Material {}: {} | {} cell(s)", percentage, id, name, cells);
	}

	println!("[=======] Density range: {} to {} g/cm3", report.density_min, report.density_max);
	println!("[=======] Template set OK");
}
