use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use crate::{Material, MaterialId};

/// An ordered sequence of material definitions keyed by index. Entry order
/// is the order materials appear in the map file.
#[derive(Debug)]
pub struct MaterialMap {
	entries: Vec<(MaterialId, Material)>
}

impl MaterialMap {
	pub fn new() -> Self {
		MaterialMap { entries: Vec::new() }
	}

	/// Appends a material definition.
	/// # Panics
	/// If the index is already occupied.
	pub fn insert(&mut self, id: MaterialId, material: Material) {
		assert!(self.get(id).is_none(), "material index {} is already occupied", id);

		self.entries.push((id, material));
	}

	pub fn get(&self, id: MaterialId) -> Option<&Material> {
		self.entries
			.iter()
			.find(|(entry_id, _)| *entry_id == id)
			.map(|(_, material)| material)
	}

	pub fn entries(&self) -> &[(MaterialId, Material)] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn sort_by_id(&mut self) {
		self.entries.sort_by_key(|(id, _)| *id);
	}

	/// Renders the map in its file format: one `"<index>, <name>,
	/// <composition>"` line per entry, joined with `\n`, no trailing
	/// newline.
	pub fn to_text(&self) -> String {
		let lines: Vec<String> = self.entries
			.iter()
			.map(|(id, material)| format!("{}, {}, {}", id, material.name(), material.composition()))
			.collect();

		lines.join("\n")
	}

	/// Parses map text. Fields are comma separated with surrounding
	/// whitespace ignored; anything past the third field is ignored; blank
	/// lines are skipped. Entries end up sorted by index.
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		let mut map = MaterialMap::new();

		for (number, line) in text.lines().enumerate() {
			let line_number = number + 1;

			if line.trim().is_empty() {
				continue;
			}

			let fields: Vec<&str> = line.split(',').map(str::trim).collect();

			if fields.len() < 3 {
				return Err(ParseError::MissingFields { line: line_number });
			}

			let index = match fields[0].parse::<u8>() {
				Ok(index) => index,
				Err(_) => return Err(ParseError::BadIndex { line: line_number, field: fields[0].to_owned() })
			};

			let id = MaterialId::new(index);

			if map.get(id).is_some() {
				return Err(ParseError::DuplicateId { line: line_number, id });
			}

			let material = match Material::new(fields[1], fields[2]) {
				Some(material) => material,
				None => return Err(ParseError::BadComposition { line: line_number, composition: fields[2].to_owned() })
			};

			map.insert(id, material);
		}

		map.sort_by_id();

		Ok(map)
	}

	/// Distinct material indices that appear in the given cell buffer but
	/// have no entry in this map.
	pub fn missing_ids(&self, cells: &[u8]) -> Vec<MaterialId> {
		let mut missing = Vec::new();

		for index in used_indices(cells) {
			let id = MaterialId::new(index);

			if self.get(id).is_none() {
				missing.push(id);
			}
		}

		missing
	}

	/// Rewrites the indices used by the cell buffer to be consecutive
	/// starting at zero, updating both the buffer and the matching map
	/// entries. Map entries for indices the buffer never uses keep their
	/// indices.
	pub fn reindex(&mut self, cells: &mut [u8]) {
		for (position, old) in used_indices(cells).into_iter().enumerate() {
			// used_indices is ascending, so the target index never passes
			// old and the rewrite cannot collide with a later index
			let next = position as u8;

			if old != next {
				for cell in cells.iter_mut() {
					if *cell == old {
						*cell = next;
					}
				}

				for (id, _) in self.entries.iter_mut() {
					if id.index() == old {
						*id = MaterialId::new(next);
					}
				}
			}
		}
	}
}

fn used_indices(cells: &[u8]) -> Vec<u8> {
	let mut seen = [false; 256];

	for &cell in cells {
		seen[cell as usize] = true;
	}

	(0..=255).filter(|&index| seen[index as usize]).collect()
}

/// Failure to parse material map text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
	MissingFields { line: usize },
	BadIndex { line: usize, field: String },
	BadComposition { line: usize, composition: String },
	DuplicateId { line: usize, id: MaterialId }
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			ParseError::MissingFields { line } =>
				write!(f, "line {}: expected `index, name, composition`", line),
			ParseError::BadIndex { line, field } =>
				write!(f, "line {}: cannot parse material index from {:?}", line, field),
			ParseError::BadComposition { line, composition } =>
				write!(f, "line {}: invalid material composition {:?}", line, composition),
			ParseError::DuplicateId { line, id } =>
				write!(f, "line {}: material index {} is already occupied", line, id)
		}
	}
}

impl Error for ParseError {}

impl From<ParseError> for io::Error {
	fn from(error: ParseError) -> io::Error {
		io::Error::new(io::ErrorKind::InvalidData, error)
	}
}

#[cfg(test)]
mod test {
	use crate::{Material, MaterialId, MaterialMap, ParseError};

	fn two_materials() -> MaterialMap {
		let mut map = MaterialMap::new();

		map.insert(MaterialId::new(0), Material::new("Air", "N0.75O0.25").unwrap());
		map.insert(MaterialId::new(1), Material::new("Water", "H2O").unwrap());

		map
	}

	#[test]
	fn test_text_format() {
		assert_eq!(two_materials().to_text(), "0, Air, N0.75O0.25\n1, Water, H2O");
		assert_eq!(MaterialMap::new().to_text(), "");
	}

	#[test]
	fn test_parse_round_trip() {
		let text = "0, Air, N0.75O0.25\n1, Water, H2O";
		let map = MaterialMap::parse(text).unwrap();

		assert_eq!(map.len(), 2);
		assert_eq!(map.get(MaterialId::new(1)).unwrap().name(), "Water");
		assert_eq!(map.to_text(), text);
	}

	#[test]
	fn test_parse_tolerates_spacing_and_blank_lines() {
		let map = MaterialMap::parse("  1 ,  Water , H2O \n\n0, Air, N0.75O0.25\n").unwrap();

		// sorted by index after parsing
		assert_eq!(map.to_text(), "0, Air, N0.75O0.25\n1, Water, H2O");
	}

	#[test]
	fn test_parse_failures() {
		assert_eq!(
			MaterialMap::parse("0, Air").unwrap_err(),
			ParseError::MissingFields { line: 1 }
		);
		assert_eq!(
			MaterialMap::parse("0, Air, N0.75O0.25\nzero, Water, H2O").unwrap_err(),
			ParseError::BadIndex { line: 2, field: "zero".to_owned() }
		);
		assert_eq!(
			MaterialMap::parse("0, Goo, Zz9").unwrap_err(),
			ParseError::BadComposition { line: 1, composition: "Zz9".to_owned() }
		);
		assert_eq!(
			MaterialMap::parse("0, Air, N0.75O0.25\n0, Water, H2O").unwrap_err(),
			ParseError::DuplicateId { line: 2, id: MaterialId::new(0) }
		);
	}

	#[test]
	fn test_missing_ids() {
		let map = two_materials();

		assert!(map.missing_ids(&[0, 1, 1, 0]).is_empty());
		assert_eq!(map.missing_ids(&[0, 3, 1, 7]), vec![MaterialId::new(3), MaterialId::new(7)]);
	}

	#[test]
	fn test_reindex() {
		let mut map = MaterialMap::new();

		map.insert(MaterialId::new(2), Material::new("Air", "N0.75O0.25").unwrap());
		map.insert(MaterialId::new(5), Material::new("Water", "H2O").unwrap());

		let mut cells = [2, 5, 2, 2, 5];

		map.reindex(&mut cells);

		assert_eq!(cells, [0, 1, 0, 0, 1]);
		assert_eq!(map.get(MaterialId::new(0)).unwrap().name(), "Air");
		assert_eq!(map.get(MaterialId::new(1)).unwrap().name(), "Water");
	}
}
