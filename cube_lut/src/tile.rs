use crate::formats::Color;

/// A cube repacked for 2D sampling: `width = size*size`, `height = size`,
/// one `size`-by-`size` tile per Z slice, laid out left to right.
#[derive(Debug, Clone)]
pub struct TiledImage {
	pub width: u32,
	pub height: u32,
	pub pixels: Vec<Color>,
}

/// Repack `size^3` colors (red varying fastest) into a [`TiledImage`].
///
/// Callers must pass exactly `size^3` colors; the parser guarantees this
/// and the invariant is not re-checked in release builds. The remap is a
/// bijection, so every destination pixel is written exactly once.
pub fn tile(size: u32, colors: &[Color]) -> TiledImage {
	let size = size as usize;
	let width = size * size;
	debug_assert_eq!(colors.len(), width * size);

	let mut pixels = vec![Color::BLACK; width * size];
	for (i, c) in colors.iter().enumerate() {
		let x = i % size;
		let y = (i / size) % size;
		let z = i / (size * size);

		// Each new Z slice shifts X right by one full tile.
		let target_x = x + z * size;

		pixels[target_x + y * width] = *c;
	}

	TiledImage {
		width: width as u32,
		height: size as u32,
		pixels,
	}
}
