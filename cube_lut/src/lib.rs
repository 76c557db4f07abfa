mod formats;
mod tile;

pub use formats::{cube, Color, CubeLut, ParseError, MAX_LUT_SIZE, MIN_LUT_SIZE};
pub use tile::{tile, TiledImage};

use std::io::Read;

/// Parse a ".cube" LUT and repack it into a 2D tiled image in one call.
///
/// The whole pipeline is pure and synchronous; it either returns the
/// finished image or the first error, never a partial result.
pub fn bake<I: Read>(input: I) -> Result<TiledImage, ParseError> {
	let lut = formats::cube(input)?;
	Ok(tile::tile(lut.size, &lut.colors))
}
