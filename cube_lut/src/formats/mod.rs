use std::{error, fmt, io};

mod cube;
pub use cube::parse as cube;

/// One RGB sample of the lookup table. The .cube format carries no alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const BLACK: Color = Color {
		r: 0.0,
		g: 0.0,
		b: 0.0,
	};

	pub fn new(r: f32, g: f32, b: f32) -> Self {
		Color { r, g, b }
	}
}

/// A parsed 3D LUT: the declared cube edge length plus `size^3` colors in
/// file order, red channel varying fastest.
#[derive(Debug, Clone)]
pub struct CubeLut {
	pub size: u32,
	pub colors: Vec<Color>,
}

/// Smallest cube edge length accepted by the parser.
pub const MIN_LUT_SIZE: u32 = 16;
/// Largest cube edge length accepted by the parser.
pub const MAX_LUT_SIZE: u32 = 128;

/// Parse failure. Line numbers are 0-based indices into the input.
#[derive(Debug)]
pub enum ParseError {
	Io(io::Error),
	/// `LUT_3D_SIZE` value missing, not an integer, or outside [16,128].
	MalformedSizeDirective { line: usize },
	/// A data row did not yield exactly 3 whitespace-separated floats.
	MalformedDataRow { line: usize },
	/// Row count does not match `size^3` at end of input. `expected` is 0
	/// when no valid size directive was ever seen.
	TableSizeMismatch { expected: usize, got: usize },
	/// Input ran out before `size^3` rows were read.
	PrematureEndOfFile { expected: usize, got: usize },
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ParseError::Io(e) => write!(f, "read error: {}", e),
			ParseError::MalformedSizeDirective { line } => {
				write!(f, "invalid LUT_3D_SIZE on line {}", line)
			}
			ParseError::MalformedDataRow { line } => write!(f, "invalid data on line {}", line),
			ParseError::TableSizeMismatch { expected, got } => write!(
				f,
				"wrong table size, expected {} elements, got {}",
				expected, got
			),
			ParseError::PrematureEndOfFile { expected, got } => write!(
				f,
				"premature end of file, expected {} elements, got {}",
				expected, got
			),
		}
	}
}

impl error::Error for ParseError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			ParseError::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for ParseError {
	fn from(e: io::Error) -> Self {
		ParseError::Io(e)
	}
}
