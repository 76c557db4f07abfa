use super::{Color, CubeLut, ParseError, MAX_LUT_SIZE, MIN_LUT_SIZE};
use log::warn;
use std::io::{BufRead, BufReader, Read};

/// Parse a ".cube" 3D LUT. Directive lines (`TITLE`, `LUT_3D_SIZE`,
/// `DOMAIN_*`) come first by convention, then `size^3` rows of 3
/// whitespace-separated floats, red varying fastest. `#` starts a comment.
///
/// Fails fast on the first malformed line; no partial table is returned.
pub fn parse<I>(input: I) -> Result<CubeLut, ParseError>
where
	I: Read,
{
	let mut size: Option<u32> = None;
	let mut table: Vec<Color> = Vec::new();

	for (n, l) in BufReader::new(input).lines().enumerate() {
		let raw = l?;

		// Trim, then drop everything from the first '#' on.
		let line = raw.trim();
		let line = match line.find('#') {
			Some(p) => line[..p].trim_end(),
			None => line,
		};

		if line.is_empty() {
			continue;
		} else if line.starts_with("TITLE") {
			// informational only, value discarded
		} else if line.starts_with("LUT_3D_SIZE") {
			let u = line["LUT_3D_SIZE".len()..]
				.trim()
				.parse::<u32>()
				.map_err(|_| ParseError::MalformedSizeDirective { line: n })?;
			if !(MIN_LUT_SIZE..=MAX_LUT_SIZE).contains(&u) {
				return Err(ParseError::MalformedSizeDirective { line: n });
			}
			if let Some(old) = size {
				// A second directive silently wins, as in every consumer
				// of this format we know of.
				warn!("duplicate LUT_3D_SIZE on line {}: {} overwrites {}", n, u, old);
			}
			size = Some(u);
		} else if line.starts_with("DOMAIN_") {
			// domain bounds are not supported
		} else {
			let row: Vec<&str> = line.split_whitespace().collect();
			if row.len() != 3 {
				return Err(ParseError::MalformedDataRow { line: n });
			}

			let mut c = [0f32; 3];
			for (v, t) in c.iter_mut().zip(row.iter()) {
				*v = t
					.parse::<f32>()
					.map_err(|_| ParseError::MalformedDataRow { line: n })?;
			}
			table.push(Color::new(c[0], c[1], c[2]));
		}
	}

	let size = match size {
		Some(s) => s,
		None => {
			return Err(ParseError::TableSizeMismatch {
				expected: 0,
				got: table.len(),
			})
		}
	};

	let expected = (size * size * size) as usize;
	if table.len() < expected {
		return Err(ParseError::PrematureEndOfFile {
			expected,
			got: table.len(),
		});
	}
	if table.len() > expected {
		return Err(ParseError::TableSizeMismatch {
			expected,
			got: table.len(),
		});
	}

	Ok(CubeLut {
		size,
		colors: table,
	})
}
