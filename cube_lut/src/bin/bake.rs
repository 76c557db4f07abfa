use anyhow::{Context, Error};
use clap::{App, Arg};
use image::{ImageBuffer, Rgba};
use std::fs;

fn main() -> Result<(), Error> {
	let matches = App::new("Bake LUT")
		.version("0.1")
		.arg(
			Arg::with_name("input")
				.short("i")
				.long("input")
				.help("Sets the input lut, only 3d .cube")
				.required(true)
				.index(1),
		)
		.arg(
			Arg::with_name("output")
				.short("o")
				.long("output")
				.default_value("output.png")
				.help("Sets the output image")
				.index(2),
		)
		.get_matches();

	env_logger::init();

	let input = matches.value_of("input").unwrap();
	let output = matches.value_of("output").unwrap();

	let text = fs::read_to_string(input)?;
	let baked = cube_lut::bake(text.as_bytes()).with_context(|| format!("parsing {}", input))?;

	// The tiled buffer is RGB floats; the PNG side gets 8-bit channels
	// with an opaque alpha.
	let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_fn(baked.width, baked.height, |x, y| {
		let c = baked.pixels[(x + y * baked.width) as usize];
		Rgba([to_u8(c.r), to_u8(c.g), to_u8(c.b), 255])
	});

	img.save(output)?;

	Ok(())
}

fn to_u8(v: f32) -> u8 {
	(v.max(0.0).min(1.0) * 255.0 + 0.5) as u8
}
