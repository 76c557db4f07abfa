use std::slice;

/// Parse the .cube text in `data` and return the declared cube size, or a
/// negative code if the text does not parse. Lets callers size the pixel
/// buffer before calling [`cube_lut_bake`].
#[no_mangle]
pub extern "C" fn cube_lut_size(data: *const u8, data_len: u64) -> i64 {
	let d = unsafe { slice::from_raw_parts(data, data_len as usize) };
	match cube_lut::cube(d) {
		Ok(lut) => lut.size as i64,
		Err(_) => -1,
	}
}

/// Parse the .cube text in `data`, repack it into the 2D tiled layout and
/// write the result through the out-pointers. `pixels` must hold at least
/// `size*size * size * 3` floats (`pixels_len` counts floats); `width` and
/// `height` receive the tiled image dimensions. Returns 0 on success,
/// negative on failure.
#[no_mangle]
pub extern "C" fn cube_lut_bake(
	data: *const u8,
	data_len: u64,
	width: *mut u32,
	height: *mut u32,
	pixels: *mut f32,
	pixels_len: u64,
) -> isize {
	let d = unsafe { slice::from_raw_parts(data, data_len as usize) };

	let baked = match cube_lut::bake(d) {
		Ok(b) => b,
		Err(_) => return -1,
	};

	if (pixels_len as usize) < baked.pixels.len() * 3 {
		return -2;
	}

	let out = unsafe { slice::from_raw_parts_mut(pixels, pixels_len as usize) };
	for (dst, c) in out.chunks_mut(3).zip(baked.pixels.iter()) {
		dst[0] = c.r;
		dst[1] = c.g;
		dst[2] = c.b;
	}

	unsafe {
		*width = baked.width;
		*height = baked.height;
	}

	0
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cube_text(size: u32) -> String {
		let count = size * size * size;
		let mut s = format!("LUT_3D_SIZE {}\n", size);
		for i in 0..count {
			s.push_str(&format!("{} 0.0 1.0\n", i as f32 / count as f32));
		}
		s
	}

	#[test]
	fn size_then_bake() {
		let text = cube_text(16);
		let size = cube_lut_size(text.as_ptr(), text.len() as u64);
		assert_eq!(size, 16);

		let n = (size * size * size) as usize;
		let mut pixels = vec![0f32; n * 3];
		let (mut w, mut h) = (0u32, 0u32);
		let rc = cube_lut_bake(
			text.as_ptr(),
			text.len() as u64,
			&mut w,
			&mut h,
			pixels.as_mut_ptr(),
			pixels.len() as u64,
		);
		assert_eq!(rc, 0);
		assert_eq!((w, h), (256, 16));
		// Source 0 stays at destination 0.
		assert_eq!(&pixels[0..3], &[0.0, 0.0, 1.0]);
	}

	#[test]
	fn rejects_malformed_input() {
		let text = "LUT_3D_SIZE 4\n";
		assert_eq!(cube_lut_size(text.as_ptr(), text.len() as u64), -1);

		let mut pixels = vec![0f32; 16];
		let (mut w, mut h) = (0u32, 0u32);
		let rc = cube_lut_bake(
			text.as_ptr(),
			text.len() as u64,
			&mut w,
			&mut h,
			pixels.as_mut_ptr(),
			pixels.len() as u64,
		);
		assert_eq!(rc, -1);
	}

	#[test]
	fn rejects_short_pixel_buffer() {
		let text = cube_text(16);
		let mut pixels = vec![0f32; 16];
		let (mut w, mut h) = (0u32, 0u32);
		let rc = cube_lut_bake(
			text.as_ptr(),
			text.len() as u64,
			&mut w,
			&mut h,
			pixels.as_mut_ptr(),
			pixels.len() as u64,
		);
		assert_eq!(rc, -2);
	}
}
