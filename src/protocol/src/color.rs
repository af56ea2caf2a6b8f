use serde::{Deserialize, Serialize};

// 0xAARRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
	pub const DEFAULT_FILL: Color = Color(0xFF9FD867);
	pub const DEFAULT_BACKGROUND: Color = Color(0xFFFFFFFF);

	pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
		Self(
			(a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
		)
	}

	pub fn a(&self) -> u8 {
		(self.0 >> 24) as u8
	}

	pub fn r(&self) -> u8 {
		(self.0 >> 16) as u8
	}

	pub fn g(&self) -> u8 {
		(self.0 >> 8) as u8
	}

	pub fn b(&self) -> u8 {
		self.0 as u8
	}
}

fn shift_channel(base: u8, delta: f64) -> u8 {
	(base as f64 + delta).clamp(0.0, 255.0) as u8
}

// tension goes red, compression goes blue, channels saturate
pub fn stress_color(base: Color, stress: f64) -> Color {
	if !stress.is_finite() {
		return base;
	}
	let s = stress.abs();
	let (dr, db) = if stress >= 0.0 {
		(50.0 * s, 10.0 * s)
	} else {
		(10.0 * s, 50.0 * s)
	};
	Color::from_argb(
		base.a(),
		shift_channel(base.r(), dr),
		shift_channel(base.g(), -10.0 * s),
		shift_channel(base.b(), db),
	)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_channels() {
		let c = Color::DEFAULT_FILL;
		assert_eq!(c.a(), 0xFF);
		assert_eq!(c.r(), 0x9F);
		assert_eq!(c.g(), 0xD8);
		assert_eq!(c.b(), 0x67);
		assert_eq!(Color::from_argb(0xFF, 0x9F, 0xD8, 0x67), c);
	}

	#[test]
	fn test_zero_stress_keeps_base() {
		assert_eq!(stress_color(Color::DEFAULT_FILL, 0.0), Color::DEFAULT_FILL);
	}

	#[test]
	fn test_sign_picks_hue() {
		let base = Color::from_argb(0xFF, 100, 100, 100);
		let tension = stress_color(base, 1.0);
		let compression = stress_color(base, -1.0);
		assert_eq!((tension.r(), tension.g(), tension.b()), (150, 90, 110));
		assert_eq!(
			(compression.r(), compression.g(), compression.b()),
			(110, 90, 150)
		);
	}

	#[test]
	fn test_saturation() {
		let c = stress_color(Color::DEFAULT_FILL, 1e6);
		assert_eq!(c.r(), 255);
		assert_eq!(c.g(), 0);
		assert_eq!(c.b(), 255);
		assert_eq!(c.a(), 0xFF);
		assert_eq!(stress_color(Color::DEFAULT_FILL, f64::NAN), Color::DEFAULT_FILL);
	}
}
