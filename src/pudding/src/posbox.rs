use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f64,
	pub xmax: f64,
	pub ymin: f64,
	pub ymax: f64,
}

impl Default for Posbox {
	fn default() -> Self {
		Self {
			xmin: 0.,
			xmax: 480.,
			ymin: 0.,
			ymax: 800.,
		}
	}
}

impl Posbox {
	pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
		Self {
			xmin: xmin.min(xmax),
			xmax: xmin.max(xmax),
			ymin: ymin.min(ymax),
			ymax: ymin.max(ymax),
		}
	}

	pub fn center(&self) -> V2 {
		V2::new((self.xmin + self.xmax) / 2., (self.ymin + self.ymax) / 2.)
	}

	// clamp pos into the box, reports which axes were hit
	pub fn apply(&self, pos: &mut V2) -> [bool; 2] {
		let mut flag = [false; 2];
		for (axis, (min, max)) in
			[(self.xmin, self.xmax), (self.ymin, self.ymax)].into_iter().enumerate()
		{
			if pos[axis] < min {
				pos[axis] = min;
				flag[axis] = true;
			} else if pos[axis] > max {
				pos[axis] = max;
				flag[axis] = true;
			}
		}
		flag
	}
}
