use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub pos: V2,
	// spawn position, target of the anchoring force
	pub pinned_pos: V2,
	pub veloc: V2,
	pub accel: V2,
}

impl Default for Node {
	fn default() -> Self {
		Self::new(V2::zeros())
	}
}

impl Node {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			pinned_pos: pos,
			veloc: V2::zeros(),
			accel: V2::zeros(),
		}
	}

	pub fn add_accel(&mut self, da: V2) {
		self.accel += da;
	}

	pub fn reset_accel(&mut self) {
		self.accel = V2::zeros();
	}

	// place the node and pin it there, dropping any motion
	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.pinned_pos = p;
		self.veloc = V2::zeros();
		self.accel = V2::zeros();
	}

	pub fn kinetic_energy(&self, mass: f64) -> f64 {
		0.5 * mass * self.veloc.norm_squared()
	}

	pub fn render(&self) -> [f64; 2] {
		[self.pos[0], self.pos[1]]
	}
}
