use crate::node_ring::NodeRing;
use crate::posbox::Posbox;

// explicit euler, dt = 1
pub struct Integrator {
	damping_factor: f64,
	posbox: Posbox,
}

impl Integrator {
	pub fn new(damping_factor: f64, posbox: Posbox) -> Self {
		Self {
			damping_factor,
			posbox,
		}
	}

	// damping acts on the velocity after acceleration was added
	pub fn update_velocity(&self, ring: &mut NodeRing) {
		for node in ring.nodes_mut() {
			node.veloc += node.accel;
			node.veloc *= self.damping_factor;
		}
	}

	// walls are fully inelastic: the hit axis stops dead, no bounce
	pub fn update_position(&self, ring: &mut NodeRing) {
		for node in ring.nodes_mut() {
			node.pos += node.veloc;
			let hit = self.posbox.apply(&mut node.pos);
			for axis in 0..2 {
				if hit[axis] {
					node.veloc[axis] = 0.;
				}
			}
		}
	}

	pub fn step(&self, ring: &mut NodeRing) {
		self.update_velocity(ring);
		self.update_position(ring);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V2;
	use approx::assert_relative_eq;

	#[test]
	fn test_damping_after_accel() {
		let mut ring = NodeRing::new(3, 1., V2::zeros());
		ring.nodes_mut()[0].veloc = V2::new(1., 0.);
		ring.nodes_mut()[0].accel = V2::new(1., 2.);
		let integrator = Integrator::new(0.5, Posbox::new(-10., -10., 10., 10.));
		integrator.update_velocity(&mut ring);
		assert_relative_eq!(ring.nodes()[0].veloc[0], 1.);
		assert_relative_eq!(ring.nodes()[0].veloc[1], 1.);
	}

	#[test]
	fn test_wall_stops_axis() {
		let mut ring = NodeRing::new(3, 1., V2::zeros());
		// node 0 sits at (1, 0)
		ring.nodes_mut()[0].veloc = V2::new(20., 0.5);
		ring.nodes_mut()[1].veloc = V2::new(0., -30.);
		let integrator = Integrator::new(0.5, Posbox::new(-10., -10., 10., 10.));
		integrator.update_position(&mut ring);
		let node = &ring.nodes()[0];
		assert_eq!(node.pos[0], 10.);
		assert_eq!(node.veloc[0], 0.);
		assert_relative_eq!(node.pos[1], 0.5);
		assert_eq!(node.veloc[1], 0.5);
		let node = &ring.nodes()[1];
		assert_eq!(node.pos[1], -10.);
		assert_eq!(node.veloc, V2::zeros());
	}
}
