use crate::force::Force;
use crate::node_ring::NodeRing;
use crate::pair_map::PairMap;
use crate::{NODE_DISTANCE_THRESHOLD, NODE_MASS};

// hooke between every pair, stiffness is elasticity / rest length
pub struct BindingForce {
	elasticity: f64,
}

impl BindingForce {
	pub fn new(elasticity: f64) -> Self {
		Self { elasticity }
	}
}

impl Force for BindingForce {
	fn apply(&self, ring: &mut NodeRing, stress: &mut PairMap) {
		let n = ring.len();
		for i in 0..n {
			for j in i + 1..n {
				let l0 = ring.rest_length(i, j);
				let nodes = ring.nodes_mut();
				let dp = nodes[i].pos - nodes[j].pos;
				let l = dp.magnitude();
				let force =
					self.elasticity / l0.max(NODE_DISTANCE_THRESHOLD) * (l - l0);
				stress.set(i, j, force);
				let accel =
					dp * (force / NODE_MASS / l.max(NODE_DISTANCE_THRESHOLD));
				nodes[j].add_accel(accel);
				nodes[i].add_accel(-accel);
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V2;
	use approx::assert_relative_eq;

	#[test]
	fn test_rest_shape_is_equilibrium() {
		let mut ring = NodeRing::new(12, 100., V2::zeros());
		let mut stress = PairMap::new(12);
		BindingForce::new(10.).apply(&mut ring, &mut stress);
		for node in ring.nodes() {
			assert!(node.accel.magnitude() < 1e-9);
		}
		assert!(stress.as_slice().iter().all(|x| x.abs() < 1e-9));
	}

	#[test]
	fn test_stretched_pair_attracts() {
		let mut ring = NodeRing::new(3, 10., V2::zeros());
		let mut stress = PairMap::new(3);
		let l0 = ring.rest_length(0, 1);
		// move node 0 straight away from node 1 by 1 unit
		let dir = (ring.nodes()[0].pos - ring.nodes()[1].pos) / l0;
		ring.nodes_mut()[0].pos += dir;
		BindingForce::new(10.).apply(&mut ring, &mut stress);
		assert_relative_eq!(stress.get(0, 1), 10. / l0, epsilon = 1e-9);
		assert_eq!(stress.get(0, 1), stress.get(1, 0));
		// newton's third law: the sum of all accelerations vanishes
		let total: V2 = ring.nodes().iter().map(|x| x.accel).sum();
		assert!(total.magnitude() < 1e-9);
		// node 0 is pulled back towards node 1
		assert!(ring.nodes()[0].accel.dot(&dir) < 0.);
	}

	#[test]
	fn test_coincident_nodes_stay_finite() {
		let mut ring = NodeRing::new(3, 10., V2::zeros());
		let mut stress = PairMap::new(3);
		let p = ring.nodes()[1].pos;
		ring.nodes_mut()[0].pos = p;
		BindingForce::new(10.).apply(&mut ring, &mut stress);
		for node in ring.nodes() {
			assert!(node.accel.iter().all(|x| x.is_finite()));
		}
		assert!(stress.get(0, 1) < 0.);
	}

	#[test]
	fn test_zero_rest_length_stays_finite() {
		let mut ring = NodeRing::new(3, 0., V2::zeros());
		let mut stress = PairMap::new(3);
		ring.nodes_mut()[0].pos += V2::new(1., 0.);
		BindingForce::new(10.).apply(&mut ring, &mut stress);
		assert_relative_eq!(stress.get(0, 1), 10. / NODE_DISTANCE_THRESHOLD);
		for node in ring.nodes() {
			assert!(node.accel.iter().all(|x| x.is_finite()));
		}
	}
}
