use crate::force::Force;
use crate::node_ring::NodeRing;
use crate::pair_map::PairMap;
use crate::{NODE_DISTANCE_THRESHOLD, NODE_MASS};

// pulls every node back to its spawn position
pub struct AnchorForce {
	elasticity: f64,
}

impl AnchorForce {
	pub fn new(elasticity: f64) -> Self {
		Self { elasticity }
	}
}

impl Force for AnchorForce {
	fn apply(&self, ring: &mut NodeRing, _stress: &mut PairMap) {
		for node in ring.nodes_mut() {
			let displacement = node.pos - node.pinned_pos;
			let dl = displacement.magnitude();
			// too close to normalize safely
			if dl <= NODE_DISTANCE_THRESHOLD {
				continue;
			}
			let force = -self.elasticity * dl;
			node.add_accel(displacement / dl * force / NODE_MASS);
		}
	}
}
