use crate::force::Force;
use crate::node_ring::NodeRing;
use crate::pair_map::PairMap;
use crate::V2;

pub struct Gravity {
	g: V2,
}

impl Gravity {
	pub fn new(g: V2) -> Self {
		Self { g }
	}
}

impl Force for Gravity {
	fn apply(&self, ring: &mut NodeRing, _stress: &mut PairMap) {
		for node in ring.nodes_mut() {
			node.add_accel(self.g);
		}
	}
}
