pub mod anchor;
pub mod binding;
pub mod gravity;

use crate::config::SimulationConfig;
use crate::node_ring::NodeRing;
use crate::pair_map::PairMap;

pub use anchor::AnchorForce;
pub use binding::BindingForce;
pub use gravity::Gravity;

pub trait Force {
	// adds this force's acceleration to the nodes, pairwise forces are
	// also reported into `stress`
	fn apply(&self, ring: &mut NodeRing, stress: &mut PairMap);
}

// per tick accelerations that do not come from pointers
#[derive(Debug, Default)]
pub struct ForceModel {
	stress: PairMap,
}

impl ForceModel {
	pub fn apply(&mut self, ring: &mut NodeRing, config: &SimulationConfig) {
		if self.stress.len() != ring.len() {
			self.stress = PairMap::new(ring.len());
		}
		BindingForce::new(config.binding_elasticity).apply(ring, &mut self.stress);
		if config.is_gravity_enabled {
			Gravity::new(config.gravity).apply(ring, &mut self.stress);
		}
		if config.is_pinned {
			AnchorForce::new(config.pinning_elasticity).apply(ring, &mut self.stress);
		}
	}

	pub fn stress(&self) -> &PairMap {
		&self.stress
	}

	pub fn reset(&mut self, n: usize) {
		self.stress = PairMap::new(n);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V2;

	#[test]
	fn test_toggles() {
		let mut ring = NodeRing::new(6, 50., V2::zeros());
		let mut model = ForceModel::default();
		let config = SimulationConfig::default()
			.with_gravity(V2::new(0., 2.))
			.with_gravity_enabled(false);
		model.apply(&mut ring, &config);
		assert!(ring.nodes().iter().all(|x| x.accel.magnitude() < 1e-9));
		assert_eq!(model.stress().len(), 6);

		ring.reset_accelerations();
		model.apply(&mut ring, &config.clone().with_gravity_enabled(true));
		for node in ring.nodes() {
			assert!((node.accel - V2::new(0., 2.)).magnitude() < 1e-9);
		}
	}

	#[test]
	fn test_anchor_only_when_pinned() {
		let mut ring = NodeRing::new(6, 50., V2::zeros());
		ring.nodes_mut()[0].pos += V2::new(10., 0.);
		let mut model = ForceModel::default();
		let config = SimulationConfig::default()
			.with_gravity_enabled(false)
			.with_binding_elasticity(0.)
			.with_pinning_elasticity(0.1);
		model.apply(&mut ring, &config.clone().with_pinned(false));
		assert!(ring.nodes()[0].accel.magnitude() < 1e-9);

		ring.reset_accelerations();
		model.apply(&mut ring, &config.with_pinned(true));
		assert!((ring.nodes()[0].accel - V2::new(-1., 0.)).magnitude() < 1e-9);
		assert!(ring.nodes()[1].accel.magnitude() < 1e-9);
	}
}
