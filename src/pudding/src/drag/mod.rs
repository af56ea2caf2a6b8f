pub mod pointer;

use fnv::FnvHashMap;

use crate::config::SimulationConfig;
use crate::node_ring::NodeRing;
use crate::{NODE_MASS, V2};

pub use pointer::{DraggedNode, Pointer, PointerId};

// pointers own their node lists, `owner` is the reverse index;
// a node is held by the latest pointer to capture it
#[derive(Debug, Default)]
pub struct DragController {
	pointers: FnvHashMap<PointerId, Pointer>,
	owner: Vec<Option<PointerId>>,
}

impl DragController {
	pub fn new(n: usize) -> Self {
		Self {
			pointers: FnvHashMap::default(),
			owner: vec![None; n],
		}
	}

	// returns the number of captured nodes
	pub fn start_drag(
		&mut self,
		id: PointerId,
		pos: V2,
		ring: &NodeRing,
		drag_radius: f64,
	) -> usize {
		if !is_finite(pos) {
			log::warn!("ignoring down of pointer {} at non-finite {:?}", id, pos);
			return 0;
		}
		if self.owner.len() != ring.len() {
			self.clear(ring.len());
		}
		// a repeated down without up replaces the old pointer
		self.stop_drag(id);
		let mut pointer = Pointer::new(pos);
		for (idx, node) in ring.nodes().iter().enumerate() {
			// NaN distance never captures
			if !((node.pos - pos).magnitude() <= drag_radius) {
				continue;
			}
			if let Some(old_id) = self.owner[idx] {
				if let Some(old) = self.pointers.get_mut(&old_id) {
					old.remove_node(idx);
				}
				log::debug!("node {} moves from pointer {} to {}", idx, old_id, id);
			}
			self.owner[idx] = Some(id);
			pointer.add_node(idx, node.pos);
		}
		let count = pointer.nodes().len();
		log::debug!("pointer {} down at {:?}, {} nodes", id, pos, count);
		self.pointers.insert(id, pointer);
		count
	}

	pub fn update_pointer(&mut self, id: PointerId, pos: V2) {
		if !is_finite(pos) {
			log::warn!("ignoring move of pointer {} to non-finite {:?}", id, pos);
			return;
		}
		match self.pointers.get_mut(&id) {
			Some(pointer) => pointer.set_current_pos(pos),
			None => log::debug!("move for unknown pointer {}", id),
		}
	}

	pub fn stop_drag(&mut self, id: PointerId) {
		let pointer = match self.pointers.remove(&id) {
			Some(p) => p,
			None => return,
		};
		for node in pointer.nodes() {
			if self.owner[node.index] == Some(id) {
				self.owner[node.index] = None;
			}
		}
		log::debug!("pointer {} up, released {} nodes", id, pointer.nodes().len());
	}

	// drop every pointer, e.g. when node indices stop being valid
	pub fn clear(&mut self, n: usize) {
		self.pointers.clear();
		self.owner = vec![None; n];
	}

	pub fn owner_of(&self, index: usize) -> Option<PointerId> {
		self.owner.get(index).copied().flatten()
	}

	pub fn pointer(&self, id: PointerId) -> Option<&Pointer> {
		self.pointers.get(&id)
	}

	pub fn len(&self) -> usize {
		self.pointers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pointers.is_empty()
	}

	pub fn apply_drag_forces(&self, ring: &mut NodeRing, config: &SimulationConfig) {
		let r = config.drag_radius;
		let nodes = ring.nodes_mut();
		for pointer in self.pointers.values() {
			for dragged in pointer.nodes() {
				let node = match nodes.get_mut(dragged.index) {
					Some(x) => x,
					None => continue,
				};
				let dp = pointer.target_of(dragged) - node.pos;
				let mut k = config.drag_stiffness;
				if config.drag_falloff {
					k *= falloff(dp.magnitude(), r);
				}
				node.add_accel(dp * k / NODE_MASS);
			}
		}
	}
}

fn is_finite(pos: V2) -> bool {
	pos.iter().all(|x| x.is_finite())
}

// 1 at the target, 0 at and beyond the capture radius
pub fn falloff(distance: f64, radius: f64) -> f64 {
	if radius <= 0. {
		return 0.;
	}
	(1. - distance / radius).clamp(0., 1.)
}
