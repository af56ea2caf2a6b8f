use std::f64::consts::PI;

use crate::node::Node;
use crate::pair_map::PairMap;
use crate::V2;

pub const MIN_NODES: usize = 3;
pub const MAX_NODES: usize = 100;

pub fn clamp_node_count(n: usize) -> usize {
	n.clamp(MIN_NODES, MAX_NODES)
}

#[derive(Clone, Debug)]
pub struct NodeRing {
	nodes: Vec<Node>,
	rest_length: PairMap,
}

impl NodeRing {
	pub fn new(n: usize, radius: f64, center: V2) -> Self {
		let mut result = Self {
			nodes: Vec::new(),
			rest_length: PairMap::default(),
		};
		result.set_node_count(n, radius, center);
		result
	}

	// returns the clamped count
	pub fn set_node_count(&mut self, n: usize, radius: f64, center: V2) -> usize {
		let n = clamp_node_count(n);
		self.nodes = vec![Node::default(); n];
		self.refresh(radius, center);
		n
	}

	// lay out again and take the new shape as the rest shape
	pub fn refresh(&mut self, radius: f64, center: V2) {
		self.reposition(radius, center);
		self.update_rest_lengths();
	}

	// lay out again, rest lengths untouched
	pub fn reposition(&mut self, radius: f64, center: V2) {
		let n = self.nodes.len();
		for (i, node) in self.nodes.iter_mut().enumerate() {
			node.reset_pos(circle_point(i, n, radius, center));
		}
	}

	pub fn update_rest_lengths(&mut self) {
		let n = self.nodes.len();
		let mut rest_length = PairMap::new(n);
		for i in 0..n {
			for j in i + 1..n {
				let l = (self.nodes[i].pos - self.nodes[j].pos).magnitude();
				rest_length.set(i, j, l);
			}
		}
		self.rest_length = rest_length;
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}

	pub fn rest_length(&self, i: usize, j: usize) -> f64 {
		self.rest_length.get(i, j)
	}

	pub fn rest_lengths(&self) -> &PairMap {
		&self.rest_length
	}

	pub fn reset_accelerations(&mut self) {
		for node in self.nodes.iter_mut() {
			node.reset_accel();
		}
	}
}

pub fn circle_point(i: usize, n: usize, radius: f64, center: V2) -> V2 {
	let angle = i as f64 * 2. * PI / n as f64;
	center + V2::new(angle.cos(), angle.sin()) * radius
}
