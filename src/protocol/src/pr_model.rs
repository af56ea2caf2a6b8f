// pr_model: Physical model for rendering

use serde::{Deserialize, Serialize};

use crate::color::{stress_color, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
	// filled closed curve through the nodes
	#[default]
	Normal,
	// every binding drawn as a line colored by its stress
	Wireframe,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
	pub control: [f64; 2],
	pub end: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
	pub start: [f64; 2],
	pub segments: Vec<QuadSegment>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireLine {
	pub from: [f64; 2],
	pub to: [f64; 2],
	pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	// index order of the ring
	pub positions: Vec<[f64; 2]>,
	// row-major n * n, symmetric
	pub stress: Vec<f64>,
	pub render_mode: RenderMode,
	pub fill_color: Color,
	pub background_color: Color,
}

fn midpoint(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
	[(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5]
}

impl PrModel {
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	// a decoded model may carry a short stress table, missing pairs read 0
	pub fn stress_between(&self, i: usize, j: usize) -> f64 {
		self.stress.get(i * self.len() + j).copied().unwrap_or(0.)
	}

	// closed path through the binding midpoints, each segment bends around
	// the node between two midpoints
	pub fn outline(&self) -> Option<Outline> {
		let n = self.len();
		if n < 2 {
			return None;
		}
		let mids: Vec<[f64; 2]> = (0..n)
			.map(|i| midpoint(self.positions[i], self.positions[(i + 1) % n]))
			.collect();
		let segments = (1..=n)
			.map(|i| QuadSegment {
				control: self.positions[i % n],
				end: mids[i % n],
			})
			.collect();
		Some(Outline {
			start: mids[0],
			segments,
		})
	}

	pub fn wireframe(&self) -> Vec<WireLine> {
		let n = self.len();
		let mut result = Vec::with_capacity(n * n.saturating_sub(1) / 2);
		for i in 0..n {
			for j in i + 1..n {
				result.push(WireLine {
					from: self.positions[i],
					to: self.positions[j],
					color: stress_color(self.fill_color, self.stress_between(i, j)),
				});
			}
		}
		result
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use approx::assert_relative_eq;

	fn square() -> PrModel {
		let n = 4;
		let mut stress = vec![0.; n * n];
		stress[1] = 2.0;
		stress[n] = 2.0;
		PrModel {
			positions: vec![[1., 0.], [0., 1.], [-1., 0.], [0., -1.]],
			stress,
			render_mode: RenderMode::Normal,
			fill_color: Color::DEFAULT_FILL,
			background_color: Color::DEFAULT_BACKGROUND,
		}
	}

	#[test]
	fn test_outline_closes_on_start() {
		let model = square();
		let outline = model.outline().unwrap();
		assert_eq!(outline.segments.len(), 4);
		assert_relative_eq!(outline.start[0], 0.5);
		assert_relative_eq!(outline.start[1], 0.5);
		assert_eq!(outline.segments[0].control, [0., 1.]);
		assert_eq!(outline.segments[0].end, [-0.5, 0.5]);
		let last = outline.segments.last().unwrap();
		assert_eq!(last.control, [1., 0.]);
		assert_eq!(last.end, outline.start);
	}

	#[test]
	fn test_outline_needs_two_nodes() {
		let mut model = square();
		model.positions.truncate(1);
		assert!(model.outline().is_none());
	}

	#[test]
	fn test_wireframe_with_short_stress() {
		let mut model = square();
		model.stress.truncate(3);
		let lines = model.wireframe();
		assert_eq!(lines.len(), 6);
		assert_eq!(lines[0].color, stress_color(Color::DEFAULT_FILL, 2.0));
		assert!(lines[1..].iter().all(|x| x.color == Color::DEFAULT_FILL));
	}

	#[test]
	fn test_wireframe_covers_all_pairs() {
		let model = square();
		let lines = model.wireframe();
		assert_eq!(lines.len(), 6);
		assert_eq!(lines[0].from, [1., 0.]);
		assert_eq!(lines[0].to, [0., 1.]);
		assert_eq!(lines[0].color, stress_color(Color::DEFAULT_FILL, 2.0));
		assert_eq!(lines[1].color, Color::DEFAULT_FILL);
	}
}
