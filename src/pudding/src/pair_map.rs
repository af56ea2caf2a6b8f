// dense symmetric per-pair values, writing (i, j) also writes (j, i),
// the diagonal stays zero
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairMap {
	n: usize,
	data: Vec<f64>,
}

impl PairMap {
	pub fn new(n: usize) -> Self {
		Self {
			n,
			data: vec![0.; n * n],
		}
	}

	pub fn len(&self) -> usize {
		self.n
	}

	pub fn is_empty(&self) -> bool {
		self.n == 0
	}

	pub fn get(&self, i: usize, j: usize) -> f64 {
		self.data[i * self.n + j]
	}

	pub fn set(&mut self, i: usize, j: usize, value: f64) {
		if i == j {
			return;
		}
		self.data[i * self.n + j] = value;
		self.data[j * self.n + i] = value;
	}

	pub fn as_slice(&self) -> &[f64] {
		&self.data
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_set_is_symmetric() {
		let mut map = PairMap::new(4);
		map.set(1, 3, 2.5);
		map.set(2, 0, -1.0);
		assert_eq!(map.get(3, 1), 2.5);
		assert_eq!(map.get(1, 3), 2.5);
		assert_eq!(map.get(0, 2), -1.0);
	}

	#[test]
	fn test_diagonal_stays_zero() {
		let mut map = PairMap::new(3);
		map.set(1, 1, 7.0);
		map.set(0, 2, 4.0);
		for i in 0..3 {
			assert_eq!(map.get(i, i), 0.0);
		}
		assert_eq!(map.get(2, 0), 4.0);
	}
}
