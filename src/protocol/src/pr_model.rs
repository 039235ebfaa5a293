// pr_model: Physical model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f64; 2],
	pub pinned: bool,
}

// indices into PrModel::particles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrConstraint {
	pub particles: [usize; 2],
}

// corners in drawing order: (i, j), (i - 1, j), (i - 1, j - 1), (i, j - 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrQuad {
	pub particles: [usize; 4],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub constraints: Vec<PrConstraint>,
	pub quads: Vec<PrQuad>,
}

impl PrModel {
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
			&& self.constraints.is_empty()
			&& self.quads.is_empty()
	}

	/// Endpoint positions of a constraint, `None` if it refers to a
	/// particle missing from this snapshot.
	pub fn segment(&self, idx: usize) -> Option<([f64; 2], [f64; 2])> {
		let c = self.constraints.get(idx)?;
		let p1 = self.particles.get(c.particles[0])?;
		let p2 = self.particles.get(c.particles[1])?;
		Some((p1.pos, p2.pos))
	}

	pub fn polygon(&self, idx: usize) -> Option<[[f64; 2]; 4]> {
		let q = self.quads.get(idx)?;
		let mut result = [[0.0; 2]; 4];
		for (dst, &pid) in result.iter_mut().zip(q.particles.iter()) {
			*dst = self.particles.get(pid)?.pos;
		}
		Some(result)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn sample() -> PrModel {
		PrModel {
			particles: vec![
				PrParticle { pos: [0., 0.], pinned: true },
				PrParticle { pos: [1., 0.], pinned: false },
				PrParticle { pos: [1., -1.], pinned: false },
				PrParticle { pos: [0., -1.], pinned: false },
			],
			constraints: vec![
				PrConstraint { particles: [0, 1] },
				PrConstraint { particles: [1, 7] },
			],
			quads: vec![PrQuad { particles: [2, 1, 0, 3] }],
		}
	}

	#[test]
	fn test_segment() {
		let model = sample();
		assert_eq!(model.segment(0), Some(([0., 0.], [1., 0.])));
		// dangling endpoint
		assert_eq!(model.segment(1), None);
		assert_eq!(model.segment(2), None);
	}

	#[test]
	fn test_polygon() {
		let model = sample();
		let poly = model.polygon(0).unwrap();
		assert_eq!(poly, [[1., -1.], [1., 0.], [0., 0.], [0., -1.]]);
		assert!(model.polygon(1).is_none());
	}

	#[test]
	fn test_empty() {
		assert!(PrModel::default().is_empty());
		assert!(!sample().is_empty());
	}
}
