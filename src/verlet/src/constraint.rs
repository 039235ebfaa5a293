use crate::particle::{PointId, PointMass};
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub usize);

/// Outcome of relaxing one constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relax {
	/// Shorter than the limit, nothing to do.
	Slack,
	Corrected,
	/// Endpoints coincide, no direction to pull along.
	Degenerate,
}

/// One-sided maximum distance between two point masses.
///
/// The limit itself is shared by every constraint and passed in at solve
/// time. Endpoints are fixed at creation; `length` and `relax` index
/// `points` with them and panic on a handle outside the slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constraint {
	pub(crate) p1: PointId,
	pub(crate) p2: PointId,
}

impl Constraint {
	pub fn new(p1: PointId, p2: PointId) -> Self {
		Self { p1, p2 }
	}

	pub fn p1(&self) -> PointId {
		self.p1
	}

	pub fn p2(&self) -> PointId {
		self.p2
	}

	pub fn touches(&self, id: PointId) -> bool {
		self.p1 == id || self.p2 == id
	}

	pub fn length(&self, points: &[PointMass]) -> f64 {
		let pos1 = points[self.p1.0].get_pos();
		let pos2 = points[self.p2.0].get_pos();
		(pos1 - pos2).magnitude()
	}

	/// Pull both free endpoints to `max_length` apart around their center.
	pub fn relax(&self, points: &mut [PointMass], max_length: f64) -> Relax {
		let pos1 = points[self.p1.0].get_pos();
		let pos2 = points[self.p2.0].get_pos();
		let dp = pos1 - pos2;
		let l = dp.magnitude();
		if l < max_length {
			return Relax::Slack;
		}
		if !l.is_normal() {
			return Relax::Degenerate;
		}
		let center: V2 = (pos1 + pos2) / 2.0;
		let half = dp / l * max_length / 2.0;
		if !points[self.p1.0].is_pinned() {
			points[self.p1.0].set_pos(center + half);
		}
		if !points[self.p2.0].is_pinned() {
			points[self.p2.0].set_pos(center - half);
		}
		Relax::Corrected
	}
}
