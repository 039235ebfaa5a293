use crate::V2;

/// Handle of a point mass, the index into `World::points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl PointId {
	pub fn index(self) -> usize {
		self.0
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointMass {
	pos: V2,
	ppos: V2,
	pinned: bool,
}

impl PointMass {
	pub fn new(pos: V2, pinned: bool) -> Self {
		Self {
			pos,
			ppos: pos,
			pinned,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	/// Implicit velocity, displacement over the last tick.
	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn toggle_pinned(&mut self) {
		self.pinned = !self.pinned;
	}

	// constraint correction, pinned check is done by the caller
	pub(crate) fn set_pos(&mut self, pos: V2) {
		self.pos = pos;
	}

	/// One integration step with `dp` of gravity displacement.
	///
	/// The velocity term is taken after `dp` is applied, so `dp` ends up
	/// counted twice: a point at rest moves by `2 * dp` on its first tick.
	pub fn update(&mut self, dp: V2) {
		if self.pinned {
			return;
		}
		let ppos = self.pos;
		self.pos += dp;
		self.pos += self.pos - self.ppos;
		self.ppos = ppos;
	}
}
