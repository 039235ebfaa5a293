/// Tunable simulation parameters, passed explicitly into
/// [`World::tick`](crate::World::tick) and the [`Editor`](crate::Editor).
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
	/// Downward acceleration `G`, applied as `G * dt` of displacement per tick.
	pub gravity: f64,
	pub max_edge_length: f64,
	/// Relaxation passes per tick.
	pub rigidness: usize,
	/// The whole tick is skipped while this is off.
	pub gravity_enabled: bool,
	/// Keep the last connected point selected after a connection.
	pub continuous_connect: bool,
	pub pick_radius: f64,
	pub mesh_spacing: f64,
}

impl Default for SimConfig {
	fn default() -> Self {
		Self {
			gravity: 10.0,
			max_edge_length: 25.0,
			rigidness: 10,
			gravity_enabled: false,
			continuous_connect: false,
			// point radius + 3
			pick_radius: 8.0,
			mesh_spacing: 20.0,
		}
	}
}

impl SimConfig {
	pub fn with_gravity(mut self, gravity: f64) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_max_edge_length(mut self, max_edge_length: f64) -> Self {
		self.max_edge_length = max_edge_length;
		self
	}

	pub fn with_rigidness(mut self, rigidness: usize) -> Self {
		self.rigidness = rigidness;
		self
	}

	pub fn with_gravity_enabled(mut self, on: bool) -> Self {
		self.gravity_enabled = on;
		self
	}

	pub fn with_continuous_connect(mut self, on: bool) -> Self {
		self.continuous_connect = on;
		self
	}

	pub fn with_pick_radius(mut self, r: f64) -> Self {
		self.pick_radius = r;
		self
	}

	pub fn with_mesh_spacing(mut self, spacing: f64) -> Self {
		self.mesh_spacing = spacing;
		self
	}
}
