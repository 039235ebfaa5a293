use crate::config::SimConfig;
use crate::constraint::{Constraint, ConstraintId};
use crate::error::{MeshError, WorldError};
use crate::integrator;
use crate::mesh::{self, Mesh, MeshId};
use crate::particle::{PointId, PointMass};
use crate::solver::{self, RelaxStats};
use crate::V2;
use protocol::pr_model::{PrConstraint, PrModel, PrParticle, PrQuad};

/// Arena of point masses plus the constraints and meshes built on them.
///
/// Constraints and meshes refer to points by [`PointId`]. Only the last
/// point can be removed, so handles to the remaining points stay valid.
/// An index may be reused by a later point after a removal, so handles kept
/// outside the world should be paired with [`World::revision`].
#[derive(Clone, Debug, Default)]
pub struct World {
	points: Vec<PointMass>,
	constraints: Vec<Constraint>,
	meshes: Vec<Mesh>,
	// bumped whenever a point is removed
	revision: u64,
}

impl World {
	pub fn points(&self) -> &[PointMass] {
		&self.points
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	pub fn meshes(&self) -> &[Mesh] {
		&self.meshes
	}

	pub fn point(&self, id: PointId) -> Option<&PointMass> {
		self.points.get(id.0)
	}

	pub fn contains(&self, id: PointId) -> bool {
		id.0 < self.points.len()
	}

	/// Changes every time a point is removed, by
	/// [`remove_last_point`](Self::remove_last_point) or
	/// [`reset`](Self::reset).
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
			&& self.constraints.is_empty()
			&& self.meshes.is_empty()
	}

	fn check(&self, id: PointId) -> Result<(), WorldError> {
		if self.contains(id) {
			Ok(())
		} else {
			Err(WorldError::UnknownPoint {
				id: id.0,
				len: self.points.len(),
			})
		}
	}

	pub fn add_point(&mut self, pos: V2, pinned: bool) -> PointId {
		self.points.push(PointMass::new(pos, pinned));
		PointId(self.points.len() - 1)
	}

	/// Drop the most recent point together with every constraint and mesh
	/// that refers to it.
	pub fn remove_last_point(&mut self) -> Option<PointMass> {
		let p = self.points.pop()?;
		self.revision += 1;
		let id = PointId(self.points.len());
		let constraint_len = self.constraints.len();
		self.constraints.retain(|c| !c.touches(id));
		self.meshes.retain(|m| !m.contains(id));
		tracing::debug!(
			"removed point {}, dropped {} constraints",
			id.0,
			constraint_len - self.constraints.len()
		);
		Some(p)
	}

	/// Duplicate and self connections are kept as they are.
	pub fn connect(
		&mut self,
		p1: PointId,
		p2: PointId,
	) -> Result<ConstraintId, WorldError> {
		self.check(p1)?;
		self.check(p2)?;
		self.constraints.push(Constraint::new(p1, p2));
		Ok(ConstraintId(self.constraints.len() - 1))
	}

	/// Returns the new pinned state.
	pub fn toggle_pinned(&mut self, id: PointId) -> Result<bool, WorldError> {
		self.check(id)?;
		let p = &mut self.points[id.0];
		p.toggle_pinned();
		Ok(p.is_pinned())
	}

	/// Generate a cloth and merge it in. Nothing changes on error.
	pub fn add_mesh(
		&mut self,
		corner_a: V2,
		corner_b: V2,
		spacing: f64,
	) -> Result<MeshId, MeshError> {
		let generated =
			match mesh::generate(corner_a, corner_b, spacing, self.points.len()) {
				Ok(g) => g,
				Err(e) => {
					tracing::warn!("{}", e);
					return Err(e);
				}
			};
		tracing::info!(
			"add mesh: {}x{}, {} constraints",
			generated.mesh.rows(),
			generated.mesh.cols(),
			generated.constraints.len()
		);
		self.points.extend(generated.points);
		self.constraints.extend(generated.constraints);
		self.meshes.push(generated.mesh);
		Ok(MeshId(self.meshes.len() - 1))
	}

	pub fn reset(&mut self) {
		tracing::debug!("reset world");
		if !self.points.is_empty() {
			self.revision += 1;
		}
		self.points.clear();
		self.constraints.clear();
		self.meshes.clear();
	}

	/// Integrate, then relax `config.rigidness` times. Returns `None` without
	/// touching anything while `config.gravity_enabled` is off.
	pub fn tick(&mut self, dt: f64, config: &SimConfig) -> Option<RelaxStats> {
		if !config.gravity_enabled {
			return None;
		}
		integrator::step(&mut self.points, config.gravity, dt);
		let stats = solver::relax(
			&mut self.points,
			&self.constraints,
			config.max_edge_length,
			config.rigidness,
		);
		Some(stats)
	}

	/// First point in insertion order strictly closer than `radius`.
	pub fn pick(&self, pos: V2, radius: f64) -> Option<PointId> {
		self.points
			.iter()
			.position(|p| (p.get_pos() - pos).magnitude() < radius)
			.map(PointId)
	}

	pub fn points_within(&self, pos: V2, radius: f64) -> Vec<PointId> {
		self.points
			.iter()
			.enumerate()
			.filter(|(_, p)| (p.get_pos() - pos).magnitude() < radius)
			.map(|(id, _)| PointId(id))
			.collect()
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.points
			.iter()
			.map(|p| {
				let pos = p.get_pos();
				PrParticle {
					pos: [pos.x, pos.y],
					pinned: p.is_pinned(),
				}
			})
			.collect();
		let constraints = self
			.constraints
			.iter()
			.map(|c| PrConstraint {
				particles: [c.p1.0, c.p2.0],
			})
			.collect();
		let quads = self
			.meshes
			.iter()
			.flat_map(|m| m.quads())
			.map(|q| PrQuad {
				particles: q.map(|id| id.0),
			})
			.collect();
		PrModel {
			particles,
			constraints,
			quads,
		}
	}
}
