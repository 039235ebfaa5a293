use crate::config::SimConfig;
use crate::constraint::ConstraintId;
use crate::error::{MeshError, WorldError};
use crate::mesh::MeshId;
use crate::particle::PointId;
use crate::world::World;
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
	/// Nothing under the pointer, the saved point was dropped.
	Cleared,
	Selected(PointId),
	Connected(ConstraintId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshPlacement {
	/// First corner stored, waiting for the second.
	Pending,
	Placed(MeshId),
}

/// Pointer gesture state between frames.
///
/// The input layer maps its own buttons and keys onto these calls and
/// passes the pointer position already converted to world space.
#[derive(Clone, Debug, Default)]
pub struct Editor {
	// with the world revision it was taken at
	selected: Option<(PointId, u64)>,
	mesh_corner: Option<V2>,
}

impl Editor {
	pub fn selected(&self) -> Option<PointId> {
		self.selected.map(|(id, _)| id)
	}

	pub fn mesh_corner(&self) -> Option<V2> {
		self.mesh_corner
	}

	pub fn clear(&mut self) {
		self.selected = None;
		self.mesh_corner = None;
	}

	/// Select the point under `pos`, or connect it to the one selected
	/// before.
	pub fn select_or_connect(
		&mut self,
		world: &mut World,
		pos: V2,
		config: &SimConfig,
	) -> Result<Selection, WorldError> {
		// any removal since the selection may have freed its index
		let revision = world.revision();
		let saved = self
			.selected
			.filter(|(_, r)| *r == revision)
			.map(|(id, _)| id);
		let Some(hit) = world.pick(pos, config.pick_radius) else {
			self.selected = None;
			return Ok(Selection::Cleared);
		};
		let Some(saved) = saved else {
			self.selected = Some((hit, revision));
			return Ok(Selection::Selected(hit));
		};
		let id = world.connect(saved, hit)?;
		self.selected = if config.continuous_connect {
			Some((hit, revision))
		} else {
			None
		};
		Ok(Selection::Connected(id))
	}

	/// Toggle every point under `pos`, returns how many were toggled.
	pub fn toggle_pin_at(
		&self,
		world: &mut World,
		pos: V2,
		config: &SimConfig,
	) -> Result<usize, WorldError> {
		let ids = world.points_within(pos, config.pick_radius);
		for id in ids.iter() {
			world.toggle_pinned(*id)?;
		}
		Ok(ids.len())
	}

	/// Two-click cloth placement. The stored corner is consumed by the
	/// second click whether or not the mesh could be built.
	pub fn place_mesh_corner(
		&mut self,
		world: &mut World,
		pos: V2,
		config: &SimConfig,
	) -> Result<MeshPlacement, MeshError> {
		match self.mesh_corner.take() {
			None => {
				self.mesh_corner = Some(pos);
				Ok(MeshPlacement::Pending)
			}
			Some(corner) => {
				let id = world.add_mesh(corner, pos, config.mesh_spacing)?;
				Ok(MeshPlacement::Placed(id))
			}
		}
	}
}
