use crate::constraint::Constraint;
use crate::error::MeshError;
use crate::particle::{PointId, PointMass};
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Upper bound on the number of points one mesh may generate.
pub const MAX_MESH_POINTS: usize = 1 << 24;

/// Row-major grid of handles into the world's points.
///
/// Row 0 holds the starting corner, rows grow downward and columns to the
/// right. The grid is only an index for drawing; physics never reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
	rows: usize,
	cols: usize,
	ids: Vec<PointId>,
}

impl Mesh {
	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	pub fn get(&self, row: usize, col: usize) -> Option<PointId> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		Some(self.ids[row * self.cols + col])
	}

	pub fn row(&self, row: usize) -> &[PointId] {
		&self.ids[row * self.cols..(row + 1) * self.cols]
	}

	pub fn point_ids(&self) -> &[PointId] {
		&self.ids
	}

	pub fn contains(&self, id: PointId) -> bool {
		self.ids.contains(&id)
	}

	/// Quads `(i, j), (i - 1, j), (i - 1, j - 1), (i, j - 1)` for every
	/// cell of the grid.
	pub fn quads(&self) -> impl Iterator<Item = [PointId; 4]> + '_ {
		(1..self.rows).flat_map(move |i| {
			(1..self.cols).map(move |j| {
				[
					self.ids[i * self.cols + j],
					self.ids[(i - 1) * self.cols + j],
					self.ids[(i - 1) * self.cols + j - 1],
					self.ids[i * self.cols + j - 1],
				]
			})
		})
	}
}

pub struct GeneratedMesh {
	pub points: Vec<PointMass>,
	pub constraints: Vec<Constraint>,
	pub mesh: Mesh,
}

/// Lay out a cloth between two corners.
///
/// `base` is the index the first generated point will get once the points
/// are appended to the world, so the returned handles are already valid
/// after the merge.
pub fn generate(
	corner_a: V2,
	corner_b: V2,
	spacing: f64,
	base: usize,
) -> Result<GeneratedMesh, MeshError> {
	let invalid = || MeshError::InvalidParameters {
		corner_a: corner_a.into(),
		corner_b: corner_b.into(),
		spacing,
	};
	if !(spacing > 0.0 && spacing.is_finite())
		|| !corner_a.iter().chain(corner_b.iter()).all(|v| v.is_finite())
		|| corner_a == corner_b
	{
		return Err(invalid());
	}
	let width = (corner_a.x - corner_b.x).abs();
	let height = (corner_a.y - corner_b.y).abs();
	let rows = (height / spacing).floor();
	let cols = (width / spacing).floor();
	// checked in f64 first, the usize cast saturates
	if rows >= MAX_MESH_POINTS as f64 || cols >= MAX_MESH_POINTS as f64 {
		return Err(invalid());
	}
	let rows = rows as usize + 1;
	let cols = cols as usize + 1;
	let len = rows
		.checked_mul(cols)
		.filter(|len| *len <= MAX_MESH_POINTS)
		.ok_or_else(invalid)?;

	let mut points = Vec::new();
	let mut ids = Vec::new();
	points.try_reserve(len).map_err(|_| invalid())?;
	ids.try_reserve(len).map_err(|_| invalid())?;
	let mut constraints = Vec::new();
	for i in 0..rows {
		for j in 0..cols {
			let pos = V2::new(
				corner_a.x + spacing * j as f64,
				corner_a.y - spacing * i as f64,
			);
			let id = PointId(base + ids.len());
			points.push(PointMass::new(pos, false));
			ids.push(id);
			if i > 0 {
				constraints.push(Constraint::new(id, ids[(i - 1) * cols + j]));
			}
			if j > 0 {
				constraints.push(Constraint::new(ids[i * cols + j - 1], id));
			}
		}
	}
	Ok(GeneratedMesh {
		points,
		constraints,
		mesh: Mesh { rows, cols, ids },
	})
}
