use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
	#[error(
		"invalid mesh parameters: corners {corner_a:?} and {corner_b:?}, spacing {spacing}"
	)]
	InvalidParameters {
		corner_a: [f64; 2],
		corner_b: [f64; 2],
		spacing: f64,
	},
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
	#[error("point {id} does not exist (world has {len} points)")]
	UnknownPoint { id: usize, len: usize },
	#[error(transparent)]
	Mesh(#[from] MeshError),
}
