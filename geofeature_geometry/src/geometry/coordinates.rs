use anyhow::{Result, ensure};
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// A single GeoJSON position: `[x, y]` or `[x, y, z]`.
///
/// Extra dimensions are kept as they are, so positions round-trip unchanged.
#[derive(Clone, Default, PartialEq)]
pub struct Coordinates(pub Vec<f64>);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self(vec![x, y])
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self(vec![x, y, z])
	}

	#[must_use]
	pub fn x(&self) -> Option<f64> {
		self.0.first().copied()
	}

	#[must_use]
	pub fn y(&self) -> Option<f64> {
		self.0.get(1).copied()
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.get(2).copied()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	#[must_use]
	pub fn dimensions(&self) -> usize {
		self.0.len()
	}

	/// Returns the position as a JSON array, optionally rounded to `precision` decimal places.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonValue {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			JsonValue::from(
				self
					.0
					.iter()
					.map(|&value| round_to(value, factor))
					.collect::<Vec<_>>(),
			)
		} else {
			JsonValue::from(&self.0)
		}
	}

	/// Reads a position from a JSON array of numbers.
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		let values = json.as_array()?.as_number_vec()?;
		ensure!(!values.is_empty(), "a position must not be empty");
		Ok(Self(values))
	}

	/// Grows `bounds` (`[x_min, y_min, x_max, y_max]`) to include this position.
	/// Positions with fewer than two values are skipped.
	pub fn extend_bounds(&self, bounds: &mut Option<[f64; 4]>) {
		let (Some(x), Some(y)) = (self.x(), self.y()) else {
			return;
		};
		*bounds = Some(match bounds {
			Some([x_min, y_min, x_max, y_max]) => [x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y)],
			None => [x, y, x, y],
		});
	}
}

impl<T, const N: usize> From<[T; N]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; N]) -> Self {
		Coordinates(value.iter().map(|v| (*v).into()).collect())
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; N]) -> Self {
		Coordinates(value.iter().map(|v| (*v).into()).collect())
	}
}

impl From<Vec<f64>> for Coordinates {
	fn from(value: Vec<f64>) -> Self {
		Coordinates(value)
	}
}

impl From<&Vec<f64>> for Coordinates {
	fn from(value: &Vec<f64>) -> Self {
		Coordinates(value.clone())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates(vec![value.0, value.1])
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates(vec![value.0, value.1])
	}
}

impl From<(f64, f64, f64)> for Coordinates {
	fn from(value: (f64, f64, f64)) -> Self {
		Coordinates(vec![value.0, value.1, value.2])
	}
}

/// Rounds `value` to the grid given by `factor`. Values too large to scale stay as they are.
fn round_to(value: f64, factor: f64) -> f64 {
	let scaled = value * factor;
	if scaled.is_finite() {
		scaled.round() / factor
	} else {
		value
	}
}

impl From<Coordinates> for Vec<f64> {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
