//! Principal component reduction of the raw vector table
//!
//! Covariance and eigen-decomposition run in f64 and the fitted projection
//! is stored as f32. The eigensolver is cyclic Jacobi on the symmetric
//! covariance matrix, which is stable for a fixed input; eigenvector signs
//! are normalized so the largest-magnitude component is positive.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::core::{PipelineError, RawVectorTable};
use crate::ui;

const JACOBI_MAX_SWEEPS: usize = 64;
const JACOBI_TOLERANCE: f64 = 1e-12;

/// Fitted PCA projection: `project(v) = (v - mean) · components`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
	/// D×k matrix, columns ordered by descending eigenvalue.
	components: Array2<f32>,
	/// Per-dimension centering mean, length D.
	mean: Array1<f32>,
}

impl Projection {
	/// Fit the top-k variance directions of the table (all rows, the OOV
	/// row included).
	pub fn fit(table: &RawVectorTable, k: usize) -> Result<Self, PipelineError> {
		let dim = table.dim();
		if k < 1 || k >= dim {
			return Err(PipelineError::Dimension { k, dim });
		}

		let rows = table.rows();
		ui::debug(&format!("Fitting PCA: {} rows, {}D -> {}D", rows, dim, k));

		let data = table.matrix().mapv(|x| x as f64);
		let mean = data.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(dim));
		let centered = &data - &mean;

		let divisor = if rows > 1 { (rows - 1) as f64 } else { 1.0 };
		let covariance = centered.t().dot(&centered) / divisor;

		let (eigenvalues, eigenvectors) = jacobi_eigen(covariance);

		// Stable sort keeps the solver's order for tied eigenvalues
		let mut order: Vec<usize> = (0..dim).collect();
		order.sort_by(|&a, &b| {
			eigenvalues[b]
				.partial_cmp(&eigenvalues[a])
				.unwrap_or(std::cmp::Ordering::Equal)
		});

		let mut components = Array2::<f32>::zeros((dim, k));
		for (col, &idx) in order.iter().take(k).enumerate() {
			let mut column: Vec<f64> = eigenvectors.column(idx).to_vec();
			fix_sign(&mut column);
			for (row, &value) in column.iter().enumerate() {
				components[[row, col]] = value as f32;
			}
		}

		Ok(Self {
			components,
			mean: mean.mapv(|x| x as f32),
		})
	}

	/// Construct from known constants (deserialization and tests).
	pub fn from_parts(components: Array2<f32>, mean: Array1<f32>) -> Self {
		Self { components, mean }
	}

	/// Center and project a D-dimensional vector down to k dimensions.
	pub fn project(&self, v: ArrayView1<'_, f32>) -> Array1<f32> {
		let centered = &v - &self.mean;
		centered.dot(&self.components)
	}

	pub fn dim(&self) -> usize {
		self.components.nrows()
	}

	pub fn k(&self) -> usize {
		self.components.ncols()
	}

	pub fn mean(&self) -> ArrayView1<'_, f32> {
		self.mean.view()
	}
}

/// Cyclic Jacobi eigen-decomposition of a symmetric matrix. Returns
/// (eigenvalues, eigenvectors-as-columns), unsorted.
fn jacobi_eigen(mut a: Array2<f64>) -> (Vec<f64>, Array2<f64>) {
	let n = a.nrows();
	let mut v = Array2::<f64>::eye(n);

	for _ in 0..JACOBI_MAX_SWEEPS {
		let off: f64 = (0..n)
			.flat_map(|p| (p + 1..n).map(move |q| (p, q)))
			.map(|(p, q)| a[[p, q]] * a[[p, q]])
			.sum();
		if off < JACOBI_TOLERANCE {
			break;
		}

		for p in 0..n - 1 {
			for q in p + 1..n {
				if a[[p, q]].abs() < f64::EPSILON {
					continue;
				}

				let tau = (a[[q, q]] - a[[p, p]]) / (2.0 * a[[p, q]]);
				let t = tau.signum() / (tau.abs() + (1.0 + tau * tau).sqrt());
				let c = 1.0 / (1.0 + t * t).sqrt();
				let s = t * c;

				for i in 0..n {
					let aip = a[[i, p]];
					let aiq = a[[i, q]];
					a[[i, p]] = c * aip - s * aiq;
					a[[i, q]] = s * aip + c * aiq;
				}
				for j in 0..n {
					let apj = a[[p, j]];
					let aqj = a[[q, j]];
					a[[p, j]] = c * apj - s * aqj;
					a[[q, j]] = s * apj + c * aqj;
				}
				for i in 0..n {
					let vip = v[[i, p]];
					let viq = v[[i, q]];
					v[[i, p]] = c * vip - s * viq;
					v[[i, q]] = s * vip + c * viq;
				}
			}
		}
	}

	let eigenvalues = (0..n).map(|i| a[[i, i]]).collect();
	(eigenvalues, v)
}

/// Flip the eigenvector so its largest-magnitude component is positive.
/// Eigen signs are otherwise arbitrary and would break reproducibility.
fn fix_sign(column: &mut [f64]) {
	let dominant = column
		.iter()
		.cloned()
		.fold(0.0_f64, |acc, x| if x.abs() > acc.abs() { x } else { acc });
	if dominant < 0.0 {
		for x in column.iter_mut() {
			*x = -*x;
		}
	}
}
