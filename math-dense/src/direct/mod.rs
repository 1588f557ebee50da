//! Direct (elimination based) kernels for square matrices
//!
//! This module provides:
//! - [`select_pivot`]: partial pivot selection for one elimination step
//! - [`eliminate`]: Gaussian elimination in three [`EliminationMode`]s
//! - [`lu_decompose`]: LU decomposition without pivoting

mod elimination;
mod lu;
mod pivot;

pub use elimination::{EliminationMode, diagonal_product, eliminate};
pub use lu::{lu_decompose, lu_pack, lu_reconstruct};
pub use pivot::{pivot_in_place, pivot_row, select_pivot};
