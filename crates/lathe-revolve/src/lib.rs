#![warn(missing_docs)]

//! Revolve profile edges into a triangle mesh.
//!
//! The pipeline:
//!
//! 1. Unordered edges are traced into chains ([`lathe_chain`]).
//! 2. Each chain gets one winding decision ([`resolve_flip`]).
//! 3. Each chain is rotated through the sweep and every quad cell between
//!    consecutive profiles is split into triangles, collapsing cells that
//!    touch the axis ([`build_mesh`]).
//! 4. Partial sweeps of closed chains get fan caps at both ends.
//!
//! # Example
//!
//! ```
//! use lathe_chain::Edge;
//! use lathe_math::Point3;
//! use lathe_revolve::{revolve_edges, AxisSpec, RevolveParams};
//!
//! let corners = [
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 1.0),
//!     Point3::new(2.0, 0.0, 1.0),
//!     Point3::new(2.0, 0.0, 0.0),
//! ];
//! let edges: Vec<Edge> = (0..4)
//!     .map(|i| Edge::new(corners[i], corners[(i + 1) % 4]))
//!     .collect();
//!
//! let params = RevolveParams::new(AxisSpec::default(), 360.0, 4);
//! let mesh = revolve_edges(&edges, &params).unwrap();
//! assert_eq!(mesh.num_triangles(), 32);
//! ```

mod cap;
mod error;
mod mesher;
mod params;
mod winding;

pub use cap::add_fan_cap;
pub use error::{Result, RevolveError};
pub use mesher::{build_mesh, mesh_chain};
pub use params::{AxisSpec, RevolveParams, Sweep, MAX_SEGMENTS, MIN_SEGMENTS};
pub use winding::resolve_flip;

use lathe_chain::{trace_edges, Chain, Edge};
use lathe_math::MathError;
use lathe_mesh::TriangleMesh;

/// Trace `edges` into chains and revolve them.
///
/// # Errors
///
/// - `EmptyProfile` if `edges` is empty
/// - `ComputationFault` for non-finite coordinates or an ill-defined axis
/// - `InvalidAngle` if the sweep angle is not in (0, 360]
/// - `InsufficientChain` if no chain has at least two points
/// - `DegenerateResult` if no triangle survives validation
pub fn revolve_edges(edges: &[Edge], params: &RevolveParams) -> Result<TriangleMesh> {
    if edges.is_empty() {
        return Err(RevolveError::EmptyProfile);
    }
    if !edges.iter().all(Edge::is_finite) {
        return Err(MathError::NonFinite("edge coordinate").into());
    }
    let sweep = Sweep::new(params)?;

    let chains = trace_edges(edges);
    tracing::debug!(edges = edges.len(), chains = chains.len(), "traced profile");

    revolve_with(&chains, &sweep)
}

/// Revolve already traced chains.
///
/// Chains with fewer than two points are ignored.
///
/// # Errors
///
/// Same as [`revolve_edges`], except that an empty slice reports
/// `InsufficientChain`.
pub fn revolve_chains(chains: &[Chain], params: &RevolveParams) -> Result<TriangleMesh> {
    let finite = chains
        .iter()
        .flat_map(Chain::points)
        .all(|p| p.coords.iter().all(|c| c.is_finite()));
    if !finite {
        return Err(MathError::NonFinite("chain coordinate").into());
    }
    let sweep = Sweep::new(params)?;
    revolve_with(chains, &sweep)
}

fn revolve_with(chains: &[Chain], sweep: &Sweep) -> Result<TriangleMesh> {
    let usable: Vec<Chain> = chains.iter().filter(|c| c.len() >= 2).cloned().collect();
    if usable.is_empty() {
        return Err(RevolveError::InsufficientChain);
    }

    let mesh = build_mesh(&usable, sweep);
    if mesh.is_empty() {
        return Err(RevolveError::DegenerateResult);
    }

    tracing::debug!(
        chains = usable.len(),
        segments = sweep.segments,
        full = sweep.full,
        triangles = mesh.num_triangles(),
        "revolve complete"
    );
    Ok(mesh)
}
