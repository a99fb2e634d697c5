#![warn(missing_docs)]

//! Chain reconstruction for lathe.
//!
//! Turns an unordered set of line segments into ordered polylines:
//!
//! 1. Endpoints are quantized to [`PointKey`]s so nearly coincident
//!    points join.
//! 2. [`AdjacencyGraph::build`] indexes every key into a compact arena
//!    and records neighbors in first-seen order.
//! 3. [`trace_all_chains`] walks the graph once, producing open or
//!    closed [`Chain`]s.
//!
//! # Example
//!
//! ```
//! use lathe_chain::{trace_edges, Edge};
//! use lathe_math::{Point3, Tolerance};
//!
//! let a = Point3::new(0.0, 0.0, 0.0);
//! let b = Point3::new(1.0, 0.0, 0.0);
//! let c = Point3::new(1.0, 1.0, 0.0);
//! let edges = vec![Edge::new(b, c), Edge::new(a, b), Edge::new(c, a)];
//!
//! let chains = trace_edges(&edges);
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].len(), 4);
//! assert!(chains[0].is_closed(&Tolerance::DEFAULT));
//! ```

mod graph;
mod key;
mod trace;

pub use graph::AdjacencyGraph;
pub use key::{PointKey, QUANTIZE_DECIMALS};
pub use trace::{trace_all_chains, Chain};

use lathe_math::Point3;
use serde::{Deserialize, Serialize};

/// An unordered line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub start: Point3,
    /// Second endpoint.
    pub end: Point3,
}

impl Edge {
    /// Create an edge between two points.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Check that both endpoints have finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.start
            .coords
            .iter()
            .chain(self.end.coords.iter())
            .all(|c| c.is_finite())
    }
}

/// Build the adjacency graph for `edges` and trace every chain in it.
pub fn trace_edges(edges: &[Edge]) -> Vec<Chain> {
    let graph = AdjacencyGraph::build(edges);
    trace_all_chains(&graph)
}
