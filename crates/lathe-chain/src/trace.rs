//! Chain extraction from an adjacency graph.

use std::collections::HashSet;

use lathe_math::{Point3, Tolerance};

use crate::AdjacencyGraph;

/// An ordered polyline traced from the edge graph.
///
/// A chain is closed when its last point repeats its first.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    points: Vec<Point3>,
}

impl Chain {
    /// Wrap an ordered list of points.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// The ordered points.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of points, counting the closing duplicate of a closed chain.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the chain has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when first and last points coincide within `tol`.
    pub fn is_closed(&self, tol: &Tolerance) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => tol.points_equal(first, last),
            _ => false,
        }
    }

    /// Take ownership of the points.
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

/// Trace every chain in `graph`.
///
/// Vertices are considered in arena order and each one is consumed at
/// most once. At a junction the first unvisited neighbor is followed and
/// the remaining branches are left for later starting vertices, so a
/// branching profile may not be fully covered.
pub fn trace_all_chains(graph: &AdjacencyGraph) -> Vec<Chain> {
    let mut visited = vec![false; graph.len()];
    let mut chains = Vec::new();

    for v in 0..graph.len() {
        if visited[v] {
            continue;
        }
        let start = resolve_start(graph, v);
        let points = trace_from(graph, start, &mut visited);
        if points.len() >= 2 {
            chains.push(Chain::new(points));
        }
    }

    tracing::debug!(
        vertices = graph.len(),
        chains = chains.len(),
        "traced chains"
    );
    chains
}

/// Walk back from a mid-chain vertex to the end of its run.
///
/// Stops at the first vertex whose degree is not 2. On a pure cycle the
/// walk returns to a vertex it has already passed, which becomes the start.
fn resolve_start(graph: &AdjacencyGraph, v: usize) -> usize {
    if graph.degree(v) != 2 {
        return v;
    }

    let mut seen = HashSet::from([v]);
    let mut prev = v;
    let mut cur = graph.neighbors(v)[0];
    loop {
        if seen.contains(&cur) || graph.degree(cur) != 2 {
            return cur;
        }
        seen.insert(cur);
        let next = graph
            .neighbors(cur)
            .iter()
            .copied()
            .find(|&n| n != prev)
            .unwrap_or(prev);
        prev = cur;
        cur = next;
    }
}

fn trace_from(graph: &AdjacencyGraph, start: usize, visited: &mut [bool]) -> Vec<Point3> {
    let mut points = Vec::new();
    let mut prev: Option<usize> = None;
    let mut cur = start;

    loop {
        points.push(graph.point(cur));
        visited[cur] = true;

        let rest: Vec<usize> = graph
            .neighbors(cur)
            .iter()
            .copied()
            .filter(|&n| Some(n) != prev)
            .collect();

        let next = match rest.as_slice() {
            [] => break,
            [n] if *n == start => {
                if points.len() > 2 {
                    points.push(graph.point(start));
                }
                break;
            }
            [n] => *n,
            _ => match rest.iter().copied().find(|&n| !visited[n]) {
                Some(n) => {
                    tracing::debug!(
                        vertex = cur,
                        branches = rest.len(),
                        "junction: following first unvisited branch"
                    );
                    n
                }
                None => break,
            },
        };

        prev = Some(cur);
        cur = next;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{trace_edges, Edge};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square() -> [Point3; 4] {
        [
            p(1.0, 0.0, 0.0),
            p(1.0, 0.0, 1.0),
            p(2.0, 0.0, 1.0),
            p(2.0, 0.0, 0.0),
        ]
    }

    fn square_edges() -> Vec<Edge> {
        let [a, b, c, d] = square();
        vec![
            Edge::new(a, b),
            Edge::new(b, c),
            Edge::new(c, d),
            Edge::new(d, a),
        ]
    }

    #[test]
    fn test_square_any_order_is_one_closed_chain() {
        let tol = Tolerance::DEFAULT;
        let edges = square_edges();
        let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 1, 0, 2], [2, 0, 3, 1], [1, 3, 2, 0]];
        for order in orders {
            // Reverse some edges too so endpoint order varies
            let shuffled: Vec<Edge> = order
                .iter()
                .enumerate()
                .map(|(k, &i)| {
                    let e = edges[i];
                    if k % 2 == 0 {
                        e
                    } else {
                        Edge::new(e.end, e.start)
                    }
                })
                .collect();
            let chains = trace_edges(&shuffled);
            assert_eq!(chains.len(), 1, "order {order:?}");
            assert_eq!(chains[0].len(), 5, "order {order:?}");
            assert!(chains[0].is_closed(&tol));
            assert_eq!(chains[0].points()[0], chains[0].points()[4]);
        }
    }

    #[test]
    fn test_disjoint_groups() {
        let tol = Tolerance::DEFAULT;
        let mut edges = square_edges();
        edges.push(Edge::new(p(5.0, 0.0, 0.0), p(5.0, 0.0, 1.0)));
        edges.push(Edge::new(p(5.0, 0.0, 1.0), p(6.0, 0.0, 2.0)));

        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 2);
        assert!(chains[0].is_closed(&tol));
        assert_eq!(chains[0].len(), 5);
        assert!(!chains[1].is_closed(&tol));
        assert_eq!(chains[1].len(), 3);
    }

    #[test]
    fn test_quantization_joins_close_endpoints() {
        let edges = [
            Edge::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)),
            Edge::new(p(1.00001, 1.00001, 1.00001), p(2.0, 0.0, 0.0)),
        ];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 3);
    }

    #[test]
    fn test_quantization_separates_distant_endpoints() {
        let edges = [
            Edge::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)),
            Edge::new(p(1.001, 1.001, 1.001), p(2.0, 0.0, 0.0)),
        ];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 2);
        assert!(chains.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_open_chain_starting_mid_run() {
        let (a, b, c, d) = (
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
        );
        // `b` is seen first and has degree 2; tracing starts from an end
        let edges = [Edge::new(b, c), Edge::new(a, b), Edge::new(c, d)];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].points(), &[d, c, b, a]);
    }

    #[test]
    fn test_pure_cycle_starts_at_first_vertex() {
        let [a, b, c, d] = square();
        let edges = [
            Edge::new(b, c),
            Edge::new(a, b),
            Edge::new(c, d),
            Edge::new(d, a),
        ];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 1);
        let pts = chains[0].points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], b);
        assert_eq!(pts[4], b);
    }

    #[test]
    fn test_triangle_loop_closes() {
        let (a, b, c) = (p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.5, 0.0, 1.0));
        let chains = trace_edges(&[Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].points(), &[a, b, c, a]);
    }

    #[test]
    fn test_single_edge() {
        let chains = trace_edges(&[Edge::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0))]);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 2);
        assert!(!chains[0].is_closed(&Tolerance::DEFAULT));
    }

    #[test]
    fn test_degenerate_edge_yields_nothing() {
        let chains = trace_edges(&[Edge::new(p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.00001))]);
        assert!(chains.is_empty());
    }

    #[test]
    fn test_star_junction_branches_recovered_later() {
        let j = p(0.0, 0.0, 0.0);
        let (a, b, c) = (p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0));
        let edges = [Edge::new(j, a), Edge::new(j, b), Edge::new(j, c)];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].points(), &[j, a]);
        assert_eq!(chains[1].points(), &[b, j, c]);
    }

    #[test]
    fn test_junction_drops_untraversed_edge() {
        // Square with a diagonal: every vertex is consumed by the outer
        // loop, so the diagonal never becomes a chain.
        let [a, b, c, d] = square();
        let edges = [
            Edge::new(a, b),
            Edge::new(b, c),
            Edge::new(c, d),
            Edge::new(d, a),
            Edge::new(a, c),
        ];
        let chains = trace_edges(&edges);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].points(), &[a, b, c, d, a]);
    }
}
