//! # Causal Set Graph
//!
//! The structured artifact the rest of the system consumes: a DAG whose
//! nodes are sampled spacetime points and whose directed edges connect
//! timelike-separated pairs, earlier → later.
//!
//! We assume a conformal spacetime — lightcones are straight lines — so
//! whether two points are connected follows from the Minkowski metric (the
//! periodic variant when a boundary spec is given).

use hashbrown::HashMap;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metric::{PeriodicBox, is_timelike, minkowski, minkowski_periodic};
use crate::{Error, Result};

// ============================================================================
// DTOs
// ============================================================================

/// Node identifier: the point's row index in the coordinate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the causal set: a point index tagged with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// The point's coordinates; index 0 is the time coordinate.
    pub position: Vec<f64>,
}

// ============================================================================
// GraphOptions
// ============================================================================

/// Options for [`causal_set_graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Probability with which an allowed edge appears. 1.0 keeps every
    /// timelike pair; smaller values thin edges with independent Bernoulli
    /// draws per candidate.
    pub p: f64,
    /// Periodic boundary spec; when set, separations use the nearest-image
    /// Minkowski variant.
    pub periodic: Option<PeriodicBox>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { p: 1.0, periodic: None }
    }
}

impl GraphOptions {
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    pub fn with_periodic(mut self, periodic: PeriodicBox) -> Self {
        self.periodic = Some(periodic);
        self
    }
}

// ============================================================================
// CausalSetGraph
// ============================================================================

/// A causal set DAG. Immutable once built.
///
/// Nodes are the row indices 0..N-1 of the coordinate matrix the graph was
/// built from, each carrying its position. Edges always point from the
/// earlier time coordinate to the later one, so the graph is acyclic by
/// construction, with no self-loops and no duplicates.
///
/// Serialized form is the node and edge lists only; the adjacency maps are
/// rebuilt on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CausalSetGraphWire", into = "CausalSetGraphWire")]
pub struct CausalSetGraph {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
    successors: HashMap<NodeId, Vec<NodeId>>,
    predecessors: HashMap<NodeId, Vec<NodeId>>,
}

/// Wire format: the two lists external consumers read.
#[derive(Serialize, Deserialize)]
struct CausalSetGraphWire {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
}

impl From<CausalSetGraphWire> for CausalSetGraph {
    fn from(wire: CausalSetGraphWire) -> Self {
        Self::new(wire.nodes, wire.edges)
    }
}

impl From<CausalSetGraph> for CausalSetGraphWire {
    fn from(graph: CausalSetGraph) -> Self {
        Self { nodes: graph.nodes, edges: graph.edges }
    }
}

impl CausalSetGraph {
    fn new(nodes: Vec<Node>, edges: Vec<(NodeId, NodeId)>) -> Self {
        let mut successors: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut predecessors: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for &(src, dst) in &edges {
            successors.entry(src).or_default().push(dst);
            predecessors.entry(dst).or_default().push(src);
        }
        Self { nodes, edges, successors, predecessors }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes, in row order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All directed edges (earlier, later), in build order.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Position attached to a node, if the id is in range.
    pub fn position(&self, id: NodeId) -> Option<&[f64]> {
        self.nodes.get(id.0).map(|n| n.position.as_slice())
    }

    /// Nodes reached by an edge leaving `id` (causal future, one step).
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.successors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with an edge into `id` (causal past, one step).
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        self.predecessors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).len()
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.predecessors(id).len()
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.successors(src).contains(&dst)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Build a causal set DAG from an N×D coordinate matrix.
///
/// For every ordered pair (i, j) whose time coordinates satisfy
/// `R[i,0] < R[j,0]` — a cheap pre-filter, not the causal test itself —
/// the pair survives an independent Bernoulli(p) draw and becomes an edge
/// iff its Minkowski separation is strictly timelike. Lightlike pairs do
/// not produce edges; see [`crate::metric::is_timelike`].
pub fn causal_set_graph<R: Rng + ?Sized>(
    rng: &mut R,
    coords: &Array2<f64>,
    opts: &GraphOptions,
) -> Result<CausalSetGraph> {
    if !(0.0..=1.0).contains(&opts.p) {
        return Err(Error::InvalidParameter(format!(
            "Edge probability p must lie in [0, 1], got {}",
            opts.p
        )));
    }

    let n = coords.nrows();
    let rows: Vec<Vec<f64>> = coords.rows().into_iter().map(|r| r.to_vec()).collect();

    let nodes: Vec<Node> = rows
        .iter()
        .enumerate()
        .map(|(i, position)| Node { id: NodeId(i), position: position.clone() })
        .collect();

    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if rows[i][0] >= rows[j][0] {
                continue;
            }
            if opts.p < 1.0 && rng.random::<f64>() >= opts.p {
                continue;
            }
            let separation = match &opts.periodic {
                Some(boundary) => minkowski_periodic(&rows[i], &rows[j], boundary)?,
                None => minkowski(&rows[i], &rows[j])?,
            };
            if is_timelike(separation) {
                edges.push((NodeId(i), NodeId(j)));
            }
        }
    }

    debug!(nodes = n, edges = edges.len(), p = opts.p, "built causal set graph");
    Ok(CausalSetGraph::new(nodes, edges))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn pure_timelike_chain_is_fully_connected() {
        // Three points on the time axis, no spatial separation:
        // every earlier point precedes every later one.
        let coords = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge(NodeId(0), NodeId(1)));
        assert!(graph.has_edge(NodeId(0), NodeId(2)));
        assert!(graph.has_edge(NodeId(1), NodeId(2)));
    }

    #[test]
    fn spacelike_pairs_get_no_edge() {
        let coords = array![[0.0, 0.0], [0.5, 5.0]];
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn lightlike_pairs_get_no_edge() {
        // Δt = Δx = 1: separation exactly 0, strictly-timelike test excludes it
        let coords = array![[0.0, 0.0], [1.0, 1.0]];
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn zero_probability_drops_every_edge() {
        let coords = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        let opts = GraphOptions::default().with_p(0.0);
        let graph = causal_set_graph(&mut rng(), &coords, &opts).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let coords = array![[0.0, 0.0]];
        for p in [-0.1, 1.1] {
            let opts = GraphOptions::default().with_p(p);
            assert!(causal_set_graph(&mut rng(), &coords, &opts).is_err());
        }
    }

    #[test]
    fn periodic_boundary_connects_wrapped_neighbors() {
        // Spatially 0.9 apart in a box of period 1: nearest image is 0.1,
        // well inside the lightcone of Δt = 0.5. Without the boundary the
        // plain separation 0.81 − 0.25 is spacelike.
        let coords = array![[0.0, 0.0], [0.5, 0.9]];

        let plain = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();
        assert_eq!(plain.edge_count(), 0);

        let boundary = PeriodicBox::new(vec![Some(1.0)]).unwrap();
        let opts = GraphOptions::default().with_periodic(boundary);
        let wrapped = causal_set_graph(&mut rng(), &coords, &opts).unwrap();
        assert_eq!(wrapped.edge_count(), 1);
        assert!(wrapped.has_edge(NodeId(0), NodeId(1)));
    }

    #[test]
    fn nodes_carry_their_positions() {
        let coords = array![[0.0, 0.25], [1.0, 0.75]];
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();
        assert_eq!(graph.position(NodeId(0)), Some(&[0.0, 0.25][..]));
        assert_eq!(graph.position(NodeId(1)), Some(&[1.0, 0.75][..]));
        assert_eq!(graph.position(NodeId(9)), None);
    }

    #[test]
    fn adjacency_matches_edge_list() {
        let coords = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();

        assert_eq!(graph.successors(NodeId(0)), &[NodeId(1), NodeId(2)]);
        assert_eq!(graph.predecessors(NodeId(2)), &[NodeId(0), NodeId(1)]);
        assert_eq!(graph.out_degree(NodeId(0)), 2);
        assert_eq!(graph.in_degree(NodeId(0)), 0);
    }

    #[test]
    fn empty_matrix_builds_empty_graph() {
        let coords = Array2::<f64>::zeros((0, 2));
        let graph = causal_set_graph(&mut rng(), &coords, &GraphOptions::default()).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
