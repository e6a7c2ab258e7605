use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

/// Directed weighted graph on nodes `0..node_count`, stored as adjacency
/// lists. Endpoints are validated on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<W> {
    adjacency: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<W: Copy> Graph<W> {
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(node_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Takes ownership of per-node `(neighbor, weight)` lists.
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let node_count = adjacency.len();
        let mut edge_count = 0;
        for edges in &adjacency {
            for &(to, _) in edges {
                if to >= node_count {
                    return Err(Error::InvalidNode { node: to, node_count });
                }
            }
            edge_count += edges.len();
        }
        Ok(Self { adjacency, edge_count })
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges_from(&self, node: usize) -> Result<&[(usize, W)]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    /// All edges, grouped by source node in increasing order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, edges)| {
            edges.iter().map(move |&(to, weight)| Edge { from, to, weight })
        })
    }

    pub(crate) fn adjacency(&self) -> &[Vec<(usize, W)>] {
        &self.adjacency
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(Error::InvalidNode { node, node_count: self.node_count() })
        }
    }
}
