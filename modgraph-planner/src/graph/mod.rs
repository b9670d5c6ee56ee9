//! Module dependency graph.
//!
//! Vertices live in an arena addressed by index. Removing a vertex leaves a
//! tombstone so the indices of the others stay valid; adjacency lists store
//! edge indices, and removed edges are tombstoned the same way.

mod builder;
mod dot;

pub use builder::GraphBuilder;
pub use dot::to_dot;

use modgraph_core::catalog::ModuleDefinition;
use modgraph_core::types::VertexId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Label of ordering-only edges.
pub const VIRTUAL_EDGE_LABEL: &str = "virtual link";

/// A declared module instance in the graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Ordering id; renumbered contiguously before sorting.
    pub id: VertexId,
    /// Instance name.
    pub name: String,
    /// Module type.
    pub module_type: String,
    /// Catalog definition of the module type.
    pub definition: Arc<ModuleDefinition>,
    /// Position of the instance in the declared module list.
    pub declaration: usize,
}

impl Vertex {
    /// Whether the module is internal bookkeeping, never handed to the runtime.
    pub fn is_internal(&self) -> bool {
        self.definition.internal
    }
}

/// A directed edge from producer to consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Producer vertex index.
    pub source: usize,
    /// Consumer vertex index.
    pub target: usize,
    /// Human-readable label.
    pub description: String,
    /// Ordering-only edge carrying no data.
    pub is_virtual: bool,
}

impl Edge {
    /// A data-flow edge.
    pub fn data(source: usize, target: usize, description: impl Into<String>) -> Self {
        Self {
            source,
            target,
            description: description.into(),
            is_virtual: false,
        }
    }

    /// An ordering-only edge.
    pub fn ordering(source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            description: VIRTUAL_EDGE_LABEL.to_string(),
            is_virtual: true,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Outgoing,
    Incoming,
}

/// Directed multigraph of module instances.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
    /// Edge indices by source vertex index.
    outgoing: Vec<Vec<usize>>,
    /// Edge indices by target vertex index.
    incoming: Vec<Vec<usize>>,
    by_name: HashMap<String, usize>,
}

impl ModuleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its index. Its id starts out equal to the index.
    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        module_type: impl Into<String>,
        definition: Arc<ModuleDefinition>,
        declaration: usize,
    ) -> usize {
        let index = self.vertices.len();
        let name = name.into();
        self.by_name.insert(name.clone(), index);
        self.vertices.push(Some(Vertex {
            id: VertexId::new(index as u32),
            name,
            module_type: module_type.into(),
            definition,
            declaration,
        }));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        index
    }

    /// Add an edge between two live vertices and return its index.
    pub fn add_edge(&mut self, edge: Edge) -> usize {
        debug_assert!(self.vertex(edge.source).is_some() && self.vertex(edge.target).is_some());

        let idx = self.edges.len();
        self.outgoing[edge.source].push(idx);
        self.incoming[edge.target].push(idx);
        self.edges.push(Some(edge));
        idx
    }

    /// Remove a vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, index: usize) -> Option<Vertex> {
        let vertex = self.vertices.get_mut(index)?.take()?;
        self.by_name.remove(&vertex.name);

        let mut touching = std::mem::take(&mut self.outgoing[index]);
        touching.append(&mut self.incoming[index]);

        for idx in touching {
            if let Some(edge) = self.edges[idx].take() {
                self.outgoing[edge.source].retain(|&e| e != idx);
                self.incoming[edge.target].retain(|&e| e != idx);
            }
        }

        Some(vertex)
    }

    /// Get a live vertex by index.
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index).and_then(Option::as_ref)
    }

    /// Get the index of a live vertex by instance name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Indices of live vertices, in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(index, vertex)| vertex.as_ref().map(|_| index))
    }

    /// Live vertices with their indices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (usize, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(index, vertex)| vertex.as_ref().map(|v| (index, v)))
    }

    /// Live edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().flatten().count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Whether the graph has no live vertex.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Edges leaving a vertex.
    pub fn outgoing_edges(&self, index: usize) -> impl Iterator<Item = &Edge> {
        self.outgoing
            .get(index)
            .into_iter()
            .flat_map(|indices| indices.iter().filter_map(|&i| self.edges[i].as_ref()))
    }

    /// Edges entering a vertex.
    pub fn incoming_edges(&self, index: usize) -> impl Iterator<Item = &Edge> {
        self.incoming
            .get(index)
            .into_iter()
            .flat_map(|indices| indices.iter().filter_map(|&i| self.edges[i].as_ref()))
    }

    /// Direct successors, once per edge.
    pub fn successors(&self, index: usize) -> Vec<usize> {
        self.outgoing_edges(index).map(|edge| edge.target).collect()
    }

    /// Direct predecessors, once per edge.
    pub fn predecessors(&self, index: usize) -> Vec<usize> {
        self.incoming_edges(index).map(|edge| edge.source).collect()
    }

    /// Number of edges leaving a vertex.
    pub fn out_degree(&self, index: usize) -> usize {
        self.outgoing.get(index).map_or(0, Vec::len)
    }

    /// Number of edges entering a vertex.
    pub fn in_degree(&self, index: usize) -> usize {
        self.incoming.get(index).map_or(0, Vec::len)
    }

    /// Whether `to` can be reached from `from` following edges forwards, or
    /// failing that, backwards.
    pub fn is_connected(&self, from: usize, to: usize) -> bool {
        self.reaches(from, to, Direction::Outgoing) || self.reaches(from, to, Direction::Incoming)
    }

    fn reaches(&self, from: usize, to: usize, direction: Direction) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }

            let next = match direction {
                Direction::Outgoing => self.successors(current),
                Direction::Incoming => self.predecessors(current),
            };

            for neighbour in next {
                if neighbour == to {
                    return true;
                }
                if !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        false
    }

    /// Renumber live vertices `0..N` in insertion order.
    pub fn reassign_ids(&mut self) {
        let mut next = VertexId::default();
        for vertex in self.vertices.iter_mut().flatten() {
            vertex.id = next;
            next = next.next();
        }
    }
}
