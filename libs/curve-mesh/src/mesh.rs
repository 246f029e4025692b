//! # Polyline Mesh Data Structure
//!
//! Core polyline representation with vertices and edge connectivity.

use glam::DVec3;

/// A polyline mesh: ordered vertices joined by edges.
///
/// Edges are index pairs into the vertex list. Per contributing spline
/// the edges form either an open path or a closed loop; the container
/// itself does not constrain topology beyond index validity.
///
/// All geometry uses f64 internally. Export to f32 only happens at the
/// host boundary.
///
/// # Example
///
/// ```rust
/// use curve_mesh::PolylineMesh;
/// use glam::DVec3;
///
/// let mut mesh = PolylineMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_edge(0, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolylineMesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Edge indices (2 indices per edge)
    edges: Vec<[u32; 2]>,
}

impl PolylineMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds an edge by vertex indices.
    pub fn add_edge(&mut self, v0: u32, v1: u32) {
        self.edges.push([v0, v1]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the edge at the given index.
    #[inline]
    pub fn edge(&self, index: usize) -> [u32; 2] {
        self.edges[index]
    }

    /// Merges another mesh into this one.
    ///
    /// The other mesh's edge indices are shifted by this mesh's current
    /// vertex count, so both vertex and edge order stay stable: first all
    /// of `self`, then all of `other`.
    pub fn merge(&mut self, other: &PolylineMesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for edge in &other.edges {
            self.edges.push([edge[0] + offset, edge[1] + offset]);
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All edge indices are valid
    /// - No self-loop edges (both endpoints equal)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for edge in &self.edges {
            if edge[0] >= vertex_count || edge[1] >= vertex_count {
                return false;
            }

            if edge[0] == edge[1] {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for the host boundary.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports edge indices as u32 array for the host boundary.
    ///
    /// Returns flattened [a, b, a, b, ...] array.
    pub fn edges_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.edges.len() * 2);
        for edge in &self.edges {
            result.push(edge[0]);
            result.push(edge[1]);
        }
        result
    }
}
