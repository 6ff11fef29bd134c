//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! One triangle per leaf. Nodes live in an append-only arena and refer to
//! each other by [`NodeIndex`], so the tree has no pointers and can be
//! shared freely between threads once built.
//!
//! Construction is a median split by count: sort the triangles of a range
//! by centroid along the longest axis of their centroid bounds, then cut
//! the range in half. This keeps the depth at O(log n) whatever the
//! spatial distribution of the mesh.

use std::sync::Arc;

use lux_core::Mesh;
use lux_math::{Aabb, DVec3, Ray};

use crate::hittable::{HitRecord, Hittable};
use crate::triangle::intersect_triangle;

/// Index of a triangle in the mesh.
pub type TriangleIndex = usize;

/// Position of a node in the BVH arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Raw arena offset.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Payload of a node: a single triangle, or exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { triangle: TriangleIndex },
    Internal { left: NodeIndex, right: NodeIndex },
}

/// A node in the BVH arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhNode {
    /// Bounds of every triangle below this node
    pub bbox: Aabb,
    /// `None` only for the root
    pub parent: Option<NodeIndex>,
    pub kind: NodeKind,
}

impl BvhNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn left(&self) -> Option<NodeIndex> {
        match self.kind {
            NodeKind::Internal { left, .. } => Some(left),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<NodeIndex> {
        match self.kind {
            NodeKind::Internal { right, .. } => Some(right),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn triangle(&self) -> Option<TriangleIndex> {
        match self.kind {
            NodeKind::Leaf { triangle } => Some(triangle),
            NodeKind::Internal { .. } => None,
        }
    }
}

/// Predicate counts from a single traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Ray-box tests performed (one per popped node)
    pub box_tests: usize,
    /// Ray-triangle tests performed (one per reached leaf)
    pub triangle_tests: usize,
}

/// BVH over the triangles of a mesh.
pub struct Bvh {
    nodes: Vec<BvhNode>,
    /// `None` for a mesh without triangles
    root: Option<NodeIndex>,
    mesh: Arc<Mesh>,
}

impl Bvh {
    /// Build a BVH over every triangle of `mesh`.
    pub fn build(mesh: Arc<Mesh>) -> Self {
        let triangle_count = mesh.triangle_count();

        let (nodes, root) = {
            let centroids: Vec<DVec3> = (0..triangle_count).map(|i| mesh.centroid(i)).collect();
            let mut order: Vec<TriangleIndex> = (0..triangle_count).collect();

            let mut builder = Builder {
                mesh: &mesh,
                centroids: &centroids,
                nodes: Vec::with_capacity((2 * triangle_count).saturating_sub(1)),
            };
            let root = if order.is_empty() {
                None
            } else {
                Some(builder.build_subtree(&mut order))
            };
            (builder.nodes, root)
        };

        let bvh = Self { nodes, root, mesh };
        log::debug!(
            "Built BVH: {} triangles, {} nodes, depth {}",
            triangle_count,
            bvh.node_count(),
            bvh.depth()
        );
        bvh
    }

    /// Root node, or `None` for an empty mesh.
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    /// True if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node at `index`.
    ///
    /// # Panics
    /// If `index` did not come from this tree.
    pub fn node(&self, index: NodeIndex) -> &BvhNode {
        &self.nodes[index.0]
    }

    /// All nodes in arena order. Children always precede their parent.
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeIndex, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let NodeKind::Internal { left, right } = self.nodes[index.0].kind {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// The mesh this tree indexes.
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// Nearest hit along `ray`, also reporting how many tests were run.
    ///
    /// Iterative depth-first search with an explicit stack, so call-stack
    /// usage does not depend on tree shape. Subtrees whose box the ray
    /// misses are skipped without touching their triangles.
    pub fn nearest_hit_with_stats(&self, ray: &Ray) -> (Option<HitRecord>, TraversalStats) {
        let mut stats = TraversalStats::default();
        let Some(root) = self.root else {
            return (None, stats);
        };

        let mut closest: Option<HitRecord> = None;
        let mut stack = Vec::with_capacity(64);
        stack.push(root);

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index.0];

            stats.box_tests += 1;
            if !node.bbox.hit(ray) {
                continue;
            }

            match node.kind {
                NodeKind::Leaf { triangle } => {
                    stats.triangle_tests += 1;
                    let [a, b, c] = self.mesh.triangle(triangle);
                    if let Some(hit) = intersect_triangle(ray, a, b, c) {
                        if closest.map_or(true, |best| hit.t < best.t) {
                            closest = Some(HitRecord::from_triangle_hit(hit, triangle));
                        }
                    }
                }
                NodeKind::Internal { left, right } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        (closest, stats)
    }
}

impl Hittable for Bvh {
    fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.nearest_hit_with_stats(ray).0
    }
}

/// Recursive median-split construction into a shared arena.
struct Builder<'a> {
    mesh: &'a Mesh,
    centroids: &'a [DVec3],
    nodes: Vec<BvhNode>,
}

impl Builder<'_> {
    /// Build the subtree for a non-empty range of triangles.
    ///
    /// Children are appended before their parent, so a parent's links
    /// always point at lower arena offsets.
    fn build_subtree(&mut self, triangles: &mut [TriangleIndex]) -> NodeIndex {
        debug_assert!(!triangles.is_empty());

        if triangles.len() == 1 {
            let triangle = triangles[0];
            let bbox = self.mesh.triangle_bounds(triangle);
            return self.push(BvhNode {
                bbox,
                parent: None,
                kind: NodeKind::Leaf { triangle },
            });
        }

        let centroids = self.centroids;
        let centroid_bounds = triangles.iter().fold(Aabb::EMPTY, |mut acc, &t| {
            acc.extend(centroids[t]);
            acc
        });
        let axis = centroid_bounds.longest_axis();
        triangles.sort_unstable_by(|&a, &b| centroids[a][axis].total_cmp(&centroids[b][axis]));

        let mesh = self.mesh;
        let bbox = triangles.iter().fold(Aabb::EMPTY, |acc, &t| {
            Aabb::surrounding(&acc, &mesh.triangle_bounds(t))
        });

        let mid = triangles.len() / 2;
        let (left_half, right_half) = triangles.split_at_mut(mid);
        let left = self.build_subtree(left_half);
        let right = self.build_subtree(right_half);

        let parent = self.push(BvhNode {
            bbox,
            parent: None,
            kind: NodeKind::Internal { left, right },
        });
        self.nodes[left.0].parent = Some(parent);
        self.nodes[right.0].parent = Some(parent);
        parent
    }

    fn push(&mut self, node: BvhNode) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex(self.nodes.len() - 1)
    }
}
