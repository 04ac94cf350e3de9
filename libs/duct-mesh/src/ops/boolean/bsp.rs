//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! Each node holds a dividing plane (the plane of its first polygon), the
//! polygons coplanar with it, and front/back subtrees. The boolean
//! operations are built from three primitives:
//!
//! - `clip_to`: remove polygons of this tree that lie inside another tree
//! - `invert`: flip all polygons and swap front/back subtrees
//! - `all_polygons`: collect every polygon in the tree

use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.insert(polygons);
        root
    }

    /// Inserts polygons below this node, creating subtrees as needed.
    ///
    /// The first polygon of the first insertion becomes the node's
    /// splitting plane.
    fn insert(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        let mut polygons = polygons;
        if self.polygons.is_empty() {
            // First insertion: adopt a splitter.
            self.polygons.push(polygons.swap_remove(0));
        }
        let plane = *self.polygons[0].plane();

        let mut front = Vec::new();
        let mut back = Vec::new();
        for poly in &polygons {
            // Coplanar polygons stay at this node.
            let mut coplanar_back = Vec::new();
            poly.split(
                &plane,
                &mut self.polygons,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            self.polygons.extend(coplanar_back);
        }

        if !front.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .insert(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Default::default).insert(back);
        }
    }

    /// Inverts the solid this tree represents: flips every polygon and
    /// swaps the front/back subtrees, iteratively.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            for poly in &mut node.polygons {
                poly.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of the given polygons that lie inside the solid
    /// represented by this tree.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            let Some(splitter) = node.polygons.first() else {
                result.extend(polys);
                continue;
            };
            let plane = *splitter.plane();

            let mut front = Vec::new();
            let mut back = Vec::new();
            for poly in &polys {
                let mut coplanar_front = Vec::new();
                let mut coplanar_back = Vec::new();
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front,
                    &mut back,
                );
                // Coplanar fragments follow their facing.
                front.extend(coplanar_front);
                back.extend(coplanar_back);
            }

            match node.front.as_deref() {
                Some(subtree) => stack.push((subtree, front)),
                None => result.extend(front),
            }
            // Without a back subtree, back fragments are inside the solid
            // and vanish.
            if let Some(subtree) = node.back.as_deref() {
                stack.push((subtree, back));
            }
        }

        result
    }

    /// Clips every polygon of this tree to another tree.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects every polygon in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }
        result
    }
}
