#![allow(dead_code)]
use std::collections::BTreeSet;
use wisp_mesh::prelude::*;

pub fn wid(u: u32) -> WispId {
    WispId::new(u)
}

pub fn set(ids: impl IntoIterator<Item = WispId>) -> BTreeSet<WispId> {
    ids.into_iter().collect()
}

/// Polygon face with `n` vertices; edge `i` joins `v[i]` and `v[(i+1) % n]`
/// and the face lists its edges in order.
pub fn polygon(max_degree: Degree, n: usize) -> (Topomesh, Vec<WispId>, Vec<WispId>, WispId) {
    let mut m = Topomesh::new(max_degree);
    let v: Vec<_> = (0..n).map(|_| m.add_wisp(0, None).unwrap()).collect();
    let e: Vec<_> = (0..n)
        .map(|i| {
            let e = m.add_wisp(1, None).unwrap();
            m.link_all(e, [v[i], v[(i + 1) % n]]).unwrap();
            e
        })
        .collect();
    let f = m.add_wisp(2, None).unwrap();
    m.link_all(f, e.clone()).unwrap();
    (m, v, e, f)
}

/// Unit cube: vertex `i` sits at the corner whose coordinate bits are `i`.
pub struct Cube {
    pub mesh: Topomesh,
    pub vertices: Vec<WispId>,
    /// `(a, b, edge)` with `a < b` vertex indices.
    pub edges: Vec<(usize, usize, WispId)>,
    /// Faces ordered as `(axis, side)`: x0, x1, y0, y1, z0, z1.
    pub faces: Vec<WispId>,
    pub volume: WispId,
}

impl Cube {
    pub fn new() -> Self {
        let mut mesh = Topomesh::new(3);
        let vertices: Vec<_> = (0..8).map(|_| mesh.add_wisp(0, None).unwrap()).collect();
        let mut edges = Vec::new();
        for a in 0..8usize {
            for bit in [1usize, 2, 4] {
                let b = a | bit;
                if b != a {
                    let e = mesh.add_wisp(1, None).unwrap();
                    mesh.link_all(e, [vertices[a], vertices[b]]).unwrap();
                    edges.push((a, b, e));
                }
            }
        }
        let mut faces = Vec::new();
        for bit in [1usize, 2, 4] {
            for side in [0, bit] {
                let f = mesh.add_wisp(2, None).unwrap();
                let on_face = |i: usize| i & bit == side;
                let borders: Vec<_> = edges
                    .iter()
                    .filter(|(a, b, _)| on_face(*a) && on_face(*b))
                    .map(|(_, _, e)| *e)
                    .collect();
                mesh.link_all(f, borders).unwrap();
                faces.push(f);
            }
        }
        let volume = mesh.add_wisp(3, None).unwrap();
        mesh.link_all(volume, faces.clone()).unwrap();
        Cube {
            mesh,
            vertices,
            edges,
            faces,
            volume,
        }
    }

    pub fn edge(&self, a: usize, b: usize) -> WispId {
        let (a, b) = (a.min(b), a.max(b));
        self.edges
            .iter()
            .find(|(x, y, _)| *x == a && *y == b)
            .map(|(_, _, e)| *e)
            .unwrap()
    }
}

/// Cell made of `k` bigon faces around two poles, like the segments of an
/// orange. Meridian `i` joins the poles; face `i` is bounded by meridians
/// `i` and `(i+1) % k`.
pub fn orange(k: usize) -> (Topomesh, Vec<WispId>, Vec<WispId>, WispId) {
    let mut m = Topomesh::new(3);
    let north = m.add_wisp(0, None).unwrap();
    let south = m.add_wisp(0, None).unwrap();
    let meridians: Vec<_> = (0..k)
        .map(|_| {
            let e = m.add_wisp(1, None).unwrap();
            m.link_all(e, [north, south]).unwrap();
            e
        })
        .collect();
    let faces: Vec<_> = (0..k)
        .map(|i| {
            let f = m.add_wisp(2, None).unwrap();
            m.link_all(f, [meridians[i], meridians[(i + 1) % k]]).unwrap();
            f
        })
        .collect();
    let cell = m.add_wisp(3, None).unwrap();
    m.link_all(cell, faces.clone()).unwrap();
    (m, meridians, faces, cell)
}
