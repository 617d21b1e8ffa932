//! Triangle mesh data: vertices, faces, and derived face/vertex normals.

use crate::math::{Vec2, Vec3};

/// Position, color, texture coordinate, and normal for one vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub xyz: Vec3,
    pub rgb: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(xyz: Vec3, rgb: Vec3, uv: Vec2, normal: Vec3) -> Self {
        Self { xyz, rgb, uv, normal }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            xyz: Vec3::ZERO,
            rgb: Vec3::ONE,
            uv: Vec2::ZERO,
            normal: Vec3::ZERO,
        }
    }
}

/// Three vertex indices, counter-clockwise winding when viewed from
/// outside defines the front face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
}

impl Triangle {
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self { v0, v1, v2 }
    }
}

/// How per-vertex normals are derived from face normals at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Keep and renormalize the vertex normals already present on the
    /// input vertices (smooth/Gouraud shading).
    KeepNormals,
    /// Duplicate vertices so each triangle owns three copies of its face
    /// normal (flat shading).
    MakeFlat,
}

#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    face_normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>, shading: Shading) -> Self {
        let mut mesh = Self {
            vertices,
            triangles,
            face_normals: Vec::new(),
        };
        mesh.compute_normals(shading);
        mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }

    pub fn invert_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal.scl(-1.0);
        }
        for n in &mut self.face_normals {
            n.scl(-1.0);
        }
    }

    fn compute_normals(&mut self, shading: Shading) {
        self.face_normals.clear();
        for tri in &self.triangles {
            let p0 = self.vertices[tri.v0].xyz;
            let mut p1 = self.vertices[tri.v1].xyz;
            let mut p2 = self.vertices[tri.v2].xyz;
            p1.sub(p0);
            p2.sub(p0);
            let mut normal = p1.cross(p2);
            normal.norm();
            self.face_normals.push(normal);
        }

        match shading {
            Shading::KeepNormals => {
                for v in &mut self.vertices {
                    v.normal.norm();
                }
            }
            Shading::MakeFlat => {
                let mut new_vertices = Vec::with_capacity(self.triangles.len() * 3);
                let mut new_triangles = Vec::with_capacity(self.triangles.len());
                for (i, tri) in self.triangles.iter().enumerate() {
                    let normal = self.face_normals[i];
                    let mut v0 = self.vertices[tri.v0];
                    let mut v1 = self.vertices[tri.v1];
                    let mut v2 = self.vertices[tri.v2];
                    v0.normal = normal;
                    v1.normal = normal;
                    v2.normal = normal;
                    let base = new_vertices.len();
                    new_vertices.push(v0);
                    new_vertices.push(v1);
                    new_vertices.push(v2);
                    new_triangles.push(Triangle::new(base, base + 1, base + 2));
                }
                self.vertices = new_vertices;
                self.triangles = new_triangles;
            }
        }
    }
}
