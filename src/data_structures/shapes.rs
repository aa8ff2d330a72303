//! Procedural geometry for the primitive shapes the scene is built from.
//!
//! All shapes are unit sized so the object transform alone decides their
//! final extent. Triangles wind counter-clockwise when seen from outside and
//! every vertex carries a unit normal.

use std::f32::consts::TAU;

use cgmath::{InnerSpace, Vector3, vec3};

use crate::data_structures::model::ModelVertex;

/// Segments around the circumference of round shapes.
pub const ROUND_SEGMENTS: u32 = 36;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// 2x2 square in the XZ plane facing +Y.
    Plane,
    /// Unit cube centred on the origin.
    Box,
    /// Radius 1 base at y=0, apex at y=1.
    Cone,
    /// Radius 1, from y=0 to y=1, capped at both ends.
    Cylinder,
    /// Radius 1 at y=0 narrowing to 0.5 at y=1.
    TaperedCylinder,
    /// Triangular pyramid centred on the origin, from y=-0.5 to y=0.5.
    Pyramid3,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Plane,
        Shape::Box,
        Shape::Cone,
        Shape::Cylinder,
        Shape::TaperedCylinder,
        Shape::Pyramid3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Plane => "plane",
            Shape::Box => "box",
            Shape::Cone => "cone",
            Shape::Cylinder => "cylinder",
            Shape::TaperedCylinder => "tapered cylinder",
            Shape::Pyramid3 => "triangular pyramid",
        }
    }
}

/// CPU-side indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn generate(shape: Shape) -> Self {
        let mut mesh = Self::default();
        match shape {
            Shape::Plane => mesh.push_quad(
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(0.0, 0.0, -1.0),
            ),
            Shape::Box => {
                let h = 0.5;
                let faces = [
                    (vec3(h, 0.0, 0.0), vec3(0.0, 0.0, -h), vec3(0.0, h, 0.0)),
                    (vec3(-h, 0.0, 0.0), vec3(0.0, 0.0, h), vec3(0.0, h, 0.0)),
                    (vec3(0.0, h, 0.0), vec3(h, 0.0, 0.0), vec3(0.0, 0.0, -h)),
                    (vec3(0.0, -h, 0.0), vec3(h, 0.0, 0.0), vec3(0.0, 0.0, h)),
                    (vec3(0.0, 0.0, h), vec3(h, 0.0, 0.0), vec3(0.0, h, 0.0)),
                    (vec3(0.0, 0.0, -h), vec3(-h, 0.0, 0.0), vec3(0.0, h, 0.0)),
                ];
                for (center, u, v) in faces {
                    mesh.push_quad(center, u, v);
                }
            }
            Shape::Cone => mesh.push_frustum(1.0, 0.0),
            Shape::Cylinder => mesh.push_frustum(1.0, 1.0),
            Shape::TaperedCylinder => mesh.push_frustum(1.0, 0.5),
            Shape::Pyramid3 => {
                let apex = vec3(0.0, 0.5, 0.0);
                let base = [
                    vec3(-0.5, -0.5, 0.5),
                    vec3(0.5, -0.5, 0.5),
                    vec3(0.0, -0.5, -0.5),
                ];
                mesh.push_triangle([base[0], base[2], base[1]], [[0.0, 0.0], [0.5, 1.0], [1.0, 0.0]]);
                for i in 0..3 {
                    let (a, b) = (base[i], base[(i + 1) % 3]);
                    mesh.push_triangle([a, b, apex], [[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]);
                }
            }
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(&mut self, position: Vector3<f32>, tex_coords: [f32; 2], normal: Vector3<f32>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(ModelVertex {
            position: position.into(),
            tex_coords,
            normal: normal.normalize().into(),
        });
        index
    }

    /// Square spanning `center ± u ± v`, facing `u × v`.
    fn push_quad(&mut self, center: Vector3<f32>, u: Vector3<f32>, v: Vector3<f32>) {
        let normal = u.cross(v);
        let corners = [
            (center - u - v, [0.0, 0.0]),
            (center + u - v, [1.0, 0.0]),
            (center + u + v, [1.0, 1.0]),
            (center - u + v, [0.0, 1.0]),
        ];
        let first = self.vertices.len() as u32;
        for (position, uv) in corners {
            self.push_vertex(position, uv, normal);
        }
        self.indices
            .extend_from_slice(&[first, first + 1, first + 2, first, first + 2, first + 3]);
    }

    /// Flat shaded triangle, `corners` given counter-clockwise.
    fn push_triangle(&mut self, corners: [Vector3<f32>; 3], uvs: [[f32; 2]; 3]) {
        let normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
        for (position, uv) in corners.into_iter().zip(uvs) {
            let index = self.push_vertex(position, uv, normal);
            self.indices.push(index);
        }
    }

    /// Round solid from radius `bottom` at y=0 to radius `top` at y=1. A top
    /// radius of zero closes the side into an apex and drops the top cap.
    fn push_frustum(&mut self, bottom: f32, top: f32) {
        let ring = |i: u32| {
            let angle = TAU * i as f32 / ROUND_SEGMENTS as f32;
            (angle.cos(), angle.sin())
        };

        let side_start = self.vertices.len() as u32;
        for i in 0..=ROUND_SEGMENTS {
            let (cos, sin) = ring(i);
            let u = i as f32 / ROUND_SEGMENTS as f32;
            let normal = vec3(cos, bottom - top, sin);
            self.push_vertex(vec3(bottom * cos, 0.0, bottom * sin), [u, 0.0], normal);
            self.push_vertex(vec3(top * cos, 1.0, top * sin), [u, 1.0], normal);
        }
        for i in 0..ROUND_SEGMENTS {
            let b0 = side_start + 2 * i;
            let t0 = b0 + 1;
            let b1 = b0 + 2;
            let t1 = b0 + 3;
            self.indices.extend_from_slice(&[b0, t0, b1]);
            if top > 0.0 {
                self.indices.extend_from_slice(&[b1, t0, t1]);
            }
        }

        self.push_cap(bottom, 0.0, false);
        if top > 0.0 {
            self.push_cap(top, 1.0, true);
        }
    }

    fn push_cap(&mut self, radius: f32, y: f32, facing_up: bool) {
        let normal = if facing_up {
            vec3(0.0, 1.0, 0.0)
        } else {
            vec3(0.0, -1.0, 0.0)
        };
        let center = self.push_vertex(vec3(0.0, y, 0.0), [0.5, 0.5], normal);
        for i in 0..=ROUND_SEGMENTS {
            let angle = TAU * i as f32 / ROUND_SEGMENTS as f32;
            let (cos, sin) = (angle.cos(), angle.sin());
            self.push_vertex(
                vec3(radius * cos, y, radius * sin),
                [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
                normal,
            );
        }
        for i in 0..ROUND_SEGMENTS {
            let a = center + 1 + i;
            let b = a + 1;
            if facing_up {
                self.indices.extend_from_slice(&[center, b, a]);
            } else {
                self.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
}
