//! Ambient, non-core helpers: parsing meshes from the OBJ subset in the
//! external interface contract, procedurally generating a UV sphere, and
//! decoding an on-disk image into a [`Raster`] texture.

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::error::{LoadError, TextureLoadError};
use crate::math::{radians, Vec2, Vec3};
use crate::mesh::{Mesh, Shading, Triangle, Vertex};
use crate::raster::Raster;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct WavefrontIndices {
    v: usize,
    vt: usize,
    vn: usize,
}

pub fn mesh_from_obj_file(path: impl AsRef<Path>, shading: Shading) -> Result<Mesh, LoadError> {
    let text = std::fs::read_to_string(path)?;
    mesh_from_obj_str(&text, shading)
}

/// Parses the OBJ subset (`v`, `vt`, `vn`, triangular `f a/b/c ...`) into a
/// [`Mesh`], deduplicating vertices that share the same `(v, vt, vn)`
/// triple across faces via a hash map.
pub fn mesh_from_obj_str(text: &str, shading: Shading) -> Result<Mesh, LoadError> {
    let mut positions = Vec::new();
    let mut texcoords = Vec::new();
    let mut normals = Vec::new();
    let mut face_indices = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_number = line_no + 1;
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else { continue };

        match tag {
            "v" => {
                let xyz = parse_f64_triple(&mut tokens, line_number, "v")?;
                positions.push(Vec3::new(xyz[0], xyz[1], xyz[2]));
            }
            "vt" => {
                let uv = parse_f64_pair(&mut tokens, line_number, "vt")?;
                texcoords.push(Vec2::new(uv[0], uv[1]));
            }
            "vn" => {
                let xyz = parse_f64_triple(&mut tokens, line_number, "vn")?;
                normals.push(Vec3::new(xyz[0], xyz[1], xyz[2]));
            }
            "f" => {
                let rest: Vec<&str> = tokens.collect();
                if rest.len() != 3 {
                    return Err(LoadError::Parse {
                        line: line_number,
                        reason: "only triangular faces are supported".into(),
                    });
                }
                for token in rest {
                    face_indices.push(parse_face_vertex(
                        token,
                        line_number,
                        positions.len(),
                        texcoords.len(),
                        normals.len(),
                    )?);
                }
            }
            "#" => {}
            other if !other.is_empty() => {
                warn!("obj loader: ignoring unrecognized directive {other:?} at line {line_number}");
            }
            _ => {}
        }
    }

    let mut index_map: HashMap<WavefrontIndices, usize> = HashMap::new();
    let mut vertices = Vec::new();
    for wi in &face_indices {
        if !index_map.contains_key(wi) {
            let index = vertices.len();
            vertices.push(Vertex::new(
                positions[wi.v],
                Vec3::ONE,
                texcoords[wi.vt],
                normals[wi.vn],
            ));
            index_map.insert(*wi, index);
        }
    }

    let mut triangles = Vec::new();
    for chunk in face_indices.chunks(3) {
        if chunk.len() < 3 {
            break;
        }
        triangles.push(Triangle::new(
            index_map[&chunk[0]],
            index_map[&chunk[1]],
            index_map[&chunk[2]],
        ));
    }

    if triangles.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Mesh::new(vertices, triangles, shading))
}

fn parse_f64_triple<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    tag: &str,
) -> Result<[f64; 3], LoadError> {
    let mut out = [0.0; 3];
    for slot in &mut out {
        let token = tokens.next().ok_or_else(|| LoadError::Parse {
            line,
            reason: format!("{tag} line is missing a component"),
        })?;
        *slot = token.parse().map_err(|_| LoadError::Parse {
            line,
            reason: format!("could not parse {token:?} as a number"),
        })?;
    }
    Ok(out)
}

fn parse_f64_pair<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    tag: &str,
) -> Result<[f64; 2], LoadError> {
    let mut out = [0.0; 2];
    for slot in &mut out {
        let token = tokens.next().ok_or_else(|| LoadError::Parse {
            line,
            reason: format!("{tag} line is missing a component"),
        })?;
        *slot = token.parse().map_err(|_| LoadError::Parse {
            line,
            reason: format!("could not parse {token:?} as a number"),
        })?;
    }
    Ok(out)
}

fn parse_face_vertex(
    token: &str,
    line: usize,
    position_count: usize,
    texcoord_count: usize,
    normal_count: usize,
) -> Result<WavefrontIndices, LoadError> {
    let mut parts = token.split('/');
    let malformed = || LoadError::Parse {
        line,
        reason: format!("malformed face vertex {token:?}, expected v/vt/vn"),
    };
    let v: i64 = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let vt: i64 = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let vn: i64 = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;

    let to_index = |one_based: i64, count: usize| -> Result<usize, LoadError> {
        let idx = one_based - 1;
        if idx < 0 || idx as usize >= count {
            return Err(LoadError::Parse {
                line,
                reason: format!("index {one_based} is out of range"),
            });
        }
        Ok(idx as usize)
    };

    Ok(WavefrontIndices {
        v: to_index(v, position_count)?,
        vt: to_index(vt, texcoord_count)?,
        vn: to_index(vn, normal_count)?,
    })
}

/// Procedurally generates a UV sphere (shared pole vertices, `rings` latitude
/// bands, `segments` longitude divisions per band).
pub fn generate_uv_sphere(rings: usize, segments: usize, shading: Shading) -> Mesh {
    let mut verts = Vec::new();
    let mut tris = Vec::new();

    verts.push(Vertex::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::ONE,
        Vec2::new(0.5, 1.0),
        Vec3::new(0.0, 1.0, 0.0),
    ));
    verts.push(Vertex::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::ONE,
        Vec2::new(0.5, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
    ));

    let ring_angle_inc = radians(175.0) / (rings + 1) as f64;
    let segment_angle_inc = radians(360.0) / segments as f64;
    let mut ring_angle = radians(2.5);
    let v_inc = -1.0 / (rings + 1) as f64;
    let u_inc = -1.0 / segments as f64;
    let mut v = 1.0 + v_inc;

    for _ in 0..rings {
        let ring_radius = ring_angle.sin();
        let y = ring_angle.cos();

        let mut segment_angle: f64 = 0.0;
        let mut u = 1.0;
        for _ in 0..=segments {
            let x = segment_angle.cos() * ring_radius;
            let z = segment_angle.sin() * ring_radius;
            verts.push(Vertex::new(
                Vec3::new(x, y, z),
                Vec3::ONE,
                Vec2::new(u, v),
                Vec3::new(x, y, z),
            ));
            segment_angle += segment_angle_inc;
            u += u_inc;
        }
        ring_angle += ring_angle_inc;
        v += v_inc;
    }

    let mut ring0_index = 2usize;
    let mut ring1_index = ring0_index + segments + 1;
    for _ in 0..rings.saturating_sub(1) {
        for s in 0..segments {
            tris.push(Triangle::new(s + ring0_index, s + ring0_index + 1, s + ring1_index + 1));
            tris.push(Triangle::new(s + ring1_index + 1, s + ring1_index, s + ring0_index));
        }
        ring0_index = ring1_index;
        ring1_index += segments + 1;
    }

    for s in 0..segments {
        tris.push(Triangle::new(0, s + 2 + 1, s + 2));
        tris.push(Triangle::new(1, ring0_index + s, ring0_index + s + 1));
    }

    Mesh::new(verts, tris, shading)
}

/// Decodes an on-disk image (PNG/JPEG/etc via the `image` crate) into a
/// [`Raster`] suitable for use as a texture.
pub fn texture_from_image_file(path: impl AsRef<Path>) -> Result<Raster, TextureLoadError> {
    let img = image::open(path)?.into_rgba8();
    let (width, height) = img.dimensions();
    let mut raster = Raster::new(width as i32, height as i32);
    raster.load_from_buffer(img.as_raw());
    Ok(raster)
}
