use globe_core::{project_latlon, Result};

/// Globe vertex: position on the sphere plus its latitude/longitude in degrees.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub latlon: [f32; 2],
}

pub struct GlobeMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude grid on a sphere of `radius`.
///
/// Vertices come from the same projection used for markers, so markers sit
/// exactly their configured offset above the drawn surface. The seam at
/// +/-180 degrees and both poles are duplicated to keep `latlon` continuous
/// per triangle.
pub fn globe_mesh(radius: f64, segments: u32, rings: u32) -> Result<GlobeMesh> {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let lat = 90.0 - 180.0 * ring as f64 / rings as f64;
        for seg in 0..=segments {
            let lon = -180.0 + 360.0 * seg as f64 / segments as f64;
            let p = project_latlon(lat, lon, radius, 0.0)?;
            vertices.push(GlobeVertex {
                position: p.as_vec3().to_array(),
                latlon: [lat as f32, lon as f32],
            });
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    Ok(GlobeMesh { vertices, indices })
}
