// File: sampler.rs
// Description: Cone-uniform sampling of pulling-handle offsets.
// Given the pulling axis, draws an offset in the plane perpendicular to it
// so that the full handle direction stays within the cone aperture.

use rand::Rng;

use crate::error::PullingError;
use crate::structure::coordinate::Coordinate;

/// Tolerance for the perpendicularity sanity check, in the units of the
/// axis-offset dot product.
const PERPENDICULAR_EPS: f64 = 1e-3;

fn dot3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross3(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm3(a: &[f64; 3]) -> f64 {
    dot3(a, a).sqrt()
}

/// Sample a random offset perpendicular to `axis`.
///
/// The azimuth of the offset is uniform in `[0, 2pi)` and its magnitude is
/// uniform in `[0, |axis| * tan(max_angle_deg))`, so `axis + offset` lies
/// within a cone of aperture `max_angle_deg` around `axis`. The offset is
/// returned on its own; callers add it to the handle position derived from
/// the axis.
///
/// Intermediate math runs in f64; at typical axis lengths an f32 dot
/// product can exceed the 1e-3 perpendicularity tolerance from rounding
/// alone.
pub fn sample_cone_offset<R: Rng>(
    rng: &mut R,
    axis: &Coordinate,
    max_angle_deg: f32,
) -> Result<Coordinate, PullingError> {
    let axis64 = [axis.x as f64, axis.y as f64, axis.z as f64];
    let axis_length = norm3(&axis64);
    if axis_length == 0.0 {
        return Err(PullingError::DegenerateGeometry(
            "cannot sample around a zero-length axis".to_string(),
        ));
    }
    let normal = [
        axis64[0] / axis_length,
        axis64[1] / axis_length,
        axis64[2] / axis_length,
    ];

    // Orthonormal basis of the plane perpendicular to the axis: project the
    // axis component out of a random vector. Redraw when the random vector
    // is (numerically) parallel to the axis.
    let x_basis = loop {
        let raw = [
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
        ];
        let along = dot3(&raw, &normal);
        let perp = [
            raw[0] - along * normal[0],
            raw[1] - along * normal[1],
            raw[2] - along * normal[2],
        ];
        let perp_norm = norm3(&perp);
        if perp_norm > 1e-8 {
            break [perp[0] / perp_norm, perp[1] / perp_norm, perp[2] / perp_norm];
        }
    };
    let y_basis = cross3(&normal, &x_basis);

    // Uniform polar draw inside the cone's base disc
    let radius = rng.gen::<f64>() * axis_length * (max_angle_deg as f64).to_radians().tan();
    let phi = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let x_coefficient = radius * phi.cos();
    let y_coefficient = radius * phi.sin();

    let offset = [
        x_coefficient * x_basis[0] + y_coefficient * y_basis[0],
        x_coefficient * x_basis[1] + y_coefficient * y_basis[1],
        x_coefficient * x_basis[2] + y_coefficient * y_basis[2],
    ];

    if dot3(&axis64, &offset).abs() > PERPENDICULAR_EPS {
        return Err(PullingError::Geometry(
            "could not build a perpendicular vector".to_string(),
        ));
    }

    Ok(Coordinate::new(offset[0] as f32, offset[1] as f32, offset[2] as f32))
}
