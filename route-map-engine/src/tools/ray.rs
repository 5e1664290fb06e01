use bevy::prelude::*;
use constants::render_settings::BILLBOARD_PICK_THICKNESS;

/// Cursor position in window pixels to normalized device coordinates,
/// with Y pointing up. `None` for a zero-sized window.
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    ))
}

/// Unproject `ndc` through the inverse view-projection into a world ray
/// starting on the near plane.
pub fn ray_from_ndc(ndc: Vec2, camera_transform: &GlobalTransform, clip_from_view: Mat4) -> Option<Ray3d> {
    let world_from_clip = camera_transform.compute_matrix() * clip_from_view.inverse();
    // Reverse-z: the near plane sits at depth 1.
    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let far = world_from_clip.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    let direction = Dir3::new(far - near).ok()?;
    Some(Ray3d::new(near, direction))
}

pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

/// Unit quad scaled by its transform, given a sliver of depth so that
/// the slab test has a volume to hit.
pub fn ray_hits_billboard(ray: Ray3d, xf: &GlobalTransform) -> Option<f32> {
    ray_hits_obb(
        ray.origin,
        ray.direction.as_vec3(),
        *xf,
        Vec3::new(1.0, 1.0, BILLBOARD_PICK_THICKNESS),
    )
}

// Slab-method ray-AABB intersection, returns the nearest non-negative t
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: inside it or never.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}
