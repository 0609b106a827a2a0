use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::core::components::PickShape;

/// Distance along `ray` to the pick volume, if hit. Scale is ignored; shapes
/// are spawned unscaled.
pub fn ray_hit_distance(ray: Ray3d, transform: &Transform, shape: PickShape) -> Option<f32> {
    match shape {
        PickShape::Sphere { radius } => ray_sphere(ray, transform.translation, radius),
        PickShape::Cuboid { half_extents } => {
            ray_obb(ray, transform.translation, transform.rotation, half_extents)
        }
    }
}

fn ray_sphere(ray: Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let dir = *ray.direction;
    let oc = ray.origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    let far = -b + sq;
    if far < 0.0 {
        None
    } else {
        Some(near.max(0.0))
    }
}

/// Slab test in the box's local frame.
fn ray_obb(ray: Ray3d, center: Vec3, rotation: Quat, half: Vec3) -> Option<f32> {
    let inv = rotation.inverse();
    let o = inv * (ray.origin - center);
    let d = inv * *ray.direction;
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        if d[axis].abs() < 1e-6 {
            if o[axis].abs() > half[axis] {
                return None;
            }
            continue;
        }
        let t1 = (-half[axis] - o[axis]) / d[axis];
        let t2 = (half[axis] - o[axis]) / d[axis];
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }
    if t_max < t_min.max(0.0) {
        None
    } else {
        Some(t_min.max(0.0))
    }
}

/// Nearest candidate hit by `ray`.
pub fn nearest_hit<I>(ray: Ray3d, candidates: I) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, Transform, PickShape)>,
{
    candidates
        .into_iter()
        .filter_map(|(e, tf, shape)| ray_hit_distance(ray, &tf, shape).map(|d| (e, d)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(e, _)| e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_hit_and_miss() {
        let tf = Transform::from_xyz(0.0, 1.0, 0.0);
        let shape = PickShape::Sphere { radius: 1.0 };
        let ray = Ray3d::new(Vec3::new(0.0, 10.0, 0.0), Dir3::NEG_Y);
        let d = ray_hit_distance(ray, &tf, shape).expect("hit");
        assert!((d - 8.0).abs() < 1e-4);
        let miss = Ray3d::new(Vec3::new(3.0, 10.0, 0.0), Dir3::NEG_Y);
        assert!(ray_hit_distance(miss, &tf, shape).is_none());
    }

    #[test]
    fn rotated_box_hit() {
        let tf = Transform::from_xyz(0.0, 1.0, 0.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4));
        let shape = PickShape::Cuboid {
            half_extents: Vec3::ONE,
        };
        // Corner of the rotated box reaches ~1.41 along X.
        let ray = Ray3d::new(Vec3::new(1.3, 10.0, 0.0), Dir3::NEG_Y);
        assert!(ray_hit_distance(ray, &tf, shape).is_some());
        let unrotated = Transform::from_xyz(0.0, 1.0, 0.0);
        assert!(ray_hit_distance(ray, &unrotated, shape).is_none());
    }

    #[test]
    fn nearest_of_stacked_shapes() {
        let ray = Ray3d::new(Vec3::new(0.0, 20.0, 0.0), Dir3::NEG_Y);
        let low = Entity::from_raw(1);
        let high = Entity::from_raw(2);
        let sphere = PickShape::Sphere { radius: 1.0 };
        let hit = nearest_hit(
            ray,
            [
                (low, Transform::from_xyz(0.0, 1.0, 0.0), sphere),
                (high, Transform::from_xyz(0.0, 5.0, 0.0), sphere),
            ],
        );
        assert_eq!(hit, Some(high));
    }
}
