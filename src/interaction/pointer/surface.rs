use bevy::math::primitives::InfinitePlane3d;
use bevy::math::Ray3d;
use bevy::prelude::*;

/// Invisible pointer target: a bounded ground plane (y = 0) backed by a
/// bounded plane through the origin facing the viewer, so any ray that misses
/// the ground square still lands somewhere.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct InteractionSurface {
    pub half_extent: f32,
}

impl Default for InteractionSurface {
    fn default() -> Self {
        Self { half_extent: 25.0 }
    }
}

impl InteractionSurface {
    /// World point hit by `ray`. The ground plane takes precedence; the view
    /// plane only answers rays that miss the ground square.
    pub fn intersect(&self, ray: Ray3d) -> Option<Vec3> {
        self.ground_hit(ray).or_else(|| self.view_hit(ray))
    }

    pub fn ground_hit(&self, ray: Ray3d) -> Option<Vec3> {
        let t = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
        let p = ray.get_point(t);
        (p.x.abs() <= self.half_extent && p.z.abs() <= self.half_extent).then_some(p)
    }

    pub fn view_hit(&self, ray: Ray3d) -> Option<Vec3> {
        let normal = -*ray.direction;
        let t = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(normal))?;
        let p = ray.get_point(t);
        let right = normal.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(normal);
        (p.dot(right).abs() <= self.half_extent && p.dot(up).abs() <= self.half_extent)
            .then_some(p)
    }
}

/// Spawn point derived from a surface hit.
pub fn spawn_point(hit: Vec3, vertical_offset: f32) -> Vec3 {
    hit + Vec3::Y * vertical_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_at(x: f32, z: f32) -> Ray3d {
        Ray3d::new(Vec3::new(x, 10.0, z), Dir3::NEG_Y)
    }

    #[test]
    fn vertical_ray_hits_ground() {
        let s = InteractionSurface::default();
        let hit = s.intersect(down_at(3.0, -2.0)).expect("hit");
        assert!(hit.distance(Vec3::new(3.0, 0.0, -2.0)) < 1e-4);
        assert!(spawn_point(hit, 5.0).distance(Vec3::new(3.0, 5.0, -2.0)) < 1e-4);
    }

    #[test]
    fn horizontal_ray_falls_back_to_view_plane() {
        let s = InteractionSurface::default();
        let ray = Ray3d::new(Vec3::new(2.0, 3.0, 40.0), Dir3::NEG_Z);
        assert!(s.ground_hit(ray).is_none());
        let hit = s.intersect(ray).expect("view plane hit");
        assert!(hit.distance(Vec3::new(2.0, 3.0, 0.0)) < 1e-4);
    }

    #[test]
    fn ray_outside_bounds_misses() {
        let s = InteractionSurface { half_extent: 5.0 };
        assert!(s.intersect(down_at(30.0, 0.0)).is_none());
        let away = Ray3d::new(Vec3::new(0.0, 10.0, 0.0), Dir3::Y);
        assert!(s.intersect(away).is_none());
    }
}
