//! Mapping world-space contact points onto the whiteboard's pixel grid.
//!
//! The board is a unit quad centered on its local origin, lying in the local
//! XY plane. A world point is brought into local space with the inverse of
//! the board transform, flattened by dropping local Z, shifted by 0.5 into
//! UV space and finally scaled by the surface size.

use glam::{Affine3A, Vec2, Vec3};

use crate::constants::UV_CENTER_OFFSET;

/// World-to-surface projection for one whiteboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProjection {
    world_from_local: Affine3A,
    local_from_world: Affine3A,
}

impl Default for SurfaceProjection {
    fn default() -> Self {
        Self::identity()
    }
}

impl SurfaceProjection {
    /// Build a projection from the board's world transform.
    ///
    /// A degenerate transform (zero scale) produces non-finite points, which
    /// the whiteboard rejects per source.
    pub fn new(world_from_local: Affine3A) -> Self {
        Self {
            world_from_local,
            local_from_world: world_from_local.inverse(),
        }
    }

    /// Board at the world origin with unit size
    pub fn identity() -> Self {
        Self::new(Affine3A::IDENTITY)
    }

    pub fn world_from_local(&self) -> Affine3A {
        self.world_from_local
    }

    /// Project a world point into the board's local space
    #[inline]
    pub fn world_to_local(&self, world_point: Vec3) -> Vec3 {
        self.local_from_world.transform_point3(world_point)
    }

    /// Flatten a world point onto the board and express it in UV space.
    /// Points on the quad land in [0, 1]; points off the quad fall outside.
    #[inline]
    pub fn world_to_uv(&self, world_point: Vec3) -> Vec2 {
        let local = self.world_to_local(world_point);
        Vec2::new(local.x + UV_CENTER_OFFSET, local.y + UV_CENTER_OFFSET)
    }

    /// Scale a UV coordinate into pixel space for a `size`x`size` surface
    #[inline]
    pub fn uv_to_pixel(uv: Vec2, size: u32) -> Vec2 {
        uv * size as f32
    }

    /// World point straight to surface pixel coordinates
    #[inline]
    pub fn world_to_pixel(&self, world_point: Vec3, size: u32) -> Vec2 {
        Self::uv_to_pixel(self.world_to_uv(world_point), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity_center_maps_to_surface_center() {
        let projection = SurfaceProjection::identity();
        assert!(approx(projection.world_to_uv(Vec3::ZERO), Vec2::splat(0.5)));
        assert!(approx(projection.world_to_pixel(Vec3::ZERO, 64), Vec2::splat(32.0)));
    }

    #[test]
    fn test_corners_map_to_uv_corners() {
        let projection = SurfaceProjection::identity();
        assert!(approx(projection.world_to_uv(Vec3::new(-0.5, -0.5, 0.0)), Vec2::ZERO));
        assert!(approx(projection.world_to_uv(Vec3::new(0.5, 0.5, 0.0)), Vec2::ONE));
    }

    #[test]
    fn test_depth_is_flattened() {
        let projection = SurfaceProjection::identity();
        let near = projection.world_to_uv(Vec3::new(0.1, 0.2, 0.0));
        let far = projection.world_to_uv(Vec3::new(0.1, 0.2, 0.3));
        assert!(approx(near, far));
    }

    #[test]
    fn test_translated_and_scaled_board() {
        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::new(2.0, 2.0, 1.0),
            Quat::IDENTITY,
            Vec3::new(10.0, 0.0, -3.0),
        );
        let projection = SurfaceProjection::new(transform);

        // The board center in world space
        assert!(approx(projection.world_to_uv(Vec3::new(10.0, 0.0, -3.0)), Vec2::splat(0.5)));
        // One world unit right is half a board width
        assert!(approx(
            projection.world_to_uv(Vec3::new(11.0, 0.0, -3.0)),
            Vec2::new(1.0, 0.5)
        ));
    }

    #[test]
    fn test_rotated_board() {
        // Rotate the board a quarter turn about Z
        let transform = Affine3A::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let projection = SurfaceProjection::new(transform);
        // World +Y is local +X after the rotation
        assert!(approx(
            projection.world_to_uv(Vec3::new(0.0, 0.25, 0.0)),
            Vec2::new(0.75, 0.5)
        ));
    }

    #[test]
    fn test_degenerate_transform_is_non_finite() {
        let projection = SurfaceProjection::new(Affine3A::from_scale(Vec3::ZERO));
        let p = projection.world_to_pixel(Vec3::ONE, 64);
        assert!(!p.is_finite());
    }
}
