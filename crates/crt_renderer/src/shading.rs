//! Direct lighting from point lights with hard shadows.
//!
//! Each light contributes `albedo * intensity / (4 pi r^2) * max(0, L . N)`
//! unless a shadow ray from the surface towards the light is blocked.
//! Colors stay in linear float space here; quantization happens on output.

use std::f32::consts::PI;

use crate::hittable::{HitRecord, Hittable};
use crt_core::{Light, Scene};
use crt_math::{Color, Interval, Ray, Vec3};

/// Shade a surface hit by summing the visible lights.
///
/// With no lights the result is black, not the background.
pub fn shade(scene: &Scene, hit: &HitRecord) -> Color {
    let albedo = scene.meshes[hit.mesh_index].albedo;

    scene
        .lights
        .iter()
        .fold(Color::ZERO, |color, light| {
            color + light_contribution(scene, hit.point, hit.normal, light)
        })
        * albedo
}

/// Light arriving from `light` at `point` on a surface with unit `normal`.
///
/// Zero if the light is occluded, behind the surface or sits exactly on the
/// point.
pub fn light_contribution(scene: &Scene, point: Vec3, normal: Vec3, light: &Light) -> Color {
    let to_light = light.position - point;
    let distance = to_light.length();
    if distance <= f32::EPSILON {
        return Color::ZERO;
    }
    let light_dir = to_light / distance;

    let cos_theta = light_dir.dot(normal).max(0.0);
    if cos_theta == 0.0 {
        return Color::ZERO;
    }

    if is_in_shadow(scene, point, normal, light) {
        return Color::ZERO;
    }

    let sphere_area = 4.0 * PI * distance * distance;
    light.albedo * (light.intensity / sphere_area * cos_theta)
}

/// Returns true if any triangle blocks the segment from `point` to the light.
///
/// The shadow ray starts `shadow_bias` above the surface along `normal` and
/// ends at the light, so geometry beyond the light casts no shadow.
pub fn is_in_shadow(scene: &Scene, point: Vec3, normal: Vec3, light: &Light) -> bool {
    let origin = point + normal * scene.settings.shadow_bias;
    let to_light = light.position - origin;
    let shadow_ray = Ray::new(origin, to_light);

    scene.occluded(&shadow_ray, Interval::forward().with_max(to_light.length()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::FaceFilter;
    use crt_core::{Camera, Mesh, Settings};

    /// Large floor in the plane y = 0, facing up.
    fn floor() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-10.0, 0.0, -10.0),
                Vec3::new(-10.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, -10.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    /// Small horizontal blocker at height `y`, facing up.
    fn blocker(y: f32) -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-1.0, y, -1.0),
                Vec3::new(-1.0, y, 1.0),
                Vec3::new(1.0, y, 1.0),
                Vec3::new(1.0, y, -1.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    fn scene_with(meshes: Vec<Mesh>, lights: Vec<Light>) -> Scene {
        let mut scene = Scene::new(Camera::default(), Settings::default());
        for mesh in meshes {
            scene.add_mesh(mesh);
        }
        for light in lights {
            scene.add_light(light);
        }
        scene
    }

    /// Hit on the floor (mesh 0) at the origin, found by a ray from above.
    fn floor_hit(scene: &Scene) -> HitRecord {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        scene.meshes[0]
            .hit(&ray, Interval::forward(), FaceFilter::FrontOnly)
            .expect("should hit the floor")
    }

    fn white_light(position: Vec3, intensity: f32) -> Light {
        Light::new(position, intensity).with_albedo(Color::ONE)
    }

    #[test]
    fn test_no_lights_is_black() {
        let mut scene = scene_with(vec![floor()], Vec::new());
        scene.settings.background_color = Color::new(0.3, 0.6, 0.9);

        let hit = floor_hit(&scene);
        assert_eq!(shade(&scene, &hit), Color::ZERO);
    }

    #[test]
    fn test_light_directly_above() {
        let scene = scene_with(vec![floor()], vec![white_light(Vec3::new(0.0, 2.0, 0.0), 100.0)]);
        let hit = floor_hit(&scene);

        let expected = 100.0 / (4.0 * PI * 4.0);
        let color = shade(&scene, &hit);
        assert!((color.x - expected).abs() < 1e-6);
        assert_eq!(color.x, color.y);
        assert_eq!(color.y, color.z);
    }

    #[test]
    fn test_monotonic_in_intensity() {
        let mut previous = -1.0;
        for intensity in [0.0, 1.0, 10.0, 50.0, 400.0] {
            let scene = scene_with(
                vec![floor()],
                vec![white_light(Vec3::new(0.0, 3.0, 0.0), intensity)],
            );
            let value = shade(&scene, &floor_hit(&scene)).x;
            assert!(value > previous, "{} should exceed {}", value, previous);
            previous = value;
        }
    }

    #[test]
    fn test_inverse_square_falloff() {
        let near = scene_with(vec![floor()], vec![white_light(Vec3::new(0.0, 2.0, 0.0), 80.0)]);
        let far = scene_with(vec![floor()], vec![white_light(Vec3::new(0.0, 4.0, 0.0), 80.0)]);

        let near_value = shade(&near, &floor_hit(&near)).x;
        let far_value = shade(&far, &floor_hit(&far)).x;

        assert!((far_value / near_value - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_inverse_square_at_an_angle() {
        // Same direction (45 degrees), twice the distance
        let near = scene_with(vec![floor()], vec![white_light(Vec3::new(1.0, 1.0, 0.0), 80.0)]);
        let far = scene_with(vec![floor()], vec![white_light(Vec3::new(2.0, 2.0, 0.0), 80.0)]);

        let near_value = shade(&near, &floor_hit(&near)).x;
        let far_value = shade(&far, &floor_hit(&far)).x;

        assert!(near_value > 0.0);
        assert!((far_value / near_value - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_lambert_cosine() {
        let above = scene_with(vec![floor()], vec![white_light(Vec3::new(0.0, 2.0, 0.0), 80.0)]);
        // Same distance, 60 degrees off the normal
        let angle = 60.0_f32.to_radians();
        let slanted_pos = Vec3::new(2.0 * angle.sin(), 2.0 * angle.cos(), 0.0);
        let slanted = scene_with(vec![floor()], vec![white_light(slanted_pos, 80.0)]);

        let above_value = shade(&above, &floor_hit(&above)).x;
        let slanted_value = shade(&slanted, &floor_hit(&slanted)).x;
        assert!((slanted_value / above_value - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_light_below_surface_contributes_nothing() {
        let scene = scene_with(vec![floor()], vec![white_light(Vec3::new(0.0, -2.0, 0.0), 80.0)]);
        assert_eq!(shade(&scene, &floor_hit(&scene)), Color::ZERO);
    }

    #[test]
    fn test_occluder_blocks_only_its_light() {
        let blocked = white_light(Vec3::new(0.0, 4.0, 0.0), 100.0);
        let free = white_light(Vec3::new(6.0, 4.0, 0.0), 100.0);

        let open = scene_with(vec![floor()], vec![blocked, free]);
        let shadowed = scene_with(vec![floor(), blocker(2.0)], vec![blocked, free]);

        let open_hit = floor_hit(&open);
        let shadowed_hit = floor_hit(&shadowed);
        assert_eq!(shadowed_hit.mesh_index, 0);

        let n = open_hit.normal;
        let p = open_hit.point;

        assert!(light_contribution(&open, p, n, &blocked).x > 0.0);
        assert_eq!(light_contribution(&shadowed, p, n, &blocked), Color::ZERO);

        // The other light is untouched
        assert_eq!(
            light_contribution(&open, p, n, &free),
            light_contribution(&shadowed, p, n, &free)
        );
        assert_eq!(
            shade(&shadowed, &shadowed_hit),
            light_contribution(&open, p, n, &free)
        );
    }

    #[test]
    fn test_back_facing_occluder_casts_shadow() {
        let mut flipped = blocker(2.0);
        flipped.triangles = vec![[0, 2, 1], [0, 3, 2]];
        let light = white_light(Vec3::new(0.0, 4.0, 0.0), 100.0);
        let scene = scene_with(vec![floor(), flipped], vec![light]);

        let hit = floor_hit(&scene);
        assert!(is_in_shadow(&scene, hit.point, hit.normal, &light));
    }

    #[test]
    fn test_occluder_beyond_light_casts_no_shadow() {
        let light = white_light(Vec3::new(0.0, 2.0, 0.0), 100.0);
        let scene = scene_with(vec![floor(), blocker(3.0)], vec![light]);

        let hit = floor_hit(&scene);
        assert!(!is_in_shadow(&scene, hit.point, hit.normal, &light));
        assert!(shade(&scene, &hit).x > 0.0);
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        let light = white_light(Vec3::new(3.0, 1.0, -2.0), 100.0);
        let scene = scene_with(vec![floor()], vec![light]);

        let hit = floor_hit(&scene);
        assert!(!is_in_shadow(&scene, hit.point, hit.normal, &light));
    }

    #[test]
    fn test_light_and_mesh_albedo_tint() {
        let light = Light::new(Vec3::new(0.0, 2.0, 0.0), 100.0).with_albedo(Color::new(1.0, 0.5, 0.0));
        let tinted_floor = floor().with_albedo(Color::new(0.5, 1.0, 1.0));
        let scene = scene_with(vec![tinted_floor], vec![light]);

        let base = 100.0 / (4.0 * PI * 4.0);
        let color = shade(&scene, &floor_hit(&scene));
        assert!((color.x - base * 0.5).abs() < 1e-6);
        assert!((color.y - base * 0.5).abs() < 1e-6);
        assert_eq!(color.z, 0.0);
    }
}
