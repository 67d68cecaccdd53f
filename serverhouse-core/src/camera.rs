//! Fixed camera for the WebGL2 cube.
//!
//! The cube never moves: a perspective projection and a constant pull-back
//! along -Z. Matrices are column-major, ready for `uniformMatrix4fv`.

use crate::config::{CAMERA_DISTANCE, FAR_PLANE, FOV_DEGREES, NEAR_PLANE};
use glam::{Mat4, Vec3};

/// Perspective projection for the given width/height ratio. A degenerate
/// aspect (zero, negative, non-finite) falls back to square.
pub fn projection_matrix(aspect: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    Mat4::perspective_rh_gl(FOV_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

pub fn model_view_matrix() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE))
}

/// Always identity: lighting stays flat and does not follow the model-view
/// transform.
pub fn normal_matrix(_model_view: &Mat4) -> Mat4 {
    Mat4::IDENTITY
}

/// The three matrix uniforms for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUniforms {
    pub projection: [f32; 16],
    pub model_view: [f32; 16],
    pub normal: [f32; 16],
}

impl CameraUniforms {
    pub fn new(aspect: f32) -> Self {
        let model_view = model_view_matrix();
        Self {
            projection: projection_matrix(aspect).to_cols_array(),
            model_view: model_view.to_cols_array(),
            normal: normal_matrix(&model_view).to_cols_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn projection_matches_gl_perspective_layout() {
        let aspect = 4.0 / 3.0;
        let m = projection_matrix(aspect).to_cols_array();
        let f = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        let range_inv = 1.0 / (NEAR_PLANE - FAR_PLANE);

        assert!(approx(m[0], f / aspect));
        assert!(approx(m[5], f));
        assert!(approx(m[10], (NEAR_PLANE + FAR_PLANE) * range_inv));
        assert!(approx(m[11], -1.0));
        assert!(approx(m[14], NEAR_PLANE * FAR_PLANE * range_inv * 2.0));
        assert!(approx(m[15], 0.0));
    }

    #[test]
    fn degenerate_aspect_is_square() {
        assert_eq!(projection_matrix(0.0), projection_matrix(1.0));
        assert_eq!(projection_matrix(f32::NAN), projection_matrix(1.0));
    }

    #[test]
    fn model_view_pulls_cube_back() {
        let m = model_view_matrix().to_cols_array();
        assert_eq!(&m[12..], &[0.0, 0.0, -5.0, 1.0]);
        let origin = model_view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vec4::new(0.0, 0.0, -5.0, 1.0));
    }

    #[test]
    fn cube_centre_projects_to_screen_centre() {
        let clip = projection_matrix(1.5) * model_view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(approx(clip.x / clip.w, 0.0));
        assert!(approx(clip.y / clip.w, 0.0));
        let depth = clip.z / clip.w;
        assert!(depth > -1.0 && depth < 1.0);
    }

    #[test]
    fn normal_matrix_is_identity() {
        let u = CameraUniforms::new(1.0);
        assert_eq!(u.normal, Mat4::IDENTITY.to_cols_array());
    }
}
