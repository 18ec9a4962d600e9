//! Orbit camera: rotate with the primary drag, zoom with the wheel, pan
//! with the secondary drag. Also projects world anchors to screen space
//! for the DOM label overlay.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{
    CAMERA_EYE_START, CAMERA_FOVY_DEG, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
};

// Keep the pitch strictly inside +-pi/2 so look_at never degenerates.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Spherical pose equivalent to eye (5, 3, 5) looking at the origin.
        let offset = Vec3::from(CAMERA_EYE_START);
        let distance = offset.length();
        Self {
            target: Vec3::ZERO,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Rotate by angular deltas in radians.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw -= d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Proportional dolly. Distance always stays inside [3, 15] scene units.
    pub fn zoom(&mut self, amount: f32) {
        self.distance =
            (self.distance * (1.0 + amount)).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Slide the orbit target along the camera's right/up axes, scaled by
    /// the current distance so the motion feels constant on screen.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        self.target += (-right * dx + up * dy) * self.distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-6), self.znear, self.zfar)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Project a world point to pixel coordinates on a surface of the given
    /// size. Returns `None` when the point sits behind the camera.
    pub fn project_to_screen(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let aspect = width / height.max(1.0);
        let clip = self.view_proj(aspect) * Vec4::from((world, 1.0));
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}
