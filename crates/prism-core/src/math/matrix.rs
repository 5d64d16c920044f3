// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines column-major 3x3 and 4x4 matrices.

use super::vector::{Vec2, Vec3, Vec4};
use std::ops::Mul;

/// A 3x3 column-major matrix.
///
/// Materials use it as the 2D homogeneous transform applied to texture
/// coordinates before sampling.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// Creates a texture-coordinate transform that scales, then offsets, `(u, v, 1)`.
    #[inline]
    pub fn from_uv_scale_offset(scale: Vec2, offset: Vec2) -> Self {
        Self {
            cols: [
                Vec3::new(scale.x, 0.0, 0.0),
                Vec3::new(0.0, scale.y, 0.0),
                Vec3::new(offset.x, offset.y, 1.0),
            ],
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

/// A 4x4 column-major matrix.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = Vec4::new(v.x, v.y, v.z, 1.0);
        m
    }

    /// Creates a right-handed perspective projection with a [0, 1] depth range.
    ///
    /// Returns `None` unless `0 < z_near < z_far` and the field of view and
    /// aspect ratio are positive.
    pub fn perspective_rh_zo(
        fov_y_radians: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Option<Self> {
        if !(z_near > 0.0 && z_far > z_near && fov_y_radians > 0.0 && aspect_ratio > 0.0) {
            return None;
        }
        let f = 1.0 / (fov_y_radians / 2.0).tan();
        let cc = z_far / (z_near - z_far);
        let dd = (z_near * z_far) / (z_near - z_far);

        Some(Self {
            cols: [
                Vec4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
                Vec4::new(0.0, f, 0.0, 0.0),
                Vec4::new(0.0, 0.0, cc, -1.0),
                Vec4::new(0.0, 0.0, dd, 0.0),
            ],
        })
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        let [c0, c1, c2, c3] = self.cols;
        Vec4::new(
            c0.x * v.x + c1.x * v.y + c2.x * v.z + c3.x * v.w,
            c0.y * v.x + c1.y * v.y + c2.y * v.z + c3.y * v.w,
            c0.z * v.x + c1.z * v.y + c2.z * v.z + c3.z * v.w,
            c0.w * v.x + c1.w * v.y + c2.w * v.z + c3.w * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uv_transform_scales_then_offsets() {
        let m = Mat3::from_uv_scale_offset(Vec2::new(2.0, 3.0), Vec2::new(0.5, 0.25));
        let uv = m * Vec3::new(1.0, 1.0, 1.0);
        assert_relative_eq!(uv.x, 2.5);
        assert_relative_eq!(uv.y, 3.25);
        assert_relative_eq!(uv.z, 1.0);
    }

    #[test]
    fn translation_moves_points() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn perspective_rejects_bad_planes() {
        assert!(Mat4::perspective_rh_zo(1.0, 1.0, 0.0, 10.0).is_none());
        assert!(Mat4::perspective_rh_zo(1.0, 1.0, 10.0, 1.0).is_none());
        assert!(Mat4::perspective_rh_zo(1.0, 1.0, 0.1, 10.0).is_some());
    }

    #[test]
    fn perspective_maps_near_plane_to_zero_depth() {
        let m = Mat4::perspective_rh_zo(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0)
            .expect("valid projection");
        let clip = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
        assert_relative_eq!(clip.z / clip.w, 0.0, epsilon = 1e-6);
    }
}
