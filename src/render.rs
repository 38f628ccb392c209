//! Hand-off of per-frame values to a renderer.
//!
//! The engine never issues draw calls. Each frame it pushes the camera
//! matrix, the light and every joint transform into a [`RenderSink`].
//! [`SceneUniform`] packs them into a GPU-ready block; [`FrameRecorder`]
//! keeps them addressable by name.

use std::collections::BTreeMap;

use glam::{Mat4, Vec3};

use crate::skeleton::{bone_index, BONE_COUNT};

/// Consumer of the values a frame produces.
pub trait RenderSink {
    /// Matrix taking world space to clip space.
    fn set_view_projection(&mut self, view_projection: Mat4);
    /// Camera position, for specular lighting.
    fn set_view_position(&mut self, position: Vec3);
    /// Point light position and color.
    fn set_light(&mut self, position: Vec3, color: Vec3);
    /// Joint-local transform of one bone, by mesh bone name.
    fn set_joint_transform(&mut self, bone: &str, transform: Mat4);
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding everything a hand draw call needs.
///
/// Vectors are padded to 16-byte rows so the layout matches std140 and
/// WGSL uniform rules. Total: 1072 bytes.
pub struct SceneUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub view_position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Light world-space position.
    pub light_position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
    /// Light RGB color.
    pub light_color: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad2: f32,
    /// Joint transforms, thumb first, palm outwards.
    pub bones: [[[f32; 4]; 4]; BONE_COUNT],
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneUniform {
    /// Identity matrices, origin positions and a white light.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad0: 0.0,
            light_position: [0.0; 3],
            _pad1: 0.0,
            light_color: [1.0; 3],
            _pad2: 0.0,
            bones: [Mat4::IDENTITY.to_cols_array_2d(); BONE_COUNT],
        }
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl RenderSink for SceneUniform {
    fn set_view_projection(&mut self, view_projection: Mat4) {
        self.view_proj = view_projection.to_cols_array_2d();
    }

    fn set_view_position(&mut self, position: Vec3) {
        self.view_position = position.to_array();
    }

    fn set_light(&mut self, position: Vec3, color: Vec3) {
        self.light_position = position.to_array();
        self.light_color = color.to_array();
    }

    fn set_joint_transform(&mut self, bone: &str, transform: Mat4) {
        match bone_index(bone) {
            Some(slot) => self.bones[slot] = transform.to_cols_array_2d(),
            None => log::warn!("[render] unknown bone {bone}"),
        }
    }
}

/// Sink that keeps the last value of everything it is sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameRecorder {
    /// Last view-projection matrix.
    pub view_projection: Option<Mat4>,
    /// Last camera position.
    pub view_position: Option<Vec3>,
    /// Last light position and color.
    pub light: Option<(Vec3, Vec3)>,
    /// Last transform per bone name.
    pub joints: BTreeMap<String, Mat4>,
    /// Number of joint transforms received, including overwrites.
    pub joint_writes: usize,
}

impl FrameRecorder {
    /// Last transform received for `bone`.
    #[must_use]
    pub fn joint(&self, bone: &str) -> Option<Mat4> {
        self.joints.get(bone).copied()
    }
}

impl RenderSink for FrameRecorder {
    fn set_view_projection(&mut self, view_projection: Mat4) {
        self.view_projection = Some(view_projection);
    }

    fn set_view_position(&mut self, position: Vec3) {
        self.view_position = Some(position);
    }

    fn set_light(&mut self, position: Vec3, color: Vec3) {
        self.light = Some((position, color));
    }

    fn set_joint_transform(&mut self, bone: &str, transform: Mat4) {
        let _ = self.joints.insert(bone.to_owned(), transform);
        self.joint_writes += 1;
    }
}
