//! Per-frame update and render hand-off for [`HandEngine`].

use super::HandEngine;
use crate::input::FrameInput;
use crate::render::RenderSink;

impl HandEngine {
    /// Derive the patrol pose and joint transforms for time `now`.
    pub fn update(&mut self, now: f64) {
        self.camera.update_pose(now);
        self.hand.update(now, &mut self.pose);
    }

    /// Apply input, then update, as one frame.
    ///
    /// ```ignore
    /// let (now, dt) = clock.tick();
    /// engine.tick(&input_processor.take_frame(), now, dt);
    /// engine.render(&mut uniform, aspect);
    /// ```
    pub fn tick(&mut self, frame: &FrameInput, now: f64, dt: f32) {
        self.apply_input(frame, now, dt);
        self.update(now);
        self.frame_count += 1;
    }

    /// Push the frame's camera matrix, light and joint transforms into
    /// `sink`.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S, aspect_ratio: f32) {
        sink.set_view_projection(self.camera.view_projection(aspect_ratio));
        sink.set_view_position(self.camera.body().position());
        sink.set_light(self.light.position(), self.light.color);
        for (bone, transform) in self.pose.bones() {
            sink.set_joint_transform(&bone, transform);
        }
    }
}
