use eframe::egui::{Color32, Pos2, Vec2};

// Fixed look of the demo circle (radius, fill, spawn point). The offset is
// half the visual size; subtracting it from a pointer position recenters the
// shape under the pointer instead of anchoring its top-left corner.
pub const CIRCLE_RADIUS: f32 = 50.0;
pub const CIRCLE_COLOR: Color32 = Color32::RED;
pub const ORIGIN: Pos2 = Pos2 { x: 50.0, y: 50.0 };
pub const CENTER_OFFSET: Vec2 = Vec2 { x: CIRCLE_RADIUS, y: CIRCLE_RADIUS };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f32,
    pub color: Color32,
}

impl Circle {
    pub fn new(radius: f32, color: Color32) -> Circle {
        Circle { radius, color }
    }
}

/// The movable entity shown on the canvas: a drawable primitive, a draw flag,
/// and a current/target position pair. The position is only advanced by
/// `step`; everything else goes through the setters.
pub struct Plane {
    primitive: Circle,
    to_draw: bool,
    position: Pos2,
    target: Pos2,
}

impl Default for Plane {
    fn default() -> Self {
        Plane::new()
    }
}

impl Plane {
    pub fn new() -> Plane {
        Plane {
            primitive: Circle::new(CIRCLE_RADIUS, CIRCLE_COLOR),
            to_draw: false,
            position: ORIGIN,
            target: ORIGIN,
        }
    }

    pub fn primitive(&self) -> Circle {
        self.primitive
    }

    // replaces the primitive wholesale
    pub fn set_primitive(&mut self, primitive: Circle) {
        self.primitive = primitive;
    }

    pub fn to_draw(&self) -> bool {
        self.to_draw
    }

    pub fn set_to_draw(&mut self, to_draw: bool) {
        self.to_draw = to_draw;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Teleports the entity; used when (re)spawning it at the origin.
    pub fn place_at(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn target_position(&self) -> Pos2 {
        self.target
    }

    pub fn set_target_position(&mut self, target: Pos2) {
        self.target = target;
    }

    /// Pointer-move handler: aim for the pointer with the shape centered
    /// under it rather than hanging off its top-left corner.
    pub fn follow_pointer(&mut self, pointer: Pos2) {
        self.set_target_position(pointer - CENTER_OFFSET);
    }

    pub fn moving(&self) -> bool {
        self.position != self.target
    }

    /// Advances the position toward the target by at most `speed * dt`
    /// pixels. Lands on the target exactly once the remaining distance fits
    /// in a single step; no easing.
    pub fn step(&mut self, speed: f32, dt: f32) {
        let delta = self.target - self.position;
        let dist = delta.length();
        let max_step = speed * dt;
        if dist == 0.0 || max_step <= 0.0 {
            return;
        }
        if dist <= max_step {
            self.position = self.target;
        } else {
            self.position += delta * (max_step / dist);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_follow_pointer_recenters() {
        let mut plane = Plane::new();
        plane.follow_pointer(pos2(300.0, 200.0));
        assert_eq!(plane.target_position(), pos2(250.0, 150.0));

        // near the top-left corner the target may go negative
        plane.follow_pointer(pos2(0.0, 0.0));
        assert_eq!(plane.target_position(), pos2(-50.0, -50.0));
    }

    #[test]
    fn test_step_converges_and_snaps() {
        let mut plane = Plane::new();
        plane.place_at(pos2(0.0, 0.0));
        plane.set_target_position(pos2(30.0, 40.0)); // distance 50

        // 10 px per step: four partial steps, then an exact landing
        for _ in 0..4 {
            plane.step(10.0, 1.0);
            assert!(plane.moving());
        }
        plane.step(10.0, 1.0);
        assert_eq!(plane.position(), pos2(30.0, 40.0));
        assert!(!plane.moving());

        // stepping at the target is a no-op
        plane.step(10.0, 1.0);
        assert_eq!(plane.position(), pos2(30.0, 40.0));
    }

    #[test]
    fn test_step_ignores_zero_dt() {
        let mut plane = Plane::new();
        plane.place_at(pos2(0.0, 0.0));
        plane.set_target_position(pos2(100.0, 0.0));
        plane.step(240.0, 0.0);
        assert_eq!(plane.position(), pos2(0.0, 0.0));
    }

    #[test]
    fn test_step_does_not_overshoot() {
        let mut plane = Plane::new();
        plane.place_at(pos2(0.0, 0.0));
        plane.set_target_position(pos2(5.0, 0.0));
        plane.step(240.0, 1.0); // one step would travel 240 px
        assert_eq!(plane.position(), pos2(5.0, 0.0));
    }
}
