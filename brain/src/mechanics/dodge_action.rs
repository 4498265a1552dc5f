use common::{
    halfway_house::{Physics, PlayerInfo, PlayerInput},
    prelude::*,
    rl,
};
use nalgebra::{Point2, Unit, UnitComplex, Vector2};

/// A jump followed by a directional second jump.
///
/// The session is owned by the caller and fed one tick at a time. It latches
/// its start time on the first call and stays finished once the game reports
/// the double jump, until [`reset`](DodgeAction::reset) is called.
#[derive(Debug, Clone)]
pub struct DodgeAction {
    first_jump_duration: f32,
    second_jump_time: f32,
    /// `x` is pitch, `y` is yaw.
    direction: Vector2<f32>,
    start_time: Option<f32>,
    finished: bool,
}

impl DodgeAction {
    pub const DEFAULT_FIRST_JUMP_DURATION: f32 = rl::CAR_JUMP_FORCE_TIME;
    pub const DEFAULT_SECOND_JUMP_TIME: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            first_jump_duration: Self::DEFAULT_FIRST_JUMP_DURATION,
            second_jump_time: Self::DEFAULT_SECOND_JUMP_TIME,
            direction: Vector2::new(-1.0, 0.0),
            start_time: None,
            finished: false,
        }
    }

    /// How long the jump button is held for the first jump.
    pub fn first_jump_duration(mut self, first_jump_duration: f32) -> Self {
        assert!(first_jump_duration >= 0.0);
        self.first_jump_duration = first_jump_duration;
        self
    }

    /// Time after the start at which the second jump is pressed.
    pub fn second_jump_time(mut self, second_jump_time: f32) -> Self {
        assert!(second_jump_time >= 0.0);
        self.second_jump_time = second_jump_time;
        self
    }

    /// Raw stick values for the second jump; `x` is pitch and `y` is yaw.
    pub fn direction(mut self, direction: Vector2<f32>) -> Self {
        self.direction = direction;
        self
    }

    /// The angle of the dodge relative to the car, where 0 means straight
    /// forward.
    pub fn angle(self, angle: f32) -> Self {
        let angle = UnitComplex::new(angle);
        self.direction(Vector2::new(-angle.cos_angle(), angle.sin_angle()))
    }

    /// Aim the dodge at a location on the ground. Leaves the direction alone if
    /// the car is already on top of the target.
    pub fn towards(self, car: &Physics, target_loc: Point2<f32>) -> Self {
        let me_to_target = match Unit::try_new(target_loc - car.loc_2d(), 1e-3) {
            Some(axis) => axis,
            None => return self,
        };
        let dodge_dir = UnitComplex::rotation_between_axis(&car.forward_axis_2d(), &me_to_target);
        self.angle(dodge_dir.angle())
    }

    pub fn start_time(&self) -> Option<f32> {
        self.start_time
    }

    /// Seconds since the session started, if it has.
    pub fn elapsed(&self, time: f32) -> Option<f32> {
        self.start_time.map(|start| time - start)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Forget the current session so the same configuration can dodge again.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.finished = false;
    }

    pub fn execute(&mut self, time: f32, car: &PlayerInfo) -> PlayerInput {
        let start_time = match self.start_time {
            Some(start_time) => start_time,
            None => {
                log::debug!("dodge started at {:.3}", time);
                self.start_time = Some(time);
                time
            }
        };

        let mut input = PlayerInput::default();

        if time < start_time + self.first_jump_duration {
            input.Jump = true;
        }

        // The two windows may overlap; both apply.
        if time - start_time > self.second_jump_time && !self.finished {
            input.Jump = true;
            input.Pitch = self.direction.x;
            input.Yaw = self.direction.y;
        }

        // The game's double jump flag wins over our own timing.
        if car.DoubleJumped && !self.finished {
            log::debug!("dodge consumed after {:.3}s", time - start_time);
            self.finished = true;
        }
        if self.finished {
            input.Jump = false;
        }

        input
    }
}

impl Default for DodgeAction {
    fn default() -> Self {
        Self::new()
    }
}
