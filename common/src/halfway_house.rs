//! Framework-independent mirrors of the packet and controller types. The `play`
//! crate translates the framework's types into these, so everything else can
//! be tested without a running game.

#![allow(non_snake_case)]

use smallvec::SmallVec;

#[derive(Debug, Default, Copy, Clone)]
pub struct Vector3 {
    pub X: f32,
    pub Y: f32,
    pub Z: f32,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Rotator {
    pub Pitch: f32,
    pub Yaw: f32,
    pub Roll: f32,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Physics {
    pub Location: Vector3,
    pub Rotation: Rotator,
    pub Velocity: Vector3,
    pub AngularVelocity: Vector3,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct PlayerInfo {
    pub Physics: Physics,
    pub Demolished: bool,
    pub OnGround: bool,
    pub Jumped: bool,
    pub DoubleJumped: bool,
    pub Team: i32,
    pub Boost: i32,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct BallInfo {
    pub Physics: Physics,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct GameInfo {
    pub TimeSeconds: f32,
    pub RoundActive: bool,
    pub MatchEnded: bool,
}

#[derive(Debug, Default, Clone)]
pub struct LiveDataPacket {
    pub GameCars: SmallVec<[PlayerInfo; 4]>,
    pub GameBall: BallInfo,
    pub GameInfo: GameInfo,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PlayerInput {
    pub Throttle: f32,
    pub Steer: f32,
    pub Pitch: f32,
    pub Yaw: f32,
    pub Roll: f32,
    pub Jump: bool,
    pub Boost: bool,
    pub Handbrake: bool,
}

impl LiveDataPacket {
    pub fn cars(&self) -> impl Iterator<Item = &PlayerInfo> {
        self.GameCars.iter()
    }

    pub fn car(&self, player_index: usize) -> Option<&PlayerInfo> {
        self.GameCars.get(player_index)
    }
}

impl PlayerInput {
    /// Clamps every analog axis into the range the framework accepts.
    pub fn clamped(mut self) -> Self {
        self.Throttle = clamp_axis(self.Throttle);
        self.Steer = clamp_axis(self.Steer);
        self.Pitch = clamp_axis(self.Pitch);
        self.Yaw = clamp_axis(self.Yaw);
        self.Roll = clamp_axis(self.Roll);
        self
    }
}

fn clamp_axis(x: f32) -> f32 {
    nalgebra::clamp(x, -1.0, 1.0)
}
