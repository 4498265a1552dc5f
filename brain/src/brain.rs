use crate::{
    error::MechanicError,
    mechanics::{simple_steer_towards, ArriveOnTime, DodgeAction},
};
use common::{
    halfway_house::{LiveDataPacket, PlayerInfo, PlayerInput},
    prelude::*,
};
use derive_new::new;
use log::{debug, info, warn};
use nalgebra::Point3;
use nameof::name_of_type;

/// A location to reach, and the game time to reach it at.
#[derive(new, Debug, Copy, Clone, PartialEq)]
pub struct Target {
    pub loc: Point3<f32>,
    pub time: f32,
}

/// Drives one car to its target on time, and dodges into it once close.
pub struct Brain {
    player_index: Option<usize>,
    arrive: ArriveOnTime,
    dodge_template: DodgeAction,
    dodge: Option<DodgeAction>,
    fixed_target: Option<Target>,
    chase: Option<Target>,
    arrival_time: f32,
    dodge_distance: f32,
}

impl Brain {
    pub const DEFAULT_ARRIVAL_TIME: f32 = 1.5;
    pub const DEFAULT_DODGE_DISTANCE: f32 = 500.0;
    /// Give up on a dodge that never completes (e.g. we landed before the
    /// second jump).
    const DODGE_TIME_LIMIT: f32 = 2.0;

    pub fn new() -> Self {
        Self {
            player_index: None,
            arrive: ArriveOnTime::new(),
            dodge_template: DodgeAction::new(),
            dodge: None,
            fixed_target: None,
            chase: None,
            arrival_time: Self::DEFAULT_ARRIVAL_TIME,
            dodge_distance: Self::DEFAULT_DODGE_DISTANCE,
        }
    }

    /// How far ahead to set the deadline when chasing the ball.
    pub fn arrival_time(mut self, arrival_time: f32) -> Self {
        assert!(arrival_time > 0.0);
        self.arrival_time = arrival_time;
        self
    }

    pub fn dodge_distance(mut self, dodge_distance: f32) -> Self {
        self.dodge_distance = dodge_distance;
        self
    }

    pub fn arrive(mut self, arrive: ArriveOnTime) -> Self {
        self.arrive = arrive;
        self
    }

    /// Timing for every dodge. Its direction is replaced when the dodge starts.
    pub fn dodge(mut self, dodge: DodgeAction) -> Self {
        self.dodge_template = dodge;
        self
    }

    /// Drive to a fixed target instead of chasing the ball.
    pub fn target(mut self, target: Target) -> Self {
        self.fixed_target = Some(target);
        self
    }

    pub fn set_player_index(&mut self, player_index: usize) {
        self.player_index = Some(player_index);
    }

    pub fn is_dodging(&self) -> bool {
        self.dodge.is_some()
    }

    pub fn tick(&mut self, packet: &LiveDataPacket) -> PlayerInput {
        self.determine_controls(packet).clamped()
    }

    fn determine_controls(&mut self, packet: &LiveDataPacket) -> PlayerInput {
        let player_index = match self.player_index {
            Some(i) => i,
            None => {
                warn!("[{}] no player index yet", name_of_type!(Brain));
                return PlayerInput::default();
            }
        };
        let me = match packet.car(player_index) {
            Some(car) => *car,
            None => {
                warn!("[{}] car {} is not in the packet", name_of_type!(Brain), player_index);
                return PlayerInput::default();
            }
        };
        let now = packet.GameInfo.TimeSeconds;

        if let Some(input) = self.continue_dodge(now, &me) {
            return input;
        }

        let target = self.current_target(packet, now);
        let distance = (target.loc - me.Physics.locp()).norm();

        // A grounded car that still reports a double jump has no jump to give.
        if me.OnGround && !me.DoubleJumped && distance < self.dodge_distance {
            info!(
                "[{}] dodging at {} from {:.0} away",
                name_of_type!(Brain),
                target.loc.pretty(),
                distance,
            );
            let mut dodge = self.dodge_template.clone();
            dodge.reset();
            self.dodge = Some(dodge.towards(&me.Physics, target.loc.xy()));
            self.chase = None;
            return self.continue_dodge(now, &me).unwrap_or_default();
        }

        let mut result = PlayerInput {
            Steer: simple_steer_towards(&me.Physics, target.loc.xy()),
            ..Default::default()
        };
        match self.arrive.execute(&me.Physics, target.loc, target.time - now) {
            Ok(pedals) => pedals.apply(&mut result),
            Err(MechanicError::InvalidTimeRemaining(t)) => {
                debug!("[{}] late by {:.2}s, hurrying", name_of_type!(Brain), -t);
                result.Throttle = 1.0;
                result.Boost = true;
            }
            Err(err) => warn!("[{}] {}", name_of_type!(Brain), err),
        }
        result
    }

    fn continue_dodge(&mut self, now: f32, me: &PlayerInfo) -> Option<PlayerInput> {
        let dodge = self.dodge.as_mut()?;

        // An expired session must not send any more inputs.
        if dodge.elapsed(now).map_or(false, |e| e > Self::DODGE_TIME_LIMIT) {
            warn!("[{}] dodge timed out", name_of_type!(Brain));
            self.dodge = None;
            return None;
        }

        let input = dodge.execute(now, me);
        if dodge.is_finished() && me.OnGround {
            let elapsed = dodge.elapsed(now).unwrap_or(0.0);
            info!("[{}] dodge finished after {:.2}s", name_of_type!(Brain), elapsed);
            self.dodge = None;
        }

        Some(input)
    }

    fn current_target(&mut self, packet: &LiveDataPacket, now: f32) -> Target {
        if let Some(target) = self.fixed_target {
            return target;
        }

        let time = match self.chase {
            Some(chase) if chase.time > now => chase.time,
            _ => {
                let time = now + self.arrival_time;
                debug!("[{}] new deadline {:.2}", name_of_type!(Brain), time);
                time
            }
        };
        let target = Target::new(packet.GameBall.Physics.locp(), time);
        self.chase = Some(target);
        target
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        brain::{Brain, Target},
        mechanics::DodgeAction,
    };
    use common::halfway_house::{LiveDataPacket, PlayerInfo, Vector3};
    use nalgebra::Point3;

    fn packet(time: f32, car: PlayerInfo, ball: (f32, f32)) -> LiveDataPacket {
        let mut packet = LiveDataPacket::default();
        packet.GameInfo.TimeSeconds = time;
        packet.GameInfo.RoundActive = true;
        packet.GameBall.Physics.Location = Vector3 {
            X: ball.0,
            Y: ball.1,
            Z: 93.0,
        };
        packet.GameCars.push(car);
        packet
    }

    fn grounded_car() -> PlayerInfo {
        let mut car = PlayerInfo::default();
        car.OnGround = true;
        car.Physics.Location.Z = 17.0;
        car
    }

    fn brain() -> Brain {
        let mut brain = Brain::new();
        brain.set_player_index(0);
        brain
    }

    #[test]
    fn neutral_without_player_index() {
        let mut brain = Brain::new();
        let input = brain.tick(&packet(1.0, grounded_car(), (3000.0, 0.0)));
        assert_eq!(input, Default::default());
    }

    #[test]
    fn neutral_without_car() {
        let mut brain = Brain::new();
        brain.set_player_index(3);
        let input = brain.tick(&packet(1.0, grounded_car(), (3000.0, 0.0)));
        assert_eq!(input, Default::default());
    }

    #[test]
    fn chase_ball_from_rest() {
        let mut brain = brain();
        let input = brain.tick(&packet(1.0, grounded_car(), (3000.0, 0.0)));
        // Creeping from rest, but the deadline calls for boost.
        assert_eq!(input.Throttle, 0.3);
        assert!(input.Boost);
        assert!(input.Steer.abs() < 1e-3);
        assert!(!input.Jump);
        assert!(!brain.is_dodging());
    }

    #[test]
    fn chase_ball_steers_and_clamps() {
        let mut brain = brain();
        let mut car = grounded_car();
        car.Physics.Velocity.X = 1000.0;
        let input = brain.tick(&packet(1.0, car, (0.0, 3000.0)));
        assert_eq!(input.Steer, 1.0);
        assert_eq!(input.Throttle, 1.0);
    }

    #[test]
    fn late_for_fixed_target() {
        let mut brain = brain().target(Target::new(Point3::new(4000.0, 0.0, 17.0), 2.0));
        let mut car = grounded_car();
        car.Physics.Velocity.X = 1000.0;
        let input = brain.tick(&packet(2.5, car, (0.0, 0.0)));
        assert_eq!(input.Throttle, 1.0);
        assert!(input.Boost);
    }

    #[test]
    fn brake_for_fixed_target() {
        let mut brain = brain().target(Target::new(Point3::new(2000.0, 0.0, 17.0), 10.0));
        let mut car = grounded_car();
        car.Physics.Velocity.X = 1400.0;
        let input = brain.tick(&packet(0.0, car, (0.0, 0.0)));
        assert_eq!(input.Throttle, -1.0);
        assert!(!input.Boost);
    }

    #[test]
    fn dodge_when_close() {
        let mut brain = brain().dodge(
            DodgeAction::new()
                .first_jump_duration(0.2)
                .second_jump_time(0.25),
        );

        let input = brain.tick(&packet(1.0, grounded_car(), (300.0, 0.0)));
        assert!(brain.is_dodging());
        assert!(input.Jump);

        let mut car = grounded_car();
        car.OnGround = false;
        let input = brain.tick(&packet(1.1, car, (300.0, 0.0)));
        assert!(input.Jump);

        // Second jump, aimed straight ahead at the ball.
        let input = brain.tick(&packet(1.3, car, (300.0, 0.0)));
        assert!(input.Jump);
        assert!((input.Pitch + 1.0).abs() < 1e-3, "{}", input.Pitch);

        car.DoubleJumped = true;
        let input = brain.tick(&packet(1.4, car, (300.0, 0.0)));
        assert!(!input.Jump);
        assert!(brain.is_dodging());

        // Landing ends the session.
        let mut landed = grounded_car();
        landed.DoubleJumped = true;
        let input = brain.tick(&packet(2.0, landed, (300.0, 0.0)));
        assert!(!input.Jump);
        assert!(!brain.is_dodging());
    }

    #[test]
    fn dodge_times_out() {
        let mut brain = brain();
        brain.tick(&packet(1.0, grounded_car(), (300.0, 0.0)));
        assert!(brain.is_dodging());

        // Long after the window, e.g. the round was paused by a goal.
        let mut car = grounded_car();
        car.OnGround = false;
        let input = brain.tick(&packet(10.0, car, (3000.0, 0.0)));
        assert!(!brain.is_dodging());
        assert!(!input.Jump);
        assert_eq!(input.Pitch, 0.0);
        assert_eq!(input.Throttle, 0.3);
        assert!(input.Boost);
    }

    #[test]
    fn no_dodge_with_stale_double_jump() {
        let mut brain = brain();
        let mut car = grounded_car();
        car.DoubleJumped = true;
        for &time in &[1.0, 1.1, 1.2] {
            let input = brain.tick(&packet(time, car, (300.0, 0.0)));
            assert!(!brain.is_dodging(), "{}", time);
            assert!(!input.Jump, "{}", time);
            assert_eq!(input.Throttle, 0.3, "{}", time);
        }
    }

    #[test]
    fn fresh_deadline_after_dodge() {
        let mut brain = brain().arrival_time(2.0);
        brain.tick(&packet(1.0, grounded_car(), (3000.0, 0.0)));
        assert_eq!(brain.chase.map(|t| t.time), Some(3.0));

        // Ball rolls close; dodge into it and land.
        brain.tick(&packet(1.5, grounded_car(), (300.0, 0.0)));
        assert!(brain.is_dodging());
        assert_eq!(brain.chase, None);
        let mut landed = grounded_car();
        landed.DoubleJumped = true;
        brain.tick(&packet(2.0, landed, (300.0, 0.0)));
        assert!(!brain.is_dodging());

        // Ball is far away again: the deadline restarts from now.
        brain.tick(&packet(2.1, grounded_car(), (3000.0, 0.0)));
        let deadline = brain.chase.map(|t| t.time).unwrap();
        assert!((deadline - 4.1).abs() < 1e-4, "{}", deadline);
    }

    #[test]
    fn chase_deadline_is_kept_until_it_passes() {
        let mut brain = brain().arrival_time(2.0);
        brain.tick(&packet(1.0, grounded_car(), (3000.0, 0.0)));
        assert_eq!(brain.chase.map(|t| t.time), Some(3.0));

        brain.tick(&packet(2.0, grounded_car(), (3500.0, 0.0)));
        assert_eq!(brain.chase.map(|t| t.time), Some(3.0));
        assert_eq!(brain.chase.map(|t| t.loc.x), Some(3500.0));

        brain.tick(&packet(3.0, grounded_car(), (3500.0, 0.0)));
        assert_eq!(brain.chase.map(|t| t.time), Some(5.0));
    }
}
