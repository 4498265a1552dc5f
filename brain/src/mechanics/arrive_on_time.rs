use crate::error::MechanicError;
use common::{
    halfway_house::{Physics, PlayerInput},
    prelude::*,
};
use nalgebra::Point3;

/// Throttle and boost for one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pedals {
    pub throttle: f32,
    pub boost: bool,
}

impl Pedals {
    pub fn apply(self, input: &mut PlayerInput) {
        input.Throttle = self.throttle;
        input.Boost = self.boost;
    }
}

/// Chooses throttle and boost so the car covers the distance to a location in
/// a given amount of time. Steering is left to the caller.
#[derive(Debug, Copy, Clone)]
pub struct ArriveOnTime {
    speed_match: f32,
}

impl ArriveOnTime {
    /// Weight of the required average speed against the current speed. Values
    /// above 1 deliberately overshoot to correct faster.
    pub const DEFAULT_SPEED_MATCH: f32 = 1.3;
    /// Boost only when aiming above roughly the max throttle-only speed.
    const BOOST_SPEED: f32 = 1410.0;
    /// How much faster than the target speed we may be before braking.
    const BRAKE_MARGIN: f32 = 75.0;
    const CREEP_SPEED: f32 = 100.0;
    const CREEP_THROTTLE: f32 = 0.3;

    pub fn new() -> Self {
        Self {
            speed_match: Self::DEFAULT_SPEED_MATCH,
        }
    }

    pub fn speed_match(mut self, speed_match: f32) -> Self {
        self.speed_match = speed_match;
        self
    }

    /// The speed the car should be driving at this tick.
    pub fn target_speed(
        &self,
        car: &Physics,
        target_loc: Point3<f32>,
        time_remaining: f32,
    ) -> Result<f32, MechanicError> {
        if !time_remaining.is_finite() || time_remaining <= 0.0 {
            return Err(MechanicError::InvalidTimeRemaining(time_remaining));
        }
        if !car.is_finite() || !target_loc.coords.iter().all(|x| x.is_finite()) {
            return Err(MechanicError::NonFiniteInput);
        }

        let distance = (target_loc - car.locp()).norm();
        let average_speed = distance / time_remaining;
        let current_speed = car.vel().norm();
        Ok((1.0 - self.speed_match) * current_speed + self.speed_match * average_speed)
    }

    pub fn execute(
        &self,
        car: &Physics,
        target_loc: Point3<f32>,
        time_remaining: f32,
    ) -> Result<Pedals, MechanicError> {
        let target_speed = self.target_speed(car, target_loc, time_remaining)?;
        Ok(pedals_for(car.vel().norm(), target_speed))
    }
}

impl Default for ArriveOnTime {
    fn default() -> Self {
        Self::new()
    }
}

fn pedals_for(current_speed: f32, target_speed: f32) -> Pedals {
    let mut pedals = if current_speed < target_speed {
        Pedals {
            throttle: 1.0,
            boost: target_speed > ArriveOnTime::BOOST_SPEED,
        }
    } else if current_speed - target_speed > ArriveOnTime::BRAKE_MARGIN {
        Pedals {
            throttle: -1.0,
            boost: false,
        }
    } else {
        Pedals {
            throttle: 0.0,
            boost: false,
        }
    };

    // Never stall out at very low speed, whatever the plan says.
    if current_speed < ArriveOnTime::CREEP_SPEED {
        pedals.throttle = ArriveOnTime::CREEP_THROTTLE;
    }

    pedals
}
