pub use self::{
    arrive_on_time::{ArriveOnTime, Pedals},
    dodge_action::DodgeAction,
    simple_steer_towards::{simple_steer_towards, simple_yaw_diff},
};

mod arrive_on_time;
mod dodge_action;
mod simple_steer_towards;
