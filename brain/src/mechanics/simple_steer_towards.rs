use common::{halfway_house::Physics, prelude::*};
use nalgebra::Point2;

pub fn simple_steer_towards(car: &Physics, target_loc: Point2<f32>) -> f32 {
    simple_yaw_diff(car, target_loc).max(-1.0).min(1.0) * 2.0
}

pub fn simple_yaw_diff(car: &Physics, target_loc: Point2<f32>) -> f32 {
    let to_target = target_loc - car.loc_2d();
    let target_yaw = to_target.y.atan2(to_target.x);
    (target_yaw - car.yaw()).normalize_angle()
}
