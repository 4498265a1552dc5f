use crate::halfway_house;
use nalgebra::{Point2, Point3, Unit, UnitComplex, Vector2, Vector3};
use std::f32::consts::PI;

pub trait ExtendF32 {
    /// Wraps an angle into `-PI..PI`.
    fn normalize_angle(self) -> Self;
}

impl ExtendF32 for f32 {
    fn normalize_angle(self) -> Self {
        let result = self % (PI * 2.0);
        if result < -PI {
            result + (PI * 2.0)
        } else if result >= PI {
            result - (PI * 2.0)
        } else {
            result
        }
    }
}

pub trait ExtendPhysics {
    fn loc(&self) -> Vector3<f32>;
    fn locp(&self) -> Point3<f32>;
    fn loc_2d(&self) -> Point2<f32>;
    fn vel(&self) -> Vector3<f32>;
    fn yaw(&self) -> f32;
    /// A unit vector in the car's forward direction, flattened onto the
    /// ground plane.
    fn forward_axis_2d(&self) -> Unit<Vector2<f32>>;
    /// Whether every location and velocity component is a real number.
    fn is_finite(&self) -> bool;
}

impl ExtendPhysics for halfway_house::Physics {
    fn loc(&self) -> Vector3<f32> {
        Vector3::new(self.Location.X, self.Location.Y, self.Location.Z)
    }

    fn locp(&self) -> Point3<f32> {
        Point3::new(self.Location.X, self.Location.Y, self.Location.Z)
    }

    fn loc_2d(&self) -> Point2<f32> {
        Point2::new(self.Location.X, self.Location.Y)
    }

    fn vel(&self) -> Vector3<f32> {
        Vector3::new(self.Velocity.X, self.Velocity.Y, self.Velocity.Z)
    }

    fn yaw(&self) -> f32 {
        self.Rotation.Yaw
    }

    fn forward_axis_2d(&self) -> Unit<Vector2<f32>> {
        UnitComplex::new(self.yaw()) * Vector2::x_axis()
    }

    fn is_finite(&self) -> bool {
        self.loc().iter().chain(self.vel().iter()).all(|x| x.is_finite())
    }
}
