use nalgebra::{Point2, Point3, Vector2, Vector3};
use std::fmt::{self, Formatter};

pub trait PrettyPrint {
    type PrettyPrinter: fmt::Display;
    fn pretty(&self) -> Self::PrettyPrinter;
}

impl PrettyPrint for Vector2<f32> {
    type PrettyPrinter = Vector2PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

impl PrettyPrint for Point2<f32> {
    type PrettyPrinter = Vector2PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: self.coords }
    }
}

pub struct Vector2PrettyPrinter {
    data: Vector2<f32>,
}

impl fmt::Display for Vector2PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({:.0}, {:.0})", self.data.x, self.data.y)
    }
}

impl PrettyPrint for Vector3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

impl PrettyPrint for Point3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: self.coords }
    }
}

pub struct Vector3PrettyPrinter {
    data: Vector3<f32>,
}

impl fmt::Display for Vector3PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "({:.0}, {:.0}, {:.0})",
            self.data.x, self.data.y, self.data.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::pretty::PrettyPrint;
    use nalgebra::{Point2, Vector3};

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(Vector3::new(1.4_f32, -2.6, 0.0).pretty().to_string(), "(1, -3, 0)");
        assert_eq!(Point2::new(99.6_f32, 10.0).pretty().to_string(), "(100, 10)");
    }
}
