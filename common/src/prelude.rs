pub use crate::{
    ext::{ExtendF32, ExtendPhysics},
    pretty::PrettyPrint,
};
