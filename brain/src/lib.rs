#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    brain::{Brain, Target},
    error::MechanicError,
};

mod brain;
mod error;
pub mod mechanics;
