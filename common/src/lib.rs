#![cfg_attr(feature = "strict", deny(warnings))]

pub mod ext;
pub mod halfway_house;
pub mod prelude;
mod pretty;
pub mod rl;
