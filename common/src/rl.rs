//! Various Rocket League constants.

/// The amount of time additional force can be added during a jump while holding
/// the button down.
///
/// Source: RLBot magic_numbers.py
pub const CAR_JUMP_FORCE_TIME: f32 = 0.2;
