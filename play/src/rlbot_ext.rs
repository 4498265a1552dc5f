//! Conversions between the framework's types and `common::halfway_house`.

use common::halfway_house::{
    BallInfo, GameInfo, LiveDataPacket, Physics, PlayerInfo, PlayerInput, Rotator, Vector3,
};

pub fn deserialize_game_tick_packet(packet: &rlbot::GameTickPacket) -> LiveDataPacket {
    LiveDataPacket {
        GameCars: packet.players.iter().map(deserialize_player_info).collect(),
        GameBall: packet
            .ball
            .as_ref()
            .map(deserialize_ball_info)
            .unwrap_or_default(),
        GameInfo: deserialize_game_info(&packet.game_info),
    }
}

fn deserialize_player_info(info: &rlbot::PlayerInfo) -> PlayerInfo {
    PlayerInfo {
        Physics: deserialize_physics(&info.physics),
        Demolished: info.is_demolished,
        OnGround: info.has_wheel_contact,
        Jumped: info.jumped,
        DoubleJumped: info.double_jumped,
        Team: info.team as i32,
        Boost: info.boost as i32,
    }
}

fn deserialize_ball_info(info: &rlbot::BallInfo) -> BallInfo {
    BallInfo {
        Physics: deserialize_physics(&info.physics),
    }
}

fn deserialize_game_info(info: &rlbot::GameInfo) -> GameInfo {
    GameInfo {
        TimeSeconds: info.seconds_elapsed,
        RoundActive: info.is_round_active,
        MatchEnded: info.is_match_ended,
    }
}

fn deserialize_physics(physics: &rlbot::Physics) -> Physics {
    Physics {
        Location: deserialize_vector3(&physics.location),
        Rotation: deserialize_rotator(&physics.rotation),
        Velocity: deserialize_vector3(&physics.velocity),
        AngularVelocity: deserialize_vector3(&physics.angular_velocity),
    }
}

fn deserialize_vector3(vector3: &rlbot::Vector3) -> Vector3 {
    Vector3 {
        X: vector3.x,
        Y: vector3.y,
        Z: vector3.z,
    }
}

fn deserialize_rotator(rotator: &rlbot::Rotator) -> Rotator {
    Rotator {
        Pitch: rotator.pitch,
        Yaw: rotator.yaw,
        Roll: rotator.roll,
    }
}

pub fn translate_player_input(input: &PlayerInput) -> rlbot::ControllerState {
    rlbot::ControllerState {
        throttle: input.Throttle,
        steer: input.Steer,
        pitch: input.Pitch,
        yaw: input.Yaw,
        roll: input.Roll,
        jump: input.Jump,
        boost: input.Boost,
        handbrake: input.Handbrake,
        ..Default::default()
    }
}
