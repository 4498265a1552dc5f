#![cfg_attr(feature = "strict", deny(warnings))]

use brain::Brain;
use std::error::Error;

mod logging;
mod rlbot_ext;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    log::info!("waiting for the framework");
    rlbot::run_bot(Bot::new(Brain::new()))
}

struct Bot {
    brain: Brain,
}

impl Bot {
    fn new(brain: Brain) -> Self {
        Self { brain }
    }
}

impl rlbot::Bot for Bot {
    fn set_player_index(&mut self, index: usize) {
        log::info!("playing as car {}", index);
        self.brain.set_player_index(index);
    }

    fn tick(&mut self, packet: &rlbot::GameTickPacket) -> rlbot::ControllerState {
        let packet = rlbot_ext::deserialize_game_tick_packet(packet);
        logging::set_game_time(packet.GameInfo.TimeSeconds);

        // Sit still through kickoff countdowns, replays and the podium.
        if !packet.GameInfo.RoundActive || packet.GameInfo.MatchEnded {
            return Default::default();
        }

        let input = self.brain.tick(&packet);
        rlbot_ext::translate_player_input(&input)
    }
}
