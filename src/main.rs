use std::process::ExitCode;

use sdl_circles::{display, logging, scene::Pulse};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{:#}", e);
    }

    display::launch(Pulse::new())
}
