mod application;

mod presentation {
    pub mod cli;
    pub mod progress;
}

use chunkcast_core::error::Result;

fn main() -> Result<()> {
    application::init_logging();
    application::run()
}
