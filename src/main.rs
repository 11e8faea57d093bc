mod errors;
mod logging;
mod models;
mod render;
mod utils;

use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    render::run(Path::new(render::OUTPUT_DIR))?;
    Ok(())
}
