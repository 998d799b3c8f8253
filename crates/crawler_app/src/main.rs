mod app;
mod effects;
mod render;

use anyhow::Result;

fn main() -> Result<()> {
    crawler_logging::initialize(crawler_logging::LogDestination::File);
    app::run()
}
