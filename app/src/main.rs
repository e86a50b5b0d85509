use clap::Parser;
use mimalloc::MiMalloc;
use nngraph_app::{Cli, app, init_tracing};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    init_tracing();
    app::run(Cli::parse())
}
