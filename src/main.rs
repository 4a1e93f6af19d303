use listo::commands::Cli;
use listo::libs::messages::macros::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu()
}
