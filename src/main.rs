use anyhow::Result;
use tracing::info;

use checkers_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("checkers starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
