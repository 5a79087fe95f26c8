use std::process::ExitCode;

use tracing::error;

use sunset_spots::{init_tracing, start_server, Config};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let result = match Config::load() {
        Ok(config) => start_server(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
