mod cli;
mod infra;
mod report;
mod routes;
mod server;

use ipo_flip::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
