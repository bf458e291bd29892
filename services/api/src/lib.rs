mod cli;
mod infra;
mod routes;
mod server;

use staffnames::error::AppError;

pub use routes::api_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
