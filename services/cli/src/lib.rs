mod cli;
mod events;
mod render;

pub use cli::RunOutcome;
use job_application::error::AppError;

pub fn run() -> Result<RunOutcome, AppError> {
    cli::run()
}
