use job_application_cli::{run, RunOutcome};

fn main() {
    match run() {
        Ok(RunOutcome::Rejected) => std::process::exit(2),
        Ok(_) => {}
        Err(err) => {
            eprintln!("application error: {err}");
            std::process::exit(1);
        }
    }
}
