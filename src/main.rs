use std::process::ExitCode;

use imgcheck::ImgcheckError;

fn main() -> ExitCode {
    match imgcheck::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            match err {
                ImgcheckError::ValidationFailed { .. } => ExitCode::from(1),
                _ => ExitCode::from(2),
            }
        }
    }
}
