use anyhow::Error;
use phonebook_io::IoError;
use std::process::ExitCode;

/// Prints the error with its cause chain; `verbose` adds the full debug report.
pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:?}", err);
    } else {
        eprintln!("error: {:#}", err);
    }
}

/// A missing input file is reported but ends the run normally; anything else
/// is a plain failure.
pub fn exit_code_for(err: &Error) -> ExitCode {
    if is_missing_input(err) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn is_missing_input(err: &Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<IoError>(),
            Some(IoError::MissingInput(_))
        )
    })
}
