use std::process;

pub fn exit(err: ExitError) -> ! {
    process::exit(err.into());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitError {
    ArgumentsError,
    LoggingError,
    WorkloadError,
}

impl From<ExitError> for i32 {
    fn from(v: ExitError) -> Self {
        match v {
            ExitError::ArgumentsError => 100,
            ExitError::LoggingError => 150,
            ExitError::WorkloadError => 200,
        }
    }
}
