use std::process;

/// Standard Unix exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
}

impl ExitCode {
    pub fn from_outcome(ok: bool) -> Self {
        if ok {
            ExitCode::Success
        } else {
            ExitCode::GeneralError
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}
