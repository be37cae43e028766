//! Process exit codes shared by both launchers

/// Exit status reported to the operator's shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    /// Help was requested or the command line could not be parsed
    Usage,
    BuildFailed,
    /// Neither a main script nor a build was requested
    MissingMainScript,
    /// Any other local failure (config, I/O, missing tools)
    Failure,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Usage => 1,
            ExitCode::BuildFailed => 2,
            ExitCode::MissingMainScript => 3,
            ExitCode::Failure => 4,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // Codes are all in 0..=4
        std::process::ExitCode::from(u8::try_from(code.code()).unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ExitCode::Success,
            ExitCode::Usage,
            ExitCode::BuildFailed,
            ExitCode::MissingMainScript,
            ExitCode::Failure,
        ]
        .map(ExitCode::code);
        assert_eq!(codes, [0, 1, 2, 3, 4]);
    }
}
