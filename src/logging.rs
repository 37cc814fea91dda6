use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};

/// Start the file logger. The UI owns the terminal while the game runs,
/// so log output goes to `logs/` instead of stdout or stderr.
///
/// Level comes from `RUST_LOG`, falling back to `info`. The returned
/// handle must stay alive for the duration of the program.
pub fn init() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory("logs"))
        .format(flexi_logger::detailed_format)
        .rotate(
            Criterion::Size(5 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(2),
        )
        .start()
}
