//! Logger bootstrap for the binary. Library code only emits through `log`.

use crate::errors::AppError;
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts a stderr logger at `level` (any `flexi_logger` spec, e.g. `warn`
/// or `contact_book=debug`). Later calls are no-ops.
pub fn init_logging(level: &str) -> Result<(), AppError> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, AppError> {
        let handle = Logger::try_with_str(level)?.log_to_stderr().start()?;
        debug!("logging initialized at `{}`", level);
        Ok(handle)
    })?;
    Ok(())
}
