use std::path::PathBuf;

/// Loads `.env` from the working directory, if there is one. Runs before
/// the logger is up, so the outcome is returned for logging later.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
