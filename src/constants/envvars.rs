pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const USER: &str = "USER";
pub const PASSWORD: &str = "PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const CONNECT_TIMEOUT_MS: &str = "CONNECT_TIMEOUT_MS";
