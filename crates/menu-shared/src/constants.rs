//! Application-wide constants

/// Sort order used for ordering when a record carries none.
pub const DEFAULT_SORT_ORDER: i32 = 1000;
/// Width each sort order is left-padded to inside a path sort key.
pub const SORT_KEY_PAD_WIDTH: usize = 6;
pub const PATH_SEPARATOR: char = '/';
pub const ROOT_PATH: &str = "/";
pub const DEFAULT_MENU_ENDPOINT: &str = "configuration/appMenu";
pub const DEFAULT_LARGE_MENU_WARN_THRESHOLD: usize = 500;
pub const DEFAULT_LOG_LEVEL: &str = "info";
