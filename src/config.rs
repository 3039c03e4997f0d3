use std::path::PathBuf;

/// The path the output file is written to when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "file1.txt";

/// The number of bytes in a gibibyte.
pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// The target size used when no [`TargetSize`](crate::input::TargetSize)
/// is given: 5 GiB.
pub const DEFAULT_TARGET_SIZE: u64 = 5 * BYTES_PER_GIB;

/// The text block used when no [`Block`](crate::input::Block) is given:
/// one Lorem-ipsum paragraph plus a trailing line break, 446 bytes of
/// UTF-8.
pub const LOREM_BLOCK: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
    Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. \
    Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. \
    Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.\n";

#[doc(hidden)]
#[derive(Debug)]
pub struct Config {
    pub(crate) output_path: PathBuf,
    pub(crate) block: String,
    pub(crate) target_size: u64,
    pub(crate) print_summary: bool,
    pub(crate) log_fill: bool,
}

impl Config {
    pub(crate) fn block_size(&self) -> u64 {
        self.block.len() as u64
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "fill {} to {} bytes",
            self.output_path.display(),
            self.target_size
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            block: LOREM_BLOCK.to_string(),
            target_size: DEFAULT_TARGET_SIZE,
            print_summary: true,
            log_fill: false,
        }
    }
}
