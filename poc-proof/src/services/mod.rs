//! Service layer: file system and network helpers used by the proof runner
//!
//! - `directory_scanner` - flat listing of the input directory
//! - `results_writer` - `results.json` output
//! - `random_client` - random.org fetch with local fallback

pub mod directory_scanner;
pub mod random_client;
pub mod results_writer;

pub use directory_scanner::{DirectoryScanner, ScanError};
pub use random_client::{fetch_random_number, RandomClient, RandomError};
pub use results_writer::{read_results, write_results, RESULTS_FILE_NAME};
