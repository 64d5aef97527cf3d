//! # hashsmash CLI
//!
//! Command-line interface for offline MD5 digest recovery.
//!
//! ## Usage
//! ```bash
//! hashsmash -s hashes.txt -l 6 -c 8
//! hashsmash -a abc123 -l 4 -p pw -o pretty
//! ```

mod cli;

use hashsmash::Result;

fn main() -> Result<()> {
    cli::run()
}
