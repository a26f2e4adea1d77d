//! gracenote - register and inspect Gracenote client identities.

use anyhow::Result;

fn main() -> Result<()> {
    gracenote_cli::run()
}
