//! Version command handler

/// Display version information
pub fn display_version() {
    println!("kubectl-graph {}", env!("CARGO_PKG_VERSION"));
    println!("  {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("  License: {}", env!("CARGO_PKG_LICENSE"));
}
