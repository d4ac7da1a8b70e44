//! Process-wide setup done before argument parsing

/// File mode creation mask applied at startup
#[cfg(unix)]
pub const UMASK: u32 = 0o022;

/// Set the process umask so packs are never created group or world writable.
/// Returns the previous mask.
#[cfg(unix)]
pub fn restrict_umask() -> u32 {
    use nix::sys::stat::{umask, Mode};

    let previous = umask(Mode::from_bits_truncate(UMASK as nix::libc::mode_t));
    u32::from(previous.bits())
}

/// No file mode mask outside Unix
#[cfg(not(unix))]
pub fn restrict_umask() -> u32 {
    0
}
