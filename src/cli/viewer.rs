//! Best-effort hand-off of a written image to the OS viewer.

use std::{io, path::Path, process::Command};

#[cfg(target_os = "macos")]
pub fn open(path: &Path) -> io::Result<()> {
    Command::new("open").arg(path).spawn().map(|_| ())
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn open(path: &Path) -> io::Result<()> {
    Command::new("xdg-open").arg(path).spawn().map(|_| ())
}

#[cfg(windows)]
pub fn open(path: &Path) -> io::Result<()> {
    // `start` is a cmd builtin; the empty string is the window title slot
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(unix, windows)))]
pub fn open(_path: &Path) -> io::Result<()> {
    Ok(())
}
