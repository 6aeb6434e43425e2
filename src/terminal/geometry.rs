//! Terminal size probing.
//!
//! The size is queried fresh for every render. Probes run in order: the
//! `TIOCGWINSZ` ioctl on stdout, `tput cols` / `tput lines`, then
//! `stty size`. When every probe fails the default 80x24 is used; a failed
//! query never surfaces past this module.

use std::process::{Command, Stdio};

/// Fallback column count.
pub const DEFAULT_COLUMNS: u16 = 80;
/// Fallback row count.
pub const DEFAULT_ROWS: u16 = 24;
/// Assumed cell width in pixels when the terminal does not report one.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 10;
/// Assumed cell height in pixels when the terminal does not report one.
pub const DEFAULT_CELL_HEIGHT_PX: u32 = 20;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
    /// Window size in pixels, when the terminal reports it.
    pub pixels: Option<(u16, u16)>,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            pixels: None,
        }
    }
}

impl TerminalGeometry {
    /// Geometry with a known cell count and no pixel information.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            pixels: None,
        }
    }

    /// Query the controlling terminal, falling back to 80x24.
    pub fn query() -> Self {
        let probes: [(&str, fn() -> Result<Self, GeometryError>); 3] = [
            ("ioctl", from_ioctl),
            ("tput", from_tput),
            ("stty", from_stty),
        ];

        for (name, probe) in probes {
            match probe() {
                Ok(geometry) => {
                    log::debug!(
                        "terminal geometry from {}: {}x{}",
                        name,
                        geometry.columns,
                        geometry.rows
                    );
                    return geometry;
                }
                Err(e) => log::debug!("terminal geometry probe {} failed: {}", name, e),
            }
        }

        log::debug!(
            "using default terminal geometry {}x{}",
            DEFAULT_COLUMNS,
            DEFAULT_ROWS
        );
        Self::default()
    }

    /// Size of one cell in pixels.
    ///
    /// Derived from the reported window size when available.
    pub fn cell_size(&self) -> (u32, u32) {
        match self.pixels {
            Some((width, height)) if self.columns > 0 && self.rows > 0 => (
                (u32::from(width) / u32::from(self.columns)).max(1),
                (u32::from(height) / u32::from(self.rows)).max(1),
            ),
            _ => (DEFAULT_CELL_WIDTH_PX, DEFAULT_CELL_HEIGHT_PX),
        }
    }
}

/// Why a single geometry probe did not produce a usable size.
#[derive(Debug)]
pub(crate) enum GeometryError {
    /// The ioctl call failed (stdout is not a terminal, for example)
    #[allow(dead_code)]
    Ioctl(std::io::Error),
    /// The helper command could not be started
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },
    /// The helper command exited unsuccessfully
    Status { program: &'static str },
    /// The helper output was not a size
    Parse(String),
    /// The reported size is too small to be a real terminal
    TooSmall { columns: u16, rows: u16 },
    /// No probe exists for this platform
    #[allow(dead_code)]
    Unsupported,
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::Ioctl(e) => write!(f, "TIOCGWINSZ failed: {}", e),
            GeometryError::Spawn { program, source } => {
                write!(f, "failed to run {}: {}", program, source)
            }
            GeometryError::Status { program } => write!(f, "{} exited unsuccessfully", program),
            GeometryError::Parse(output) => write!(f, "unrecognised size output '{}'", output),
            GeometryError::TooSmall { columns, rows } => {
                write!(f, "implausible terminal size {}x{}", columns, rows)
            }
            GeometryError::Unsupported => write!(f, "not supported on this platform"),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::Ioctl(e) => Some(e),
            GeometryError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn validated(
    columns: u16,
    rows: u16,
    pixels: Option<(u16, u16)>,
) -> Result<TerminalGeometry, GeometryError> {
    // A single row is what a detached pipe tends to report.
    if columns == 0 || rows <= 1 {
        return Err(GeometryError::TooSmall { columns, rows });
    }
    Ok(TerminalGeometry {
        columns,
        rows,
        pixels,
    })
}

#[cfg(unix)]
fn from_ioctl() -> Result<TerminalGeometry, GeometryError> {
    // SAFETY: winsize is plain data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe {
        libc::ioctl(
            libc::STDOUT_FILENO,
            libc::TIOCGWINSZ,
            &mut ws as *mut libc::winsize,
        )
    };
    if rc != 0 {
        return Err(GeometryError::Ioctl(std::io::Error::last_os_error()));
    }

    let pixels = (ws.ws_xpixel > 0 && ws.ws_ypixel > 0).then_some((ws.ws_xpixel, ws.ws_ypixel));
    validated(ws.ws_col, ws.ws_row, pixels)
}

#[cfg(not(unix))]
fn from_ioctl() -> Result<TerminalGeometry, GeometryError> {
    Err(GeometryError::Unsupported)
}

/// Run a size helper with the terminal attached to its stdin.
fn run_helper(program: &'static str, args: &[&str]) -> Result<String, GeometryError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| GeometryError::Spawn { program, source })?;

    if !output.status.success() {
        return Err(GeometryError::Status { program });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn parse_count(text: &str) -> Result<u16, GeometryError> {
    text.trim()
        .parse()
        .map_err(|_| GeometryError::Parse(text.to_string()))
}

fn from_tput() -> Result<TerminalGeometry, GeometryError> {
    let columns = parse_count(&run_helper("tput", &["cols"])?)?;
    let rows = parse_count(&run_helper("tput", &["lines"])?)?;
    validated(columns, rows, None)
}

fn from_stty() -> Result<TerminalGeometry, GeometryError> {
    let output = run_helper("stty", &["size"])?;
    let (columns, rows) =
        parse_stty_size(&output).ok_or_else(|| GeometryError::Parse(output.clone()))?;
    validated(columns, rows, None)
}

/// Parse `stty size` output (`"<rows> <cols>"`) into `(columns, rows)`.
pub fn parse_stty_size(output: &str) -> Option<(u16, u16)> {
    let mut parts = output.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let columns = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((columns, rows))
}
