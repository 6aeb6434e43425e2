//! Parsers for the output of the tools the probes run.
//!
//! All of these are pure; `None` means the output did not contain what the
//! probe was looking for.

/// Format a byte count with binary units, two decimals.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = UNITS[0];
    for (i, name) in UNITS.iter().enumerate() {
        unit = name;
        if value < 1024.0 || i == UNITS.len() - 1 {
            break;
        }
        value /= 1024.0;
    }
    format!("{:.2} {}", value, unit)
}

/// Human-readable uptime from seconds.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = total_seconds % 86_400 / 3_600;
    let minutes = total_seconds % 3_600 / 60;

    if days > 0 {
        format!("{} days, {} hours, {} minutes", days, hours, minutes)
    } else if hours > 0 {
        format!("{} hours, {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}

/// First field of `/proc/uptime`, in whole seconds.
pub fn proc_uptime(contents: &str) -> Option<u64> {
    let seconds: f64 = contents.split_whitespace().next()?.parse().ok()?;
    (seconds >= 0.0).then_some(seconds as u64)
}

/// `NAME` from an os-release file.
pub fn os_release_name(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

/// Used and total memory from `free -m`.
pub fn free_memory(output: &str) -> Option<String> {
    let fields: Vec<&str> = output
        .lines()
        .find(|line| line.starts_with("Mem:"))?
        .split_whitespace()
        .collect();
    let total: u64 = fields.get(1)?.parse().ok()?;
    let used: u64 = fields.get(2)?.parse().ok()?;
    Some(format!("{}MiB / {}MiB", used, total))
}

/// Summed used and total bytes over every filesystem in `df -B1` output.
pub fn df_totals(output: &str) -> Option<(u64, u64)> {
    let mut rows = 0;
    let (mut used, mut size) = (0u64, 0u64);
    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= 3 || fields[0] == "Filesystem" {
            continue;
        }
        let (Ok(s), Ok(u)) = (fields[1].parse::<u64>(), fields[2].parse::<u64>()) else {
            continue;
        };
        size = size.saturating_add(s);
        used = used.saturating_add(u);
        rows += 1;
    }
    (rows > 0).then_some((used, size))
}

/// `Model name` from `lscpu`.
pub fn lscpu_model(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Model name:"))
        .map(|model| model.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|model| !model.is_empty())
}

/// First display controller in `lspci` output.
pub fn lspci_gpu(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("VGA") || line.contains("3D"))
        .and_then(|line| line.split_once(": "))
        .map(|(_, device)| device.trim().to_string())
        .filter(|device| !device.is_empty())
}

/// Mode of the first connected output in `xrandr` output.
pub fn xrandr_resolution(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains(" connected"))
        .flat_map(|line| line.split_whitespace())
        .find_map(resolution_field)
}

/// Current mode of the first output in `swaymsg -t get_outputs` JSON.
pub fn swaymsg_resolution(json: &str) -> Option<String> {
    let outputs: serde_json::Value = serde_json::from_str(json).ok()?;
    let mode = outputs.as_array()?.first()?.get("current_mode")?;
    let width = mode.get("width")?.as_u64()?;
    let height = mode.get("height")?.as_u64()?;
    Some(format!("{}x{}", width, height))
}

/// `WIDTHxHEIGHT` prefix of an xrandr field like `1920x1080+0+0`.
fn resolution_field(field: &str) -> Option<String> {
    let mode = field.split('+').next()?;
    let (w, h) = mode.split_once('x')?;
    (w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok()).then(|| mode.to_string())
}

/// Strip the quotes `gsettings` and `dconf` put around strings.
pub fn unquote(value: &str) -> String {
    value.trim().trim_matches('\'').trim_matches('"').to_string()
}

/// Basename of a shell path.
pub fn shell_name(path: &str) -> Option<String> {
    std::path::Path::new(path.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Login shell field of a `getent passwd` entry.
pub fn passwd_shell(entry: &str) -> Option<String> {
    entry
        .trim()
        .split(':')
        .nth(6)
        .filter(|shell| !shell.is_empty())
        .map(String::from)
}

/// Battery line from sysfs capacity and status files.
pub fn battery(capacity: &str, status: Option<&str>) -> String {
    match status.map(str::trim).filter(|s| !s.is_empty()) {
        Some(status) => format!("{}% ({})", capacity.trim(), status),
        None => format!("{}%", capacity.trim()),
    }
}
