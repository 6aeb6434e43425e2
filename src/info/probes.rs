//! System information probes.

use std::fs;
use std::path::Path;

use super::cache::CommandCache;
use super::parse;
use crate::protocol::Environment;

/// Value shown when a probe finds nothing.
pub const UNKNOWN: &str = "Unknown";

const BATTERY_DIR: &str = "/sys/class/power_supply/BAT0";

/// One line of the info box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    Host,
    User,
    Os,
    Kernel,
    Uptime,
    Terminal,
    Shell,
    Disk,
    Memory,
    Battery,
    Gpu,
    Cpu,
    Resolution,
    WmTheme,
    Theme,
    Icons,
    Desktop,
}

impl Probe {
    /// Every probe, in display order.
    pub const ALL: [Probe; 17] = [
        Probe::Host,
        Probe::User,
        Probe::Os,
        Probe::Kernel,
        Probe::Uptime,
        Probe::Terminal,
        Probe::Shell,
        Probe::Disk,
        Probe::Memory,
        Probe::Battery,
        Probe::Gpu,
        Probe::Cpu,
        Probe::Resolution,
        Probe::WmTheme,
        Probe::Theme,
        Probe::Icons,
        Probe::Desktop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Probe::Host => "Host",
            Probe::User => "User",
            Probe::Os => "OS",
            Probe::Kernel => "Kernel",
            Probe::Uptime => "Uptime",
            Probe::Terminal => "Terminal",
            Probe::Shell => "Shell",
            Probe::Disk => "Disk",
            Probe::Memory => "Memory",
            Probe::Battery => "Battery",
            Probe::Gpu => "GPU",
            Probe::Cpu => "CPU",
            Probe::Resolution => "Resolution",
            Probe::WmTheme => "WM Theme",
            Probe::Theme => "Theme",
            Probe::Icons => "Icons",
            Probe::Desktop => "Desktop",
        }
    }

    /// Look the value up. Never fails; missing data reads as [`UNKNOWN`].
    pub fn gather(self, cache: &CommandCache, env: &dyn Environment) -> String {
        let value = match self {
            Probe::Host => host(cache),
            Probe::User => var(env, "USER").or_else(|| cache.run("whoami", &[])),
            Probe::Os => os(cache),
            Probe::Kernel => cache.run("uname", &["-r"]),
            Probe::Uptime => read("/proc/uptime")
                .and_then(|s| parse::proc_uptime(&s))
                .map(parse::format_uptime),
            Probe::Terminal => var(env, "TERM_PROGRAM").or_else(|| var(env, "TERM")),
            Probe::Shell => shell(cache, env),
            Probe::Disk => cache
                .run("df", &["-B1"])
                .and_then(|out| parse::df_totals(&out))
                .map(|(used, size)| {
                    format!("{} / {}", parse::format_bytes(used), parse::format_bytes(size))
                }),
            Probe::Memory => cache
                .run("free", &["-m"])
                .and_then(|out| parse::free_memory(&out)),
            Probe::Battery => battery(),
            Probe::Gpu => cache.run("lspci", &[]).and_then(|out| parse::lspci_gpu(&out)),
            Probe::Cpu => cache
                .run("lscpu", &[])
                .and_then(|out| parse::lscpu_model(&out)),
            Probe::Resolution => resolution(cache),
            Probe::WmTheme => gsettings(cache, "org.gnome.desktop.wm.preferences", "theme"),
            Probe::Theme => gsettings(cache, "org.gnome.desktop.interface", "gtk-theme")
                .or_else(|| {
                    cache
                        .run("dconf", &["read", "/org/gnome/desktop/interface/gtk-theme"])
                        .map(|out| parse::unquote(&out))
                        .filter(|theme| !theme.is_empty())
                }),
            Probe::Icons => gsettings(cache, "org.gnome.desktop.interface", "icon-theme"),
            Probe::Desktop => {
                var(env, "XDG_CURRENT_DESKTOP").or_else(|| var(env, "DESKTOP_SESSION"))
            }
        };
        value.unwrap_or_else(|| UNKNOWN.to_string())
    }
}

fn var(env: &dyn Environment, key: &str) -> Option<String> {
    env.var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read(path: impl AsRef<Path>) -> Option<String> {
    fs::read_to_string(path).ok()
}

fn host(cache: &CommandCache) -> Option<String> {
    read("/proc/sys/kernel/hostname")
        .or_else(|| read("/etc/hostname"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| cache.run("hostname", &[]))
}

fn os(cache: &CommandCache) -> Option<String> {
    cache
        .run("lsb_release", &["-si"])
        .filter(|name| !name.is_empty())
        .or_else(|| read("/etc/os-release").and_then(|s| parse::os_release_name(&s)))
}

fn shell(cache: &CommandCache, env: &dyn Environment) -> Option<String> {
    let path = var(env, "SHELL").or_else(|| {
        let user = var(env, "USER")?;
        cache
            .run("getent", &["passwd", &user])
            .and_then(|entry| parse::passwd_shell(&entry))
    })?;
    parse::shell_name(&path)
}

fn battery() -> Option<String> {
    let dir = Path::new(BATTERY_DIR);
    if !dir.exists() {
        return Some("No battery".to_string());
    }
    let capacity = read(dir.join("capacity"))?;
    let status = read(dir.join("status"));
    Some(parse::battery(&capacity, status.as_deref()))
}

fn resolution(cache: &CommandCache) -> Option<String> {
    cache
        .run("xrandr", &[])
        .and_then(|out| parse::xrandr_resolution(&out))
        .or_else(|| {
            cache
                .run("swaymsg", &["-t", "get_outputs"])
                .and_then(|out| parse::swaymsg_resolution(&out))
        })
}

fn gsettings(cache: &CommandCache, schema: &str, key: &str) -> Option<String> {
    cache
        .run("gsettings", &["get", schema, key])
        .map(|out| parse::unquote(&out))
        .filter(|value| !value.is_empty())
}
