//! Which probes are shown and the icon in front of each.

use serde::{Deserialize, Serialize};

use super::probes::Probe;

/// Per-probe visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modules {
    pub show_host: bool,
    pub show_user: bool,
    pub show_os: bool,
    pub show_kernel: bool,
    pub show_uptime: bool,
    pub show_terminal: bool,
    pub show_shell: bool,
    pub show_disk: bool,
    pub show_memory: bool,
    pub show_battery: bool,
    pub show_gpu: bool,
    pub show_cpu: bool,
    pub show_resolution: bool,
    pub show_wm_theme: bool,
    pub show_theme: bool,
    pub show_icons: bool,
    #[serde(alias = "show_de")]
    pub show_desktop: bool,
}

impl Default for Modules {
    fn default() -> Self {
        Self {
            show_host: true,
            show_user: true,
            show_os: true,
            show_kernel: true,
            show_uptime: true,
            show_terminal: true,
            show_shell: true,
            show_disk: true,
            show_memory: true,
            show_battery: true,
            show_gpu: true,
            show_cpu: true,
            show_resolution: true,
            show_wm_theme: true,
            show_theme: true,
            show_icons: true,
            show_desktop: true,
        }
    }
}

impl Modules {
    pub fn is_enabled(&self, probe: Probe) -> bool {
        match probe {
            Probe::Host => self.show_host,
            Probe::User => self.show_user,
            Probe::Os => self.show_os,
            Probe::Kernel => self.show_kernel,
            Probe::Uptime => self.show_uptime,
            Probe::Terminal => self.show_terminal,
            Probe::Shell => self.show_shell,
            Probe::Disk => self.show_disk,
            Probe::Memory => self.show_memory,
            Probe::Battery => self.show_battery,
            Probe::Gpu => self.show_gpu,
            Probe::Cpu => self.show_cpu,
            Probe::Resolution => self.show_resolution,
            Probe::WmTheme => self.show_wm_theme,
            Probe::Theme => self.show_theme,
            Probe::Icons => self.show_icons,
            Probe::Desktop => self.show_desktop,
        }
    }

    /// Enabled probes in display order.
    pub fn enabled(&self) -> Vec<Probe> {
        Probe::ALL
            .into_iter()
            .filter(|&probe| self.is_enabled(probe))
            .collect()
    }
}

/// Icon glyph per probe (Nerd Font codepoints by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub host: String,
    pub user: String,
    pub os: String,
    pub kernel: String,
    pub uptime: String,
    pub terminal: String,
    pub shell: String,
    pub disk: String,
    pub memory: String,
    pub battery: String,
    pub gpu: String,
    pub cpu: String,
    pub resolution: String,
    pub wm_theme: String,
    pub theme: String,
    pub icons: String,
    #[serde(alias = "de")]
    pub desktop: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            host: "\u{f048b}".to_string(),
            user: "\u{f0004}".to_string(),
            os: "\u{f08c7}".to_string(),
            kernel: "\u{f08c7}".to_string(),
            uptime: "\u{f051f}".to_string(),
            terminal: "\u{f018d}".to_string(),
            shell: "\u{f018d}".to_string(),
            disk: "\u{f02ca}".to_string(),
            memory: "\u{f035b}".to_string(),
            battery: "\u{f0084}".to_string(),
            gpu: "\u{f08ae}".to_string(),
            cpu: "\u{f061a}".to_string(),
            resolution: "\u{f0379}".to_string(),
            wm_theme: "\u{f03d8}".to_string(),
            theme: "\u{f052f}".to_string(),
            icons: "\u{f003b}".to_string(),
            desktop: "\u{f09e8}".to_string(),
        }
    }
}

impl Icons {
    pub fn get(&self, probe: Probe) -> &str {
        match probe {
            Probe::Host => &self.host,
            Probe::User => &self.user,
            Probe::Os => &self.os,
            Probe::Kernel => &self.kernel,
            Probe::Uptime => &self.uptime,
            Probe::Terminal => &self.terminal,
            Probe::Shell => &self.shell,
            Probe::Disk => &self.disk,
            Probe::Memory => &self.memory,
            Probe::Battery => &self.battery,
            Probe::Gpu => &self.gpu,
            Probe::Cpu => &self.cpu,
            Probe::Resolution => &self.resolution,
            Probe::WmTheme => &self.wm_theme,
            Probe::Theme => &self.theme,
            Probe::Icons => &self.icons,
            Probe::Desktop => &self.desktop,
        }
    }
}
