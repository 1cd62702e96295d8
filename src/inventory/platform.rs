//! Platform attributes of the build host.

use std::env::consts;

use sysinfo::System;

use crate::error::Result;
use crate::node::{Node, Table};

pub const DESCRIPTION: &str = "Machine, operating system and distribution";

/// Executable format of the current target.
const BINARY_FORMAT: &str = if cfg!(target_os = "macos") || cfg!(target_os = "ios") {
    "Mach-O"
} else if cfg!(windows) {
    "PE"
} else {
    "ELF"
};

#[cfg(target_os = "linux")]
const KERNEL_VERSION_FILE: &str = "/proc/sys/kernel/version";

/// Kernel name as reported by `uname -s`.
fn system_name() -> String {
    match consts::OS {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        other => other.to_string(),
    }
}

/// Kernel build string as reported by `uname -v`.
fn kernel_build() -> String {
    #[cfg(target_os = "linux")]
    if let Ok(version) = std::fs::read_to_string(KERNEL_VERSION_FILE) {
        return version.trim().to_string();
    }
    System::long_os_version().unwrap_or_default()
}

/// CPU brand string; `uname -p` is "unknown" on most Linux hosts.
fn processor() -> String {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

/// Attribute name and value pairs, in display order.
pub fn attributes() -> Vec<(&'static str, String)> {
    let system = system_name();
    let release = System::kernel_version().unwrap_or_default();
    let machine = consts::ARCH.to_string();
    let distribution = [System::name(), System::os_version()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        ("Machine", machine.clone()),
        ("Platform", format!("{}-{}-{}", system, release, machine)),
        ("System", system),
        ("Release", release),
        ("Version", kernel_build()),
        ("Processor", processor()),
        ("Architecture", format!("{}bit {}", usize::BITS, BINARY_FORMAT)),
        ("Distribution", distribution),
    ]
}

/// Two-column table without headers.
pub fn render_attributes(attributes: Vec<(&str, String)>) -> Result<Node> {
    let rows = attributes
        .into_iter()
        .map(|(name, value)| vec![Node::paragraph(name), Node::paragraph(value)])
        .collect();
    Ok(Table::new(2, Vec::new(), rows)?.into())
}

pub fn run() -> Result<Node> {
    render_attributes(attributes())
}
