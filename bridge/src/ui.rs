//! User interface utilities for console output

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::dom::{ElementRef, ACTIVE_CLASS};

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_colors(enabled: bool) {
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

fn paint(code: &'static str) -> &'static str {
    if COLORS_ENABLED.load(Ordering::Relaxed) {
        code
    } else {
        ""
    }
}

/// Print startup banner
pub fn print_banner(version: &str, api_url: &str) {
    println!();
    println!("{}{}CERTBRIDGE v{}{}", paint(colors::BRIGHT_CYAN), paint(colors::BOLD), version, paint(colors::RESET));
    println!("{}  Service: {}{}", paint(colors::DIM), api_url, paint(colors::RESET));
    println!();
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Info,
    Warning,
    Error,
}

/// Print status line with icon and color
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Info => colors::BRIGHT_CYAN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };

    println!("{}[{}]{} {}{}{}", paint(color), icon, paint(colors::RESET), paint(color), message, paint(colors::RESET));
}

/// Print a section header
pub fn print_section(title: &str) {
    let rule = "━".repeat(64);
    println!();
    println!("{}{}{}", paint(colors::DIM), rule, paint(colors::RESET));
    println!("{}  {}{}{}", paint(colors::BRIGHT_CYAN), paint(colors::BOLD), title, paint(colors::RESET));
    println!("{}{}{}", paint(colors::DIM), rule, paint(colors::RESET));
    println!();
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!(
        "  {}{}:{} {}{}{}",
        paint(colors::BRIGHT_WHITE),
        key,
        paint(colors::RESET),
        paint(colors::BRIGHT_CYAN),
        value,
        paint(colors::RESET)
    );
}

/// Print configuration summary
pub fn print_config_summary(config: &crate::config::Config) {
    print_section("Configuration");

    print_kv("Service", &config.api.base_url);
    print_kv("Timeout", &format_duration(config.api.timeout()));
    print_kv("User Agent", &config.api.user_agent);
    print_kv("Log Level", &config.log.level);
}

/// Print the content of a response area as terminal text
pub fn print_response(title: &str, html: &str) {
    print_section(title);
    for line in html_to_text(html).lines() {
        println!("  {}", line);
    }
    println!();
}

/// Print which tab panels are currently shown
pub fn print_panels(panels: &[ElementRef]) {
    print_section("Tab Panels");
    for panel in panels {
        let id = panel.id().unwrap_or_else(|| "(no id)".to_string());
        let state = if panel.has_class(ACTIVE_CLASS) { "active" } else { "hidden" };
        print_kv(&id, state);
    }
}

/// Converts response-area HTML into plain text: line breaks become
/// newlines and escaped characters are restored.
pub fn html_to_text(html: &str) -> String {
    html.replace("<br />", "\n")
        .replace("<br/>", "\n")
        .replace("<br>", "\n")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

/// Check if terminal supports colors
pub fn supports_colors() -> bool {
    #[cfg(windows)]
    {
        use std::env;
        env::var("TERM").is_ok() || env::var("WT_SESSION").is_ok()
    }

    #[cfg(not(windows))]
    {
        use std::env;
        env::var("TERM").is_ok() && env::var("NO_COLOR").is_err()
    }
}
