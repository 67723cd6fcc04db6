//! Pretty terminal output with colors and badges.

use colored::Colorize;

// === Startup ===

pub fn print_banner() {
    println!();
    println!("{}", "╔══════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                              ║".cyan());
    println!("║     {}                         ║", "actionlog v1.0.0".bold().white());
    println!("║     {}                  ║", "User action logging API".dimmed());
    println!("{}", "║                                              ║".cyan());
    println!("{}", "╚══════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}      {}", "POST".yellow(), "/log".white(), "Create a new log entry".dimmed());
    println!("  {} {}     {}", "GET ".green(), "/logs".white(), "Latest 10 entries, newest first".dimmed());
    println!("  {} {}         {}", "GET ".green(), "/".white(), "Service info".dimmed());
    println!("  {} {}   {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/metrics".white(), "Telemetry counters".dimmed());
    println!();
}

// === Badges ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

// === Core Events ===

pub fn log_append(user: &str, action: &str) {
    println!(
        "{} {} {} {} {}",
        badge("LOG", colored::Color::Black, colored::Color::Green),
        "user:".dimmed(),
        user.white(),
        "action:".dimmed(),
        action.cyan()
    );
}

pub fn log_reject(reason: &str) {
    println!(
        "{} {}",
        badge("DENY", colored::Color::White, colored::Color::Red),
        reason.red()
    );
}
