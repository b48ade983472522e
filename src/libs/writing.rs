use std::fmt;
use std::io::Write;

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_BLUE: &str = "\x1b[94m";
}

fn stamp() -> String {
    chrono::Utc::now().format("%H:%M:%S%.3f").to_string()
}

fn line(color: &str, args: fmt::Arguments<'_>) -> String {
    format!(
        "{}{} | {}{}{}{}",
        cc::LIGHT_GRAY,
        stamp(),
        cc::RESET,
        color,
        args,
        cc::RESET
    )
}

/// Progress and result lines. Goes to stdout.
pub fn out_line(color: &str, args: fmt::Arguments<'_>) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", line(color, args));
}

/// Errors and refusals. Goes to stderr.
pub fn err_line(color: &str, args: fmt::Arguments<'_>) {
    let mut err = std::io::stderr().lock();
    let _ = writeln!(err, "{}", line(color, args));
}

#[macro_export]
macro_rules! log {
    // log!("price: {}", p);
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $crate::libs::writing::out_line(
            $crate::libs::writing::cc::LIGHT_GRAY,
            format_args!($fmt $(, $arg)*),
        );
    }};

    // log!(cc::GREEN, "swap: {} -> {}", a, b);
    ($color:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        $crate::libs::writing::out_line($color, format_args!($fmt $(, $arg)*));
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::libs::writing::err_line(
            $crate::libs::writing::cc::ORANGE,
            format_args!($($arg)*),
        );
    }};
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {{
        $crate::libs::writing::err_line(
            $crate::libs::writing::cc::RED,
            format_args!($($arg)*),
        );
    }};
}
