/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Status message formatting
use lazy_static::lazy_static;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to stdout, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    let painted = io::stdout().is_terminal() && term::stdout().is_some_and(|mut t| paint(&mut *t, s, fg));
    if !painted {
        print!("{}", s);
    }
}

/// Same as `print_color`, but for stderr
fn eprint_color(s: &str, fg: term::color::Color) {
    let painted = io::stderr().is_terminal() && term::stderr().is_some_and(|mut t| paint(&mut *t, s, fg));
    if !painted {
        eprint!("{}", s);
    }
}

fn paint<T: term::Terminal + ?Sized>(t: &mut T, s: &str, fg: term::color::Color) -> bool {
    if t.fg(fg).is_err() {
        return false;
    }
    let _ = t.attr(term::Attr::Bold);
    if write!(t, "{}", s).is_err() {
        return false;
    }
    let _ = t.reset();
    true
}

/// Print a status message with "skylinq: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        print_color("skylinq", term::color::BRIGHT_CYAN);
        println!(": {}", s);
    });
}

/// Print an error message with colored "error" prefix to stderr
pub fn print_error(msg: &str) {
    status_lock(|| {
        eprintln!();
        eprint_color("error", term::color::BRIGHT_RED);
        eprintln!(": {}", msg);
        eprintln!();
    });
}
