//! Startup banner with a gradient (NAME-HANDLER).
//! Uses figlet's built-in standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Amber (#ffb000).
const AMBER: (u8, u8, u8) = (0xff, 0xb0, 0x00);
/// Teal (#00c2a8).
const TEAL: (u8, u8, u8) = (0x00, 0xc2, 0xa8);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Renders "NAMES" in figlet ASCII art, or `None` if the font cannot be loaded.
fn render_title() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    font.convert("NAMES").map(|figure| figure.to_string())
}

/// Prints the banner with a gradient from Amber to Teal, then version, classifier mode and
/// listen address.
pub fn print_welcome(mode: &str, bind_addr: &str) {
    let mut out = stdout();
    let art = render_title().unwrap_or_else(|| "NAME-HANDLER".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(AMBER, TEAL, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: TEAL.0,
        g: TEAL.1,
        b: TEAL.2,
    }));
    let _ = out.execute(Print(format!("v{}  classifier: {}\r\n", version, mode)));
    let _ = out.execute(Print(format!("listening on http://{}\r\n", bind_addr)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
