//! Small utility helpers for currency formatting, URL building and launching.
//!
//! The functions in this module are intentionally lightweight and are used by
//! the renderer, the event handlers and the map resolver.

pub mod config;

use std::fmt::Write;

/// Narrow no-break space used as the thousands separator in `fr-FR`.
const GROUP_SEP: char = '\u{202f}';

/// Currency suffix for West African CFA francs, no-break spaced.
const CURRENCY_SUFFIX: &str = "\u{a0}F\u{a0}CFA";

/// What: Format an amount as whole-unit CFA francs.
///
/// Inputs:
/// - `amount`: Non-negative amount in currency units
///
/// Output:
/// - Text such as `"25 000 F CFA"` (narrow no-break space grouping).
///
/// Details:
/// - Rounds half away from zero; no fractional digits are shown.
/// - Non-finite amounts render as `"—"`.
#[must_use]
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + 12);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out.push_str(CURRENCY_SUFFIX);
    out
}

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Build the WhatsApp enquiry link for a product.
///
/// Inputs:
/// - `number`: International number without `+`
/// - `name`: Product name
/// - `sku`: Product SKU (may be empty)
///
/// Output:
/// - `https://wa.me/<number>?text=...` with the message percent-encoded.
#[must_use]
pub fn whatsapp_link(number: &str, name: &str, sku: &str) -> String {
    format!(
        "https://wa.me/{number}?text=Bonjour,%20je%20souhaite%20informations%20sur%20{}%20({}).",
        percent_encode(name),
        percent_encode(sku)
    )
}

/// Directions link to `address` on Google Maps.
#[must_use]
pub fn directions_link(address: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        percent_encode(address)
    )
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems (Linux/macOS), uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        tracing::info!(url = %url, "opening url");
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                // Try xdg-open first (Linux), then open (macOS)
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Money formatting groups thousands and drops decimals
    ///
    /// - Input: 25000, 999, 1234567.6, 0
    /// - Output: Grouped whole units with the CFA suffix
    fn money_formatting() {
        assert_eq!(format_money(25000.0), "25\u{202f}000\u{a0}F\u{a0}CFA");
        assert_eq!(format_money(999.0), "999\u{a0}F\u{a0}CFA");
        assert_eq!(
            format_money(1_234_567.6),
            "1\u{202f}234\u{202f}568\u{a0}F\u{a0}CFA"
        );
        assert_eq!(format_money(0.0), "0\u{a0}F\u{a0}CFA");
        assert_eq!(format_money(f64::NAN), "—");
    }

    #[test]
    /// What: Percent-encoding keeps unreserved bytes and escapes the rest
    ///
    /// - Input: Plain, spaced and accented text
    /// - Output: RFC 3986 encoding with `%20` for spaces
    fn percent_encoding() {
        assert_eq!(percent_encode("abc-_.~"), "abc-_.~");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("Côte"), "C%C3%B4te");
    }

    #[test]
    /// What: Link builders embed encoded product and address text
    ///
    /// - Input: Product "Sac cuir" / SKU "SC-1"; an address with a quote
    /// - Output: Encoded wa.me and directions URLs
    fn link_builders() {
        let wa = whatsapp_link("2250712623814", "Sac cuir", "SC-1");
        assert!(wa.starts_with("https://wa.me/2250712623814?text=Bonjour"));
        assert!(wa.ends_with("Sac%20cuir%20(SC-1)."));
        let dir = directions_link("Boutik, Abidjan Côte d'Ivoire");
        assert!(dir.ends_with("Boutik%2C%20Abidjan%20C%C3%B4te%20d%27Ivoire"));
    }
}
