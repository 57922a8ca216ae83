//! Outbound-text helpers.

use regex::Regex;

/// Strip `<...>` tag shapes from a string.
///
/// Error descriptions pass through here before reaching the user, so a model
/// or transport error containing markup does not get reflected as Telegram
/// HTML. Best-effort, not a security control.
pub fn strip_tags(text: &str) -> String {
    let re = Regex::new(r"<[^>]*?>").expect("valid regex");
    re.replace_all(text, "").to_string()
}
