//! One-off source rewriter for thread-targeted sends.
//!
//! Rewrites outbound-send call sites in a (Python) source file so every send
//! carries the message's thread id: `bot.send_message(chat, text)` becomes
//! `bot.send_message(chat, text, **thread_kwargs(message))`. The marker check
//! makes the transform idempotent, so re-running it over an already patched
//! file is a no-op.

use regex::Regex;

/// Outbound-send call sites to patch.
const SEND_FNS: [&str; 4] = ["send_message", "send_photo", "answer_photo", "answer"];

/// Presence of this marker anywhere inside a call's argument list means the
/// call is already patched.
const MARKER: &str = "**thread_kwargs";

const INSERTION: &str = "**thread_kwargs(message)";

/// Apply the transform to a whole source text.
pub fn apply(source: &str) -> String {
    let pattern = format!(r"\b(?:{})\s*\(", SEND_FNS.join("|"));
    let call_re = Regex::new(&pattern).expect("valid regex");

    let mut out = String::with_capacity(source.len());
    let mut pos = 0usize;

    while let Some(m) = call_re.find(&source[pos..]) {
        let open = pos + m.end(); // index just past '('
        out.push_str(&source[pos..open]);

        let Some(close) = find_closing_paren(source, open) else {
            // Unbalanced call; leave the rest untouched.
            out.push_str(&source[open..]);
            return out;
        };

        let args = &source[open..close];
        if args.contains(MARKER) {
            out.push_str(&source[open..=close]);
        } else if args.trim().is_empty() {
            out.push_str(INSERTION);
            out.push(')');
        } else {
            out.push_str(args);
            out.push_str(", ");
            out.push_str(INSERTION);
            out.push(')');
        }

        pos = close + 1;
    }

    out.push_str(&source[pos..]);
    out
}

/// Byte index of the parenthesis closing the one just before `open`.
///
/// Tracks nesting depth and skips over string literals (single or double
/// quoted, backslash escapes honoured) so parentheses inside strings do not
/// unbalance the scan.
fn find_closing_paren(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 1usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' => {
                let quote = bytes[i];
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'\\' {
                        i += 2;
                        continue;
                    }
                    if bytes[i] == quote {
                        break;
                    }
                    i += 1;
                }
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_kwargs_to_a_send_call() {
        let src = "await bot.send_message(chat_id, text)\n";
        assert_eq!(
            apply(src),
            "await bot.send_message(chat_id, text, **thread_kwargs(message))\n"
        );
    }

    #[test]
    fn is_idempotent() {
        let src = "await message.answer(text)\nawait bot.send_photo(chat_id, photo, caption=cap)\n";
        let once = apply(src);
        let twice = apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn marker_prevents_double_insertion() {
        let src = "bot.send_message(chat_id, text, **thread_kwargs(message))";
        assert_eq!(apply(src), src);
    }

    #[test]
    fn patches_every_listed_send_function() {
        let src = "\
message.answer(a)
message.answer_photo(b)
bot.send_message(c)
bot.send_photo(d)
";
        let patched = apply(src);
        assert_eq!(patched.matches(MARKER).count(), 4);
    }

    #[test]
    fn nested_calls_do_not_confuse_the_paren_scan() {
        let src = "bot.send_message(chat_id, render(text, escape(raw)))";
        assert_eq!(
            apply(src),
            "bot.send_message(chat_id, render(text, escape(raw)), **thread_kwargs(message))"
        );
    }

    #[test]
    fn parens_inside_string_literals_are_skipped() {
        let src = r#"message.answer("smile :) ok", parse_mode="HTML")"#;
        assert_eq!(
            apply(src),
            r#"message.answer("smile :) ok", parse_mode="HTML", **thread_kwargs(message))"#
        );
    }

    #[test]
    fn empty_argument_lists_get_the_kwargs_without_a_leading_comma() {
        let src = "message.answer()";
        assert_eq!(apply(src), "message.answer(**thread_kwargs(message))");
    }

    #[test]
    fn unrelated_calls_are_untouched() {
        let src = "logger.info(text)\nanswer_cache.get(key)\n";
        assert_eq!(apply(src), src);
    }
}
