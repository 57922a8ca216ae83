//! Photo-intent classification.
//!
//! Pure and deterministic: lowercase the message, look for any configured
//! trigger keyword as a substring, and strip the match from the original
//! casing to form the image query. The keyword set is policy (config), not a
//! hardcoded artefact of any one language.

use crate::domain::PhotoIntent;

/// Classify a message against the trigger keyword set.
///
/// Matching is case-insensitive and substring-based (the trigger may appear
/// anywhere in the message). When several triggers match, the leftmost
/// occurrence wins and position ties go to the longest keyword; that span is
/// removed from the original casing and the remainder trimmed. An empty
/// remainder is still a photo request.
pub fn classify(text: &str, keywords: &[String]) -> PhotoIntent {
    let chars: Vec<char> = text.chars().collect();
    // Per-char lowercasing keeps indices aligned with the original casing.
    let lowered: Vec<char> = chars.iter().map(|&c| lower_first(c)).collect();

    let mut hit: Option<(usize, usize)> = None; // (start, len) in chars
    for kw in keywords {
        let needle: Vec<char> = kw.chars().map(lower_first).collect();
        if needle.is_empty() {
            continue;
        }
        let Some(start) = find_subslice(&lowered, &needle) else {
            continue;
        };
        let better = match hit {
            None => true,
            Some((s, l)) => start < s || (start == s && needle.len() > l),
        };
        if better {
            hit = Some((start, needle.len()));
        }
    }

    let Some((start, len)) = hit else {
        return PhotoIntent::Chat;
    };

    let mut rest = String::new();
    rest.extend(&chars[..start]);
    rest.extend(&chars[start + len..]);

    PhotoIntent::Photo {
        query: rest.trim().to_string(),
    }
}

fn lower_first(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws() -> Vec<String> {
        crate::config::DEFAULT_PHOTO_KEYWORDS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn plain_chat_is_not_a_photo_request() {
        assert_eq!(classify("Привет", &kws()), PhotoIntent::Chat);
        assert_eq!(classify("hello there", &kws()), PhotoIntent::Chat);
    }

    #[test]
    fn trigger_is_case_insensitive() {
        let intent = classify("ПОКАЖИ кота", &kws());
        assert_eq!(
            intent,
            PhotoIntent::Photo {
                query: "кота".to_string()
            }
        );
    }

    #[test]
    fn leftmost_longest_trigger_is_removed() {
        // Both "покажи" and "покажи фото" match at position 0; the longer wins
        // so "фото" does not leak into the query.
        let intent = classify("Покажи фото кота", &kws());
        assert_eq!(
            intent,
            PhotoIntent::Photo {
                query: "кота".to_string()
            }
        );
    }

    #[test]
    fn trigger_may_appear_mid_message() {
        // Only the trigger span is removed; interior whitespace is untouched.
        let intent = classify("пожалуйста покажи закат", &kws());
        assert_eq!(
            intent,
            PhotoIntent::Photo {
                query: "пожалуйста  закат".to_string()
            }
        );
    }

    #[test]
    fn bare_trigger_is_still_a_photo_request() {
        let intent = classify("Покажи", &kws());
        assert_eq!(
            intent,
            PhotoIntent::Photo {
                query: String::new()
            }
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let a = classify("покажи арт в стиле ретро", &kws());
        let b = classify("покажи арт в стиле ретро", &kws());
        assert_eq!(a, b);
    }

    #[test]
    fn query_keeps_original_casing() {
        let intent = classify("Покажи Кота В Сапогах", &kws());
        assert_eq!(
            intent,
            PhotoIntent::Photo {
                query: "Кота В Сапогах".to_string()
            }
        );
    }
}
