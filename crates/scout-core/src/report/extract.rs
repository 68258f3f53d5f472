//! Splitting the emoji marker off a model reply.

use serde::{Deserialize, Serialize};

/// Longest line (in chars) still accepted as a bare marker line.
const MAX_MARKER_CHARS: usize = 16;

/// How the emoji marker is taken from the first line of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiRule {
    /// The first non-empty line is the marker whenever more lines follow,
    /// whatever it contains.
    FirstLine,
    /// Only a glyph line (or a leading glyph token) is taken as the marker;
    /// text lines are never consumed.
    #[default]
    Symbolic,
}

/// An emoji marker and the body that remains once it is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReply {
    pub emoji: String,
    pub body: String,
}

/// Splits `reply` into marker and body, using `fallback` when no marker
/// can be taken.
pub fn split_reply(reply: &str, rule: EmojiRule, fallback: &str) -> SplitReply {
    let lines: Vec<&str> = reply.lines().collect();

    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return SplitReply {
            emoji: fallback.to_string(),
            body: String::new(),
        };
    };

    let head = lines[first].trim();
    let rest = &lines[first + 1..];

    // A single line is all content, whatever it starts with
    if rest.iter().all(|l| l.trim().is_empty()) {
        return unsplit(reply, fallback);
    }

    match rule {
        EmojiRule::FirstLine => SplitReply {
            emoji: head.to_string(),
            body: join_body(rest),
        },
        EmojiRule::Symbolic => {
            if is_symbolic(head) {
                return SplitReply {
                    emoji: head.to_string(),
                    body: join_body(rest),
                };
            }

            // "🚗 Tesla, Inc." keeps the text after the glyph
            let mut parts = head.splitn(2, char::is_whitespace);
            if let (Some(token), Some(remainder)) = (parts.next(), parts.next()) {
                if is_symbolic(token) {
                    let mut body_lines = vec![remainder.trim_start()];
                    body_lines.extend_from_slice(rest);
                    return SplitReply {
                        emoji: token.to_string(),
                        body: join_body(&body_lines),
                    };
                }
            }

            unsplit(reply, fallback)
        }
    }
}

fn unsplit(reply: &str, fallback: &str) -> SplitReply {
    SplitReply {
        emoji: fallback.to_string(),
        body: reply.to_string(),
    }
}

/// Joins body lines, dropping blank lines between marker and content.
fn join_body(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    lines[start..].join("\n")
}

/// A short run of emoji: pictographs plus the joiners and modifiers that
/// combine them. Letters, digits and ordinary punctuation never qualify.
fn is_symbolic(s: &str) -> bool {
    s.chars().count() <= MAX_MARKER_CHARS
        && s.chars().any(is_pictograph)
        && s.chars().all(|c| is_pictograph(c) || is_emoji_joiner(c))
}

fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF // emoticons, transport, flags, supplemental symbols
            | 0x2600..=0x27BF // miscellaneous symbols, dingbats
            | 0x2300..=0x23FF // ⌚ ⏰ and friends
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2B50..=0x2B55
            | 0x00A9
            | 0x00AE
            | 0x2122
            | 0x2139
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

/// Zero-width joiner, variation selectors, keycap and tag characters.
fn is_emoji_joiner(c: char) -> bool {
    matches!(c as u32, 0x200D | 0xFE0E | 0xFE0F | 0x20E3 | 0xE0020..=0xE007F)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "❓";

    fn both_rules() -> [EmojiRule; 2] {
        [EmojiRule::FirstLine, EmojiRule::Symbolic]
    }

    #[test]
    fn test_emoji_line_then_body() {
        for rule in both_rules() {
            let split = split_reply("🚗\nLine1\nLine2", rule, FALLBACK);
            assert_eq!(split.emoji, "🚗", "{rule:?}");
            assert_eq!(split.body, "Line1\nLine2", "{rule:?}");
        }
    }

    #[test]
    fn test_single_line_keeps_body() {
        for rule in both_rules() {
            let split = split_reply("Just one line", rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK, "{rule:?}");
            assert_eq!(split.body, "Just one line", "{rule:?}");
        }
    }

    #[test]
    fn test_empty_reply() {
        for rule in both_rules() {
            let split = split_reply("", rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK);
            assert!(split.body.is_empty());

            let split = split_reply("  \n\n ", rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK);
            assert!(split.body.is_empty());
        }
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let split = split_reply("\n\n💻\n\n- Item", EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, "💻");
        assert_eq!(split.body, "- Item");
    }

    #[test]
    fn test_first_line_consumes_text() {
        let split = split_reply("Tesla makes cars\n- Item", EmojiRule::FirstLine, FALLBACK);
        assert_eq!(split.emoji, "Tesla makes cars");
        assert_eq!(split.body, "- Item");
    }

    #[test]
    fn test_symbolic_keeps_text_first_line() {
        let reply = "Tesla makes cars\n- Item";
        let split = split_reply(reply, EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, FALLBACK);
        assert_eq!(split.body, reply);
    }

    #[test]
    fn test_symbolic_leading_glyph_token() {
        let split = split_reply("🚗 Tesla, Inc.\n- Item", EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, "🚗");
        assert_eq!(split.body, "Tesla, Inc.\n- Item");
    }

    #[test]
    fn test_symbolic_ignores_markdown_rule() {
        let reply = "---\n- Item";
        let split = split_reply(reply, EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, FALLBACK);
        assert_eq!(split.body, reply);
    }

    #[test]
    fn test_crlf_line_endings() {
        let split = split_reply("🏥\r\nLine1\r\nLine2", EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, "🏥");
        assert_eq!(split.body, "Line1\nLine2");
    }

    #[test]
    fn test_single_line_with_leading_glyph_is_unsplit() {
        for rule in both_rules() {
            let reply = "🚗 Tesla designs electric cars.";
            let split = split_reply(reply, rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK, "{rule:?}");
            assert_eq!(split.body, reply, "{rule:?}");

            let split = split_reply("🚗", rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK, "{rule:?}");
            assert_eq!(split.body, "🚗", "{rule:?}");

            let split = split_reply("Just one line\n\n", rule, FALLBACK);
            assert_eq!(split.emoji, FALLBACK, "{rule:?}");
            assert_eq!(split.body, "Just one line\n\n", "{rule:?}");
        }
    }

    #[test]
    fn test_symbolic_keeps_bullets_and_dashes() {
        for reply in ["• item\n- more", "— Tesla designs cars\n- more", "•\n- more"] {
            let split = split_reply(reply, EmojiRule::Symbolic, FALLBACK);
            assert_eq!(split.emoji, FALLBACK, "{reply:?}");
            assert_eq!(split.body, reply, "{reply:?}");
        }
    }

    #[test]
    fn test_symbolic_accepts_joined_emoji() {
        let split = split_reply("👩‍💻\n- Item", EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, "👩‍💻");
        assert_eq!(split.body, "- Item");

        let split = split_reply("⚕️ Healthcare\n- Item", EmojiRule::Symbolic, FALLBACK);
        assert_eq!(split.emoji, "⚕️");
        assert_eq!(split.body, "Healthcare\n- Item");
    }
}
