use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps `s` so that no line is wider than `width` terminal cells.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut wrapped = String::with_capacity(s.len());
    for (i, line) in s.lines().enumerate() {
        if i > 0 {
            wrapped.push('\n');
        }
        let mut line_width = 0;
        for c in line.chars() {
            let char_width = c.width().unwrap_or(0);
            if line_width + char_width > width {
                wrapped.push('\n');
                line_width = 0;
            }
            wrapped.push(c);
            line_width += char_width;
        }
    }
    wrapped
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() <= max_height {
        return s.to_string();
    }
    if max_height == 1 {
        return String::from("...");
    }
    format!("{}\n...", lines[..max_height - 1].join("\n"))
}

/// Cuts `s` to at most `width` cells, ending with `…` when shortened.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Compact age of a timestamp: `now`, `12s`, `5m`, `3h`, `2d`, then a date.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let seconds = elapsed.num_seconds();

    match seconds {
        s if s < 1 => String::from("now"),
        s if s < 60 => format!("{s}s"),
        s if s < 60 * 60 => format!("{}m", s / 60),
        s if s < 60 * 60 * 24 => format!("{}h", s / (60 * 60)),
        s if s < 60 * 60 * 24 * 7 => format!("{}d", s / (60 * 60 * 24)),
        _ => created_at.format("%b %d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 13), "hello, world!");
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        assert_eq!(wrap_text("hello, world!", 4), "hell\no, w\norld\n!");
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        assert_eq!(wrap_text("こんにちは、世界！", 7), "こんに\nちは、\n世界！");
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        assert_eq!(wrap_text("ab\ncdef", 3), "ab\ncde\nf");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }

    #[rstest]
    #[case("foo\nbar\nbaz", 3, "foo\nbar\nbaz")]
    #[case("foo\nbar\nbaz", 2, "foo\n...")]
    #[case("foo\nbar", 1, "...")]
    #[case("foo\nbar\nbaz", 0, "")]
    fn test_truncate_text(#[case] input: &str, #[case] height: usize, #[case] expected: &str) {
        assert_eq!(truncate_text(input, height), expected);
    }

    #[rstest]
    #[case("Guido Marucci Blas", 30, "Guido Marucci Blas")]
    #[case("Guido Marucci Blas", 6, "Guido…")]
    #[case("Guido", 0, "")]
    fn test_ellipsize(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(ellipsize(input, width), expected);
    }

    #[rstest]
    #[case(Duration::zero(), "now")]
    #[case(Duration::seconds(12), "12s")]
    #[case(Duration::seconds(61), "1m")]
    #[case(Duration::minutes(59), "59m")]
    #[case(Duration::hours(3), "3h")]
    #[case(Duration::days(2), "2d")]
    #[case(Duration::days(30), "Apr 17")]
    fn test_relative_time(#[case] age: Duration, #[case] expected: &str) {
        let created_at = Utc.with_ymd_and_hms(2017, 4, 17, 10, 0, 0).unwrap();

        assert_eq!(relative_time(created_at, created_at + age), expected);
    }

    #[test]
    fn test_relative_time_future_timestamp_is_now() {
        let now = Utc.with_ymd_and_hms(2017, 4, 17, 10, 0, 0).unwrap();

        assert_eq!(relative_time(now + Duration::minutes(5), now), "now");
    }
}
