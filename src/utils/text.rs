use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, appending "..." when anything was cut.
/// Width is measured in terminal cells, so wide characters count as two.
pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text_unicode("Hello", 10), "Hello");
        assert_eq!(truncate_text_unicode("Hello World!", 8), "Hello...");
        assert_eq!(truncate_text_unicode("", 5), "");
    }

    #[test]
    fn test_truncate_keeps_station_names_short() {
        let station = "Lake Shore Dr & Monroe St (long pier entrance)";
        let truncated = truncate_text_unicode(station, 20);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 20 + 3);
    }
}
