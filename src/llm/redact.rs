use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Markers after which the value up to the next delimiter is a credential.
const KEY_MARKERS: &[&str] = &["key=", "\"key\":\"", "api_key=", "x-goog-api-key: "];

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn redact_after_markers(input: &str) -> Cow<'_, str> {
    if !KEY_MARKERS.iter().any(|marker| input.contains(marker)) {
        return Cow::Borrowed(input);
    }

    let mut out = input.to_string();
    for marker in KEY_MARKERS {
        let mut search_from = 0;
        while let Some(rel) = out[search_from..].find(marker) {
            let value_start = search_from + rel + marker.len();
            let value_len: usize = out[value_start..]
                .chars()
                .take_while(|c| is_token_char(*c))
                .map(char::len_utf8)
                .sum();

            if value_len == 0 {
                search_from = value_start;
                continue;
            }

            out.replace_range(value_start..value_start + value_len, REDACTED);
            search_from = value_start + REDACTED.len();
        }
    }
    Cow::Owned(out)
}

/// Scrub a provider error body before it reaches logs: the known API key and
/// anything following a credential marker are replaced, and the result is
/// truncated.
pub fn sanitize_api_error(input: &str, api_key: Option<&str>) -> String {
    let mut scrubbed = redact_after_markers(input).into_owned();
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        scrubbed = scrubbed.replace(key, REDACTED);
    }

    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed;
    }

    let end = scrubbed
        .char_indices()
        .nth(MAX_API_ERROR_CHARS)
        .map_or(scrubbed.len(), |(i, _)| i);
    format!("{}...", &scrubbed[..end])
}
