/// Parses a listing price such as `£51.77`. Everything except ASCII digits
/// and `.` is stripped first; an empty or malformed remainder is `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|price| price.is_finite())
}

/// Maps the word-form star class (`One`..`Five`) to a rating.
pub fn parse_rating(token: &str) -> Option<u8> {
    match token {
        "One" => Some(1),
        "Two" => Some(2),
        "Three" => Some(3),
        "Four" => Some(4),
        "Five" => Some(5),
        _ => None,
    }
}

/// Turns a relative image path (`../../media/x.jpg`) into an absolute URL
/// under `site_root`.
pub fn absolute_image_url(site_root: &str, src: &str) -> String {
    let root = site_root.trim_end_matches('/');
    let path = src.replace("../", "");
    format!("{}/{}", root, path.trim_start_matches('/'))
}
