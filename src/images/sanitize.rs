// src/images/sanitize.rs
// =============================================================================
// Derives the local file name for a downloaded image from its URL.
//
//   https://a.com/img/pic.png?w=100  ->  pic.png
//   https://a.com/pic.jpg            ->  pic.jpg
//   https://a.com/gallery/           ->  image   (nothing after the last '/')
// =============================================================================

/// Name used when the URL has no usable final path segment
pub const FALLBACK_FILENAME: &str = "image";

/// Strips the query string (and fragment) and returns the last path segment.
///
/// Never returns an empty string, `.` or `..`, so the result is always a
/// plain file name inside the images directory.
pub fn sanitize_filename(url: &str) -> String {
    // A fragment is never sent to the server, so it can't be part of the
    // file name either. Cut it off along with the query.
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    let segment = without_query.rsplit('/').next().unwrap_or_default();

    match segment {
        "" | "." | ".." => FALLBACK_FILENAME.to_string(),
        name => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_query_string() {
        assert_eq!(sanitize_filename("https://a.com/img/pic.png?w=100"), "pic.png");
    }

    #[test]
    fn test_plain_url() {
        assert_eq!(sanitize_filename("https://a.com/pic.jpg"), "pic.jpg");
    }

    #[test]
    fn test_strips_fragment() {
        assert_eq!(sanitize_filename("https://a.com/sprite.svg#icon"), "sprite.svg");
        // Slashes inside the fragment don't start a new segment
        assert_eq!(sanitize_filename("https://a.com/a#x/c.png"), "a");
    }

    #[test]
    fn test_trailing_slash_falls_back() {
        assert_eq!(sanitize_filename("https://a.com/gallery/"), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("https://a.com/?id=7"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_dot_segments_fall_back() {
        assert_eq!(sanitize_filename("https://a.com/img/.."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("https://a.com/."), FALLBACK_FILENAME);
    }

    #[test]
    fn test_query_slashes_are_ignored() {
        assert_eq!(
            sanitize_filename("https://a.com/thumb.webp?src=/big/photo.png"),
            "thumb.webp"
        );
    }
}
