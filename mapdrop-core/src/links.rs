//! Write-time rewriting of social-media links
//!
//! A message that consists entirely of a link to a known social host is
//! stored as a clickable anchor. Anything else (plain text, unrecognized
//! hosts, links embedded inside other text) is stored untouched. The
//! transform runs once on submission and is irreversible.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hosts whose links are rewritten.
const SOCIAL_HOSTS: &[&str] = &["twitter.com", "mobile.twitter.com", "x.com"];

/// Matches a message that is a single URL and captures its host.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^https?://([A-Za-z0-9.-]+)(?::\d+)?(?:/[^\s"]*)?$"#).expect("invalid link regex")
});

/// Rewrite a recognized social link into an anchor, or return the message
/// unchanged.
pub fn rewrite_social_link(message: &str) -> String {
    let trimmed = message.trim();

    let Some(caps) = LINK_RE.captures(trimmed) else {
        return message.to_owned();
    };

    let host = caps[1].to_ascii_lowercase();
    if !SOCIAL_HOSTS.contains(&host.as_str()) {
        return message.to_owned();
    }

    format!("<a href=\"{}\" target=\"_blank\">{}</a>", trimmed, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_twitter_link() {
        let msg = "https://twitter.com/someone/status/123";
        assert_eq!(
            rewrite_social_link(msg),
            "<a href=\"https://twitter.com/someone/status/123\" target=\"_blank\">https://twitter.com/someone/status/123</a>"
        );
    }

    #[test]
    fn rewrites_mobile_and_x_hosts() {
        assert!(rewrite_social_link("https://mobile.twitter.com/a").starts_with("<a href="));
        assert!(rewrite_social_link("http://x.com/a/status/9").starts_with("<a href="));
    }

    #[test]
    fn host_match_is_case_insensitive() {
        assert!(rewrite_social_link("https://Twitter.com/a").starts_with("<a href="));
    }

    #[test]
    fn href_uses_trimmed_url_text_keeps_original() {
        let msg = "  https://twitter.com/a  ";
        let out = rewrite_social_link(msg);
        assert!(out.starts_with("<a href=\"https://twitter.com/a\""));
        assert!(out.ends_with(">  https://twitter.com/a  </a>"));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(rewrite_social_link("meet at the fountain"), "meet at the fountain");
    }

    #[test]
    fn leaves_unknown_hosts_alone() {
        let msg = "https://example.com/thing";
        assert_eq!(rewrite_social_link(msg), msg);
    }

    #[test]
    fn leaves_embedded_links_alone() {
        let msg = "look at https://twitter.com/a everyone";
        assert_eq!(rewrite_social_link(msg), msg);
    }

    #[test]
    fn bare_host_without_scheme_is_not_a_link() {
        assert_eq!(rewrite_social_link("twitter.com/a"), "twitter.com/a");
    }
}
