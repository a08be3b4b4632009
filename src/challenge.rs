//! Classification of a fetched page as real content or a bot-protection
//! interstitial. Pure function of the three inputs; the orchestrator owns
//! what happens next.

/// Interstitial placeholder titles. Matched as lowercase substrings.
const TITLE_MARKERS: &[&str] = &[
    "just a moment",
    "please wait",
    "attention required",
    "access denied",
    "security check",
    "verification required",
];

/// Challenge-path fragments seen in redirect URLs.
const URL_MARKERS: &[&str] = &["/challenge", "cdn-cgi/challenge", "__cf_chl", "captcha"];

/// Protection-vendor strings that show up in interstitial bodies.
const BODY_MARKERS: &[&str] = &[
    "cf-challenge",
    "cf-turnstile",
    "verify you are human",
    "verifying you are human",
    "enable javascript and cookies to continue",
    "px-captcha",
    "datadome",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Clear,
    Challenged,
}

/// A page is `Challenged` if its title, URL or body carries any known
/// marker. False negatives surface downstream as a missing count and take
/// the same fallback path.
pub fn classify(page_title: &str, page_url: &str, page_source: &str) -> Classification {
    let title = page_title.to_lowercase();
    if TITLE_MARKERS.iter().any(|m| title.contains(m)) {
        return Classification::Challenged;
    }

    let url = page_url.to_lowercase();
    if URL_MARKERS.iter().any(|m| url.contains(m)) {
        return Classification::Challenged;
    }

    let body = page_source.to_lowercase();
    if BODY_MARKERS.iter().any(|m| body.contains(m)) {
        return Classification::Challenged;
    }

    Classification::Clear
}
