// Text normalization — the first stage of both analyses.
//
// URLs and @-mentions carry no authorship signal in themselves, but their
// *presence* does, so they are replaced with canonical placeholder tokens
// (URLHERE / MENTIONHERE) rather than deleted. Whitespace runs collapse to
// a single space so token boundaries are predictable.
//
// The two analyses want different treatments: the classifier keeps
// punctuation for the tokenizer and needs the placeholders; the similarity
// comparison works on concatenated bags of words where punctuation is just
// noise. One type, two constructors: each pipeline builds its own
// Normalizer once and passes it down, so there is no shared mutable state
// between the two analyses.

use regex_lite::Regex;

/// Configurable text normalizer. Construct via [`Normalizer::for_classification`]
/// or [`Normalizer::for_similarity`]; both lowercase their input.
pub struct Normalizer {
    replace_urls_and_mentions: bool,
    strip_punctuation: bool,
    whitespace: Regex,
    url: Regex,
    mention: Regex,
}

/// Placeholder substituted for every URL match.
pub const URL_TOKEN: &str = "URLHERE";

/// Placeholder substituted for every @-mention match.
pub const MENTION_TOKEN: &str = "MENTIONHERE";

impl Normalizer {
    fn new(replace_urls_and_mentions: bool, strip_punctuation: bool) -> Self {
        Self {
            replace_urls_and_mentions,
            strip_punctuation,
            whitespace: Regex::new(r"\s+").unwrap(),
            // Scheme plus a run of URL-safe characters: alphanumerics,
            // percent-escapes, and the punctuation legal inside URLs.
            url: Regex::new(r"http[s]?://(?:[a-zA-Z0-9$_@.&+!*(),/]|%[0-9a-fA-F]{2})+").unwrap(),
            mention: Regex::new(r"@[\w-]+").unwrap(),
        }
    }

    /// Normalizer for the authorship classifier: collapse whitespace,
    /// lowercase, substitute URL/mention placeholders. Punctuation is left
    /// for the tokenizer to handle.
    pub fn for_classification() -> Self {
        Self::new(true, false)
    }

    /// Normalizer for the group-similarity comparison: lowercase and strip
    /// punctuation. The bags of words being compared are concatenations of
    /// thousands of tweets, so per-token placeholders add nothing here.
    pub fn for_similarity() -> Self {
        Self::new(false, true)
    }

    /// Produce the cleaned string. Empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = self.whitespace.replace_all(text, " ").into_owned();
        out = out.to_lowercase();
        if self.replace_urls_and_mentions {
            // URLs first: a URL can contain '@', which the mention pattern
            // would otherwise mangle.
            out = self.url.replace_all(&out, URL_TOKEN).into_owned();
            out = self.mention.replace_all(&out, MENTION_TOKEN).into_owned();
        }
        if self.strip_punctuation {
            out.retain(|c| !c.is_ascii_punctuation());
        }
        out
    }
}
