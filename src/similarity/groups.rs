// The six speech groups and the rules that route raw records into them.
//
// For the similarity comparison, document identity is deliberately
// discarded: every text routed to a group is concatenated into one big
// bag of words, and the six bags become the six "documents" the
// vectorizer sees.

use crate::corpus::loader::{PressReleaseRecord, StreamTweetRecord};

/// Screen name routing Bernie's own tweets; everything else unfollowed in
/// the stream capture is Trump's.
const BERNIE_SCREEN_NAME: &str = "BernieSanders";
const TRUMP_LUMINARY: &str = "realDonaldTrump";
const BERNIE_LUMINARY: &str = "BernieSanders";

/// The six corpora compared pairwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechGroup {
    TrumpPress,
    BerniePress,
    TrumpTweets,
    BernieTweets,
    TrumpFollowerTweets,
    BernieFollowerTweets,
}

pub const GROUP_COUNT: usize = 6;

/// Every group, in matrix-index order.
pub const ALL_GROUPS: [SpeechGroup; GROUP_COUNT] = [
    SpeechGroup::TrumpPress,
    SpeechGroup::BerniePress,
    SpeechGroup::TrumpTweets,
    SpeechGroup::BernieTweets,
    SpeechGroup::TrumpFollowerTweets,
    SpeechGroup::BernieFollowerTweets,
];

impl SpeechGroup {
    /// Row/column index of this group in the similarity matrix.
    pub fn index(self) -> usize {
        match self {
            SpeechGroup::TrumpPress => 0,
            SpeechGroup::BerniePress => 1,
            SpeechGroup::TrumpTweets => 2,
            SpeechGroup::BernieTweets => 3,
            SpeechGroup::TrumpFollowerTweets => 4,
            SpeechGroup::BernieFollowerTweets => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeechGroup::TrumpPress => "Trump press releases",
            SpeechGroup::BerniePress => "Bernie press releases",
            SpeechGroup::TrumpTweets => "Trump tweets",
            SpeechGroup::BernieTweets => "Bernie tweets",
            SpeechGroup::TrumpFollowerTweets => "Trump follower tweets",
            SpeechGroup::BernieFollowerTweets => "Bernie follower tweets",
        }
    }
}

/// The seven named comparisons printed by the report, in display order.
pub const COMPARISONS: [(SpeechGroup, SpeechGroup, &str); 7] = [
    (
        SpeechGroup::TrumpPress,
        SpeechGroup::BerniePress,
        "Trump vs Bernie press releases",
    ),
    (
        SpeechGroup::TrumpTweets,
        SpeechGroup::BernieTweets,
        "Trump vs Bernie tweets",
    ),
    (
        SpeechGroup::TrumpPress,
        SpeechGroup::TrumpTweets,
        "Trump press releases vs his tweets",
    ),
    (
        SpeechGroup::BerniePress,
        SpeechGroup::BernieTweets,
        "Bernie press releases vs his tweets",
    ),
    (
        SpeechGroup::TrumpFollowerTweets,
        SpeechGroup::BernieFollowerTweets,
        "Trump vs Bernie followers' tweets",
    ),
    (
        SpeechGroup::TrumpTweets,
        SpeechGroup::TrumpFollowerTweets,
        "Trump tweets vs his followers' tweets",
    ),
    (
        SpeechGroup::BernieTweets,
        SpeechGroup::BernieFollowerTweets,
        "Bernie tweets vs his followers' tweets",
    ),
];

/// Six bags of words, one per group, each a single concatenated string.
pub struct GroupedCorpus {
    bags: [String; GROUP_COUNT],
    /// Stream tweets skipped for naming a luminary outside the analysis.
    pub unknown_luminary_count: usize,
}

impl GroupedCorpus {
    pub fn new() -> Self {
        Self {
            bags: Default::default(),
            unknown_luminary_count: 0,
        }
    }

    fn append(&mut self, group: SpeechGroup, text: &str) {
        let bag = &mut self.bags[group.index()];
        if !bag.is_empty() {
            bag.push(' ');
        }
        bag.push_str(text);
    }

    /// Route a press release by its author field: Trump's go to the Trump
    /// bag, everything else is Bernie's.
    pub fn add_press_release(&mut self, record: &PressReleaseRecord) {
        if record.author == "Trump" {
            self.append(SpeechGroup::TrumpPress, &record.text);
        } else {
            self.append(SpeechGroup::BerniePress, &record.text);
        }
    }

    /// Route a stream tweet:
    /// - no luminary tag: it is one of the figures' own tweets, attributed
    ///   by screen name (Bernie's handle, else Trump);
    /// - a known luminary tag: it belongs to that luminary's follower
    ///   group regardless of who wrote it;
    /// - an unknown luminary tag: skipped, counted.
    pub fn add_stream_tweet(&mut self, record: &StreamTweetRecord) {
        match record.luminary_followed.as_deref() {
            None => {
                if record.user.screen_name == BERNIE_SCREEN_NAME {
                    self.append(SpeechGroup::BernieTweets, &record.text);
                } else {
                    self.append(SpeechGroup::TrumpTweets, &record.text);
                }
            }
            Some(TRUMP_LUMINARY) => self.append(SpeechGroup::TrumpFollowerTweets, &record.text),
            Some(BERNIE_LUMINARY) => self.append(SpeechGroup::BernieFollowerTweets, &record.text),
            Some(_) => self.unknown_luminary_count += 1,
        }
    }

    pub fn bag(&self, group: SpeechGroup) -> &str {
        &self.bags[group.index()]
    }

    /// The six bags in matrix-index order.
    pub fn bags(&self) -> &[String; GROUP_COUNT] {
        &self.bags
    }

    /// Groups whose bag ended up with no text at all.
    pub fn empty_groups(&self) -> Vec<SpeechGroup> {
        ALL_GROUPS
            .into_iter()
            .filter(|g| self.bags[g.index()].is_empty())
            .collect()
    }
}

impl Default for GroupedCorpus {
    fn default() -> Self {
        Self::new()
    }
}
