// Composition tests — verifying that the stages chain together the way
// the pipelines use them:
//   Normalizer -> Tokenizer -> TF-IDF -> split -> Bernoulli NB -> metrics
//   Normalizer -> grouping -> TF-IDF -> similarity matrix
// No filesystem or terminal side effects; everything runs on in-memory
// corpora.

use rhetoric::classify::bernoulli::BernoulliNb;
use rhetoric::classify::metrics::{f1_score, prediction_error, roc_curve};
use rhetoric::classify::split::train_test_split;
use rhetoric::corpus::document::{partition_by_role, AuthorRole, Document};
use rhetoric::corpus::loader::{PressReleaseRecord, StreamTweetRecord, StreamTweetUser};
use rhetoric::similarity::groups::{GroupedCorpus, SpeechGroup};
use rhetoric::similarity::matrix::SimilarityMatrix;
use rhetoric::text::normalize::Normalizer;
use rhetoric::text::tokenize::{StemmingTokenizer, StopWords, WordTokenizer};
use rhetoric::vectorize::tfidf::{TfidfConfig, TfidfVectorizer};

fn doc(text: &str, role: AuthorRole) -> Document {
    Document {
        text: text.to_string(),
        role,
    }
}

/// A small but separable corpus: one side talks about walls and trade,
/// the other about healthcare and billionaires.
fn labeled_corpus() -> Vec<Document> {
    let trump_lines = [
        "We will build a great wall on the southern border believe me",
        "Our trade deals are a total disaster we lose billions",
        "The fake news media will not tell you about our tremendous jobs numbers",
        "We are going to win so much you will get tired of winning",
        "Crooked politicians have destroyed our great country for decades",
        "My administration will put America first every single day",
        "The wall just got ten feet higher and Mexico will pay",
        "Our military will be so strong nobody will mess with us",
    ];
    let bernie_lines = [
        "The billionaire class cannot have it all we need a political revolution",
        "Healthcare is a human right not a privilege for the wealthy few",
        "We must raise the minimum wage to a living wage for working families",
        "Climate change is the single greatest threat facing our planet",
        "Corporate greed and recklessness wrecked our economy",
        "Every American deserves tuition free public college education",
        "The top one percent owns more wealth than the bottom ninety percent",
        "We need campaign finance reform to get big money out of politics",
    ];
    let trump_follower_lines = [
        "Build the wall and make america great again",
        "So tired of the fake news media lying about our president",
    ];
    let bernie_follower_lines = [
        "Medicare for all would save working families thousands",
        "Feel the bern the political revolution is here",
    ];

    let mut docs = Vec::new();
    for line in trump_lines {
        docs.push(doc(line, AuthorRole::Trump));
    }
    for line in bernie_lines {
        docs.push(doc(line, AuthorRole::Bernie));
    }
    for line in trump_follower_lines {
        docs.push(doc(line, AuthorRole::TrumpFollower));
    }
    for line in bernie_follower_lines {
        docs.push(doc(line, AuthorRole::BernieFollower));
    }
    docs
}

// ============================================================
// Chain: normalize -> vectorize -> split -> train -> evaluate
// ============================================================

#[test]
fn classifier_chain_runs_end_to_end() {
    let (primary, followers) = partition_by_role(labeled_corpus());
    assert_eq!(primary.len(), 16);
    assert_eq!(followers.len(), 4);

    let normalizer = Normalizer::for_classification();
    let texts: Vec<String> = primary.iter().map(|d| normalizer.normalize(&d.text)).collect();
    let labels: Vec<u8> = primary.iter().map(|d| d.role.binary_label()).collect();

    let config = TfidfConfig::new(
        Box::new(WordTokenizer),
        StopWords::english_with_twitter_exclusions(),
    )
    .with_ngram_range(1, 2);
    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(config, &texts).unwrap();
    assert!(vectorizer.vocabulary_len() > 0);

    let split = train_test_split(&vectors, &labels, 0.25, 42).unwrap();
    let model = BernoulliNb::train(
        &split.train_x,
        &split.train_y,
        vectorizer.vocabulary_len(),
        1.0,
    )
    .unwrap();

    // Probabilities stay in range on both partitions.
    for p in model
        .predict_proba(&split.test_x)
        .into_iter()
        .chain(model.predict_proba(&split.train_x))
    {
        assert!((0.0..=1.0).contains(&p));
    }

    // The model fits its own separable training data nearly perfectly.
    let train_pred = model.predict(&split.train_x);
    let train_errors = prediction_error(&split.train_y, &train_pred);
    assert!(train_errors <= 1, "got {train_errors} training errors");

    // Transfer: follower text vectorized against the frozen vocabulary.
    let follower_texts: Vec<String> = followers
        .iter()
        .map(|d| normalizer.normalize(&d.text))
        .collect();
    let follower_labels: Vec<u8> = followers.iter().map(|d| d.role.binary_label()).collect();
    let follower_vectors = vectorizer.transform(&follower_texts);
    assert_eq!(follower_vectors.len(), 4);

    let follower_pred = model.predict(&follower_vectors);
    let f1 = f1_score(&follower_labels, &follower_pred);
    assert!((0.0..=1.0).contains(&f1));

    let follower_proba = model.predict_proba(&follower_vectors);
    let curve = roc_curve(&follower_labels, &follower_proba).unwrap();
    let first = curve.points.first().unwrap();
    let last = curve.points.last().unwrap();
    assert_eq!((first.fpr, first.tpr), (0.0, 0.0));
    assert_eq!((last.fpr, last.tpr), (1.0, 1.0));
}

#[test]
fn whole_classifier_chain_is_deterministic() {
    let run = || {
        let (primary, _) = partition_by_role(labeled_corpus());
        let normalizer = Normalizer::for_classification();
        let texts: Vec<String> = primary.iter().map(|d| normalizer.normalize(&d.text)).collect();
        let labels: Vec<u8> = primary.iter().map(|d| d.role.binary_label()).collect();
        let config = TfidfConfig::new(
            Box::new(WordTokenizer),
            StopWords::english_with_twitter_exclusions(),
        )
        .with_ngram_range(1, 2);
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(config, &texts).unwrap();
        let split = train_test_split(&vectors, &labels, 0.25, 42).unwrap();
        let model = BernoulliNb::train(
            &split.train_x,
            &split.train_y,
            vectorizer.vocabulary_len(),
            1.0,
        )
        .unwrap();
        model.predict_proba(&split.test_x)
    };
    assert_eq!(run(), run());
}

// ============================================================
// Chain: grouping -> normalize -> vectorize -> similarity
// ============================================================

#[test]
fn similarity_chain_runs_end_to_end() {
    let mut corpus = GroupedCorpus::new();
    corpus.add_press_release(&PressReleaseRecord {
        author: "Trump".into(),
        text: "We will secure the border and renegotiate terrible trade deals.".into(),
    });
    corpus.add_press_release(&PressReleaseRecord {
        author: "Bernie".into(),
        text: "We will guarantee healthcare and tax the billionaire class.".into(),
    });

    let own = |name: &str, text: &str| StreamTweetRecord {
        luminary_followed: None,
        user: StreamTweetUser {
            screen_name: name.into(),
        },
        text: text.into(),
    };
    let follower = |luminary: &str, text: &str| StreamTweetRecord {
        luminary_followed: Some(luminary.into()),
        user: StreamTweetUser {
            screen_name: "someone".into(),
        },
        text: text.into(),
    };

    corpus.add_stream_tweet(&own(
        "realDonaldTrump",
        "The border wall is coming, trade wins daily!",
    ));
    corpus.add_stream_tweet(&own(
        "BernieSanders",
        "Healthcare is a right. Tax the billionaires.",
    ));
    corpus.add_stream_tweet(&follower("realDonaldTrump", "Secure the border, fix trade!"));
    corpus.add_stream_tweet(&follower("BernieSanders", "Billionaires must pay for healthcare."));

    assert!(corpus.empty_groups().is_empty());

    let normalizer = Normalizer::for_similarity();
    let bags: Vec<String> = corpus.bags().iter().map(|b| normalizer.normalize(b)).collect();

    let config = TfidfConfig::new(Box::new(StemmingTokenizer::new()), StopWords::english());
    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(config, &bags).unwrap();
    assert!(vectorizer.vocabulary_len() > 0);
    assert_eq!(vectors.len(), 6);

    let matrix = SimilarityMatrix::from_vectors(&vectors).unwrap();

    // Symmetry across the whole matrix, unit diagonal for nonempty bags.
    for i in 0..6 {
        for j in 0..6 {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
        assert!((matrix.get(i, i) - 1.0).abs() < 1e-12);
    }

    // Same-side corpora share vocabulary; cross-side pairs share less.
    let trump_press = SpeechGroup::TrumpPress.index();
    let trump_tweets = SpeechGroup::TrumpTweets.index();
    let bernie_tweets = SpeechGroup::BernieTweets.index();
    let bernie_followers = SpeechGroup::BernieFollowerTweets.index();

    assert!(matrix.get(trump_press, trump_tweets) > matrix.get(trump_press, bernie_tweets));
    assert!(matrix.get(bernie_tweets, bernie_followers) > matrix.get(bernie_tweets, trump_tweets));
}

#[test]
fn degenerate_group_is_detectable_before_comparison() {
    // A bag that reduces entirely to stop words vectorizes to zero; the
    // matrix reports 0 self-similarity, which is the signal the pipeline
    // turns into a hard failure.
    let texts = vec![
        "border wall trade".to_string(),
        "the of and is".to_string(),
    ];
    let config = TfidfConfig::new(Box::new(WordTokenizer), StopWords::english());
    let (_, vectors) = TfidfVectorizer::fit_transform(config, &texts).unwrap();
    assert!(vectors[1].is_zero());

    let matrix = SimilarityMatrix::from_vectors(&vectors).unwrap();
    assert_eq!(matrix.get(1, 1), 0.0);
    assert_eq!(matrix.get(0, 1), 0.0);
}
