// Rhetoric: authorship classification and corpus similarity for
// political short-form text.
//
// This is the library root. Each module corresponds to a stage of the
// two batch analyses: load a corpus, turn text into TF-IDF vectors,
// then either classify authorship or compare groups pairwise.

pub mod classify;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;
pub mod vectorize;
