// Group similarity — six concatenated bags of words compared pairwise
// by cosine similarity of their TF-IDF vectors.

pub mod groups;
pub mod matrix;
