// Text preprocessing — normalization, tokenization, and readability
// diagnostics. Everything here is pure string-in, tokens-out; stop-word
// filtering happens later, at vectorization time.

pub mod normalize;
pub mod readability;
pub mod tokenize;
