// The two batch analyses, each a single forward pass: load, vectorize,
// compute, print.

pub mod classify;
pub mod compare;
