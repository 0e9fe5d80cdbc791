mod algorithm;

pub use algorithm::smith_waterman;
