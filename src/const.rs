pub const MATCH_SCORE: u8 = 2;
pub const MISMATCH_PENALTY: u8 = 2;

pub const INSERTION_OPEN_PENALTY: u8 = 3;
pub const INSERTION_EXTEND_PENALTY: u8 = 1;
pub const DELETION_OPEN_PENALTY: u8 = 3;
pub const DELETION_EXTEND_PENALTY: u8 = 1;

/// Must be at least [`MISMATCH_PENALTY`] so no profile entry is negative
pub const BIAS: u8 = 2;
