//! The 15 symbol nucleotide alphabet: the four bases, the IUPAC two and three base ambiguity
//! codes, `N` and `X` (masked).

use crate::error::{AlignError, Result, SequenceKind};

pub const ALPHABET_SIZE: usize = 15;

const INVALID: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    /// G or T
    K = 4,
    /// A or C
    M = 5,
    /// A or G
    R = 6,
    /// C or T
    Y = 7,
    /// A or T
    S = 8,
    /// C, G or T
    B = 9,
    /// A, C or G
    V = 10,
    /// A, C or T
    H = 11,
    /// A, G or T
    D = 12,
    /// Any base
    N = 13,
    /// Any base, masked
    X = 14,
}

impl Symbol {
    pub const ALL: [Symbol; ALPHABET_SIZE] = [
        Symbol::A,
        Symbol::C,
        Symbol::G,
        Symbol::T,
        Symbol::K,
        Symbol::M,
        Symbol::R,
        Symbol::Y,
        Symbol::S,
        Symbol::B,
        Symbol::V,
        Symbol::H,
        Symbol::D,
        Symbol::N,
        Symbol::X,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Uppercase character for the symbol
    pub fn to_char(self) -> char {
        b"ACGTKMRYSBVHDNX"[self.index()] as char
    }
}

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let upper = b"ACGTKMRYSBVHDNX";
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[upper[i] as usize] = i as u8;
        table[upper[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

static LOOKUP: [u8; 256] = build_lookup();

/// Maps a byte to its symbol, case-insensitively. Returns `None` for anything outside the
/// alphabet.
#[inline(always)]
pub fn encode(byte: u8) -> Option<Symbol> {
    match LOOKUP[byte as usize] {
        INVALID => None,
        index => Some(Symbol::ALL[index as usize]),
    }
}

/// Encodes a whole sequence into symbol indices, failing on the first byte outside the
/// alphabet
pub fn encode_sequence(sequence: &[u8], kind: SequenceKind) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    encoded.try_reserve_exact(sequence.len())?;
    for (position, &byte) in sequence.iter().enumerate() {
        match LOOKUP[byte as usize] {
            INVALID => {
                return Err(AlignError::InvalidSymbol {
                    symbol: byte as char,
                    position,
                    sequence: kind,
                });
            }
            index => encoded.push(index),
        }
    }
    Ok(encoded)
}
