use crate::alphabet::{ALPHABET_SIZE, Symbol};

/// Ambiguity codes and the bases they are compatible with. Note that `S` is treated as A or T.
const AMBIGUITY_CODES: [(Symbol, &[Symbol]); 9] = [
    (Symbol::K, &[Symbol::G, Symbol::T]),
    (Symbol::M, &[Symbol::A, Symbol::C]),
    (Symbol::R, &[Symbol::A, Symbol::G]),
    (Symbol::Y, &[Symbol::C, Symbol::T]),
    (Symbol::S, &[Symbol::A, Symbol::T]),
    (Symbol::B, &[Symbol::C, Symbol::G, Symbol::T]),
    (Symbol::V, &[Symbol::A, Symbol::C, Symbol::G]),
    (Symbol::H, &[Symbol::A, Symbol::C, Symbol::T]),
    (Symbol::D, &[Symbol::A, Symbol::G, Symbol::T]),
];

/// Symmetric match/mismatch weights over the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringMatrix {
    weights: [[i16; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl ScoringMatrix {
    pub fn new(match_score: u8, mismatch_penalty: u8) -> Self {
        let match_score = match_score as i16;
        let mismatch = -(mismatch_penalty as i16);

        let mut weights = [[mismatch; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (i, row) in weights.iter_mut().enumerate() {
            row[i] = match_score;
        }

        for (code, bases) in AMBIGUITY_CODES {
            for base in bases {
                weights[code.index()][base.index()] = match_score;
                weights[base.index()][code.index()] = match_score;
            }
        }

        Self { weights }
    }

    #[inline(always)]
    pub fn get(&self, a: Symbol, b: Symbol) -> i16 {
        self.weights[a.index()][b.index()]
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, a: usize, b: usize) -> i16 {
        self.weights[a][b]
    }
}
