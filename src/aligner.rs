use crate::{
    Config, Scoring,
    alphabet::encode_sequence,
    error::{Result, SequenceKind},
    profile::QueryProfile,
    smith_waterman::{AlignmentEnds, GapPenalties, Scan, StripedEngine},
};

/// Holds the striped profile of one read, reusable across any number of references. Scans do
/// not mutate the aligner, so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct Aligner {
    profile: QueryProfile,
    scoring: Scoring,
    gaps: GapPenalties,
    engine: StripedEngine,
}

impl Aligner {
    pub fn new<S: AsRef<[u8]>>(query: S, config: &Config) -> Result<Self> {
        config.scoring.validate()?;
        let profile = QueryProfile::from_scoring(query.as_ref(), &config.scoring)?;
        let engine = StripedEngine::new(config.backend);

        log::debug!(
            "built profile for a {} base read ({} segments)",
            profile.query_len(),
            profile.segment_count()
        );

        Ok(Self {
            profile,
            scoring: config.scoring,
            gaps: GapPenalties::from(&config.scoring),
            engine,
        })
    }

    pub fn profile(&self) -> &QueryProfile {
        &self.profile
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn engine(&self) -> StripedEngine {
        self.engine
    }

    /// Best and secondary best alignment ends of the read against `reference`
    pub fn align<S: AsRef<[u8]>>(&self, reference: S) -> Result<AlignmentEnds> {
        self.scan(reference).map(|scan| scan.ends)
    }

    /// Like [`Aligner::align`], also returning the best score of every reference position
    pub fn scan<S: AsRef<[u8]>>(&self, reference: S) -> Result<Scan> {
        let reference = encode_sequence(reference.as_ref(), SequenceKind::Reference)?;
        self.engine.scan(&reference, &self.gaps, &self.profile)
    }
}

/// Aligns a single read against a single reference. Use [`Aligner`] to reuse the query profile.
pub fn align<S1: AsRef<[u8]>, S2: AsRef<[u8]>>(
    query: S1,
    reference: S2,
    config: &Config,
) -> Result<AlignmentEnds> {
    Aligner::new(query, config)?.align(reference)
}
