#[cfg(all(feature = "simd", target_arch = "aarch64"))]
use crate::simd::NEONVector;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use crate::simd::SSEVector;
use crate::{
    Backend,
    error::Result,
    profile::QueryProfile,
    simd::{PortableVector, Vector},
};

use super::{GapPenalties, ends::Scan};

mod algo;
mod gaps;

use algo::striped_smith_waterman;

/// Striped engine picked once per [`Backend`], either the widest native vector unit the CPU
/// reports or the portable fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripedEngine {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    SSE2(StripedEngineSSE2),
    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    NEON(StripedEngineNEON),
    Portable(StripedEnginePortable),
}

impl StripedEngine {
    pub fn new(backend: Backend) -> Self {
        let engine = match backend {
            Backend::Native => Self::native(),
            Backend::Portable => Self::Portable(StripedEnginePortable),
        };
        log::debug!("using the {} striped engine", engine.name());
        engine
    }

    fn native() -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            if StripedEngineSSE2::is_available() {
                return Self::SSE2(StripedEngineSSE2);
            }
        }
        #[cfg(all(feature = "simd", target_arch = "aarch64"))]
        {
            if StripedEngineNEON::is_available() {
                return Self::NEON(StripedEngineNEON);
            }
        }
        Self::Portable(StripedEnginePortable)
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::SSE2(_) => "sse2",
            #[cfg(all(feature = "simd", target_arch = "aarch64"))]
            Self::NEON(_) => "neon",
            Self::Portable(_) => "portable",
        }
    }

    /// Scores an encoded reference against the profile
    pub fn scan(
        &self,
        reference: &[u8],
        gaps: &GapPenalties,
        profile: &QueryProfile,
    ) -> Result<Scan> {
        match self {
            // Only constructed after the availability check
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::SSE2(engine) => unsafe { engine.scan(reference, gaps, profile) },
            #[cfg(all(feature = "simd", target_arch = "aarch64"))]
            Self::NEON(engine) => unsafe { engine.scan(reference, gaps, profile) },
            Self::Portable(engine) => engine.scan(reference, gaps, profile),
        }
    }
}

macro_rules! define_engine {
    ($name:ident, vector = $vector:ty, target_feature = $feature:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $name {
            pub fn is_available() -> bool {
                <$vector>::is_available()
            }

            #[doc = concat!(
                "Scores an encoded reference against the profile\n\n",
                "# Safety\n\n",
                "Caller must ensure that the target feature `", $feature, "` is available"
            )]
            #[target_feature(enable = $feature)]
            pub unsafe fn scan(
                &self,
                reference: &[u8],
                gaps: &GapPenalties,
                profile: &QueryProfile,
            ) -> Result<Scan> {
                unsafe { striped_smith_waterman::<$vector>(reference, gaps, profile) }
            }
        }
    };
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
define_engine!(StripedEngineSSE2, vector = SSEVector, target_feature = "sse2");

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
define_engine!(StripedEngineNEON, vector = NEONVector, target_feature = "neon");

/// Fallback for CPUs without a native implementation and for builds without the `simd` feature.
/// Produces identical results to the native engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripedEnginePortable;

impl StripedEnginePortable {
    pub fn is_available() -> bool {
        PortableVector::is_available()
    }

    pub fn scan(
        &self,
        reference: &[u8],
        gaps: &GapPenalties,
        profile: &QueryProfile,
    ) -> Result<Scan> {
        scan_portable(reference, gaps, profile)
    }
}

#[multiversion::multiversion(targets = "simd")]
fn scan_portable(reference: &[u8], gaps: &GapPenalties, profile: &QueryProfile) -> Result<Scan> {
    // The portable vector runs on any CPU
    unsafe { striped_smith_waterman::<PortableVector>(reference, gaps, profile) }
}
