//! Extrusion parameters.

/// Parameters controlling bitmap extrusion.
///
/// The defaults reproduce the production relief pipeline. The fields exist
/// as named knobs so each policy stays testable in isolation, not as an
/// advertised tuning surface.
///
/// # Example
///
/// ```
/// use relief_extrude::ExtrudeParams;
///
/// let params = ExtrudeParams::default().threshold(200);
/// assert_eq!(params.threshold, 200);
/// assert_eq!(params.max_samples, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudeParams {
    /// Intensity above which a sample counts as raised. The comparison is
    /// strict, so a sample equal to the threshold stays flat.
    pub threshold: u8,

    /// Cap on sampled positions across the image width. The sampling
    /// stride is `max(1, width / max_samples)` with integer division and
    /// applies to both axes.
    pub max_samples: u32,

    /// Half-extent of an emitted block as a multiple of the pixel
    /// footprint. The default 0.8 exceeds half the sample spacing, so
    /// neighboring blocks overlap into a connected solid.
    pub block_scale: f64,

    /// Block extrusion height as a fraction of the target depth.
    pub relief_scale: f64,

    /// Elevation of the block underside as a fraction of the target depth.
    pub base_scale: f64,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            threshold: 128,
            max_samples: 100,
            block_scale: 0.8,
            relief_scale: 0.3,
            base_scale: 0.5,
        }
    }
}

impl ExtrudeParams {
    /// Set the raised-sample threshold.
    #[must_use]
    pub const fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the sampled-position cap across the image width.
    #[must_use]
    pub const fn max_samples(mut self, max_samples: u32) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Set the block half-extent multiplier.
    #[must_use]
    pub const fn block_scale(mut self, block_scale: f64) -> Self {
        self.block_scale = block_scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_pipeline() {
        let params = ExtrudeParams::default();
        assert_eq!(params.threshold, 128);
        assert_eq!(params.max_samples, 100);
        assert!((params.block_scale - 0.8).abs() < f64::EPSILON);
        assert!((params.relief_scale - 0.3).abs() < f64::EPSILON);
        assert!((params.base_scale - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chains() {
        let params = ExtrudeParams::default()
            .threshold(64)
            .max_samples(50)
            .block_scale(0.5);
        assert_eq!(params.threshold, 64);
        assert_eq!(params.max_samples, 50);
        assert!((params.block_scale - 0.5).abs() < f64::EPSILON);
        assert!((params.relief_scale - 0.3).abs() < f64::EPSILON);
    }
}
