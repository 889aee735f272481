/// Rendering side of the segmented progress bar.
///
/// Implementations only draw what they are told; they hold no playback state.
pub trait ProgressIndicator {
    /// Discard existing segments and build `segment_count` empty ones.
    fn rebuild(&mut self, segment_count: usize);

    /// Set one segment's fill, `0.0..=100.0`.
    fn set_fill(&mut self, segment: usize, percent: f64);

    /// Remove all segments.
    fn clear(&mut self);
}

/// Plain list of segment fills. Backs the UI view model and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentFills {
    fills: Vec<f64>,
}

impl SegmentFills {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fills(&self) -> &[f64] {
        &self.fills
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

impl ProgressIndicator for SegmentFills {
    fn rebuild(&mut self, segment_count: usize) {
        self.fills = vec![0.0; segment_count];
    }

    fn set_fill(&mut self, segment: usize, percent: f64) {
        if let Some(fill) = self.fills.get_mut(segment) {
            *fill = percent;
        }
    }

    fn clear(&mut self) {
        self.fills.clear();
    }
}

/// Computes segment fills for the active user and pushes them to an indicator.
///
/// Every update rewrites all segments, so skipped items never leave a
/// segment half-filled.
#[derive(Debug, Clone, Default)]
pub struct ProgressAdapter<P> {
    indicator: P,
    segment_count: usize,
}

impl<P: ProgressIndicator> ProgressAdapter<P> {
    #[must_use]
    pub fn new(indicator: P) -> Self {
        Self {
            indicator,
            segment_count: 0,
        }
    }

    pub fn reset(&mut self, segment_count: usize) {
        self.segment_count = segment_count;
        self.indicator.rebuild(segment_count);
    }

    /// Segments before `active_index` are full, the active one shows
    /// `percent`, later ones are empty.
    pub fn update(&mut self, active_index: usize, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        for segment in 0..self.segment_count {
            let fill = match segment.cmp(&active_index) {
                std::cmp::Ordering::Less => 100.0,
                std::cmp::Ordering::Equal => percent,
                std::cmp::Ordering::Greater => 0.0,
            };
            self.indicator.set_fill(segment, fill);
        }
    }

    pub fn clear(&mut self) {
        self.segment_count = 0;
        self.indicator.clear();
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    #[must_use]
    pub fn indicator(&self) -> &P {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_fills_before_and_empties_after() {
        let mut progress = ProgressAdapter::new(SegmentFills::new());
        progress.reset(4);
        progress.update(2, 37.5);
        assert_eq!(progress.indicator().fills(), &[100.0, 100.0, 37.5, 0.0]);
    }

    #[test]
    fn update_after_skip_rewrites_every_segment() {
        let mut progress = ProgressAdapter::new(SegmentFills::new());
        progress.reset(3);
        progress.update(2, 80.0);
        progress.update(0, 10.0);
        assert_eq!(progress.indicator().fills(), &[10.0, 0.0, 0.0]);
    }

    #[test]
    fn update_clamps_percent() {
        let mut progress = ProgressAdapter::new(SegmentFills::new());
        progress.reset(2);
        progress.update(1, 140.0);
        assert_eq!(progress.indicator().fills(), &[100.0, 100.0]);
    }

    #[test]
    fn reset_discards_previous_segments() {
        let mut progress = ProgressAdapter::new(SegmentFills::new());
        progress.reset(3);
        progress.update(1, 50.0);
        progress.reset(1);
        assert_eq!(progress.indicator().fills(), &[0.0]);

        progress.clear();
        assert!(progress.indicator().is_empty());
        assert_eq!(progress.segment_count(), 0);
    }
}
