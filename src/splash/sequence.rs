use gloo_timers::callback::Timeout;

/// Stages of the intro sequence, in the order they run. The sequence is
/// strictly linear: `Entry` waits for user activation, everything after is
/// time-driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Entry,
    Moving,
    Revealed,
    FadeOut,
}

impl Stage {
    /// Class name the styling keys off.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Entry => "entry",
            Stage::Moving => "moving",
            Stage::Revealed => "revealed",
            Stage::FadeOut => "fadeOut",
        }
    }
}

/// Automatic stage changes as absolute offsets from the activation instant.
/// `Moving` is entered at offset zero by the activation handler itself.
pub const STAGE_CHANGES_MS: [(u32, Stage); 2] = [(1000, Stage::Revealed), (2800, Stage::FadeOut)];

/// Offset at which the completion callback fires.
pub const FINISH_AT_MS: u32 = 5000;

/// Offset at which the parent is expected to unmount the component. The
/// gap after `FINISH_AT_MS` covers the final fade while the caller prepares
/// the page underneath.
pub const REMOVE_AT_MS: u32 = 6000;

/// Stage the sequence is in `elapsed_ms` after activation.
pub fn stage_at(elapsed_ms: u32) -> Stage {
    let mut stage = Stage::Moving;
    for (offset, next) in STAGE_CHANGES_MS {
        if elapsed_ms >= offset {
            stage = next;
        }
    }
    stage
}

/// The scheduled remainder of the sequence. All timeouts are set together
/// against one activation instant; dropping the value cancels every pending
/// one, so a torn-down splash can never advance stages or signal completion
/// afterwards.
pub struct StageTimers {
    timers: Vec<Timeout>,
}

impl StageTimers {
    pub fn schedule(
        on_stage: impl Fn(Stage) + Clone + 'static,
        on_finish: impl FnOnce() + 'static,
    ) -> Self {
        let mut timers = Vec::with_capacity(STAGE_CHANGES_MS.len() + 1);
        for (offset, next) in STAGE_CHANGES_MS {
            let advance = on_stage.clone();
            timers.push(Timeout::new(offset, move || advance(next)));
        }
        timers.push(Timeout::new(FINISH_AT_MS, on_finish));
        Self { timers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_runs_until_the_reveal_offset() {
        assert_eq!(stage_at(0), Stage::Moving);
        assert_eq!(stage_at(999), Stage::Moving);
    }

    #[test]
    fn revealed_spans_its_window() {
        assert_eq!(stage_at(1000), Stage::Revealed);
        assert_eq!(stage_at(2799), Stage::Revealed);
    }

    #[test]
    fn fade_out_is_terminal() {
        assert_eq!(stage_at(2800), Stage::FadeOut);
        assert_eq!(stage_at(FINISH_AT_MS), Stage::FadeOut);
        assert_eq!(stage_at(REMOVE_AT_MS), Stage::FadeOut);
        assert_eq!(stage_at(u32::MAX), Stage::FadeOut);
    }

    #[test]
    fn offsets_are_ordered_and_finish_before_removal() {
        let mut previous = 0;
        for (offset, _) in STAGE_CHANGES_MS {
            assert!(offset > previous);
            previous = offset;
        }
        assert!(previous < FINISH_AT_MS);
        assert!(FINISH_AT_MS < REMOVE_AT_MS);
    }

    #[test]
    fn stage_class_names() {
        assert_eq!(Stage::Entry.as_str(), "entry");
        assert_eq!(Stage::Moving.as_str(), "moving");
        assert_eq!(Stage::Revealed.as_str(), "revealed");
        assert_eq!(Stage::FadeOut.as_str(), "fadeOut");
    }
}
