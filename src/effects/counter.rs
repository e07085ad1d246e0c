use crate::config;

/// One running counter interpolation: a linear ramp from 0 to `target`,
/// advanced by the caller once per tick. The formatting mode is decided once
/// at construction from the target value and never changes mid-animation.
///
/// This holds no timer and touches no DOM, so the ramp and its formatting
/// can be exercised directly; the `StatCounter` component owns the interval
/// that drives it in the browser.
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
    one_decimal: bool,
    finished: bool,
}

impl CounterAnimation {
    /// Builds a ramp that converges on `target` after roughly
    /// `duration_ms / 16` ticks.
    ///
    /// A zero or negative target would never satisfy the `current >= target`
    /// check with a zero increment, so those start out already finished and
    /// the caller should render once and skip scheduling a timer.
    pub fn new(target: f64, duration_ms: u32) -> Self {
        let one_decimal = target.fract() != 0.0;
        if target <= 0.0 {
            return Self {
                current: target,
                target,
                increment: 0.0,
                one_decimal,
                finished: true,
            };
        }
        let ticks = f64::from(duration_ms) / f64::from(config::COUNTER_TICK_MS);
        Self {
            current: 0.0,
            target,
            increment: target / ticks,
            one_decimal,
            finished: false,
        }
    }

    /// Advances one step. On the step where the ramp reaches the target the
    /// value is clamped so the final render is exact; every later call is a
    /// no-op. Returns whether the animation is finished.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return true;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
        self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Formats the current value: targets with a fractional part always show
    /// one decimal place, integral targets show the floored integer.
    pub fn display(&self) -> String {
        if self.one_decimal {
            format!("{:.1}", self.current)
        } else {
            format!("{}", self.current.floor() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(animation: &mut CounterAnimation) -> Vec<String> {
        let mut frames = Vec::new();
        loop {
            let done = animation.tick();
            frames.push(animation.display());
            if done {
                break;
            }
        }
        frames
    }

    #[test]
    fn converges_exactly_on_target() {
        let mut animation = CounterAnimation::new(250.0, 2000);
        let mut ticks = 0;
        while !animation.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "animation failed to converge");
        }
        assert_eq!(animation.display(), "250");
    }

    #[test]
    fn ticks_after_completion_are_noops() {
        let mut animation = CounterAnimation::new(10.0, 100);
        while !animation.tick() {}
        let settled = animation.display();
        assert!(animation.tick());
        assert!(animation.tick());
        assert_eq!(animation.display(), settled);
    }

    #[test]
    fn integral_targets_never_show_a_decimal_point() {
        let mut animation = CounterAnimation::new(42.0, 2000);
        loop {
            let done = animation.tick();
            assert!(
                !animation.display().contains('.'),
                "intermediate value {} has a decimal point",
                animation.display()
            );
            if done {
                break;
            }
        }
        assert_eq!(animation.display(), "42");
    }

    #[test]
    fn fractional_targets_always_show_one_decimal_place() {
        let mut animation = CounterAnimation::new(42.5, 2000);
        loop {
            let done = animation.tick();
            let value = animation.display();
            let (_, decimals) = value.split_once('.').expect("missing decimal point");
            assert_eq!(decimals.len(), 1, "unexpected precision in {value}");
            if done {
                break;
            }
        }
        assert_eq!(animation.display(), "42.5");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0.0, 2000);
        assert!(animation.is_finished());
        assert_eq!(animation.display(), "0");
        assert!(animation.tick());
        assert_eq!(animation.display(), "0");
    }

    #[test]
    fn negative_target_finishes_immediately() {
        let animation = CounterAnimation::new(-3.0, 2000);
        assert!(animation.is_finished());
        assert_eq!(animation.display(), "-3");
    }

    #[test]
    fn interleaved_animations_are_independent() {
        let mut fast = CounterAnimation::new(10.0, 320);
        let mut slow = CounterAnimation::new(1000.0, 2000);
        let mut slow_ticks_after_fast_finished = 0;

        for _ in 0..200 {
            fast.tick();
            let before = slow.display();
            slow.tick();
            if fast.is_finished() && !slow.is_finished() {
                assert_ne!(before, slow.display(), "slow counter stalled");
                slow_ticks_after_fast_finished += 1;
            }
        }
        assert!(slow_ticks_after_fast_finished > 0);
        while !slow.tick() {}
        assert_eq!(slow.display(), "1000");
        assert_eq!(fast.display(), "10");
    }

    #[test]
    fn frames_are_monotonically_nondecreasing() {
        let mut animation = CounterAnimation::new(100.0, 320);
        let frames = run_to_completion(&mut animation);
        let parsed: Vec<f64> = frames.iter().map(|f| f.parse().unwrap()).collect();
        assert!(parsed.windows(2).all(|w| w[0] <= w[1]), "frames: {frames:?}");
    }
}
