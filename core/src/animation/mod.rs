//! Simulated live ticker for the investment card.
//!
//! Purely cosmetic: the engine perturbs a local copy of the investment total
//! with a bounded random walk and never writes anything back.

mod history;
mod scheduler;

pub use history::HistorySeries;
pub use scheduler::{ManualScheduler, Scheduler, TimerId};

use rand::Rng;
use tracing::{debug, info};

use crate::config::AnimationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running { timer: TimerId },
}

/// What one tick produced, for updating the card and redrawing the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub total: f64,
    pub delta: f64,
    pub investment_return: f64,
}

pub struct AnimationEngine<S, R> {
    scheduler: S,
    rng: R,
    config: AnimationConfig,
    state: AnimationState,
    total: f64,
    investment_return: f64,
    history: HistorySeries,
}

impl<S: Scheduler, R: Rng> AnimationEngine<S, R> {
    pub fn new(scheduler: S, rng: R, config: AnimationConfig) -> Self {
        let history = HistorySeries::new(config.history_capacity);
        Self {
            scheduler,
            rng,
            config,
            state: AnimationState::Idle,
            total: 0.0,
            investment_return: 0.0,
            history,
        }
    }

    /// Seeds the walk and starts the timer, replacing any running one.
    /// A zero or non-finite total stops the engine instead and returns false.
    pub fn start(&mut self, total: f64, investment_return: f64) -> bool {
        if total == 0.0 || !total.is_finite() {
            info!(total, "No investments to animate");
            self.stop();
            return false;
        }

        if let AnimationState::Running { timer } = self.state {
            self.scheduler.cancel(timer);
        }

        self.total = total;
        self.investment_return = if investment_return.is_finite() {
            investment_return
        } else {
            0.0
        };
        self.history.clear();

        let timer = self.scheduler.schedule_repeating(self.config.interval_ms);
        self.state = AnimationState::Running { timer };
        info!(total, interval_ms = self.config.interval_ms, "Investment animation started");
        true
    }

    /// Advances the walk by one step. Ticks from any timer other than the
    /// current one are ignored.
    pub fn tick(&mut self, timer: TimerId) -> Option<AnimationFrame> {
        match self.state {
            AnimationState::Running { timer: current } if current == timer => {}
            _ => {
                debug!(?timer, "Ignoring stale animation tick");
                return None;
            }
        }

        let volatility = self.config.volatility.abs();
        let variation = if volatility > 0.0 {
            self.rng.gen_range(-volatility..volatility)
        } else {
            0.0
        };
        let delta = self.total * variation;
        self.total += delta;
        self.investment_return += delta;
        self.history.push(self.total);

        Some(AnimationFrame {
            total: self.total,
            delta,
            investment_return: self.investment_return,
        })
    }

    /// Cancels the timer if one is running. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let AnimationState::Running { timer } = self.state {
            self.scheduler.cancel(timer);
            self.state = AnimationState::Idle;
            info!("Investment animation stopped");
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    pub fn history(&self) -> &HistorySeries {
        &self.history
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<R: Rng> AnimationEngine<ManualScheduler, R> {
    /// Moves logical time forward and delivers every due tick in order
    pub fn advance(&mut self, ms: u64) -> Vec<AnimationFrame> {
        self.scheduler
            .advance(ms)
            .into_iter()
            .filter_map(|timer| self.tick(timer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> AnimationEngine<ManualScheduler, StdRng> {
        AnimationEngine::new(
            ManualScheduler::new(),
            StdRng::seed_from_u64(7),
            AnimationConfig::default(),
        )
    }

    #[test]
    fn test_zero_total_does_not_start() {
        let mut engine = engine();

        assert!(!engine.start(0.0, 0.0));
        assert!(!engine.start(f64::NAN, 0.0));
        assert_eq!(engine.state(), AnimationState::Idle);
        assert_eq!(engine.scheduler().active_timers(), 0);
        assert!(engine.advance(20_000).is_empty());
    }

    #[test]
    fn test_start_twice_keeps_one_timer() {
        let mut engine = engine();

        assert!(engine.start(1000.0, 50.0));
        assert_eq!(engine.scheduler().active_timers(), 1);
        assert!(engine.start(1000.0, 50.0));
        assert_eq!(engine.scheduler().active_timers(), 1);

        // One tick per interval, no duplicates from the first timer
        assert_eq!(engine.advance(4000).len(), 1);
        assert_eq!(engine.advance(8000).len(), 2);
    }

    #[test]
    fn test_ticks_stay_within_volatility() {
        let mut engine = engine();
        engine.start(1000.0, 0.0);

        let mut previous = 1000.0;
        for frame in engine.advance(4000 * 30) {
            assert!(frame.delta.abs() <= previous * 0.02 + 1e-9);
            assert!((frame.total - (previous + frame.delta)).abs() < 1e-9);
            previous = frame.total;
        }
        assert_eq!(engine.history().len(), 20);
        assert_eq!(engine.history().values().last().copied(), Some(previous));
    }

    #[test]
    fn test_return_moves_with_total() {
        let mut engine = engine();
        engine.start(2000.0, 100.0);

        let frames = engine.advance(12_000);
        assert_eq!(frames.len(), 3);
        let last = frames[2];
        assert!((last.investment_return - 100.0 - (last.total - 2000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_lowest_draw_gives_negative_two_percent() {
        // StepRng(0, 0) always yields the bottom of the sampling range
        let mut engine = AnimationEngine::new(
            ManualScheduler::new(),
            StepRng::new(0, 0),
            AnimationConfig::default(),
        );
        engine.start(1000.0, 0.0);

        let frame = engine.advance(4000)[0];
        assert!((frame.delta + 20.0).abs() < 1e-9);
        assert!((frame.total - 980.0).abs() < 1e-9);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut engine = engine();
        engine.start(1000.0, 0.0);
        let AnimationState::Running { timer: old } = engine.state() else {
            panic!("engine should be running");
        };
        engine.start(1500.0, 0.0);

        assert_eq!(engine.tick(old), None);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_stop_is_idempotent_and_restart_clears_history() {
        let mut engine = engine();
        engine.start(1000.0, 0.0);
        engine.advance(8000);
        assert_eq!(engine.history().len(), 2);

        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
        assert!(engine.advance(8000).is_empty());
        assert_eq!(engine.history().len(), 2);

        engine.start(1000.0, 0.0);
        assert!(engine.history().is_empty());
    }
}
