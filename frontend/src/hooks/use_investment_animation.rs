use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use finance_hub_core::animation::{AnimationEngine, AnimationFrame, Scheduler, TimerId};
use finance_hub_core::config::AnimationConfig;
use gloo::timers::callback::Interval;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Browser scheduler: one `gloo` interval per timer. Dropping an interval
/// clears it, so cancelling is just removal.
pub struct IntervalScheduler {
    next_id: u64,
    intervals: HashMap<TimerId, Interval>,
    on_fire: Rc<dyn Fn(TimerId)>,
}

impl IntervalScheduler {
    pub fn new(on_fire: Rc<dyn Fn(TimerId)>) -> Self {
        Self {
            next_id: 0,
            intervals: HashMap::new(),
            on_fire,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, interval_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let on_fire = Rc::clone(&self.on_fire);
        self.intervals
            .insert(id, Interval::new(interval_ms, move || on_fire(id)));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.intervals.remove(&timer);
    }
}

type BrowserEngine = AnimationEngine<IntervalScheduler, StdRng>;

pub struct UseInvestmentAnimationResult {
    /// Latest tick, `None` until the first one after a start
    pub frame: Option<AnimationFrame>,
    pub history: Vec<f64>,
    pub actions: UseInvestmentAnimationActions,
}

#[derive(Clone)]
pub struct UseInvestmentAnimationActions {
    /// `(total, return)` seed; a zero total stops instead
    pub start: Callback<(f64, f64)>,
}

/// Runs the simulated investment ticker while the calling component is
/// mounted. The engine is stopped on unmount.
#[hook]
pub fn use_investment_animation(config: AnimationConfig) -> UseInvestmentAnimationResult {
    let frame = use_state(|| None::<AnimationFrame>);
    let history = use_state(Vec::<f64>::new);

    let engine = {
        let frame = frame.setter();
        let history = history.setter();
        use_memo((), move |_| {
            Rc::new_cyclic(|weak: &Weak<RefCell<BrowserEngine>>| {
                let weak = weak.clone();
                let on_fire: Rc<dyn Fn(TimerId)> = Rc::new(move |timer| {
                    let Some(engine) = weak.upgrade() else { return };
                    let Ok(mut engine) = engine.try_borrow_mut() else { return };
                    if let Some(next) = engine.tick(timer) {
                        history.set(engine.history().values());
                        frame.set(Some(next));
                    }
                });

                let rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
                RefCell::new(AnimationEngine::new(
                    IntervalScheduler::new(on_fire),
                    rng,
                    config,
                ))
            })
        })
    };

    {
        let engine = Rc::clone(&engine);
        use_effect_with((), move |_| {
            move || {
                if let Ok(mut engine) = engine.try_borrow_mut() {
                    engine.stop();
                }
            }
        });
    }

    let start = {
        let engine = Rc::clone(&engine);
        let frame = frame.clone();
        let history = history.clone();
        use_callback((), move |(total, investment_return): (f64, f64), _| {
            let Ok(mut engine) = engine.try_borrow_mut() else { return };
            frame.set(None);
            history.set(Vec::new());
            if engine.start(total, investment_return) {
                Logger::info_with_component("investment-animation", "Animation started");
            } else {
                Logger::info_with_component(
                    "investment-animation",
                    "No investments, animation not started",
                );
            }
        })
    };

    UseInvestmentAnimationResult {
        frame: *frame,
        history: (*history).clone(),
        actions: UseInvestmentAnimationActions { start },
    }
}
