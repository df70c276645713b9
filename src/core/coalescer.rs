use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Source of display-refresh callbacks.
///
/// `request_frame` either accepts the callback for the next frame or hands
/// it back when the host has no frame primitive, letting the caller decide
/// how to degrade.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), FrameCallback>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// A frame was requested; `work` runs then.
    Scheduled,
    /// A recomputation is already pending; this call did nothing.
    Coalesced,
    /// No frame primitive; `work` already ran synchronously.
    RanImmediately,
}

/// Collapses any number of triggers per frame into one recomputation.
///
/// `work` must read live state when it runs, not capture a snapshot at
/// schedule time: only the first closure of a burst is kept.
pub struct FrameCoalescer {
    scheduler: Rc<dyn FrameScheduler>,
    pending: Rc<Cell<bool>>,
}

impl FrameCoalescer {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            pending: Rc::new(Cell::new(false)),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn schedule(&self, work: impl FnOnce() + 'static) -> Schedule {
        if self.pending.get() {
            return Schedule::Coalesced;
        }
        self.pending.set(true);
        let pending = self.pending.clone();
        let job: FrameCallback = Box::new(move || {
            work();
            pending.set(false);
        });
        match self.scheduler.request_frame(job) {
            Ok(()) => Schedule::Scheduled,
            Err(job) => {
                job();
                Schedule::RanImmediately
            }
        }
    }
}

/// Unconditional per-frame loop: runs `tick` now and then once every frame,
/// for as long as the scheduler keeps accepting frames.
pub struct FrameLoop;

impl FrameLoop {
    /// Returns `false` when the host has no frame primitive; the loop then
    /// stops after the first tick rather than spinning synchronously.
    pub fn start(scheduler: Rc<dyn FrameScheduler>, tick: impl FnMut() + 'static) -> bool {
        let tick: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(tick));
        Self::iterate(scheduler, tick)
    }

    fn iterate(scheduler: Rc<dyn FrameScheduler>, tick: Rc<RefCell<dyn FnMut()>>) -> bool {
        (&mut *tick.borrow_mut())();
        let next_scheduler = scheduler.clone();
        let next = Box::new(move || {
            Self::iterate(next_scheduler, tick);
        });
        scheduler.request_frame(next).is_ok()
    }
}
