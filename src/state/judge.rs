use crate::model::JudgeEvent;

/// Receives touch facts on every phase transition and decides hit/miss elsewhere.
///
/// Called synchronously while the tracker is mutably borrowed, so an implementation
/// must not reach back into the tracker that invoked it.
pub trait Judge {
    fn judge(&mut self, event: &JudgeEvent);
}

impl<F> Judge for F
where
    F: FnMut(&JudgeEvent),
{
    fn judge(&mut self, event: &JudgeEvent) {
        self(event)
    }
}

/// Holds the optional judge. Dispatching without one is a silent no-op.
#[derive(Default)]
pub struct Dispatcher {
    judge: Option<Box<dyn Judge>>,
}

impl Dispatcher {
    pub fn register(&mut self, judge: Box<dyn Judge>) {
        if self.judge.is_some() {
            log::info!("replacing registered judge");
        } else {
            log::info!("judge registered");
        }
        self.judge = Some(judge);
    }

    pub fn clear(&mut self) -> Option<Box<dyn Judge>> {
        let old = self.judge.take();
        if old.is_some() {
            log::info!("judge cleared");
        }
        old
    }

    pub fn has_judge(&self) -> bool {
        self.judge.is_some()
    }

    pub fn dispatch(&mut self, event: &JudgeEvent) {
        if let Some(judge) = self.judge.as_mut() {
            judge.judge(event);
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("has_judge", &self.has_judge())
            .finish()
    }
}
