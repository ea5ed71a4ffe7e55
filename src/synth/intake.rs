use super::config::SynthConfig;
use super::trigger::TriggerMapper;
use super::SharedPool;
use crate::capture::EventSink;

/// Starts a voice for every observed packet, if one is free.
pub struct EventIntake {
    pool: SharedPool,
    mapper: TriggerMapper,
    dropped: u64,
}

impl EventIntake {
    /// Creates an intake whose mapper is seeded from the wall clock.
    pub fn new(pool: SharedPool, config: SynthConfig) -> Self {
        Self::with_mapper(pool, TriggerMapper::from_clock(config))
    }

    pub fn with_mapper(pool: SharedPool, mapper: TriggerMapper) -> Self {
        Self {
            pool,
            mapper,
            dropped: 0,
        }
    }

    /// Number of events dropped because every voice was busy.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Returns false when the pool was full and the event was dropped.
    pub fn trigger(&mut self, len: u32) -> bool {
        let mut pool = self.pool.lock();
        let Some(handle) = pool.allocate() else {
            drop(pool);
            self.dropped += 1;
            log::trace!("No free voice, dropped {} byte packet", len);
            return false;
        };
        let params = self.mapper.map(len);
        pool.get_mut(handle).activate(&params);
        true
    }
}

impl EventSink for EventIntake {
    fn on_event(&mut self, len: u32) {
        self.trigger(len);
    }
}
