use super::voice::Voice;

/// Index of a slot in a [`VoicePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceHandle(usize);

impl VoiceHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed-capacity arena of voices.
///
/// The pool never grows and never steals: when every slot is active,
/// allocation fails and the caller drops the event.
#[derive(Debug, Clone)]
pub struct VoicePool {
    voices: Box<[Voice]>,
}

impl VoicePool {
    /// Creates a pool of `capacity` inactive voices.
    pub fn new(capacity: usize) -> Self {
        Self {
            voices: (0..capacity).map(|_| Voice::new()).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.voices.len()
    }

    /// Finds the first inactive slot. The slot stays inactive until the
    /// caller activates it.
    pub fn allocate(&self) -> Option<VoiceHandle> {
        self.voices
            .iter()
            .position(|voice| !voice.active)
            .map(VoiceHandle)
    }

    pub fn get(&self, handle: VoiceHandle) -> &Voice {
        &self.voices[handle.0]
    }

    /// All slots, active or not, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter()
    }

    pub fn get_mut(&mut self, handle: VoiceHandle) -> &mut Voice {
        &mut self.voices[handle.0]
    }

    /// Marks the slot free for reuse.
    pub fn release(&mut self, handle: VoiceHandle) {
        self.voices[handle.0].active = false;
    }

    /// Applies `f` to every active voice in slot order. Slots for which `f`
    /// returns false are released.
    pub fn for_each_active(&mut self, mut f: impl FnMut(VoiceHandle, &mut Voice) -> bool) {
        for index in 0..self.voices.len() {
            let handle = VoiceHandle(index);
            let voice = &mut self.voices[index];
            if voice.active && !f(handle, voice) {
                self.release(handle);
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.voices.iter().filter(|voice| voice.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.voices.iter().all(|voice| voice.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::voice::VoiceParams;

    fn params() -> VoiceParams {
        VoiceParams {
            frequency: 1000.0,
            peak_amplitude: 0.25,
            attack_duration: 0.01,
            decay_duration: 0.1,
        }
    }

    #[test]
    fn allocate_returns_first_free_slot() {
        let mut pool = VoicePool::new(3);
        let first = pool.allocate().unwrap();
        assert_eq!(first.index(), 0);
        pool.get_mut(first).activate(&params());

        let second = pool.allocate().unwrap();
        assert_eq!(second.index(), 1);
    }

    #[test]
    fn allocate_does_not_claim_slot() {
        let pool = VoicePool::new(2);
        assert_eq!(pool.allocate(), pool.allocate());
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn full_pool_refuses_allocation() {
        let mut pool = VoicePool::new(2);
        for _ in 0..2 {
            let handle = pool.allocate().unwrap();
            pool.get_mut(handle).activate(&params());
        }
        assert!(pool.is_full());
        assert_eq!(pool.allocate(), None);
    }

    #[test]
    fn released_slot_is_reused() {
        let mut pool = VoicePool::new(2);
        for _ in 0..2 {
            let handle = pool.allocate().unwrap();
            pool.get_mut(handle).activate(&params());
        }
        pool.release(VoiceHandle(0));
        assert_eq!(pool.allocate().map(VoiceHandle::index), Some(0));
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn for_each_active_visits_in_slot_order() {
        let mut pool = VoicePool::new(4);
        for index in [3, 1] {
            pool.get_mut(VoiceHandle(index)).activate(&params());
        }
        let mut visited = Vec::new();
        pool.for_each_active(|handle, _| {
            visited.push(handle.index());
            true
        });
        assert_eq!(visited, vec![1, 3]);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn for_each_active_releases_rejected_voices() {
        let mut pool = VoicePool::new(3);
        for index in 0..3 {
            pool.get_mut(VoiceHandle(index)).activate(&params());
        }
        pool.for_each_active(|handle, _| handle.index() != 1);
        assert!(!pool.get(VoiceHandle(1)).active);
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.allocate().map(VoiceHandle::index), Some(1));
    }

    #[test]
    fn zero_capacity_pool_is_always_full() {
        let pool = VoicePool::new(0);
        assert!(pool.is_full());
        assert_eq!(pool.allocate(), None);
    }
}
