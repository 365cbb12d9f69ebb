//! Numeric counter entity.

use crate::define_struct;
use crate::structs::ValueStruct;

define_struct! {
    /// Immutable signed counter.
    pub struct Counter(CounterAttrs, CounterPatch) {
        value: i64,
    }
}

impl Counter {
    /// Counter one step up.
    pub fn increment(&self) -> Counter {
        self.add(1)
    }

    /// Counter one step down.
    pub fn decrement(&self) -> Counter {
        self.add(-1)
    }

    fn add(&self, delta: i64) -> Counter {
        self.with_(CounterPatch {
            value: Some(self.value + delta),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Counter, CounterAttrs};
    use crate::structs::ValueStruct;

    fn derive_zero_counter() -> Counter {
        Counter::create(CounterAttrs { value: 0 })
    }

    #[test]
    fn increment() {
        let counter_0 = derive_zero_counter();

        let counter_incremented = counter_0.increment();

        assert_eq!(*counter_incremented.value(), 1);
        assert_eq!(*counter_0.value(), 0, "counter should be immutable");
    }

    #[test]
    fn decrement() {
        let counter_0 = derive_zero_counter();

        let counter_decremented = counter_0.decrement();

        assert_eq!(*counter_decremented.value(), -1);
        assert_eq!(*counter_0.value(), 0, "counter should be immutable");
    }

    #[test]
    fn chained_steps_accumulate() {
        let counter = derive_zero_counter().increment().increment().decrement();

        assert_eq!(*counter.value(), 1);
    }
}
