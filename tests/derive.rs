//! The `#[derive(Adapt)]` registration path for user wrapper types.

use unison::{
    Adapt, Adapted, Check, Extract, Gate, Pipe, PresenceQuery, Replace, Site, ValueAccess,
};

#[derive(Adapt)]
#[adapt(extract = ViaValue, presence = ViaQuery)]
struct Slot {
    value: Option<u32>,
}

impl ValueAccess for Slot {
    type Value = u32;

    fn value(&self) -> &u32 {
        self.value.as_ref().expect("value() on an empty Slot")
    }

    fn value_mut(&mut self) -> &mut u32 {
        self.value.as_mut().expect("value_mut() on an empty Slot")
    }
}

impl PresenceQuery for Slot {
    fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl Replace<u32> for Slot {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: u32) {
        self.value = Some(value);
    }
}

#[test]
fn derived_wrapper_runs_through_the_pipeline() {
    let out = Pipe::own(Slot { value: Some(4) })
        .then(|v: &mut u32| *v + 1)
        .into_inner();
    assert_eq!(out.value, Some(5));
}

#[test]
fn derived_wrapper_short_circuits_when_empty() {
    let mut calls = 0;
    let out = Pipe::own(Slot { value: None })
        .then(|v: &mut u32| {
            calls += 1;
            *v + 1
        })
        .into_inner();
    assert_eq!(out.value, None);
    assert_eq!(calls, 0);
}

#[test]
fn derived_wrapper_extracts_and_checks() {
    let mut slot = Slot { value: Some(1) };
    assert!(slot.check());
    *slot.extract() = 8;
    assert_eq!(slot.value, Some(8));
    slot.value = None;
    assert!(!slot.check());
}

// Presence omitted: the wrapper is not presence-aware and every step runs.
#[derive(Adapt)]
#[adapt(extract = ViaDeref)]
struct Gauge(i32);

impl core::ops::Deref for Gauge {
    type Target = i32;

    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl core::ops::DerefMut for Gauge {
    fn deref_mut(&mut self) -> &mut i32 {
        &mut self.0
    }
}

impl Replace<i32> for Gauge {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: i32) {
        self.0 = value;
    }
}

#[test]
fn omitted_presence_means_always_active() {
    assert!(!<<Gauge as Adapted>::Presence as Gate<Gauge>>::AWARE);
    let out = Pipe::own(Gauge(0)).then(|v: &mut i32| *v + 9).into_inner();
    assert_eq!(out.0, 9);
}

// Fully qualified strategy paths are accepted as written.
#[derive(Adapt)]
#[adapt(extract = unison::strategy::ViaValue, presence = unison::strategy::ViaQuery)]
struct Keyed(Option<i32>);

impl ValueAccess for Keyed {
    type Value = i32;

    fn value(&self) -> &i32 {
        self.0.as_ref().expect("value() on an empty Keyed")
    }

    fn value_mut(&mut self) -> &mut i32 {
        self.0.as_mut().expect("value_mut() on an empty Keyed")
    }
}

impl PresenceQuery for Keyed {
    fn has_value(&self) -> bool {
        self.0.is_some()
    }
}

#[test]
fn qualified_strategy_paths_are_accepted() {
    let mut keyed = Keyed(Some(1));
    assert!(keyed.check());
    *keyed.extract() = 2;
    assert_eq!(keyed.0, Some(2));
    assert!(!Keyed(None).check());
}
