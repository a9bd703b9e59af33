//! Pipeline wrapper behavior: presence gating, rebinding, ownership modes.

use core::cell::Cell;

use unison::{Pipe, View};

#[test]
fn active_value_flows_through_the_step() {
    let out = Pipe::own(Some(5)).then(|v: &mut i32| *v * 2).into_inner();
    assert_eq!(out, Some(10));
}

#[test]
fn inert_value_short_circuits_without_invoking_the_step() {
    let mut calls = 0;
    let out = Pipe::own(None::<i32>)
        .then(|v: &mut i32| {
            calls += 1;
            *v * 2
        })
        .into_inner();
    assert_eq!(out, None);
    assert_eq!(calls, 0);
}

#[test]
fn inert_state_propagates_across_steps() {
    let calls = Cell::new(0);
    let out = Pipe::own(Err::<i32, &str>("down"))
        .then(|v: &mut i32| {
            calls.set(calls.get() + 1);
            *v + 1
        })
        .then(|v: &mut i32| {
            calls.set(calls.get() + 1);
            *v + 1
        })
        .into_inner();
    assert_eq!(out, Err("down"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn ok_result_receives_every_step() {
    let out = Pipe::own(Ok::<i32, &str>(10))
        .then(|v: &mut i32| *v / 2)
        .then(|v: &mut i32| *v + 1)
        .into_inner();
    assert_eq!(out, Ok(6));
}

#[test]
fn empty_sequence_short_circuits() {
    let mut calls = 0;
    let out = Pipe::own(Vec::<i32>::new())
        .then(|v: View<'_, Vec<i32>>| {
            calls += 1;
            v.iter().copied().collect::<Vec<i32>>()
        })
        .into_inner();
    assert!(out.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn chaining_is_composition() {
    let f = |v: &mut i32| *v + 3;
    let g = |v: &mut i32| *v * 2;
    let chained = Pipe::own(Box::new(5)).then(f).then(g).into_inner();
    let fused = Pipe::own(Box::new(5))
        .then(|v: &mut i32| {
            let t = *v + 3;
            t * 2
        })
        .into_inner();
    assert_eq!(*chained, 16);
    assert_eq!(*chained, *fused);
}

#[test]
fn borrowed_binding_mutates_in_place() {
    let mut slot = Some(2);
    {
        let released = Pipe::bind(&mut slot).then(|v: &mut i32| *v + 1).release();
        assert_eq!(*released, Some(3));
    }
    assert_eq!(slot, Some(3));
}

#[test]
fn check_through_the_wrapper_never_mutates() {
    let pipe = Pipe::own(Some(1));
    assert!(pipe.check());
    assert!(pipe.check());
    assert_eq!(pipe.into_inner(), Some(1));
}

#[test]
fn payload_through_the_wrapper() {
    let mut pipe = Pipe::own(Some(1));
    *pipe.payload() = 6;
    assert_eq!(pipe.into_inner(), Some(6));
}

#[test]
fn get_and_get_mut_expose_the_wrapped_value() {
    let mut pipe = Pipe::own(vec![1]);
    assert_eq!(pipe.get().len(), 1);
    pipe.get_mut().push(2);
    assert_eq!(pipe.into_inner(), vec![1, 2]);
}

#[test]
fn step_returning_the_container_type_rebinds_wholesale() {
    // The closure yields Option<i32>, not i32, so the container site absorbs
    // it; a later step then sees the rebound state.
    let out = Pipe::own(Some(5))
        .then(|v: &mut i32| if *v > 3 { None } else { Some(*v) })
        .then(|v: &mut i32| *v + 100)
        .into_inner();
    assert_eq!(out, None);
}

#[test]
fn sequence_step_replaces_the_whole_sequence() {
    let out = Pipe::own(vec![1, 2, 3])
        .then(|v: View<'_, Vec<i32>>| v.iter().map(|n| n * n).collect::<Vec<i32>>())
        .into_inner();
    assert_eq!(out, vec![1, 4, 9]);
}
