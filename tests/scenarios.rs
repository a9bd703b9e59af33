//! End-to-end pipeline runs over each adapted family.

use core::ptr::NonNull;

use unison::{Pipe, View};

#[test]
fn pointer_pipeline_writes_through_and_returns_the_same_handle() {
    let mut slot = 3;
    let handle: *mut i32 = &mut slot;
    let out = Pipe::own(handle).then(|v: &mut i32| *v + 1).into_inner();
    assert!(core::ptr::eq(out, handle));
    assert_eq!(unsafe { *out }, 4);
}

#[test]
fn null_pointer_pipeline_is_a_no_op() {
    let mut calls = 0;
    let out = Pipe::own(core::ptr::null_mut::<i32>())
        .then(|v: &mut i32| {
            calls += 1;
            *v + 1
        })
        .into_inner();
    assert!(out.is_null());
    assert_eq!(calls, 0);
}

#[test]
fn nonnull_pipeline_always_runs() {
    let mut slot = 10;
    let handle = NonNull::from(&mut slot);
    let out = Pipe::own(handle).then(|v: &mut i32| *v - 4).into_inner();
    assert_eq!(unsafe { *out.as_ptr() }, 6);
}

#[test]
fn sequence_pipeline_transforms_the_view_into_a_new_sequence() {
    let grown = Pipe::own(vec![1, 2, 3])
        .then(|v: View<'_, Vec<i32>>| {
            let mut out: Vec<i32> = v.iter().copied().collect();
            out.push(4);
            out
        })
        .into_inner();
    assert_eq!(grown, vec![1, 2, 3, 4]);
}

#[test]
fn array_pipeline_rebinds_the_whole_array() {
    let out = Pipe::own([1, 2, 3])
        .then(|v: View<'_, [i32; 3]>| {
            let mut next = [0; 3];
            for (slot, value) in next.iter_mut().zip(v.iter()) {
                *slot = value * 2;
            }
            next
        })
        .into_inner();
    assert_eq!(out, [2, 4, 6]);
}

#[test]
fn borrowed_sequence_pipeline_updates_the_original() {
    let mut items = vec![5, 6];
    let _ = Pipe::bind(&mut items)
        .then(|v: View<'_, Vec<i32>>| v.iter().map(|n| n + 1).collect::<Vec<i32>>());
    assert_eq!(items, vec![6, 7]);
}
