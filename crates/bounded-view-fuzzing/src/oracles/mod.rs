//! Oracles.
//!
//! Oracles take a test case and determine whether we have a bug. The oracles here
//! are differential: they apply the same slicing operations through the bounded
//! views and through plain index arithmetic on the underlying buffer, and check
//! that both agree on the elements, on their addresses, and on whether an
//! operation is in range at all.
//!
//! When an oracle finds a bug, it should report it to the fuzzing engine by
//! panicking.

use arbitrary::{Arbitrary as _, Unstructured};
use bounded_view::{BoundedView, MutableBoundedView, ViewErrorKind, UNBOUNDED};

use crate::generators::{SliceOp, SlicingInput};

fn parse_input(data: &[u8]) -> Option<SlicingInput<'_>> {
    SlicingInput::arbitrary_take_rest(Unstructured::new(data)).ok()
}

pub fn view_slicing(data: &[u8]) {
    let Some(input) = parse_input(data) else {
        return;
    };

    let buffer = input.data;
    let mut view = BoundedView::<'_, u8, 0, UNBOUNDED>::new(buffer);
    let (mut start, mut end) = (0, buffer.len());

    for op in input.ops {
        if let SliceOp::Subarray { offset, count } = op {
            let checked = view.try_subarray(usize::from(offset), usize::from(count));
            assert_eq!(checked.is_ok(), op.apply_to_range(start, end).is_some());
        }

        let Some((new_start, new_end)) = op.apply_to_range(start, end) else {
            continue;
        };

        let sliced = match op {
            SliceOp::First(n) => view.first(n.into()),
            SliceOp::Last(n) => view.last(n.into()),
            SliceOp::FromOffset(n) => view.from_offset(n.into()),
            SliceOp::Subarray { offset, count } => view.subarray(offset.into(), count.into()),
            SliceOp::DropFront(n) => view.drop_front(n.into()),
            SliceOp::DropBack(n) => view.drop_back(n.into()),
        };

        let expected = &buffer[new_start..new_end];
        assert_eq!(sliced, expected);
        assert_eq!(sliced.as_ptr(), expected.as_ptr());

        view = BoundedView::assumed(sliced);
        (start, end) = (new_start, new_end);
    }

    match BoundedView::<'_, u8, 8, UNBOUNDED>::try_new(buffer) {
        Ok(head) => {
            assert!(buffer.len() >= 8);
            assert_eq!(head.first_static::<4>().as_slice(), &buffer[..4]);
            assert_eq!(head.last_static::<4>().as_slice(), &buffer[buffer.len() - 4..]);
            assert_eq!(head.subarray_static::<2, 6>().as_slice(), &buffer[2..8]);

            let tail = head.drop_front_static::<8, 0, UNBOUNDED>();
            assert_eq!(tail.as_slice(), &buffer[8..]);
            assert_eq!(tail.as_ptr(), buffer[8..].as_ptr());

            let body = head.drop_back_static::<2, 6, UNBOUNDED>();
            assert_eq!(body.as_slice(), &buffer[..buffer.len() - 2]);
        }
        Err(error) => {
            assert!(buffer.len() < 8);
            assert_eq!(
                *error.kind(),
                ViewErrorKind::LengthOutOfBounds {
                    len: buffer.len(),
                    at_least: 8,
                    at_most: UNBOUNDED,
                }
            );
        }
    }
}

pub fn view_writes(data: &[u8]) {
    let Some(input) = parse_input(data) else {
        return;
    };

    let mut buffer = input.data.to_vec();
    let mut model = input.data.to_vec();

    let mut view = MutableBoundedView::<'_, u8, 0, UNBOUNDED>::new(&mut buffer);
    let (mut start, mut end) = (0, model.len());

    for (idx, op) in input.ops.into_iter().enumerate() {
        let Some((new_start, new_end)) = op.apply_to_range(start, end) else {
            continue;
        };

        let mark = idx.to_le_bytes()[0];

        let target = match op {
            SliceOp::First(n) => view.first_mut(n.into()),
            SliceOp::Last(n) => view.last_mut(n.into()),
            SliceOp::FromOffset(n) => view.from_offset_mut(n.into()),
            SliceOp::Subarray { offset, count } => view.subarray_mut(offset.into(), count.into()),
            SliceOp::DropFront(n) => view.drop_front_mut(n.into()),
            SliceOp::DropBack(n) => view.drop_back_mut(n.into()),
        };
        target.fill(mark);
        model[new_start..new_end].fill(mark);

        let slice = view.into_slice();
        view = MutableBoundedView::assumed(&mut slice[new_start - start..new_end - start]);
        (start, end) = (new_start, new_end);
    }

    assert_eq!(buffer, model);

    if let Ok(mut head) = MutableBoundedView::<'_, u8, 4, UNBOUNDED>::try_new(&mut buffer) {
        head.first_static_mut::<2>().as_mut_array().copy_from_slice(&[0xAA, 0xBB]);
        head.last_static_mut::<2>().as_mut_array().copy_from_slice(&[0xCC, 0xDD]);

        let len = model.len();
        model[..2].copy_from_slice(&[0xAA, 0xBB]);
        model[len - 2..].copy_from_slice(&[0xCC, 0xDD]);

        assert_eq!(head.into_view().as_slice(), model.as_slice());
    } else {
        assert!(model.len() < 4);
    }
}
