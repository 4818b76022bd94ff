use bounded_view::{BoundedView, MutableBoundedView, UNBOUNDED};
use proptest::prelude::*;

proptest! {
    #[test]
    fn first_and_drop_front_cover_the_buffer(data in prop::collection::vec(any::<u8>(), 0..256), split in any::<prop::sample::Index>()) {
        let view = BoundedView::<'_, u8, 0, UNBOUNDED>::new(&data);
        let k = split.index(data.len() + 1);

        let head = view.first(k);
        let tail = view.drop_front(k);

        prop_assert_eq!(head.len(), k);
        prop_assert_eq!(tail.len(), data.len() - k);
        prop_assert_eq!(head.as_ptr(), view.as_ptr());
        prop_assert_eq!(tail.as_ptr(), view.as_ptr().wrapping_add(k));
        prop_assert_eq!([head, tail].concat(), data.clone());
    }

    #[test]
    fn try_new_agrees_with_bounds(len in 0usize..32) {
        let data = vec![0u8; len];

        let view = BoundedView::<'_, u8, 4, 16>::try_new(&data);

        prop_assert_eq!(view.is_ok(), (4..=16).contains(&len));
    }

    #[test]
    fn subarray_matches_slice_indexing(data in prop::collection::vec(any::<u8>(), 0..64), offset in 0usize..80, count in 0usize..80) {
        let view = BoundedView::<'_, u8, 0, UNBOUNDED>::new(&data);

        let expected = data.get(offset..).and_then(|rest| rest.get(..count));

        prop_assert_eq!(view.try_subarray(offset, count).ok(), expected);
    }

    #[test]
    fn mutable_writes_land_in_the_buffer(mut data in prop::collection::vec(any::<u8>(), 4..64), value in any::<u8>()) {
        let len = data.len();

        {
            let mut view = MutableBoundedView::<'_, u8, 4, UNBOUNDED>::try_new(&mut data).expect("at least four bytes");
            view.drop_front_static_mut::<2, 2, UNBOUNDED>().as_mut_slice().fill(value);
            view.first_static_mut::<2>().as_mut_array().fill(!value);
        }

        prop_assert!(data[..2].iter().all(|&b| b == !value));
        prop_assert!(data[2..].iter().all(|&b| b == value));
        prop_assert_eq!(data.len(), len);
    }
}
