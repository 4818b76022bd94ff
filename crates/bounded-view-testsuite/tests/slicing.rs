use bounded_view::{BoundedView, SizeBounds, SizedView, UNBOUNDED};
use bounded_view_testsuite::{bounds_of_val, SAMPLE, TPKT_FRAME};
use expect_test::expect;
use rstest::rstest;

fn sample() -> BoundedView<'static, u8, 0, UNBOUNDED> {
    BoundedView::new(SAMPLE)
}

#[test]
fn first_and_drop_front_on_sample() {
    let view = sample();

    let first = view.first(3);
    assert_eq!(first, b"abc");
    assert_eq!(first.len(), 3);

    let rest = view.drop_front(4);
    assert_eq!(rest.len(), 16);
    assert!(rest.starts_with(b"de,"));
    assert_eq!(rest.as_ptr(), SAMPLE[4..].as_ptr());
}

#[rstest]
#[case::last(sample().last(3), b"lmn".as_slice())]
#[case::from_offset(sample().from_offset(13), b"ijk,lmn".as_slice())]
#[case::subarray(sample().subarray(4, 2), b"de".as_slice())]
#[case::drop_back(sample().drop_back(4), b"abc,de,efg,h,ijk".as_slice())]
#[case::first_none(sample().first(0), b"".as_slice())]
#[case::drop_front_all(sample().drop_front(20), b"".as_slice())]
fn dynamic_slicing(#[case] sliced: &[u8], #[case] expected: &[u8]) {
    assert_eq!(sliced, expected);
}

#[test]
fn try_subarray() {
    let view = sample();

    assert_eq!(view.try_subarray(7, 3).expect("in range"), b"efg");
    assert_eq!(view.try_subarray(20, 0).expect("in range"), b"");

    let error = view.try_subarray(18, 5).unwrap_err();
    expect!["[BoundedView::try_subarray] range out of bounds: 5 elements at offset 18 requested from 20 elements"]
        .assert_eq(&error.to_string());

    assert!(view.try_subarray(usize::MAX, 2).is_err());
}

#[test]
fn accessors() {
    let view = sample();

    assert!(!view.is_empty());
    assert_eq!(*view.front(), b'a');
    assert_eq!(*view.back(), b'n');
    assert_eq!(view.get(4), Some(&b'd'));
    assert_eq!(view.get(20), None);
    assert_eq!(view[5], b'e');
    assert_eq!(&view[7..10], b"efg");
    assert_eq!(view.iter().filter(|&&b| b == b',').count(), 5);
    assert_eq!(view.into_iter().count(), 20);
    assert_eq!(view.as_ref(), SAMPLE.as_slice());
}

#[test]
fn static_slices_share_the_source_memory() {
    let view = BoundedView::<'_, u8, 16, UNBOUNDED>::new(SAMPLE);

    let first = view.first_static::<3>();
    assert_eq!(first.as_array(), b"abc");
    assert_eq!(first.as_ptr(), view.as_ptr());

    let last = view.last_static::<3>();
    assert_eq!(last.as_array(), b"lmn");
    assert_eq!(last.as_ptr(), SAMPLE[17..].as_ptr());

    let middle = view.subarray_static::<7, 3>();
    assert_eq!(middle.as_array(), b"efg");

    let rest = view.drop_front_static::<4, 12, UNBOUNDED>();
    assert_eq!(rest.len(), 16);
    assert_eq!(rest.as_ptr(), SAMPLE[4..].as_ptr());

    let offset = view.from_offset_static::<13, 3, UNBOUNDED>();
    assert_eq!(offset, *b"ijk,lmn");
}

#[test]
fn drop_front_then_drop_back_refines_bounds() {
    let buffer = [0u8; 15];
    let view = BoundedView::<'_, u8, 10, 20>::assumed(&buffer);

    let sliced = view.drop_front_static::<3, 7, 17>().drop_back_static::<2, 5, 15>();

    assert_eq!(bounds_of_val(&sliced), SizeBounds::new(5, 15));
    assert_eq!(sliced.len(), 10);
    assert_eq!(sliced.as_ptr(), buffer[3..].as_ptr());
}

#[test]
fn unbounded_upper_bound_is_propagated() {
    let view = BoundedView::<'_, u8, 4, UNBOUNDED>::new(SAMPLE);

    let sliced = view.drop_front_static::<1, 3, UNBOUNDED>().drop_back_static::<3, 0, UNBOUNDED>();

    assert_eq!(bounds_of_val(&sliced), SizeBounds::new(0, UNBOUNDED));
    assert_eq!(sliced, *b"bc,de,efg,h,ijk,");
}

#[test]
fn static_slice_bounds_can_be_inferred() {
    let view = BoundedView::<'_, u8, 4, UNBOUNDED>::new(SAMPLE);

    let tail: BoundedView<'_, u8, 2, UNBOUNDED> = view.drop_front_static::<2, _, _>();

    assert_eq!(tail.len(), 18);
}

#[test]
fn widen_relaxes_bounds() {
    let header = SizedView::from_array(&[3u8, 0, 0, 20]);
    let wide = header.widen::<0, UNBOUNDED>();

    assert_eq!(bounds_of_val(&wide), SizeBounds::UNBOUNDED);
    assert_eq!(wide, header);
    assert_eq!(wide.as_ptr(), header.as_ptr());
}

#[test]
fn conversions() {
    let view = sample();
    let owned: Vec<u8> = view.to();
    assert_eq!(owned, SAMPLE.to_vec());

    let sized = view_of_header();
    assert_eq!(sized.to_array(), [3, 0, 0, 0x14]);
    let owned: Vec<u8> = sized.to();
    assert_eq!(owned, vec![3, 0, 0, 0x14]);
}

fn view_of_header() -> SizedView<'static, u8, 4> {
    SizedView::from_array(TPKT_FRAME).first_static::<4>()
}

#[test]
fn parse_tpkt_frame() {
    let frame = SizedView::from_array(TPKT_FRAME);

    let header = frame.first_static::<4>();
    let [version, _, hi, lo] = header.to_array();
    assert_eq!(version, 3);
    assert_eq!(usize::from(u16::from_be_bytes([hi, lo])), frame.len());

    let body = frame.drop_front_static::<4, 16, 16>();
    let x224 = body.first_static::<3>();
    assert_eq!(x224.as_array(), &[0x02, 0xf0, 0x80]);
    assert_eq!(body.drop_front_static::<3, 13, 13>(), *b"hello, bounds");
}

#[test]
fn debug_output() {
    let view = BoundedView::<'_, u8, 1, 4>::new(&[1u8, 2]);
    expect!["BoundedView { at_least: 1, at_most: 4, elements: [1, 2] }"].assert_eq(&format!("{view:?}"));
}
