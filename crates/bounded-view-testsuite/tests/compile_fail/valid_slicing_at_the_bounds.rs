use bounded_view::{BoundedView, SizedView, UNBOUNDED};

fn main() {
    let view = BoundedView::<'_, u8, 6, 10>::new(&[0u8; 8]);
    let rest = view.drop_front_static::<4, 2, 6>().drop_back_static::<2, 0, 4>();
    let head: SizedView<'_, u8, 6> = view.first_static::<6>();
    let wide = view.widen::<0, UNBOUNDED>();
    let exact = view.subarray_static::<2, 4>().widen::<4, 4>().into_sized();
    println!("{rest:?} {head:?} {wide:?} {exact:?}");
}
