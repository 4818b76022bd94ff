// error: sub-range may exceed the lower bound
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 4, 8>::new(&[0u8; 6]);
    println!("{:?}", view.subarray_static::<2, 3>());
}
