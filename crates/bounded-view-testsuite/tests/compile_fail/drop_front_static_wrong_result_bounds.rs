// error: result bounds do not match the bounds of the sliced view
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 4, 10>::new(&[0u8; 8]);
    println!("{:?}", view.drop_front_static::<2, 3, 8>());
}
