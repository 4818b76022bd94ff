// error: source bounds are not contained in the view bounds
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 2, 8>::new(&[0u8; 4]);
    println!("{:?}", view.widen::<3, 8>());
}
