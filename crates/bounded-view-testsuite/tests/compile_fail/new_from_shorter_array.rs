// error: source bounds are not contained in the view bounds
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 5, 5>::new(&[0u8; 4]);
    println!("{}", view.len());
}
