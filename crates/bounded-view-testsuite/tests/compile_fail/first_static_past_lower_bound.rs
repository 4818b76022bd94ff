// error: count is greater than the lower bound
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 4, 8>::new(&[0u8; 6]);
    println!("{:?}", view.first_static::<5>());
}
