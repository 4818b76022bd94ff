// error: view length is not fixed
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 2, 8>::new(&[0u8; 4]);
    println!("{:?}", view.into_sized());
}
