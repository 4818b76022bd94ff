// error: source bounds are not contained in the view bounds
use bounded_view::{BoundedView, UNBOUNDED};

fn main() {
    let data = vec![1u8, 2, 3];
    let view = BoundedView::<'_, u8, 1, UNBOUNDED>::new(data.as_slice());
    println!("{}", view.len());
}
