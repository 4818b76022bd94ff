// error: cannot remove more elements than the lower bound guarantees
use bounded_view::MutableBoundedView;

fn main() {
    let mut buffer = [0u8; 3];
    let mut view = MutableBoundedView::<'_, u8, 2, 3>::new(&mut buffer);
    view.drop_back_static_mut::<3, 0, 0>().as_mut_slice().fill(1);
}
