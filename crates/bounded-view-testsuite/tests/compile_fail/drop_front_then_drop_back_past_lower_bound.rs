// error: cannot remove more elements than the lower bound guarantees
use bounded_view::BoundedView;

fn main() {
    let view = BoundedView::<'_, u8, 6, 10>::new(&[0u8; 8]);
    let rest = view.drop_front_static::<4, 2, 6>().drop_back_static::<3, 0, 3>();
    println!("{rest:?}");
}
