//! Test: a template whose close marker comes before its open marker should fail.

fn main() {
    let _ = unilog::marked!("done {>} then {<}");
}
