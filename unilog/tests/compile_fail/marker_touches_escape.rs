//! Test: a marker that runs into a `{{`/`}}` format escape should fail.

fn main() {
    let _ = unilog::marked!("{<}x{{>}}");
}
