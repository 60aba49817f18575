//! Test: a template with an unclosed privacy marker should fail.

fn main() {
    let _ = unilog::marked!("user {<}{}", 42);
}
