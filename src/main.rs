// This binary crate is intentionally minimal.
// All regression logic lives in the library (src/lib.rs and its modules).
// Run the housing demo with:
//   RUST_LOG=info cargo run --example housing
fn main() {
    println!("ferrite-linreg: linear regression by batch gradient descent, from scratch.");
    println!("Run `cargo run --example housing` to fit the housing sample.");
}
