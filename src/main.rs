/// Binary entrypoint for the `lissajous` executable.
///
/// Keeps the binary thin — all logic lives in `lissajous_lib` so unit tests
/// can import library functions directly.
fn main() -> anyhow::Result<()> {
    lissajous_lib::run()
}
