/// Prints each command-line argument, program name included, prefixed by its
/// index.
fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    lissajous_lib::echo::write_echo(std::io::stdout().lock(), &args)
}
