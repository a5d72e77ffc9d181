use std::io::Cursor;
use std::process::Command;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn integration_echo_binary() {
    let exe = env!("CARGO_BIN_EXE_echo");
    let output = Command::new(exe).args(["a", "b"]).output().expect("run echo");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    // argv[0] is whatever path the binary was launched with
    assert!(lines[0].starts_with('0'));
    assert_eq!(lines[1], "1a");
    assert_eq!(lines[2], "2b");
}

#[test]
fn integration_generate_and_decode() {
    let mut buf = Vec::new();
    lissajous_lib::animation::lissajous(&mut buf, 5, &mut StdRng::seed_from_u64(2024))
        .expect("encode");

    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = opts.read_info(Cursor::new(&buf)).expect("gif header");
    assert_eq!((decoder.width(), decoder.height()), (201, 201));

    let palette = decoder.global_palette().expect("global palette").to_vec();
    assert_eq!(&palette[..15], &lissajous_lib::palette::Palette::default().rgb_bytes()[..]);

    let mut count = 0;
    while let Some(frame) = decoder.read_next_frame().expect("frame") {
        assert_eq!(frame.delay, 8);
        assert!(frame.buffer.iter().all(|&i| i < 5));
        count += 1;
    }
    assert_eq!(count, 64);
}

#[test]
fn integration_stdout_mode_is_reproducible_with_seed() {
    let exe = env!("CARGO_BIN_EXE_lissajous");
    let run = || {
        Command::new(exe)
            .args(["--seed", "8", "--cycles", "2"])
            .output()
            .expect("run lissajous")
    };
    let (a, b) = (run(), run());
    assert!(a.status.success());
    assert!(a.stdout.starts_with(b"GIF89a"));
    assert_eq!(a.stdout, b.stdout);
}
