use std::io::{self, Write};

/// One line per argument: the positional index immediately followed by the
/// argument, with no separator. Index 0 is the program name.
pub fn echo_lines<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| format!("{}{}", index, arg.as_ref()))
        .collect()
}

/// Write `echo_lines(args)` to `out`, newline-terminated.
pub fn write_echo<W, I, S>(mut out: W, args: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in echo_lines(args) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prog_a_b() {
        let mut out = Vec::new();
        write_echo(&mut out, ["prog", "a", "b"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0prog\n1a\n2b\n");
    }

    #[test]
    fn test_index_prefix_for_every_arg() {
        let args: Vec<String> = (0..15).map(|i| format!("arg{}", i * 3)).collect();
        let lines = echo_lines(&args);
        assert_eq!(lines.len(), args.len());
        for (idx, line) in lines.iter().enumerate() {
            assert_eq!(*line, idx.to_string() + &args[idx]);
        }
    }

    #[test]
    fn test_empty_and_flag_like_args_kept_verbatim() {
        let lines = echo_lines(["p", "", "--help", "two words"]);
        assert_eq!(lines, vec!["0p", "1", "2--help", "3two words"]);
    }

    #[test]
    fn test_no_args() {
        assert!(echo_lines(Vec::<String>::new()).is_empty());
    }
}
