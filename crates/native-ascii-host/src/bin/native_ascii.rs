//! `native-ascii` – convert `.properties` files between native text and
//! `\uXXXX` escapes, in place.
//!
//! Each file is opened as the sole document of an in-memory host and goes
//! through the same commands an editor would run.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use native_ascii_host::{
    Command, ConvertOptions, Document, LetterCase, MemoryDocument, MemoryHost, handle,
    load_options,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: native-ascii encode [--lower|--upper] [--comments] [--config FILE] [--stdout] FILE...
       native-ascii decode [--config FILE] [--stdout] FILE...";

#[derive(Debug)]
struct Args {
    command: Command,
    config: Option<PathBuf>,
    letter_case: Option<LetterCase>,
    comments: bool,
    stdout: bool,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("encode") => Command::NativeToAscii,
        Some("decode") => Command::AsciiToNative,
        Some("-h" | "--help") | None => bail!(USAGE),
        Some(other) => bail!("unknown command '{other}'\n{USAGE}"),
    };

    let mut parsed = Args {
        command,
        config: None,
        letter_case: None,
        comments: false,
        stdout: false,
        files: Vec::new(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            flag @ ("--lower" | "--upper" | "--comments")
                if matches!(parsed.command, Command::AsciiToNative) =>
            {
                bail!("'{flag}' only applies to encode\n{USAGE}")
            }
            "--lower" => parsed.letter_case = Some(LetterCase::Lower),
            "--upper" => parsed.letter_case = Some(LetterCase::Upper),
            "--comments" => parsed.comments = true,
            "--stdout" => parsed.stdout = true,
            "--config" => {
                let path = args.next().context("--config needs a file")?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            _ => parsed.files.push(PathBuf::from(arg)),
        }
    }

    if parsed.files.is_empty() {
        bail!("no input files\n{USAGE}");
    }
    Ok(parsed)
}

fn options_for(args: &Args) -> Result<ConvertOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => ConvertOptions::default(),
    };
    if let Some(letter_case) = args.letter_case {
        options.letter_case = letter_case;
    }
    options.comment_conversion |= args.comments;
    Ok(options)
}

fn convert_file(path: &Path, command: Command, options: ConvertOptions, stdout: bool) -> Result<()> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut host = MemoryHost::new(options);
    let index = host.open(MemoryDocument::new(path.display().to_string(), original.as_str()));
    handle(&mut host, command)?;

    let Some(document) = host.document(index) else {
        bail!("{} was closed during conversion", path.display());
    };
    if stdout {
        print!("{}", document.text());
    } else if document.text() != original {
        fs::write(path, document.text())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), %command, "rewrote file");
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let options = options_for(&args)?;

    let mut failed = 0usize;
    for path in &args.files {
        if let Err(err) = convert_file(path, args.command, options, args.stdout) {
            warn!(path = %path.display(), "conversion failed");
            eprintln!("{}: {err:#}", path.display());
            failed += 1;
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use native_ascii_host::{Command, LetterCase};

    use super::{convert_file, options_for, parse_args};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parses_encode_flags() {
        let parsed = parse_args(args(&["encode", "--lower", "--comments", "a.properties"])).unwrap();
        assert_eq!(parsed.command, Command::NativeToAscii);
        assert_eq!(parsed.letter_case, Some(LetterCase::Lower));
        assert!(parsed.comments);
        assert_eq!(parsed.files.len(), 1);

        let options = options_for(&parsed).unwrap();
        assert_eq!(options.letter_case, LetterCase::Lower);
        assert!(options.comment_conversion);
    }

    #[test]
    fn rejects_bad_invocations() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["transcode", "a"])).is_err());
        assert!(parse_args(args(&["decode"])).is_err());
        assert!(parse_args(args(&["decode", "--frobnicate", "a"])).is_err());
        assert!(parse_args(args(&["decode", "--config"])).is_err());
    }

    #[test]
    fn decode_rejects_encode_flags() {
        for flag in ["--lower", "--upper", "--comments"] {
            let err = parse_args(args(&["decode", flag, "a"])).unwrap_err();
            assert!(err.to_string().contains("only applies to encode"), "{err}");
            assert!(parse_args(args(&["encode", flag, "a"])).is_ok());
        }
    }

    #[test]
    fn command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("converter.toml");
        fs::write(&config, "[native-ascii-converter]\nletter-case = \"Lower case\"\n").unwrap();
        let config = config.to_str().unwrap();

        let parsed = parse_args(args(&["encode", "--config", config, "x"])).unwrap();
        assert_eq!(options_for(&parsed).unwrap().letter_case, LetterCase::Lower);

        let parsed = parse_args(args(&["encode", "--config", config, "--upper", "x"])).unwrap();
        assert_eq!(options_for(&parsed).unwrap().letter_case, LetterCase::Upper);
    }

    #[test]
    fn rewrites_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.properties");
        fs::write(&path, "# caf\u{e9}\r\nk=caf\u{e9}\r\n").unwrap();

        let parsed = parse_args(args(&["encode", path.to_str().unwrap()])).unwrap();
        let options = options_for(&parsed).unwrap();
        convert_file(&path, parsed.command, options, false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# caf\u{e9}\r\nk=caf\\u00E9\r\n"
        );

        convert_file(&path, Command::AsciiToNative, options, false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# caf\u{e9}\r\nk=caf\u{e9}\r\n"
        );
    }

    #[test]
    fn failed_decode_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.properties");
        fs::write(&path, "k=\\uZZZZ").unwrap();

        let err = convert_file(&path, Command::AsciiToNative, Default::default(), false)
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid character 'Z'"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "k=\\uZZZZ");
    }
}
