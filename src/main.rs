use clap::Parser;
use ghost2hugo::{Config, Error, PostProcessor};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Rewrites a Ghost post's HTML the way the Hugo export does.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Exporter config file (JSON); only the link and URL settings are used
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra link replacement, applied after the configured ones
    #[arg(long = "replace", value_name = "PATTERN=REPLACEMENT", value_parser = parse_replacement)]
    replacements: Vec<(String, String)>,

    /// Fail on img/a elements that cannot be decoded instead of dropping them
    #[arg(long)]
    strict: bool,

    /// Input HTML file, or "-" for stdin
    input: PathBuf,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

fn parse_replacement(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((pattern, replacement)) if !pattern.is_empty() => {
            Ok((pattern.to_string(), replacement.to_string()))
        }
        _ => Err(format!("expected PATTERN=REPLACEMENT, got '{arg}'")),
    }
}

/// `--replace` rules run after the configured ones and force substitution on.
fn apply_overrides(config: &mut Config, replacements: Vec<(String, String)>, strict: bool) {
    if !replacements.is_empty() {
        for (pattern, replacement) in replacements {
            config.link_replacements.push(pattern, replacement);
        }
        config.replace_links = Some(true);
    }
    config.strict_elements |= strict;
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, cli.replacements, cli.strict);

    let processor = PostProcessor::from_config(&config)?;
    let html = read_input(&cli.input)?;
    let out = processor.process(&html)?;

    log::info!(
        "rewrote {} ({} bytes in, {} bytes out, {} elements dropped)",
        cli.input.display(),
        html.len(),
        out.html.len(),
        out.diagnostics.len()
    );

    match &cli.output {
        Some(path) => fs::write(path, &out.html)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(out.html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
