//! texttemplate CLI - Main entry point

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use texttemplate::{Environment, Template};

#[derive(Parser, Debug)]
#[command(name = "texttemplate")]
#[command(version)]
#[command(about = "Render a text template", long_about = None)]
struct Cli {
    /// Template file (use '-' for stdin), or the template text with --inline
    template: String,

    /// Values bound to ${0}, ${1}, ... in order
    values: Vec<String>,

    /// Treat TEMPLATE as the template text instead of a path
    #[arg(short = 'e', long)]
    inline: bool,

    /// Named binding (KEY=VALUE), applied after positional values
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    defines: Vec<String>,

    /// JSON object of bindings, applied before everything else
    #[arg(long, value_name = "FILE")]
    env_file: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the compiled expressions instead of evaluating
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "texttemplate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Produce the command's output text.
fn run(cli: &Cli) -> Result<String> {
    let template = Template::new(read_template(cli)?);

    if cli.dump {
        return Ok(template
            .expressions()
            .iter()
            .map(|expr| format!("{expr}\n"))
            .collect());
    }

    let env = build_environment(cli)?;
    debug!(bindings = env.len(), "Evaluating template");
    Ok(template.evaluate(&env))
}

fn read_template(cli: &Cli) -> Result<String> {
    if cli.inline {
        return Ok(cli.template.clone());
    }

    if cli.template == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read template from stdin")?;
        return Ok(source);
    }

    let path = Path::new(&cli.template);
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))
}

/// Layer bindings: env file, then positional values, then `--define`.
fn build_environment(cli: &Cli) -> Result<Environment> {
    let mut env = match &cli.env_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read env file {}", path.display()))?;
            Environment::from_json_str(&text)
                .with_context(|| format!("Invalid env file {}", path.display()))?
        }
        None => Environment::new(),
    };

    env.extend(Environment::from_positional(cli.values.iter().cloned()).iter());

    for define in &cli.defines {
        let (key, value) = parse_define(define)?;
        env.insert(key, value);
    }
    Ok(env)
}

/// Split `KEY=VALUE` at the first `=`.
fn parse_define(define: &str) -> Result<(&str, &str)> {
    match define.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid --define '{}': expected KEY=VALUE", define),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("texttemplate").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_inline_template_with_positional_values() {
        let cli = parse(&["-e", "${0}-${1}", "a", "b"]);
        assert_eq!(run(&cli).unwrap(), "a-b");
    }

    #[test]
    fn test_defines_override_positional() {
        let cli = parse(&["-D", "0=override", "-D", "name=x=y", "-e", "${0} ${name}", "a"]);
        assert_eq!(run(&cli).unwrap(), "override x=y");
    }

    #[test]
    fn test_positional_values_may_start_with_hyphen() {
        let cli = parse(&["-e", "[${0}]", "--", "-5"]);
        assert_eq!(run(&cli).unwrap(), "[-5]");
    }

    #[test]
    fn test_invalid_define_is_an_error() {
        let cli = parse(&["-D", "novalue", "-e", "x"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }

    #[test]
    fn test_template_file_and_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("t.template");
        let env_file = dir.path().join("env.json");
        std::fs::write(&template, "${who} has ${count} items#{ note }").unwrap();
        std::fs::write(&env_file, r#"{"who": "Ada", "count": 3}"#).unwrap();

        let cli = parse(&[
            "--env-file",
            env_file.to_str().unwrap(),
            "-D",
            "count=4",
            template.to_str().unwrap(),
        ]);
        assert_eq!(run(&cli).unwrap(), "Ada has 4 items");
    }

    #[test]
    fn test_env_file_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join("env.json");
        std::fs::write(&env_file, "[1, 2]").unwrap();

        let cli = parse(&["--env-file", env_file.to_str().unwrap(), "-e", "x"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("must be a JSON object"));
    }

    #[test]
    fn test_missing_template_file() {
        let cli = parse(&["/nonexistent/path/t.template"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read template"));
    }

    #[test]
    fn test_dump_prints_expressions() {
        let cli = parse(&["--dump", "-e", "a${b}#{c}"]);
        assert_eq!(
            run(&cli).unwrap(),
            "Literal(\"a\")\nVariable(\"b\")\nLiteral(\"\")\nComment(\"\")\nLiteral(\"\")\n"
        );
    }

    #[test]
    fn test_template_required() {
        assert!(Cli::try_parse_from(["texttemplate"]).is_err());
    }
}
