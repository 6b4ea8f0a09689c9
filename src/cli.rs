use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use infixtree::{Evaluator, LatexPrinter, PrettyPrinter, parse};
use log::info;

/// Sample expression used when none is given on the command line
pub const DEFAULT_EXPRESSION: &str = "3+4*2";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Infixtree - evaluate and pretty-print flat infix arithmetic
#[derive(Parser, Debug)]
#[command(name = "infixtree")]
#[command(about = "Parse a flat infix expression, then print its value and parenthesized form")]
#[command(version)]
pub struct CliArgs {
    /// Expression made of digits and + - * / ^, with no spaces or parentheses
    #[arg(default_value = DEFAULT_EXPRESSION)]
    pub expression: String,

    /// Also print the expression as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expression: String,
    pub latex: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            expression: args.expression,
            latex: args.latex,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Render the lines the driver prints for `config`
pub fn render_output(config: &CliConfig) -> Result<Vec<String>> {
    let expr = parse(&config.expression)
        .with_context(|| format!("Invalid expression '{}'", config.expression))?;

    let value = Evaluator::evaluate(&expr).context("Failed to evaluate expression")?;
    let mut lines = vec![value.to_string(), String::new(), PrettyPrinter::render(&expr)];

    if config.latex {
        let latex = LatexPrinter::render(&expr).context("Failed to render LaTeX")?;
        lines.push(latex);
    }
    Ok(lines)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level);

    info!("Evaluating expression '{}'", config.expression);

    for line in render_output(&config)? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(expression: &str, latex: bool) -> CliConfig {
        CliConfig {
            expression: expression.to_string(),
            latex,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_render_output_default_expression() {
        let lines = render_output(&config(DEFAULT_EXPRESSION, false));
        assert!(lines.is_ok());
        if let Ok(lines) = lines {
            assert_eq!(lines, vec!["11", "", "((3)+((4)*(2)))"]);
        }
    }

    #[test]
    fn test_render_output_with_latex() {
        let lines = render_output(&config("2^3", true));
        assert!(lines.is_ok());
        if let Ok(lines) = lines {
            assert_eq!(lines, vec!["8", "", "((2)^(3))", "{2}^{3}"]);
        }
    }

    #[test]
    fn test_render_output_invalid_expression() {
        let result = render_output(&config("5+", false));
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.to_string(), "Invalid expression '5+'");
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["infixtree", "1+2", "--latex", "-l", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.expression, "1+2");
            assert!(args.latex);
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_args_default_expression() {
        let args = CliArgs::try_parse_from(["infixtree"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from(args);
            assert_eq!(config.expression, DEFAULT_EXPRESSION);
            assert!(!config.latex);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
