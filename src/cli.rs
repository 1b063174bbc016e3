use std::io::Write;
use std::panic;
use std::process::exit;

use atty::Stream;
use clap::{Parser as CliParser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use chain_stack::demo::{self, Sections};
use chain_stack::report::{self, Reporter};

pub fn run() {
    let cli = Cli::parse();
    let mut context = Context::new(&cli);

    if let Err(error) = demo::run(&mut context.stdout, cli.sections(), context.reporter.clone()) {
        context.exit_with_error(format!("{:#}", error));
    }
}

/// Installs a panic hook that flags the crash as a bug before printing the
/// usual backtrace
pub fn setup_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let mut stderr = StandardStream::stderr(report::detect_color(Stream::Stderr));
        let mut red = ColorSpec::new();
        red.set_fg(Some(Color::Red));

        let _ = stderr.set_color(&red);
        let _ = writeln!(
            stderr,
            "Fatal internal error, this is a bug. Please report this to the developers"
        );
        let _ = stderr.reset();

        default_hook(info);
    }));
}

/// Walks through the linked list and stack operations, printing each result
#[derive(CliParser)]
#[clap(author, version, about)]
struct Cli {
    /// When to colour output
    #[clap(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Only run one part of the walkthrough
    #[clap(long, value_enum)]
    only: Option<Only>,
}

impl Cli {
    fn sections(&self) -> Sections {
        match self.only {
            None => Sections::All,
            Some(Only::List) => Sections::List,
            Some(Only::Stack) => Sections::Stack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self, stream: Stream) -> ColorChoice {
        match self {
            ColorMode::Auto => report::detect_color(stream),
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Only {
    List,
    Stack,
}

struct Context {
    stdout: StandardStream,
    stderr: StandardStream,
    reporter: Reporter,
}

impl Context {
    fn new(cli: &Cli) -> Self {
        let stderr_color = cli.color.choice(Stream::Stderr);

        Self {
            stdout: StandardStream::stdout(cli.color.choice(Stream::Stdout)),
            stderr: StandardStream::stderr(stderr_color),
            reporter: Reporter::stderr_with(stderr_color),
        }
    }

    /// Print an error message and exit
    fn exit_with_error(&mut self, message: impl AsRef<str>) -> ! {
        let _ = self.stdout.flush();

        let mut red = ColorSpec::new();
        red.set_fg(Some(Color::Red)).set_bold(true);

        let _ = self.stderr.set_color(&red);
        let _ = write!(self.stderr, "error: ");
        let _ = self.stderr.reset();
        let _ = writeln!(self.stderr, "{}", message.as_ref());

        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chain-stack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_runs_everything_with_auto_color() {
        let cli = parse(&[]);
        assert_eq!(cli.sections(), Sections::All);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn only_selects_one_section() {
        assert_eq!(parse(&["--only", "list"]).sections(), Sections::List);
        assert_eq!(parse(&["--only", "stack"]).sections(), Sections::Stack);
    }

    #[test]
    fn color_flag_maps_to_choice() {
        let always = parse(&["--color", "always"]);
        assert_eq!(always.color.choice(Stream::Stdout), ColorChoice::Always);

        let never = parse(&["--color", "never"]);
        assert_eq!(never.color.choice(Stream::Stderr), ColorChoice::Never);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(Cli::try_parse_from(["chain-stack", "--only", "queue"]).is_err());
        assert!(Cli::try_parse_from(["chain-stack", "--color", "sometimes"]).is_err());
    }
}
