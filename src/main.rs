// astview: print the parse tree of arithmetic expressions

use std::io::{self, Write};

use astview::parser::parse::Grammar;
use astview::pipeline::{analyze, Builder, GenerateError, Options};
use astview::ui::App;
use clap::Parser as ClapParser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Expressions shown when none are given on the command line
const SAMPLES: [&str; 3] = ["1 + 2 * 3", "(1 + 2) * 3", "12 + (3 * 4) - 5"];

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expressions to render; built-in samples are used when none are given
    expressions: Vec<String>,

    /// Tree builder to use
    #[arg(short, long, value_enum, default_value_t = Builder::Scan)]
    builder: Builder,

    /// Accept '-' and '/' in addition to '+' and '*' (descent builder)
    #[arg(long)]
    all_operators: bool,

    /// Also print the token sequence of each expression
    #[arg(long)]
    tokens: bool,

    /// Open the interactive viewer on a single expression
    #[arg(long)]
    tui: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            builder: self.builder,
            grammar: if self.all_operators {
                Grammar::Full
            } else {
                Grammar::Basic
            },
        }
    }

    /// The expression the viewer opens with: the one given, or the first sample.
    fn viewer_input(&self) -> Result<String, String> {
        match self.expressions.as_slice() {
            [] => Ok(SAMPLES[0].to_string()),
            [expression] => Ok(expression.clone()),
            more => Err(format!(
                "--tui opens a single expression, got {}",
                more.len()
            )),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let options = args.options();

    if args.tui {
        return run_viewer(args.viewer_input()?, options);
    }

    let expressions: Vec<String> = if args.expressions.is_empty() {
        SAMPLES.iter().map(|s| s.to_string()).collect()
    } else {
        args.expressions
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for (idx, expression) in expressions.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "AST for '{}':", expression)?;

        match analyze(expression, &options).write(&mut out, args.tokens) {
            Ok(()) => {}
            Err(GenerateError::Parse(e)) => {
                out.flush()?;
                eprintln!("{}", e);
                failed = true;
            }
            Err(GenerateError::Io(e)) => return Err(e.into()),
        }
    }

    if failed {
        out.flush()?;
        std::process::exit(1);
    }

    Ok(())
}

fn run_viewer(expression: String, options: Options) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(expression, options);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("astview").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_scan_builder_by_default() {
        assert_eq!(args(&[]).options(), Options::default());
        assert_eq!(args(&["-b", "descent"]).options().builder, Builder::Descent);
        assert_eq!(args(&["--all-operators"]).options().grammar, Grammar::Full);
    }

    #[test]
    fn test_viewer_takes_one_expression() {
        assert_eq!(args(&["--tui"]).viewer_input().unwrap(), SAMPLES[0]);
        assert_eq!(args(&["--tui", "4 * 2"]).viewer_input().unwrap(), "4 * 2");
        assert!(args(&["--tui", "1", "2"]).viewer_input().is_err());
    }
}
