mod cli;
mod error;

use clap::Parser;
use cli::{Cli, Command};
use error::Error;
use formsim_compute::{
    extract_display_math,
    find_common_spans_with,
    rank,
    similarity_percent_with,
    symbolic::{LatexNormalizer, Normalizer},
    Formula,
    MatchOptions,
};
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};
use serde::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{fs, ops::Range, path::Path, process::ExitCode};

/// A formula library file: a list of `[[formula]]` tables.
#[derive(Debug, Deserialize)]
struct Library {
    #[serde(default, rename = "formula")]
    formulas: Vec<Formula>,
}

/// Reads a formula library from the given TOML file.
fn read_library(path: &Path) -> Result<Vec<Formula>, Error> {
    let text = fs::read_to_string(path).map_err(|err| Error::Io(path.to_owned(), err))?;
    let library = toml::from_str::<Library>(&text)
        .map_err(|err| Error::Library(path.to_owned(), err))?;
    Ok(library.formulas)
}

/// Returns the part of `source` covered by the character span.
fn highlight(source: &str, span: &Range<usize>) -> String {
    source.chars().skip(span.start).take(span.end - span.start).collect()
}

/// Packages an error of comparing `a` and `b` with the formula it points into.
fn formula_error(a: &str, b: &str, options: &MatchOptions, err: formsim_error::Error) -> Error {
    let fails = |input: &str| {
        options.exceeds_limit(input) || LatexNormalizer.normalize(input).is_err()
    };
    let (id, source) = if fails(a) { ("a", a) } else { ("b", b) };
    Error::Formula { id, source: source.to_owned(), err }
}

/// Prints the similarity of the two formulas.
fn compare(a: &str, b: &str, options: &MatchOptions) -> Result<(), Error> {
    let score = similarity_percent_with(a, b, options)
        .map_err(|err| formula_error(a, b, options, err))?;
    println!("{:.2}%", score);
    Ok(())
}

/// Prints the spans of `a` shared with `b`, with the text they cover.
fn spans(a: &str, b: &str, options: &MatchOptions) {
    let spans = find_common_spans_with(a, b, options);
    if spans.is_empty() {
        println!("no shared subexpressions");
    }
    for span in spans {
        println!("{:>4}..{:<4} {}", span.start, span.end, highlight(a, &span));
    }
}

/// Prints the formulas of the library ranked against the query.
fn search(query: &str, library: &Path, limit: usize, options: &MatchOptions) -> Result<(), Error> {
    let formulas = read_library(library)?;
    info!("loaded {} formulas from `{}`", formulas.len(), library.display());

    let matches = rank(query, &formulas, options).map_err(|err| Error::Formula {
        id: "query",
        source: query.to_owned(),
        err,
    })?;
    for m in matches.into_iter().take(limit) {
        println!("{:>6.2}%  {}  {}", m.score, m.formula.name, m.formula.latex);
        for span in &m.spans {
            println!("         shares `{}`", highlight(&m.formula.latex, span));
        }
    }
    Ok(())
}

/// Prints the display-math formulas found in the file.
fn extract(file: &Path, context: bool) -> Result<(), Error> {
    let text = fs::read_to_string(file).map_err(|err| Error::Io(file.to_owned(), err))?;
    for found in extract_display_math(&text) {
        println!("{:>6}..{:<6} {}", found.span.start, found.span.end, found.latex.trim());
        if context {
            println!("{}\n", found.context);
        }
    }
    Ok(())
}

/// Runs the interactive prompt, reading two formulas per comparison.
fn interactive(options: &MatchOptions) {
    let Ok(mut rl) = DefaultEditor::new() else {
        eprintln!("error: could not start the interactive prompt");
        return;
    };

    fn process_pair(rl: &mut DefaultEditor, options: &MatchOptions) -> Result<(), ReadlineError> {
        let a = rl.readline("a> ")?;
        if a.trim().is_empty() {
            return Ok(());
        }
        rl.add_history_entry(&a)?;

        let b = rl.readline("b> ")?;
        if b.trim().is_empty() {
            return Ok(());
        }
        rl.add_history_entry(&b)?;

        if let Err(err) = compare(&a, &b, options) {
            err.report_to_stderr();
        }
        spans(&a, &b, options);
        Ok(())
    }

    loop {
        if let Err(err) = process_pair(&mut rl, options) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = TermLogger::init(
        cli.global.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not start logging: {}", err);
    }

    let options = cli.global.match_options();
    let result = match cli.command {
        Some(Command::Compare { a, b }) => compare(&a, &b, &options),
        Some(Command::Spans { a, b }) => {
            spans(&a, &b, &options);
            Ok(())
        },
        Some(Command::Search { query, library, limit }) => search(&query, &library, limit, &options),
        Some(Command::Extract { file, context }) => extract(&file, context),
        None => {
            interactive(&options);
            Ok(())
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr();
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn library_format() {
        let library = toml::from_str::<Library>(r#"
            [[formula]]
            name = "circle"
            latex = "x^2 + y^2 = r^2"

            [[formula]]
            id = 7
            name = "line"
            latex = "y = mx + b"
            description = "slope-intercept form"
        "#).unwrap();
        assert_eq!(library.formulas.len(), 2);
        assert_eq!(library.formulas[0].source, "");
        assert_eq!(library.formulas[1].id, Some(7));
    }

    #[test]
    fn highlight_counts_characters() {
        assert_eq!(highlight("α+β+γ", &(2..4)), "β+");
    }

    #[test]
    fn blames_the_broken_formula() {
        let options = MatchOptions::default();
        let err = similarity_percent_with("x + 1", "x^", &options).unwrap_err();
        match formula_error("x + 1", "x^", &options, err) {
            Error::Formula { id, source, .. } => {
                assert_eq!(id, "b");
                assert_eq!(source, "x^");
            },
            other => panic!("unexpected error: {}", other),
        }
    }
}
