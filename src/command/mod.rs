use brush_parser::ast;

/// Error returned when a command-line string cannot be split into tokens.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// brush-parser rejected the input.
    #[error("cannot parse command line: {0}")]
    Syntax(String),
    /// The input parsed, but is more than one plain command
    /// (pipes, `;`, `&`, `&&`, subshells, redirections, leading assignments).
    #[error("command line must be a single simple command: {0}")]
    NotSimple(String),
    /// The input uses `$'...'` ANSI-C quoting, which is not supported.
    #[error("ANSI-C quoting ($'...') is not supported: {0}")]
    AnsiCQuoting(String),
}

/// Split a shell-like command-line string into raw tokens.
///
/// Uses brush-parser so quoting and escaping behave as in a shell:
/// `-name="two words" -x` yields `["-name=two words", "-x"]`. Quotes are
/// removed; no expansion (`$VAR`, globs, `~`) is performed.
///
/// After the first word, `name=value` words are ordinary tokens. A leading
/// `NAME=value` is a shell assignment and is rejected.
///
/// Empty or all-whitespace input yields no tokens.
pub fn split(line: &str) -> Result<Vec<String>, SplitError> {
    if line.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = brush_parser::Parser::builder()
        .reader(std::io::Cursor::new(line.to_string()))
        .build();

    let program = parser
        .parse_program()
        .map_err(|e| SplitError::Syntax(e.to_string()))?;

    let simple = single_simple_command(&program).ok_or_else(|| not_simple(line))?;

    let mut raw_words = Vec::new();
    if let Some(prefix) = &simple.prefix {
        collect_words(&prefix.0, false, &mut raw_words).ok_or_else(|| not_simple(line))?;
    }
    if let Some(word) = &simple.word_or_name {
        raw_words.push(word.flatten());
    }
    if let Some(suffix) = &simple.suffix {
        collect_words(&suffix.0, true, &mut raw_words).ok_or_else(|| not_simple(line))?;
    }

    let tokens = raw_words
        .iter()
        .map(|raw| unquote(raw).ok_or_else(|| SplitError::AnsiCQuoting(line.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(tokens = tokens.len(), "split command line");
    Ok(tokens)
}

fn not_simple(line: &str) -> SplitError {
    SplitError::NotSimple(line.to_string())
}

/// The only simple command of the program, if it has exactly one and it
/// runs in the foreground.
fn single_simple_command(program: &ast::Program) -> Option<&ast::SimpleCommand> {
    // CompleteCommand = CompoundList, CompoundList.0 = Vec<CompoundListItem>
    let mut items = program
        .complete_commands
        .iter()
        .flat_map(|complete_command| complete_command.0.iter());
    let item = items.next()?;
    if items.next().is_some() {
        return None;
    }
    if matches!(item.1, ast::SeparatorOperator::Async) {
        return None;
    }

    let and_or = &item.0;
    if !and_or.additional.is_empty() || and_or.first.seq.len() != 1 {
        return None;
    }
    match &and_or.first.seq[0] {
        ast::Command::Simple(simple) => Some(simple),
        _ => None,
    }
}

/// Append the raw text of every word item.
///
/// `name=value` words count as words only when `assignments_are_words`;
/// any other item (redirection, process substitution) yields `None`.
fn collect_words(
    items: &[ast::CommandPrefixOrSuffixItem],
    assignments_are_words: bool,
    words: &mut Vec<String>,
) -> Option<()> {
    for item in items {
        match item {
            ast::CommandPrefixOrSuffixItem::Word(word) => words.push(word.flatten()),
            ast::CommandPrefixOrSuffixItem::AssignmentWord(_, word) if assignments_are_words => {
                words.push(word.flatten());
            }
            _ => return None,
        }
    }
    Some(())
}

/// Shell quote removal.
///
/// brush-parser keeps words as raw text including quotes. Single quotes
/// are literal, double quotes allow `\"`, `\\`, `\$` and `` \` `` escapes,
/// and an unquoted backslash escapes the next character.
///
/// Returns `None` for an unquoted `$'`, which starts ANSI-C quoting.
fn unquote(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;

    while let Some(c) = chars.next() {
        match c {
            '$' if !in_single && !in_double && chars.peek() == Some(&'\'') => return None,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '\\' if in_single => out.push(c),
            '\\' if in_double => match chars.next() {
                Some(next @ ('"' | '\\' | '$' | '`')) => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}
