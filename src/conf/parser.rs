//! Line-reduction parser for `.conf` files.
//!
//! The parser is a fold over physical lines with one explicit [`State`]. List
//! and object blocks remember the [`Scope`] they were opened in so that control
//! returns there when the block closes. Parsing never fails: unrecognized lines
//! are dropped and blocks left open at end of input are flushed as entries.

use super::braces::BraceCounter;
use super::classify::{LineKind, ListLine, classify, classify_list_line, is_wrapper_open};
use super::model::ConfigEntry;

/// Where a line outside any block lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    /// Inside the `overrides { }` wrapper, with the wrapper's own brace balance.
    Overrides(BraceCounter),
}

#[derive(Debug)]
enum State {
    Idle(Scope),
    List {
        scope: Scope,
        key: String,
        items: Vec<String>,
    },
    Object {
        scope: Scope,
        key: String,
        lines: Vec<String>,
        braces: BraceCounter,
        commented: bool,
    },
}

/// Parse `.conf` text into entries in order of first appearance.
pub fn parse(text: &str) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();
    let last = text
        .lines()
        .fold(State::Idle(Scope::TopLevel), |state, line| {
            step(state, line, &mut entries)
        });
    finish(last, &mut entries);

    tracing::debug!(entries = entries.len(), "parsed configuration text");
    entries
}

fn step(state: State, line: &str, entries: &mut Vec<ConfigEntry>) -> State {
    match state {
        State::List {
            scope,
            key,
            mut items,
        } => match classify_list_line(line) {
            ListLine::Close => {
                entries.push(ConfigEntry::list(key, items));
                State::Idle(scope)
            }
            ListLine::Item(item) => {
                items.push(item);
                State::List { scope, key, items }
            }
            ListLine::Skip => State::List { scope, key, items },
        },
        State::Object {
            scope,
            key,
            mut lines,
            mut braces,
            commented,
        } => {
            lines.push(line.to_string());
            braces.feed(line);
            if braces.closes_block(line) {
                entries.push(ConfigEntry::object(key, lines.join("\n"), commented));
                State::Idle(scope)
            } else {
                State::Object {
                    scope,
                    key,
                    lines,
                    braces,
                    commented,
                }
            }
        }
        State::Idle(scope) => step_idle(scope, line, entries),
    }
}

fn step_idle(scope: Scope, line: &str, entries: &mut Vec<ConfigEntry>) -> State {
    let kind = classify(line);
    if kind == LineKind::Blank {
        return State::Idle(scope);
    }

    let scope = match scope {
        Scope::TopLevel if is_wrapper_open(line.trim()) => {
            return State::Idle(Scope::Overrides(BraceCounter::opened()));
        }
        Scope::TopLevel => Scope::TopLevel,
        // Object blocks track their own braces, so their opening line is not
        // counted against the wrapper.
        Scope::Overrides(braces) if matches!(kind, LineKind::ObjectOpen { .. }) => {
            Scope::Overrides(braces)
        }
        Scope::Overrides(mut braces) => {
            braces.feed(line);
            if braces.balance() == 0 && line.trim() == "}" {
                return State::Idle(Scope::TopLevel);
            }
            Scope::Overrides(braces)
        }
    };

    match kind {
        LineKind::ObjectOpen { key, commented } => {
            let braces = BraceCounter::from_line(line);
            if braces.closes_block(line) {
                entries.push(ConfigEntry::object(key, line, commented));
                State::Idle(scope)
            } else {
                State::Object {
                    scope,
                    key: key.to_string(),
                    lines: vec![line.to_string()],
                    braces,
                    commented,
                }
            }
        }
        LineKind::ListOpen { key } => State::List {
            scope,
            key: key.to_string(),
            items: Vec::new(),
        },
        LineKind::InlineList { key, items } => {
            entries.push(ConfigEntry::list(key, items));
            State::Idle(scope)
        }
        LineKind::KeyValue {
            key,
            value,
            commented,
        } => {
            entries.push(ConfigEntry::scalar(key, value, commented));
            State::Idle(scope)
        }
        LineKind::Blank | LineKind::Comment | LineKind::Unrecognized => State::Idle(scope),
    }
}

/// Flush a block left open by truncated input.
fn finish(state: State, entries: &mut Vec<ConfigEntry>) {
    match state {
        State::List { key, items, .. } => entries.push(ConfigEntry::list(key, items)),
        State::Object {
            key,
            lines,
            commented,
            ..
        } => entries.push(ConfigEntry::object(key, lines.join("\n"), commented)),
        State::Idle(_) => {}
    }
}
