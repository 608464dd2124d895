// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Push-command classifier.
//!
//! Recognizes a single leading `git push` invocation on a completed
//! command line. The grammar is deliberately narrow: an optional `&`
//! conjunction prefix, then an executable reference naming `git` (bare,
//! path-qualified, or quoted), then the `push` subcommand. A push buried
//! later in a compound command (`cd foo && git push`) does not match.

/// Returns true when the command line is a leading `git push` invocation.
///
/// Accepted executable references:
/// - bare `git` / `git.exe`, any case
/// - a path-qualified token whose final segment (after `/` or `\`) is
///   `git` / `git.exe`
/// - a single- or double-quoted token whose content satisfies either of
///   the above
///
/// The subcommand must be the literal `push` (any case), terminated by
/// whitespace or end of string — `pushx` and `push;` do not match.
pub fn is_push_command(command_line: &str) -> bool {
    let line = strip_conjunction(command_line.trim());
    match strip_git_executable(line) {
        Some(rest) => subcommand_is_push(rest),
        None => false,
    }
}

/// Strip a leading `&` conjunction token. The `&` must be followed by
/// whitespace to count as a token of its own; `&git` is not a prefix.
fn strip_conjunction(line: &str) -> &str {
    match line.strip_prefix('&') {
        Some(rest) if rest.starts_with(|c: char| c.is_whitespace()) => rest.trim_start(),
        _ => line,
    }
}

/// Consume an executable reference naming git, returning the remainder
/// of the line after it.
fn strip_git_executable(line: &str) -> Option<&str> {
    let first = line.chars().next()?;
    if first == '"' || first == '\'' {
        // Quoted reference: content between matching quotes names git.
        let body = &line[1..];
        let close = body.find(first)?;
        if !names_git(executable_name(&body[..close])?) {
            return None;
        }
        Some(&body[close + 1..])
    } else {
        let end = line.find(char::is_whitespace).unwrap_or(line.len());
        let token = &line[..end];
        if token.contains(['"', '\'']) || !names_git(executable_name(token)?) {
            return None;
        }
        Some(&line[end..])
    }
}

/// Final path segment of an executable reference
/// (`C:\tools\git.exe` -> `git.exe`). A separator with nothing before it
/// is not a path qualification.
fn executable_name(token: &str) -> Option<&str> {
    match token.rfind(['/', '\\']) {
        Some(0) => None,
        Some(idx) => Some(&token[idx + 1..]),
        None => Some(token),
    }
}

fn names_git(name: &str) -> bool {
    name.eq_ignore_ascii_case("git") || name.eq_ignore_ascii_case("git.exe")
}

/// The remainder after the executable must be whitespace, `push`, then
/// whitespace or end of string.
fn subcommand_is_push(rest: &str) -> bool {
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return false;
    }
    let rest = rest.trim_start();
    match strip_prefix_ignore_case(rest, "push") {
        Some(tail) => tail.is_empty() || tail.starts_with(|c: char| c.is_whitespace()),
        None => false,
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
