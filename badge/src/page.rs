/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Splices a markup fragment into an existing page. The page is only
//! ever grown: the fragment is appended as the last child of the target
//! element, so running an update twice leaves two fragments.

use crate::BadgeError;

/// Append `fragment` directly before the closing tag of the element
/// carrying `id`, i.e. as its last child.
///
/// Only `id="..."` and `id='...'` spellings are recognized; nesting of
/// same-named elements is tracked so the fragment lands inside the
/// target, not inside a child.
pub fn append_to_element(html: &str, id: &str, fragment: &str) -> Result<String, BadgeError> {
    let target = find_target(html, id).ok_or_else(|| BadgeError::TargetNotFound(id.to_string()))?;

    if target.self_closing {
        return Err(BadgeError::MalformedPage(id.to_string()));
    }

    let close_at = find_closing_tag(html, target.open_end + 1, &target.name)
        .ok_or_else(|| BadgeError::MalformedPage(id.to_string()))?;

    let mut out = String::with_capacity(html.len() + fragment.len());
    out.push_str(&html[..close_at]);
    out.push_str(fragment);
    out.push_str(&html[close_at..]);

    Ok(out)
}

struct Target {
    name: String,
    // index of the '>' ending the opening tag
    open_end: usize,
    self_closing: bool,
}

fn find_target(html: &str, id: &str) -> Option<Target> {
    for quote in ['"', '\''] {
        let needle = format!("id={quote}{id}{quote}");
        let mut from = 0;

        while let Some(found) = html[from..].find(&needle) {
            let at = from + found;
            from = at + 1;

            // a standalone attribute, inside an opening tag
            if at == 0 || !html.as_bytes()[at - 1].is_ascii_whitespace() {
                continue;
            }
            let lt = match html[..at].rfind('<') {
                Some(lt) => lt,
                None => continue,
            };
            if html[lt..at].contains('>') {
                continue;
            }

            let name: String = html[lt + 1..at]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect();
            if name.is_empty() {
                continue;
            }

            let open_end = match html[at..].find('>') {
                Some(gt) => at + gt,
                None => continue,
            };

            return Some(Target {
                name,
                open_end,
                self_closing: html[..open_end].ends_with('/'),
            });
        }
    }

    None
}

fn find_closing_tag(html: &str, start: usize, name: &str) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let name = name.to_ascii_lowercase();
    let open = format!("<{name}");
    let close = format!("</{name}");

    let mut depth = 1usize;
    let mut i = start;

    loop {
        let lt = i + lower.get(i..)?.find('<')?;
        let rest = &lower[lt..];

        if rest.starts_with(&close) && !continues_name(rest.as_bytes().get(close.len())) {
            depth -= 1;
            if depth == 0 {
                return Some(lt);
            }
            i = lt + close.len();
        } else if rest.starts_with(&open) && !continues_name(rest.as_bytes().get(open.len())) {
            let gt = lt + rest.find('>')?;
            if !lower[..gt].ends_with('/') {
                depth += 1;
            }
            i = gt + 1;
        } else {
            i = lt + 1;
        }
    }
}

fn continues_name(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b) if b.is_ascii_alphanumeric() || *b == b'-')
}
