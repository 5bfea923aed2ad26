// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path mini-language parser

use crate::error::{ParseWarning, WaymarkError, WaymarkResult};
use crate::geometry::path::{Path, PathCommand, PathSegment};
use crate::types::Vec2;
use smallvec::SmallVec;

/// Parse result: the resolved path plus any skipped-token diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedPath {
    /// Resolved command sequence
    pub path: Path,
    /// One entry per skipped token, in source order
    pub warnings: Vec<ParseWarning>,
}

/// A raw token and its byte offset in the source string.
type Token<'a> = (&'a str, usize);

fn tokenize(input: &str) -> SmallVec<[Token<'_>; 32]> {
    let mut tokens = SmallVec::new();
    let mut start: Option<usize> = None;
    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == ',' {
            if let Some(s) = start.take() {
                tokens.push((&input[s..i], s));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((&input[s..], s));
    }
    tokens
}

struct Coords<'a> {
    tokens: &'a [Token<'a>],
    index: usize,
}

impl<'a> Coords<'a> {
    fn scalar(&mut self, command_pos: usize) -> WaymarkResult<f64> {
        let Some(&(tok, pos)) = self.tokens.get(self.index) else {
            return Err(WaymarkError::malformed(
                "missing coordinate",
                command_pos,
            ));
        };
        self.index += 1;
        let value: f64 = tok
            .parse()
            .map_err(|_| WaymarkError::malformed(format!("bad number `{tok}`"), pos))?;
        if !value.is_finite() {
            return Err(WaymarkError::malformed(
                format!("non-finite coordinate `{tok}`"),
                pos,
            ));
        }
        Ok(value)
    }

    fn pair(&mut self, command_pos: usize) -> WaymarkResult<Vec2> {
        let x = self.scalar(command_pos)?;
        let y = self.scalar(command_pos)?;
        Ok(Vec2::new(x, y))
    }
}

/// Parse a path string in the `M L H V C Q` grammar subset.
///
/// Uppercase letters are absolute, lowercase relative; numbers may be
/// separated by whitespace or commas. Coordinates are resolved to absolute
/// space against a running cursor. Each command letter consumes exactly one
/// coordinate group; any token that is not a recognized command where one
/// is expected is skipped and reported as a [`ParseWarning`]. Tokens that
/// fail to read as finite numbers abort the parse with
/// [`WaymarkError::MalformedPath`].
pub fn parse_path(input: &str) -> WaymarkResult<ParsedPath> {
    let tokens = tokenize(input);
    let mut coords = Coords {
        tokens: &tokens,
        index: 0,
    };
    let mut parsed = ParsedPath::default();
    let mut cursor = Vec2::default();

    while coords.index < coords.tokens.len() {
        let (tok, pos) = coords.tokens[coords.index];
        coords.index += 1;

        let mut chars = tok.chars();
        let letter = chars.next().unwrap_or(' ');
        if chars.next().is_some() || !letter.is_ascii_alphabetic() {
            skip_token(&mut parsed.warnings, letter, pos);
            continue;
        }
        let relative = letter.is_ascii_lowercase();
        let resolve = |p: Vec2| {
            if relative {
                Vec2::new(cursor.x + p.x, cursor.y + p.y)
            } else {
                p
            }
        };

        let segment = match letter.to_ascii_uppercase() {
            'M' => PathSegment::Move {
                to: resolve(coords.pair(pos)?),
            },
            'L' => PathSegment::Line {
                to: resolve(coords.pair(pos)?),
            },
            'H' => {
                let v = coords.scalar(pos)?;
                PathSegment::HorizontalLine {
                    x: if relative { cursor.x + v } else { v },
                }
            }
            'V' => {
                let v = coords.scalar(pos)?;
                PathSegment::VerticalLine {
                    y: if relative { cursor.y + v } else { v },
                }
            }
            'C' => {
                let cp1 = resolve(coords.pair(pos)?);
                let cp2 = resolve(coords.pair(pos)?);
                let to = resolve(coords.pair(pos)?);
                PathSegment::CubicBezier { cp1, cp2, to }
            }
            'Q' => {
                let cp = resolve(coords.pair(pos)?);
                let to = resolve(coords.pair(pos)?);
                PathSegment::QuadraticBezier { cp, to }
            }
            _ => {
                skip_token(&mut parsed.warnings, letter, pos);
                continue;
            }
        };

        cursor = segment.end_point(cursor);
        parsed.path.push(PathCommand { segment, relative });
    }

    Ok(parsed)
}

fn skip_token(warnings: &mut Vec<ParseWarning>, command: char, position: usize) {
    tracing::warn!(%command, position, "skipping unrecognized path token");
    warnings.push(ParseWarning { command, position });
}
