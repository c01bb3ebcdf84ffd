//! Outline descriptions and their structured command form.
//!
//! An outline description is SVG-path-like text restricted to move (`M`), line (`L`),
//! quadratic curve (`Q`) and close (`Z`) commands. [`Outline::parse`] turns it into a list of
//! [`DrawCommand`]s that remember their undisplaced operands, and [`Outline::serialize`] writes
//! the current operands back out in the canonical compact form `M10,20L30,40Z`.

use std::fmt;

use smallvec::SmallVec;

use crate::foundation::core::{BezPath, Point, Rect};

/// Operand storage; no command carries more than four values.
pub type Operands = SmallVec<[f64; 4]>;

/// Kind of a draw command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandTag {
    MoveTo,
    LineTo,
    QuadTo,
    Close,
}

impl CommandTag {
    /// Decode a command letter. Lowercase letters are the relative variants.
    pub fn from_letter(c: char) -> Option<(Self, bool)> {
        let tag = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'Q' => Self::QuadTo,
            'Z' => Self::Close,
            _ => return None,
        };
        Some((tag, c.is_ascii_lowercase()))
    }

    pub fn letter(self, relative: bool) -> char {
        let c = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::QuadTo => 'Q',
            Self::Close => 'Z',
        };
        if relative { c.to_ascii_lowercase() } else { c }
    }

    /// Number of operands a well-formed command of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 2,
            Self::QuadTo => 4,
            Self::Close => 0,
        }
    }
}

/// One outline instruction with its current and reference operands.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub tag: CommandTag,
    /// Lowercase (relative) form. Outlines produced by this crate are always absolute.
    pub relative: bool,
    /// Displayed operands, rewritten every animation tick.
    pub current: Operands,
    /// Undisplaced operands captured at parse time.
    pub base: Operands,
}

impl DrawCommand {
    /// Build an absolute command whose current and base operands start out equal.
    pub fn new(tag: CommandTag, operands: &[f64]) -> Self {
        let ops: Operands = operands.iter().copied().collect();
        Self {
            tag,
            relative: false,
            current: ops.clone(),
            base: ops,
        }
    }

    pub fn close() -> Self {
        Self::new(CommandTag::Close, &[])
    }

    pub fn is_close(&self) -> bool {
        self.tag == CommandTag::Close
    }

    /// `true` when both operand lists have the arity the tag expects.
    pub fn is_well_formed(&self) -> bool {
        let n = self.tag.arity();
        self.current.len() == n && self.base.len() == n
    }

    /// Copy of this command with its displayed operands replaced.
    pub fn with_current(&self, current: Operands) -> Self {
        Self {
            tag: self.tag,
            relative: self.relative,
            current,
            base: self.base.clone(),
        }
    }

    fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        out.write_char(self.tag.letter(self.relative))?;
        for (i, v) in self.current.iter().enumerate() {
            if i > 0 {
                out.write_char(',')?;
            }
            write!(out, "{v}")?;
        }
        Ok(())
    }
}

/// Ordered list of draw commands forming one (possibly multi-subpath) shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    commands: Vec<DrawCommand>,
}

impl Outline {
    pub fn new(commands: Vec<DrawCommand>) -> Self {
        Self { commands }
    }

    /// Parse an outline description.
    ///
    /// Each command letter starts a new command and owns the operand run up to the next command
    /// letter. Operands are split on whitespace and commas; tokens that are not numbers are
    /// dropped and the rest of the description is still parsed. Characters that precede the
    /// first command letter are ignored.
    pub fn parse(description: &str) -> Self {
        let mut commands = Vec::new();
        let mut pending: Option<(CommandTag, bool, usize)> = None;

        for (idx, c) in description.char_indices() {
            let Some((tag, relative)) = CommandTag::from_letter(c) else {
                continue;
            };
            if let Some((prev, prev_rel, start)) = pending.take() {
                commands.push(command_from_run(prev, prev_rel, &description[start..idx]));
            }
            pending = Some((tag, relative, idx + c.len_utf8()));
        }
        if let Some((tag, relative, start)) = pending {
            commands.push(command_from_run(tag, relative, &description[start..]));
        }

        Self { commands }
    }

    /// Write the current operands back out as an outline description.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut [DrawCommand] {
        &mut self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths, i.e. move commands.
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| c.tag == CommandTag::MoveTo)
            .count()
    }

    /// Undisplaced copy: every command's current operands reset to its base operands.
    pub fn at_rest(&self) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|c| c.with_current(c.base.clone()))
                .collect(),
        }
    }

    /// Convert the current geometry to a `kurbo` path, resolving relative commands.
    ///
    /// Commands with the wrong number of operands are skipped.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut pen = Point::ZERO;
        let mut start = Point::ZERO;
        let mut open = false;

        for cmd in &self.commands {
            if cmd.current.len() != cmd.tag.arity() {
                continue;
            }
            let offset = if cmd.relative { pen.to_vec2() } else { kurbo::Vec2::ZERO };
            let pt = |i: usize| Point::new(cmd.current[i], cmd.current[i + 1]) + offset;
            match cmd.tag {
                CommandTag::MoveTo => {
                    pen = pt(0);
                    start = pen;
                    path.move_to(pen);
                    open = true;
                }
                CommandTag::LineTo => {
                    pen = pt(0);
                    if !open {
                        path.move_to(start);
                        open = true;
                    }
                    path.line_to(pen);
                }
                CommandTag::QuadTo => {
                    let ctrl = pt(0);
                    pen = pt(2);
                    if !open {
                        path.move_to(start);
                        open = true;
                    }
                    path.quad_to(ctrl, pen);
                }
                CommandTag::Close => {
                    if open {
                        path.close_path();
                    }
                    pen = start;
                    open = false;
                }
            }
        }
        path
    }

    /// Control-point bounding box of the current geometry, `None` when nothing is drawn.
    pub fn bounds(&self) -> Option<Rect> {
        let path = self.to_bez_path();
        if path.elements().is_empty() {
            return None;
        }
        Some(kurbo::Shape::bounding_box(&path))
    }
}

fn command_from_run(tag: CommandTag, relative: bool, run: &str) -> DrawCommand {
    let ops: Operands = run
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect();
    DrawCommand {
        tag,
        relative,
        current: ops.clone(),
        base: ops,
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            cmd.write_to(f)?;
        }
        Ok(())
    }
}

impl From<&str> for Outline {
    fn from(description: &str) -> Self {
        Self::parse(description)
    }
}

impl FromIterator<DrawCommand> for Outline {
    fn from_iter<I: IntoIterator<Item = DrawCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline.rs"]
mod tests;
