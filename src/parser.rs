use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{Dir, Machine, Pos, MAX_SIZE};
use crate::level::{Level, LevelErr};

/// Number of free-text lines at the start of the sections format
const HEADER_LINES: usize = 2;

#[derive(Debug, PartialEq)]
pub enum ParserErr {
    Pos(usize, usize),
    LineLength(usize),
    TooLarge,
    Sections,
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::LineLength(l) => write!(f, "Wrong line length on line {}", l),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::Sections => write!(
                f,
                "Expected a {} line header, a target grid, a separator and a maze grid of the same height",
                HEADER_LINES
            ),
            ParserErr::Level(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.contains('|') {
        parse_format(level, Format::Sections)
    } else {
        parse_format(level, Format::Compact)
    }
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    match format {
        Format::Compact => parse_compact(level),
        Format::Sections => parse_sections(level),
    }
}

/// Everything the parsers collect before `Level` checks it.
#[derive(Default)]
struct Parsed {
    rows: usize,
    cols: usize,
    blocks: Vec<Pos>,
    targets: Vec<Pos>,
    boxes: Vec<Pos>,
    machines: Vec<Machine>,
}

impl Parsed {
    fn into_level(self) -> Result<Level, ParserErr> {
        Ok(Level::new(
            self.rows,
            self.cols,
            &self.blocks,
            self.targets,
            self.boxes,
            self.machines,
        )?)
    }
}

fn pos(r: usize, c: usize) -> Result<Pos, ParserErr> {
    if r >= MAX_SIZE || c >= MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }
    Ok(Pos::new(r as u8, c as u8))
}

/// One char per cell:
/// `#` block, `-` or space empty, `.` target, `$` box, `*` box on target,
/// `^ v < >` machine, `U D L R` machine on target.
fn parse_compact(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily,
    // spaces are cells so only line breaks go
    let level = level.trim_matches(|c| c == '\n' || c == '\r');

    let mut parsed = Parsed::default();
    for (r, line) in level.lines().enumerate() {
        let width = line.chars().count();
        if r == 0 {
            parsed.cols = width;
        } else if width != parsed.cols {
            return Err(ParserErr::LineLength(r));
        }
        parsed.rows += 1;

        for (c, cur_char) in line.chars().enumerate() {
            let pos = pos(r, c)?;
            match cur_char {
                '#' => parsed.blocks.push(pos),
                ' ' | '-' => {}
                '.' => parsed.targets.push(pos),
                '$' => parsed.boxes.push(pos),
                '*' => {
                    parsed.boxes.push(pos);
                    parsed.targets.push(pos);
                }
                _ => {
                    if let Some(dir) = Dir::from_arrow(cur_char) {
                        parsed.machines.push(Machine::new(pos, dir));
                    } else if let Some(dir) = Dir::from_letter(cur_char) {
                        parsed.machines.push(Machine::new(pos, dir));
                        parsed.targets.push(pos);
                    } else {
                        return Err(ParserErr::Pos(r, c));
                    }
                }
            }
        }
    }

    parsed.into_level()
}

/// The format used by the game's level files.
///
/// Two header lines, the target grid, a separator line and the maze grid.
/// Cells are at odd char indices, the chars in between are ignored.
/// In the target grid `T` is a target, everything else is ignored.
/// In the maze `@` is a block, `.` empty, `^ v < >` a machine and `T` a box.
fn parse_sections(level: &str) -> Result<Level, ParserErr> {
    let lines: Vec<_> = level.trim_end().lines().collect();
    if lines.len() < HEADER_LINES + 3 || (lines.len() - HEADER_LINES - 1) % 2 != 0 {
        return Err(ParserErr::Sections);
    }
    let rows = (lines.len() - HEADER_LINES - 1) / 2;
    let target_lines = &lines[HEADER_LINES..HEADER_LINES + rows];
    let maze_lines = &lines[HEADER_LINES + rows + 1..];

    let cols = target_lines[0].chars().count() / 2;
    if cols == 0 {
        return Err(ParserErr::LineLength(HEADER_LINES));
    }

    let mut parsed = Parsed {
        rows,
        cols,
        ..Parsed::default()
    };

    for (r, line) in target_lines.iter().enumerate() {
        let cells = section_cells(line, cols).ok_or(ParserErr::LineLength(HEADER_LINES + r))?;
        for (c, cell) in cells.enumerate() {
            if cell == 'T' {
                parsed.targets.push(pos(r, c)?);
            }
        }
    }

    for (r, line) in maze_lines.iter().enumerate() {
        let line_number = HEADER_LINES + rows + 1 + r;
        let cells = section_cells(line, cols).ok_or(ParserErr::LineLength(line_number))?;
        for (c, cell) in cells.enumerate() {
            let pos = pos(r, c)?;
            match cell {
                '@' => parsed.blocks.push(pos),
                '.' => {}
                'T' => parsed.boxes.push(pos),
                _ => match Dir::from_arrow(cell) {
                    Some(dir) => parsed.machines.push(Machine::new(pos, dir)),
                    None => return Err(ParserErr::Pos(r, c)),
                },
            }
        }
    }

    parsed.into_level()
}

/// The chars at odd indices, `None` if the line doesn't have exactly `cols` of them.
fn section_cells(line: &str, cols: usize) -> Option<impl Iterator<Item = char> + '_> {
    if line.chars().count() / 2 != cols {
        return None;
    }
    Some(line.chars().skip(1).step_by(2).take(cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_fail_pos() {
        let level = r"
#####
#>X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn compact_fail_line_length() {
        let level = r"
>-$.
>-$
";
        assert_failure(level, ParserErr::LineLength(1));
    }

    #[test]
    fn compact_corridor() {
        let level: Level = ">$-.".parse().unwrap();
        assert_eq!(level.rows(), 1);
        assert_eq!(level.cols(), 4);
        assert_eq!(level.targets(), &[Pos::new(0, 3)]);
        assert_eq!(level.machines(), &[Machine::new(Pos::new(0, 0), Dir::Right)]);
        assert_eq!(level.initial_state().boxes, vec![Pos::new(0, 1)]);
    }

    #[test]
    fn compact_spaces_are_empty() {
        let dashes: Level = "v-\n$.".parse().unwrap();
        let spaces: Level = "v \n$.".parse().unwrap();
        assert_eq!(dashes, spaces);

        // including at the end of the last row
        let dashes: Level = "v-\n$-\n".parse().unwrap();
        let spaces: Level = "v \n$ \n".parse().unwrap();
        assert_eq!(dashes, spaces);
        assert_eq!(spaces.cols(), 2);
    }

    #[test]
    fn compact_fail_too_large() {
        let level = format!(">{}", "-".repeat(255));
        assert_failure(&level, ParserErr::TooLarge);

        let level = format!(">{}", "-".repeat(254));
        assert_eq!(parse(&level).unwrap().cols(), 255);
    }

    #[test]
    fn sections_fail_too_large() {
        let row = "|.".repeat(256) + "|";
        let level = format!("header\nheader\n{}\n---\n{}\n", row, row);
        assert_failure(&level, ParserErr::TooLarge);
    }

    #[test]
    fn sections_fail_structure() {
        assert_failure("|.|\n", ParserErr::Sections);

        // even number of grid lines can't be split into two equal sections
        let level = "header\nheader\n|.|\n---\n|.|\n|.|\n";
        assert_failure(level, ParserErr::Sections);
    }

    #[test]
    fn sections_fail_cell() {
        let level = "header\nheader\n|.|.|\n-----\n|>|x|\n";
        assert_failure(level, ParserErr::Pos(0, 1));
    }

    #[test]
    fn sections_fail_line_length() {
        let level = "header\nheader\n|.|.|\n|.|\n-----\n|.|.|\n|.|.|\n";
        assert_failure(level, ParserErr::LineLength(3));
    }

    #[test]
    fn sections_target_under_block_and_box() {
        // the two grids are independent so a target can be anywhere, even under a block
        let level = parse("header\nheader\n|T|T|\n-----\n|@|T|\n").unwrap();
        assert_eq!(level.targets(), &[Pos::new(0, 0), Pos::new(0, 1)]);
        assert_eq!(level.initial_state().boxes, vec![Pos::new(0, 1)]);
        assert_eq!(level.to_string(), "#*\n");
    }

    #[test]
    fn level_errors_are_wrapped() {
        // neither format can put two things on one cell so this only comes from `Level::new`
        let err = Level::new(1, 2, &[Pos::new(0, 0)], vec![], vec![Pos::new(0, 0)], vec![]);
        assert_eq!(
            ParserErr::from(err.unwrap_err()),
            ParserErr::Level(LevelErr::OnBlock(Pos::new(0, 0)))
        );
    }

    #[test]
    fn sections_match_compact() {
        let sections = r"
Pushing Machine
Practice
|.|.|.|.|.|.|
|.|.|.|.|.|.|
|.|.|.|.|.|.|
|.|.|.|T|.|.|
-------------
|@|@|@|@|@|@|
|@|.|v|.|.|@|
|@|.|T|.|.|@|
|@|>|.|.|@|@|
"
        .trim_start_matches('\n');
        let compact = r"
######
#-v--#
#-$--#
#>-.##
"
        .trim_start_matches('\n');

        let from_sections = parse(sections).unwrap();
        let from_compact = parse(compact).unwrap();
        assert_eq!(from_sections, from_compact);
        assert_eq!(from_sections.to_string(), compact);
        assert_eq!(
            parse_format(sections, Format::Sections).unwrap(),
            parse_format(compact, Format::Compact).unwrap()
        );
    }

    #[test]
    fn sections_on_target_machine() {
        let sections = "header\nheader\n|T|.|\n-----\n|>|.|\n";
        let level = parse(sections).unwrap();
        assert_eq!(level.to_string(), "R-\n");
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }
}
