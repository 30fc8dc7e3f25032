//! Parsing of the plain-text maze and pellet descriptions.

use std::collections::HashMap;

use glam::IVec2;

use crate::constants::{COMMENT_MARKER, MAZE_PADDING};
use crate::error::ParseError;
use crate::map::tile::Tile;

/// Parser for converting raw maze layouts into tile classifications.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a tile.
    ///
    /// # Arguments
    ///
    /// * `c` - The character to parse
    ///
    /// # Returns
    ///
    /// The parsed tile, or `None` if the character is not a tile digit.
    pub fn parse_character(c: char) -> Option<Tile> {
        match c {
            '0' => Some(Tile::Disabled),
            '1' => Some(Tile::Floor),
            '2' => Some(Tile::HomeDoor),
            '3' => Some(Tile::HomeInterior),
            '4' => Some(Tile::Intersection),
            '5' => Some(Tile::Restricted),
            '6' => Some(Tile::Teleport),
            '7' => Some(Tile::Tunnel),
            '8' => Some(Tile::Wall),
            _ => None,
        }
    }

    /// Parses a maze description into a grid-keyed tile table.
    ///
    /// Comment lines do not count as rows, and the first [`MAZE_PADDING`] columns
    /// land at negative grid X.
    ///
    /// # Errors
    ///
    /// Returns an error if the description contains an unknown character or no rows at all.
    pub fn parse_board(description: &str) -> Result<HashMap<IVec2, Tile>, ParseError> {
        let mut tiles = HashMap::new();

        for (y, row) in content_rows(description) {
            for (column, character) in row.chars().enumerate() {
                let tile = Self::parse_character(character).ok_or(ParseError::UnknownCharacter {
                    character,
                    row: y + 1,
                    column: column + 1,
                })?;
                tiles.insert(IVec2::new(column as i32 - MAZE_PADDING, y as i32), tile);
            }
        }

        if tiles.is_empty() {
            return Err(ParseError::Empty("maze"));
        }

        Ok(tiles)
    }
}

/// Parses a pellet description: every `o` marks a regular pellet at (column, row).
///
/// # Errors
///
/// Returns an error if a character other than `o` or a space appears, or if no pellet is present.
pub fn parse_pellets(description: &str) -> Result<Vec<IVec2>, ParseError> {
    let mut pellets = Vec::new();

    for (y, row) in content_rows(description) {
        for (x, character) in row.chars().enumerate() {
            match character {
                'o' => pellets.push(IVec2::new(x as i32, y as i32)),
                ' ' => {}
                _ => {
                    return Err(ParseError::UnknownCharacter {
                        character,
                        row: y + 1,
                        column: x + 1,
                    })
                }
            }
        }
    }

    if pellets.is_empty() {
        return Err(ParseError::Empty("pellet"));
    }

    Ok(pellets)
}

/// Yields `(row, line)` for every non-comment line, with trailing whitespace and carriage returns removed.
fn content_rows(description: &str) -> impl Iterator<Item = (usize, &str)> {
    description
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .map(str::trim_end)
        .enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(MapTileParser::parse_character('8'), Some(Tile::Wall));
        assert_eq!(MapTileParser::parse_character('6'), Some(Tile::Teleport));
        assert_eq!(MapTileParser::parse_character('9'), None);
    }

    #[test]
    fn test_parse_board_reports_position_of_unknown_character() {
        let result = MapTileParser::parse_board("// header\n0008\n00x8\n");
        assert_eq!(
            result,
            Err(ParseError::UnknownCharacter {
                character: 'x',
                row: 2,
                column: 3
            })
        );
    }

    #[test]
    fn test_parse_board_empty() {
        assert_eq!(MapTileParser::parse_board("// only comments\n"), Err(ParseError::Empty("maze")));
    }

    #[test]
    fn test_parse_pellets() {
        let pellets = parse_pellets("// pellets\n o\no  o\n").unwrap();
        assert_eq!(pellets, vec![IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(3, 1)]);
    }

    #[test]
    fn test_parse_pellets_rejects_other_characters() {
        assert!(matches!(
            parse_pellets("o.o"),
            Err(ParseError::UnknownCharacter { character: '.', .. })
        ));
    }
}
