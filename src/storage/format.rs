// Board file encoding
//
// The file is a JSON object keyed by column display name. Each value is the
// column's sticker list in display order.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use crate::error::BoardError;
use crate::models::{Board, Column, StickerRecord};

/// Stickers read from a board file, already assigned to their columns
#[derive(Debug, Default)]
pub struct DecodedBoard {
    /// Placed stickers, in column order then file order
    pub stickers: Vec<(Column, StickerRecord)>,
    /// Recorded column names that were not recognized; those stickers were
    /// placed in the first column
    pub repaired: Vec<String>,
}

/// Encode a board as 4-space indented JSON
pub fn encode(board: &Board) -> Result<String, BoardError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    board.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| BoardError::Json(serde::ser::Error::custom(e)))
}

/// Decode a board file.
///
/// Placement rule per sticker:
/// - `state` absent: the column whose key holds it
/// - `state` names a known column: that column
/// - `state` names anything else: the first column
///
/// A known `state` takes precedence over the containing key, so a sticker
/// filed under the wrong key is read back into its recorded column rather
/// than the key's column.
///
/// Unknown top-level keys are ignored. A `null` column value is read as an
/// empty column.
pub fn decode(contents: &str) -> Result<DecodedBoard, BoardError> {
    let mut raw: Map<String, Value> = serde_json::from_str(contents)?;
    let mut decoded = DecodedBoard::default();

    for column in Column::ALL {
        let value = match raw.remove(column.as_str()) {
            Some(Value::Null) | None => continue,
            Some(value) => value,
        };
        let records: Vec<StickerRecord> = serde_json::from_value(value)?;
        for record in records {
            let target = match record.state.as_deref() {
                None => column,
                Some(name) => match Column::from_str(name) {
                    Some(recorded) => recorded,
                    None => {
                        decoded.repaired.push(name.to_string());
                        Column::FIRST
                    }
                },
            };
            decoded.stickers.push((target, record));
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sticker, StickerId};

    #[test]
    fn test_encode_empty_board_has_all_keys() {
        let encoded = encode(&Board::new()).unwrap();
        assert_eq!(
            encoded,
            "{\n    \"Queue\": [],\n    \"In Progress\": [],\n    \"Review\": [],\n    \"Done\": []\n}"
        );
    }

    #[test]
    fn test_encode_keeps_unicode_unescaped() {
        let mut board = Board::new();
        board.push(Sticker::new(StickerId(1), Column::Queue, "Задача", "gray75"));
        let encoded = encode(&board).unwrap();
        assert!(encoded.contains("\"text\": \"Задача\""));
    }

    #[test]
    fn test_decode_places_by_recorded_state() {
        let contents = r#"{
            "Queue": [
                {"text": "a", "bg_color": "red", "state": "Queue"},
                {"text": "b", "bg_color": "red", "state": "Review"}
            ],
            "Done": [{"text": "c", "bg_color": "blue"}]
        }"#;
        let decoded = decode(contents).unwrap();
        let placed: Vec<(Column, &str)> = decoded
            .stickers
            .iter()
            .map(|(c, r)| (*c, r.text.as_str()))
            .collect();
        assert_eq!(
            placed,
            vec![(Column::Queue, "a"), (Column::Review, "b"), (Column::Done, "c")]
        );
        assert!(decoded.repaired.is_empty());
    }

    #[test]
    fn test_decode_repairs_unknown_state() {
        let contents = r#"{"Review": [{"text": "x", "bg_color": "gray75", "state": "Backlog"}]}"#;
        let decoded = decode(contents).unwrap();
        assert_eq!(decoded.stickers.len(), 1);
        assert_eq!(decoded.stickers[0].0, Column::Queue);
        assert_eq!(decoded.repaired, vec!["Backlog".to_string()]);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let contents = r#"{"Archive": [{"text": "old"}], "Queue": null, "Done": []}"#;
        let decoded = decode(contents).unwrap();
        assert!(decoded.stickers.is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("not json").is_err());
        assert!(decode("[1, 2, 3]").is_err());
        assert!(decode(r#"{"Queue": [{"bg_color": "red"}]}"#).is_err());
    }
}
