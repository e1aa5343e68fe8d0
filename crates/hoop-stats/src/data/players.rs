// Roster rows: id, first name, last name, country, gender, age, weight, height.
//
// Fields are split naively on commas (quoting disabled), so a value that
// itself contains a comma shifts every later column and the row is dropped.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::units::{convert_height_to_cm, convert_weight_to_kg};
use super::{read_input, LoadError, RowError};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the roster's single-letter gender code (`M` / `F`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A roster entry with weight and height already normalized to metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub gender: Gender,
    /// `None` when the age column is blank or not a whole number.
    pub age: Option<u32>,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
}

// ---------------------------------------------------------------------------
// Raw row (private)
// ---------------------------------------------------------------------------

/// Positional view of one roster row, before unit normalization.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: String,
    first_name: String,
    last_name: String,
    country: String,
    gender: String,
    age: String,
    weight: String,
    height: String,
}

/// Age is informational: an unusable value becomes `None` and the row is kept.
fn parse_age(id: &str, raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(age) => Some(age),
        Err(_) => {
            warn!("player {}: ignoring non-numeric age {:?}", id, raw);
            None
        }
    }
}

impl TryFrom<RawPlayer> for Player {
    type Error = RowError;

    fn try_from(raw: RawPlayer) -> Result<Self, Self::Error> {
        let gender = Gender::from_code(&raw.gender).ok_or_else(|| RowError::MalformedRow {
            reason: format!("unknown gender code {:?}", raw.gender),
        })?;
        let age = parse_age(&raw.id, &raw.age);
        let weight_kg = convert_weight_to_kg(&raw.weight).map_err(|source| {
            RowError::Measurement {
                field: "weight",
                source,
            }
        })?;
        let height_cm = convert_height_to_cm(&raw.height).map_err(|source| {
            RowError::Measurement {
                field: "height",
                source,
            }
        })?;

        Ok(Player {
            id: raw.id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            country: raw.country,
            gender,
            age,
            weight_kg,
            height_cm,
        })
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse the text of a roster file, skipping the header and any row that
/// does not yield a complete player.
pub fn parse_players(text: &str) -> Vec<Player> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut players = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        let raw: RawPlayer = match record.deserialize(None) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping player on line {}: {}", line, e);
                continue;
            }
        };
        match Player::try_from(raw) {
            Ok(player) => players.push(player),
            Err(e) => warn!("skipping player on line {}: {}", line, e),
        }
    }
    players
}

/// Load and normalize a roster file.
pub async fn load_players(path: &Path) -> Result<Vec<Player>, LoadError> {
    let text = read_input(path).await?;
    let players = parse_players(&text);
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,first_name,last_name,country,gender,age,weight,height\r\n";

    // -- Field mapping --

    #[test]
    fn player_row_mapped_positionally() {
        let text = format!("{HEADER}7,Li,Wei,China,F,24,80kg,6feet2inches\r\n");
        let players = parse_players(&text);
        assert_eq!(players.len(), 1);

        let p = &players[0];
        assert_eq!(p.id, "7");
        assert_eq!(p.first_name, "Li");
        assert_eq!(p.last_name, "Wei");
        assert_eq!(p.full_name(), "Li Wei");
        assert_eq!(p.country, "China");
        assert_eq!(p.gender, Gender::Female);
        assert!(p.is_female());
        assert_eq!(p.age, Some(24));
        assert!((p.weight_kg - 80.0).abs() < 1e-9);
        assert!((p.height_cm - 187.96).abs() < 1e-9);
    }

    #[test]
    fn pounds_normalized_on_load() {
        let text = format!("{HEADER}1,Sam,Jones,Canada,M,30,220lbs,6feet8inches\r\n");
        let players = parse_players(&text);
        assert!((players[0].weight_kg - 220.0 * 0.453592).abs() < 1e-9);
        assert!(players[0].is_male());
    }

    #[test]
    fn fields_trimmed() {
        let text = format!("{HEADER} 1 , Sam , Jones , Canada , M , 30 , 90kg , 6feet0inches \r\n");
        let players = parse_players(&text);
        assert_eq!(players[0].id, "1");
        assert_eq!(players[0].country, "Canada");
    }

    #[test]
    fn quotes_are_not_special() {
        let text = format!("{HEADER}1,\"Sam\",Jones,Canada,M,30,90kg,6feet0inches\r\n");
        let players = parse_players(&text);
        assert_eq!(players[0].first_name, "\"Sam\"");
    }

    // -- Skipped rows --

    #[test]
    fn embedded_comma_row_skipped() {
        let text = format!(
            "{HEADER}1,Sam,Jones,Canada,M,30,90kg,6feet0inches\r\n\
             2,Jo,Smith, Jr,USA,M,28,95kg,6feet1inches\r\n\
             3,Ann,Lee,China,F,22,70kg,5feet10inches\r\n"
        );
        let players = parse_players(&text);
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, "1");
        assert_eq!(players[1].id, "3");
    }

    #[test]
    fn bad_measurements_and_codes_skipped() {
        let text = format!(
            "{HEADER}1,A,B,Canada,X,30,90kg,6feet0inches\r\n\
             3,E,F,Canada,M,30,heavy,6feet0inches\r\n\
             4,G,H,Canada,M,30,90kg,190cm\r\n\
             5,I,J,Canada,M,30,90kg,6feet3inches\r\n"
        );
        let players = parse_players(&text);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, "5");
    }

    #[test]
    fn unusable_age_keeps_player() {
        let text = format!(
            "{HEADER}1,Sam,Jones,Canada,M,,250lbs,6feet10inches\r\n\
             2,Ray,Dubois,Canada,M,24.5,105kg,6feet8inches\r\n\
             3,Tom,Price,Canada,M,old,95kg,6feet6inches\r\n"
        );
        let players = parse_players(&text);
        assert_eq!(players.len(), 3);
        assert!(players.iter().all(|p| p.age.is_none()));
        assert!((players[0].weight_kg - 250.0 * 0.453592).abs() < 1e-9);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(parse_players(HEADER).is_empty());
    }

    #[test]
    fn conversion_error_names_field() {
        let raw = RawPlayer {
            id: "1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            country: "Canada".into(),
            gender: "M".into(),
            age: "30".into(),
            weight: "90kg".into(),
            height: "tall".into(),
        };
        let err = Player::try_from(raw).unwrap_err();
        assert!(matches!(err, RowError::Measurement { field: "height", .. }));
    }
}
