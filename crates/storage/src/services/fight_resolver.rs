use chrono::{DateTime, Utc};
use validator::Validate;

use crate::error::{Result, StorageError};
use crate::models::{Fighter, NewFight};

/// Resolves a fight between a hero and a villain.
///
/// The fighter with the strictly greater level wins. On equal levels the hero
/// wins. `fight_date` is the only input that is not derived from the fighters.
pub fn resolve(hero: &Fighter, villain: &Fighter, fight_date: DateTime<Utc>) -> Result<NewFight> {
    check_fighter("hero", hero)?;
    check_fighter("villain", villain)?;

    let (winner, loser) = if hero.level >= villain.level {
        (hero, villain)
    } else {
        (villain, hero)
    };

    Ok(NewFight {
        fight_date,
        winner_name: winner.name.clone(),
        winner_picture: winner.picture.clone(),
        winner_level: winner.level,
        loser_name: loser.name.clone(),
        loser_picture: loser.picture.clone(),
        loser_level: loser.level,
    })
}

/// Same as [`resolve`], dated now.
pub fn resolve_now(hero: &Fighter, villain: &Fighter) -> Result<NewFight> {
    resolve(hero, villain, Utc::now())
}

fn check_fighter(side: &str, fighter: &Fighter) -> Result<()> {
    fighter.validate().map_err(|errors| {
        let reasons: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}: {}", field, e.code))
                })
            })
            .collect();
        StorageError::InvalidFighter(format!("{} {}", side, reasons.join(", ")))
    })
}
