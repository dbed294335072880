//! Registry of the three f1db datasets.
//!
//! This is the single source of truth for dataset shapes. Field order here is
//! the order of form fields and of keys in newly created records.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::spec::FieldKind::{Boolean, Date, Float, Integer, Text};
use super::spec::{FieldSpec, Schema};
use crate::error::{F1dbError, Result};

/// Identifies one of the statically registered datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKey {
    Drivers,
    Constructors,
    RaceResults,
}

impl DatasetKey {
    pub const fn all() -> [DatasetKey; 3] {
        [
            DatasetKey::Drivers,
            DatasetKey::Constructors,
            DatasetKey::RaceResults,
        ]
    }

    /// Stable key used in APIs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Drivers => "drivers",
            DatasetKey::Constructors => "constructors",
            DatasetKey::RaceResults => "race-results",
        }
    }

    /// Backing file name without the `.json` extension. These names are fixed.
    pub fn file_stem(&self) -> &'static str {
        match self {
            DatasetKey::Drivers => "f1db-drivers",
            DatasetKey::Constructors => "f1db-constructors",
            DatasetKey::RaceResults => "f1db-races-race-results",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    /// User-facing name, as offered by the dataset selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetKey::Drivers => "Drivers",
            DatasetKey::Constructors => "Constructors",
            DatasetKey::RaceResults => "Race Results",
        }
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            DatasetKey::Drivers => &DRIVERS,
            DatasetKey::Constructors => &CONSTRUCTORS,
            DatasetKey::RaceResults => &RACE_RESULTS,
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = F1dbError;

    fn from_str(s: &str) -> Result<Self> {
        DatasetKey::all()
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| F1dbError::UnknownDataset(s.to_string()))
    }
}

/// Look up the schema registered for `dataset_key`.
pub fn schema_for(dataset_key: &str) -> Result<&'static Schema> {
    let key: DatasetKey = dataset_key.parse()?;
    Ok(key.schema())
}

pub const GENDERS: &[&str] = &["MALE", "FEMALE", "OTHER"];

pub static DRIVERS: Schema = Schema {
    key: DatasetKey::Drivers,
    fields: &[
        FieldSpec::new("id", Text).required(),
        FieldSpec::new("name", Text).required(),
        FieldSpec::new("firstName", Text).required(),
        FieldSpec::new("lastName", Text).required(),
        FieldSpec::new("fullName", Text).required(),
        FieldSpec::new("abbreviation", Text).required(),
        FieldSpec::new("permanentNumber", Text).required(),
        FieldSpec::enumeration("gender", GENDERS).required(),
        FieldSpec::new("dateOfBirth", Date).required(),
        FieldSpec::new("dateOfDeath", Date),
        FieldSpec::new("placeOfBirth", Text).required(),
        FieldSpec::new("countryOfBirthCountryId", Text).required(),
        FieldSpec::new("nationalityCountryId", Text).required(),
        FieldSpec::new("secondNationalityCountryId", Text),
        FieldSpec::new("bestChampionshipPosition", Integer).required(),
        FieldSpec::new("bestStartingGridPosition", Integer).required(),
        FieldSpec::new("bestRaceResult", Integer).required(),
        FieldSpec::new("bestSprintRaceResult", Integer),
        FieldSpec::new("totalChampionshipWins", Integer).required(),
        FieldSpec::new("totalRaceEntries", Integer).required(),
        FieldSpec::new("totalRaceStarts", Integer).required(),
        FieldSpec::new("totalRaceWins", Integer).required(),
        FieldSpec::new("totalRaceLaps", Integer).required(),
        FieldSpec::new("totalPodiums", Integer).required(),
        FieldSpec::new("totalPoints", Float).required(),
        FieldSpec::new("totalChampionshipPoints", Float).required(),
        FieldSpec::new("totalPolePositions", Integer).required(),
        FieldSpec::new("totalFastestLaps", Integer).required(),
        FieldSpec::new("totalSprintRaceStarts", Integer).required(),
        FieldSpec::new("totalSprintRaceWins", Integer).required(),
        FieldSpec::new("totalDriverOfTheDay", Integer).required(),
        FieldSpec::new("totalGrandSlams", Integer).required(),
    ],
};

pub static CONSTRUCTORS: Schema = Schema {
    key: DatasetKey::Constructors,
    fields: &[
        FieldSpec::new("id", Text).required(),
        FieldSpec::new("name", Text).required(),
        FieldSpec::new("fullName", Text).required(),
        FieldSpec::new("countryId", Text).required(),
        FieldSpec::new("bestChampionshipPosition", Integer).required(),
        FieldSpec::new("bestStartingGridPosition", Integer).required(),
        FieldSpec::new("bestRaceResult", Integer).required(),
        FieldSpec::new("bestSprintRaceResult", Integer),
        FieldSpec::new("totalChampionshipWins", Integer).required(),
        FieldSpec::new("totalRaceEntries", Integer).required(),
        FieldSpec::new("totalRaceStarts", Integer).required(),
        FieldSpec::new("totalRaceWins", Integer).required(),
        FieldSpec::new("total1And2Finishes", Integer).required(),
        FieldSpec::new("totalRaceLaps", Integer).required(),
        FieldSpec::new("totalPodiums", Integer).required(),
        FieldSpec::new("totalPodiumRaces", Integer).required(),
        FieldSpec::new("totalPoints", Float).required(),
        FieldSpec::new("totalChampionshipPoints", Float).required(),
        FieldSpec::new("totalPolePositions", Integer).required(),
        FieldSpec::new("totalFastestLaps", Integer).required(),
        FieldSpec::new("totalSprintRaceStarts", Integer).required(),
        FieldSpec::new("totalSprintRaceWins", Integer).required(),
    ],
};

pub static RACE_RESULTS: Schema = Schema {
    key: DatasetKey::RaceResults,
    fields: &[
        FieldSpec::new("raceId", Integer).required(),
        FieldSpec::new("year", Integer).required(),
        FieldSpec::new("round", Integer).required(),
        FieldSpec::new("positionDisplayOrder", Integer).required(),
        FieldSpec::new("positionNumber", Integer).required(),
        FieldSpec::new("positionText", Text).required(),
        FieldSpec::new("driverNumber", Text).required(),
        FieldSpec::new("driverId", Text).required(),
        FieldSpec::new("constructorId", Text).required(),
        FieldSpec::new("engineManufacturerId", Text).required(),
        FieldSpec::new("tyreManufacturerId", Text).required(),
        FieldSpec::new("sharedCar", Boolean).required(),
        FieldSpec::new("laps", Integer).required(),
        FieldSpec::new("time", Text),
        FieldSpec::new("timeMillis", Integer),
        FieldSpec::new("timePenalty", Text),
        FieldSpec::new("timePenaltyMillis", Integer),
        FieldSpec::new("gap", Text).required(),
        FieldSpec::new("gapMillis", Integer),
        FieldSpec::new("gapLaps", Integer).required(),
        FieldSpec::new("interval", Text),
        FieldSpec::new("intervalMillis", Integer),
        FieldSpec::new("reasonRetired", Text),
        FieldSpec::new("points", Float),
        FieldSpec::new("polePosition", Boolean).required(),
        FieldSpec::new("qualificationPositionNumber", Integer).required(),
        FieldSpec::new("qualificationPositionText", Text).required(),
        FieldSpec::new("gridPositionNumber", Integer).required(),
        FieldSpec::new("gridPositionText", Text).required(),
        FieldSpec::new("positionsGained", Integer).required(),
        FieldSpec::new("pitStops", Integer).required(),
        FieldSpec::new("fastestLap", Boolean).required(),
        FieldSpec::new("driverOfTheDay", Boolean).required(),
        FieldSpec::new("grandSlam", Boolean).required(),
    ],
};
