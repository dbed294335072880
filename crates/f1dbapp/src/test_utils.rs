use crate::model::Record;
use crate::store::mem_backend::MemBackend;
use crate::store::RecordStore;
use crate::value::Scalar;

/// A store over an in-memory backend.
pub fn mem_store() -> RecordStore<MemBackend> {
    RecordStore::with_backend(MemBackend::new())
}

/// A driver with every schema field filled in.
pub fn sample_driver(id: &str) -> Record {
    let name = id
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Record::new()
        .with("id", Scalar::text(id))
        .with("name", Scalar::text(name.clone()))
        .with("firstName", Scalar::text("Max"))
        .with("lastName", Scalar::text("Verstappen"))
        .with("fullName", Scalar::text(name))
        .with("abbreviation", Scalar::text("VER"))
        .with("permanentNumber", Scalar::text("33"))
        .with("gender", Scalar::text("MALE"))
        .with("dateOfBirth", Scalar::text("1997-09-30"))
        .with("dateOfDeath", Scalar::Null)
        .with("placeOfBirth", Scalar::text("Hasselt"))
        .with("countryOfBirthCountryId", Scalar::text("belgium"))
        .with("nationalityCountryId", Scalar::text("netherlands"))
        .with("secondNationalityCountryId", Scalar::Null)
        .with("bestChampionshipPosition", Scalar::Integer(1))
        .with("bestStartingGridPosition", Scalar::Integer(1))
        .with("bestRaceResult", Scalar::Integer(1))
        .with("bestSprintRaceResult", Scalar::Integer(1))
        .with("totalChampionshipWins", Scalar::Integer(4))
        .with("totalRaceEntries", Scalar::Integer(209))
        .with("totalRaceStarts", Scalar::Integer(209))
        .with("totalRaceWins", Scalar::Integer(63))
        .with("totalRaceLaps", Scalar::Integer(11643))
        .with("totalPodiums", Scalar::Integer(112))
        .with("totalPoints", Scalar::Float(3023.5))
        .with("totalChampionshipPoints", Scalar::Float(3023.5))
        .with("totalPolePositions", Scalar::Integer(40))
        .with("totalFastestLaps", Scalar::Integer(32))
        .with("totalSprintRaceStarts", Scalar::Integer(24))
        .with("totalSprintRaceWins", Scalar::Integer(12))
        .with("totalDriverOfTheDay", Scalar::Integer(22))
        .with("totalGrandSlams", Scalar::Integer(6))
}

/// A constructor with every schema field filled in.
pub fn sample_constructor(id: &str) -> Record {
    Record::new()
        .with("id", Scalar::text(id))
        .with("name", Scalar::text("McLaren"))
        .with("fullName", Scalar::text("McLaren Racing"))
        .with("countryId", Scalar::text("united-kingdom"))
        .with("bestChampionshipPosition", Scalar::Integer(1))
        .with("bestStartingGridPosition", Scalar::Integer(1))
        .with("bestRaceResult", Scalar::Integer(1))
        .with("bestSprintRaceResult", Scalar::Null)
        .with("totalChampionshipWins", Scalar::Integer(9))
        .with("totalRaceEntries", Scalar::Integer(980))
        .with("totalRaceStarts", Scalar::Integer(978))
        .with("totalRaceWins", Scalar::Integer(189))
        .with("total1And2Finishes", Scalar::Integer(51))
        .with("totalRaceLaps", Scalar::Integer(52000))
        .with("totalPodiums", Scalar::Integer(510))
        .with("totalPodiumRaces", Scalar::Integer(400))
        .with("totalPoints", Scalar::Float(7000.5))
        .with("totalChampionshipPoints", Scalar::Float(6900.5))
        .with("totalPolePositions", Scalar::Integer(165))
        .with("totalFastestLaps", Scalar::Integer(170))
        .with("totalSprintRaceStarts", Scalar::Integer(30))
        .with("totalSprintRaceWins", Scalar::Integer(3))
}

/// A race result with every required field filled in.
pub fn sample_race_result(race_id: i64, driver_id: &str) -> Record {
    Record::new()
        .with("raceId", Scalar::Integer(race_id))
        .with("year", Scalar::Integer(2024))
        .with("round", Scalar::Integer(1))
        .with("positionDisplayOrder", Scalar::Integer(1))
        .with("positionNumber", Scalar::Integer(1))
        .with("positionText", Scalar::text("1"))
        .with("driverNumber", Scalar::text("1"))
        .with("driverId", Scalar::text(driver_id))
        .with("constructorId", Scalar::text("red-bull"))
        .with("engineManufacturerId", Scalar::text("honda-rbpt"))
        .with("tyreManufacturerId", Scalar::text("pirelli"))
        .with("sharedCar", Scalar::Bool(false))
        .with("laps", Scalar::Integer(57))
        .with("time", Scalar::text("1:31:44.742"))
        .with("timeMillis", Scalar::Integer(5504742))
        .with("gap", Scalar::text("-"))
        .with("gapLaps", Scalar::Integer(0))
        .with("points", Scalar::Float(26.0))
        .with("polePosition", Scalar::Bool(true))
        .with("qualificationPositionNumber", Scalar::Integer(1))
        .with("qualificationPositionText", Scalar::text("1"))
        .with("gridPositionNumber", Scalar::Integer(1))
        .with("gridPositionText", Scalar::text("1"))
        .with("positionsGained", Scalar::Integer(0))
        .with("pitStops", Scalar::Integer(1))
        .with("fastestLap", Scalar::Bool(true))
        .with("driverOfTheDay", Scalar::Bool(false))
        .with("grandSlam", Scalar::Bool(true))
}
