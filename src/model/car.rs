use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::framework::ParseError;

/// Marker shown for a part that has not been built yet.
pub const UNSET_PART: &str = "<unset>";

/// The composite product assembled by a [`CarBuilder`](crate::car_builder::CarBuilder).
///
/// # Builder Pattern
/// A `Car` starts with all three parts unset. Builders fill them in through
/// [`BuildStep`]s; a [`CarDirector`](crate::car_builder::CarDirector) drives the
/// steps in [`BuildStep::SEQUENCE`] order.
///
/// Reading an unset part returns `None`. The `Display` form renders unset parts
/// as [`UNSET_PART`] so a half-built car can still be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    seat: Option<String>,
    engine: Option<String>,
    computer: Option<String>,
}

impl Car {
    /// Creates a car with no parts set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make_seat(&mut self, seat: impl Into<String>) {
        self.seat = Some(seat.into());
    }

    pub fn make_engine(&mut self, engine: impl Into<String>) {
        self.engine = Some(engine.into());
    }

    pub fn make_computer(&mut self, computer: impl Into<String>) {
        self.computer = Some(computer.into());
    }

    pub fn seat(&self) -> Option<&str> {
        self.seat.as_deref()
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn computer(&self) -> Option<&str> {
        self.computer.as_deref()
    }

    /// Returns the part produced by `step`, if it has been built.
    pub fn part(&self, step: BuildStep) -> Option<&str> {
        match step {
            BuildStep::Seat => self.seat(),
            BuildStep::Engine => self.engine(),
            BuildStep::Computer => self.computer(),
        }
    }

    /// Record of which parts are set.
    pub fn progress(&self) -> BuildProgress {
        BuildProgress {
            seat: self.seat.is_some(),
            engine: self.engine.is_some(),
            computer: self.computer.is_some(),
        }
    }

    pub fn stage(&self) -> BuildStage {
        self.progress().stage()
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> {} --> {}",
            self.seat().unwrap_or(UNSET_PART),
            self.engine().unwrap_or(UNSET_PART),
            self.computer().unwrap_or(UNSET_PART)
        )
    }
}

/// One construction step of a [`Car`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStep {
    Seat,
    Engine,
    Computer,
}

impl BuildStep {
    /// The fixed order a director drives a builder in.
    pub const SEQUENCE: [BuildStep; 3] = [BuildStep::Seat, BuildStep::Engine, BuildStep::Computer];
}

impl Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildStep::Seat => "seat",
            BuildStep::Engine => "engine",
            BuildStep::Computer => "computer",
        };
        f.write_str(name)
    }
}

/// Which parts of a car are set.
///
/// Builders may be re-driven, so this is a record of set parts rather than a
/// single-fire state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildProgress {
    pub seat: bool,
    pub engine: bool,
    pub computer: bool,
}

impl BuildProgress {
    pub fn is_set(&self, step: BuildStep) -> bool {
        match step {
            BuildStep::Seat => self.seat,
            BuildStep::Engine => self.engine,
            BuildStep::Computer => self.computer,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.seat && self.engine && self.computer
    }

    /// Unset steps, in sequence order.
    pub fn missing(&self) -> Vec<BuildStep> {
        BuildStep::SEQUENCE
            .into_iter()
            .filter(|step| !self.is_set(*step))
            .collect()
    }

    /// Maps the record onto the nominal state machine: the furthest step
    /// reached in sequence order with every earlier part also set.
    /// `ComputerSet` therefore means complete.
    pub fn stage(&self) -> BuildStage {
        match (self.seat, self.engine, self.computer) {
            (true, true, true) => BuildStage::ComputerSet,
            (true, true, false) => BuildStage::EngineSet,
            (true, false, _) => BuildStage::SeatSet,
            (false, _, _) => BuildStage::Empty,
        }
    }
}

/// Nominal builder states: `Empty → SeatSet → EngineSet → ComputerSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Empty,
    SeatSet,
    EngineSet,
    ComputerSet,
}

/// The car representations a builder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CarVariant {
    #[default]
    Sedan,
    Suv,
}

impl Display for CarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarVariant::Sedan => write!(f, "Sedan"),
            CarVariant::Suv => write!(f, "Suv"),
        }
    }
}

impl FromStr for CarVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedan" => Ok(CarVariant::Sedan),
            "suv" => Ok(CarVariant::Suv),
            _ => Err(ParseError::new("vehicle", s)),
        }
    }
}

impl TryFrom<String> for CarVariant {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_empty() {
        let car = Car::new();
        assert_eq!(car.stage(), BuildStage::Empty);
        assert_eq!(car.seat(), None);
        assert_eq!(car.to_string(), "<unset> --> <unset> --> <unset>");
    }

    #[test]
    fn test_progress_tracks_set_parts() {
        let mut car = Car::new();
        car.make_seat("Seat");
        car.make_computer("Computer");

        let progress = car.progress();
        assert!(progress.is_set(BuildStep::Seat));
        assert!(!progress.is_set(BuildStep::Engine));
        assert_eq!(progress.missing(), vec![BuildStep::Engine]);
        assert_eq!(car.stage(), BuildStage::SeatSet);
        assert!(!car.is_complete());
    }

    #[test]
    fn test_stage_requires_earlier_parts() {
        let mut car = Car::new();
        car.make_computer("Computer");
        assert_eq!(car.stage(), BuildStage::Empty);

        car.make_engine("Engine");
        assert_eq!(car.stage(), BuildStage::Empty);

        car.make_seat("Seat");
        assert_eq!(car.stage(), BuildStage::ComputerSet);
        assert!(car.is_complete());
    }

    #[test]
    fn test_make_overwrites_part() {
        let mut car = Car::new();
        car.make_engine("V6");
        car.make_engine("V8");
        assert_eq!(car.part(BuildStep::Engine), Some("V8"));
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("SUV".parse::<CarVariant>().unwrap(), CarVariant::Suv);
        assert!("truck".parse::<CarVariant>().is_err());
    }
}
