use crate::housingdata::HousingData;

use std::fmt;

/// Predictor column regressed against median value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Predictor {
    Crim,
    Rooms,
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Predictor::Crim => write!(f, "Crim"),
            Predictor::Rooms => write!(f, "Rooms"),
        }
    }
}

impl Predictor {
    pub fn all() -> [Predictor; 2] {
        [Predictor::Crim, Predictor::Rooms]
    }

    pub fn series<'a>(&self, data: &'a HousingData) -> &'a [f64] {
        match self {
            Predictor::Crim => &data.crim,
            Predictor::Rooms => &data.rooms,
        }
    }
}
