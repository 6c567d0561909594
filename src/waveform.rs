use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum_macros::{EnumCount, EnumIter, FromRepr};

/// The closed set of shapes the generator can trace, tagged with the
/// selector codes hosts use to pick one across a typeless boundary.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum Waveform {
    #[default]
    Sine = 0,
    Square = 1,
    Saw = 2,
    Triangle = 3,
}

impl Waveform {
    /// Decodes a raw selector code. Codes outside the table return `None`,
    /// so the caller has to state what an unrecognized shape means instead
    /// of inheriting a fallthrough.
    pub fn from_i32(selector: i32) -> Option<Self> {
        Self::from_repr(selector)
    }

    /// Amplitude of the shape `phase` radians into its cycle.
    ///
    /// One clean cycle is traced over `phase` in [0, 2π); every shape stays
    /// inside [-1.0, 1.0] on that interval. Computed in `f64` and narrowed
    /// to the sample width on the way out.
    pub fn sample(self, phase: f64) -> f32 {
        match self {
            Waveform::Sine => phase.sin() as f32,
            Waveform::Square => {
                if phase < PI {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => (phase / PI - 1.0) as f32,
            Waveform::Triangle => {
                if phase < PI {
                    (-1.0 + 2.0 * (phase / PI)) as f32
                } else {
                    (3.0 - 2.0 * (phase / PI)) as f32
                }
            }
        }
    }
}
