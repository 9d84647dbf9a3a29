/// Field layout string handed to the robot before the match.
///
/// Only the exact codes below mean anything. Everything else, including an
/// empty string when no data arrived, is `Unknown` and keeps the shooter off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AllianceCode {
    Rrr,
    Rlr,
    Lll,
    Lrl,
    Unknown,
}

impl AllianceCode {
    pub fn parse(data: &str) -> Self {
        match data {
            "RRR" => Self::Rrr,
            "RLR" => Self::Rlr,
            "LLL" => Self::Lll,
            "LRL" => Self::Lrl,
            _ => Self::Unknown,
        }
    }

    /// Whether our scoring target is on the side we start on.
    pub fn shooter_enabled(self) -> bool {
        match self {
            Self::Rrr | Self::Rlr => true,
            Self::Lll | Self::Lrl => false,
            Self::Unknown => false,
        }
    }

    /// Multiplier applied to the shooter timeline.
    pub fn gate(self) -> f64 {
        if self.shooter_enabled() { 1.0 } else { 0.0 }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rrr => "RRR",
            Self::Rlr => "RLR",
            Self::Lll => "LLL",
            Self::Lrl => "LRL",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for AllianceCode {
    fn from(data: &str) -> Self {
        Self::parse(data)
    }
}
