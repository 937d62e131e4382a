use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecayMode {
    Stable,
    Alpha,
    BetaMinus,
    BetaPlus,
    Unknown,
}

impl DecayMode {
    pub fn is_stable(self) -> bool {
        matches!(self, DecayMode::Stable)
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecayMode::Stable => "stable",
            DecayMode::Alpha => "alpha",
            DecayMode::BetaMinus => "beta-",
            DecayMode::BetaPlus => "beta+",
            DecayMode::Unknown => "unknown",
        };
        f.write_str(label)
    }
}
