use std::fmt;

/// Energy source mix chosen for one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Solar covers the full load; any surplus charges the store.
    SolarCharge,
    /// Solar is short and the store covers the whole deficit.
    SolarDraw,
    /// Solar is short and the store empties before covering the deficit.
    SolarPartialDraw,
    /// No solar; the store covers the full load.
    StorageOnly,
    /// No solar; the store empties before covering the load.
    PartialStorage,
    /// No solar and an empty store.
    Off,
}

impl OperatingMode {
    /// Returns the report label for this mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SolarCharge => "Solar + Charge",
            Self::SolarDraw => "Solar + Draw",
            Self::SolarPartialDraw => "Solar + Partial Draw",
            Self::StorageOnly => "Storage Only",
            Self::PartialStorage => "Partial Storage",
            Self::Off => "Off",
        }
    }

    /// Returns `true` if the plant runs at its nominal load in this mode.
    #[must_use]
    pub fn is_full_load(self) -> bool {
        matches!(self, Self::SolarCharge | Self::SolarDraw | Self::StorageOnly)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(OperatingMode::SolarCharge.to_string(), "Solar + Charge");
        assert_eq!(OperatingMode::SolarPartialDraw.to_string(), "Solar + Partial Draw");
        assert_eq!(OperatingMode::Off.to_string(), "Off");
        assert!(!OperatingMode::PartialStorage.is_full_load());
    }
}
