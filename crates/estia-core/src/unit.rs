//! Unit types watched on the page.

use std::fmt;
use std::path::PathBuf;

use estia_config::{UnitLocatorConfig, WatchConfig};

/// Apartment unit types the page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    OneBedroom,
    TwoBedroom,
}

impl UnitKind {
    pub const ALL: [UnitKind; 2] = [UnitKind::OneBedroom, UnitKind::TwoBedroom];

    /// Human label used in alert texts.
    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::OneBedroom => "1 bedroom",
            UnitKind::TwoBedroom => "2 bedroom",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unit type with its locators and marker file.
#[derive(Debug, Clone)]
pub struct UnitTarget {
    pub kind: UnitKind,
    pub locators: UnitLocatorConfig,
    pub marker_path: PathBuf,
}

impl UnitTarget {
    /// Both unit targets, in check order.
    pub fn from_config(config: &WatchConfig) -> Vec<UnitTarget> {
        UnitKind::ALL
            .into_iter()
            .map(|kind| match kind {
                UnitKind::OneBedroom => UnitTarget {
                    kind,
                    locators: config.target.one_bedroom.clone(),
                    marker_path: config.state.one_bedroom_marker_path(),
                },
                UnitKind::TwoBedroom => UnitTarget {
                    kind,
                    locators: config.target.two_bedroom.clone(),
                    marker_path: config.state.two_bedroom_marker_path(),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(UnitKind::OneBedroom.label(), "1 bedroom");
        assert_eq!(UnitKind::TwoBedroom.to_string(), "2 bedroom");
    }

    #[test]
    fn test_targets_from_config() {
        let mut config = WatchConfig::default();
        config.state.dir = Some(PathBuf::from("/srv/estia"));

        let targets = UnitTarget::from_config(&config);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].kind, UnitKind::OneBedroom);
        assert_eq!(targets[0].marker_path, PathBuf::from("/srv/estia/check_one.log"));
        assert_eq!(targets[0].locators, config.target.one_bedroom);
        assert_eq!(targets[1].kind, UnitKind::TwoBedroom);
        assert_eq!(targets[1].marker_path, PathBuf::from("/srv/estia/check_two.log"));
    }
}
