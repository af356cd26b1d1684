//! Player-facing access rules on top of container discovery.

use std::{fmt, sync::Arc};

use glam::IVec2;
use world::{LocationId, RangeMode, Settings, WorldAreaIndex};

use crate::{
    ContainerFactory, ContainerRegistry, ManagedContainer, RangeHandler,
};

/// Effective range for the player standing at `current`.
///
/// Disabled locations turn access off entirely. Secondary players can only
/// reach their own location since the host only keeps the other locations
/// in sync for the main player.
pub fn player_range(
    settings: &Settings,
    areas: Arc<WorldAreaIndex>,
    current: &LocationId,
    is_main_player: bool,
) -> RangeHandler {
    let mode = if settings.is_disabled_in(current) {
        RangeMode::None
    } else if !is_main_player && settings.range > RangeMode::CurrentLocation {
        log::info!(
            "not the main player, limiting range to the current location"
        );
        RangeMode::CurrentLocation
    } else {
        settings.range
    };

    RangeHandler::new(mode, current.clone(), areas)
}

/// Result of the player asking to browse containers.
#[derive(Clone, Debug)]
pub enum OpenOutcome<H> {
    /// Remote access is switched off, do nothing.
    Inactive,
    /// Remote access is disabled where the player is standing.
    DisabledHere,
    /// There's nothing to show.
    NoContainers {
        /// Range was unlimited, so there are no containers anywhere.
        unlimited: bool,
    },
    Open(ManagedContainer<H>),
}

impl<H> OpenOutcome<H> {
    /// Message to show the player, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            OpenOutcome::DisabledHere => {
                Some("Remote chest access is disabled here.")
            }
            OpenOutcome::NoContainers { unlimited: true } => {
                Some("You don't have any chests yet.")
            }
            OpenOutcome::NoContainers { unlimited: false } => {
                Some("You don't have any chests in range.")
            }
            OpenOutcome::Inactive | OpenOutcome::Open(_) => None,
        }
    }
}

impl<H> fmt::Display for OpenOutcome<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenOutcome::Open(c) => write!(f, "{c}"),
            _ => write!(f, "{}", self.message().unwrap_or_default()),
        }
    }
}

/// Pick the container to show when the player opens the browser.
///
/// Reopens `previously_selected` if it's still in reach, otherwise the first
/// container in presentation order.
pub fn open_menu<R: ContainerRegistry>(
    settings: &Settings,
    factory: &ContainerFactory<'_, R>,
    range: &RangeHandler,
    previously_selected: Option<R::Handle>,
) -> OpenOutcome<R::Handle> {
    if settings.range == RangeMode::None {
        return OpenOutcome::Inactive;
    }

    if settings.is_disabled_in(range.current_location()) {
        return OpenOutcome::DisabledHere;
    }

    let mut found = factory.discover(range, true, None);
    if found.is_empty() {
        return OpenOutcome::NoContainers {
            unlimited: settings.range == RangeMode::Unlimited,
        };
    }

    let idx = previously_selected
        .and_then(|h| found.iter().position(|c| c.is_same_as(&h)))
        .unwrap_or(0);
    OpenOutcome::Open(found.swap_remove(idx))
}

/// Container list shown next to an open storage menu.
#[derive(Clone, Debug)]
pub struct Overlay<H> {
    /// The container whose menu is open.
    pub open: ManagedContainer<H>,
    /// Containers the player can switch to, always including `open`.
    pub containers: Vec<ManagedContainer<H>>,
}

impl<H: Eq> Overlay<H> {
    /// Position of the open container in the list.
    pub fn selected_index(&self) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| c.is_same_as(&self.open.handle))
    }
}

/// Build the overlay for a menu, `None` if the menu wasn't opened from a
/// known container.
pub fn overlay<R: ContainerRegistry>(
    factory: &ContainerFactory<'_, R>,
    range: &RangeHandler,
    menu: &R::Menu,
) -> Option<Overlay<R::Handle>> {
    let open = factory.lookup_by_open_handle(menu)?;
    let containers = factory.discover(range, true, Some(open.handle));
    Some(Overlay { open, containers })
}

/// Name to show when hovering over a tile, only for containers the player
/// has named.
pub fn hover_label<R: ContainerRegistry>(
    settings: &Settings,
    factory: &ContainerFactory<'_, R>,
    location: &LocationId,
    tile: IVec2,
) -> Option<String> {
    if !settings.show_hover_tooltips {
        return None;
    }

    let c = factory.lookup(location, tile)?;
    (!c.has_default_name()).then_some(c.name)
}

#[cfg(test)]
mod test {
    use glam::ivec2;
    use world::{ContainerData, ContainerKey, WorldAreas};

    use super::*;
    use crate::{ContainerId, ContainerKind, Footprint, Host};

    fn areas() -> Arc<WorldAreaIndex> {
        let config: WorldAreas =
            [("Outdoors", vec!["Farm", "Greenhouse"])].into_iter().collect();
        Arc::new(WorldAreaIndex::new(&config))
    }

    fn host() -> (Host, ContainerId, ContainerId) {
        let mut host = Host::default();
        host.add_location("Farm", "Farm");
        host.add_location("Greenhouse", "Greenhouse");
        host.add_location("UndergroundMine3", "The Mines");
        let farm = host.spawn(
            "Farm",
            Footprint::tile(ivec2(1, 1)),
            ContainerKind::Ordinary,
        );
        let greenhouse = host.spawn(
            "Greenhouse",
            Footprint::tile(ivec2(2, 2)),
            ContainerKind::Ordinary,
        );
        (host, farm, greenhouse)
    }

    fn settings(range: RangeMode) -> Settings {
        Settings {
            range,
            disabled_in_locations: vec!["UndergroundMine".into()],
            ..Default::default()
        }
    }

    #[test]
    fn range_rules() {
        let s = settings(RangeMode::SameWorldArea);

        let r = player_range(&s, areas(), &"Farm".into(), true);
        assert_eq!(r.current_mode(), RangeMode::SameWorldArea);

        let r = player_range(&s, areas(), &"Farm".into(), false);
        assert_eq!(r.current_mode(), RangeMode::CurrentLocation);

        let r = player_range(&s, areas(), &"UndergroundMine3".into(), true);
        assert_eq!(r.current_mode(), RangeMode::None);

        let s = settings(RangeMode::None);
        let r = player_range(&s, areas(), &"Farm".into(), false);
        assert_eq!(r.current_mode(), RangeMode::None);
    }

    #[test]
    fn open_outcomes() {
        let (host, _, greenhouse) = host();
        let data = ContainerData::default();
        let factory = ContainerFactory::new(&host, &data, true);

        let s = settings(RangeMode::None);
        let r = player_range(&s, areas(), &"Farm".into(), true);
        assert!(matches!(
            open_menu(&s, &factory, &r, None),
            OpenOutcome::Inactive
        ));

        let s = settings(RangeMode::Unlimited);
        let r = player_range(&s, areas(), &"UndergroundMine3".into(), true);
        let outcome = open_menu(&s, &factory, &r, None);
        assert!(matches!(outcome, OpenOutcome::DisabledHere));
        assert_eq!(
            outcome.message(),
            Some("Remote chest access is disabled here.")
        );

        let r = player_range(&s, areas(), &"Farm".into(), true);
        match open_menu(&s, &factory, &r, None) {
            OpenOutcome::Open(c) => assert_eq!(c.location.name, "Farm"),
            other => panic!("unexpected {other:?}"),
        }
        match open_menu(&s, &factory, &r, Some(greenhouse)) {
            OpenOutcome::Open(c) => assert!(c.is_same_as(&greenhouse)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn nothing_found() {
        let mut host = Host::default();
        host.add_location("Farm", "Farm");
        let data = ContainerData::default();
        let factory = ContainerFactory::new(&host, &data, true);

        let s = settings(RangeMode::Unlimited);
        let r = player_range(&s, areas(), &"Farm".into(), true);
        let outcome = open_menu(&s, &factory, &r, None);
        assert_eq!(outcome.message(), Some("You don't have any chests yet."));

        let s = settings(RangeMode::CurrentLocation);
        let r = player_range(&s, areas(), &"Farm".into(), true);
        let outcome = open_menu(&s, &factory, &r, None);
        assert_eq!(
            outcome.to_string(),
            "You don't have any chests in range."
        );
    }

    #[test]
    fn overlay_keeps_open_container() {
        let (host, farm, greenhouse) = host();
        let mut data = ContainerData::default();
        data.set_hidden(
            ContainerKey::Tile("Greenhouse".into(), ivec2(2, 2)),
            true,
        );
        let factory = ContainerFactory::new(&host, &data, true);
        let s = settings(RangeMode::SameWorldArea);
        let r = player_range(&s, areas(), &"Farm".into(), true);

        let o = overlay(&factory, &r, &host.open(greenhouse)).unwrap();
        assert!(o.open.is_same_as(&greenhouse));
        assert_eq!(o.containers.len(), 2);
        assert_eq!(o.selected_index(), Some(1));

        let o = overlay(&factory, &r, &host.open(farm)).unwrap();
        assert_eq!(o.containers.len(), 1);
        assert_eq!(o.selected_index(), Some(0));

        assert!(overlay(&factory, &r, &Default::default()).is_none());
    }

    #[test]
    fn hover_labels() {
        let (host, _, _) = host();
        let mut data = ContainerData::default();
        data.rename(ContainerKey::Tile("Farm".into(), ivec2(1, 1)), "Seeds");
        let factory = ContainerFactory::new(&host, &data, true);

        let mut s = settings(RangeMode::Unlimited);
        assert_eq!(
            hover_label(&s, &factory, &"Farm".into(), ivec2(1, 1)),
            Some("Seeds".to_string())
        );
        // Unnamed container.
        assert_eq!(
            hover_label(&s, &factory, &"Greenhouse".into(), ivec2(2, 2)),
            None
        );
        // Empty tile.
        assert_eq!(
            hover_label(&s, &factory, &"Farm".into(), ivec2(0, 0)),
            None
        );

        s.show_hover_tooltips = false;
        assert_eq!(
            hover_label(&s, &factory, &"Farm".into(), ivec2(1, 1)),
            None
        );
    }
}
