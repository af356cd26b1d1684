use std::cmp::Ordering;

use glam::IVec2;
use util::{HashMap, StrExt};
use world::{AreaId, ContainerData, ContainerKey, LocationId, RangeMode};

use crate::{ContainerKind, ContainerRegistry, ManagedContainer, RangeHandler};

/// Builds the container lists the player gets to see.
///
/// Wraps the host's raw container references with user metadata and applies
/// range, hidden flags and ordering on top.
pub struct ContainerFactory<'a, R> {
    registry: &'a R,
    data: &'a ContainerData,
    enable_shipping_bin: bool,
}

impl<'a, R: ContainerRegistry> ContainerFactory<'a, R> {
    pub fn new(
        registry: &'a R,
        data: &'a ContainerData,
        enable_shipping_bin: bool,
    ) -> Self {
        ContainerFactory {
            registry,
            data,
            enable_shipping_bin,
        }
    }

    /// Every container in the world in discovery order, with no range or
    /// visibility filtering.
    ///
    /// Containers in locations that have disappeared are skipped. The
    /// shipping bin shows up once for every place it can be reached from,
    /// and not at all if it's disabled.
    pub fn all_containers(&self) -> Vec<ManagedContainer<R::Handle>> {
        let mut ret = Vec::new();
        // Running count of unnamed containers per location for default
        // names.
        let mut counts: HashMap<LocationId, usize> = HashMap::default();

        for c in self.registry.all_containers() {
            if c.kind == ContainerKind::ShippingBin
                && !self.enable_shipping_bin
            {
                continue;
            }

            let Some(location) = self.registry.location(&c.location) else {
                continue;
            };

            let key = match c.kind {
                ContainerKind::ShippingBin => ContainerKey::ShippingBin,
                ContainerKind::Ordinary => {
                    ContainerKey::Tile(c.location.clone(), c.footprint.origin)
                }
            };

            let default_name = match c.kind {
                ContainerKind::ShippingBin => "Shipping Bin".to_string(),
                ContainerKind::Ordinary => {
                    let n = counts.entry(c.location.clone()).or_default();
                    *n += 1;
                    format!("Chest #{n}")
                }
            };

            let custom_name = self.data.custom_name(&key).map(str::to_string);
            let hidden = self.data.is_hidden(&key);

            ret.push(ManagedContainer {
                handle: c.handle,
                key,
                kind: c.kind,
                location,
                footprint: c.footprint,
                custom_name: custom_name.is_some(),
                name: custom_name.unwrap_or(default_name),
                hidden,
            });
        }

        ret
    }

    /// Containers the player can reach, in presentation order.
    ///
    /// `force_include` is kept even when it is out of range or hidden, so
    /// the container whose menu is open stays selectable. When the range
    /// mode is `None` nothing is returned, forced or not.
    ///
    /// The shipping bin is listed once, from the first place it can be
    /// reached from that passes the filters.
    ///
    /// Order is world area name with unassigned locations last, then
    /// location name, then container name, then discovery order.
    pub fn discover(
        &self,
        range: &RangeHandler,
        exclude_hidden: bool,
        force_include: Option<R::Handle>,
    ) -> Vec<ManagedContainer<R::Handle>> {
        let mode = range.current_mode();
        if mode == RangeMode::None {
            return Vec::new();
        }

        // One snapshot of the world per pass.
        let all = self.all_containers();
        let total = all.len();

        let mut seen_bin = false;
        let mut ret: Vec<(usize, ManagedContainer<R::Handle>)> = all
            .into_iter()
            .enumerate()
            .filter(|(_, c)| {
                let forced = force_include.is_some_and(|h| c.is_same_as(&h));
                forced
                    || (range.in_scope(&c.location.id)
                        && !(exclude_hidden && c.hidden))
            })
            .filter(|(_, c)| {
                !c.is_shipping_bin() || !std::mem::replace(&mut seen_bin, true)
            })
            .collect();

        let areas = range.areas();
        ret.sort_by(|(i, a), (j, b)| {
            area_cmp(
                areas.area_of(&a.location.id),
                areas.area_of(&b.location.id),
            )
            .then_with(|| a.location.name.caseless_cmp(&b.location.name))
            .then_with(|| a.location.id.cmp(&b.location.id))
            .then_with(|| a.name.caseless_cmp(&b.name))
            .then(i.cmp(j))
        });

        log::debug!(
            "discovered {} of {} containers, range {mode} from {}",
            ret.len(),
            total,
            range.current_location()
        );

        ret.into_iter().map(|(_, c)| c).collect()
    }

    /// The container physically occupying `pos` in `location`, regardless
    /// of range or hidden flags.
    pub fn lookup(
        &self,
        location: &LocationId,
        pos: IVec2,
    ) -> Option<ManagedContainer<R::Handle>> {
        self.all_containers()
            .into_iter()
            .find(|c| &c.location.id == location && c.footprint.contains(pos))
    }

    /// The container an open storage menu was opened from.
    pub fn lookup_by_open_handle(
        &self,
        menu: &R::Menu,
    ) -> Option<ManagedContainer<R::Handle>> {
        let handle = self.registry.menu_source(menu)?;
        self.all_containers()
            .into_iter()
            .find(|c| c.is_same_as(&handle))
    }
}

/// Named areas in caseless order, unassigned locations after all of them.
fn area_cmp(a: Option<&AreaId>, b: Option<&AreaId>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.caseless_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
