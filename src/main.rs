use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use engine::{Worldfile, hover_label, open_menu, player_range, prelude::*};
use itertools::Itertools;
use world::{AreaId, SharedAreaIndex};

#[derive(Parser, Debug)]
struct Args {
    /// World description to look around in.
    world: PathBuf,

    #[arg(long, help = "Settings file or directory, defaults if left out")]
    data: Option<PathBuf>,

    #[arg(
        long,
        value_name = "LOCATION",
        value_parser = |e: &str| Ok::<LocationId, &str>(e.into()),
        help = "Look from here instead of the player's location"
    )]
    from: Option<LocationId>,

    #[arg(
        long,
        value_parser = |e: &str| e.parse::<RangeMode>(),
        help = "Override the configured range"
    )]
    range: Option<RangeMode>,

    #[arg(long, help = "Play as a secondary player")]
    guest: bool,

    #[arg(long, help = "List hidden containers too")]
    show_hidden: bool,

    #[arg(long, help = "Open the container browser instead of listing")]
    open: bool,

    #[arg(
        long,
        value_name = "X,Y",
        value_parser = parse_tile,
        help = "Describe the container on a tile"
    )]
    at: Option<IVec2>,

    #[arg(
        long,
        value_name = "LOCATION=AREA",
        value_parser = parse_assignment,
        help = "Move a location to another world area, empty area unassigns"
    )]
    assign: Vec<(LocationId, Option<AreaId>)>,

    #[arg(long, help = "Write area changes back to the data file")]
    save: bool,

    #[arg(long, help = "Print the effective settings and exit")]
    dump_data: bool,
}

fn parse_tile(s: &str) -> anyhow::Result<IVec2> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got {s:?}");
    };
    Ok(ivec2(x.trim().parse()?, y.trim().parse()?))
}

fn parse_assignment(s: &str) -> anyhow::Result<(LocationId, Option<AreaId>)> {
    let Some((loc, area)) = s.split_once('=') else {
        bail!("expected LOCATION=AREA, got {s:?}");
    };
    let (loc, area) = (loc.trim(), area.trim());
    if loc.is_empty() {
        bail!("missing location in {s:?}");
    }
    Ok((loc.into(), (!area.is_empty()).then(|| area.into())))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();

    let worldfile = Worldfile::load(&args.world)
        .with_context(|| format!("loading {:?}", args.world))?;
    let mut data = match &args.data {
        Some(path) => Data::load(path)?,
        None => Data::default(),
    };
    if let Some(range) = args.range {
        data.settings.range = range;
    }

    let areas = SharedAreaIndex::new(data.area_index());
    for (location, area) in &args.assign {
        areas.reassign(location, area.clone());
    }

    if args.save {
        let Some(path) = &args.data else {
            bail!("--save needs a --data file to write to");
        };
        data.world_areas = areas.snapshot().to_config();
        data.save(path)?;
        log::info!("saved world areas to {path:?}");
    }

    if args.dump_data {
        data.world_areas = areas.snapshot().to_config();
        print!("{}", idm::to_string(&data)?);
        return Ok(());
    }

    let host = Host::new(&worldfile);
    let current = args.from.unwrap_or_else(|| worldfile.player.clone());
    let Some(here) = host.location(&current) else {
        bail!("unknown location {current}");
    };

    let factory = ContainerFactory::new(
        &host,
        &data.containers,
        data.settings.enable_shipping_bin,
    );
    let range = player_range(
        &data.settings,
        areas.snapshot(),
        &current,
        !(args.guest || worldfile.guest),
    );
    log::info!("in {here} with range {}", range.current_mode());

    if let Some(tile) = args.at {
        match factory.lookup(&current, tile) {
            Some(c) => println!("{c} {}", c.handle),
            None => println!("nothing at {},{}", tile.x, tile.y),
        }
        if let Some(label) =
            hover_label(&data.settings, &factory, &current, tile)
        {
            println!("tooltip: {label}");
        }
        return Ok(());
    }

    if args.open {
        match open_menu(&data.settings, &factory, &range, None) {
            OpenOutcome::Open(c) => println!("opened {c}"),
            OpenOutcome::Inactive => log::info!("remote access is off"),
            outcome => println!("{outcome}"),
        }
        return Ok(());
    }

    let found = factory.discover(&range, !args.show_hidden, None);
    if found.is_empty() {
        println!("no containers in range");
        return Ok(());
    }

    for (area, group) in &found
        .iter()
        .chunk_by(|c| range.areas().area_of(&c.location.id).cloned())
    {
        match area {
            Some(area) => println!("{area}"),
            None => println!("(no area)"),
        }
        for c in group {
            if c.hidden {
                println!("  {c} [hidden]");
            } else {
                println!("  {c}");
            }
        }
    }

    Ok(())
}
