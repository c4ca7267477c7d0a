// Ship route demo
// Loads a map from a directory of map files, places start and finish, and
// prints the route the ship would take.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use gnuplot::{AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};
use log::{info, warn};

use ship_route::{GridPoint, MapCatalog, Sea, ShipPath};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding map files
    #[arg(short, long, default_value = "maps")]
    maps: PathBuf,

    /// Number of map files to skip before loading
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Start cell as "row,col"
    #[arg(long, value_parser = parse_cell)]
    start: GridPoint,

    /// Finish cell as "row,col"
    #[arg(long, value_parser = parse_cell)]
    finish: GridPoint,

    /// Save a plot of the map and route to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn parse_cell(s: &str) -> Result<GridPoint, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \"{}\"", s))?;
    let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(GridPoint::new(row, col))
}

fn plot_route(sea: &Sea, path: &ShipPath, file: &Path) -> Result<(), String> {
    // Rows grow downwards on screen, so plot them negated
    let (ox, oy): (Vec<f64>, Vec<f64>) = sea
        .enumerate_obstacles()
        .map(|(r, c)| (c as f64, -(r as f64)))
        .unzip();
    let (px, py): (Vec<f64>, Vec<f64>) = path
        .iter()
        .map(|p| (p.col as f64, -(p.row as f64)))
        .unzip();
    let (tx, ty): (Vec<f64>, Vec<f64>) = path
        .iter()
        .filter(|p| p.turn.is_turn())
        .map(|p| (p.col as f64, -(p.row as f64)))
        .unzip();

    let start = sea.get_start();
    let finish = sea.get_finish();

    let mut fg = Figure::new();
    fg.axes2d()
        .set_title(&sea.describe(), &[])
        .set_x_label("col", &[])
        .set_y_label("-row", &[])
        .points(
            &ox,
            &oy,
            &[Caption("Obstacles"), Color("#000000"), PointSymbol('S'), PointSize(1.5)],
        )
        .lines(&px, &py, &[Caption("Route"), Color("#FF0000"), LineWidth(2.0)])
        .points(
            &tx,
            &ty,
            &[Caption("Turns"), Color("#FFA500"), PointSymbol('O'), PointSize(1.5)],
        )
        .points(
            &[start.col as f64],
            &[-(start.row as f64)],
            &[Caption("Start"), Color("#00FF00"), PointSymbol('O'), PointSize(2.0)],
        )
        .points(
            &[finish.col as f64],
            &[-(finish.row as f64)],
            &[Caption("Finish"), Color("#0000FF"), PointSymbol('O'), PointSize(2.0)],
        );

    let name = file.to_string_lossy().into_owned();
    fg.save_to_svg(name.as_str(), 800, 600)
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut catalog = MapCatalog::open(&args.maps)?;
    catalog.skip(args.skip);

    let mut sea = Sea::with_defaults();
    sea.reload(&mut catalog)?;
    println!("{}", sea.describe());

    sea.set_start(args.start.row, args.start.col);
    sea.set_finish(args.finish.row, args.finish.col);
    if sea.get_start() != args.start {
        warn!("Start ({},{}) does not fit the ship", args.start.row, args.start.col);
    }
    if sea.get_finish() != args.finish {
        warn!("Finish ({},{}) is not open water", args.finish.row, args.finish.col);
    }

    let path = match sea.take_path() {
        Some(path) => path,
        None => {
            println!("No route computed");
            return Ok(());
        }
    };
    if path.is_empty() {
        println!("No route found");
        return Ok(());
    }

    for (i, pose) in path.iter().enumerate() {
        println!("{:>3}: {}", i, pose);
    }
    println!(
        "{} poses, {} turns, cost {}",
        path.len(),
        path.turn_count(),
        path.total_cost(&sea.config().search)
    );

    if let Some(file) = &args.svg {
        plot_route(&sea, &path, file)?;
        info!("Saved plot to {}", file.display());
    }

    Ok(())
}
