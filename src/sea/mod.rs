//! The sea: obstacle grid, route endpoints and the route hand-off
//!
//! `Sea` is the single owner of all mutable search state. Setting an
//! endpoint runs a full search synchronously as soon as both endpoints are
//! known; the result waits in a [`RouteSlot`] until a consumer takes it.
//!
//! Invalid endpoint requests are ignored rather than reported, which suits a
//! click-to-place front end where a bad click simply does nothing.

pub mod route_slot;

pub use route_slot::RouteSlot;

use log::{debug, info};

use crate::common::{
    ClearanceMap, GridPoint, MapSource, Orientation, Pose, SeaResult, ShipPath,
};
use crate::path_planning::{SearchConfig, ShipAStarPlanner, ShipKinematics};
use crate::utils::{MapSymbols, ObstacleGrid};

/// Configuration for a [`Sea`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeaConfig {
    /// Map file symbols
    pub symbols: MapSymbols,
    /// Search costs and budget
    pub search: SearchConfig,
    /// Long axis of the ship when placed at the start
    pub start_orientation: Orientation,
}

impl Default for SeaConfig {
    fn default() -> Self {
        Self {
            symbols: MapSymbols::default(),
            search: SearchConfig::default(),
            start_orientation: Orientation::Vertical,
        }
    }
}

/// Obstacle grid plus start/finish, recomputing the route on every change
#[derive(Debug, Default)]
pub struct Sea {
    config: SeaConfig,
    grid: Option<ObstacleGrid>,
    map_name: Option<String>,
    start: GridPoint,
    finish: GridPoint,
    route: RouteSlot,
}

impl Sea {
    pub fn new(config: SeaConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(SeaConfig::default())
    }

    pub fn config(&self) -> &SeaConfig {
        &self.config
    }

    /// Install a new grid from rows of symbols.
    ///
    /// On success the endpoints and any stored route are cleared. On failure
    /// nothing changes.
    pub fn load<R: AsRef<[u8]>>(&mut self, rows: &[R]) -> SeaResult<()> {
        let grid = ObstacleGrid::from_rows(rows, &self.config.symbols)?;
        self.install(grid, None);
        Ok(())
    }

    /// Install a grid from a raw payload with `\n` row terminators
    pub fn load_bytes(&mut self, data: &[u8]) -> SeaResult<()> {
        let rows: Vec<&[u8]> = data.split(|&b| b == b'\n').collect();
        self.load(&rows)
    }

    /// Pull the next map from `source` and install it
    pub fn reload<S: MapSource + ?Sized>(&mut self, source: &mut S) -> SeaResult<()> {
        let raw = source.next_map()?;
        let grid = ObstacleGrid::from_rows(&raw.rows, &self.config.symbols)?;
        self.install(grid, Some(raw.name));
        Ok(())
    }

    fn install(&mut self, grid: ObstacleGrid, name: Option<String>) {
        info!(
            "Loaded map {} ({} rows x {} cols, {} obstacles)",
            name.as_deref().unwrap_or("<inline>"),
            grid.nrows(),
            grid.ncols(),
            grid.obstacles().count()
        );
        self.grid = Some(grid);
        self.map_name = name;
        self.start.clear();
        self.finish.clear();
        self.route.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.grid.is_some()
    }

    /// True only for an in-bounds free cell of the loaded grid
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        ClearanceMap::is_free(self, row, col)
    }

    pub fn rows(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.nrows())
    }

    pub fn cols(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.ncols())
    }

    /// One-line summary for status displays
    pub fn describe(&self) -> String {
        if !self.is_loaded() {
            return "Map is not loaded".to_string();
        }
        format!(
            "{} [{}x{}]",
            self.map_name.as_deref().unwrap_or("<inline>"),
            self.cols(),
            self.rows()
        )
    }

    /// Place the ship's start; ignored unless the hull fits and the cell is
    /// not the finish
    pub fn set_start(&mut self, row: i32, col: i32) {
        let point = GridPoint::new(row, col);
        let fits = ShipKinematics::new(&*self).can_place(point, self.config.start_orientation);
        if !fits || self.finish.equals(row, col) {
            debug!("Start ({},{}) rejected", row, col);
            return;
        }
        self.start = point;
        self.recompute();
    }

    /// Set the target cell; ignored unless it is free and not the start
    pub fn set_finish(&mut self, row: i32, col: i32) {
        if !self.is_free(row, col) || self.start.equals(row, col) {
            debug!("Finish ({},{}) rejected", row, col);
            return;
        }
        self.finish = GridPoint::new(row, col);
        self.recompute();
    }

    pub fn get_start(&self) -> GridPoint {
        self.start
    }

    pub fn get_finish(&self) -> GridPoint {
        self.finish
    }

    pub fn limits_ready(&self) -> bool {
        !self.start.is_empty() && !self.finish.is_empty()
    }

    /// Blocked cells in row-major order; a fresh iterator on every call
    pub fn enumerate_obstacles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.grid.iter().flat_map(|g| g.obstacles())
    }

    pub fn path_ready(&self) -> bool {
        self.route.is_ready()
    }

    /// Hand out the latest route once; `None` until the next recompute
    pub fn take_path(&mut self) -> Option<ShipPath> {
        self.route.take()
    }

    fn recompute(&mut self) {
        if !self.limits_ready() {
            return;
        }
        let grid = match self.grid.as_ref() {
            Some(grid) => grid,
            None => return,
        };

        let planner = ShipAStarPlanner::new(grid, self.config.search.clone());
        let root = Pose::placed(self.start, self.config.start_orientation);
        let outcome = planner.plan(root, self.finish);
        match outcome.cost {
            Some(cost) => debug!(
                "Route ({},{}) -> ({},{}): {} poses, cost {}, {} expanded",
                self.start.row,
                self.start.col,
                self.finish.row,
                self.finish.col,
                outcome.path.len(),
                cost,
                outcome.expanded
            ),
            None => debug!(
                "No route ({},{}) -> ({},{}) after {} expansions",
                self.start.row, self.start.col, self.finish.row, self.finish.col, outcome.expanded
            ),
        }
        self.route.store(outcome.path);
    }
}

impl ClearanceMap for Sea {
    fn is_free(&self, row: i32, col: i32) -> bool {
        self.grid.as_ref().map_or(false, |g| g.is_free(row, col))
    }
}
