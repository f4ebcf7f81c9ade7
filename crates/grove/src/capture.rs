//! Boundary capture: ordered vertex list with bounded undo/redo.
//!
//! Purpose
//! - Hold the boundary being traced and every rule about how raw pointer
//!   positions become vertices: grid snapping, viewport clamping, vertex
//!   selection, and the closable signal. The geometry kernel downstream
//!   assumes coordinates were validated here.
//!
//! History model
//! - Linear, append-only snapshot list with a cursor. Every committed edit
//!   pushes a full immutable copy of the vertex list; `undo`/`redo` move
//!   the cursor, a new edit truncates the redo tail, and the list is
//!   bounded by dropping the oldest snapshot. Continuous drags go through
//!   `drag_point`, which does not commit; callers commit once on release.

use crate::geom::Point;

/// How raw positions are interpreted by [`BoundaryCapture::add_point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureMode {
    /// Discrete clicks; a click near an existing vertex selects it, and
    /// the next click moves the selected vertex there.
    Point,
    /// Continuous tracing; every accepted position appends a vertex.
    Freehand,
}

/// What an `add_point` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Selected(usize),
    Moved(usize),
}

/// Capture surface configuration.
#[derive(Clone, Copy, Debug)]
pub struct CaptureCfg {
    pub width: f64,
    pub height: f64,
    /// Accepted points are clamped into `[pad, dim - pad]` on both axes.
    pub pad: f64,
    /// Picking radius around an existing vertex, in working units.
    pub select_threshold: f64,
    /// Distance to the first vertex at which the boundary signals closable.
    pub close_epsilon: f64,
    /// Snap coordinates to the nearest multiple of this step, if set.
    /// Applied before clamping.
    pub grid_snap: Option<f64>,
    /// Maximum retained history snapshots.
    pub history_limit: usize,
}

impl Default for CaptureCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pad: 20.0,
            select_threshold: 10.0,
            close_epsilon: 15.0,
            grid_snap: None,
            history_limit: 64,
        }
    }
}

/// Ordered vertex list with selection state and bounded linear undo/redo.
#[derive(Clone, Debug)]
pub struct BoundaryCapture {
    cfg: CaptureCfg,
    points: Vec<Point>,
    selected: Option<usize>,
    history: Vec<Vec<Point>>,
    cursor: usize,
}

impl BoundaryCapture {
    pub fn new(cfg: CaptureCfg) -> Self {
        Self {
            cfg,
            points: Vec::new(),
            selected: None,
            history: vec![Vec::new()],
            cursor: 0,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn cfg(&self) -> &CaptureCfg {
        &self.cfg
    }

    /// Accept a raw position. In `Point` mode a position within the select
    /// threshold of an existing vertex selects that vertex instead of
    /// duplicating it, and the next call moves the selected vertex.
    pub fn add_point(&mut self, raw: Point, mode: CaptureMode) -> AddOutcome {
        let p = self.process(raw);
        if mode == CaptureMode::Point {
            if let Some(i) = self.selected.take() {
                self.points[i] = p;
                self.commit();
                return AddOutcome::Moved(i);
            }
            if let Some(i) = self.nearest_vertex(p) {
                self.selected = Some(i);
                return AddOutcome::Selected(i);
            }
        }
        self.points.push(p);
        self.commit();
        AddOutcome::Added
    }

    /// Move a vertex and commit a snapshot (a discrete drop event).
    pub fn move_point(&mut self, index: usize, pos: Point) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.points[index] = self.process(pos);
        self.commit();
        true
    }

    /// Move a vertex without committing history. Intended for continuous
    /// drags; call [`BoundaryCapture::move_point`] once on release.
    pub fn drag_point(&mut self, index: usize, pos: Point) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.points[index] = self.process(pos);
        true
    }

    pub fn delete_point(&mut self, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        // Indexes shift on delete, so selection is dropped rather than remapped.
        self.selected = None;
        self.commit();
        true
    }

    /// True when `cursor` is within the close epsilon of the first vertex
    /// and enough points exist to close. The capture never finalizes or
    /// merges points itself; the caller decides.
    pub fn closable(&self, cursor: Point) -> bool {
        match self.points.first() {
            Some(first) if self.points.len() >= 2 => {
                (cursor - *first).norm() <= self.cfg.close_epsilon
            }
            _ => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.points = self.history[self.cursor].clone();
        self.selected = None;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.points = self.history[self.cursor].clone();
        self.selected = None;
        true
    }

    /// Clear the boundary. The cleared state is itself a snapshot, so a
    /// reset can be undone.
    pub fn reset(&mut self) {
        self.points.clear();
        self.selected = None;
        self.commit();
    }

    /// Snap (if configured) then clamp a raw position into the padded viewport.
    fn process(&self, raw: Point) -> Point {
        let mut p = raw;
        if let Some(step) = self.cfg.grid_snap {
            if step > 0.0 {
                p.x = (p.x / step).round() * step;
                p.y = (p.y / step).round() * step;
            }
        }
        Point::new(
            p.x.clamp(self.cfg.pad, self.cfg.width - self.cfg.pad),
            p.y.clamp(self.cfg.pad, self.cfg.height - self.cfg.pad),
        )
    }

    fn nearest_vertex(&self, p: Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.points.iter().enumerate() {
            let d = (*v - p).norm();
            if d <= self.cfg.select_threshold && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    fn commit(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.points.clone());
        if self.history.len() > self.cfg.history_limit.max(2) {
            self.history.remove(0);
        }
        self.cursor = self.history.len() - 1;
        tracing::trace!(
            points = self.points.len(),
            cursor = self.cursor,
            "boundary snapshot"
        );
    }
}
