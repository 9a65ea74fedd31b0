//! Editing operations applied to a [`SpellDocument`] by the host editor.
//!
//! Every operation keeps `points` non-empty and `selected_index` in range.

use crate::types::{Point, Ray, SpellDocument, Vector3};

/// Half-width of the editor's drag grid, in blocks.
pub const GRID_RANGE: f64 = 3.0;

impl SpellDocument {
    /// `None` only for a document whose `points` were emptied from outside.
    pub fn selected_point(&self) -> Option<&Point> {
        self.points.get(self.clamped_selection())
    }

    /// Restores a default point first if `points` is empty.
    pub fn selected_point_mut(&mut self) -> &mut Point {
        self.normalize();
        let index = self.clamped_selection();
        &mut self.points[index]
    }

    pub fn select_point(&mut self, index: usize) {
        self.selected_index = index.min(self.points.len().saturating_sub(1));
    }

    pub fn add_point(&mut self) {
        self.points.push(Point::default());
        self.selected_index = self.points.len() - 1;
    }

    pub fn clear_selected_commands(&mut self) {
        self.selected_point_mut().commands.clear();
    }

    /// Returns `false` and leaves the document alone when only one point is left.
    pub fn delete_selected_point(&mut self) -> bool {
        if self.points.len() <= 1 {
            return false;
        }
        let index = self.clamped_selection();
        self.points.remove(index);
        self.selected_index = index.saturating_sub(1);
        true
    }

    pub fn add_command(&mut self, command: impl Into<String>) {
        self.selected_point_mut().commands.push(command.into());
    }

    pub fn set_selected_offset(&mut self, offset: Vector3) {
        self.selected_point_mut().offset = offset;
    }

    pub fn reset_selected_offset(&mut self) {
        self.set_selected_offset(Vector3::default());
    }

    pub fn set_selected_offset_from_grid(&mut self, x: f64, y: f64) {
        let point = self.selected_point_mut();
        point.offset.x = round2(x.clamp(-GRID_RANGE, GRID_RANGE));
        point.offset.y = round2(y.clamp(-GRID_RANGE, GRID_RANGE));
    }

    pub fn add_ray(&mut self) -> usize {
        self.rays.push(Ray::default());
        self.rays.len() - 1
    }

    pub fn remove_ray(&mut self, index: usize) -> Option<Ray> {
        if index < self.rays.len() {
            Some(self.rays.remove(index))
        } else {
            None
        }
    }

    /// Restores the document invariants after external construction.
    pub fn normalize(&mut self) {
        if self.points.is_empty() {
            self.points.push(Point::default());
        }
        self.select_point(self.selected_index);
    }

    fn clamped_selection(&self) -> usize {
        self.selected_index.min(self.points.len().saturating_sub(1))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
