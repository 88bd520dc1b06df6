use crate::align::structs::Cache;
use serde_json::json;

pub type JsonVec = Vec<serde_json::Value>;

impl Cache {
    /// Every cell with its coordinates, for a viewer that draws the table
    /// and highlights the marked path.
    pub fn json(&self) -> serde_json::Value {
        let mut cells: JsonVec = vec![];

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = self.get(row, col);
                cells.push(json!({
                    "id": format!("cell-{}-{}", row, col),
                    "row": row,
                    "col": col,
                    "score": cell.score(),
                    "parent": cell.parent(),
                    "marked": cell.is_marked(),
                }));
            }
        }

        json!({
            "rows": self.rows(),
            "cols": self.cols(),
            "cells": cells,
        })
    }
}
