use serde::Serialize;

use crate::core::{Grid, Solution, Vec2};

#[derive(Serialize, Debug)]
struct JsonData<'a> {
    rows: i32,
    cols: i32,
    grid: Vec<Vec<u32>>,
    optimal_gold: u64,
    optimal_path: &'a [Vec2],
}

pub fn get_json_data(grid: &Grid, solution: &Solution) -> Result<String, serde_json::Error> {
    let json_data = JsonData {
        rows: grid.height(),
        cols: grid.width(),
        grid: grid.to_rows(),
        optimal_gold: solution.value,
        optimal_path: &solution.path,
    };
    serde_json::to_string_pretty(&json_data)
}
