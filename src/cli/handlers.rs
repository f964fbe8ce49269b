use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    path::Path,
    time::{Duration, Instant},
};

use crate::{
    core::{
        color::Rgb,
        config::GridConfig,
        error::GridError,
        grid::{Cell, Grid},
        rng::Lcg,
    },
    render::{AnimationOpts, Loops, Recorder, encode::frame_duration},
};

use super::{
    parse::{FillArgs, LifeArgs, RenderArgs, SearchArgs},
    viewer,
};

// --- Shared Plumbing ---

fn rng_from(seed: Option<u64>) -> Lcg {
    seed.map_or_else(Lcg::seed_from_time, Lcg::seed)
}

/// Apply hold, write the animation, report, optionally open the viewer.
fn finish(rec: &mut Recorder, output: &str, r: &RenderArgs) -> Result<(), GridError> {
    rec.set_hold(Duration::from_millis(r.hold));
    let opts = AnimationOpts {
        duration: frame_duration(r.duration),
        loops: Loops::from_count(r.loops),
    };

    let t_encode = Instant::now();
    rec.save_animation(output, &opts)?;
    if r.debug {
        eprintln!(
            "{output}: {} frames encoded in {} µs",
            rec.len(),
            t_encode.elapsed().as_micros()
        );
    }
    if r.open {
        viewer::open(Path::new(output))?;
    }
    Ok(())
}

// --- Game of Life ---

pub fn life(a: &LifeArgs) -> Result<(), GridError> {
    let alive_color = Rgb::from_name(&a.color)?;
    let cfg = GridConfig::builder(a.cols, a.rows)
        .cell_size(a.render.cell_size, a.render.cell_size)
        .bg_color(Rgb::black())
        .counter_color(Rgb::white())
        .frame_counter(!a.render.no_counter)
        .build()?;
    let mut grid = Grid::new(cfg);
    let mut rng = rng_from(a.seed);

    let (cols, rows) = (a.cols as usize, a.rows as usize);
    let mut board = vec![false; cols * rows];
    for cell in &mut board {
        *cell = rng.chance(a.density);
    }

    let t_sim = Instant::now();
    let mut rec = Recorder::new();
    paint_board(&mut grid, &board, alive_color)?;
    rec.snapshot(&grid);

    let mut next = vec![false; cols * rows];
    for _ in 0..a.steps {
        for y in 0..rows {
            for x in 0..cols {
                #[allow(clippy::cast_possible_truncation)]
                let live = grid
                    .neighbors((x as u32, y as u32), true)
                    .into_iter()
                    .filter(|&(nx, ny)| board[ny as usize * cols + nx as usize])
                    .count();
                let here = board[y * cols + x];
                next[y * cols + x] = matches!((here, live), (true, 2 | 3) | (false, 3));
            }
        }
        std::mem::swap(&mut board, &mut next);
        paint_board(&mut grid, &board, alive_color)?;
        rec.snapshot(&grid);
    }
    if a.render.debug {
        eprintln!(
            "life: {} generations in {} µs",
            a.steps,
            t_sim.elapsed().as_micros()
        );
    }

    finish(&mut rec, &a.output, &a.render)?;
    Ok(())
}

fn paint_board(grid: &mut Grid, board: &[bool], alive: Rgb) -> Result<(), GridError> {
    let cols = grid.cols();
    #[allow(clippy::cast_possible_truncation)]
    for (i, &on) in board.iter().enumerate() {
        let cell = (i as u32 % cols, i as u32 / cols);
        if on {
            grid.fill_cell(cell, alive)?;
        } else {
            grid.clear_cell(cell)?;
        }
    }
    Ok(())
}

// --- Greedy Best-First Search ---

pub fn search(a: &SearchArgs) -> Result<(), GridError> {
    let cfg = GridConfig::builder(a.cols, a.rows)
        .cell_size(a.render.cell_size, a.render.cell_size)
        .gridline_width(1)
        .frame_counter(!a.render.no_counter)
        .build()?;
    let mut grid = Grid::new(cfg);

    let target = a.target;
    let manhattan = |(x, y): Cell| -> u64 {
        u64::from(x.abs_diff(target.0)) + u64::from(y.abs_diff(target.1))
    };

    let mut frontier: BinaryHeap<Reverse<(u64, Cell)>> = BinaryHeap::new();
    let mut came_from: HashMap<Cell, Option<Cell>> = HashMap::new();
    frontier.push(Reverse((manhattan(a.start), a.start)));
    came_from.insert(a.start, None);

    let mut rec = Recorder::new();
    grid.fill_cell(target, Rgb::new(100, 0, 0))?;
    grid.fill_cell(a.start, Rgb::new(0, 100, 0))?;
    rec.snapshot(&grid);

    let t_search = Instant::now();
    let mut reached = false;
    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == target {
            reached = true;
            break;
        }
        grid.fill_cell(current, Rgb::red())?;
        rec.snapshot(&grid);
        for next in grid.neighbors(current, a.diagonal) {
            if !came_from.contains_key(&next) {
                frontier.push(Reverse((manhattan(next), next)));
                grid.fill_cell(next, Rgb::blue())?;
                came_from.insert(next, Some(current));
            }
        }
    }

    if reached {
        // walk the parent chain back to the start, then replay it forward
        let mut path = Vec::new();
        let mut cursor = Some(target);
        while let Some(cell) = cursor {
            path.push(cell);
            cursor = came_from.get(&cell).copied().flatten();
        }
        for &cell in path.iter().rev() {
            grid.fill_cell(cell, Rgb::green())?;
            rec.snapshot(&grid);
        }
    } else {
        eprintln!("search: no path from {:?} to {:?}", a.start, a.target);
    }
    if a.render.debug {
        eprintln!(
            "search: {} expansions in {} µs",
            rec.len(),
            t_search.elapsed().as_micros()
        );
    }

    finish(&mut rec, &a.output, &a.render)?;
    Ok(())
}

// --- Random Fill ---

pub fn fill(a: &FillArgs) -> Result<(), GridError> {
    let cfg = GridConfig::builder(a.cols, a.rows)
        .cell_size(a.render.cell_size, a.render.cell_size)
        .gridline_width(1)
        .bg_color(Rgb::black())
        .counter_color(Rgb::white())
        .frame_counter(!a.render.no_counter)
        .build()?;
    let mut grid = Grid::new(cfg);
    let mut rng = rng_from(a.seed);

    let mut cells: Vec<Cell> = (0..a.rows)
        .flat_map(|y| (0..a.cols).map(move |x| (x, y)))
        .collect();

    let mut rec = Recorder::new();
    while !cells.is_empty() {
        #[allow(clippy::cast_possible_truncation)]
        let pick = cells.swap_remove(rng.below(cells.len() as u32) as usize);
        let color = rng.color();
        grid.fill_cell(pick, color)?;
        grid.set_gridline_color(color);
        rec.snapshot(&grid);
    }

    finish(&mut rec, &a.output, &a.render)?;
    Ok(())
}

// --- Informational ---

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, rgb) in Rgb::named() {
        println!("  {name:<8} {}  {rgb}", rgb.to_hex());
    }
    println!("  #505050   (or any other #RRGGBB)\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "gridviz";
    println!(
        "
Example invocations
-------------------
• Game of Life     : {bin} life --cols 64 --rows 48 --steps 200
• Reproducible run : {bin} life --seed 42 -o life.apng
• Greedy search    : {bin} search --start 1,1 --target 12,17
• Diagonal moves   : {bin} search --diagonal --cell-size 30
• Random fill      : {bin} fill --cols 8 --rows 8 --hold 1500
• Slower playback  : {bin} fill --duration 250 -o fill.gif
• Debug timings    : {bin} life --debug
"
    );
}
