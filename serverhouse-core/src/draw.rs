//! Immediate-mode 2D drawing, recorded as commands.
//!
//! Painters append [`DrawCommand`]s to a [`DrawList`]; a backend replays the
//! list onto a real context. Nothing in a list outlives the frame it was
//! built for.

use crate::config::{
    CIRCUIT_GRID_SIZE, CIRCUIT_NODE, CIRCUIT_TRACE, DATA_FLOW_GLOW, DATA_FLOW_WIDTH, LED_COLORS,
    LED_IDLE, LED_RADIUS, LED_SPACING, POWER_BAR, RACK_FRAME_ACTIVE, RACK_FRAME_IDLE,
    RACK_UNITS, RACK_UNIT_ACTIVE, RACK_UNIT_IDLE, VENT_ACTIVE, VENT_IDLE, VENT_TICKS,
};
use crate::{flow_path, Color, Point, Rect};

/// A single drawing-context operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    /// Open polyline; `glow` is the shadow blur radius (0 = none).
    StrokePath {
        points: Vec<Point>,
        color: Color,
        width: f64,
        glow: f64,
    },
    /// Global alpha for subsequent commands.
    SetAlpha(f64),
}

/// Ordered commands for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Drop all commands but keep the allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub(crate) fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.push(DrawCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    pub(crate) fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub(crate) fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Uniform random numbers in `[0, 1)`.
///
/// The browser feeds `Math.random()`; tests feed scripted sequences.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Rack with eight unit slots, three status LEDs per slot, ventilation
/// ticks, and a power bar when active.
pub fn draw_server_rack(
    list: &mut DrawList,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    is_active: bool,
) {
    let frame = if is_active {
        RACK_FRAME_ACTIVE
    } else {
        RACK_FRAME_IDLE
    };
    list.fill_rect(x, y, width, height, frame);

    let unit_fill = if is_active {
        RACK_UNIT_ACTIVE
    } else {
        RACK_UNIT_IDLE
    };
    let vent = if is_active { VENT_ACTIVE } else { VENT_IDLE };
    let unit_height = height / RACK_UNITS as f64;

    for unit in 0..RACK_UNITS {
        let unit_y = y + unit as f64 * unit_height;

        list.fill_rect(x + 5.0, unit_y + 2.0, width - 10.0, unit_height - 4.0, unit_fill);

        for (i, led) in LED_COLORS.iter().enumerate() {
            let color = if is_active { *led } else { LED_IDLE };
            let center = Point::new(x + 15.0 + i as f64 * LED_SPACING, unit_y + unit_height / 2.0);
            list.fill_circle(center, LED_RADIUS, color);
        }

        for tick in 0..VENT_TICKS {
            let tick_x = x + width - 30.0 + tick as f64 * 5.0;
            list.stroke_line(
                Point::new(tick_x, unit_y + 3.0),
                Point::new(tick_x, unit_y + unit_height - 3.0),
                vent,
                1.0,
            );
        }
    }

    if is_active {
        list.fill_rect(x + width - 8.0, y + 5.0, 3.0, 15.0, POWER_BAR);
    }
}

/// Glowing polyline revealed up to `progress`. No-op with fewer than two
/// points.
pub fn draw_data_flow(list: &mut DrawList, points: &[Point], progress: f64, color: Color) {
    let Some(path) = flow_path(points, progress) else {
        return;
    };
    list.push(DrawCommand::StrokePath {
        points: path,
        color,
        width: DATA_FLOW_WIDTH,
        glow: DATA_FLOW_GLOW,
    });
}

/// Sparse circuit-board traces and nodes. Each grid line is kept with
/// probability `density`, each node with `density / 2`.
pub fn draw_circuit_board(
    list: &mut DrawList,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    density: f64,
    rng: &mut dyn RandomSource,
) {
    let grid = CIRCUIT_GRID_SIZE;

    let mut i = 0.0;
    while i <= width {
        if rng.next_f64() < density {
            list.stroke_line(
                Point::new(x + i, y),
                Point::new(x + i, y + height),
                CIRCUIT_TRACE,
                1.0,
            );
        }
        i += grid;
    }

    let mut j = 0.0;
    while j <= height {
        if rng.next_f64() < density {
            list.stroke_line(
                Point::new(x, y + j),
                Point::new(x + width, y + j),
                CIRCUIT_TRACE,
                1.0,
            );
        }
        j += grid;
    }

    let mut i = 0.0;
    while i < width {
        let mut j = 0.0;
        while j < height {
            if rng.next_f64() < density * 0.5 {
                list.fill_circle(Point::new(x + i, y + j), 2.0, CIRCUIT_NODE);
            }
            j += grid;
        }
        i += grid;
    }
}
