//! Per-room Canvas2D layouts.

use crate::config::{DATA_FLOW_BLUE, LED_GREEN};
use crate::draw::{draw_data_flow, draw_server_rack};
use crate::{Color, DrawList, Point, Rect, RoomType};
use std::f64::consts::TAU;

/// A shape placed by a room layout.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Rack {
        rect: Rect,
        is_active: bool,
    },
    Flow {
        points: Vec<Point>,
        progress: f64,
        color: Color,
    },
}

impl LayoutElement {
    fn rack(x: f64, y: f64, width: f64, height: f64, is_active: bool) -> Self {
        LayoutElement::Rack {
            rect: Rect::new(x, y, width, height),
            is_active,
        }
    }

    pub fn paint(&self, list: &mut DrawList) {
        match self {
            LayoutElement::Rack { rect, is_active } => {
                draw_server_rack(list, rect.x, rect.y, rect.width, rect.height, *is_active)
            }
            LayoutElement::Flow {
                points,
                progress,
                color,
            } => draw_data_flow(list, points, *progress, *color),
        }
    }
}

/// Racks and flows for `room` on a `width` x `height` CSS-pixel surface at
/// `time` seconds since mount.
pub fn room_layout(
    room: RoomType,
    is_active: bool,
    width: f64,
    height: f64,
    time: f64,
) -> Vec<LayoutElement> {
    let rack = |x, y, w, h| LayoutElement::rack(x, y, w, h, is_active);

    match room {
        RoomType::ServerRoom => (0..4)
            .map(|i| rack(20.0 + i as f64 * 120.0, 50.0, 100.0, height - 100.0))
            .collect(),

        RoomType::DatabaseRoom => vec![
            rack(width / 2.0 - 75.0, 30.0, 150.0, height - 60.0),
            LayoutElement::Flow {
                points: vec![
                    Point::new(width / 4.0, height / 2.0),
                    Point::new(width / 2.0, height / 2.0),
                    Point::new(3.0 * width / 4.0, height / 2.0),
                ],
                progress: time.rem_euclid(3.0) / 3.0,
                color: DATA_FLOW_BLUE,
            },
        ],

        RoomType::CodeLaboratory => (0..3)
            .flat_map(|i| (0..2).map(move |j| (i, j)))
            .map(|(i, j)| {
                rack(
                    20.0 + i as f64 * 150.0,
                    30.0 + j as f64 * 200.0,
                    120.0,
                    150.0,
                )
            })
            .collect(),

        RoomType::ProjectWarehouse => [50.0, 150.0, 250.0]
            .into_iter()
            .map(|y| rack(50.0, y, width - 100.0, 80.0))
            .collect(),

        RoomType::CommunicationHub => {
            let cx = width / 2.0;
            let cy = height / 2.0;
            let mut elements = vec![rack(cx - 60.0, cy - 100.0, 120.0, 200.0)];
            for i in 0..6 {
                let angle = i as f64 / 6.0 * TAU;
                let x = cx + angle.cos() * 150.0 - 30.0;
                let y = cy + angle.sin() * 100.0 - 40.0;
                elements.push(rack(x, y, 60.0, 80.0));
                if is_active {
                    elements.push(LayoutElement::Flow {
                        points: vec![Point::new(cx, cy), Point::new(x + 30.0, y + 40.0)],
                        progress: (time * 2.0 + i as f64).rem_euclid(1.0),
                        color: LED_GREEN,
                    });
                }
            }
            elements
        }

        RoomType::SystemStatus => {
            let column = (width - 80.0) / 3.0;
            let mut elements = vec![rack(20.0, 20.0, width - 40.0, 60.0)];
            elements.extend(
                (0..3).map(|i| rack(20.0 + i as f64 * column, 100.0, column - 10.0, height - 140.0)),
            );
            elements
        }
    }
}
